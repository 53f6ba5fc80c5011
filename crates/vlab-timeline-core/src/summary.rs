//! Aggregate statistics over a timeline

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{ReportError, TimelineRecord};

/// Totals derived from the timeline records
///
/// The average is kept as an exact [`Decimal`]. Its one-decimal label is
/// produced by the float formatter, so ties that a binary float cannot
/// represent (1.15, 1.85) round the same way a `%.1f` format would.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of records aggregated
    pub record_count: usize,
    /// Sum of person-days over all records
    pub total_person_days: u32,
    /// Sum of engineer counts over all records
    pub total_engineers: u64,
    /// Exact mean of the engineer counts
    pub average_engineers: Decimal,
    /// Earliest start date
    pub first_start: NaiveDate,
    /// Latest end date
    pub last_end: NaiveDate,
}

impl Summary {
    /// Aggregate `records`, which must not be empty
    pub fn from_records(records: &[TimelineRecord]) -> Result<Self, ReportError> {
        let first_start = records.iter().map(|r| r.start).min().ok_or(ReportError::EmptyTimeline)?;
        let last_end = records.iter().map(|r| r.end).max().ok_or(ReportError::EmptyTimeline)?;

        let total_person_days = records.iter().map(|r| r.person_days).sum();
        let total_engineers: u64 = records.iter().map(|r| u64::from(r.engineers)).sum();
        let average_engineers = Decimal::from(total_engineers) / Decimal::from(records.len());

        Ok(Self {
            record_count: records.len(),
            total_person_days,
            total_engineers,
            average_engineers,
            first_start,
            last_end,
        })
    }

    /// Mean engineer count as a float
    pub fn average_f64(&self) -> f64 {
        self.total_engineers as f64 / self.record_count as f64
    }

    /// Average as shown in the report, e.g. "1.9"
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_f64())
    }

    /// Span of the whole timeline, e.g. "Aug-Nov 2024"
    pub fn period_label(&self) -> String {
        format!("{}-{}", self.first_start.format("%b"), self.last_end.format("%b %Y"))
    }

    /// Statistics line shown under the report title
    pub fn info_line(&self) -> String {
        format!(
            "Total Person-Days: {} | Average Team Size: {} Engineers",
            self.total_person_days,
            self.average_label()
        )
    }
}
