//! Timeline records
//!
//! A [`TimelineRecord`] is one activity row of the project timeline. The
//! month and date-range labels shown in the report are derived from the
//! record's start and end dates rather than stored as text.

use chrono::{Datelike, NaiveDate};

/// One activity in the project timeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineRecord {
    /// Activity name
    pub activity: String,
    /// First calendar day of the activity
    pub start: NaiveDate,
    /// Last calendar day of the activity (inclusive)
    pub end: NaiveDate,
    /// Week label within the month ("Week 1-2")
    pub week: String,
    /// Free-text description of the work
    pub description: String,
    /// Free-text list of deliverables
    pub deliverables: String,
    /// Number of engineers assigned
    pub engineers: u32,
    /// Effort in person-days
    pub person_days: u32,
    /// Team or party responsible
    pub responsible: String,
}

impl TimelineRecord {
    /// Create a record spanning `start..=end`
    pub fn new(activity: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            activity: activity.into(),
            start,
            end,
            week: String::new(),
            description: String::new(),
            deliverables: String::new(),
            engineers: 0,
            person_days: 0,
            responsible: String::new(),
        }
    }

    pub fn week(mut self, week: impl Into<String>) -> Self {
        self.week = week.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn deliverables(mut self, deliverables: impl Into<String>) -> Self {
        self.deliverables = deliverables.into();
        self
    }

    pub fn engineers(mut self, engineers: u32) -> Self {
        self.engineers = engineers;
        self
    }

    pub fn person_days(mut self, person_days: u32) -> Self {
        self.person_days = person_days;
        self
    }

    pub fn responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    /// Month label, e.g. "August 2024"
    pub fn month_label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }

    /// Date range label, e.g. "Aug 1-14" or "Oct 28-Nov 1" across months
    pub fn dates_label(&self) -> String {
        if self.start.year() == self.end.year() && self.start.month() == self.end.month() {
            format!("{}-{}", self.start.format("%b %-d"), self.end.day())
        } else {
            format!("{}-{}", self.start.format("%b %-d"), self.end.format("%b %-d"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn record_builder() {
        let record = TimelineRecord::new("Setup", date(2024, 8, 1), date(2024, 8, 14))
            .week("Week 1-2")
            .description("Deploy")
            .deliverables("Deployed")
            .engineers(3)
            .person_days(30)
            .responsible("Technical Team");

        assert_eq!(record.activity, "Setup");
        assert_eq!(record.week, "Week 1-2");
        assert_eq!(record.engineers, 3);
        assert_eq!(record.person_days, 30);
        assert_eq!(record.responsible, "Technical Team");
    }

    #[test]
    fn month_label_uses_start_date() {
        let record = TimelineRecord::new("x", date(2024, 9, 2), date(2024, 9, 6));
        assert_eq!(record.month_label(), "September 2024");
    }

    #[test]
    fn dates_label_within_month() {
        let record = TimelineRecord::new("x", date(2024, 8, 15), date(2024, 8, 31));
        assert_eq!(record.dates_label(), "Aug 15-31");

        let single_digit = TimelineRecord::new("x", date(2024, 9, 2), date(2024, 9, 6));
        assert_eq!(single_digit.dates_label(), "Sep 2-6");
    }

    #[test]
    fn dates_label_across_months() {
        let record = TimelineRecord::new("x", date(2024, 10, 28), date(2024, 11, 1));
        assert_eq!(record.dates_label(), "Oct 28-Nov 1");
    }
}
