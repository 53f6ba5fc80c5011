//! # vlab-timeline-core
//!
//! Core domain model for the Virtual Lab LMS project timeline report.
//!
//! This crate provides:
//! - Domain types: `TimelineRecord`, `Summary`, `TimelineReport`
//! - The rollout timeline itself (`timeline::virtual_lab_timeline`)
//! - The backend-independent sheet layout (`ReportLayout`)
//! - Report configuration (`ReportConfig`)
//! - The `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use vlab_timeline_core::{timeline, ReportConfig, TimelineReport};
//!
//! let report = TimelineReport::new(ReportConfig::default(), timeline::virtual_lab_timeline())?;
//! assert_eq!(report.summary.total_person_days, 198);
//! assert_eq!(report.summary.average_label(), "1.9");
//!
//! let layout = report.layout();
//! assert_eq!(layout.rows.len(), 18);
//! # Ok::<(), vlab_timeline_core::ReportError>(())
//! ```

pub mod config;
pub mod layout;
pub mod record;
pub mod summary;
pub mod timeline;

pub use config::ReportConfig;
pub use layout::{CellStyle, CellValue, Column, LayoutRow, ReportLayout, RowKind};
pub use record::TimelineRecord;
pub use summary::Summary;

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Report
// ============================================================================

/// A timeline together with its aggregates and presentation settings
#[derive(Clone, Debug)]
pub struct TimelineReport {
    pub config: ReportConfig,
    pub records: Vec<TimelineRecord>,
    pub summary: Summary,
}

impl TimelineReport {
    /// Aggregate `records` into a report
    pub fn new(config: ReportConfig, records: Vec<TimelineRecord>) -> Result<Self, ReportError> {
        let summary = Summary::from_records(&records)?;
        Ok(Self {
            config,
            records,
            summary,
        })
    }

    /// Lay the report out as sheet rows
    pub fn layout(&self) -> ReportLayout {
        ReportLayout::build(self)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output backend for a report
pub trait Renderer {
    type Output;

    /// Render the report to the output format
    fn render(&self, report: &TimelineReport) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Report construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Timeline has no records to summarize")]
    EmptyTimeline,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid sheet name {0:?}: must be 1-31 characters without []:*?/\\, not quoted, not \"History\"")]
    InvalidSheetName(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
