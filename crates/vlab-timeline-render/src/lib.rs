//! # vlab-timeline-render
//!
//! Rendering backends for the project timeline report.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vlab_timeline_core::{timeline, Renderer, ReportConfig, TimelineReport};
//! use vlab_timeline_render::ExcelRenderer;
//!
//! let report = TimelineReport::new(ReportConfig::default(), timeline::virtual_lab_timeline())?;
//! let xlsx_bytes = ExcelRenderer::new().render(&report)?;
//! std::fs::write("timeline.xlsx", xlsx_bytes)?;
//! ```

pub mod excel;

pub use excel::ExcelRenderer;
