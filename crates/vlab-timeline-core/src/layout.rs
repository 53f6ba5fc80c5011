//! Report layout
//!
//! [`ReportLayout`] is the backend-independent form of the spreadsheet: every
//! row in sheet order, each cell's value, and the presentation attributes of
//! each row. Renderers translate it cell by cell; nothing about the table's
//! content is decided after this point.
//!
//! ## Sheet structure
//!
//! ```text
//! row 0   | Virtual Lab LMS - TaRL Assessment System                  | merged A:I
//! row 1   | Project Timeline: August - November 2024                  | merged A:I
//! row 2   | Total Person-Days: 198 | Average Team Size: 1.9 Engineers | merged A:I
//! row 3   | Month | Week | Dates | Activity | ... | Responsible      | header
//! row 4.. | August 2024 | Week 1-2 | Aug 1-14 | ...                  | body
//! last    | TOTAL |  | Aug-Nov 2024 | Project Summary | ...          | summary
//! ```

use crate::{Summary, TimelineRecord, TimelineReport};

/// Number of merged title rows above the header
pub const TITLE_ROWS: u32 = 3;

/// Row index of the column header
pub const HEADER_ROW: u32 = TITLE_ROWS;

/// Header row height in points
pub const HEADER_HEIGHT: f64 = 30.0;

/// Body and summary row height in points
pub const BODY_HEIGHT: f64 = 50.0;

/// Columns of the timeline table, in sheet order (A..I)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Month,
    Week,
    Dates,
    Activity,
    Description,
    Deliverables,
    Engineers,
    PersonDays,
    Responsible,
}

impl Column {
    pub const ALL: [Self; 9] = [
        Self::Month,
        Self::Week,
        Self::Dates,
        Self::Activity,
        Self::Description,
        Self::Deliverables,
        Self::Engineers,
        Self::PersonDays,
        Self::Responsible,
    ];

    /// Zero-based column index
    pub fn index(self) -> u16 {
        self as u16
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Dates => "Dates",
            Self::Activity => "Activity",
            Self::Description => "Description",
            Self::Deliverables => "Deliverables",
            Self::Engineers => "Number of Engineers",
            Self::PersonDays => "Person-Days",
            Self::Responsible => "Responsible",
        }
    }

    /// Column width in character units
    pub fn width(self) -> f64 {
        match self {
            Self::Month => 15.0,
            Self::Week => 12.0,
            Self::Dates => 15.0,
            Self::Activity => 30.0,
            Self::Description => 50.0,
            Self::Deliverables => 40.0,
            Self::Engineers => 18.0,
            Self::PersonDays => 15.0,
            Self::Responsible => 25.0,
        }
    }
}

/// Index of the last column
pub const LAST_COLUMN: u16 = Column::ALL.len() as u16 - 1;

/// A cell value
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Role of a row, which determines its presentation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    Title,
    Subtitle,
    Info,
    Header,
    Body,
    Summary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
}

/// Presentation attributes shared by every cell of a row
#[derive(Clone, Debug, PartialEq)]
pub struct CellStyle {
    /// Solid fill color (0xRRGGBB)
    pub fill: Option<u32>,
    /// Font color (0xRRGGBB)
    pub font_color: Option<u32>,
    /// Font size in points; `None` keeps the workbook default
    pub font_size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    /// Thin border on all four sides
    pub border: bool,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub wrap: bool,
}

impl CellStyle {
    fn title(size: f64) -> Self {
        Self {
            fill: None,
            font_color: None,
            font_size: Some(size),
            bold: true,
            italic: false,
            border: false,
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Center,
            wrap: false,
        }
    }

    fn body() -> Self {
        Self {
            fill: None,
            font_color: None,
            font_size: None,
            bold: false,
            italic: false,
            border: true,
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Top,
            wrap: true,
        }
    }
}

impl RowKind {
    /// Style applied to every cell in rows of this kind
    pub fn style(self) -> CellStyle {
        match self {
            Self::Title => CellStyle::title(16.0),
            Self::Subtitle => CellStyle::title(14.0),
            Self::Info => CellStyle {
                bold: false,
                italic: true,
                ..CellStyle::title(12.0)
            },
            Self::Header => CellStyle {
                fill: Some(0x36_60_92),
                font_color: Some(0xFF_FF_FF),
                font_size: Some(12.0),
                bold: true,
                horizontal: HorizontalAlign::Center,
                vertical: VerticalAlign::Center,
                ..CellStyle::body()
            },
            Self::Body => CellStyle::body(),
            Self::Summary => CellStyle {
                fill: Some(0xE7_E6_E6),
                bold: true,
                ..CellStyle::body()
            },
        }
    }

    /// Title rows hold one value spanning all columns
    pub fn is_merged(self) -> bool {
        matches!(self, Self::Title | Self::Subtitle | Self::Info)
    }

    /// Fixed row height, if any
    pub fn height(self) -> Option<f64> {
        match self {
            Self::Header => Some(HEADER_HEIGHT),
            Self::Body | Self::Summary => Some(BODY_HEIGHT),
            Self::Title | Self::Subtitle | Self::Info => None,
        }
    }
}

/// One row of the sheet
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRow {
    pub kind: RowKind,
    /// Cell values from column A; merged rows hold a single value
    pub cells: Vec<CellValue>,
}

impl LayoutRow {
    fn merged(kind: RowKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            cells: vec![CellValue::Text(text.into())],
        }
    }
}

/// The complete sheet, ready to render
#[derive(Clone, Debug, PartialEq)]
pub struct ReportLayout {
    pub sheet_name: String,
    /// Rows in sheet order, starting at row 0
    pub rows: Vec<LayoutRow>,
}

impl ReportLayout {
    pub fn build(report: &TimelineReport) -> Self {
        let summary = &report.summary;

        let mut rows = Vec::with_capacity(report.records.len() + 5);
        rows.push(LayoutRow::merged(RowKind::Title, report.config.title.as_str()));
        rows.push(LayoutRow::merged(RowKind::Subtitle, report.config.subtitle.as_str()));
        rows.push(LayoutRow::merged(RowKind::Info, summary.info_line()));
        rows.push(LayoutRow {
            kind: RowKind::Header,
            cells: Column::ALL.iter().map(|c| CellValue::from(c.header())).collect(),
        });
        rows.extend(report.records.iter().map(|record| LayoutRow {
            kind: RowKind::Body,
            cells: record_cells(record),
        }));
        rows.push(LayoutRow {
            kind: RowKind::Summary,
            cells: summary_cells(summary),
        });

        Self {
            sheet_name: report.config.sheet_name.clone(),
            rows,
        }
    }

    /// Zero-based index of the last row
    pub fn last_row(&self) -> u32 {
        self.rows.len().saturating_sub(1) as u32
    }

    pub fn body_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Body)
    }

    pub fn summary_row(&self) -> Option<&LayoutRow> {
        self.rows.iter().find(|r| r.kind == RowKind::Summary)
    }

    /// Value at `(row, column)`, if that cell is populated
    pub fn cell(&self, row: u32, column: Column) -> Option<&CellValue> {
        self.rows
            .get(row as usize)
            .and_then(|r| r.cells.get(column.index() as usize))
    }
}

fn record_cells(record: &TimelineRecord) -> Vec<CellValue> {
    Column::ALL
        .iter()
        .map(|column| -> CellValue {
            match column {
                Column::Month => record.month_label().into(),
                Column::Week => record.week.as_str().into(),
                Column::Dates => record.dates_label().into(),
                Column::Activity => record.activity.as_str().into(),
                Column::Description => record.description.as_str().into(),
                Column::Deliverables => record.deliverables.as_str().into(),
                Column::Engineers => record.engineers.into(),
                Column::PersonDays => record.person_days.into(),
                Column::Responsible => record.responsible.as_str().into(),
            }
        })
        .collect()
}

fn summary_cells(summary: &Summary) -> Vec<CellValue> {
    Column::ALL
        .iter()
        .map(|column| -> CellValue {
            match column {
                Column::Month => "TOTAL".into(),
                Column::Week => "".into(),
                Column::Dates => summary.period_label().into(),
                Column::Activity => "Project Summary".into(),
                Column::Description => "Total effort across all activities".into(),
                Column::Deliverables => "Complete TaRL assessment system implementation".into(),
                Column::Engineers => format!("{} (avg)", summary.average_label()).into(),
                Column::PersonDays => summary.total_person_days.into(),
                Column::Responsible => "All Teams".into(),
            }
        })
        .collect()
}
