//! Excel timeline report renderer
//!
//! Writes a single-sheet XLSX workbook from a [`ReportLayout`]:
//! - three merged title rows spanning columns A:I (title, subtitle, statistics)
//! - a blue header band with white bold text
//! - one bordered, wrapped, top-left aligned row per timeline activity
//! - a grey bold summary row carrying the totals
//!
//! Column widths and row heights come from the layout's [`Column`] and
//! [`RowKind`] definitions, so the renderer makes no content decisions.

use rust_xlsxwriter::{DocProperties, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;
use vlab_timeline_core::layout::{HorizontalAlign, VerticalAlign, HEADER_ROW, LAST_COLUMN};
use vlab_timeline_core::{
    CellStyle, CellValue, Column, RenderError, Renderer, ReportLayout, RowKind, TimelineReport,
};

/// Excel timeline report renderer
#[derive(Clone, Debug, Default)]
pub struct ExcelRenderer {
    /// Freeze the title block and header while scrolling
    pub freeze_header: bool,
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the title rows and header visible while scrolling
    pub fn freeze_header(mut self) -> Self {
        self.freeze_header = true;
        self
    }

    /// Generate Excel workbook bytes
    pub fn render_to_bytes(&self, report: &TimelineReport) -> Result<Vec<u8>, RenderError> {
        let layout = report.layout();
        tracing::debug!(
            sheet = %layout.sheet_name,
            rows = layout.rows.len(),
            "rendering timeline workbook"
        );

        let mut workbook = Workbook::new();
        let properties = DocProperties::new()
            .set_title(report.config.title.as_str())
            .set_subject(report.config.subtitle.as_str());
        workbook.set_properties(&properties);

        let formats = ExcelFormats::new();
        let sheet = workbook.add_worksheet();
        self.write_sheet(sheet, &layout, &formats)?;

        workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))
    }

    /// Render and write the workbook to `path`
    ///
    /// The parent directory must already exist.
    pub fn save(&self, report: &TimelineReport, path: &Path) -> Result<(), RenderError> {
        let bytes = self.render(report)?;
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved timeline workbook");
        Ok(())
    }

    fn write_sheet(
        &self,
        sheet: &mut Worksheet,
        layout: &ReportLayout,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        sheet
            .set_name(layout.sheet_name.as_str())
            .map_err(|e| RenderError::Format(e.to_string()))?;

        for column in Column::ALL {
            sheet.set_column_width(column.index(), column.width()).ok();
        }

        for (index, layout_row) in layout.rows.iter().enumerate() {
            let row = index as u32;
            let format = formats.for_kind(layout_row.kind);

            if layout_row.kind.is_merged() {
                let text = match layout_row.cells.first() {
                    Some(CellValue::Text(text)) => text.clone(),
                    Some(CellValue::Number(n)) => n.to_string(),
                    None => String::new(),
                };
                sheet
                    .merge_range(row, 0, row, LAST_COLUMN, &text, format)
                    .map_err(|e| RenderError::Format(e.to_string()))?;
            } else {
                for (col, value) in layout_row.cells.iter().enumerate() {
                    Self::write_cell(sheet, row, col as u16, value, format)?;
                }
            }

            if let Some(height) = layout_row.kind.height() {
                sheet.set_row_height(row, height).ok();
            }
        }

        if self.freeze_header {
            sheet.set_freeze_panes(HEADER_ROW + 1, 0).ok();
        }

        Ok(())
    }

    fn write_cell(
        sheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
        format: &Format,
    ) -> Result<(), RenderError> {
        let result = match value {
            CellValue::Text(text) => sheet.write_string_with_format(row, col, text, format),
            CellValue::Number(n) => sheet.write_number_with_format(row, col, *n, format),
        };
        result.map_err(|e| RenderError::Format(e.to_string()))?;
        Ok(())
    }
}

/// Reusable Excel formats, one per row kind
struct ExcelFormats {
    title: Format,
    subtitle: Format,
    info: Format,
    header: Format,
    body: Format,
    summary: Format,
}

impl ExcelFormats {
    fn new() -> Self {
        Self {
            title: create_format(&RowKind::Title.style()),
            subtitle: create_format(&RowKind::Subtitle.style()),
            info: create_format(&RowKind::Info.style()),
            header: create_format(&RowKind::Header.style()),
            body: create_format(&RowKind::Body.style()),
            summary: create_format(&RowKind::Summary.style()),
        }
    }

    fn for_kind(&self, kind: RowKind) -> &Format {
        match kind {
            RowKind::Title => &self.title,
            RowKind::Subtitle => &self.subtitle,
            RowKind::Info => &self.info,
            RowKind::Header => &self.header,
            RowKind::Body => &self.body,
            RowKind::Summary => &self.summary,
        }
    }
}

/// Translate a layout style into an Excel format
fn create_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if let Some(fill) = style.fill {
        format = format.set_background_color(fill);
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(color);
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if style.bold {
        format = format.set_bold();
    }
    if style.italic {
        format = format.set_italic();
    }
    if style.border {
        format = format.set_border(FormatBorder::Thin);
    }
    if style.wrap {
        format = format.set_text_wrap();
    }

    format = format.set_align(match style.horizontal {
        HorizontalAlign::Left => FormatAlign::Left,
        HorizontalAlign::Center => FormatAlign::Center,
    });
    format.set_align(match style.vertical {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Center => FormatAlign::VerticalCenter,
    })
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, report: &TimelineReport) -> Result<Vec<u8>, RenderError> {
        if report.records.is_empty() {
            return Err(RenderError::InvalidData("No records to render".into()));
        }
        self.render_to_bytes(report)
    }
}
