//! Spreadsheet export adapter using `rust_xlsxwriter`.
//!
//! The workbook has three sheets. Each starts with a bold title in the first
//! row and leaves the second row empty:
//!
//! - `SIT Data` - one row per actor (Role, Actor Name, Location, Contact)
//! - `SAT Data` - one row per relationship rating, all values as text
//! - `MAT Data` - per completed tool a bold heading, key/value rows, then a
//!   blank separator row

use async_trait::async_trait;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Timestamp;
use crate::domain::market::MarketTool;
use crate::domain::session::SessionStore;
use crate::ports::{ExportError, ExportFormat, StoreExporter};

const TITLE_FONT_SIZE: u32 = 14;

/// One spreadsheet row; `heading` rows are written bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub cells: Vec<String>,
    pub heading: bool,
}

impl SheetRow {
    fn cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            heading: false,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self {
            cells: vec![text.into()],
            heading: true,
        }
    }

    fn blank() -> Self {
        Self {
            cells: Vec::new(),
            heading: false,
        }
    }
}

/// Sheet contents laid out before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub name: &'static str,
    pub title: &'static str,
    /// Rows written from the third spreadsheet row on.
    pub rows: Vec<SheetRow>,
}

/// Exporter producing an `.xlsx` workbook.
#[derive(Debug, Clone, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    /// Lays out all three sheets for a store.
    ///
    /// # Errors
    ///
    /// - `SerializationFailed` if market records cannot be flattened to cells
    pub fn layout(store: &SessionStore) -> Result<Vec<SheetLayout>, ExportError> {
        Ok(vec![
            identification_sheet(store),
            analysis_sheet(store),
            market_sheet(store)?,
        ])
    }

    fn encode(sheets: &[SheetLayout]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let title_format = Format::new().set_bold().set_font_size(TITLE_FONT_SIZE);
        let heading_format = Format::new().set_bold();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet, &title_format, &heading_format)?;
        }

        workbook.save_to_buffer()
    }
}

#[async_trait]
impl StoreExporter for XlsxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    async fn export(
        &self,
        store: &SessionStore,
        _exported_at: &Timestamp,
    ) -> Result<Vec<u8>, ExportError> {
        let sheets = Self::layout(store)?;
        Self::encode(&sheets).map_err(|e| ExportError::EncodingFailed(e.to_string()))
    }
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &SheetLayout,
    title_format: &Format,
    heading_format: &Format,
) -> Result<(), XlsxError> {
    worksheet.set_name(sheet.name)?;
    worksheet.write_string_with_format(0, 0, sheet.title, title_format)?;

    for (offset, row) in sheet.rows.iter().enumerate() {
        let row_num = (offset + 2) as u32;
        for (col, value) in row.cells.iter().enumerate() {
            let col_num = col as u16;
            if row.heading {
                worksheet.write_string_with_format(row_num, col_num, value, heading_format)?;
            } else {
                worksheet.write_string(row_num, col_num, value)?;
            }
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Sheet layouts
// ─────────────────────────────────────────────────────────────────────────────

fn identification_sheet(store: &SessionStore) -> SheetLayout {
    let mut rows = vec![SheetRow::cells(["Role", "Actor Name", "Location", "Contact"])];
    rows.extend(store.identification().actors().map(|actor| {
        SheetRow::cells([
            actor.role.to_string(),
            actor.name.clone(),
            actor.location.clone(),
            actor.contact.clone(),
        ])
    }));

    SheetLayout {
        name: "SIT Data",
        title: "Stakeholder Identification Data",
        rows,
    }
}

fn analysis_sheet(store: &SessionStore) -> SheetLayout {
    let mut rows = vec![SheetRow::cells([
        "Stakeholder",
        "Power",
        "Interest",
        "Legitimacy",
        "Urgency",
        "Interactions",
        "Tasks",
        "Knowledge",
    ])];
    rows.extend(store.analysis().relationship_data.iter().map(|rating| {
        SheetRow::cells([
            store.stakeholder_label(&rating.stakeholder),
            rating.power.to_string(),
            rating.interest.to_string(),
            rating.legitimacy.to_string(),
            rating.urgency.to_string(),
            rating.interactions.clone(),
            rating.tasks.clone(),
            rating.knowledge.clone(),
        ])
    }));

    SheetLayout {
        name: "SAT Data",
        title: "Stakeholder Analysis Data",
        rows,
    }
}

fn market_sheet(store: &SessionStore) -> Result<SheetLayout, ExportError> {
    let mut rows = Vec::new();
    let market = sheet_value(store.market())?;

    for tool in MarketTool::all() {
        let Some(data) = market.get(tool.key()) else {
            continue;
        };
        rows.push(SheetRow::heading(tool.key()));
        match data {
            Value::Array(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    rows.push(SheetRow::cells([format!("#{}", i + 1)]));
                    rows.extend(key_value_rows(entry));
                }
            }
            other => rows.extend(key_value_rows(other)),
        }
        rows.push(SheetRow::blank());
    }

    Ok(SheetLayout {
        name: "MAT Data",
        title: "Market Analysis Data",
        rows,
    })
}

fn sheet_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, ExportError> {
    serde_json::to_value(value).map_err(|e| ExportError::SerializationFailed(e.to_string()))
}

fn key_value_rows(value: &Value) -> Vec<SheetRow> {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, v)| SheetRow::cells([key.clone(), cell_text(v)]))
            .collect(),
        other => vec![SheetRow::cells([cell_text(other)])],
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
