//! Rendering of a [`TableView`] as a terminal table, CSV, or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ColorChoice;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabview_core::{NO_MATCHING_DATA, TableView};
use tabview_model::{Scalar, SortDirection};

/// Output format for rendered rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub width: Option<u16>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: ColorChoice::Auto,
            width: None,
        }
    }
}

pub fn write_view<W: Write>(view: &TableView<'_>, options: &RenderOptions, out: &mut W) -> Result<()> {
    match options.format {
        OutputFormat::Table => {
            let table = build_table(view, options);
            writeln!(out, "{table}").context("write table")?;
        }
        OutputFormat::Csv => write_csv(view, out)?,
        OutputFormat::Json => write_json(view, out)?,
    }
    Ok(())
}

pub fn build_table(view: &TableView<'_>, options: &RenderOptions) -> Table {
    let mut table = Table::new();
    if !view.headers.is_empty() {
        table.set_header(
            view.headers
                .iter()
                .map(|header| header_cell(header, sort_marker(view, header)))
                .collect::<Vec<_>>(),
        );
    }
    apply_table_style(&mut table, options);
    if view.is_empty() {
        let mut placeholder = vec![dim_cell(NO_MATCHING_DATA)];
        placeholder.extend((1..view.headers.len()).map(|_| dim_cell("")));
        table.add_row(placeholder);
        return table;
    }
    for row in &view.rows {
        table.add_row(
            view.headers
                .iter()
                .map(|header| value_cell(row.get(header)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn write_csv<W: Write>(view: &TableView<'_>, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if !view.headers.is_empty() {
        writer
            .write_record(view.headers.iter())
            .context("write csv header")?;
    }
    for row in &view.rows {
        writer
            .write_record(view.headers.iter().map(|header| {
                row.get(header)
                    .map(Scalar::to_search_text)
                    .unwrap_or_default()
            }))
            .context("write csv row")?;
    }
    writer.flush().context("flush csv output")?;
    Ok(())
}

pub fn write_json<W: Write>(view: &TableView<'_>, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &view.rows).context("write json rows")?;
    writeln!(out).context("write json rows")?;
    Ok(())
}

pub fn apply_table_style(table: &mut Table, options: &RenderOptions) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(width) = options.width {
        table.set_width(width);
    }
    match options.color {
        ColorChoice::Always => {
            table.enforce_styling();
        }
        ColorChoice::Never => {
            table.force_no_tty();
        }
        ColorChoice::Auto => {}
    }
}

fn sort_marker(view: &TableView<'_>, header: &str) -> Option<SortDirection> {
    match view.active_sort {
        Some((active, direction)) if active == header => Some(direction),
        _ => None,
    }
}

fn header_cell(label: &str, sort: Option<SortDirection>) -> Cell {
    let text = match sort {
        Some(SortDirection::Ascending) => format!("{label} ▲"),
        Some(SortDirection::Descending) => format!("{label} ▼"),
        _ => label.to_string(),
    };
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&Scalar>) -> Cell {
    match value {
        None | Some(Scalar::Null) => dim_cell("-"),
        Some(value @ Scalar::Number(_)) => Cell::new(value).set_alignment(CellAlignment::Right),
        Some(value) => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
