use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::cart::CartLine;

/// Errors that can occur when reading command rows or writing cart lines
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("failed to write cart: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush cart output: {0}")]
    Flush(#[from] io::Error),
}

/// A menu sheet row. Missing columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MenuRow {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
    pub disponible: String,
    pub categoria: String,
    pub url: String,
    pub badge: String,
}

impl MenuRow {
    /// Only rows marked `TRUE` (any case) are on sale.
    pub fn is_available(&self) -> bool {
        self.disponible.trim().eq_ignore_ascii_case("TRUE")
    }
}

/// An extras sheet row. Missing columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtraRow {
    pub id: String,
    pub nombre: String,
    pub precio: String,
    pub tipo: String,
    pub categoria_aplica: String,
}

/// A cart command row: `op,product,extras,note`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommandRow {
    /// 1-indexed line in the source file.
    #[serde(skip)]
    pub line: usize,
    pub op: String,
    pub product: String,
    /// Extra names separated by `;`.
    pub extras: String,
    pub note: String,
}

impl CommandRow {
    pub fn extra_names(&self) -> impl Iterator<Item = &str> {
        self.extras
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

const OUTPUT_HEADER: [&str; 7] = [
    "line", "product", "name", "quantity", "extras", "note", "subtotal",
];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    line: String,
    product: &'a str,
    name: &'a str,
    quantity: u32,
    extras: String,
    note: &'a str,
    subtotal: String,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}

/// Deserialize every record, padding short rows with empty cells so
/// missing trailing columns read as empty.
fn padded_rows<R: io::Read, D: DeserializeOwned>(
    mut reader: csv::Reader<R>,
) -> Result<impl Iterator<Item = Result<D, csv::Error>>, csv::Error> {
    let headers = reader.headers()?.clone();

    Ok(reader.into_records().map(move |result| {
        let mut record = result?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.deserialize(Some(&headers))
    }))
}

/// Parse the rows of a menu sheet
pub fn read_menu_rows(text: &str) -> Result<Vec<MenuRow>, csv::Error> {
    padded_rows(reader_builder().from_reader(text.as_bytes()))?.collect()
}

/// Parse the rows of an extras sheet
pub fn read_extra_rows(text: &str) -> Result<Vec<ExtraRow>, csv::Error> {
    padded_rows(reader_builder().from_reader(text.as_bytes()))?.collect()
}

/// Read cart commands from a csv file
pub fn read_commands(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<CommandRow, CsvError>>, CsvError> {
    let path = path.as_ref();
    let open_error = |source| CsvError::Open {
        path: path.display().to_string(),
        source,
    };
    let reader = reader_builder().from_path(path).map_err(open_error)?;
    let rows = padded_rows::<_, CommandRow>(reader).map_err(open_error)?;

    Ok(rows.enumerate().map(|(idx, result)| {
        let line = idx + 2; // 1-indexed, skip header
        let mut row = result.map_err(|source| CsvError::Parse { line, source })?;
        row.line = line;
        Ok(row)
    }))
}

/// Write cart lines in csv format
pub fn write_lines<'a>(
    lines: impl IntoIterator<Item = &'a CartLine>,
    out: impl io::Write,
) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    // written up front so an empty cart still has a header
    writer.write_record(OUTPUT_HEADER)?;

    for line in lines {
        let extras = line
            .extras()
            .iter()
            .map(|e| format!("{}:{}", e.name, e.price))
            .collect::<Vec<_>>()
            .join(";");
        writer.serialize(OutputRow {
            line: line.key().to_string(),
            product: line.product_id(),
            name: line.product_name(),
            quantity: line.quantity(),
            extras,
            note: line.note(),
            subtotal: line.subtotal().to_string(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
