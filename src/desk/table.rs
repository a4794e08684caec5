use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const DELIMITER: char = ',';

/// One column of a persisted record: the header name it is stored under,
/// how to parse a cell into the record, and how to format it back out.
///
/// Each entity declares an ordered `FIELDS` slice of these, so loading and
/// saving are exhaustively defined instead of discovered at runtime.
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub parse: fn(&mut T, &str) -> Result<()>,
    pub format: fn(&T) -> String,
}

/// Map a raw header cell onto a canonical field name: surrounding space
/// dropped, inner spaces removed, `%` spelled out.
fn canonical_column(raw: &str) -> String {
    raw.trim().replace(' ', "").replace('%', "Percent")
}

/// Parse delimited tabular text with a leading header row.
///
/// Unrecognized columns are skipped with a warning. An unparsable cell
/// leaves that field at its default and never drops the row. Rows shorter
/// or longer than the header are zipped to the shorter of the two.
pub fn parse_table<T: Default>(raw: &str, fields: &[FieldSpec<T>]) -> Vec<T> {
    let mut rows = Vec::new();
    let mut columns: Option<Vec<Option<&FieldSpec<T>>>> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(DELIMITER).collect();
        match &columns {
            None => {
                let mut mapped = Vec::with_capacity(cells.len());
                for cell in &cells {
                    let key = canonical_column(cell);
                    let spec = fields.iter().find(|f| f.name == key);
                    if spec.is_none() {
                        log::warn!("skipping unrecognized column \"{key}\"");
                    }
                    mapped.push(spec);
                }
                columns = Some(mapped);
            }
            Some(mapped) => {
                let mut record = T::default();
                for (cell, spec) in cells.iter().zip(mapped) {
                    let Some(spec) = spec else { continue };
                    let value = cell.trim();
                    if (spec.parse)(&mut record, value).is_err() {
                        log::debug!("dropping unparsable {} cell \"{value}\"", spec.name);
                    }
                }
                rows.push(record);
            }
        }
    }
    rows
}

/// Load a table from disk. A missing file is an empty collection, not an
/// error, so first runs work before `init` has been invoked.
pub fn read_table<T: Default>(path: &Path, fields: &[FieldSpec<T>]) -> Result<Vec<T>> {
    if !path.exists() {
        log::warn!("{} does not exist; starting empty", path.display());
        return Ok(Vec::new());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_table(&raw, fields))
}

pub fn render_table<T>(rows: &[T], fields: &[FieldSpec<T>]) -> String {
    let delim = DELIMITER.to_string();
    let mut out = String::new();
    let header: Vec<&str> = fields.iter().map(|f| f.name).collect();
    out.push_str(&header.join(&delim));
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = fields.iter().map(|f| (f.format)(row)).collect();
        out.push_str(&cells.join(&delim));
        out.push('\n');
    }
    out
}

/// Write a table atomically: render, stage in a temp file next to the
/// destination, persist into place.
pub fn write_table<T>(path: &Path, rows: &[T], fields: &[FieldSpec<T>]) -> Result<()> {
    write_atomic(path, &render_table(rows, fields))
}

pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to stage a write in {}", dir.display()))?;
    staged.write_all(contents.as_bytes())?;
    staged
        .persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
