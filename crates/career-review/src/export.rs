//! CSV export of application rows.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::record::ApplicationSummary;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    position: &'a str,
    status: &'a str,
    submitted_at: String,
}

/// Write `rows` as CSV with a header line. Returns the number of rows
/// written.
pub fn write_csv<'a, W: Write>(
    rows: impl IntoIterator<Item = &'a ApplicationSummary>,
    writer: W,
) -> Result<usize> {
    let mut out = csv::Writer::from_writer(writer);
    let mut written = 0;
    for row in rows {
        out.serialize(CsvRow {
            id: row.id.as_str(),
            name: &row.name,
            email: &row.email,
            position: row.position.as_str(),
            status: row.status.as_str(),
            submitted_at: row.submitted_at.to_rfc3339(),
        })?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Render `rows` as a CSV document.
pub fn to_csv_string<'a>(rows: impl IntoIterator<Item = &'a ApplicationSummary>) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
