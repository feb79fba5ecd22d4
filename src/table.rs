//! Plain text exports: the coordinate table and the basis matrix.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::matrix::matrix_string;
use crate::sampler::TableRow;
use crate::NativeFloat;

/// Formats a row as `t = <t>, (<x>, <y>)` with two decimals for the coordinates.
pub fn format_row(row: &TableRow<NativeFloat>) -> String {
    format!(
        "t = {}, ({}, {})",
        format_parameter(row.t),
        fixed2(row.x),
        fixed2(row.y)
    )
}

/// Shortest decimal form of `t`, switching to exponent notation below 1e-6
/// and from 1e21 on with an explicit sign for positive exponents.
fn format_parameter(t: NativeFloat) -> String {
    // adding zero turns a negative zero into a positive one
    let t = t + 0.0;
    let magnitude = t.abs();
    if magnitude != 0.0 && magnitude.is_finite() && (magnitude < 1e-6 || magnitude >= 1e21) {
        let s = format!("{:e}", t);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", t)
}

/// Two decimals, an exact tie on the third decimal rounds away from zero.
fn fixed2(value: NativeFloat) -> String {
    let value = value + 0.0;
    // only odd multiples of 1/8 end exactly on a third decimal 5
    if (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0 {
        let rounded = (value.abs() * 100.0).ceil() / 100.0;
        return format!("{:.2}", rounded.copysign(value));
    }
    format!("{:.2}", value)
}

/// All rows, one per line.
pub fn format_table(rows: &[TableRow<NativeFloat>]) -> String {
    rows.iter().map(format_row).collect::<Vec<_>>().join("\n")
}

/// Write the table to `path`, logging every row.
pub fn write_table(path: &Path, rows: &[TableRow<NativeFloat>]) -> Result<()> {
    for row in rows {
        info!("{}", format_row(row));
    }
    fs::write(path, format_table(rows))?;
    info!(path = %path.display(), rows = rows.len(), "saved coordinate table");
    Ok(())
}

/// Write the basis matrix export to `path`.
pub fn save_matrix(path: &Path) -> Result<()> {
    fs::write(path, matrix_string())?;
    info!(path = %path.display(), "saved basis matrix");
    Ok(())
}
