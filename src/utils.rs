//! Assorted validation and rendering helpers.

use crate::error::{ApspError, Result};
use std::fmt;

/// Reject arc costs that cannot take part in a shortest-path comparison.
///
/// `+inf` is accepted and means "no arc"; NaN and `-inf` are not costs.
#[inline]
pub fn check_arc_cost(cost: f64) -> Result<()> {
    if cost.is_nan() {
        Err(ApspError::invalid_argument("arc cost is NaN"))
    } else if cost == f64::NEG_INFINITY {
        Err(ApspError::invalid_argument("arc cost is -inf"))
    } else {
        Ok(())
    }
}

/// Write an `n × n` table with every cell right-aligned to the widest one.
///
/// Rows are separated by `\n` (no trailing newline) and cells by a single
/// space, so an empty matrix renders as the empty string.
pub fn render_table<F>(f: &mut fmt::Formatter<'_>, n: usize, mut cell: F) -> fmt::Result
where
    F: FnMut(usize, usize) -> String,
{
    let cells: Vec<String> = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .map(|(row, col)| cell(row, col))
        .collect();
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    for (row, chunk) in cells.chunks(n.max(1)).enumerate() {
        if row > 0 {
            writeln!(f)?;
        }
        for (col, text) in chunk.iter().enumerate() {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{text:>width$}")?;
        }
    }
    Ok(())
}
