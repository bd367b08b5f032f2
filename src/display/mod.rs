//! Text rendering of matrices and points
//!
//! Values are laid out in right-aligned columns between bracket glyphs:
//!
//! ```text
//! ⎡1  0  0  -2⎤
//! ⎢0  1  0  -3⎥
//! ⎢0  0  1   0⎥
//! ⎣0  0  0   1⎦
//! ```
//!
//! The formatter precision, if any, is applied to every entry
//! (`format!("{:.3}", MatrixGrid(&m))`).

use crate::coordinates::Cartesian3;
use crate::transform::Matrix4;
use std::fmt;

/// Turns `-0`, `-0.00`, ... (tiny negatives after rounding) into unsigned zeros
fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Writes `rows` as a bracketed grid with right-aligned columns
fn write_grid(f: &mut fmt::Formatter<'_>, rows: &[Vec<f64>]) -> fmt::Result {
    let precision = f.precision();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    let v = if v == 0.0 { 0.0 } else { v };
                    let text = match precision {
                        Some(p) => format!("{:.*}", p, v),
                        None => format!("{}", v),
                    };
                    strip_negative_zero(text)
                })
                .collect()
        })
        .collect();

    let columns = cells.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
        .collect();

    let last = cells.len().saturating_sub(1);
    for (i, row) in cells.iter().enumerate() {
        let (open, close) = match (i, cells.len()) {
            (_, 1) => ('[', ']'),
            (0, _) => ('⎡', '⎤'),
            (i, _) if i == last => ('⎣', '⎦'),
            _ => ('⎢', '⎥'),
        };
        write!(f, "{}", open)?;
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:>width$}", cell, width = widths[c])?;
        }
        write!(f, "{}", close)?;
        if i != last {
            writeln!(f)?;
        }
    }
    Ok(())
}

/// Grid view of a 4×4 transform
#[derive(Debug, Clone, Copy)]
pub struct MatrixGrid<'a>(pub &'a Matrix4);

impl fmt::Display for MatrixGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<f64>> = self
            .0
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        write_grid(f, &rows)
    }
}

/// Column-vector view of a point
#[derive(Debug, Clone, Copy)]
pub struct PointColumn(pub Cartesian3);

impl fmt::Display for PointColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<f64>> = self.0.to_array().iter().map(|&v| vec![v]).collect();
        write_grid(f, &rows)
    }
}
