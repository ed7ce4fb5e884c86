use itertools::Itertools;

use crate::config::FormatConfig;
use crate::format::number::{format_number, format_with};
use crate::matrix::matrix_dense::{DenseMatrix, Real};

fn as_f64<T: Real>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Multi-line bracketed layout, columns left-aligned to their widest entry:
///
/// ```text
/// ⌈ 1     -0.5⌉
/// | 0.25   2  |
/// ⌊-3      1  ⌋
/// ```
pub fn render_matrix<T: Real>(m: &DenseMatrix<T>, config: &FormatConfig) -> String {
    let cells: Vec<Vec<String>> = (0..m.rows)
        .map(|r| {
            m.row(r)
                .iter()
                .map(|x| format_with(as_f64(*x), config))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..m.cols)
        .map(|c| {
            cells
                .iter()
                .map(|row| row[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    cells
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (open, close) = if i == 0 {
                ('⌈', '⌉')
            } else if i + 1 == m.rows {
                ('⌊', '⌋')
            } else {
                ('|', '|')
            };
            let body = row
                .iter()
                .zip(widths.iter())
                .map(|(text, width)| format!("{:<width$}", text, width = *width))
                .join("  ");
            format!("{}{}{}", open, body, close)
        })
        .join("\n")
}

/// `x = (a; b; c)`, entries never sign-padded.
pub fn render_vector<T: Real>(x: &[T], config: &FormatConfig) -> String {
    format!(
        "x = ({})",
        x.iter()
            .map(|v| format_number(as_f64(*v), config.accuracy, false))
            .join("; ")
    )
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
