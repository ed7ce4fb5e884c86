use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;

fn parse_row(line: usize, text: &str) -> SolverResult<Vec<f64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| SolverError::Parse {
                line,
                message: format!("not a number: '{}'", token),
            })
        })
        .collect()
}

pub fn parse_system(text: &str) -> SolverResult<(DenseMatrix<f64>, Vec<f64>)> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, first) = lines.next().ok_or_else(|| SolverError::Parse {
        line: 1,
        message: "missing matrix size".into(),
    })?;
    let n: usize = first.parse().map_err(|_| SolverError::Parse {
        line,
        message: format!("invalid matrix size: '{}'", first),
    })?;
    if n == 0 {
        return Err(SolverError::DimensionMismatch("matrix size is zero".into()));
    }

    let rows = lines
        .by_ref()
        .take(n)
        .map(|(line, l)| parse_row(line, l))
        .collect::<SolverResult<Vec<Vec<f64>>>>()?;
    let b = match lines.next() {
        Some((line, l)) => parse_row(line, l)?,
        None => vec![],
    };

    if rows.len() != n || b.len() != n || rows.iter().any(|r| r.len() != n) {
        return Err(SolverError::DimensionMismatch(format!(
            "expected {} rows of {} values and a right-hand side of {} values",
            n, n, n
        )));
    }

    debug!("parsed a {}x{} system", n, n);
    Ok((DenseMatrix::from_list(rows)?, b))
}

pub fn load_system(path: impl AsRef<Path>) -> SolverResult<(DenseMatrix<f64>, Vec<f64>)> {
    let text = fs::read_to_string(path)?;
    parse_system(&text)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
