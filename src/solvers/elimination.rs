use log::{debug, trace};

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Real};

#[derive(Debug, Clone)]
pub struct Triangular<T> {
    pub matrix: DenseMatrix<T>,
    /// Row exchanges performed while pivoting.
    pub swaps: usize,
}

impl<T: Real> Triangular<T> {
    pub fn sign(&self) -> T {
        if self.swaps % 2 == 0 {
            T::one()
        } else {
            -T::one()
        }
    }
}

pub fn require_square<T: Real>(m: &DenseMatrix<T>) -> SolverResult<()> {
    if m.rows == 0 || !m.is_square() {
        return Err(SolverError::DimensionMismatch(format!(
            "expected a non-empty square matrix, got {}x{}",
            m.rows, m.cols
        )));
    }
    Ok(())
}

pub fn require_system<T: Real>(a: &DenseMatrix<T>, b: &[T]) -> SolverResult<()> {
    require_square(a)?;
    if b.len() != a.rows {
        return Err(SolverError::DimensionMismatch(format!(
            "right-hand side has {} entries for a {}x{} matrix",
            b.len(),
            a.rows,
            a.cols
        )));
    }
    Ok(())
}

/// Row in `from..` with the largest magnitude in column `col`, lowest index on ties.
pub fn pivot_row<T: Real>(m: &DenseMatrix<T>, col: usize, from: usize) -> usize {
    let mut best = from;
    let mut max = m.at(from, col).abs();
    for r in from + 1..m.rows {
        let value = m.at(r, col).abs();
        if value > max {
            best = r;
            max = value;
        }
    }
    best
}

/// Reduce an `n x m` matrix (`m >= n`) to upper-triangular form.
///
/// The input is left untouched. Fails with `SingularMatrix` when the pivot of a
/// step is exactly zero after pivoting; the last diagonal entry is not checked
/// since no elimination divides by it.
pub fn triangularize<T: Real>(m: &DenseMatrix<T>) -> SolverResult<Triangular<T>> {
    if m.rows == 0 || m.cols < m.rows {
        return Err(SolverError::DimensionMismatch(format!(
            "cannot triangularize a {}x{} matrix",
            m.rows, m.cols
        )));
    }

    let mut u = m.clone();
    let mut swaps = 0;

    for k in 0..u.rows - 1 {
        let pivot_idx = pivot_row(&u, k, k);
        if pivot_idx != k {
            debug!("elimination step {}: swapping rows {} and {}", k, k, pivot_idx);
            u.swap_rows(k, pivot_idx);
            swaps += 1;
        }

        let pivot = u.at(k, k);
        if pivot == T::zero() {
            debug!("elimination step {}: zero pivot", k);
            return Err(SolverError::SingularMatrix { step: k });
        }

        for i in k + 1..u.rows {
            // taken before the row is updated, column k is overwritten last
            let factor = u.at(i, k) / pivot;
            for j in (k + 1..u.cols).rev() {
                let value = u.at(i, j) - u.at(k, j) * factor;
                u.set(i, j, value);
            }
            u.set(i, k, T::zero());
        }
        trace!("elimination step {} done, pivot {}", k, pivot);
    }

    Ok(Triangular { matrix: u, swaps })
}

pub fn back_substitute<T: Real>(u: &DenseMatrix<T>) -> SolverResult<Vec<T>> {
    let n = u.rows;
    if u.cols != n + 1 {
        return Err(SolverError::DimensionMismatch(format!(
            "expected an augmented {}x{} matrix, got {}x{}",
            n,
            n + 1,
            u.rows,
            u.cols
        )));
    }

    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let diag = u.at(i, i);
        if diag == T::zero() {
            return Err(SolverError::SingularMatrix { step: i });
        }
        let acc: T = (i + 1..n).map(|j| u.at(i, j) * x[j]).sum();
        x[i] = (u.at(i, n) - acc) / diag;
    }

    Ok(x)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
