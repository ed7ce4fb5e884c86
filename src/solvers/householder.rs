use log::{debug, warn};

use crate::error::SolverResult;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::determinant::check_nonsingular;
use crate::solvers::elimination::{back_substitute, require_system};
use crate::utils::{norm, sub};

/// Householder matrix `I - 2 w w^T` acting on rows `k..` that zeroes column `k`
/// below the diagonal, or `None` when the column needs no reflection.
pub fn reflection<T: Real>(work: &DenseMatrix<T>, k: usize) -> SolverResult<Option<DenseMatrix<T>>> {
    let n = work.rows;
    let column: Vec<T> = (k..n).map(|i| work.at(i, k)).collect();

    let r = norm(&column);
    if r == T::zero() {
        debug!("householder step {}: column is zero, no reflection", k);
        return Ok(None);
    }

    let pivot = column[0];
    let sign = if pivot > T::zero() {
        T::one()
    } else if pivot < T::zero() {
        -T::one()
    } else {
        // sign(0) = 0 would reflect the column onto its negative
        warn!("householder step {}: zero pivot, reflecting with sign +1", k);
        T::one()
    };

    let mut shift = vec![T::zero(); column.len()];
    shift[0] = r * sign;
    let t = sub(&column, &shift)?;
    let t_norm = norm(&t);
    if t_norm == T::zero() {
        debug!("householder step {}: column already reduced", k);
        return Ok(None);
    }
    let w: Vec<T> = t.iter().map(|x| *x / t_norm).collect();

    let two = T::one() + T::one();
    let mut outer = DenseMatrix::new(n, n);
    for (i, wi) in w.iter().enumerate() {
        for (j, wj) in w.iter().enumerate() {
            outer.set(k + i, k + j, two * *wi * *wj);
        }
    }

    Ok(Some((&DenseMatrix::<T>::identity(n) - &outer)?))
}

pub fn solve_householder<T: Real>(a: &DenseMatrix<T>, b: &[T]) -> SolverResult<Vec<T>> {
    require_system(a, b)?;
    check_nonsingular(a)?;

    let n = a.rows;
    let mut work = a.augment_column(b)?;

    for k in 0..n - 1 {
        if let Some(h) = reflection(&work, k)? {
            work = (&h * &work)?;
            // numerically zero after the reflection
            for i in k + 1..n {
                work.set(i, k, T::zero());
            }
        }
    }

    back_substitute(&work)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
