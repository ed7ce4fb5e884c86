use log::debug;

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::elimination::{pivot_row, require_square};
use crate::utils::scale_add;

pub fn inverse<T: Real>(m: &DenseMatrix<T>) -> SolverResult<DenseMatrix<T>> {
    require_square(m)?;

    let n = m.rows;
    let mut aug = m.augment(&DenseMatrix::identity(n))?;

    for k in 0..n {
        let pivot_idx = pivot_row(&aug, k, k);
        if pivot_idx != k {
            debug!("inverse step {}: swapping rows {} and {}", k, k, pivot_idx);
            aug.swap_rows(k, pivot_idx);
        }

        let pivot = aug.at(k, k);
        if pivot == T::zero() {
            return Err(SolverError::SingularMatrix { step: k });
        }

        for x in aug.row_mut(k) {
            *x = *x / pivot;
        }

        let pivot_line = aug.row(k).to_vec();
        for i in (0..n).filter(|&i| i != k) {
            let factor = aug.at(i, k);
            if factor == T::zero() {
                continue;
            }
            let reduced = scale_add(aug.row(i), -factor, &pivot_line)?;
            aug.row_mut(i).copy_from_slice(&reduced);
        }
    }

    Ok(aug.columns(n, 2 * n))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
