use log::trace;

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::elimination::require_system;

/// Solve the tridiagonal system given by its three diagonals, without pivoting.
///
/// - `sub`: sub-diagonal \[n\] (`sub[0]` unused)
/// - `diag`: main diagonal \[n\]
/// - `sup`: super-diagonal \[n\] (`sup[n-1]` unused)
/// - `rhs`: right-hand side \[n\]
pub fn thomas_solve<T: Real>(sub: &[T], diag: &[T], sup: &[T], rhs: &[T]) -> SolverResult<Vec<T>> {
    let n = rhs.len();
    if n == 0 || sub.len() != n || diag.len() != n || sup.len() != n {
        return Err(SolverError::DimensionMismatch(format!(
            "diagonals of length {}, {}, {} for a right-hand side of length {}",
            sub.len(),
            diag.len(),
            sup.len(),
            n
        )));
    }

    let mut sup_prime = vec![T::zero(); n];
    let mut rhs_prime = vec![T::zero(); n];

    // Forward sweep: row k is normalized by its reduced diagonal, then used to
    // clear the sub-diagonal entry of row k + 1.
    let mut den = diag[0];
    for k in 0..n {
        if den == T::zero() {
            return Err(SolverError::SingularMatrix { step: k });
        }

        let carried = if k > 0 {
            sub[k] * rhs_prime[k - 1]
        } else {
            T::zero()
        };
        rhs_prime[k] = (rhs[k] - carried) / den;

        if k + 1 < n {
            sup_prime[k] = sup[k] / den;
            den = diag[k + 1] - sub[k + 1] * sup_prime[k];
        }
        trace!("thomas step {}: pivot {}", k, den);
    }

    // Back substitution
    let mut x = vec![T::zero(); n];
    x[n - 1] = rhs_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs_prime[i] - sup_prime[i] * x[i + 1];
    }

    Ok(x)
}

/// Only the main diagonal and its two neighbours are read; anything further
/// out is ignored, not validated.
pub fn solve_tridiagonal<T: Real>(a: &DenseMatrix<T>, b: &[T]) -> SolverResult<Vec<T>> {
    require_system(a, b)?;

    let n = a.rows;
    let sub: Vec<T> = (0..n)
        .map(|i| if i > 0 { a.at(i, i - 1) } else { T::zero() })
        .collect();
    let diag = a.diagonal();
    let sup: Vec<T> = (0..n)
        .map(|i| if i + 1 < n { a.at(i, i + 1) } else { T::zero() })
        .collect();

    thomas_solve(&sub, &diag, &sup, b)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
