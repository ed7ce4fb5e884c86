use rayon::prelude::*;

use crate::error::SolverResult;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::gauss::solve_gauss;
use crate::solvers::householder::solve_householder;
use crate::solvers::tridiagonal::solve_tridiagonal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Gauss,
    /// Thomas algorithm, the matrix must be tridiagonal.
    Tridiagonal,
    Householder,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Gauss, Method::Tridiagonal, Method::Householder];

    pub fn solve<T: Real>(&self, a: &DenseMatrix<T>, b: &[T]) -> SolverResult<Vec<T>> {
        match self {
            Method::Gauss => solve_gauss(a, b),
            Method::Tridiagonal => solve_tridiagonal(a, b),
            Method::Householder => solve_householder(a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::Tridiagonal => "tridiagonal",
            Method::Householder => "householder",
        }
    }
}

pub fn solve<T: Real>(method: Method, a: &DenseMatrix<T>, b: &[T]) -> SolverResult<Vec<T>> {
    method.solve(a, b)
}

/// Solve `a x = b` for every `b` in `rhs`, each one independently and in parallel.
pub fn solve_many<T: Real>(
    method: Method,
    a: &DenseMatrix<T>,
    rhs: &[Vec<T>],
) -> Vec<SolverResult<Vec<T>>> {
    rhs.par_iter().map(|b| method.solve(a, b)).collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
