#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
}
pub mod solvers {
    pub mod determinant;
    pub mod elimination;
    pub mod gauss;
    pub mod householder;
    pub mod inverse;
    pub mod method;
    pub mod tridiagonal;
}
pub mod format {
    pub mod display;
    pub mod number;
}

pub mod config;
pub mod error;
pub mod input;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use config::FormatConfig;
pub use error::{SolverError, SolverResult};
pub use format::display::{render_matrix, render_vector};
pub use format::number::format_number;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::{DenseMatrix, Real};
pub use solvers::determinant::{cofactor_determinant, determinant};
pub use solvers::gauss::solve_gauss;
pub use solvers::householder::solve_householder;
pub use solvers::inverse::inverse;
pub use solvers::method::{solve, solve_many, Method};
pub use solvers::tridiagonal::{solve_tridiagonal, thomas_solve};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linsolve(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::determinant, m)?)?;
    m.add_function(wrap_pyfunction!(python::inverse, m)?)?;
    m.add_function(wrap_pyfunction!(python::solve_gauss, m)?)?;
    m.add_function(wrap_pyfunction!(python::solve_tridiagonal, m)?)?;
    m.add_function(wrap_pyfunction!(python::solve_householder, m)?)?;
    m.add_function(wrap_pyfunction!(python::format_number, m)?)?;
    Ok(())
}
