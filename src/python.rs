use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SolverError;
use crate::format::number;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;
use crate::solvers;

fn value_error(error: SolverError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn matrix(lines: Vec<Vec<f64>>) -> PyResult<DenseMatrix<f64>> {
    DenseMatrix::from_list(lines).map_err(value_error)
}

#[pyfunction]
pub fn determinant(a: Vec<Vec<f64>>) -> PyResult<f64> {
    solvers::determinant::determinant(&matrix(a)?).map_err(value_error)
}

#[pyfunction]
pub fn inverse(a: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    match solvers::inverse::inverse(&matrix(a)?) {
        Ok(result) => Ok(result.to_list()),
        Err(error) => Err(value_error(error)),
    }
}

#[pyfunction]
pub fn solve_gauss(a: Vec<Vec<f64>>, b: Vec<f64>) -> PyResult<Vec<f64>> {
    solvers::gauss::solve_gauss(&matrix(a)?, &b).map_err(value_error)
}

#[pyfunction]
pub fn solve_tridiagonal(a: Vec<Vec<f64>>, b: Vec<f64>) -> PyResult<Vec<f64>> {
    solvers::tridiagonal::solve_tridiagonal(&matrix(a)?, &b).map_err(value_error)
}

#[pyfunction]
pub fn solve_householder(a: Vec<Vec<f64>>, b: Vec<f64>) -> PyResult<Vec<f64>> {
    solvers::householder::solve_householder(&matrix(a)?, &b).map_err(value_error)
}

#[pyfunction]
#[pyo3(signature = (value, accuracy = 8, pad_sign = false))]
pub fn format_number(value: f64, accuracy: u32, pad_sign: bool) -> String {
    number::format_number(value, accuracy, pad_sign)
}
