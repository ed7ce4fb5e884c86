use num_traits::Float;
use std::iter::zip;
use std::iter::Sum;

use crate::error::{SolverError, SolverResult};

fn check_lengths<T>(a: &[T], b: &[T]) -> SolverResult<()> {
    if a.len() != b.len() {
        return Err(SolverError::InvalidVectorOperation {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

pub fn dot<T: Float + Sum<T>>(a: &[T], b: &[T]) -> SolverResult<T> {
    check_lengths(a, b)?;
    Ok(zip(a.iter(), b.iter()).map(|(x, y)| *x * *y).sum())
}

pub fn sub<T: Float>(a: &[T], b: &[T]) -> SolverResult<Vec<T>> {
    check_lengths(a, b)?;
    Ok(zip(a.iter(), b.iter()).map(|(x, y)| *x - *y).collect())
}

// a + s * b
pub fn scale_add<T: Float>(a: &[T], s: T, b: &[T]) -> SolverResult<Vec<T>> {
    check_lengths(a, b)?;
    Ok(zip(a.iter(), b.iter()).map(|(x, y)| *x + s * *y).collect())
}

pub fn norm<T: Float + Sum<T>>(a: &[T]) -> T {
    a.iter().map(|x| *x * *x).sum::<T>().sqrt()
}

pub fn max_abs_diff<T: Float>(a: &[T], b: &[T]) -> SolverResult<T> {
    check_lengths(a, b)?;
    Ok(zip(a.iter(), b.iter()).fold(T::zero(), |acc, (x, y)| acc.max((*x - *y).abs())))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
