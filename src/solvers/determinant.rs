use log::debug;

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::elimination::{require_square, triangularize};

fn diagonal_product<T: Real>(m: &DenseMatrix<T>) -> T {
    m.diagonal().into_iter().fold(T::one(), |acc, x| acc * x)
}

/// Eliminate `m` and return the signed diagonal product, failing on the first
/// zero pivot including the last one.
fn signed_pivot_product<T: Real>(m: &DenseMatrix<T>) -> SolverResult<T> {
    let t = triangularize(m)?;
    let last = m.rows - 1;
    if t.matrix.at(last, last) == T::zero() {
        return Err(SolverError::SingularMatrix { step: last });
    }
    Ok(t.sign() * diagonal_product(&t.matrix))
}

/// Determinant through elimination with partial pivoting.
///
/// A singular matrix gives zero, not an error. Triangular input is read off
/// its diagonal directly.
pub fn determinant<T: Real>(m: &DenseMatrix<T>) -> SolverResult<T> {
    require_square(m)?;
    if m.is_upper_triangular() {
        return Ok(diagonal_product(m));
    }

    match signed_pivot_product(m) {
        Ok(det) => Ok(det),
        Err(SolverError::SingularMatrix { step }) => {
            debug!("determinant: zero pivot at step {}", step);
            Ok(T::zero())
        }
        Err(error) => Err(error),
    }
}

pub fn check_nonsingular<T: Real>(m: &DenseMatrix<T>) -> SolverResult<()> {
    require_square(m)?;
    signed_pivot_product(m).map(|_| ())
}

/// Determinant by cofactor expansion along the first row.
///
/// Exponential in the size of `m`; kept as a reference to check
/// [`determinant`] against on small inputs.
pub fn cofactor_determinant<T: Real>(m: &DenseMatrix<T>) -> SolverResult<T> {
    require_square(m)?;
    Ok(cofactor_expansion(m))
}

fn cofactor_expansion<T: Real>(m: &DenseMatrix<T>) -> T {
    if m.rows == 1 {
        return m.at(0, 0);
    }

    (0..m.cols)
        .map(|j| {
            let term = m.at(0, j) * cofactor_expansion(&m.minor(0, j));
            if j % 2 == 0 {
                term
            } else {
                -term
            }
        })
        .sum()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    fn m(lines: Vec<Vec<f64>>) -> DenseMatrix<f64> {
        DenseMatrix::from_list(lines).unwrap()
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(determinant(&m(vec![vec![-4.5]])).unwrap(), -4.5);
        assert_eq!(cofactor_determinant(&m(vec![vec![-4.5]])).unwrap(), -4.5);

        let a = m(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert_abs_diff_eq!(determinant(&a).unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(cofactor_determinant(&a).unwrap(), 5.0);

        // one swap flips the sign
        let a = m(vec![vec![1.0, 3.0], vec![2.0, 1.0]]);
        assert_abs_diff_eq!(determinant(&a).unwrap(), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_triangular_shortcut() {
        let a = m(vec![
            vec![2.0, 7.0, -1.0],
            vec![0.0, 3.0, 4.0],
            vec![0.0, 0.0, -0.5],
        ]);
        assert_eq!(determinant(&a).unwrap(), -3.0);
    }

    #[test]
    fn test_determinant_singular() {
        assert_eq!(determinant(&m(vec![vec![1.0, 2.0], vec![2.0, 4.0]])).unwrap(), 0.0);

        let zero_row = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![7.0, 8.0, 9.5],
        ]);
        assert_eq!(determinant(&zero_row).unwrap(), 0.0);
        assert_eq!(cofactor_determinant(&zero_row).unwrap(), 0.0);

        let same_rows = m(vec![
            vec![0.3, 1.7, -2.2],
            vec![4.1, 5.0, 0.6],
            vec![0.3, 1.7, -2.2],
        ]);
        assert_eq!(determinant(&same_rows).unwrap(), 0.0);

        assert!(check_nonsingular(&same_rows).unwrap_err().is_singular());
        assert!(check_nonsingular(&m(vec![vec![2.0, 1.0], vec![1.0, 3.0]])).is_ok());
    }

    #[test]
    fn test_determinant_not_square() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            determinant(&a),
            Err(SolverError::DimensionMismatch(_))
        ));
        assert!(matches!(
            cofactor_determinant(&a),
            Err(SolverError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_determinant_matches_cofactor() {
        let mut rng = rand::thread_rng();
        for n in 1..=6 {
            let cells: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let a = DenseMatrix { rows: n, cols: n, cells };

            let fast = determinant(&a).unwrap();
            let slow = cofactor_determinant(&a).unwrap();
            assert!(
                (fast - slow).abs() <= 1e-9 * slow.abs().max(1e3),
                "n = {n}: {fast} != {slow}"
            );
        }
    }

    #[test]
    fn test_determinant_f32() {
        let a = DenseMatrix::<f32>::from_list(vec![vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
        assert_abs_diff_eq!(determinant(&a).unwrap(), -6.0f32, epsilon = 1e-5);
    }
}
