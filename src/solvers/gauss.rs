use crate::error::SolverResult;
use crate::matrix::matrix_dense::{DenseMatrix, Real};
use crate::solvers::determinant::check_nonsingular;
use crate::solvers::elimination::{back_substitute, require_system, triangularize};

/// Shape and singularity of `a` are checked before `[a | b]` is eliminated.
pub fn solve_gauss<T: Real>(a: &DenseMatrix<T>, b: &[T]) -> SolverResult<Vec<T>> {
    require_system(a, b)?;
    check_nonsingular(a)?;

    let aug = a.augment_column(b)?;
    let t = triangularize(&aug)?;
    back_substitute(&t.matrix)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::matrix::matrix::Matrix;
    use crate::utils::max_abs_diff;
    use approx::assert_abs_diff_eq;

    fn m(lines: Vec<Vec<f64>>) -> DenseMatrix<f64> {
        DenseMatrix::from_list(lines).unwrap()
    }

    #[test]
    fn test_solve_gauss_2x2() {
        let a = m(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        let x = solve_gauss(&a, &[3.0, 5.0]).unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_gauss_residual() {
        let a = m(vec![
            vec![1.0, 0.42, 0.54, 0.66],
            vec![0.42, 1.0, 0.32, 0.44],
            vec![0.54, 0.32, 1.0, 0.22],
            vec![0.66, 0.44, 0.22, 1.0],
        ]);
        let b = [0.3, 0.5, 0.7, 0.9];
        let x = solve_gauss(&a, &b).unwrap();
        assert!(max_abs_diff(&a.mul_vector(&x).unwrap(), &b).unwrap() < 1e-12);
    }

    #[test]
    fn test_solve_gauss_zero_leading_entry() {
        let a = m(vec![vec![0.0, 2.0], vec![3.0, 0.0]]);
        let x = solve_gauss(&a, &[4.0, 9.0]).unwrap();
        assert_eq!(x, vec![3.0, 2.0]);
    }

    #[test]
    fn test_solve_gauss_errors() {
        let singular = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert!(matches!(
            solve_gauss(&singular, &[1.0, 2.0]),
            Err(SolverError::SingularMatrix { .. })
        ));

        let a = m(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert!(matches!(
            solve_gauss(&a, &[1.0, 2.0, 3.0]),
            Err(SolverError::DimensionMismatch(_))
        ));

        let rect = m(vec![vec![2.0, 1.0, 0.0], vec![1.0, 3.0, 0.0]]);
        assert!(matches!(
            solve_gauss(&rect, &[1.0, 2.0]),
            Err(SolverError::DimensionMismatch(_))
        ));
    }
}
