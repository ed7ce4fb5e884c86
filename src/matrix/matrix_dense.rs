use num_traits::Float;
use rayon::prelude::*;

use crate::error::{SolverError, SolverResult};
use crate::matrix::matrix::Matrix;
use crate::utils::dot;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops;

pub trait Real:  // Avoid repeating all the traits
    Float
    + Sum<Self>
    + Display
    + Debug
    + Send
    + Sync
{
}

impl<T> Real for T where T: Float + Sum<T> + Display + Debug + Send + Sync {}

/// Dense row-major matrix, entry `(r, c)` lives at `cells[r * cols + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Real> Matrix<T> for DenseMatrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> SolverResult<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some(bad) = lines.iter().position(|l| l.len() != cols) {
            return Err(SolverError::DimensionMismatch(format!(
                "row {} has {} entries, expected {}",
                bad,
                lines[bad].len(),
                cols
            )));
        }

        Ok(DenseMatrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn identity(n: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn transpose(&self) -> DenseMatrix<T> {
        DenseMatrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn is_upper_triangular(&self) -> bool {
        (0..self.rows).all(|i| (0..i.min(self.cols)).all(|j| self.at(i, j) == T::zero()))
    }
}

impl<T: Real> DenseMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// `[self | rhs]`, both sides must have the same number of rows.
    pub fn augment(&self, rhs: &DenseMatrix<T>) -> SolverResult<DenseMatrix<T>> {
        if self.rows != rhs.rows {
            return Err(SolverError::DimensionMismatch(format!(
                "cannot append {} rows to {} rows",
                rhs.rows, self.rows
            )));
        }

        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().chain(rhs.row(r).iter()).copied())
                .collect(),
        })
    }

    pub fn augment_column(&self, column: &[T]) -> SolverResult<DenseMatrix<T>> {
        let column = DenseMatrix {
            rows: column.len(),
            cols: 1,
            cells: column.to_vec(),
        };
        self.augment(&column)
    }

    pub fn columns(&self, start: usize, end: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows: self.rows,
            cols: end - start,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r)[start..end].iter().copied())
                .collect(),
        }
    }

    pub fn minor(&self, row: usize, col: usize) -> DenseMatrix<T> {
        DenseMatrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    self.row(r)
                        .iter()
                        .enumerate()
                        .filter(move |(c, _)| *c != col)
                        .map(|(_, x)| *x)
                })
                .collect(),
        }
    }

    pub fn mul_vector(&self, v: &[T]) -> SolverResult<Vec<T>> {
        (0..self.rows).map(|r| dot(self.row(r), v)).collect()
    }

    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols)).map(|i| self.at(i, i)).collect()
    }
}

impl<T: Real> ops::Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = SolverResult<DenseMatrix<T>>;

    fn sub(self, rhs: &DenseMatrix<T>) -> SolverResult<DenseMatrix<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(SolverError::DimensionMismatch(format!(
                "cannot subtract {}x{} from {}x{}",
                rhs.rows, rhs.cols, self.rows, self.cols
            )));
        }

        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
        })
    }
}

impl<T: Real> ops::Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = SolverResult<DenseMatrix<T>>;

    fn mul(self, rhs: &DenseMatrix<T>) -> SolverResult<DenseMatrix<T>> {
        if self.cols != rhs.rows {
            return Err(SolverError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let mut result = DenseMatrix::new(self.rows, rhs.cols);
        if rhs.cols == 0 {
            return Ok(result);
        }

        result
            .cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(r, row)| {
                let lhs = self.row(r);
                for (c, cell) in row.iter_mut().enumerate() {
                    *cell = lhs
                        .iter()
                        .enumerate()
                        .map(|(k, a)| *a * rhs.at(k, c))
                        .sum();
                }
            });

        Ok(result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
