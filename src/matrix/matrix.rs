use crate::error::SolverResult;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> SolverResult<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;

    fn is_square(&self) -> bool;
    fn is_upper_triangular(&self) -> bool;
}
