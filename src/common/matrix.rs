use std::ops::{Index, IndexMut};

/// Dense square matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> Matrix<T> {
    pub fn new(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size).map(move |i| &self.data[index(i, i, self.size)])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.size, "column out of bounds");
        &self.data[index(row, col, self.size)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.size, "column out of bounds");
        &mut self.data[index(row, col, self.size)]
    }
}

fn index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_diagonal() {
        let mut matrix = Matrix::new(3, 0);
        matrix[(1, 2)] = 5;
        matrix[(2, 2)] = 7;

        assert_eq!(matrix[(1, 2)], 5);
        assert_eq!(matrix[(2, 1)], 0);
        assert_eq!(matrix.diagonal().copied().collect::<Vec<_>>(), vec![0, 0, 7]);
    }

    #[test]
    #[should_panic(expected = "column out of bounds")]
    fn column_out_of_bounds() {
        let matrix = Matrix::new(2, 0);
        let _ = matrix[(0, 2)];
    }

    #[test]
    fn empty() {
        let matrix = Matrix::<i32>::new(0, 0);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.diagonal().count(), 0);
    }
}
