use crate::{
    errors::{IndexError, ShapeError},
    iterator::{IntoIter, Iter},
    shape::{Shape, Shaped, RANK},
    storage::Storage,
};
use log::{debug, trace};
use num::Zero;
use std::ops::Index;

/// A `rows × cols` grid of `T`, stored row-major in a single owned buffer.
///
/// Every constructor copies its input, so a `Matrix` never aliases caller
/// data. Element access is always bounds-checked: [`Matrix::get`] returns an
/// [`IndexError`], and indexing with `m[[i, j]]` panics with the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    storage: Storage<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Fills a `rows × cols` matrix in row-major order, calling `f` with each `[i, j]`.
    ///
    /// Panics with "capacity overflow" if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(&[usize; RANK]) -> T) -> Self {
        Self {
            storage: Storage::from_fn([rows, cols], f),
            rows,
            cols,
        }
    }

    /// Builds a `rows × cols` matrix with every element set to zero.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero,
    {
        Self::from_fn(rows, cols, |_| T::zero())
    }

    /// Copies the top-left `rows × cols` block out of `src`.
    ///
    /// `src` can be anything that looks like a list of rows: `Vec<Vec<T>>`,
    /// `&[&[T]]`, `[[T; N]; M]` and so on. Rows or columns beyond the
    /// requested shape are ignored. A source that is too small in either
    /// direction is rejected with a [`ShapeError`].
    pub fn from_rows<R>(rows: usize, cols: usize, src: &[R]) -> Result<Self, ShapeError>
    where
        T: Clone,
        R: AsRef<[T]>,
    {
        if src.len() < rows {
            debug!("from_rows: wanted {} rows, source has {}", rows, src.len());
            return Err(ShapeError::MissingRows {
                expected: rows,
                found: src.len(),
            });
        }

        let mut truncated = src.len() > rows;
        for (row, r) in src.iter().take(rows).enumerate() {
            let found = r.as_ref().len();
            if found < cols {
                debug!(
                    "from_rows: row {} has {} elements, wanted {}",
                    row, found, cols
                );
                return Err(ShapeError::ShortRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            truncated |= found > cols;
        }

        if truncated {
            trace!(
                "from_rows: source larger than {}x{}, copying the leading block only",
                rows,
                cols
            );
        }

        Ok(Self::from_fn(rows, cols, |idx| {
            src[idx[0]].as_ref()[idx[1]].clone()
        }))
    }

    /// Returns a copy of the element at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<T, IndexError>
    where
        T: Clone,
    {
        self.storage.get(&[x, y], self.size()).cloned()
    }

    /// `[rows, cols]`
    pub fn size(&self) -> Shape {
        [self.rows, self.cols]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn into_storage(self) -> Storage<T> {
        self.storage
    }
}

impl<T> Shaped for Matrix<T> {
    fn shape(&self) -> Shape {
        self.size()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(vals: [[T; C]; R]) -> Self {
        Self {
            storage: Storage {
                data: vals.into_iter().flatten().collect(),
            },
            rows: R,
            cols: C,
        }
    }
}

impl<T> Index<&[usize; RANK]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: &[usize; RANK]) -> &Self::Output {
        match self.storage.get(idx, self.size()) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> Index<[usize; RANK]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; RANK]) -> &Self::Output {
        self.index(&idx)
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = ([usize; RANK], T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = ([usize; RANK], &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basics() {
        let m: Matrix<i32> = Matrix::from_rows(2, 3, &[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.size(), [2, 3]);
        assert_eq!(m.get(0, 0), Ok(1));
        assert_eq!(m.get(1, 2), Ok(6));
        assert_eq!(m[[0, 1]], 2);
        assert_eq!(m[&[1, 0]], 4);
    }

    #[test]
    fn test_zeros() {
        let m: Matrix<f64> = Matrix::zeros(3, 2);
        assert_eq!(m.size(), [3, 2]);
        assert_eq!(m.len(), 6);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m.get(i, j), Ok(0.0));
            }
        }
    }

    #[test]
    fn test_empty() {
        let m: Matrix<i32> = Matrix::zeros(0, 0);
        assert_eq!(m.size(), [0, 0]);
        assert!(m.is_empty());
        assert_eq!(
            m.get(0, 0),
            Err(IndexError::OutOfBounds {
                idx: [0, 0],
                shape: [0, 0]
            })
        );

        let m: Matrix<i32> = Matrix::zeros(4, 0);
        assert_eq!(m.size(), [4, 0]);
        assert!(m.is_empty());
        assert!(m.get(0, 0).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m: Matrix<u8> = Matrix::zeros(2, 3);
        assert_eq!(
            m.get(2, 0),
            Err(IndexError::OutOfBounds {
                idx: [2, 0],
                shape: [2, 3]
            })
        );
        assert_eq!(
            m.get(0, 3),
            Err(IndexError::OutOfBounds {
                idx: [0, 3],
                shape: [2, 3]
            })
        );
        assert!(m.get(usize::MAX, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "index [0, 3] out of bounds for matrix of shape [2, 3]")]
    fn test_index_out_of_bounds() {
        let m: Matrix<u8> = Matrix::zeros(2, 3);
        let _v = m[[0, 3]];
    }

    #[test]
    fn test_from_rows_vec() {
        let src = vec![vec![1.5, 2.5], vec![3.5, 4.5]];
        let m: Matrix<f64> = Matrix::from_rows(2, 2, &src).unwrap();
        assert_eq!(m.get(1, 1), Ok(4.5));

        let borrowed: Vec<&[f64]> = src.iter().map(|r| r.as_slice()).collect();
        assert_eq!(Matrix::<f64>::from_rows(2, 2, &borrowed).unwrap(), m);
    }

    #[test]
    fn test_from_rows_truncates() {
        let m: Matrix<i32> = Matrix::from_rows(1, 2, &[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.size(), [1, 2]);
        assert_eq!(m, Matrix::from([[1, 2]]));
    }

    #[test]
    fn test_from_rows_too_small() {
        let src = vec![vec![1, 2, 3], vec![4, 5]];
        assert_eq!(
            Matrix::<i32>::from_rows(3, 2, &src),
            Err(ShapeError::MissingRows {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Matrix::<i32>::from_rows(2, 3, &src),
            Err(ShapeError::ShortRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert!(Matrix::<i32>::from_rows(2, 2, &src).is_ok());
    }

    #[test]
    fn test_from_rows_copies() {
        let mut src = vec![vec![String::from("a"), String::from("b")]];
        let m: Matrix<String> = Matrix::from_rows(1, 2, &src).unwrap();
        src[0][0].push('!');
        src.clear();

        assert_eq!(m.get(0, 0), Ok(String::from("a")));
        assert_eq!(m[[0, 1]], "b");
    }

    #[test]
    fn test_from_array() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.size(), [2, 3]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[[1, 0]], 4);
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(2, 3, |idx| idx[0] * 10 + idx[1]);
        assert_eq!(m, Matrix::from([[0, 1, 2], [10, 11, 12]]));
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Matrix::from([[vec![1], vec![2]]]);
        let b = a.clone();
        drop(a);
        assert_eq!(b.get(0, 1), Ok(vec![2]));
    }

    #[test]
    fn test_shaped() {
        let m: Matrix<i64> = Matrix::zeros(4, 5);
        assert_eq!(m.shape(), [4, 5]);
        assert_eq!(Shaped::num_elems(&m), 20);
        assert!(m.in_bounds(&[3, 4]));
        assert!(!m.in_bounds(&[4, 0]));
    }
}
