use crate::{
    matrix::Matrix,
    shape::{Shape, Shaped, RANK},
    storage::nth_idx,
};
use std::iter::Map;

/// Row-major iterator over `([row, col], &value)` pairs.
pub struct Iter<'a, T> {
    t: &'a Matrix<T>,
    cur: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(t: &'a Matrix<T>) -> Self {
        Self { t, cur: 0 }
    }

    pub fn values(self) -> Map<Iter<'a, T>, impl FnMut(([usize; RANK], &'a T)) -> &'a T> {
        self.map(|(_, v)| v)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ([usize; RANK], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.t.len() {
            return None;
        }

        let t = self.t;
        let idx = nth_idx(self.cur, t.shape());
        self.cur += 1;

        Some((idx, &t[idx]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.t.len() - self.cur;
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IntoIter<T> {
    cur: usize,
    shape: Shape,
    iter: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub fn new(t: Matrix<T>) -> Self {
        let shape = t.shape();
        let iter = t.into_storage().data.into_iter();

        Self {
            cur: 0,
            shape,
            iter,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = ([usize; RANK], T);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.iter.next()?;
        let idx = nth_idx(self.cur, self.shape);
        self.cur += 1;

        Some((idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
