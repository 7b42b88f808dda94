use crate::{
    errors::IndexError,
    shape::{self, Shape, RANK},
};

/// Owned, contiguous, row-major backing buffer for a [`Matrix`](crate::matrix::Matrix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Storage<T> {
    pub(crate) data: Vec<T>,
}

impl<T> Storage<T> {
    pub(crate) fn from_fn(s: Shape, mut f: impl FnMut(&[usize; RANK]) -> T) -> Self {
        let n = s[0].checked_mul(s[1]).expect("capacity overflow");
        let mut data = Vec::with_capacity(n);
        for i in 0..n {
            data.push(f(&nth_idx(i, s)));
        }

        Self { data }
    }

    pub(crate) fn get(&self, idx: &[usize; RANK], s: Shape) -> Result<&T, IndexError> {
        let i = storage_idx(idx, s)?;
        Ok(&self.data[i])
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}

pub(crate) fn storage_idx(idx: &[usize; RANK], s: Shape) -> Result<usize, IndexError> {
    for (dim, &cur) in idx.iter().enumerate() {
        if cur >= s[dim] {
            return Err(IndexError::OutOfBounds {
                idx: *idx,
                shape: s,
            });
        }
    }

    let stride = shape::stride(s);
    let mut i = 0;
    for (dim, &cur) in idx.iter().enumerate() {
        i += stride[dim] * cur;
    }

    Ok(i)
}

/// Inverse of [`storage_idx`]; `n` must be below `num_elems(s)`.
pub(crate) fn nth_idx(n: usize, s: Shape) -> [usize; RANK] {
    debug_assert!(n < shape::num_elems(s));
    [n / s[1], n % s[1]]
}
