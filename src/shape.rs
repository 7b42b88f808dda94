pub const RANK: usize = 2;

/// `[rows, cols]`
pub type Shape = [usize; RANK];

pub const fn num_elems(s: Shape) -> usize {
    s[0] * s[1]
}

// Row-major strides: moving one row skips a full row of columns.
pub const fn stride(s: Shape) -> Shape {
    [s[1], 1]
}

pub trait Shaped {
    fn shape(&self) -> Shape;

    fn num_elems(&self) -> usize {
        num_elems(self.shape())
    }

    fn in_bounds(&self, idx: &[usize; RANK]) -> bool {
        let s = self.shape();
        idx[0] < s[0] && idx[1] < s[1]
    }
}
