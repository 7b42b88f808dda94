use std::fmt::{Display, Formatter};

use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    OutOfBounds { idx: [usize; 2], shape: Shape },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    MissingRows {
        expected: usize,
        found: usize,
    },
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::OutOfBounds { idx, shape } => {
                write!(
                    f,
                    "index [{}, {}] out of bounds for matrix of shape [{}, {}]",
                    idx[0], idx[1], shape[0], shape[1]
                )
            }
        }
    }
}
impl std::error::Error for IndexError {}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::MissingRows { expected, found } => {
                write!(f, "expected at least {} rows, got {}", expected, found)
            }
            Self::ShortRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {} has {} elements, expected at least {}",
                    row, found, expected
                )
            }
        }
    }
}
impl std::error::Error for ShapeError {}
