pub mod errors;
pub mod iterator;
pub mod matrix;
pub mod shape;
mod storage;

pub use errors::{IndexError, ShapeError};
pub use matrix::Matrix;
pub use shape::{Shape, Shaped};

/// The original name of the container; same type as [`Matrix`].
pub type Tensor<T> = Matrix<T>;
