use std::fmt;

/// Errors returned by the containers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// An index argument fell outside the interval the operation accepts.
    IndexOutOfRange { index: usize, len: usize },
    /// A dynamic array was constructed with a capacity of zero, or one too
    /// large to allocate.
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for length {len}")
            }
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity {cap}: must be non-zero and fit in memory")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
