use std::fmt;

/// The valid index range an edit was checked against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeBound {
    /// `0..=len`, used by insertions.
    Inclusive,
    /// `0..len`, used by replacements.
    Exclusive,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Inclusive => f.write_str("..="),
            RangeBound::Exclusive => f.write_str(".."),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamError {
    /// A seedless reduce was attempted on an empty stream.
    #[error("Cannot reduce an empty stream without an initial value.")]
    EmptyReduce,

    #[error("Index {index} out of range: expected 0{bound}{len}.")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        bound: RangeBound,
    },
}

impl StreamError {
    pub(crate) fn empty_reduce() -> Self {
        log::debug!("reduce called on an empty stream");
        StreamError::EmptyReduce
    }

    pub(crate) fn index_out_of_range(op: &str, index: usize, len: usize, bound: RangeBound) -> Self {
        log::debug!("{op}: index {index} out of range for length {len}");
        StreamError::IndexOutOfRange { index, len, bound }
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
