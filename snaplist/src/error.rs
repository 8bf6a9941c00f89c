use alloc::string::String;
use core::num::ParseIntError;

/// Coarse classification of [`SnapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the host. Logged as a warning; nothing was changed.
    InvalidArgument,
    /// The referenced item is not in the list. Logged as a warning; nothing was changed.
    NotFound,
    /// Programmer error (e.g. an index past the end of the list). Nothing was changed.
    Precondition,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapError {
    #[error("snap index can't be less than zero (got {0})")]
    NegativeIndex(isize),

    #[error("snap index {text:?} is not an integer: {source}")]
    Parse {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("item {0} is not a rect layout element")]
    NotRect(String),

    #[error("item {0} is already in the list")]
    DuplicateItem(String),

    #[error("item {0} is the snap placeholder and can't be listed")]
    ReservedItem(String),

    #[error("item {0} can't be attached to the content element")]
    NotAttached(String),

    #[error("item {0} does not exist in the list")]
    ItemNotFound(String),

    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SnapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeIndex(_)
            | Self::Parse { .. }
            | Self::NotRect(_)
            | Self::DuplicateItem(_)
            | Self::ReservedItem(_)
            | Self::NotAttached(_) => ErrorKind::InvalidArgument,
            Self::ItemNotFound(_) => ErrorKind::NotFound,
            Self::IndexOutOfRange { .. } => ErrorKind::Precondition,
        }
    }

    /// `true` for errors that point at a bug in the calling code rather than at bad input.
    pub fn is_precondition(&self) -> bool {
        self.kind() == ErrorKind::Precondition
    }
}
