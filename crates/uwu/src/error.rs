use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UwuError {
    #[error("invalid uwu text: {violation}")]
    InvalidFormat {
        #[from]
        violation: Violation,
    },

    #[error("failed to allocate output buffer of {requested} bytes: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl UwuError {
    pub fn invalid_format(violation: Violation) -> Self {
        Self::InvalidFormat { violation }
    }

    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    #[must_use]
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }

    /// The rule the decoded text broke, if this is a format error.
    #[must_use]
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::InvalidFormat { violation } => Some(*violation),
            Self::Allocation { .. } => None,
        }
    }
}

/// The first rule a piece of text breaks.
///
/// Offsets are byte offsets into the checked text.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("unexpected length {len}, must be a multiple of 24")]
    Length { len: usize },

    /// `found` is the raw byte, which may be part of a multi-byte character.
    #[error("expected 'w' at offset {offset}, found byte {found:#04x}")]
    Separator { offset: usize, found: u8 },

    #[error("token at offset {offset} is neither OwO nor UwU")]
    Eyes { offset: usize },
}

impl Violation {
    /// Byte offset the violation was found at, the text length for [`Violation::Length`].
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::Length { len } => len,
            Self::Separator { offset, .. } | Self::Eyes { offset } => offset,
        }
    }
}
