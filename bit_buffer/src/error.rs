#[cfg(feature = "std")]
use thiserror::Error;

/// Broad classification of a [`BitBufferError`].
///
/// Every error is a caller contract violation. The kind tells a higher layer
/// whether the caller addressed a bit that does not exist or passed a
/// malformed argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index or range end lies beyond the buffer length.
    IndexOutOfRange,
    /// A bit value, bit count, padding, range or bit string is malformed.
    InvalidArgument,
}

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBufferError {
    #[cfg_attr(
        feature = "std",
        error("bit index out of range [{index}] with length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[cfg_attr(feature = "std", error("bit should be 0 or 1, given {0}"))]
    InvalidBit(u8),

    #[cfg_attr(
        feature = "std",
        error("bit count {nb_bits} exceeds the {width}-bit word width")
    )]
    InvalidWidth { nb_bits: usize, width: usize },

    #[cfg_attr(feature = "std", error("invalid tail padding {padding}: {reason}"))]
    InvalidPadding { padding: u8, reason: &'static str },

    #[cfg_attr(
        feature = "std",
        error("invalid bit string: found {found:?} at position {position}")
    )]
    InvalidBitString { position: usize, found: char },

    #[cfg_attr(feature = "std", error("invalid bit range [{start}, {end})"))]
    InvalidRange { start: usize, end: usize },

    #[cfg_attr(
        feature = "std",
        error("bit range [{start}, {end}) is wider than 64 bits")
    )]
    RangeTooWide { start: usize, end: usize },
}

impl BitBufferError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitBufferError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            BitBufferError::InvalidBit(_)
            | BitBufferError::InvalidWidth { .. }
            | BitBufferError::InvalidPadding { .. }
            | BitBufferError::InvalidBitString { .. }
            | BitBufferError::InvalidRange { .. }
            | BitBufferError::RangeTooWide { .. } => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBufferError::IndexOutOfRange { index, len } => {
                write!(f, "bit index out of range [{}] with length {}", index, len)
            }
            BitBufferError::InvalidBit(bit) => write!(f, "bit should be 0 or 1, given {}", bit),
            BitBufferError::InvalidWidth { nb_bits, width } => {
                write!(f, "bit count {} exceeds the {}-bit word width", nb_bits, width)
            }
            BitBufferError::InvalidPadding { padding, reason } => {
                write!(f, "invalid tail padding {}: {}", padding, reason)
            }
            BitBufferError::InvalidBitString { position, found } => {
                write!(f, "invalid bit string: found {:?} at position {}", found, position)
            }
            BitBufferError::InvalidRange { start, end } => {
                write!(f, "invalid bit range [{}, {})", start, end)
            }
            BitBufferError::RangeTooWide { start, end } => {
                write!(f, "bit range [{}, {}) is wider than 64 bits", start, end)
            }
        }
    }
}
