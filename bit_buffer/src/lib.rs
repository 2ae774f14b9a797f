//! # bit_buffer
//!
//! A `no_std` compatible, packed, bit-addressable buffer.
//!
//! Bits are stored most-significant-bit first: bit 0 of the buffer is the
//! highest-order bit of the first byte. N bits occupy `ceil(N / 8)` bytes.
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buffer = BitBuffer::new();
//! buffer.append_bits_u8(0b101, 3)?;
//! buffer.append_bits_u16(0x1FF, 9)?;
//! buffer.append_one();
//!
//! assert_eq!(buffer.len(), 13);
//! assert_eq!(buffer.extract_integer(0, 3)?, 0b101);
//! assert_eq!(buffer.to_bytes(), vec![0b1011_1111, 0b1111_1000]);
//! assert_eq!(buffer.padding_bits(), 3);
//! # Ok::<(), bit_buffer::BitBufferError>(())
//! ```
//!
//! ## Persisting a buffer
//!
//! The byte sequence alone does not say where the content ends, so the
//! padding count travels with it:
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let buffer: BitBuffer = "1101111010101".parse()?;
//! let (bytes, padding) = (buffer.to_bytes(), buffer.padding_bits());
//!
//! let restored = BitBuffer::from_bytes(&bytes, padding)?;
//! assert_eq!(restored, buffer);
//! # Ok::<(), bit_buffer::BitBufferError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std` support and `thiserror` based error messages.
//! - `tracing` (default): `trace!` events on bulk appends and extraction.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{string::String, vec::Vec};

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod error;
pub use error::{BitBufferError, ErrorKind};

mod append;
mod bit_ops;
mod buffer;
mod extract;
pub mod iter;
pub mod word;

pub use buffer::BitBuffer;
pub use iter::Iter;
pub use word::Word;

pub type Result<T> = core::result::Result<T, BitBufferError>;
