//! The packed bit buffer: construction, sizing and single-bit access.
//!
//! # Examples
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut flags = BitBuffer::new();
//! flags.append_one();
//! flags.append_zero();
//! flags.append_bit(1)?;
//!
//! assert_eq!(flags.len(), 3);
//! assert_eq!(flags.get_bit(1)?, 0);
//!
//! flags.set_bit(1)?;
//! assert_eq!(flags.to_string(), "111");
//! # Ok::<(), bit_buffer::BitBufferError>(())
//! ```
use core::fmt;
use core::str::FromStr;

use crate::bit_ops;
use crate::iter::Iter;
use crate::{BitBufferError, Result, String, Vec};

/// Padding of a logically empty buffer: the placeholder byte is entirely unused.
const EMPTY_PADDING: u8 = 8;

/// An ordered, growable sequence of bits packed eight to a byte.
///
/// The representation always holds at least one byte. `padding` counts the
/// unused low-order bits of the last byte and those bits are always zero,
/// so two buffers holding the same bits compare equal byte for byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    pub(crate) data: Vec<u8>,
    pub(crate) padding: u8,
}

impl BitBuffer {
    /// Creates an empty buffer.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let buffer = BitBuffer::new();
    /// assert_eq!(buffer.len(), 0);
    /// assert!(buffer.to_bytes().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty buffer with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        let mut data = Vec::with_capacity(bits.div_ceil(8).max(1));
        data.push(0);
        Self {
            data,
            padding: EMPTY_PADDING,
        }
    }

    /// Rebuilds a buffer from the `(bytes, padding)` pair produced by
    /// [`to_bytes`](Self::to_bytes) and [`padding_bits`](Self::padding_bits).
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as
    /// [`append_byte_slice`](Self::append_byte_slice).
    pub fn from_bytes(bytes: &[u8], tail_padding: u8) -> Result<Self> {
        let mut buffer = Self::with_capacity(bytes.len() * 8);
        buffer.append_byte_slice(bytes, tail_padding)?;
        Ok(buffer)
    }

    /// Number of logical bits.
    #[inline]
    pub fn len(&self) -> usize {
        8 * self.data.len() - usize::from(self.padding)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.padding == EMPTY_PADDING
    }

    /// Number of bytes reported by [`to_bytes`](Self::to_bytes).
    pub fn byte_len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Number of bits the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity() * 8
    }

    /// Count of unused trailing bits in the last byte, in `0..=7`.
    ///
    /// Always 0 for an empty buffer.
    pub fn padding_bits(&self) -> u8 {
        if self.is_empty() { 0 } else { self.padding }
    }

    /// Borrowed view of the packed bytes. Empty when the buffer is empty.
    pub fn as_bytes(&self) -> &[u8] {
        if self.is_empty() { &[] } else { &self.data }
    }

    /// Returns a copy of the packed bytes.
    ///
    /// Modifying the returned vector has no effect on the buffer. The last
    /// byte is zero padded; see [`padding_bits`](Self::padding_bits).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Consumes the buffer and returns its `(bytes, padding)` pair.
    pub fn into_bytes(self) -> (Vec<u8>, u8) {
        if self.is_empty() {
            (Vec::new(), 0)
        } else {
            (self.data, self.padding)
        }
    }

    /// Appends a `1`.
    pub fn append_one(&mut self) {
        if self.padding != 0 {
            self.padding -= 1;
            let shift = self.padding;
            *self.last_byte_mut() |= 1 << shift;
            return;
        }

        self.data.push(0b1000_0000);
        self.padding = 7;
    }

    /// Appends a `0`.
    pub fn append_zero(&mut self) {
        if self.padding != 0 {
            self.padding -= 1;
            return;
        }

        self.data.push(0);
        self.padding = 7;
    }

    /// Appends `bit`, which must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::InvalidBit`] for any other value; nothing is appended.
    pub fn append_bit(&mut self, bit: u8) -> Result<()> {
        match bit {
            0 => self.append_zero(),
            1 => self.append_one(),
            other => return Err(BitBufferError::InvalidBit(other)),
        }
        Ok(())
    }

    /// Appends a single bit given as a `bool`.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        if bit {
            self.append_one();
        } else {
            self.append_zero();
        }
    }

    /// Returns the bit at `index` as `0` or `1`.
    pub fn get_bit(&self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(bit_ops::get_bit(&self.data, index))
    }

    /// Returns the bit at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.get_bit(index).ok().map(|bit| bit == 1)
    }

    /// Sets the bit at `index` to `1`.
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        bit_ops::set_bit(&mut self.data, index);
        Ok(())
    }

    /// Sets the bit at `index` to `0`.
    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        bit_ops::clear_bit(&mut self.data, index);
        Ok(())
    }

    /// Flips the bit at `index`.
    pub fn toggle_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        bit_ops::toggle_bit(&mut self.data, index);
        Ok(())
    }

    /// Iterates over the bits, first to last.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Renders the buffer as a string of `0` and `1` characters.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(BitBufferError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn last_byte_mut(&mut self) -> &mut u8 {
        let last = self.data.len() - 1;
        &mut self.data[last]
    }
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len())
            .field("padding", &self.padding_bits())
            .field("bytes", &format_args!("{:02X?}", self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitBuffer {
    type Err = BitBufferError;

    fn from_str(s: &str) -> Result<Self> {
        let mut buffer = Self::with_capacity(s.len());
        buffer.append_from_bit_string(s)?;
        Ok(buffer)
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
