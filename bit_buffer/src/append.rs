//! Multi-bit packed append and bulk append.
//!
//! Packed appends write the `nb_bits` lowest bits of a word, most
//! significant first. The 8-bit append does the actual packing; each wider
//! width appends its high half through the next narrower width and then its
//! low half.
//!
//! ```rust
//! use bit_buffer::BitBuffer;
//!
//! let mut buffer = BitBuffer::new();
//! buffer.append_byte_slice(&[0xDE, 0xAD], 0)?;
//! buffer.append_byte_slice(&[0xC0, 0xFF, 0xEE, 0xEF], 4)?;
//!
//! assert_eq!(buffer.to_bytes(), vec![0xDE, 0xAD, 0xC0, 0xFF, 0xEE, 0xE0]);
//! assert_eq!(buffer.len(), 44);
//! # Ok::<(), bit_buffer::BitBufferError>(())
//! ```
use bytemuck::NoUninit;

use crate::bit_ops::low_mask_u8;
use crate::word::Word;
use crate::{BitBuffer, BitBufferError, Result};

/// Characters folded into one `u64` while parsing a bit string.
const BIT_STRING_CHUNK: usize = 64;

#[inline(always)]
fn check_width(nb_bits: usize, width: usize) -> Result<u8> {
    if nb_bits > width {
        return Err(BitBufferError::InvalidWidth { nb_bits, width });
    }
    Ok(nb_bits as u8)
}

impl BitBuffer {
    /// Appends the `nb_bits` lowest bits of `value`, most significant first.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::InvalidWidth`] if `nb_bits > 8`.
    pub fn append_bits_u8(&mut self, value: u8, nb_bits: usize) -> Result<()> {
        let nb_bits = check_width(nb_bits, 8)?;
        self.pack_u8(value, nb_bits);
        Ok(())
    }

    /// 16-bit variant of [`append_bits_u8`](Self::append_bits_u8).
    pub fn append_bits_u16(&mut self, value: u16, nb_bits: usize) -> Result<()> {
        let nb_bits = check_width(nb_bits, 16)?;
        self.pack_u16(value, nb_bits);
        Ok(())
    }

    /// 32-bit variant of [`append_bits_u8`](Self::append_bits_u8).
    pub fn append_bits_u32(&mut self, value: u32, nb_bits: usize) -> Result<()> {
        let nb_bits = check_width(nb_bits, 32)?;
        self.pack_u32(value, nb_bits);
        Ok(())
    }

    /// 64-bit variant of [`append_bits_u8`](Self::append_bits_u8).
    pub fn append_bits_u64(&mut self, value: u64, nb_bits: usize) -> Result<()> {
        let nb_bits = check_width(nb_bits, 64)?;
        self.pack_u64(value, nb_bits);
        Ok(())
    }

    /// Appends the `nb_bits` lowest bits of any fixed-width [`Word`].
    ///
    /// The width limit is the width of `W`, never the platform's pointer width.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buffer = BitBuffer::new();
    /// buffer.append_bits(0b11u8, 2)?;
    /// buffer.append_bits(0x3FFu16, 10)?;
    /// assert!(buffer.append_bits(0u16, 17).is_err());
    /// assert_eq!(buffer.len(), 12);
    /// # Ok::<(), bit_buffer::BitBufferError>(())
    /// ```
    pub fn append_bits<W: Word>(&mut self, value: W, nb_bits: usize) -> Result<()> {
        let nb_bits = check_width(nb_bits, W::BITS)?;
        self.pack_u64(value.into(), nb_bits);
        Ok(())
    }

    /// Appends every byte of `bytes` except the last in full, then the top
    /// `8 - tail_padding` bits of the last byte.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::InvalidPadding`] if `tail_padding > 7`, or if
    /// `bytes` is empty and `tail_padding != 0`. The buffer is left untouched.
    pub fn append_byte_slice(&mut self, bytes: &[u8], tail_padding: u8) -> Result<()> {
        if tail_padding > 7 {
            return Err(BitBufferError::InvalidPadding {
                padding: tail_padding,
                reason: "tail padding must be in 0..=7",
            });
        }

        let Some((&last, body)) = bytes.split_last() else {
            if tail_padding != 0 {
                return Err(BitBufferError::InvalidPadding {
                    padding: tail_padding,
                    reason: "tail padding must be 0 for an empty slice",
                });
            }
            return Ok(());
        };

        trace!(bytes = bytes.len(), tail_padding, "appending byte slice");
        self.append_tail(body, last, tail_padding);
        Ok(())
    }

    /// Appends all bits of `other`, regardless of either buffer's alignment.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut a: BitBuffer = "101".parse()?;
    /// let b: BitBuffer = "0011".parse()?;
    /// a.append_bit_buffer(&b);
    /// assert_eq!(a.to_string(), "1010011");
    /// # Ok::<(), bit_buffer::BitBufferError>(())
    /// ```
    pub fn append_bit_buffer(&mut self, other: &BitBuffer) {
        if let Some((&last, body)) = other.as_bytes().split_last() {
            self.append_tail(body, last, other.padding_bits());
        }
    }

    /// Parses a string of `'0'` and `'1'` characters and appends its bits.
    ///
    /// # Errors
    ///
    /// [`BitBufferError::InvalidBitString`] on the first other character.
    /// The whole string is validated first, so nothing is appended on error.
    pub fn append_from_bit_string(&mut self, text: &str) -> Result<()> {
        if let Some((position, found)) = text.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(BitBufferError::InvalidBitString { position, found });
        }

        trace!(bits = text.len(), "appending bit string");
        self.data.reserve(text.len() / 8 + 1);
        for chunk in text.as_bytes().chunks(BIT_STRING_CHUNK) {
            let value = chunk
                .iter()
                .fold(0u64, |acc, &c| (acc << 1) | u64::from(c - b'0'));
            self.pack_u64(value, chunk.len() as u8);
        }
        Ok(())
    }

    /// Appends the in-memory bytes of a plain-old-data value as full bytes.
    ///
    /// The byte order is the host's native representation of `T`.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let mut buffer = BitBuffer::new();
    /// buffer.append_zero();
    /// buffer.append_pod(&[0xFFu8, 0x00]);
    /// assert_eq!(buffer.to_bytes(), vec![0x7F, 0x80, 0x00]);
    /// ```
    pub fn append_pod<T: NoUninit>(&mut self, value: &T) {
        self.extend_full_bytes(bytemuck::bytes_of(value));
    }

    /// Appends the in-memory bytes of a slice of plain-old-data values.
    pub fn append_pod_slice<T: NoUninit>(&mut self, values: &[T]) {
        self.extend_full_bytes(bytemuck::cast_slice(values));
    }

    fn append_tail(&mut self, body: &[u8], last: u8, tail_padding: u8) {
        self.extend_full_bytes(body);
        self.pack_u8(last >> tail_padding, 8 - tail_padding);
    }

    /// Appends whole bytes, copying directly when the buffer is byte aligned.
    pub(crate) fn extend_full_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        if self.is_empty() {
            self.data.clear();
            self.data.extend_from_slice(bytes);
            self.padding = 0;
        } else if self.padding == 0 {
            self.data.extend_from_slice(bytes);
        } else {
            self.data.reserve(bytes.len());
            for &byte in bytes {
                self.pack_u8(byte, 8);
            }
        }
    }

    /// Packs the `nb_bits` (at most 8) lowest bits of `value` at the tail.
    pub(crate) fn pack_u8(&mut self, value: u8, nb_bits: u8) {
        if nb_bits == 0 {
            return;
        }
        let value = value & low_mask_u8(usize::from(nb_bits));

        if nb_bits <= self.padding {
            let shift = self.padding - nb_bits;
            *self.last_byte_mut() |= value << shift;
            self.padding -= nb_bits;
            return;
        }

        // bits that do not fit in the current last byte
        let spill = nb_bits - self.padding;
        if self.padding != 0 {
            *self.last_byte_mut() |= value >> spill;
        }
        self.padding = 8 - spill;
        self.data.push(value << self.padding);
    }

    pub(crate) fn pack_u16(&mut self, value: u16, nb_bits: u8) {
        let mut nb_bits = nb_bits;
        if nb_bits > 8 {
            self.pack_u8((value >> 8) as u8, nb_bits - 8);
            nb_bits = 8;
        }
        self.pack_u8(value as u8, nb_bits);
    }

    pub(crate) fn pack_u32(&mut self, value: u32, nb_bits: u8) {
        let mut nb_bits = nb_bits;
        if nb_bits > 16 {
            self.pack_u16((value >> 16) as u16, nb_bits - 16);
            nb_bits = 16;
        }
        self.pack_u16(value as u16, nb_bits);
    }

    pub(crate) fn pack_u64(&mut self, value: u64, nb_bits: u8) {
        let mut nb_bits = nb_bits;
        if nb_bits > 32 {
            self.pack_u32((value >> 32) as u32, nb_bits - 32);
            nb_bits = 32;
        }
        self.pack_u32(value as u32, nb_bits);
    }
}
