//! Range extraction.
//!
//! Ranges are half open: `[start, end)`.
use crate::bit_ops;
use crate::{BitBuffer, BitBufferError, Result};

impl BitBuffer {
    /// Returns bits `[start, end)` packed into the low bits of a `u64`,
    /// the first extracted bit being the most significant.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let buffer: BitBuffer = "00101010".parse()?;
    /// assert_eq!(buffer.extract_integer(2, 5)?, 5);
    /// assert_eq!(buffer.extract_integer(0, 8)?, 42);
    /// # Ok::<(), bit_buffer::BitBufferError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`BitBufferError::InvalidRange`] if `start >= end`.
    /// - [`BitBufferError::IndexOutOfRange`] if `end > len()`.
    /// - [`BitBufferError::RangeTooWide`] if the range spans more than 64 bits.
    pub fn extract_integer(&self, start: usize, end: usize) -> Result<u64> {
        if start >= end {
            return Err(BitBufferError::InvalidRange { start, end });
        }
        self.check_range_end(end)?;
        if end - start > 64 {
            return Err(BitBufferError::RangeTooWide { start, end });
        }

        Ok(bit_ops::read_bits(&self.data, start, end))
    }

    /// Returns a new, independent buffer holding bits `[start, end)`.
    ///
    /// `start == end` yields an empty buffer. There is no width limit.
    ///
    /// ```
    /// use bit_buffer::BitBuffer;
    ///
    /// let source = BitBuffer::from_bytes(&[0b0010_1010], 0)?;
    /// let slice = source.extract_bit_buffer(2, 5)?;
    /// assert_eq!(slice.to_bytes(), vec![0b1010_0000]);
    /// assert_eq!(slice.len(), 3);
    /// # Ok::<(), bit_buffer::BitBufferError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`BitBufferError::InvalidRange`] if `start > end`.
    /// - [`BitBufferError::IndexOutOfRange`] if `end > len()`.
    pub fn extract_bit_buffer(&self, start: usize, end: usize) -> Result<BitBuffer> {
        if start > end {
            return Err(BitBufferError::InvalidRange { start, end });
        }
        self.check_range_end(end)?;

        let nb_bits = end - start;
        let mut out = BitBuffer::with_capacity(nb_bits);
        trace!(start, end, len = self.len(), "extracting bit buffer");

        if start % 8 == 0 {
            let first = start / 8;
            let full = nb_bits / 8;
            out.extend_full_bytes(&self.data[first..first + full]);

            let rest = nb_bits % 8;
            if rest != 0 {
                out.pack_u8(self.data[first + full] >> (8 - rest), rest as u8);
            }
            return Ok(out);
        }

        let mut pos = start;
        while pos < end {
            let take = (end - pos).min(64);
            out.pack_u64(bit_ops::read_bits(&self.data, pos, pos + take), take as u8);
            pos += take;
        }
        Ok(out)
    }

    fn check_range_end(&self, end: usize) -> Result<()> {
        let len = self.len();
        if end > len {
            return Err(BitBufferError::IndexOutOfRange { index: end, len });
        }
        Ok(())
    }
}
