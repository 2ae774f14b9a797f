//! Bit iteration.
use core::iter::FusedIterator;

use crate::BitBuffer;
use crate::bit_ops;

/// Iterator over the bits of a [`BitBuffer`], yielded as `bool`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buffer: &'a BitBuffer,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(buffer: &'a BitBuffer) -> Self {
        Self {
            buffer,
            front: 0,
            back: buffer.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let bit = bit_ops::get_bit(&self.buffer.data, self.front) == 1;
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(&self.buffer.data, self.back) == 1)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
