//! MSB-first bit addressing over raw byte slices.
//!
//! Callers are responsible for bounds; these helpers index the slice
//! directly.

/// Byte index and in-byte mask of bit `index`.
#[inline(always)]
pub(crate) const fn locate(index: usize) -> (usize, u8) {
    (index / 8, 0x80 >> (index % 8))
}

/// Mask covering the `nb_bits` lowest bits of a byte.
#[inline(always)]
pub(crate) const fn low_mask_u8(nb_bits: usize) -> u8 {
    if nb_bits >= 8 {
        u8::MAX
    } else {
        (1u8 << nb_bits) - 1
    }
}

#[inline(always)]
pub(crate) fn get_bit(slice: &[u8], index: usize) -> u8 {
    let (byte, mask) = locate(index);
    u8::from(slice[byte] & mask != 0)
}

#[inline(always)]
pub(crate) fn set_bit(slice: &mut [u8], index: usize) {
    let (byte, mask) = locate(index);
    slice[byte] |= mask;
}

#[inline(always)]
pub(crate) fn clear_bit(slice: &mut [u8], index: usize) {
    let (byte, mask) = locate(index);
    slice[byte] &= !mask;
}

#[inline(always)]
pub(crate) fn toggle_bit(slice: &mut [u8], index: usize) {
    let (byte, mask) = locate(index);
    slice[byte] ^= mask;
}

/// Reads bits `[start, end)` MSB-first into the low bits of a `u64`.
///
/// Requires `start < end` and `end - start <= 64`. Only the bytes that
/// hold the range are touched: the leading byte is masked, whole middle
/// bytes are shifted in and the trailing byte contributes its top bits.
pub(crate) fn read_bits(slice: &[u8], start: usize, end: usize) -> u64 {
    let first = start / 8;
    let last = (end - 1) / 8;
    // bits of the trailing byte that belong to the range, 1..=8
    let tail_bits = end - 8 * last;

    if first == last {
        let byte = slice[first] >> (8 - tail_bits);
        return u64::from(byte & low_mask_u8(end - start));
    }

    let mut value = u64::from(slice[first] & low_mask_u8(8 - start % 8));
    for &byte in &slice[first + 1..last] {
        value = (value << 8) | u64::from(byte);
    }
    (value << tail_bits) | u64::from(slice[last] >> (8 - tail_bits))
}
