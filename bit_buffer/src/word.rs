//! Fixed-width unsigned words accepted by [`BitBuffer::append_bits`].
//!
//! The trait is sealed and implemented for `u8`, `u16`, `u32` and `u64`
//! only. With no `usize` implementation, the width of a packed append never
//! depends on the host platform.
//!
//! [`BitBuffer::append_bits`]: crate::BitBuffer::append_bits

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned word whose low-order bits can be packed into a buffer.
pub trait Word: Copy + Into<u64> + sealed::Sealed {
    /// Width of the word in bits.
    const BITS: usize;
}

impl Word for u8 {
    const BITS: usize = 8;
}

impl Word for u16 {
    const BITS: usize = 16;
}

impl Word for u32 {
    const BITS: usize = 32;
}

impl Word for u64 {
    const BITS: usize = 64;
}
