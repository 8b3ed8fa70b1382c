/// Radix of one digit of a magnitude.
pub const BASE: u64 = 1 << u32::BITS;

/// Bits held by one digit.
pub const DIGIT_BITS: u32 = u32::BITS;

/// Number of digits a [`Storage`](crate::Storage) keeps inline before it
/// spills to a shared heap buffer.
pub const INLINE_CAPACITY: usize = 4;

/// Largest magnitude served from the small-value cache.
pub const MAX_CACHED: usize = 16;

/// Largest power of ten that fits in one digit, used to render a group of
/// decimal digits per short division.
pub const DECIMAL_CHUNK: u32 = 1_000_000_000;

/// Decimal digits produced by one division by [`DECIMAL_CHUNK`].
pub const DECIMAL_CHUNK_DIGITS: usize = 9;
