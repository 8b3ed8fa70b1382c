use lazy_static::*;

use crate::constants::MAX_CACHED;
use crate::BigInt;

lazy_static! {
    /// `0..=MAX_CACHED`, indexed by magnitude.
    pub static ref POS_CACHE: [BigInt; MAX_CACHED + 1] =
        std::array::from_fn(|n| BigInt::from_small(n as u32, false));
    /// `-MAX_CACHED..=0`, indexed by magnitude. The entry for zero is not negative.
    pub static ref NEG_CACHE: [BigInt; MAX_CACHED + 1] =
        std::array::from_fn(|n| BigInt::from_small(n as u32, true));
}
