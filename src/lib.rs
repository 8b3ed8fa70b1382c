//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers with the full set of
//!   arithmetic, bitwise, shift and comparison operators and canonical decimal
//!   rendering.
//! - [`Storage`]: the digit store behind [`BigInt`]. Short numbers live inline
//!   without allocating; long ones share a reference-counted heap buffer that
//!   is copied only when a holder writes to it.
//!
//! Optional features:
//! - `serde`: serialize a [`BigInt`] as its decimal string.
//! - `num-traits`: `Zero`, `One`, `Num` and `Signed` implementations.

mod big_int;
mod cache;
mod constants;
mod error;
#[cfg(feature = "num-traits")]
mod num_impl;
#[cfg(feature = "serde")]
mod serde_impl;
mod storage;

pub use big_int::BigInt;
pub use constants::INLINE_CAPACITY;
pub use error::{Error, Result};
pub use storage::Storage;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let _ = pretty_env_logger::try_init();

        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10_u32).to_string(), "10240000000000000");
        assert_eq!((&a >> 10_u32).to_string(), "9765625000");
        assert_eq!((&a & &b).to_string(), (&a ^ &b ^ (&a | &b)).to_string());
    }

    #[test]
    fn big_int_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInt>();
    }
}
