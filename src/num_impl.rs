use num_traits::{Num, One, Signed, Zero};

use crate::error::Error;
use crate::BigInt;

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::ZERO
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::ONE
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    /// Only radix 10 is accepted.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        if radix != 10 {
            return Err(Error::UnsupportedRadix(radix));
        }
        s.parse()
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInt::ZERO
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::from(BigInt::signum(self))
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}
