//! # BigInt
//! Arbitrary-precision signed integers. Bitwise operators and right shifts
//! behave as if the value were held in infinite two's-complement notation;
//! division truncates toward zero.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10_u32).to_string(), "10240000000000000");
//! assert_eq!((&a >> 10_u32).to_string(), "9765625000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cache::{NEG_CACHE, POS_CACHE};
use crate::constants::*;
use crate::error::{Error, Result};
use crate::storage::Storage;

mod arith;
mod bits;
mod div;
mod ops;

/// A signed integer of unbounded size.
///
/// The magnitude is a sequence of base 2<sup>32</sup> digits, least
/// significant first, with no leading zero digits. Zero is a single zero digit
/// and is never negative, so derived equality and hashing agree with numeric
/// equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Storage,
}

// Construction
impl BigInt {
    pub const ZERO: BigInt = BigInt { negative: false, digits: Storage::single(0) };
    pub const ONE: BigInt = BigInt { negative: false, digits: Storage::single(1) };

    pub(crate) const fn from_small(word: u32, negative: bool) -> BigInt {
        BigInt { negative: negative && word != 0, digits: Storage::single(word) }
    }

    fn from_magnitude(magnitude: u128, negative: bool) -> BigInt {
        if magnitude <= MAX_CACHED as u128 {
            let cache: &[BigInt; MAX_CACHED + 1] = if negative { &*NEG_CACHE } else { &*POS_CACHE };
            return cache[magnitude as usize].clone();
        }
        let mut digits = Storage::new();
        let mut rest = magnitude;
        while rest != 0 {
            digits.push(rest as u32);
            rest >>= DIGIT_BITS;
        }
        BigInt { negative, digits }
    }

    /// Strips most significant zero digits and clears the sign of zero.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// `self = self * factor + addend`, ignoring the sign.
    fn mul_add_word(&mut self, factor: u32, addend: u32) {
        let mut carry = addend as u64;
        for digit in self.digits.as_mut_slice() {
            let acc = *digit as u64 * factor as u64 + carry;
            *digit = acc as u32;
            carry = acc >> DIGIT_BITS;
        }
        if carry != 0 {
            self.digits.push(carry as u32);
        }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_magnitude(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_magnitude(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// Parsing
impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optional `-` followed by one or more ASCII decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        let (negative, numeral) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if numeral.is_empty() {
            return Err(Error::Empty);
        }
        let offset = s.len() - numeral.len();

        let mut value = BigInt::ZERO;
        for (index, ch) in numeral.char_indices() {
            let digit = ch
                .to_digit(10)
                .ok_or(Error::InvalidDigit { ch, index: offset + index })?;
            value.mul_add_word(10, digit);
        }
        value.negative = negative;
        value.normalize();
        Ok(value)
    }
}

// Comparison
pub(crate) fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = || cmp_magnitude(self.digits.as_slice(), other.digits.as_slice());
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude(),
            (true, true) => magnitude().reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Rendering
impl BigInt {
    fn magnitude_to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut rest = self.abs();
        let mut groups = Vec::with_capacity(self.digits.len() * 10 / DECIMAL_CHUNK_DIGITS + 1);
        while !rest.is_zero() {
            groups.push(rest.div_rem_word(DECIMAL_CHUNK));
        }

        let mut result = String::with_capacity(groups.len() * DECIMAL_CHUNK_DIGITS);
        let mut groups = groups.iter().rev();
        if let Some(leading) = groups.next() {
            result.push_str(&leading.to_string());
        }
        for group in groups {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_CHUNK_DIGITS));
        }
        result
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_decimal())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

// Inspection and stepping
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, digits: self.digits.clone() }
    }

    /// Number of bits in the magnitude, `0` for zero.
    pub fn bit_length(&self) -> u64 {
        let top = self.digits[self.digits.len() - 1];
        (self.digits.len() as u64 - 1) * DIGIT_BITS as u64 + (DIGIT_BITS - top.leading_zeros()) as u64
    }

    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut result = BigInt::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.magnitude_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_u64()?;
        if self.negative {
            (magnitude <= 1 << 63).then(|| (magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    fn magnitude_u64(&self) -> Option<u64> {
        match self.digits.as_slice() {
            [low] => Some(*low as u64),
            [low, high] => Some((*high as u64) << DIGIT_BITS | *low as u64),
            _ => None,
        }
    }

    /// The bit index of a non-negative exact power of two.
    fn exact_log2(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        let ones: u32 = self.digits.iter().map(|digit| digit.count_ones()).sum();
        if ones != 1 {
            return None;
        }
        let index = self.digits.iter().position(|digit| *digit != 0)?;
        Some(index as u64 * DIGIT_BITS as u64 + self.digits[index].trailing_zeros() as u64)
    }

    /// Pre-increment.
    pub fn inc(&mut self) -> &mut Self {
        *self += &BigInt::ONE;
        self
    }

    /// Pre-decrement.
    pub fn dec(&mut self) -> &mut Self {
        *self -= &BigInt::ONE;
        self
    }

    /// Post-increment: returns the value held before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Post-decrement: returns the value held before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let previous = self.clone();
        self.dec();
        previous
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}
