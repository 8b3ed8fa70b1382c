use log::trace;

use super::arith::{mul_word_into, sub_slices};
use super::BigInt;
use crate::constants::{BASE, DIGIT_BITS};
use crate::error::{Error, Result};
use crate::storage::Storage;

impl BigInt {
    /// Truncating division. Fails only when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut quotient = self.clone();
        quotient.div_in_place(rhs)?;
        Ok(quotient)
    }

    /// Remainder of truncating division; it has the sign of `self`.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut remainder = self.clone();
        remainder.rem_in_place(rhs)?;
        Ok(remainder)
    }

    /// Quotient and remainder in one call.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self - &(&quotient * rhs);
        Ok((quotient, remainder))
    }

    pub(super) fn div_in_place(&mut self, rhs: &BigInt) -> Result<()> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let negative = self.negative != rhs.negative;
        if self.digits.len() < rhs.digits.len() {
            *self = BigInt::ZERO;
            return Ok(());
        }

        if rhs.digits.len() == 1 {
            self.div_rem_word(rhs.digits[0]);
        } else if let Some(shift) = rhs.exact_log2() {
            trace!("dividing by 2^{} as a shift", shift);
            self.shr_magnitude(shift);
        } else {
            trace!(
                "long division of {} digits by {} digits",
                self.digits.len(),
                rhs.digits.len()
            );
            self.digits = divide_knuth(self.digits.as_slice(), rhs.digits.as_slice());
        }
        self.negative = negative;
        self.normalize();
        Ok(())
    }

    /// `self - (self / rhs) * rhs`.
    pub(super) fn rem_in_place(&mut self, rhs: &BigInt) -> Result<()> {
        let quotient = self.checked_div(rhs)?;
        *self -= quotient * rhs;
        Ok(())
    }

    /// Divides the magnitude by a single digit in place, returning the
    /// remainder. The sign is left alone unless the quotient is zero.
    pub(super) fn div_rem_word(&mut self, divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut remainder = 0u64;
        for digit in self.digits.as_mut_slice().iter_mut().rev() {
            let current = remainder << DIGIT_BITS | *digit as u64;
            *digit = (current / divisor) as u32;
            remainder = current % divisor;
        }
        self.normalize();
        remainder as u32
    }
}

/// Knuth, _The Art of Computer Programming_, Vol. 2, 4.3.1, Algorithm D.
///
/// Expects `divisor` to have at least two digits and `dividend` to be at
/// least as long. Returns the quotient magnitude.
fn divide_knuth(dividend: &[u32], divisor: &[u32]) -> Storage {
    let n = dividend.len();
    let m = divisor.len();

    // Scaling brings the leading divisor digit to at least BASE / 2, which
    // bounds the trial quotient error to one.
    let factor = (BASE / (divisor[m - 1] as u64 + 1)) as u32;
    let mut remainder = scale(dividend, factor);
    let mut divisor = scale(divisor, factor);
    divisor.truncate(m);

    let mut quotient = Storage::with_len(n - m + 1, 0);
    let mut product = vec![0u32; m + 1];
    for k in (0..=n - m).rev() {
        let window = &mut remainder[k..=k + m];
        let mut trial = trial_digit(window, &divisor);
        mul_word_into(&divisor, trial, &mut product);
        if is_smaller(window, &product) {
            trial -= 1;
            mul_word_into(&divisor, trial, &mut product);
        }
        let borrow = sub_slices(window, &product);
        debug_assert!(!borrow, "trial quotient digit was too large");
        quotient[k] = trial;
    }
    quotient
}

/// `digits * factor`, one digit longer than `digits`.
fn scale(digits: &[u32], factor: u32) -> Vec<u32> {
    let mut scaled = vec![0u32; digits.len() + 1];
    mul_word_into(digits, factor, &mut scaled);
    scaled
}

/// Estimates the next quotient digit from the top three digits of the
/// `m + 1` digit window and the top two digits of the scaled divisor.
fn trial_digit(window: &[u32], divisor: &[u32]) -> u32 {
    let m = divisor.len();
    let top = (window[m] as u128) << (2 * DIGIT_BITS)
        | (window[m - 1] as u128) << DIGIT_BITS
        | window[m - 2] as u128;
    let lead = (divisor[m - 1] as u128) << DIGIT_BITS | divisor[m - 2] as u128;
    (top / lead).min(u32::MAX as u128) as u32
}

/// Compares two equally long windows from the most significant digit down.
fn is_smaller(window: &[u32], product: &[u32]) -> bool {
    window.iter().rev().lt(product.iter().rev())
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, Error};

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_short_division() {
        let (q, r) = big("100").div_rem(&big("7")).unwrap();
        assert_eq!(q, big("14"));
        assert_eq!(r, big("2"));

        let a = big("10000000000000000000000000000000000");
        assert_eq!(&a / &big("1000"), big("10000000000000000000000000000000"));
        assert_eq!(&a % &big("10"), BigInt::ZERO);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(big("-5") / big("2"), big("-2"));
        assert_eq!(big("-5") % big("2"), big("-1"));
        assert_eq!(big("5") / big("-2"), big("-2"));
        assert_eq!(big("5") % big("-2"), big("1"));
        assert_eq!(big("-5") / big("-2"), big("2"));
        assert_eq!(big("-5") % big("-2"), big("-1"));
        assert_eq!(big("-1") / big("2"), BigInt::ZERO);
        assert!(!(big("-1") / big("2")).is_negative());
    }

    #[test]
    fn test_dividend_shorter_than_divisor() {
        let small = big("-123");
        let large = big("100000000000000000000000");
        assert_eq!(&small / &large, BigInt::ZERO);
        assert_eq!(&small % &large, small);
    }

    #[test]
    fn test_thirty_digit_dividend() {
        let a = big("123456789012345678901234567890");
        let b = big("987654321");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, big("124999998873437499901"));
        assert_eq!(r, big("574845669"));
    }

    #[test]
    fn test_knuth_division() {
        let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
        let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
        let q = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
        let r = big("1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949");
        assert_eq!(&a / &b, q);
        assert_eq!(&a % &b, r);
        assert_eq!(-&a / &b, -&q);
        assert_eq!(-&a % &b, -&r);

        let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
        let b = big("526738495607659438721653478560954837265378495607");
        assert_eq!(a % b, big("393707270751296419349581795408095683999332705291"));
    }

    #[test]
    fn test_divisor_with_full_leading_digit() {
        // No scaling needed: the leading divisor digit is already u32::MAX.
        let b = big("79228162514264337593543950335"); // 2^96 - 1
        let a = &b * &b + big("12345");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, b);
        assert_eq!(r, big("12345"));
    }

    #[test]
    fn test_power_of_two_divisor_truncates() {
        let two_pow_64 = big("18446744073709551616");
        let a = big("-36893488147419103233"); // -(2^65 + 1)
        assert_eq!(&a / &two_pow_64, big("-2"));
        assert_eq!(&a % &two_pow_64, big("-1"));
        assert_eq!(big("36893488147419103233") / &two_pow_64, big("2"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(big("5").checked_div(&BigInt::ZERO), Err(Error::DivisionByZero));
        assert_eq!(big("5").checked_rem(&BigInt::ZERO), Err(Error::DivisionByZero));
        assert_eq!(BigInt::ZERO.div_rem(&BigInt::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_division_operator_panics_on_zero() {
        let _ = big("5") / big("0");
    }
}
