use std::cmp::Ordering;

use super::{cmp_magnitude, BigInt};
use crate::constants::{BASE, DIGIT_BITS};
use crate::storage::Storage;

// Addition and subtraction
impl BigInt {
    /// `self += rhs`, with `rhs` taken as negative when `rhs_negative` is set.
    ///
    /// Mixed signs reduce to subtracting the smaller magnitude from the larger
    /// one; the result takes the sign of the larger.
    pub(super) fn add_signed(&mut self, rhs: &BigInt, rhs_negative: bool) {
        if self.negative == rhs_negative {
            add_magnitude(&mut self.digits, rhs.digits.as_slice());
        } else if cmp_magnitude(self.digits.as_slice(), rhs.digits.as_slice()) != Ordering::Less {
            sub_slices(self.digits.as_mut_slice(), rhs.digits.as_slice());
        } else {
            let mut digits = rhs.digits.clone();
            sub_slices(digits.as_mut_slice(), self.digits.as_slice());
            self.digits = digits;
            self.negative = rhs_negative;
        }
        self.normalize();
    }
}

/// Ripple-carry addition of magnitudes, growing `acc` as needed.
pub(super) fn add_magnitude(acc: &mut Storage, addend: &[u32]) {
    if acc.len() < addend.len() {
        acc.resize(addend.len(), 0);
    }
    let mut carry = 0u64;
    for (i, digit) in acc.as_mut_slice().iter_mut().enumerate() {
        if i >= addend.len() && carry == 0 {
            break;
        }
        let sum = *digit as u64 + addend.get(i).copied().unwrap_or(0) as u64 + carry;
        *digit = sum as u32;
        carry = sum >> DIGIT_BITS;
    }
    if carry != 0 {
        acc.push(carry as u32);
    }
}

/// Borrowing subtraction of magnitudes in place. Returns `true` if a borrow
/// ran off the top, which means `minuend < subtrahend`.
pub(super) fn sub_slices(minuend: &mut [u32], subtrahend: &[u32]) -> bool {
    let mut borrow = 0i64;
    for (i, digit) in minuend.iter_mut().enumerate() {
        if i >= subtrahend.len() && borrow == 0 {
            break;
        }
        let mut diff = *digit as i64 - subtrahend.get(i).copied().unwrap_or(0) as i64 - borrow;
        borrow = 0;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        }
        *digit = diff as u32;
    }
    borrow != 0
}

// Multiplication
impl BigInt {
    pub(super) fn mul_by(&mut self, rhs: &BigInt) {
        if let Some(shift) = self.exact_log2() {
            let mut product = rhs.clone();
            product.shl_bits(shift);
            *self = product;
            return;
        }
        if let Some(shift) = rhs.exact_log2() {
            self.shl_bits(shift);
            return;
        }
        let negative = self.negative != rhs.negative;
        self.digits = mul_magnitude(self.digits.as_slice(), rhs.digits.as_slice());
        self.negative = negative;
        self.normalize();
    }
}

/// Schoolbook product of two magnitudes.
fn mul_magnitude(x: &[u32], y: &[u32]) -> Storage {
    let mut product = Storage::with_len(x.len() + y.len(), 0);
    let z = product.as_mut_slice();
    for (i, &x_digit) in x.iter().enumerate() {
        let mut carry = 0u64;
        let mut j = 0;
        while j < y.len() || carry != 0 {
            let y_digit = y.get(j).copied().unwrap_or(0);
            let acc = x_digit as u64 * y_digit as u64 + carry + z[i + j] as u64;
            z[i + j] = acc as u32;
            carry = acc >> DIGIT_BITS;
            j += 1;
        }
    }
    product
}

/// Writes `x * word` into `out`, which must be one digit longer than `x`.
pub(super) fn mul_word_into(x: &[u32], word: u32, out: &mut [u32]) {
    let mut carry = 0u64;
    for (slot, &digit) in out.iter_mut().zip(x) {
        let acc = digit as u64 * word as u64 + carry;
        *slot = acc as u32;
        carry = acc >> DIGIT_BITS;
    }
    out[x.len()] = carry as u32;
}
