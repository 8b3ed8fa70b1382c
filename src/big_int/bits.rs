use super::BigInt;
use crate::constants::DIGIT_BITS;
use crate::storage::Storage;

// Bitwise operators over the two's-complement view
impl BigInt {
    /// Applies `op` word by word to both operands encoded in two's complement,
    /// one digit wider than the longer operand. The sign bits go through `op`
    /// as a separate 0/1 word.
    pub(super) fn bitwise(&mut self, rhs: &BigInt, op: impl Fn(u32, u32) -> u32) {
        let width = self.digits.len().max(rhs.digits.len()) + 1;
        let mut words = twos_complement(self, width);
        let rhs_words = twos_complement(rhs, width);
        let negative = op(self.negative as u32, rhs.negative as u32) & 1 == 1;

        for (word, rhs_word) in words.as_mut_slice().iter_mut().zip(rhs_words.iter()) {
            *word = op(*word, *rhs_word);
        }
        if negative {
            negate_words(words.as_mut_slice());
        }
        self.digits = words;
        self.negative = negative;
        self.normalize();
    }
}

fn twos_complement(value: &BigInt, width: usize) -> Storage {
    let mut words = value.digits.clone();
    words.resize(width, 0);
    if value.negative {
        negate_words(words.as_mut_slice());
    }
    words
}

/// Complements every word, then adds one.
fn negate_words(words: &mut [u32]) {
    let mut carry = true;
    for word in words {
        let (sum, overflow) = (!*word).overflowing_add(carry as u32);
        *word = sum;
        carry = overflow;
    }
}

// Shifts
impl BigInt {
    /// Shifts left for non-negative `amount`, right otherwise.
    pub(super) fn shift_left(&mut self, amount: i128) {
        let bits = u64::try_from(amount.unsigned_abs()).unwrap_or(u64::MAX);
        if amount < 0 {
            self.shr_bits(bits);
        } else {
            self.shl_bits(bits);
        }
    }

    pub(super) fn shift_right(&mut self, amount: i128) {
        let bits = u64::try_from(amount.unsigned_abs()).unwrap_or(u64::MAX);
        if amount < 0 {
            self.shl_bits(bits);
        } else {
            self.shr_bits(bits);
        }
    }

    pub(super) fn shl_bits(&mut self, bits: u64) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let words = (bits / DIGIT_BITS as u64) as usize;
        let shift = (bits % DIGIT_BITS as u64) as u32;
        let len = self.digits.len();

        self.digits.resize(len + words, 0);
        let digits = self.digits.as_mut_slice();
        if words > 0 {
            // Top down, so no digit is overwritten before it moves.
            for i in (0..len).rev() {
                digits.swap(i + words, i);
            }
        }

        let mut carry = 0u32;
        if shift > 0 {
            for digit in &mut digits[words..] {
                let wide = (*digit as u64) << shift | carry as u64;
                *digit = wide as u32;
                carry = (wide >> DIGIT_BITS) as u32;
            }
        }
        if carry != 0 {
            self.digits.push(carry);
        }
        self.normalize();
    }

    /// Arithmetic right shift: rounds toward negative infinity.
    pub(super) fn shr_bits(&mut self, bits: u64) {
        if bits == 0 {
            return;
        }
        let lost_ones = self.negative && self.low_bits_set(bits);
        let negative = self.negative;
        self.shr_magnitude(bits);
        self.negative = negative && !self.is_zero();
        if lost_ones {
            self.dec();
        }
    }

    /// Shifts the magnitude right, discarding the low `bits` bits.
    pub(super) fn shr_magnitude(&mut self, bits: u64) {
        let words = usize::try_from(bits / DIGIT_BITS as u64).unwrap_or(usize::MAX);
        let shift = (bits % DIGIT_BITS as u64) as u32;
        let len = self.digits.len();
        if words >= len {
            *self = BigInt::ZERO;
            return;
        }

        if words > 0 {
            self.digits.as_mut_slice().copy_within(words.., 0);
            self.digits.resize(len - words, 0);
        }
        if shift > 0 {
            let mut carry = 0u32;
            for digit in self.digits.as_mut_slice().iter_mut().rev() {
                let wide = (*digit as u64) << (DIGIT_BITS - shift);
                *digit = (wide >> DIGIT_BITS) as u32 | carry;
                carry = wide as u32;
            }
        }
        self.normalize();
    }

    fn low_bits_set(&self, bits: u64) -> bool {
        let words = usize::try_from(bits / DIGIT_BITS as u64).unwrap_or(usize::MAX);
        let digits = self.digits.as_slice();
        if words >= digits.len() {
            return !self.is_zero();
        }
        let shift = (bits % DIGIT_BITS as u64) as u32;
        let mask = (1u32 << shift).wrapping_sub(1);
        digits[..words].iter().any(|digit| *digit != 0) || digits[words] & mask != 0
    }
}
