//! Operator traits. Every binary operator is implemented once, in place, as
//! `OpAssign<&BigInt>`; the by-value forms reuse the left operand's storage
//! and the borrowed forms clone it once.

use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use super::BigInt;

macro_rules! impl_bin_op {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $apply: expr) => {
        impl $OpAssign<&BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: &BigInt) {
                let apply: fn(&mut BigInt, &BigInt) = $apply;
                apply(self, rhs);
            }
        }

        impl $OpAssign for BigInt {
            fn $op_assign(&mut self, rhs: BigInt) {
                self.$op_assign(&rhs);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: &BigInt) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: BigInt) -> BigInt {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> BigInt {
                self.clone().$op(rhs)
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> BigInt {
                self.clone().$op(&rhs)
            }
        }
    };
}

impl_bin_op!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.add_signed(rhs, rhs.negative));
impl_bin_op!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.add_signed(rhs, !rhs.negative));
impl_bin_op!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| lhs.mul_by(rhs));
impl_bin_op!(Div, div, DivAssign, div_assign, |lhs, rhs| {
    if let Err(err) = lhs.div_in_place(rhs) {
        panic!("{}", err);
    }
});
impl_bin_op!(Rem, rem, RemAssign, rem_assign, |lhs, rhs| {
    if let Err(err) = lhs.rem_in_place(rhs) {
        panic!("{}", err);
    }
});
impl_bin_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |lhs, rhs| lhs.bitwise(rhs, |a, b| a & b));
impl_bin_op!(BitOr, bitor, BitOrAssign, bitor_assign, |lhs, rhs| lhs.bitwise(rhs, |a, b| a | b));
impl_bin_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |lhs, rhs| lhs.bitwise(rhs, |a, b| a ^ b));

macro_rules! impl_shift {
    ($($t: ty),*) => {
    $(
    impl ShlAssign<$t> for BigInt {
        fn shl_assign(&mut self, rhs: $t) {
            self.shift_left(rhs as i128);
        }
    }

    impl Shl<$t> for BigInt {
        type Output = BigInt;

        fn shl(mut self, rhs: $t) -> BigInt {
            self <<= rhs;
            self
        }
    }

    impl Shl<$t> for &BigInt {
        type Output = BigInt;

        fn shl(self, rhs: $t) -> BigInt {
            self.clone() << rhs
        }
    }

    impl ShrAssign<$t> for BigInt {
        fn shr_assign(&mut self, rhs: $t) {
            self.shift_right(rhs as i128);
        }
    }

    impl Shr<$t> for BigInt {
        type Output = BigInt;

        fn shr(mut self, rhs: $t) -> BigInt {
            self >>= rhs;
            self
        }
    }

    impl Shr<$t> for &BigInt {
        type Output = BigInt;

        fn shr(self, rhs: $t) -> BigInt {
            self.clone() >> rhs
        }
    }
    )*
    };
}
impl_shift!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

/// `!a == -(a + 1)`, matching two's complement.
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        let mut value = -self;
        value.dec();
        value
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

impl std::iter::Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::ZERO, |acc, x| acc + x)
    }
}

impl std::iter::Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::ONE, |acc, x| acc * x)
    }
}
