use big_integer::{BigInt, INLINE_CAPACITY};
use ibig::{IBig, UBig};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

/// A random operand paired with the same value in an independent
/// implementation. Digit counts range over single-word, multi-word and both
/// sides of the inline storage threshold.
#[derive(Clone, Debug)]
struct Operand {
    value: BigInt,
    oracle: IBig,
}

impl Arbitrary for Operand {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (2 * INLINE_CAPACITY + 3);
        let mut bytes = Vec::with_capacity(len * 4);
        for _ in 0..len {
            bytes.extend_from_slice(&u32::arbitrary(g).to_le_bytes());
        }
        let mut oracle = IBig::from(UBig::from_le_bytes(&bytes));
        if bool::arbitrary(g) {
            oracle = -oracle;
        }
        let value = oracle.to_string().parse().unwrap();
        Operand { value, oracle }
    }
}

#[derive(Clone, Copy, Debug)]
struct ShiftAmount(u32);

impl Arbitrary for ShiftAmount {
    fn arbitrary(g: &mut Gen) -> Self {
        ShiftAmount(u32::arbitrary(g) % 300)
    }
}

fn same(value: &BigInt, oracle: &IBig) -> bool {
    value.to_string() == oracle.to_string()
}

#[test]
fn add_sub_mul_match_oracle() {
    fn prop(a: Operand, b: Operand) -> bool {
        same(&(&a.value + &b.value), &(&a.oracle + &b.oracle))
            && same(&(&a.value - &b.value), &(&a.oracle - &b.oracle))
            && same(&(&a.value * &b.value), &(&a.oracle * &b.oracle))
    }
    quickcheck(prop as fn(Operand, Operand) -> bool);
}

#[test]
fn div_rem_match_oracle() {
    fn prop(a: Operand, b: Operand) -> TestResult {
        if b.value.is_zero() {
            return TestResult::discard();
        }
        let (q, r) = a.value.div_rem(&b.value).unwrap();
        TestResult::from_bool(
            same(&q, &(&a.oracle / &b.oracle))
                && same(&r, &(&a.oracle % &b.oracle))
                && same(&(&a.value / &b.value), &(&a.oracle / &b.oracle))
                && same(&(&a.value % &b.value), &(&a.oracle % &b.oracle)),
        )
    }
    quickcheck(prop as fn(Operand, Operand) -> TestResult);
}

#[test]
fn division_identity_and_remainder_sign() {
    fn prop(a: Operand, b: Operand) -> TestResult {
        if b.value.is_zero() {
            return TestResult::discard();
        }
        let (a, b) = (a.value, b.value);
        let q = &a / &b;
        let r = &a % &b;
        let sign_ok = r.is_zero() || r.is_negative() == a.is_negative();
        let bounded = r.abs() < b.abs();
        TestResult::from_bool(&q * &b + &r == a && sign_ok && bounded)
    }
    quickcheck(prop as fn(Operand, Operand) -> TestResult);
}

#[test]
fn rendering_round_trips() {
    fn prop(a: Operand) -> bool {
        let rendered = a.value.to_string();
        same(&a.value, &a.oracle) && rendered.parse::<BigInt>().unwrap() == a.value
    }
    quickcheck(prop as fn(Operand) -> bool);
}

#[test]
fn parsing_canonicalizes_leading_zeros() {
    fn prop(a: Operand, zeros: u8) -> bool {
        let magnitude = a.value.abs().to_string();
        let padded = format!(
            "{}{}{}",
            if a.value.is_negative() { "-" } else { "" },
            "0".repeat(zeros as usize % 40),
            magnitude
        );
        padded.parse::<BigInt>().unwrap().to_string() == a.value.to_string()
    }
    quickcheck(prop as fn(Operand, u8) -> bool);
}

#[test]
fn addition_and_multiplication_laws() {
    fn prop(a: Operand, b: Operand, c: Operand) -> bool {
        let (a, b, c) = (a.value, b.value, c.value);
        (&a + &b) + &c == &a + &(&b + &c)
            && &a + &b == &b + &a
            && &a * &b == &b * &a
            && (&a * &b) * &c == &a * &(&b * &c)
            && &a * &(&b + &c) == &a * &b + &a * &c
    }
    quickcheck(prop as fn(Operand, Operand, Operand) -> bool);
}

#[test]
fn shifts_invert_for_non_negative_values() {
    fn prop(a: Operand, k: ShiftAmount) -> bool {
        let a = a.value.abs();
        (&a << k.0) >> k.0 == a
    }
    quickcheck(prop as fn(Operand, ShiftAmount) -> bool);
}

#[test]
fn right_shift_rounds_toward_negative_infinity() {
    fn prop(a: Operand, k: ShiftAmount) -> bool {
        let a = a.value;
        let q = &a >> k.0;
        let scale = BigInt::ONE << k.0;
        &q * &scale <= a && a < (&q + &BigInt::ONE) * &scale
    }
    quickcheck(prop as fn(Operand, ShiftAmount) -> bool);
}

#[test]
fn power_of_two_multiplication_matches_shift() {
    fn prop(a: Operand, k: ShiftAmount) -> bool {
        let power = BigInt::ONE << k.0;
        let expected = &a.value << k.0;
        &a.value * &power == expected
            && &power * &a.value == expected
            && same(&expected, &(a.oracle.clone() * (IBig::from(1u8) << k.0 as usize)))
    }
    quickcheck(prop as fn(Operand, ShiftAmount) -> bool);
}

#[test]
fn power_of_two_division_matches_general_division() {
    fn prop(a: Operand, k: ShiftAmount) -> bool {
        let power = BigInt::ONE << k.0;
        same(&(&a.value / &power), &(a.oracle.clone() / (IBig::from(1u8) << k.0 as usize)))
    }
    quickcheck(prop as fn(Operand, ShiftAmount) -> bool);
}

#[test]
fn bitwise_laws() {
    fn prop(a: Operand, b: Operand) -> bool {
        let (a, b) = (a.value, b.value);
        !&a == -(&a + &BigInt::ONE)
            && (&a & &b) | (&a ^ &b) == &a | &b
            && (&a ^ &a).is_zero()
            && &a & &b == &b & &a
            && !(&a & &b) == !&a | !&b
            && (&a ^ &b) ^ &b == a
    }
    quickcheck(prop as fn(Operand, Operand) -> bool);
}

#[test]
fn machine_word_operations_match_primitives() {
    fn prop(x: i64, y: i64, k: u8) -> TestResult {
        let (a, b) = (BigInt::from(x), BigInt::from(y));
        let k = k % 64;
        let mut ok = &a & &b == BigInt::from(x & y)
            && &a | &b == BigInt::from(x | y)
            && &a ^ &b == BigInt::from(x ^ y)
            && !&a == BigInt::from(!x)
            && &a >> k == BigInt::from(x >> k)
            && &a << k == BigInt::from((x as i128) << k)
            && a.cmp(&b) == x.cmp(&y)
            && a.to_i64() == Some(x);
        if y != 0 {
            let (x, y) = (x as i128, y as i128);
            ok = ok && &a / &b == BigInt::from(x / y) && &a % &b == BigInt::from(x % y);
        }
        TestResult::from_bool(ok)
    }
    quickcheck(prop as fn(i64, i64, u8) -> TestResult);
}

#[test]
fn comparison_matches_oracle() {
    fn prop(a: Operand, b: Operand) -> bool {
        a.value.cmp(&b.value) == a.oracle.cmp(&b.oracle) && (a.value == b.value) == (a.oracle == b.oracle)
    }
    quickcheck(prop as fn(Operand, Operand) -> bool);
}
