// src/field/z3.rs

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num::{BigInt, Integer, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use crate::error::{ArithmeticError, Result};

const MODULUS: i64 = 3;

/// An element of the prime field GF(3). The stored value is always in {0, 1, 2}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Z3 {
    value: u8,
}

impl Z3 {
    pub const ZERO: Z3 = Z3 { value: 0 };
    pub const ONE: Z3 = Z3 { value: 1 };
    pub const TWO: Z3 = Z3 { value: 2 };

    /// Reduces any integer into {0, 1, 2}; negative inputs wrap upward.
    pub fn new(number: i64) -> Self {
        Z3 {
            value: number.mod_floor(&MODULUS) as u8,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set_value(&mut self, number: i64) {
        *self = Z3::new(number);
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Multiplicative inverse from the field's inverse table: 1 and 2 are each their own inverse.
    pub fn inverse(&self) -> Result<Z3> {
        match self.value {
            0 => Err(ArithmeticError::DivisionByZero { context: "field element" }),
            1 => Ok(Z3::ONE),
            _ => Ok(Z3::TWO),
        }
    }

    pub fn checked_div(self, divisor: Z3) -> Result<Z3> {
        Ok(self * divisor.inverse()?)
    }
}

impl From<i64> for Z3 {
    fn from(number: i64) -> Self {
        Z3::new(number)
    }
}

/// Reduces an integer of any size, as read from text input.
impl From<&BigInt> for Z3 {
    fn from(number: &BigInt) -> Self {
        let reduced = number.mod_floor(&BigInt::from(MODULUS));
        Z3 {
            value: reduced.to_u8().unwrap_or(0),
        }
    }
}

impl From<Z3> for i64 {
    fn from(element: Z3) -> Self {
        element.value as i64
    }
}

impl Display for Z3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

impl Add for Z3 {
    type Output = Z3;

    fn add(self, other: Z3) -> Z3 {
        Z3 {
            value: (self.value + other.value) % 3,
        }
    }
}

impl Sub for Z3 {
    type Output = Z3;

    fn sub(self, other: Z3) -> Z3 {
        Z3 {
            value: (self.value + 3 - other.value) % 3,
        }
    }
}

impl Mul for Z3 {
    type Output = Z3;

    fn mul(self, other: Z3) -> Z3 {
        Z3 {
            value: (self.value * other.value) % 3,
        }
    }
}

impl Neg for Z3 {
    type Output = Z3;

    fn neg(self) -> Z3 {
        match self.value {
            0 => Z3::ZERO,
            1 => Z3::TWO,
            _ => Z3::ONE,
        }
    }
}

/// Panics on a zero divisor; use [`Z3::checked_div`] to handle it.
impl Div for Z3 {
    type Output = Z3;

    fn div(self, other: Z3) -> Z3 {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl AddAssign for Z3 {
    fn add_assign(&mut self, other: Z3) {
        *self = *self + other;
    }
}

impl SubAssign for Z3 {
    fn sub_assign(&mut self, other: Z3) {
        *self = *self - other;
    }
}

impl MulAssign for Z3 {
    fn mul_assign(&mut self, other: Z3) {
        *self = *self * other;
    }
}

impl DivAssign for Z3 {
    fn div_assign(&mut self, other: Z3) {
        *self = *self / other;
    }
}

impl Zero for Z3 {
    fn zero() -> Self {
        Z3::ZERO
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl One for Z3 {
    fn one() -> Self {
        Z3::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [Z3; 3] {
        [Z3::ZERO, Z3::ONE, Z3::TWO]
    }

    #[test]
    fn test_new_reduces_any_integer() {
        assert_eq!(Z3::new(0).value(), 0);
        assert_eq!(Z3::new(4).value(), 1);
        assert_eq!(Z3::new(5).value(), 2);
        assert_eq!(Z3::new(-1).value(), 2);
        assert_eq!(Z3::new(-3).value(), 0);
        assert_eq!(Z3::new(-7).value(), 2);
        assert_eq!(Z3::new(i64::MIN).value(), Z3::new(i64::MIN % 3).value());
    }

    #[test]
    fn test_from_bigint_beyond_i64() {
        let big: BigInt = "99999999999999999999".parse().unwrap();
        assert_eq!(Z3::from(&big), Z3::ZERO);
        let big: BigInt = "100000000000000000000".parse().unwrap();
        assert_eq!(Z3::from(&big), Z3::ONE);
        let negative: BigInt = "-100000000000000000000".parse().unwrap();
        assert_eq!(Z3::from(&negative), Z3::TWO);
        assert_eq!(Z3::from(&BigInt::from(-7)), Z3::new(-7));
    }

    #[test]
    fn test_set_value_rereduces() {
        let mut element = Z3::ONE;
        element.set_value(-4);
        assert_eq!(element, Z3::TWO);
    }

    #[test]
    fn test_add_and_multiply_commutative_and_associative() {
        for a in all() {
            for b in all() {
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);
                for c in all() {
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }
        }
    }

    #[test]
    fn test_subtract_never_negative() {
        assert_eq!(Z3::ZERO - Z3::ONE, Z3::TWO);
        assert_eq!(Z3::ONE - Z3::TWO, Z3::TWO);
        assert_eq!(Z3::TWO - Z3::ONE, Z3::ONE);
    }

    #[test]
    fn test_negation_table_matches_subtraction_from_zero() {
        for a in all() {
            assert_eq!(-a, Z3::ZERO - a);
            assert_eq!(a + (-a), Z3::ZERO);
        }
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Z3::ONE * Z3::ONE.inverse().unwrap(), Z3::ONE);
        assert_eq!(Z3::TWO * Z3::TWO.inverse().unwrap(), Z3::ONE);
        assert_eq!(
            Z3::ZERO.inverse(),
            Err(ArithmeticError::DivisionByZero { context: "field element" })
        );
    }

    #[test]
    fn test_division() {
        assert_eq!(Z3::TWO / Z3::TWO, Z3::ONE);
        assert_eq!(Z3::ONE / Z3::TWO, Z3::TWO);
        assert_eq!(Z3::ZERO / Z3::ONE, Z3::ZERO);
        for a in all() {
            for b in [Z3::ONE, Z3::TWO] {
                assert_eq!((a / b) * b, a);
            }
        }
    }

    #[test]
    fn test_checked_div_by_zero_leaves_operand() {
        let a = Z3::TWO;
        assert!(a.checked_div(Z3::ZERO).is_err());
        assert_eq!(a, Z3::TWO);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Z3::ONE / Z3::ZERO;
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = Z3::TWO;
        a += Z3::TWO;
        assert_eq!(a, Z3::ONE);
        a -= Z3::TWO;
        assert_eq!(a, Z3::TWO);
        a *= Z3::TWO;
        assert_eq!(a, Z3::ONE);
        a /= Z3::TWO;
        assert_eq!(a, Z3::TWO);
    }

    #[test]
    fn test_serde_reduces_on_read() {
        let element: Z3 = serde_json::from_str("-1").unwrap();
        assert_eq!(element, Z3::TWO);
        assert_eq!(serde_json::to_string(&Z3::TWO).unwrap(), "2");
    }
}
