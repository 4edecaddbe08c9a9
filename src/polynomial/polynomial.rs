// src/polynomial/polynomial.rs

use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};
use num::{One, Zero};
use log::trace;
use crate::error::{ArithmeticError, Result};
use crate::field::z3::Z3;
use crate::polynomial::division;

static ZERO_COEFFICIENT: Z3 = Z3::ZERO;

/// A polynomial with coefficients in GF(3), stored low power first.
///
/// Every constructor and mutator leaves the value normalized: the coefficient
/// vector is never empty, and its last entry is nonzero unless the polynomial
/// is the zero polynomial `[0]`. `degree()` therefore never has to rescan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coefficients: Vec<Z3>,
}

impl Polynomial {
    /// Builds a polynomial from the coefficients of x^0 up to x^degree_hint.
    /// Entries beyond the hint are ignored, missing ones read as zero, and
    /// every integer is reduced mod 3.
    pub fn new(degree_hint: usize, coefficients: &[i64]) -> Self {
        let coefficients: Vec<Z3> = coefficients
            .iter()
            .take(degree_hint.saturating_add(1))
            .map(|&c| Z3::new(c))
            .collect();
        Polynomial::from_vec(coefficients)
    }

    pub fn from_coefficients(coefficients: &[Z3]) -> Self {
        Polynomial::from_vec(coefficients.to_vec())
    }

    pub(crate) fn from_vec(coefficients: Vec<Z3>) -> Self {
        let mut polynomial = Polynomial { coefficients };
        polynomial.normalize();
        polynomial
    }

    pub fn zero() -> Self {
        Polynomial {
            coefficients: vec![Z3::ZERO],
        }
    }

    pub fn one() -> Self {
        Polynomial {
            coefficients: vec![Z3::ONE],
        }
    }

    /// `coefficient * x^power`; the zero polynomial when the coefficient is zero.
    pub fn monomial(coefficient: Z3, power: usize) -> Self {
        if coefficient.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients = vec![Z3::ZERO; power + 1];
        coefficients[power] = coefficient;
        Polynomial { coefficients }
    }

    /// Strips trailing zero coefficients, collapsing to `[0]` if nothing is left.
    pub fn normalize(&mut self) -> &mut Self {
        let before = self.coefficients.len();
        while self.coefficients.last().map_or(false, |c| c.is_zero()) {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(Z3::ZERO);
        }
        if self.coefficients.len() != before {
            trace!("normalize: degree {} -> {}", before.saturating_sub(1), self.degree());
        }
        self
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    pub fn leading_coefficient(&self) -> Z3 {
        self.coefficients[self.degree()]
    }

    pub fn coefficients(&self) -> &[Z3] {
        &self.coefficients
    }

    /// Coefficient of x^power; zero past the degree.
    pub fn coefficient(&self, power: usize) -> Z3 {
        self.coefficients.get(power).copied().unwrap_or(Z3::ZERO)
    }

    /// Writing past the degree grows the polynomial with zero fill, unless the
    /// value is zero, which is a no-op. Zeroing the leading term renormalizes.
    pub fn set_coefficient(&mut self, power: usize, value: Z3) {
        if power > self.degree() {
            if value.is_zero() {
                return;
            }
            self.coefficients.resize(power + 1, Z3::ZERO);
            self.coefficients[power] = value;
            return;
        }

        self.coefficients[power] = value;
        if power == self.degree() && value.is_zero() {
            self.normalize();
        }
    }

    pub fn scalar_multiply(&self, scalar: Z3) -> Self {
        if scalar.is_zero() {
            return Polynomial::zero();
        }
        let coefficients = self.coefficients.iter().map(|&c| c * scalar).collect();
        Polynomial::from_vec(coefficients)
    }

    /// Fails with `DivisionByZero` when the scalar is zero; `self` is untouched either way.
    pub fn try_div_scalar(&self, scalar: Z3) -> Result<Self> {
        let inverse = scalar
            .inverse()
            .map_err(|_| ArithmeticError::DivisionByZero { context: "scalar" })?;
        Ok(self.scalar_multiply(inverse))
    }

    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        division::divide(self, divisor)
    }

    /// Horner evaluation at a field point.
    pub fn evaluate(&self, x: Z3) -> Z3 {
        self.coefficients
            .iter()
            .rev()
            .fold(Z3::ZERO, |acc, &c| acc * x + c)
    }

    pub fn square(&self) -> Self {
        self * self
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl Index<usize> for Polynomial {
    type Output = Z3;

    fn index(&self, power: usize) -> &Z3 {
        self.coefficients.get(power).unwrap_or(&ZERO_COEFFICIENT)
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'b Polynomial) -> Polynomial {
        let max_degree = self.degree().max(other.degree());
        let coefficients = (0..=max_degree)
            .map(|i| self.coefficient(i) + other.coefficient(i))
            .collect();
        Polynomial::from_vec(coefficients)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let coefficients = self.coefficients.iter().map(|&c| -c).collect();
        Polynomial::from_vec(coefficients)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'b Polynomial) -> Polynomial {
        self + &(-other)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        &self - &other
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'b Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let mut coefficients = vec![Z3::ZERO; self.degree() + other.degree() + 1];
        for (i, &b) in other.coefficients.iter().enumerate() {
            if b.is_zero() {
                continue;
            }
            for (j, &a) in self.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::from_vec(coefficients)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        &self * &other
    }
}

impl<'a> Mul<Z3> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: Z3) -> Polynomial {
        self.scalar_multiply(scalar)
    }
}

impl Mul<Z3> for Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: Z3) -> Polynomial {
        self.scalar_multiply(scalar)
    }
}

impl<'a> Mul<&'a Polynomial> for Z3 {
    type Output = Polynomial;

    fn mul(self, polynomial: &'a Polynomial) -> Polynomial {
        polynomial.scalar_multiply(self)
    }
}

impl Mul<Polynomial> for Z3 {
    type Output = Polynomial;

    fn mul(self, polynomial: Polynomial) -> Polynomial {
        polynomial.scalar_multiply(self)
    }
}

/// Panics on a zero scalar; use [`Polynomial::try_div_scalar`] to handle it.
impl<'a> Div<Z3> for &'a Polynomial {
    type Output = Polynomial;

    fn div(self, scalar: Z3) -> Polynomial {
        match self.try_div_scalar(scalar) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Div<Z3> for Polynomial {
    type Output = Polynomial;

    fn div(self, scalar: Z3) -> Polynomial {
        &self / scalar
    }
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &'a Polynomial) {
        *self = &*self + other;
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, other: Polynomial) {
        *self += &other;
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &'a Polynomial) {
        *self = &*self - other;
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, other: Polynomial) {
        *self -= &other;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, other: &'a Polynomial) {
        *self = &*self * other;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, other: Polynomial) {
        *self *= &other;
    }
}

impl MulAssign<Z3> for Polynomial {
    fn mul_assign(&mut self, scalar: Z3) {
        *self = self.scalar_multiply(scalar);
    }
}

impl DivAssign<Z3> for Polynomial {
    fn div_assign(&mut self, scalar: Z3) {
        *self = &*self / scalar;
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
