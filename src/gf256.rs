//! Arithmetic over the Galois field GF(2^8).
//!
//! Elements are bytes. The field is built with the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (`0x11B`), so `0x57 * 0x83 == 0xC1`.
//!
//! The free functions operate on raw `u8` values. [`Gf256`] wraps the same
//! functions behind the usual operator traits for code that reads better as
//! arithmetic.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// The irreducible polynomial used for reduction, including the x^8 term.
pub const REDUCING_POLYNOMIAL: u16 = 0x11B;

/// Adds two field elements.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtracts two field elements. Identical to [`add`] in characteristic 2.
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies two field elements with shift-and-reduce.
///
/// Walks the bits of `b` from the low end. Each set bit adds the current
/// `a` into the product; `a` is then doubled and reduced whenever the shift
/// carries out of bit 7.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut product: u16 = 0;

    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= REDUCING_POLYNOMIAL;
        }
        b >>= 1;
    }

    product as u8
}

/// Raises `a` to the power `exp` by repeated squaring.
pub fn pow(a: u8, exp: u32) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }

    result
}

/// Returns the multiplicative inverse of `a`.
///
/// Every nonzero element satisfies `a^255 == 1`, so the inverse is `a^254`.
///
/// # Errors
///
/// Returns [`Error::ZeroInverse`] when `a` is zero.
pub fn inv(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(Error::ZeroInverse);
    }
    Ok(pow(a, 254))
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `b` is zero.
pub fn div(a: u8, b: u8) -> Result<u8> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(mul(a, inv(b)?))
}

/// A single element of GF(2^8).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Gf256(pub u8);

impl Gf256 {
    pub const ZERO: Gf256 = Gf256(0);
    pub const ONE: Gf256 = Gf256(1);

    pub fn new(value: u8) -> Self {
        Gf256(value)
    }

    /// Multiplicative inverse, failing for zero.
    pub fn inv(self) -> Result<Self> {
        inv(self.0).map(Gf256)
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        div(self.0, rhs.0).map(Gf256)
    }
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf256({:#04x})", self.0)
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Gf256(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Gf256(add(self.0, rhs.0))
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Gf256(sub(self.0, rhs.0))
    }
}

impl SubAssign for Gf256 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gf256(mul(self.0, rhs.0))
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
