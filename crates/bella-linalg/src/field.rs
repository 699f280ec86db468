// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Numeric Field Abstraction
// ─────────────────────────────────────────────────────────────────────
//! Capability set the group kernel is written against.
//!
//! Anything that behaves like a field (addition, multiplication, exact
//! zero test, conjugation, magnitude) can carry generator matrices.
//! `f64` and `Complex64` are provided; arbitrary-precision or algebraic
//! scalar types plug in by implementing this trait.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// Scalar field for matrix entries.
pub trait Field:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate (identity for real fields).
    fn conj(&self) -> Self;

    /// Absolute value / modulus as a real number.
    fn modulus(&self) -> f64;

    /// Principal square root. Real fields return NaN for negative input,
    /// exactly as `f64::sqrt` does.
    fn sqrt(&self) -> Self;

    /// Embed into the complex plane for projection to plot coordinates.
    fn to_complex(&self) -> Complex64;

    /// Embed a real constant.
    fn from_real(x: f64) -> Self;
}

impl Field for f64 {
    fn conj(&self) -> Self {
        *self
    }

    fn modulus(&self) -> f64 {
        self.abs()
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn to_complex(&self) -> Complex64 {
        Complex64::new(*self, 0.0)
    }

    fn from_real(x: f64) -> Self {
        x
    }
}

impl Field for Complex64 {
    fn conj(&self) -> Self {
        Complex64::conj(self)
    }

    fn modulus(&self) -> f64 {
        self.norm()
    }

    fn sqrt(&self) -> Self {
        Complex64::sqrt(*self)
    }

    fn to_complex(&self) -> Complex64 {
        *self
    }

    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_conj_is_identity() {
        assert_eq!(Field::conj(&-2.5f64), -2.5);
    }

    #[test]
    fn test_real_negative_sqrt_is_nan() {
        assert!(Field::sqrt(&-4.0f64).is_nan());
    }

    #[test]
    fn test_complex_conj() {
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(Field::conj(&z), Complex64::new(1.0, -2.0));
    }

    #[test]
    fn test_complex_modulus() {
        let z = Complex64::new(3.0, -4.0);
        assert!((z.modulus() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_sqrt_of_negative_real() {
        let r = Field::sqrt(&Complex64::new(-4.0, 0.0));
        assert!((r - Complex64::new(0.0, 2.0)).norm() < 1e-12, "sqrt(-4) = {r}");
    }

    #[test]
    fn test_to_complex_embeds_real() {
        assert_eq!(1.5f64.to_complex(), Complex64::new(1.5, 0.0));
    }
}
