// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — 2×2 Matrices
// ─────────────────────────────────────────────────────────────────────
//! Dense 2×2 matrices `[[a, b], [c, d]]` over any [`Field`].
//!
//! Matrices act on column vectors from the left, so a product `A · B`
//! applies `B` first when read as a transformation.

use std::ops::Mul;

use crate::field::Field;

/// Column vector `[x, y]` in homogeneous coordinates.
pub type Vector2<F> = [F; 2];

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix2<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
}

impl<F: Field> Matrix2<F> {
    pub fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    /// Build from rows `[[a, b], [c, d]]`.
    pub fn from_rows(rows: [[F; 2]; 2]) -> Self {
        let [[a, b], [c, d]] = rows;
        Self { a, b, c, d }
    }

    pub fn identity() -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one())
    }

    pub fn det(&self) -> F {
        self.a.clone() * self.d.clone() - self.b.clone() * self.c.clone()
    }

    pub fn trace(&self) -> F {
        self.a.clone() + self.d.clone()
    }

    /// Matrix inverse `(1/det) · [[d, -b], [-c, a]]`.
    ///
    /// A singular matrix divides by zero in the underlying field; the
    /// result is whatever the field produces (inf/NaN for floats).
    pub fn inverse(&self) -> Self {
        let k = F::one() / self.det();
        Self::new(
            k.clone() * self.d.clone(),
            k.clone() * -self.b.clone(),
            k.clone() * -self.c.clone(),
            k * self.a.clone(),
        )
    }

    /// Multiply every entry by `k`.
    pub fn scale(&self, k: &F) -> Self {
        Self::new(
            k.clone() * self.a.clone(),
            k.clone() * self.b.clone(),
            k.clone() * self.c.clone(),
            k.clone() * self.d.clone(),
        )
    }

    /// `M · v` for a column vector `v`.
    pub fn apply(&self, v: &Vector2<F>) -> Vector2<F> {
        let [x, y] = v;
        [
            self.a.clone() * x.clone() + self.b.clone() * y.clone(),
            self.c.clone() * x.clone() + self.d.clone() * y.clone(),
        ]
    }

    /// Largest entrywise modulus of `self - other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        [
            (self.a.clone() - other.a.clone()).modulus(),
            (self.b.clone() - other.b.clone()).modulus(),
            (self.c.clone() - other.c.clone()).modulus(),
            (self.d.clone() - other.d.clone()).modulus(),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Entrywise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.max_abs_diff(other) <= tol
    }
}

impl<F: Field> Mul<&Matrix2<F>> for &Matrix2<F> {
    type Output = Matrix2<F>;

    fn mul(self, rhs: &Matrix2<F>) -> Matrix2<F> {
        Matrix2::new(
            self.a.clone() * rhs.a.clone() + self.b.clone() * rhs.c.clone(),
            self.a.clone() * rhs.b.clone() + self.b.clone() * rhs.d.clone(),
            self.c.clone() * rhs.a.clone() + self.d.clone() * rhs.c.clone(),
            self.c.clone() * rhs.b.clone() + self.d.clone() * rhs.d.clone(),
        )
    }
}

impl<F: Field> Mul for Matrix2<F> {
    type Output = Matrix2<F>;

    fn mul(self, rhs: Matrix2<F>) -> Matrix2<F> {
        &self * &rhs
    }
}
