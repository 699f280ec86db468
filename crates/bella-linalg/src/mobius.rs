// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Möbius Transformations
// ─────────────────────────────────────────────────────────────────────
//! A matrix `[[a, b], [c, d]]` acts on the projective line by
//! `z ↦ (az + b) / (cz + d)`. This module holds the black-box formulas
//! the sampler and the Riley constructors need:
//!
//! - fixed points of a transformation,
//! - the isometric circle `|cz + d| = 1`,
//! - a simultaneous normalisation of two transformations.
//!
//! All comparisons against zero are exact, so a coefficient that is
//! merely tiny is treated as nonzero.

use bella_types::{BellaError, BellaResult};

use crate::field::Field;
use crate::matrix::{Matrix2, Vector2};

/// A point of the projective line over `F`.
#[derive(Debug, Clone, PartialEq)]
pub enum Point<F> {
    Finite(F),
    Infinity,
}

impl<F: Field> Point<F> {
    /// Homogeneous coordinates: `[z, 1]`, or `[1, 0]` for infinity.
    pub fn homogeneous(&self) -> Vector2<F> {
        match self {
            Point::Finite(z) => [z.clone(), F::one()],
            Point::Infinity => [F::one(), F::zero()],
        }
    }

    /// Project homogeneous coordinates back onto the line.
    pub fn from_homogeneous(v: Vector2<F>) -> Self {
        let [x, y] = v;
        if y.is_zero() {
            Point::Infinity
        } else {
            Point::Finite(x / y)
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn finite(&self) -> Option<&F> {
        match self {
            Point::Finite(z) => Some(z),
            Point::Infinity => None,
        }
    }
}

/// Image of `p` under the transformation `m`.
pub fn apply_point<F: Field>(m: &Matrix2<F>, p: &Point<F>) -> Point<F> {
    Point::from_homogeneous(m.apply(&p.homogeneous()))
}

/// Fixed points of `m` acting on the projective line.
///
/// Returns one point for parabolic (or identity-like) transformations and
/// two otherwise. When `c = 0` infinity is always listed first.
pub fn fixed_points<F: Field>(m: &Matrix2<F>) -> Vec<Point<F>> {
    let Matrix2 { a, b, c, d } = m;
    let d_minus_a = d.clone() - a.clone();

    if c.is_zero() {
        if d_minus_a.is_zero() {
            return vec![Point::Infinity];
        }
        return vec![Point::Infinity, Point::Finite(b.clone() / d_minus_a)];
    }

    let two_c = c.clone() + c.clone();
    let four = F::from_real(4.0);
    let disc = d_minus_a.clone() * d_minus_a.clone() + four * b.clone() * c.clone();
    if disc.is_zero() {
        return vec![Point::Finite(-d_minus_a / two_c)];
    }

    let root = disc.sqrt();
    vec![
        Point::Finite((-d_minus_a.clone() + root.clone()) / two_c.clone()),
        Point::Finite((-d_minus_a - root) / two_c),
    ]
}

/// Isometric circle of `m` as `(centre, radius)`.
///
/// The circle is `centre = -d/c`, `radius = 1/|c|`; it does not exist when
/// `c = 0` (the transformation fixes infinity), in which case `None` is
/// returned.
pub fn isometric_circle<F: Field>(m: &Matrix2<F>) -> Option<(F, f64)> {
    if m.c.is_zero() {
        return None;
    }
    let centre = -m.d.clone() / m.c.clone();
    let radius = 1.0 / m.c.modulus();
    Some((centre, radius))
}

/// Simultaneously normalise two transformations.
///
/// Returns a determinant-one `M` such that `M A M⁻¹` fixes infinity and
/// sends 0 to 1, and `M B M⁻¹` fixes 0. `M` is the cross-ratio map taking
/// `fix(B) → 0`, `A(fix(B)) → 1`, `fix(A) → ∞`.
///
/// For non-parabolic inputs it is not specified which of the two fixed
/// points gets normalised. Normalising the determinant roughly doubles the
/// absolute error of the entries.
pub fn normalise_pair<F: Field>(a: &Matrix2<F>, b: &Matrix2<F>) -> BellaResult<Matrix2<F>> {
    let fp_a = first_fixed_point(a);
    let fp_b = first_fixed_point(b);
    let a_of_fp_b = apply_point(a, &fp_b);

    let (z2, z3, z4) = (a_of_fp_b, fp_b, fp_a);
    if z2 == z3 || z3 == z4 || z4 == z2 {
        return Err(BellaError::DegenerateGeometry(format!(
            "fixed point of A = {z4:?}, fixed point of B = {z3:?}, A(fixed point of B) = {z2:?}"
        )));
    }

    let one = F::one();
    let zero = F::zero();
    let m = match (z2, z3, z4) {
        (Point::Infinity, Point::Finite(z3), Point::Finite(z4)) => {
            Matrix2::new(one.clone(), -z3, one, -z4)
        }
        (Point::Finite(z2), Point::Infinity, Point::Finite(z4)) => {
            Matrix2::new(zero, z2 - z4.clone(), one, -z4)
        }
        (Point::Finite(z2), Point::Finite(z3), Point::Infinity) => {
            Matrix2::new(one, -z3.clone(), zero, z2 - z3)
        }
        (Point::Finite(z2), Point::Finite(z3), Point::Finite(z4)) => {
            let p = z2.clone() - z4.clone();
            let q = z2 - z3.clone();
            Matrix2::new(p.clone(), -(z3 * p), q.clone(), -(z4 * q))
        }
        // Two of the three points are infinite, so they coincide.
        _ => {
            return Err(BellaError::DegenerateGeometry(
                "more than one normalisation point at infinity".to_string(),
            ))
        }
    };

    let k = F::one() / m.det().sqrt();
    Ok(m.scale(&k))
}

fn first_fixed_point<F: Field>(m: &Matrix2<F>) -> Point<F> {
    fixed_points(m)
        .into_iter()
        .next()
        .unwrap_or(Point::Infinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn close(p: &Point<Complex64>, z: Complex64) -> bool {
        matches!(p, Point::Finite(w) if (w - z).norm() < 1e-9)
    }

    #[test]
    fn test_homogeneous_roundtrip_infinity() {
        let p: Point<f64> = Point::Infinity;
        assert_eq!(p.homogeneous(), [1.0, 0.0]);
        assert_eq!(Point::from_homogeneous([2.0, 0.0]), Point::<f64>::Infinity);
    }

    #[test]
    fn test_apply_point_finite() {
        let m = Matrix2::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(apply_point(&m, &Point::Finite(2.0)), Point::Finite(3.0));
        assert_eq!(apply_point(&m, &Point::Infinity), Point::Infinity);
    }

    #[test]
    fn test_fixed_points_parabolic_at_infinity() {
        let m = Matrix2::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(fixed_points(&m), vec![Point::Infinity]);
    }

    #[test]
    fn test_fixed_points_affine() {
        // z -> 4z + 3 fixes infinity and -1.
        let m = Matrix2::new(2.0, 1.5, 0.0, 0.5);
        let fps = fixed_points(&m);
        assert_eq!(fps.len(), 2);
        assert!(fps[0].is_infinite());
        assert!((fps[1].finite().unwrap() - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_points_parabolic_finite() {
        let m = Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0));
        let fps = fixed_points(&m);
        assert_eq!(fps.len(), 1);
        assert!(close(&fps[0], c(0.0, 0.0)));
    }

    #[test]
    fn test_fixed_points_are_fixed() {
        let m = Matrix2::new(c(2.0, 1.0), c(1.0, 0.0), c(1.0, -1.0), c(1.0, 0.5));
        let fps = fixed_points(&m);
        assert_eq!(fps.len(), 2);
        for p in &fps {
            let z = *p.finite().unwrap();
            let image = apply_point(&m, p);
            assert!(close(&image, z), "{p:?} moved to {image:?}");
        }
    }

    #[test]
    fn test_isometric_circle_undefined_when_c_zero() {
        let m = Matrix2::new(2.0, 0.0, 0.0, 0.5);
        assert!(isometric_circle(&m).is_none());
    }

    #[test]
    fn test_isometric_circle_centre_radius() {
        let m = Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(2.0, 0.0), c(1.0, 1.0));
        let (centre, radius) = isometric_circle(&m).unwrap();
        assert!((centre - c(-0.5, -0.5)).norm() < 1e-12);
        assert!((radius - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalise_pair_properties() {
        let a = Matrix2::new(c(2.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.5, 0.0));
        let b = Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(3.0, 0.0), c(1.0, 0.0));
        let m = normalise_pair(&a, &b).unwrap();
        assert!((m.det() - c(1.0, 0.0)).norm() < 1e-9);

        let m_inv = m.inverse();
        let na = &(&m * &a) * &m_inv;
        let nb = &(&m * &b) * &m_inv;
        assert!(na.c.norm() < 1e-9, "M A M^-1 should fix infinity: {na:?}");
        assert!(close(&apply_point(&na, &Point::Finite(c(0.0, 0.0))), c(1.0, 0.0)));
        assert!(nb.b.norm() < 1e-9, "M B M^-1 should fix 0: {nb:?}");
    }

    #[test]
    fn test_normalise_pair_already_normal() {
        let a = Matrix2::new(1.0, 1.0, 0.0, 1.0);
        let b = Matrix2::new(1.0, 0.0, 1.0, 1.0);
        let m = normalise_pair(&a, &b).unwrap();
        assert!(m.approx_eq(&Matrix2::identity(), 1e-12), "{m:?}");
    }

    #[test]
    fn test_normalise_pair_degenerate() {
        let a = Matrix2::new(1.0, 1.0, 0.0, 1.0);
        let err = normalise_pair(&a, &a).unwrap_err();
        assert!(matches!(err, BellaError::DegenerateGeometry(_)));
    }
}
