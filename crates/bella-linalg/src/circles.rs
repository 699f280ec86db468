// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Circle Inversions
// ─────────────────────────────────────────────────────────────────────
//! Generalised circles (circles and lines) on the Riemann sphere, and
//! groups generated by inversions in them.
//!
//! An inversion is anti-holomorphic: its matrix `[[a, b], [c, d]]` acts by
//! `z ↦ (a z̄ + b) / (c z̄ + d)` and is not an element of PSL(2, C). The
//! composition of two inversions `A ∘ B` is holomorphic, with matrix
//! `A · B̄` (entrywise conjugate of `B`).

use num_complex::Complex64;

use bella_types::{BellaError, BellaResult};

use crate::field::Field;
use crate::matrix::Matrix2;
use crate::mobius::Point;

/// A circle or a line in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneralisedCircle {
    Circle { centre: Complex64, radius: f64 },
    /// The line through two distinct points.
    Line { p: Complex64, q: Complex64 },
}

impl GeneralisedCircle {
    pub fn is_line(&self) -> bool {
        matches!(self, GeneralisedCircle::Line { .. })
    }

    /// Determinant-one matrix of the inversion in this circle.
    pub fn inversion(&self) -> Matrix2<Complex64> {
        let m = match *self {
            GeneralisedCircle::Circle { centre, radius } => Matrix2::new(
                centre,
                Complex64::new(radius * radius - centre.norm_sqr(), 0.0),
                Complex64::new(1.0, 0.0),
                -centre.conj(),
            ),
            GeneralisedCircle::Line { p, q } => {
                let rot = Complex64::from_polar(1.0, 2.0 * (q - p).arg());
                Matrix2::new(
                    rot,
                    p - p.conj() * rot,
                    Complex64::new(0.0, 0.0),
                    Complex64::new(1.0, 0.0),
                )
            }
        };
        unit_determinant(&m)
    }
}

fn unit_determinant(m: &Matrix2<Complex64>) -> Matrix2<Complex64> {
    let k = Complex64::new(1.0, 0.0) / Field::sqrt(&m.det());
    m.scale(&k)
}

/// Composition `A ∘ B` of two inversions given by their matrices.
pub fn twisted_product(a: &Matrix2<Complex64>, b: &Matrix2<Complex64>) -> Matrix2<Complex64> {
    let b_bar = Matrix2::new(b.a.conj(), b.b.conj(), b.c.conj(), b.d.conj());
    a * &b_bar
}

/// Generators of the orientation-preserving half of the group generated
/// by inversions in `circles` (`(centre, radius)`) and `lines` (two points
/// each), taken in that order as `A1, …, An`.
///
/// Two inversions give the single generator `A1·A2`; more give the cyclic
/// products `A1A2, A2A3, …, AnA1`. Fewer than two give none.
pub fn generators_from_circle_inversions(
    circles: &[(Complex64, f64)],
    lines: &[(Complex64, Complex64)],
) -> Vec<Matrix2<Complex64>> {
    let mut inversions: Vec<Matrix2<Complex64>> = circles
        .iter()
        .map(|&(centre, radius)| GeneralisedCircle::Circle { centre, radius }.inversion())
        .chain(
            lines
                .iter()
                .map(|&(p, q)| GeneralisedCircle::Line { p, q }.inversion()),
        )
        .collect();

    if inversions.len() > 2 {
        inversions.push(inversions[0].clone());
    }
    inversions
        .windows(2)
        .map(|pair| twisted_product(&pair[0], &pair[1]))
        .collect()
}

fn almost_equal(z: &Point<Complex64>, w: &Point<Complex64>) -> bool {
    match (z, w) {
        (Point::Infinity, Point::Infinity) => true,
        (Point::Finite(z), Point::Finite(w)) => {
            let scale = 1.0_f64.max(z.norm()).max(w.norm());
            (z - w).norm() <= 1e-12 * scale
        }
        _ => false,
    }
}

/// The generalised circle through three distinct points of the sphere.
///
/// Collinear points, or any triple containing infinity, give a line.
pub fn circle_through_points(
    z1: &Point<Complex64>,
    z2: &Point<Complex64>,
    z3: &Point<Complex64>,
) -> BellaResult<GeneralisedCircle> {
    if almost_equal(z1, z2) || almost_equal(z2, z3) || almost_equal(z3, z1) {
        return Err(BellaError::DegenerateGeometry(format!(
            "circle needs three distinct points, got {z1:?}, {z2:?}, {z3:?}"
        )));
    }

    let (z1, z2, z3) = match (z1, z2, z3) {
        (Point::Infinity, Point::Finite(p), Point::Finite(q))
        | (Point::Finite(p), Point::Infinity, Point::Finite(q))
        | (Point::Finite(p), Point::Finite(q), Point::Infinity) => {
            return Ok(GeneralisedCircle::Line { p: *p, q: *q });
        }
        (Point::Finite(z1), Point::Finite(z2), Point::Finite(z3)) => (*z1, *z2, *z3),
        // At most one point is infinite once coincidences are excluded.
        _ => unreachable!("two infinite points compare equal"),
    };

    let w = (z3 - z1) / (z2 - z1);
    if w.im == 0.0 {
        return Ok(GeneralisedCircle::Line { p: z1, q: z2 });
    }
    let centre = (z2 - z1) * (w - w.norm_sqr()) / Complex64::new(0.0, 2.0 * w.im) + z1;
    let radius = (z1 - centre).norm();
    Ok(GeneralisedCircle::Circle { centre, radius })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mobius::{apply_point, fixed_points};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn fin(re: f64, im: f64) -> Point<Complex64> {
        Point::Finite(c(re, im))
    }

    /// Apply an anti-holomorphic matrix to a finite point.
    fn reflect(m: &Matrix2<Complex64>, z: Complex64) -> Complex64 {
        let zb = z.conj();
        (m.a * zb + m.b) / (m.c * zb + m.d)
    }

    #[test]
    fn test_circle_inversion_fixes_circle_and_swaps_centre() {
        let circle = GeneralisedCircle::Circle {
            centre: c(1.0, 2.0),
            radius: 3.0,
        };
        let m = circle.inversion();
        assert!((m.det() - c(1.0, 0.0)).norm() < 1e-12);
        let on_circle = c(4.0, 2.0);
        assert!((reflect(&m, on_circle) - on_circle).norm() < 1e-12);
        // 1 + 2i + 1 maps to 1 + 2i + 9.
        assert!((reflect(&m, c(2.0, 2.0)) - c(10.0, 2.0)).norm() < 1e-9);
    }

    #[test]
    fn test_line_reflection() {
        let line = GeneralisedCircle::Line {
            p: c(1.0, 0.0),
            q: c(1.0, 1.0),
        };
        let m = line.inversion();
        assert!((m.det() - c(1.0, 0.0)).norm() < 1e-12);
        assert!((reflect(&m, c(0.0, 5.0)) - c(2.0, 5.0)).norm() < 1e-12);
    }

    #[test]
    fn test_two_concentric_circles_give_dilation() {
        let gens = generators_from_circle_inversions(&[(c(0.0, 0.0), 1.0), (c(0.0, 0.0), 2.0)], &[]);
        assert_eq!(gens.len(), 1);
        let g = &gens[0];
        assert!((g.det() - c(1.0, 0.0)).norm() < 1e-12);
        // Inversion in |z| = 2, then in |z| = 1: z ↦ z / 4.
        let image = apply_point(g, &fin(8.0, 4.0));
        assert!(matches!(image, Point::Finite(z) if (z - c(2.0, 1.0)).norm() < 1e-12));
        let fps = fixed_points(g);
        assert_eq!(fps[0], Point::Infinity);
        assert!(matches!(fps[1], Point::Finite(z) if z.norm() < 1e-12));
    }

    #[test]
    fn test_two_parallel_lines_give_translation() {
        let gens = generators_from_circle_inversions(
            &[],
            &[(c(0.0, 0.0), c(0.0, 1.0)), (c(1.0, 0.0), c(1.0, 1.0))],
        );
        assert_eq!(gens.len(), 1);
        let image = apply_point(&gens[0], &fin(0.5, 0.5));
        assert!(matches!(image, Point::Finite(z) if (z - c(-1.5, 0.5)).norm() < 1e-12));
    }

    #[test]
    fn test_cyclic_products_for_three_inversions() {
        let circles = [(c(0.0, 0.0), 1.0), (c(3.0, 0.0), 1.0)];
        let lines = [(c(0.0, 5.0), c(1.0, 5.0))];
        let gens = generators_from_circle_inversions(&circles, &lines);
        assert_eq!(gens.len(), 3);
        let a: Vec<Matrix2<Complex64>> = circles
            .iter()
            .map(|&(centre, radius)| GeneralisedCircle::Circle { centre, radius }.inversion())
            .collect();
        let l = GeneralisedCircle::Line {
            p: lines[0].0,
            q: lines[0].1,
        }
        .inversion();
        assert!(gens[0].approx_eq(&twisted_product(&a[0], &a[1]), 1e-12));
        assert!(gens[2].approx_eq(&twisted_product(&l, &a[0]), 1e-12));
        for g in &gens {
            assert!((g.det() - c(1.0, 0.0)).norm() < 1e-9);
        }
    }

    #[test]
    fn test_fewer_than_two_inversions_give_no_generators() {
        assert!(generators_from_circle_inversions(&[(c(0.0, 0.0), 1.0)], &[]).is_empty());
        assert!(generators_from_circle_inversions(&[], &[]).is_empty());
    }

    #[test]
    fn test_circle_through_three_points() {
        let circle = circle_through_points(&fin(0.0, 0.0), &fin(1.0, 0.0), &fin(0.0, 1.0)).unwrap();
        match circle {
            GeneralisedCircle::Circle { centre, radius } => {
                assert!((centre - c(0.5, 0.5)).norm() < 1e-12);
                assert!((radius - 0.5f64.sqrt()).abs() < 1e-12);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_collinear_points_give_line() {
        let line = circle_through_points(&fin(0.0, 0.0), &fin(1.0, 1.0), &fin(2.0, 2.0)).unwrap();
        assert!(line.is_line());
        let through_infinity =
            circle_through_points(&fin(0.0, 0.0), &Point::Infinity, &fin(0.0, 3.0)).unwrap();
        assert_eq!(
            through_infinity,
            GeneralisedCircle::Line {
                p: c(0.0, 0.0),
                q: c(0.0, 3.0)
            }
        );
    }

    #[test]
    fn test_coincident_points_rejected() {
        let res = circle_through_points(&fin(1.0, 1.0), &fin(2.0, 0.0), &fin(1.0, 1.0));
        assert!(matches!(res, Err(BellaError::DegenerateGeometry(_))));
        let res = circle_through_points(&Point::Infinity, &fin(2.0, 0.0), &Point::Infinity);
        assert!(matches!(res, Err(BellaError::DegenerateGeometry(_))));
    }
}
