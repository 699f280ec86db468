// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Linear Algebra over Numeric Fields
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Numeric foundation for the group kernel: a field abstraction that
//! real and complex scalars both satisfy, 2×2 matrices over it, and the
//! handful of Möbius-transformation formulas the samplers consume
//! (fixed points, isometric circles, simultaneous normalisation).
//! Generators can also be built from inversions in circles and lines.

pub mod circles;
pub mod field;
pub mod matrix;
pub mod mobius;

pub use circles::{
    circle_through_points, generators_from_circle_inversions, twisted_product, GeneralisedCircle,
};
pub use field::Field;
pub use matrix::{Matrix2, Vector2};
pub use mobius::{apply_point, fixed_points, isometric_circle, normalise_pair, Point};
