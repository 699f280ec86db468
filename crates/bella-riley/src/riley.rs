// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Riley Group Factory
// ─────────────────────────────────────────────────────────────────────
//! [`RileyGroup`] wraps a [`GroupCache<Complex64>`] for the generators
//!
//! ```text
//! X = [[α, 1], [0, ᾱ]]    α = e^{iθ}
//! Y = [[β, 0], [μ, β̄]]    β = e^{iη}
//! ```
//!
//! and translates the string labels `X, Y, x, y` to letters.

use std::f64::consts::PI;

use num_complex::Complex64;

use bella_core::{GroupCache, Letter, Word};
use bella_linalg::{fixed_points, Matrix2, Point};
use bella_types::{BellaError, BellaResult};

use crate::farey::{farey_string, FareyTree};

/// A Riley group and its label table.
#[derive(Debug)]
pub struct RileyGroup {
    alpha: Complex64,
    beta: Complex64,
    mu: Complex64,
    group: GroupCache<Complex64>,
}

impl RileyGroup {
    /// Build the group for rotation angles `theta`, `eta` and parameter `mu`.
    ///
    /// When the order `p` of `X` (resp. `q` of `Y`) is known, `X^p`
    /// (resp. `Y^q`) is registered as a relator. An order of zero is
    /// rejected.
    pub fn new(
        theta: f64,
        eta: f64,
        mu: Complex64,
        p: Option<u32>,
        q: Option<u32>,
    ) -> BellaResult<Self> {
        let alpha = Complex64::from_polar(1.0, theta);
        let beta = Complex64::from_polar(1.0, eta);
        let x = Matrix2::new(alpha, Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), alpha.conj());
        let y = Matrix2::new(beta, Complex64::new(0.0, 0.0), mu, beta.conj());

        let mut relators = Vec::new();
        for (letter, order) in [(0, p), (1, q)] {
            match order {
                Some(0) => {
                    return Err(BellaError::Validation(format!(
                        "generator {letter} has order 0"
                    )))
                }
                Some(k) => relators.push(vec![letter; k as usize]),
                None => {}
            }
        }

        log::debug!("riley group: theta={theta}, eta={eta}, mu={mu}, p={p:?}, q={q:?}");
        let group = GroupCache::new(vec![x, y], relators)?;
        Ok(Self {
            alpha,
            beta,
            mu,
            group,
        })
    }

    /// The classical Riley group with `X` of order `p` and `Y` of order `q`:
    /// `θ = π/p`, `η = π/q`.
    pub fn classical(p: u32, q: u32, mu: Complex64) -> BellaResult<Self> {
        if p == 0 || q == 0 {
            return Err(BellaError::Validation(format!(
                "orders must be positive, got p={p}, q={q}"
            )));
        }
        Self::new(PI / p as f64, PI / q as f64, mu, Some(p), Some(q))
    }

    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    pub fn mu(&self) -> Complex64 {
        self.mu
    }

    pub fn group(&self) -> &GroupCache<Complex64> {
        &self.group
    }

    /// Letter for a single label.
    pub fn letter(&self, label: char) -> BellaResult<Letter> {
        match label {
            'X' => Ok(0),
            'Y' => Ok(1),
            'x' => Ok(self.group.inv(0)),
            'y' => Ok(self.group.inv(1)),
            other => Err(BellaError::Lookup(format!("unknown generator label {other:?}"))),
        }
    }

    /// Translate a label string such as `"XYxy"` into a word.
    pub fn string_to_word(&self, labels: &str) -> BellaResult<Word> {
        labels.chars().map(|ch| self.letter(ch)).collect()
    }

    pub fn farey_word(&self, r: u64, s: u64) -> BellaResult<Word> {
        self.string_to_word(&farey_string(r, s)?)
    }

    /// Matrix of the Farey word `W_{r/s}`, memoized by the group cache.
    pub fn farey_matrix(&self, r: u64, s: u64) -> BellaResult<Matrix2<Complex64>> {
        let word = self.farey_word(r, s)?;
        Ok(self.group.evaluate(&word))
    }

    pub fn farey_fixed_points(&self, r: u64, s: u64) -> BellaResult<Vec<Point<Complex64>>> {
        Ok(fixed_points(&self.farey_matrix(r, s)?))
    }

    /// Guess which rational pleating ray `mu` lies near.
    ///
    /// Walks the Farey tree up to `max_denominator` and returns the first
    /// `r/s` whose Farey trace `v` satisfies `Re v < -2` and
    /// `2·atan(|Im v / Re v|)/π < eps`.
    pub fn guess_radial_coordinate(
        &self,
        eps: f64,
        max_denominator: u64,
    ) -> BellaResult<Option<(u64, u64)>> {
        for (r, s) in FareyTree::new(max_denominator) {
            let v = self.farey_matrix(r, s)?.trace();
            if v.re < -2.0 && 2.0 * (v.im / v.re).abs().atan() / PI < eps {
                return Ok(Some((r, s)));
            }
        }
        log::debug!("no pleating ray found for mu={} up to denominator {max_denominator}", self.mu);
        Ok(None)
    }
}
