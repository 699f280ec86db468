// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Generator Index
// ─────────────────────────────────────────────────────────────────────
//! The 2n-letter alphabet: primary generators followed by their matrix
//! inverses, and the letter involution pairing them.

use bella_linalg::{Field, Matrix2};
use bella_types::{BellaError, BellaResult, GroupConfig};

use crate::{Letter, Word};

/// Generators, inverses, and the inverse-letter map.
#[derive(Debug, Clone)]
pub struct GeneratorIndex<F> {
    /// Number of primary generators (never zero).
    n: usize,
    /// `2n` matrices: primaries at `[0, n)`, inverses at `[n, 2n)`.
    matrices: Vec<Matrix2<F>>,
    /// `inv[x]` is the letter of the inverse of `x`.
    inv: Vec<Letter>,
    /// Primary generators whose determinant failed the ±1 check.
    non_unit: Vec<usize>,
}

impl<F: Field> GeneratorIndex<F> {
    /// Build the alphabet from `n >= 0` primary generators.
    ///
    /// An empty list is replaced by the single identity generator. Unless
    /// `config.disable_det_warning` is set, every generator whose
    /// determinant is not within `config.det_tolerance` of ±1 is logged
    /// and recorded; construction still succeeds.
    pub fn new(generators: Vec<Matrix2<F>>, config: &GroupConfig) -> Self {
        let mut non_unit = Vec::new();
        if !config.disable_det_warning {
            for (i, g) in generators.iter().enumerate() {
                let det = g.det();
                let off_plus = (det.clone() - F::one()).modulus();
                let off_minus = (-det.clone() - F::one()).modulus();
                if off_plus > config.det_tolerance && off_minus > config.det_tolerance {
                    log::warn!("generator {i} does not have unit determinant: det = {det:?}");
                    non_unit.push(i);
                }
            }
        }

        let primaries = if generators.is_empty() {
            vec![Matrix2::identity()]
        } else {
            generators
        };
        let n = primaries.len();

        let inverses: Vec<Matrix2<F>> = primaries.iter().map(Matrix2::inverse).collect();
        let mut matrices = primaries;
        matrices.extend(inverses);

        let inv = (n..2 * n).chain(0..n).collect();

        Self {
            n,
            matrices,
            inv,
            non_unit,
        }
    }

    /// Number of primary generators.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: the alphabet is padded with the identity if needed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of letters, `2n`.
    pub fn alphabet_size(&self) -> usize {
        2 * self.n
    }

    /// Inverse letter: `g ↦ g + n` on primaries, `g ↦ g - n` on inverses.
    ///
    /// # Panics
    /// If `letter` is outside the alphabet.
    pub fn inv(&self, letter: Letter) -> Letter {
        self.inv[letter]
    }

    /// Inverse word: reverse the letters and invert each one.
    pub fn inv_word(&self, word: &[Letter]) -> Word {
        word.iter().rev().map(|&x| self.inv(x)).collect()
    }

    /// Matrix of a single letter.
    ///
    /// # Panics
    /// If `letter` is outside the alphabet.
    pub fn matrix(&self, letter: Letter) -> &Matrix2<F> {
        &self.matrices[letter]
    }

    /// All `2n` matrices in letter order.
    pub fn matrices(&self) -> &[Matrix2<F>] {
        &self.matrices
    }

    /// Primary generators flagged by the determinant check.
    pub fn non_unit_generators(&self) -> &[usize] {
        &self.non_unit
    }

    /// Reject any letter outside `[0, 2n)`.
    pub fn check_word(&self, word: &[Letter]) -> BellaResult<()> {
        let alphabet = self.alphabet_size();
        match word.iter().find(|&&x| x >= alphabet) {
            Some(&letter) => Err(BellaError::InvalidLetter { letter, alphabet }),
            None => Ok(()),
        }
    }
}
