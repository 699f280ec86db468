// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Group Cache
// ─────────────────────────────────────────────────────────────────────
//! The aggregate: generators, relators, and the two memo tables.
//!
//! Walks, searches, and samplers are implemented as further `impl`
//! blocks on [`GroupCache`] in their own modules.

use bella_linalg::{fixed_points, isometric_circle, Field, Matrix2, Point};
use bella_types::{BellaResult, GroupConfig};

use crate::generators::GeneratorIndex;
use crate::matrix_cache::MatrixCache;
use crate::relators::RelatorSet;
use crate::{Letter, Word};

/// A finitely generated group of 2×2 matrices over `F`.
///
/// Logically immutable after construction; only the memo tables grow.
#[derive(Debug)]
pub struct GroupCache<F> {
    index: GeneratorIndex<F>,
    relators: RelatorSet,
    matrices: MatrixCache<F>,
}

impl<F: Field> GroupCache<F> {
    /// Construct with default options (determinant check at 1e-5).
    pub fn new(generators: Vec<Matrix2<F>>, relators: Vec<Word>) -> BellaResult<Self> {
        Self::with_config(generators, relators, &GroupConfig::default())
    }

    /// Construct from generator matrices and relator words.
    ///
    /// Relator letters index the alphabet built from `generators`
    /// (`[0, n)` primaries, `[n, 2n)` inverses).
    pub fn with_config(
        generators: Vec<Matrix2<F>>,
        relators: Vec<Word>,
        config: &GroupConfig,
    ) -> BellaResult<Self> {
        config.validate()?;
        let index = GeneratorIndex::new(generators, config);
        let relators = RelatorSet::new(relators, &index)?;
        log::debug!(
            "group cache: {} generators, {} user relators ({} closed)",
            index.len(),
            relators.user_count(),
            relators.len()
        );
        Ok(Self {
            index,
            relators,
            matrices: MatrixCache::new(),
        })
    }

    /// Number of primary generators `n` (inverses not included).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of letters, `2n`.
    pub fn alphabet_size(&self) -> usize {
        self.index.alphabet_size()
    }

    pub fn generators(&self) -> &GeneratorIndex<F> {
        &self.index
    }

    pub fn relators(&self) -> &RelatorSet {
        &self.relators
    }

    /// Number of words with a cached matrix.
    pub fn cached_matrices(&self) -> usize {
        self.matrices.len()
    }

    pub fn inv(&self, letter: Letter) -> Letter {
        self.index.inv(letter)
    }

    pub fn inv_word(&self, word: &[Letter]) -> Word {
        self.index.inv_word(word)
    }

    /// Matrix of `word`; the empty word is the identity.
    ///
    /// # Panics
    /// If `word` contains a letter outside the alphabet. Use
    /// [`try_evaluate`](Self::try_evaluate) for unchecked input.
    pub fn evaluate(&self, word: &[Letter]) -> Matrix2<F> {
        self.matrices.evaluate(&self.index, word)
    }

    /// Like [`evaluate`](Self::evaluate), but rejects invalid letters.
    pub fn try_evaluate(&self, word: &[Letter]) -> BellaResult<Matrix2<F>> {
        self.index.check_word(word)?;
        Ok(self.evaluate(word))
    }

    /// False iff `word` begins with a known relator.
    pub fn is_reduced_from_left(&self, word: &[Letter]) -> bool {
        self.relators.is_reduced_from_left(word)
    }

    /// Fixed points of `word` acting on the projective line.
    pub fn fixed_points(&self, word: &[Letter]) -> Vec<Point<F>> {
        fixed_points(&self.evaluate(word))
    }

    /// Isometric circle `(centre, radius)` of `word`, or `None` when the
    /// lower-left entry is zero and the circle is undefined.
    pub fn isometric_circle(&self, word: &[Letter]) -> Option<(F, f64)> {
        isometric_circle(&self.evaluate(word))
    }

    /// The subgroup generated by the given words, without relators.
    pub fn subgroup(&self, words: &[Word]) -> BellaResult<GroupCache<F>> {
        let mut generators = Vec::with_capacity(words.len());
        for w in words {
            generators.push(self.try_evaluate(w)?);
        }
        GroupCache::new(generators, Vec::new())
    }
}
