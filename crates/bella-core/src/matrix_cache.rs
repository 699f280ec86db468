// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Matrix Cache
// ─────────────────────────────────────────────────────────────────────
//! Memoised word → matrix evaluation.
//!
//! `evaluate(w) = M[w[0]] · evaluate(w[1..])`, with the empty word
//! mapping to the identity. Every suffix visited along the way is cached,
//! so walks that extend words on the left reuse the previous product and
//! pay one matrix multiplication per step.

use std::collections::HashMap;

use parking_lot::Mutex;

use bella_linalg::{Field, Matrix2};

use crate::generators::GeneratorIndex;
use crate::{Letter, Word};

/// Append-only word → matrix table.
///
/// Thread-safe: guarded by a `parking_lot::Mutex`. Entries are never
/// evicted or overwritten.
#[derive(Debug)]
pub struct MatrixCache<F> {
    table: Mutex<HashMap<Word, Matrix2<F>>>,
}

impl<F: Field> MatrixCache<F> {
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert(Word::new(), Matrix2::identity());
        Self {
            table: Mutex::new(table),
        }
    }

    /// Evaluate `word` against the alphabet in `index`.
    ///
    /// # Panics
    /// If `word` contains a letter outside the alphabet.
    pub fn evaluate(&self, index: &GeneratorIndex<F>, word: &[Letter]) -> Matrix2<F> {
        let mut table = self.table.lock();
        if let Some(m) = table.get(word) {
            return m.clone();
        }

        // Longest cached proper suffix; the empty suffix is always present.
        let mut start = word.len();
        let mut acc = Matrix2::identity();
        for k in 1..=word.len() {
            if let Some(m) = table.get(&word[k..]) {
                start = k;
                acc = m.clone();
                break;
            }
        }

        for i in (0..start).rev() {
            acc = index.matrix(word[i]) * &acc;
            table.insert(word[i..].to_vec(), acc.clone());
        }
        acc
    }

    /// Number of cached words, including the empty word.
    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    /// Always false: the empty word is cached at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, word: &[Letter]) -> bool {
        self.table.lock().contains_key(word)
    }
}

impl<F: Field> Default for MatrixCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
