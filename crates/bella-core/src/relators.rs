// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Relator Set
// ─────────────────────────────────────────────────────────────────────
//! Known relations, closed under inversion and padded with the trivial
//! backtracks, and the prefix test used to prune Cayley graph walks.
//!
//! The test is local: "reduced from the left" only means that no known
//! relator is a prefix of the word. It says nothing about whether the
//! word is the shortest representative of its group element.

use std::collections::HashMap;

use parking_lot::Mutex;

use bella_linalg::Field;
use bella_types::{BellaError, BellaResult};

use crate::generators::GeneratorIndex;
use crate::{Letter, Word};

/// Closed relator set with a memoised prefix test.
///
/// Thread-safe: the memo table is guarded by a `parking_lot::Mutex`.
#[derive(Debug)]
pub struct RelatorSet {
    relators: Vec<Word>,
    user_count: usize,
    reduced: Mutex<HashMap<Word, bool>>,
}

impl RelatorSet {
    /// Close `user` under inversion and add `(g, inv(g))` for every letter.
    ///
    /// Every relator must be nonempty (the empty word is a prefix of every
    /// word) and use only letters of the alphabet.
    pub fn new<F: Field>(user: Vec<Word>, index: &GeneratorIndex<F>) -> BellaResult<Self> {
        for r in &user {
            if r.is_empty() {
                return Err(BellaError::Validation(
                    "relators must be nonempty words".to_string(),
                ));
            }
            index.check_word(r)?;
        }

        let user_count = user.len();
        let inverses: Vec<Word> = user.iter().map(|r| index.inv_word(r)).collect();
        let backtracks = (0..index.alphabet_size()).map(|g| vec![g, index.inv(g)]);

        let mut relators = user;
        relators.extend(inverses);
        relators.extend(backtracks);

        Ok(Self {
            relators,
            user_count,
            reduced: Mutex::new(HashMap::new()),
        })
    }

    /// False iff some relator is a prefix of `word`.
    pub fn is_reduced_from_left(&self, word: &[Letter]) -> bool {
        let cached = self.reduced.lock().get(word).copied();
        if let Some(reduced) = cached {
            return reduced;
        }
        let reduced = !self.relators.iter().any(|r| word.starts_with(r));
        self.reduced.lock().insert(word.to_vec(), reduced);
        reduced
    }

    /// The full closed set: user relators, their inverses, then backtracks.
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Number of relators supplied by the caller.
    pub fn user_count(&self) -> usize {
        self.user_count
    }

    pub fn len(&self) -> usize {
        self.relators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relators.is_empty()
    }

    /// Number of memoised prefix tests.
    pub fn cached_len(&self) -> usize {
        self.reduced.lock().len()
    }
}
