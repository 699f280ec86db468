// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Cayley Graph Neighbours
// ─────────────────────────────────────────────────────────────────────
//! One-step extensions of a word, along two independent axes:
//!
//! - **side**: prepend ([`Side::Left`]) or append ([`Side::Right`]) a letter;
//! - **policy**: [`Reduction::Free`] forbids only the letter that would
//!   cancel the adjacent end, [`Reduction::Reduced`] forbids any letter
//!   whose extended word starts with a known relator.
//!
//! The empty word has all `2n` single letters as neighbours under every
//! policy. The reduced policy applies the left-prefix test on both sides,
//! so on the right it only prunes through relators that are a prefix of
//! the extended word.

use rand::seq::SliceRandom;
use rand::Rng;

use bella_linalg::Field;
use bella_types::{Reduction, Side};

use crate::group::GroupCache;
use crate::{Letter, Word};

/// Lazy iterator over the valid one-letter extensions of a word, in
/// increasing letter order.
pub struct Neighbours<'a, F> {
    group: &'a GroupCache<F>,
    base: Word,
    side: Side,
    reduction: Reduction,
    next_letter: Letter,
}

impl<'a, F: Field> Neighbours<'a, F> {
    fn new(group: &'a GroupCache<F>, base: &[Letter], side: Side, reduction: Reduction) -> Self {
        Self {
            group,
            base: base.to_vec(),
            side,
            reduction,
            next_letter: 0,
        }
    }

    fn candidate(&self, x: Letter) -> Option<Word> {
        let word = extend(&self.base, x, self.side);
        let (first, last) = match (self.base.first(), self.base.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Some(word),
        };
        let valid = match self.reduction {
            Reduction::Free => {
                let end = match self.side {
                    Side::Left => first,
                    Side::Right => last,
                };
                x != self.group.inv(end)
            }
            Reduction::Reduced => self.group.is_reduced_from_left(&word),
        };
        valid.then_some(word)
    }
}

impl<F: Field> Iterator for Neighbours<'_, F> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let alphabet = self.group.alphabet_size();
        while self.next_letter < alphabet {
            let x = self.next_letter;
            self.next_letter += 1;
            if let Some(word) = self.candidate(x) {
                return Some(word);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.group.alphabet_size().saturating_sub(self.next_letter);
        (0, Some(remaining))
    }
}

/// `(x) + word` or `word + (x)`.
fn extend(word: &[Letter], x: Letter, side: Side) -> Word {
    let mut out = Vec::with_capacity(word.len() + 1);
    match side {
        Side::Left => {
            out.push(x);
            out.extend_from_slice(word);
        }
        Side::Right => {
            out.extend_from_slice(word);
            out.push(x);
        }
    }
    out
}

impl<F: Field> GroupCache<F> {
    /// Neighbours of `word` under an explicit side and policy.
    pub fn neighbours(&self, word: &[Letter], side: Side, reduction: Reduction) -> Neighbours<'_, F> {
        Neighbours::new(self, word, side, reduction)
    }

    /// Neighbours in the Cayley graph of the free group: every extension
    /// except the immediate backtrack. Yields `2n - 1` words for a
    /// nonempty `word`, `2n` for the empty word.
    pub fn free_cayley_graph_locally(&self, word: &[Letter], side: Side) -> Neighbours<'_, F> {
        self.neighbours(word, side, Reduction::Free)
    }

    /// Left extensions that do not start with a known relator.
    pub fn cayley_graph_locally(&self, word: &[Letter]) -> Neighbours<'_, F> {
        self.neighbours(word, Side::Left, Reduction::Reduced)
    }

    /// Right extensions that pass the left-prefix relator test.
    pub fn cayley_graph_locally_right(&self, word: &[Letter]) -> Neighbours<'_, F> {
        self.neighbours(word, Side::Right, Reduction::Reduced)
    }

    /// One free-group neighbour of `word`, uniformly at random.
    pub fn free_random_walk_locally<R: Rng + ?Sized>(
        &self,
        word: &[Letter],
        side: Side,
        rng: &mut R,
    ) -> Word {
        let alphabet = self.alphabet_size();
        let end = match side {
            Side::Left => word.first(),
            Side::Right => word.last(),
        };
        let x = match end {
            None => rng.gen_range(0..alphabet),
            Some(&end) => {
                let banned = self.inv(end);
                let x = rng.gen_range(0..alphabet - 1);
                if x >= banned {
                    x + 1
                } else {
                    x
                }
            }
        };
        extend(word, x, side)
    }

    /// One reduced left neighbour of `word`, uniformly at random.
    ///
    /// Returns `None` when every extension starts with a relator, which
    /// can happen once user relators are present.
    pub fn random_walk_locally<R: Rng + ?Sized>(&self, word: &[Letter], rng: &mut R) -> Option<Word> {
        self.random_step(word, Side::Left, Reduction::Reduced, rng)
    }

    /// One random neighbour under an explicit side and policy.
    pub fn random_step<R: Rng + ?Sized>(
        &self,
        word: &[Letter],
        side: Side,
        reduction: Reduction,
        rng: &mut R,
    ) -> Option<Word> {
        match reduction {
            Reduction::Free => Some(self.free_random_walk_locally(word, side, rng)),
            Reduction::Reduced => {
                let options: Vec<Word> = self.neighbours(word, side, reduction).collect();
                options.choose(rng).cloned()
            }
        }
    }
}
