// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Cayley Graph Search
// ─────────────────────────────────────────────────────────────────────
//! Lazy word streams over the Cayley graph.
//!
//! - [`BreadthFirst`]: every word of length `1..=depth`, level by level,
//!   starting from the empty word and always extending on the left.
//! - [`MonteCarlo`]: `count` independent random walks of `depth` steps.
//!
//! Neither strategy deduplicates group elements. With the free policy,
//! or whenever the user relators are not exhausted by prefix pruning, the
//! same element appears under several words.
//!
//! Streams are pull-based and finite. Dropping one early is safe; to
//! restart, call the constructor again.

use std::mem;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bella_linalg::Field;
use bella_types::{BellaResult, Reduction, SearchConfig, Side, Strategy};

use crate::group::GroupCache;
use crate::walker::Neighbours;
use crate::Word;

/// Deterministic RNG for reproducible walks.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Level-synchronous breadth-first word stream.
///
/// Yields words in non-decreasing length order, each exactly once per
/// derivation path from the empty word.
pub struct BreadthFirst<'a, F> {
    group: &'a GroupCache<F>,
    reduction: Reduction,
    depth: usize,
    /// Length of the words currently being produced.
    level: usize,
    frontier: Vec<Word>,
    cursor: usize,
    next_frontier: Vec<Word>,
    current: Option<Neighbours<'a, F>>,
}

impl<'a, F: Field> BreadthFirst<'a, F> {
    pub fn new(group: &'a GroupCache<F>, depth: usize, reduction: Reduction) -> Self {
        let frontier = if depth == 0 { Vec::new() } else { vec![Word::new()] };
        Self {
            group,
            reduction,
            depth,
            level: 1,
            frontier,
            cursor: 0,
            next_frontier: Vec::new(),
            current: None,
        }
    }
}

impl<F: Field> Iterator for BreadthFirst<'_, F> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        loop {
            if let Some(neighbours) = self.current.as_mut() {
                if let Some(word) = neighbours.next() {
                    // The last level is never expanded, so don't keep it.
                    if self.level < self.depth {
                        self.next_frontier.push(word.clone());
                    }
                    return Some(word);
                }
                self.current = None;
            }

            if self.cursor < self.frontier.len() {
                let base = &self.frontier[self.cursor];
                self.cursor += 1;
                self.current = Some(self.group.neighbours(base, Side::Left, self.reduction));
                continue;
            }

            if self.level >= self.depth || self.next_frontier.is_empty() {
                return None;
            }
            self.level += 1;
            self.frontier = mem::take(&mut self.next_frontier);
            self.cursor = 0;
        }
    }
}

/// Monte-Carlo word stream: `count` walks, each extending a word from
/// empty to length `depth` one random letter at a time.
///
/// With `yield_shorter` every intermediate word is emitted (`count·depth`
/// words in total); otherwise only the final word of each walk. A reduced
/// walk that reaches a word with no valid extension ends early.
pub struct MonteCarlo<'a, F, R> {
    group: &'a GroupCache<F>,
    rng: R,
    depth: usize,
    walks_left: usize,
    side: Side,
    reduction: Reduction,
    yield_shorter: bool,
    word: Word,
    step: usize,
}

impl<'a, F: Field, R: Rng> MonteCarlo<'a, F, R> {
    pub fn new(
        group: &'a GroupCache<F>,
        depth: usize,
        count: usize,
        side: Side,
        reduction: Reduction,
        yield_shorter: bool,
        rng: R,
    ) -> Self {
        Self {
            group,
            rng,
            depth,
            walks_left: if depth == 0 { 0 } else { count },
            side,
            reduction,
            yield_shorter,
            word: Word::new(),
            step: depth,
        }
    }
}

impl<F: Field, R: Rng> Iterator for MonteCarlo<'_, F, R> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        loop {
            if self.step >= self.depth {
                if self.walks_left == 0 {
                    return None;
                }
                self.walks_left -= 1;
                self.word.clear();
                self.step = 0;
            }

            match self
                .group
                .random_step(&self.word, self.side, self.reduction, &mut self.rng)
            {
                Some(word) => {
                    self.word = word;
                    self.step += 1;
                    if self.yield_shorter || self.step == self.depth {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    log::debug!(
                        "random walk dead end at length {} ({} walks left)",
                        self.word.len(),
                        self.walks_left
                    );
                    self.step = self.depth;
                }
            }
        }
    }
}

/// A configured search: either strategy behind one iterator type.
pub enum WordStream<'a, F> {
    BreadthFirst(BreadthFirst<'a, F>),
    MonteCarlo(MonteCarlo<'a, F, ChaCha8Rng>),
}

impl<F: Field> Iterator for WordStream<'_, F> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        match self {
            WordStream::BreadthFirst(it) => it.next(),
            WordStream::MonteCarlo(it) => it.next(),
        }
    }
}

impl<F: Field> GroupCache<F> {
    /// All words of length `1..=depth` in the free group on the generators.
    ///
    /// If the group is not free, elements repeat under different words.
    pub fn free_cayley_graph_bfs(&self, depth: usize) -> BreadthFirst<'_, F> {
        BreadthFirst::new(self, depth, Reduction::Free)
    }

    /// All reduced words of length `1..=depth`.
    pub fn cayley_graph_bfs(&self, depth: usize) -> BreadthFirst<'_, F> {
        BreadthFirst::new(self, depth, Reduction::Reduced)
    }

    /// `count` free random walks of length `depth`, yielding every word on
    /// each walk (`count·depth` words).
    pub fn free_cayley_graph_mc<R: Rng>(
        &self,
        depth: usize,
        count: usize,
        side: Side,
        rng: R,
    ) -> MonteCarlo<'_, F, R> {
        MonteCarlo::new(self, depth, count, side, Reduction::Free, true, rng)
    }

    /// `count` reduced random walks extending on the left.
    ///
    /// With `yield_shorter` every prefix walk word is yielded, otherwise
    /// only the length-`depth` word of each walk.
    pub fn cayley_graph_mc<R: Rng>(
        &self,
        depth: usize,
        count: usize,
        yield_shorter: bool,
        rng: R,
    ) -> MonteCarlo<'_, F, R> {
        MonteCarlo::new(self, depth, count, Side::Left, Reduction::Reduced, yield_shorter, rng)
    }

    /// Run the traversal described by `config`, seeding the RNG from
    /// `config.seed`.
    pub fn search(&self, config: &SearchConfig) -> BellaResult<WordStream<'_, F>> {
        config.validate()?;
        let stream = match config.strategy {
            Strategy::BreadthFirst => {
                WordStream::BreadthFirst(BreadthFirst::new(self, config.depth, config.reduction))
            }
            Strategy::MonteCarlo => WordStream::MonteCarlo(MonteCarlo::new(
                self,
                config.depth,
                config.count,
                config.side,
                config.reduction,
                config.yield_shorter,
                seeded_rng(config.seed),
            )),
        };
        Ok(stream)
    }
}
