// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Group Cache Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Computation over finitely generated groups of 2×2 matrices.
//!
//! A [`GroupCache`] owns `n` generator matrices and their inverses (the
//! 2n-letter alphabet), a relator set closed under inversion, and two
//! memo tables: word → matrix and word → locally-reduced flag. On top of
//! it sit the Cayley graph walks and the geometric samplers.
//!
//! Data flows one way:
//!
//! ```text
//! GeneratorIndex → RelatorSet / MatrixCache → neighbours → BFS / MC → samplers
//! ```
//!
//! # Invariants
//!
//! 1. **The alphabet is never empty**: with no generators a single
//!    identity generator is synthesised, so `n >= 1` and there are
//!    exactly `2n` letters.
//! 2. **Inversion is an involution**: `inv(inv(x)) == x` for every letter,
//!    and the relator set contains the inverse of every user relator
//!    plus the trivial backtrack `(g, inv(g))` for every letter `g`.
//! 3. **Caches only grow**: entries are never evicted or rewritten while
//!    the owning `GroupCache` is alive. Generators are immutable after
//!    construction, so a cached matrix never goes stale.
//! 4. **Reduction is local**: a word is "reduced" when no known relator
//!    is a prefix of it. This is not a solution to the word problem, and
//!    searches do not deduplicate group elements reached by different
//!    words.
//!
//! Both memo tables sit behind `parking_lot::Mutex`, so a `GroupCache` is
//! `Send + Sync`. Traversals are lazy iterators; dropping one mid-stream
//! is the cancellation mechanism and leaves the caches consistent.

pub mod generators;
pub mod group;
pub mod matrix_cache;
pub mod relators;
pub mod sampler;
pub mod search;
pub mod walker;

pub use generators::GeneratorIndex;
pub use group::GroupCache;
pub use matrix_cache::MatrixCache;
pub use relators::RelatorSet;
pub use sampler::{FastLimitSet, IsometricCircles, LimitPoints};
pub use search::{seeded_rng, BreadthFirst, MonteCarlo, WordStream};
pub use walker::Neighbours;

/// Index into the 2n-letter alphabet. Letters `[0, n)` are the primary
/// generators, `[n, 2n)` their inverses.
pub type Letter = usize;

/// A finite sequence of letters, read left to right as a matrix product.
/// The empty word is the identity.
pub type Word = Vec<Letter>;
