// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Projective Sampler
// ─────────────────────────────────────────────────────────────────────
//! Map word streams to geometric records.
//!
//! - [`LimitPoints`]: the image `M_w · [seed, 1]` of a seed point,
//!   projected to `x + iy`. Words sending the seed to infinity are
//!   skipped.
//! - [`IsometricCircles`]: centre `-d/c` and radius `1/|c|` of each
//!   `M_w`. Words with `c = 0` have no isometric circle and are skipped.
//!
//! Each record is tagged with the first letter of its word as a colour.
//! The output is as lazy and as finite as the upstream word stream.

use rand::Rng;

use bella_linalg::{Field, Point, Vector2};
use bella_types::{BellaResult, IsometricCircle, LimitPoint, Reduction, SearchConfig, Side};

use crate::group::GroupCache;
use crate::search::{BreadthFirst, MonteCarlo, WordStream};
use crate::{Letter, Word};

/// Limit-set points from a word stream.
pub struct LimitPoints<'a, F, I> {
    group: &'a GroupCache<F>,
    words: I,
    seed: Vector2<F>,
}

impl<F: Field, I: Iterator<Item = Word>> Iterator for LimitPoints<'_, F, I> {
    type Item = LimitPoint;

    fn next(&mut self) -> Option<LimitPoint> {
        for word in self.words.by_ref() {
            let Some(&colour) = word.first() else {
                continue;
            };
            let [x, y] = self.group.evaluate(&word).apply(&self.seed);
            if y.is_zero() {
                continue;
            }
            let z = (x / y).to_complex();
            return Some(LimitPoint::new(z.re, z.im, colour));
        }
        None
    }
}

/// Isometric circles from a word stream.
pub struct IsometricCircles<'a, F, I> {
    group: &'a GroupCache<F>,
    words: I,
}

impl<F: Field, I: Iterator<Item = Word>> Iterator for IsometricCircles<'_, F, I> {
    type Item = IsometricCircle;

    fn next(&mut self) -> Option<IsometricCircle> {
        for word in self.words.by_ref() {
            let Some(&colour) = word.first() else {
                continue;
            };
            if let Some((centre, radius)) = self.group.isometric_circle(&word) {
                let z = centre.to_complex();
                return Some(IsometricCircle::new(z.re, z.im, radius, colour));
            }
        }
        None
    }
}

/// Orbit of a seed point under a single non-backtracking random walk of
/// one-letter steps.
///
/// The seed vector is updated in place, so the `k`-th record is the image
/// under the product of the first `k` letters (latest letter leftmost).
pub struct FastLimitSet<'a, F, R> {
    group: &'a GroupCache<F>,
    rng: R,
    point: Vector2<F>,
    letter: Option<Letter>,
    remaining: usize,
}

impl<F: Field, R: Rng> Iterator for FastLimitSet<'_, F, R> {
    type Item = LimitPoint;

    fn next(&mut self) -> Option<LimitPoint> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let prev: Vec<Letter> = self.letter.into_iter().collect();
            let step = self
                .group
                .free_random_walk_locally(&prev, Side::Left, &mut self.rng);
            let letter = step[0];
            self.letter = Some(letter);

            self.point = self.group.generators().matrix(letter).apply(&self.point);
            let [x, y] = &self.point;
            if y.is_zero() {
                continue;
            }
            let z = (x.clone() / y.clone()).to_complex();
            return Some(LimitPoint::new(z.re, z.im, letter));
        }
        None
    }
}

impl<F: Field> GroupCache<F> {
    /// Images of `seed` under every word of `words`.
    pub fn limit_points<I>(&self, words: I, seed: &Point<F>) -> LimitPoints<'_, F, I::IntoIter>
    where
        I: IntoIterator<Item = Word>,
    {
        LimitPoints {
            group: self,
            words: words.into_iter(),
            seed: seed.homogeneous(),
        }
    }

    /// Isometric circles of every word of `words`.
    pub fn isometric_circles<I>(&self, words: I) -> IsometricCircles<'_, F, I::IntoIter>
    where
        I: IntoIterator<Item = Word>,
    {
        IsometricCircles {
            group: self,
            words: words.into_iter(),
        }
    }

    /// Limit-set points along `count` free random walks of length `depth`.
    pub fn coloured_limit_set_mc<R: Rng>(
        &self,
        depth: usize,
        count: usize,
        seed: &Point<F>,
        side: Side,
        rng: R,
    ) -> LimitPoints<'_, F, MonteCarlo<'_, F, R>> {
        self.limit_points(self.free_cayley_graph_mc(depth, count, side, rng), seed)
    }

    /// `count` limit-set points from one random walk, see [`FastLimitSet`].
    pub fn coloured_limit_set_fast<R: Rng>(
        &self,
        count: usize,
        seed: &Point<F>,
        rng: R,
    ) -> FastLimitSet<'_, F, R> {
        FastLimitSet {
            group: self,
            rng,
            point: seed.homogeneous(),
            letter: None,
            remaining: count,
        }
    }

    /// Isometric circles along `count` reduced random walks of length
    /// `depth`, including every intermediate word.
    pub fn coloured_isometric_circles_mc<R: Rng>(
        &self,
        depth: usize,
        count: usize,
        rng: R,
    ) -> IsometricCircles<'_, F, MonteCarlo<'_, F, R>> {
        self.isometric_circles(self.cayley_graph_mc(depth, count, true, rng))
    }

    /// Isometric circles of every reduced word of length `1..=depth`.
    pub fn coloured_isometric_circles_bfs(
        &self,
        depth: usize,
    ) -> IsometricCircles<'_, F, BreadthFirst<'_, F>> {
        self.isometric_circles(BreadthFirst::new(self, depth, Reduction::Reduced))
    }

    /// Limit-set points over the traversal described by `config`.
    pub fn sample_limit_set(
        &self,
        config: &SearchConfig,
        seed: &Point<F>,
    ) -> BellaResult<LimitPoints<'_, F, WordStream<'_, F>>> {
        Ok(self.limit_points(self.search(config)?, seed))
    }

    /// Isometric circles over the traversal described by `config`.
    pub fn sample_isometric_circles(
        &self,
        config: &SearchConfig,
    ) -> BellaResult<IsometricCircles<'_, F, WordStream<'_, F>>> {
        Ok(self.isometric_circles(self.search(config)?))
    }
}
