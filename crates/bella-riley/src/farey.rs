// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Farey Words
// ─────────────────────────────────────────────────────────────────────
//! Farey words `W_{r/s}` in the letters `X, Y, x, y` (lower case is the
//! inverse), and the Farey tree of fractions in `[0, 1]`.
//!
//! `W_{r/s} = X Y^{ε₁} X^{ε₂} … Y^{ε_{2s-1}}` with
//! `ε_k = (-1)^{⌊k r / s⌋}`, so the word has length `2s` and alternates
//! between the two generators.

use std::collections::VecDeque;

use bella_types::{BellaError, BellaResult};

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// The Farey word of `r/s` as a label string.
///
/// The fraction is reduced first; `s` must be positive and the word
/// length `2s` must fit in memory addressing.
pub fn farey_string(r: u64, s: u64) -> BellaResult<String> {
    if s == 0 {
        return Err(BellaError::Validation(format!(
            "Farey denominator must be positive, got {r}/{s}"
        )));
    }
    let g = gcd(r, s);
    let (r, s) = (r / g, s / g);
    let len = s
        .checked_mul(2)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| BellaError::Validation(format!("Farey word for {r}/{s} is too long")))?;

    // ⌊kr/s⌋ = kq + ⌊k·rem/s⌋ with r = qs + rem; k·rem < 2s² fits in u128.
    let (q, rem) = (r / s, u128::from(r % s));
    let word = (0..len as u64)
        .map(|k| {
            let carry = (u128::from(k) * rem / u128::from(s)) % 2 == 1;
            let odd = (k % 2 == 1 && q % 2 == 1) != carry;
            match (k % 2 == 0, !odd) {
                (true, true) => 'X',
                (true, false) => 'x',
                (false, true) => 'Y',
                (false, false) => 'y',
            }
        })
        .collect();
    Ok(word)
}

/// Breadth-first walk of the Farey (Stern–Brocot) tree on `[0, 1]`.
///
/// Yields `0/1`, `1/1`, then mediants level by level: `1/2`, `1/3`,
/// `2/3`, `1/4`, `2/5`, … Every fraction, roots included, is pruned
/// together with its subtree once its denominator exceeds
/// `max_denominator`.
pub struct FareyTree {
    max_denominator: u64,
    roots: VecDeque<(u64, u64)>,
    intervals: VecDeque<((u64, u64), (u64, u64))>,
}

impl FareyTree {
    pub fn new(max_denominator: u64) -> Self {
        let (roots, intervals) = if max_denominator == 0 {
            (VecDeque::new(), VecDeque::new())
        } else {
            (
                VecDeque::from([(0, 1), (1, 1)]),
                VecDeque::from([((0, 1), (1, 1))]),
            )
        };
        Self {
            max_denominator,
            roots,
            intervals,
        }
    }
}

impl Iterator for FareyTree {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<(u64, u64)> {
        if let Some(root) = self.roots.pop_front() {
            return Some(root);
        }
        while let Some(((a, b), (c, d))) = self.intervals.pop_front() {
            let den = match b.checked_add(d) {
                Some(den) if den <= self.max_denominator => den,
                _ => continue,
            };
            // Numerators never exceed denominators on [0, 1].
            let mediant = (a + c, den);
            self.intervals.push_back(((a, b), mediant));
            self.intervals.push_back((mediant, (c, d)));
            return Some(mediant);
        }
        None
    }
}
