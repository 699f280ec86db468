// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Riley Groups
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Two-generator Riley groups built on the generic group cache.
//!
//! A Riley group is generated by `X = [[α, 1], [0, ᾱ]]` and
//! `Y = [[β, 0], [μ, β̄]]` with `α = e^{iθ}`, `β = e^{iη}`. The factory
//! builds those matrices (and the finite-order relators when the orders
//! are known) and hands them to [`GroupCache`](bella_core::GroupCache).
//! Farey words index the rational pleating rays of the Riley slice.

pub mod farey;
pub mod riley;

pub use farey::{farey_string, FareyTree};
pub use riley::RileyGroup;
