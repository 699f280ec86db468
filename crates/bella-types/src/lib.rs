// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy shared by the
//! Bella crates: the group cache, the Cayley graph searches, and the
//! geometric samplers built on top of them.

pub mod config;
pub mod error;
pub mod record;

pub use config::{GroupConfig, Reduction, SearchConfig, Side, Strategy};
pub use error::{BellaError, BellaResult};
pub use record::{IsometricCircle, LimitPoint};
