//! Heuristic phishing URL detection.
//!
//! A URL string is reduced to a fixed-order vector of lexical signals
//! (IP literal, `@` symbol, length, path depth, shortener domains, …) and
//! scored by a linear-logit model loaded from a JSON artifact. The model is:
//!
//! - **Fully interpretable**: every feature weight is visible and auditable
//! - **Deterministic**: same input → same output, always
//! - **Tiny**: a few hundred bytes of weights, zero framework dependencies
//!
//! ```text
//! URL string ─→ Feature Extraction ─→ [x₁..x₁₆] ─→ σ(w·x + b) ─→ score ∈ [0,1]
//!                                                                      │
//!                                                  score ≥ threshold ──┴─→ Phishing / Safe
//! ```
//!
//! The model is trained offline and distributed as a JSON file. This crate
//! performs only inference — no training, no gradient computation.

mod constants;
mod engine;
mod features;
mod math;
mod model;
mod types;

pub use constants::{FEATURE_COUNT, FEATURE_NAMES};
pub use engine::{Prediction, ScanEngine};
pub use features::UrlFeatures;
pub use model::{ModelError, TrainedExport, UrlModel};
pub use types::Verdict;
