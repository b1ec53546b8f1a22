//! Heuristic lead scoring.
//!
//! All scores are deterministic integer values in `0..=100`; fractional
//! intermediate math is truncated, never rounded, so scores are reproducible
//! across runs on the same inputs.

pub mod company;
pub mod person;

pub use company::{
    base_insight_score, likelihood_to_hire, listing_momentum_score, momentum_score,
    ROLE_TOPIC_LABELS,
};
pub use person::{candidate_score, TECH_KEYWORDS};
