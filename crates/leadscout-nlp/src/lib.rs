pub mod client;
pub mod error;
pub mod types;

pub use client::InsightModels;
pub use error::NlpError;
pub use types::{Insight, InsightLabel, Polarity, Sentiment, INSIGHT_CANDIDATE_LABELS};
