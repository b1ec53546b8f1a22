//! Momentum and hiring-likelihood scoring for company leads.

use std::collections::HashMap;

use leadscout_nlp::{Insight, InsightLabel, Polarity, Sentiment};

/// Topic labels probed against aggregated job-listing text when news-based
/// insight is unavailable.
pub const ROLE_TOPIC_LABELS: [&str; 6] = [
    "hiring ramp",
    "remote friendly",
    "fast-growing",
    "startup culture",
    "enterprise",
    "AI related",
];

const JOBS_MOMENTUM_POINTS: u64 = 3;
const JOBS_MOMENTUM_CAP: u64 = 30;
const JOBS_LIKELIHOOD_POINTS: f64 = 10.0;
const JOBS_LIKELIHOOD_CAP: f64 = 70.0;
const MOMENTUM_LIKELIHOOD_WEIGHT: f64 = 30.0;

/// Base momentum contribution of a news-insight category.
#[must_use]
pub fn base_insight_score(label: InsightLabel) -> u8 {
    match label {
        InsightLabel::Funding => 70,
        InsightLabel::Partnership => 50,
        InsightLabel::ProductLaunch => 40,
        InsightLabel::Growth => 30,
        InsightLabel::Leadership | InsightLabel::Report | InsightLabel::NotAvailable => 0,
    }
}

/// Combines news insight and open-role count into a momentum score.
///
/// The insight base is scaled by `0.5 + confidence / 2`, so a low-confidence
/// classification still counts for half its base. Open roles add 3 points
/// each, capped at 30. Clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn momentum_score(insight: &Insight, num_jobs: usize) -> u8 {
    let base = f64::from(base_insight_score(insight.label));
    let scaled = (base * (0.5 + insight.confidence * 0.5)).floor();
    let jobs = (num_jobs as u64 * JOBS_MOMENTUM_POINTS).min(JOBS_MOMENTUM_CAP);

    (scaled + jobs as f64).clamp(0.0, 100.0) as u8
}

/// Likelihood a company is actively hiring, from open roles and momentum.
///
/// Open roles dominate (10 points each, capped at 70); momentum contributes
/// up to 30 more, proportionally.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn likelihood_to_hire(momentum: u8, num_jobs: usize) -> u8 {
    let jobs = (num_jobs as f64 * JOBS_LIKELIHOOD_POINTS).min(JOBS_LIKELIHOOD_CAP);
    let momentum_part = f64::from(momentum) / 100.0 * MOMENTUM_LIKELIHOOD_WEIGHT;

    ((jobs + momentum_part).floor().min(100.0)) as u8
}

/// Fallback momentum derived from zero-shot topic probabilities over
/// aggregated job-listing text, adjusted by listing-text sentiment.
///
/// Weighted topics: hiring ramp 25, fast-growing 20, AI related 15. Positive
/// sentiment adds up to 10 points, negative subtracts up to 10. Clamped to
/// `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn listing_momentum_score(topics: &HashMap<String, f64>, sentiment: &Sentiment) -> u8 {
    let prob = |label: &str| topics.get(label).copied().unwrap_or(0.0);

    let mut score = prob("hiring ramp") * 25.0 + prob("fast-growing") * 20.0 + prob("AI related") * 15.0;

    let swing = sentiment.score * 10.0;
    match sentiment.polarity {
        Polarity::Positive => score += swing,
        Polarity::Negative => score -= swing,
    }

    (score.floor().clamp(0.0, 100.0)) as u8
}
