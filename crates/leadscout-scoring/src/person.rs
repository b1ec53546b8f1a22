//! Candidate scoring for person leads.

use leadscout_nlp::{Polarity, Sentiment};

/// Bio keywords that signal a technical profile. Each distinct keyword found
/// contributes 5 points, capped at 25.
pub const TECH_KEYWORDS: [&str; 10] = [
    "engineer",
    "developer",
    "python",
    "javascript",
    "react",
    "node",
    "data",
    "cloud",
    "ai",
    "ml",
];

const KEYWORD_POINTS: f64 = 5.0;
const KEYWORD_CAP: f64 = 25.0;
const FOLLOWER_CAP: f64 = 25.0;
const REPO_CAP: f64 = 25.0;
const SENTIMENT_BONUS_CAP: f64 = 25.0;

/// Scores a candidate from profile metrics and bio sentiment.
///
/// Components: followers / 10 capped at 25, repositories / 2 capped at 25,
/// and a bio component that applies only when the bio is non-empty and the
/// sentiment model produced a reading. Positive sentiment adds up to 25 more
/// points scaled by model confidence. The total is truncated and clamped to
/// `0..=100`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn candidate_score(
    followers: u64,
    repositories: u64,
    bio: &str,
    sentiment: Option<&Sentiment>,
) -> u8 {
    let mut score = (followers as f64 / 10.0).min(FOLLOWER_CAP);
    score += (repositories as f64 / 2.0).min(REPO_CAP);

    if !bio.trim().is_empty() {
        if let Some(sentiment) = sentiment {
            let lowered = bio.to_lowercase();
            let hits = TECH_KEYWORDS
                .iter()
                .filter(|kw| lowered.contains(*kw))
                .count();
            score += (hits as f64 * KEYWORD_POINTS).min(KEYWORD_CAP);

            if sentiment.polarity == Polarity::Positive {
                score += (sentiment.score * SENTIMENT_BONUS_CAP).floor();
            }
        }
    }

    (score.floor().clamp(0.0, 100.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(score: f64) -> Sentiment {
        Sentiment {
            polarity: Polarity::Positive,
            score,
        }
    }

    fn negative(score: f64) -> Sentiment {
        Sentiment {
            polarity: Polarity::Negative,
            score,
        }
    }

    #[test]
    fn metrics_only_without_sentiment() {
        // 120 followers -> 12, 30 repos -> 15; bio ignored without sentiment.
        assert_eq!(candidate_score(120, 30, "python engineer", None), 27);
    }

    #[test]
    fn follower_and_repo_components_cap_at_25_each() {
        assert_eq!(candidate_score(10_000_000, 10_000_000, "", None), 50);
    }

    #[test]
    fn keyword_hits_are_distinct_and_capped() {
        let bio = "engineer developer python javascript react node data cloud";
        // 8 distinct keywords would be 40, capped at 25. Sentiment bonus
        // floor(0.0 * 25) adds nothing.
        assert_eq!(candidate_score(0, 0, bio, Some(&positive(0.0))), 25);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let bio = "python python python";
        assert_eq!(candidate_score(0, 0, bio, Some(&negative(0.99))), 5);
    }

    #[test]
    fn positive_sentiment_adds_confidence_scaled_bonus() {
        // keyword "data" -> 5, bonus floor(0.9 * 25) = 22.
        assert_eq!(candidate_score(0, 0, "data person", Some(&positive(0.9))), 27);
    }

    #[test]
    fn negative_sentiment_gets_no_bonus() {
        assert_eq!(candidate_score(0, 0, "data person", Some(&negative(0.9))), 5);
    }

    #[test]
    fn empty_bio_skips_bio_component_even_with_sentiment() {
        assert_eq!(candidate_score(50, 4, "   ", Some(&positive(1.0))), 7);
    }

    #[test]
    fn total_clamps_at_100() {
        let bio = "engineer developer python javascript react";
        assert_eq!(
            candidate_score(10_000_000, 10_000_000, bio, Some(&positive(1.0))),
            100
        );
    }
}
