//! HTTP client for the hosted pretrained-inference service.
//!
//! Exposes the three capabilities the pipeline consumes — zero-shot
//! classification, binary sentiment, and abstractive summarization — over
//! a Hugging Face Inference-API-shaped HTTP service. The handle carries an
//! explicit availability state: when no inference origin is configured (or
//! the client cannot be built) every call degrades to `None` and dependent
//! scoring falls back to non-text metrics.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::NlpError;
use crate::types::{Insight, InsightLabel, Polarity, Sentiment, INSIGHT_CANDIDATE_LABELS};

const ZERO_SHOT_ROUTE: &str = "models/facebook/bart-large-mnli";
const SENTIMENT_ROUTE: &str = "models/distilbert-base-uncased-finetuned-sst-2-english";
const SUMMARIZATION_ROUTE: &str = "models/sshleifer/distilbart-cnn-12-6";

/// Maximum characters submitted to the sentiment route. Longer inputs are
/// truncated; callers must not assume untruncated semantics.
const SENTIMENT_INPUT_LIMIT: usize = 512;

/// Summarization length bounds, in model tokens.
const SUMMARY_MAX_LENGTH: u32 = 60;
const SUMMARY_MIN_LENGTH: u32 = 25;

/// Handle over the pretrained NLP inference capability.
///
/// Built once at process start and shared via [`Arc`]; per-call failures are
/// logged and surfaced as `None` so a flaky inference backend can never fail
/// a discovery request.
pub struct InsightModels {
    state: ModelState,
}

enum ModelState {
    Available(InferenceClient),
    Unavailable,
}

struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct SentimentCandidate {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary_text: String,
}

impl InsightModels {
    /// Initializes the shared inference handle from configuration.
    ///
    /// A missing origin or a failed client build yields the `Unavailable`
    /// state rather than an error: discovery keeps working on structured
    /// metrics alone.
    pub fn init(
        nlp_url: Option<&str>,
        token: Option<&str>,
        timeout_secs: u64,
    ) -> Arc<Self> {
        let Some(url) = nlp_url else {
            tracing::warn!("no inference origin configured; text insights disabled");
            return Arc::new(Self {
                state: ModelState::Unavailable,
            });
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build();

        match client {
            Ok(client) => {
                tracing::info!(origin = url, "inference models available");
                Arc::new(Self {
                    state: ModelState::Available(InferenceClient {
                        client,
                        base_url: url.trim_end_matches('/').to_owned(),
                        token: token.map(ToOwned::to_owned),
                    }),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to build inference client; text insights disabled");
                Arc::new(Self {
                    state: ModelState::Unavailable,
                })
            }
        }
    }

    /// Whether the inference capability initialized successfully.
    #[must_use]
    pub fn available(&self) -> bool {
        matches!(self.state, ModelState::Available(_))
    }

    /// Zero-shot classification of `text` over `labels`.
    ///
    /// Returns label→probability pairs ordered by descending probability,
    /// or `None` when the capability is unavailable or the call fails.
    pub async fn classify(&self, text: &str, labels: &[&str]) -> Option<Vec<(String, f64)>> {
        let ModelState::Available(client) = &self.state else {
            return None;
        };
        if text.trim().is_empty() {
            return None;
        }

        match client.zero_shot(text, labels).await {
            Ok(pairs) => Some(pairs),
            Err(e) => {
                tracing::warn!(error = %e, "zero-shot classification failed");
                None
            }
        }
    }

    /// Binary sentiment for `text`, truncated to 512 characters first.
    ///
    /// Returns `None` when the capability is unavailable, the text is empty,
    /// or the call fails.
    pub async fn sentiment(&self, text: &str) -> Option<Sentiment> {
        let ModelState::Available(client) = &self.state else {
            return None;
        };
        if text.trim().is_empty() {
            return None;
        }

        let truncated = truncate_chars(text, SENTIMENT_INPUT_LIMIT);
        match client.sentiment(&truncated).await {
            Ok(sentiment) => Some(sentiment),
            Err(e) => {
                tracing::warn!(error = %e, "sentiment inference failed");
                None
            }
        }
    }

    /// Abstractive summary of `text` (the caller bounds the input length).
    pub async fn summarize(&self, text: &str) -> Option<String> {
        let ModelState::Available(client) = &self.state else {
            return None;
        };
        if text.trim().is_empty() {
            return None;
        }

        match client.summarize(text).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(error = %e, "summarization failed");
                None
            }
        }
    }

    /// Maps company text onto the fixed business-news label set.
    ///
    /// Degrades to [`Insight::not_available`] on empty text, unavailable
    /// models, or any inference failure — callers treat "N/A" with
    /// confidence 0.0 as a valid label.
    pub async fn classify_insight(&self, text: &str) -> Insight {
        let Some(pairs) = self.classify(text, &INSIGHT_CANDIDATE_LABELS).await else {
            return Insight::not_available();
        };

        match pairs.first() {
            Some((label, confidence)) => Insight {
                label: InsightLabel::from_label_text(label),
                confidence: *confidence,
            },
            None => Insight::not_available(),
        }
    }

    /// Zero-shot probabilities over role-topic labels for aggregated job
    /// text, as a label→probability map.
    pub async fn topic_probabilities(
        &self,
        text: &str,
        labels: &[&str],
    ) -> Option<HashMap<String, f64>> {
        let pairs = self.classify(text, labels).await?;
        Some(pairs.into_iter().collect())
    }
}

impl InferenceClient {
    async fn zero_shot(&self, text: &str, labels: &[&str]) -> Result<Vec<(String, f64)>, NlpError> {
        let body = json!({
            "inputs": text,
            "parameters": { "candidate_labels": labels }
        });

        let value = self.post(ZERO_SHOT_ROUTE, &body).await?;
        let parsed: ZeroShotResponse =
            serde_json::from_value(value).map_err(|e| NlpError::Response {
                route: ZERO_SHOT_ROUTE.to_owned(),
                reason: e.to_string(),
            })?;

        if parsed.labels.len() != parsed.scores.len() {
            return Err(NlpError::Response {
                route: ZERO_SHOT_ROUTE.to_owned(),
                reason: format!(
                    "{} labels but {} scores",
                    parsed.labels.len(),
                    parsed.scores.len()
                ),
            });
        }

        Ok(parsed.labels.into_iter().zip(parsed.scores).collect())
    }

    async fn sentiment(&self, text: &str) -> Result<Sentiment, NlpError> {
        let body = json!({ "inputs": text });
        let value = self.post(SENTIMENT_ROUTE, &body).await?;

        // Response shape: [[{"label": "POSITIVE", "score": 0.98}, ...]] with
        // candidates ordered by descending score.
        let candidates: Vec<Vec<SentimentCandidate>> =
            serde_json::from_value(value).map_err(|e| NlpError::Response {
                route: SENTIMENT_ROUTE.to_owned(),
                reason: e.to_string(),
            })?;

        let top = candidates
            .first()
            .and_then(|inner| inner.first())
            .ok_or_else(|| NlpError::Response {
                route: SENTIMENT_ROUTE.to_owned(),
                reason: "empty candidate list".to_owned(),
            })?;

        let polarity = if top.label.eq_ignore_ascii_case("POSITIVE") {
            Polarity::Positive
        } else {
            Polarity::Negative
        };

        Ok(Sentiment {
            polarity,
            score: top.score,
        })
    }

    async fn summarize(&self, text: &str) -> Result<String, NlpError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "max_length": SUMMARY_MAX_LENGTH,
                "min_length": SUMMARY_MIN_LENGTH,
                "do_sample": false
            }
        });

        let value = self.post(SUMMARIZATION_ROUTE, &body).await?;
        let parsed: Vec<SummaryResponse> =
            serde_json::from_value(value).map_err(|e| NlpError::Response {
                route: SUMMARIZATION_ROUTE.to_owned(),
                reason: e.to_string(),
            })?;

        parsed
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or_else(|| NlpError::Response {
                route: SUMMARIZATION_ROUTE.to_owned(),
                reason: "empty summary list".to_owned(),
            })
    }

    async fn post(&self, route: &str, body: &serde_json::Value) -> Result<serde_json::Value, NlpError> {
        let url = format!("{}/{route}", self.base_url);
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NlpError::ApiStatus {
                status: status.as_u16(),
                route: route.to_owned(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Truncates `text` to at most `limit` characters, respecting char boundaries.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
