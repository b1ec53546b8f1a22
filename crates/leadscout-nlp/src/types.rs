/// The fixed business-news categories the zero-shot classifier maps company
/// text onto, plus the explicit "no insight" state.
///
/// `NotAvailable` is a valid label: it is what callers see when the
/// classifier is down, the input text was a scrape sentinel, or the top
/// label came back unrecognized. Its confidence is always 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightLabel {
    Funding,
    Partnership,
    ProductLaunch,
    Growth,
    Leadership,
    Report,
    NotAvailable,
}

/// Candidate labels submitted to the zero-shot route, in no significant order.
pub const INSIGHT_CANDIDATE_LABELS: [&str; 6] = [
    "Company Growth and Expansion",
    "New Product or Feature Launch",
    "Major Partnership Announcement",
    "Secured New Funding",
    "Leadership Team Change",
    "Industry Report or Analysis",
];

impl InsightLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InsightLabel::Funding => "Secured New Funding",
            InsightLabel::Partnership => "Major Partnership Announcement",
            InsightLabel::ProductLaunch => "New Product or Feature Launch",
            InsightLabel::Growth => "Company Growth and Expansion",
            InsightLabel::Leadership => "Leadership Team Change",
            InsightLabel::Report => "Industry Report or Analysis",
            InsightLabel::NotAvailable => "N/A",
        }
    }

    /// Maps a label string returned by the classifier back onto the closed
    /// set. Unrecognized text maps to `NotAvailable` rather than erroring.
    #[must_use]
    pub fn from_label_text(text: &str) -> Self {
        match text {
            "Secured New Funding" => InsightLabel::Funding,
            "Major Partnership Announcement" => InsightLabel::Partnership,
            "New Product or Feature Launch" => InsightLabel::ProductLaunch,
            "Company Growth and Expansion" => InsightLabel::Growth,
            "Leadership Team Change" => InsightLabel::Leadership,
            "Industry Report or Analysis" => InsightLabel::Report,
            _ => InsightLabel::NotAvailable,
        }
    }
}

impl std::fmt::Display for InsightLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary sentiment polarity from the pretrained sentiment route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Sentiment polarity plus model confidence in [0.0, 1.0].
#[derive(Debug, Clone, Copy)]
pub struct Sentiment {
    pub polarity: Polarity,
    pub score: f64,
}

/// The top business-news label for a piece of company text, with the
/// classifier's confidence in [0.0, 1.0].
#[derive(Debug, Clone, Copy)]
pub struct Insight {
    pub label: InsightLabel,
    pub confidence: f64,
}

impl Insight {
    /// The degraded insight: unknown label, zero confidence.
    #[must_use]
    pub fn not_available() -> Self {
        Insight {
            label: InsightLabel::NotAvailable,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_candidate_label_round_trips() {
        for text in INSIGHT_CANDIDATE_LABELS {
            let label = InsightLabel::from_label_text(text);
            assert_ne!(label, InsightLabel::NotAvailable, "label {text} unmapped");
            assert_eq!(label.as_str(), text);
        }
    }

    #[test]
    fn unknown_label_text_maps_to_not_available() {
        assert_eq!(
            InsightLabel::from_label_text("Quarterly Earnings Beat"),
            InsightLabel::NotAvailable
        );
    }

    #[test]
    fn not_available_displays_as_na() {
        assert_eq!(InsightLabel::NotAvailable.to_string(), "N/A");
    }
}
