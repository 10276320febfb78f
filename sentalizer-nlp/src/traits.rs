use serde::{Deserialize, Serialize};

/// A `(polarity, subjectivity)` pair.
///
/// Polarity is signed: -1.0 (strongly negative) to +1.0 (strongly positive).
/// Subjectivity runs from 0.0 (factual) to 1.0 (pure opinion).
///
/// ```
/// use sentalizer_nlp::SentimentScore;
///
/// let score = SentimentScore::new(1.7, -0.2);
/// assert_eq!(score.polarity, 1.0);
/// assert_eq!(score.subjectivity, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Construct a score, clamping both components into their documented ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Score for text with no sentiment signal at all.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Assigns a [`SentimentScore`] to a span of text.
///
/// Implementations must be deterministic: the summarizer's tie-break
/// guarantee only holds if identical input always produces identical scores.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}
