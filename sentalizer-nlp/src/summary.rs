//! Whole-document sentiment summary.

use serde::Serialize;
use thiserror::Error;

use crate::lexicon::LexiconScorer;
use crate::sentence::split_sentences;
use crate::traits::{SentimentScore, SentimentScorer};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// The input produced zero sentences (blank page, whitespace only).
    #[error("input text contained no sentences")]
    EmptyInput,
}

/// One sentence plus its score. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: SentimentScore,
}

/// Aggregate over an ordered sequence of scored sentences.
///
/// `overall` is computed over the full input text as a single unit; it is a
/// separately-computed statistic, never an aggregate of the sentence scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub overall: SentimentScore,
    pub most_polar: ScoredSentence,
    pub least_polar: ScoredSentence,
    pub most_objective: ScoredSentence,
    pub most_subjective: ScoredSentence,
}

/// Splits text into sentences, scores them, and selects the four extremal
/// sentences in a single left-to-right pass.
pub struct Summarizer<S = LexiconScorer> {
    scorer: S,
}

impl Summarizer<LexiconScorer> {
    /// Summarizer backed by the built-in lexicon scorer.
    pub fn new() -> Self {
        Self {
            scorer: LexiconScorer::new(),
        }
    }
}

impl Default for Summarizer<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentScorer> Summarizer<S> {
    /// Summarizer with an injected scoring backend.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Summarize a block of already-extracted text.
    ///
    /// Fails with [`SummarizeError::EmptyInput`] when the text yields no
    /// sentences; the empty check happens before the scan is seeded, so no
    /// input can reach the selection loop with nothing to select from.
    pub fn summarize(&self, text: &str) -> Result<SentimentSummary, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let overall = self.scorer.score(text);

        let scored: Vec<ScoredSentence> = sentences
            .iter()
            .map(|s| ScoredSentence {
                text: (*s).to_string(),
                score: self.scorer.score(s),
            })
            .collect();

        // First sentence seeds all four candidates; strict comparisons mean
        // ties keep the earlier sentence.
        let mut most_polar = &scored[0];
        let mut least_polar = &scored[0];
        let mut most_objective = &scored[0];
        let mut most_subjective = &scored[0];

        for sentence in &scored[1..] {
            if most_polar.score.polarity < sentence.score.polarity {
                most_polar = sentence;
            }
            if least_polar.score.polarity > sentence.score.polarity {
                least_polar = sentence;
            }
            if most_objective.score.subjectivity > sentence.score.subjectivity {
                most_objective = sentence;
            }
            if most_subjective.score.subjectivity < sentence.score.subjectivity {
                most_subjective = sentence;
            }
        }

        tracing::debug!(
            sentence_count = scored.len(),
            overall_polarity = overall.polarity,
            overall_subjectivity = overall.subjectivity,
            "nlp.summarize.done"
        );

        Ok(SentimentSummary {
            overall,
            most_polar: most_polar.clone(),
            least_polar: least_polar.clone(),
            most_objective: most_objective.clone(),
            most_subjective: most_subjective.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Scorer returning canned scores per exact sentence, neutral otherwise.
    struct FixedScorer(HashMap<&'static str, SentimentScore>);

    impl FixedScorer {
        fn new(entries: &[(&'static str, f64, f64)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|&(text, p, s)| (text, SentimentScore::new(p, s)))
                    .collect(),
            )
        }
    }

    impl SentimentScorer for FixedScorer {
        fn score(&self, text: &str) -> SentimentScore {
            self.0
                .get(text)
                .copied()
                .unwrap_or_else(SentimentScore::neutral)
        }
    }

    #[test]
    fn empty_input_is_an_error_not_a_panic() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize(""), Err(SummarizeError::EmptyInput));
        assert_eq!(
            summarizer.summarize("  \n\t "),
            Err(SummarizeError::EmptyInput)
        );
    }

    #[test]
    fn love_hate_example() {
        let summary = Summarizer::new()
            .summarize("I love this. I hate that. It is fine.")
            .unwrap();
        assert_eq!(summary.most_polar.text, "I love this.");
        assert_eq!(summary.least_polar.text, "I hate that.");
    }

    #[test]
    fn extrema_are_members_of_the_input() {
        let text = "Good start. A terrible middle. Plain facts here. Very happy ending!";
        let summary = Summarizer::new().summarize(text).unwrap();
        let sentences = split_sentences(text);
        for extremum in [
            &summary.most_polar,
            &summary.least_polar,
            &summary.most_objective,
            &summary.most_subjective,
        ] {
            assert!(
                sentences.contains(&extremum.text.as_str()),
                "{:?} not in input",
                extremum.text
            );
        }
    }

    #[test]
    fn extrema_bound_every_sentence() {
        let text = "Good start. A terrible middle. Plain facts here. Very happy ending!";
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize(text).unwrap();
        for sentence in split_sentences(text) {
            let score = LexiconScorer::new().score(sentence);
            assert!(summary.most_polar.score.polarity >= score.polarity);
            assert!(summary.least_polar.score.polarity <= score.polarity);
            assert!(summary.most_objective.score.subjectivity <= score.subjectivity);
            assert!(summary.most_subjective.score.subjectivity >= score.subjectivity);
        }
    }

    #[test]
    fn ties_keep_the_earlier_sentence() {
        let scorer = FixedScorer::new(&[
            ("Alpha wins first.", 0.5, 0.5),
            ("Beta ties it.", 0.5, 0.5),
            ("Gamma ties too.", 0.5, 0.5),
        ]);
        let summary = Summarizer::with_scorer(scorer)
            .summarize("Alpha wins first. Beta ties it. Gamma ties too.")
            .unwrap();
        assert_eq!(summary.most_polar.text, "Alpha wins first.");
        assert_eq!(summary.least_polar.text, "Alpha wins first.");
        assert_eq!(summary.most_objective.text, "Alpha wins first.");
        assert_eq!(summary.most_subjective.text, "Alpha wins first.");
    }

    #[test]
    fn one_sentence_wins_every_category_when_alone() {
        let summary = Summarizer::new().summarize("Just one sentence.").unwrap();
        assert_eq!(summary.most_polar.text, "Just one sentence.");
        assert_eq!(summary.least_polar.text, "Just one sentence.");
        assert_eq!(summary.most_objective.text, "Just one sentence.");
        assert_eq!(summary.most_subjective.text, "Just one sentence.");
    }

    #[test]
    fn same_sentence_may_win_multiple_categories() {
        let scorer = FixedScorer::new(&[
            ("Ecstatic and gushing!", 0.9, 0.9),
            ("Dry recitation of numbers.", -0.1, 0.1),
        ]);
        let summary = Summarizer::with_scorer(scorer)
            .summarize("Ecstatic and gushing! Dry recitation of numbers.")
            .unwrap();
        assert_eq!(summary.most_polar.text, "Ecstatic and gushing!");
        assert_eq!(summary.most_subjective.text, "Ecstatic and gushing!");
        assert_eq!(summary.least_polar.text, "Dry recitation of numbers.");
        assert_eq!(summary.most_objective.text, "Dry recitation of numbers.");
    }

    #[test]
    fn overall_is_scored_on_the_whole_text_not_aggregated() {
        // The fixed scorer knows the full text but none of the sentences, so
        // a derived overall would be neutral while the real one is not.
        let text = "One plain sentence. Another plain sentence.";
        let scorer = FixedScorer::new(&[(text, 0.7, 0.7)]);
        let summary = Summarizer::with_scorer(scorer).summarize(text).unwrap();
        assert_eq!(summary.overall, SentimentScore::new(0.7, 0.7));
        assert_eq!(summary.most_polar.score, SentimentScore::neutral());
    }

    #[test]
    fn summarize_is_idempotent_for_identical_input() {
        let text = "Good start. A terrible middle. Plain facts here.";
        let summarizer = Summarizer::new();
        let first = summarizer.summarize(text).unwrap();
        let second = summarizer.summarize(text).unwrap();
        assert_eq!(first.most_polar, second.most_polar);
        assert_eq!(first.least_polar, second.least_polar);
        assert_eq!(first.most_objective, second.most_objective);
        assert_eq!(first.most_subjective, second.most_subjective);
        assert_eq!(first.overall, second.overall);
    }
}
