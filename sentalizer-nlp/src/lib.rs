//! Sentence-level sentiment analysis.
//!
//! The pipeline is deliberately small and synchronous:
//!
//! - [`sentence::split_sentences`] cuts raw text into sentences
//! - a [`SentimentScorer`] assigns each sentence a `(polarity, subjectivity)`
//!   pair; [`lexicon::LexiconScorer`] is the built-in implementation
//! - [`Summarizer::summarize`] scores the whole text plus every sentence and
//!   picks the four extremal sentences in a single pass
//!
//! The scorer is a trait so tests (and alternate backends) can substitute
//! fixed scores without touching the selection logic.

pub mod lexicon;
pub mod sentence;
pub mod summary;
pub mod traits;

pub use lexicon::LexiconScorer;
pub use summary::{ScoredSentence, SentimentSummary, SummarizeError, Summarizer};
pub use traits::{SentimentScore, SentimentScorer};
