//! Built-in lexicon scorer.
//!
//! A pattern-lexicon in the TextBlob family: each entry carries a hand-tuned
//! `(polarity, subjectivity)` pair, intensifiers scale the next hit, and
//! negators flip (and dampen) the next hit's polarity. The final score is the
//! mean over lexicon hits; text with no hits scores neutral.

use std::collections::HashMap;

use crate::traits::{SentimentScore, SentimentScorer};

/// How many non-modifier tokens a pending intensifier/negator survives.
/// Covers "not a good idea" without letting "not" reach across a clause.
const MODIFIER_REACH: u8 = 2;

/// Word → (polarity, subjectivity).
const LEXICON: &[(&str, f64, f64)] = &[
    // strong positive
    ("amazing", 0.8, 0.9),
    ("awesome", 0.9, 0.95),
    ("brilliant", 0.9, 0.9),
    ("delighted", 0.8, 0.9),
    ("delightful", 0.8, 0.9),
    ("excellent", 0.9, 0.85),
    ("fantastic", 0.9, 0.9),
    ("love", 0.6, 0.7),
    ("loved", 0.6, 0.7),
    ("lovely", 0.7, 0.85),
    ("loves", 0.6, 0.7),
    ("magnificent", 0.9, 0.9),
    ("outstanding", 0.9, 0.9),
    ("perfect", 1.0, 1.0),
    ("superb", 0.9, 0.9),
    ("wonderful", 0.9, 0.9),
    // mild positive
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("calm", 0.3, 0.7),
    ("charming", 0.6, 0.85),
    ("clean", 0.4, 0.6),
    ("clear", 0.2, 0.35),
    ("comfortable", 0.5, 0.7),
    ("convenient", 0.4, 0.6),
    ("easy", 0.4, 0.7),
    ("effective", 0.5, 0.6),
    ("elegant", 0.6, 0.8),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.7),
    ("enjoyed", 0.4, 0.5),
    ("fair", 0.35, 0.6),
    ("fast", 0.2, 0.5),
    ("favorite", 0.6, 0.9),
    ("fine", 0.3, 0.6),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.5, 0.7),
    ("fun", 0.5, 0.6),
    ("generous", 0.5, 0.6),
    ("gentle", 0.4, 0.7),
    ("glad", 0.5, 0.9),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.6),
    ("honest", 0.4, 0.6),
    ("hopeful", 0.4, 0.8),
    ("impressive", 0.7, 0.9),
    ("interesting", 0.5, 0.5),
    ("kind", 0.6, 0.9),
    ("like", 0.3, 0.4),
    ("liked", 0.3, 0.4),
    ("likes", 0.3, 0.4),
    ("neat", 0.4, 0.6),
    ("nice", 0.6, 1.0),
    ("pleasant", 0.6, 0.8),
    ("pleased", 0.6, 0.8),
    ("popular", 0.4, 0.5),
    ("positive", 0.3, 0.4),
    ("pretty", 0.5, 0.9),
    ("reliable", 0.5, 0.55),
    ("rich", 0.4, 0.5),
    ("right", 0.3, 0.55),
    ("safe", 0.4, 0.5),
    ("satisfied", 0.5, 0.7),
    ("simple", 0.2, 0.45),
    ("smart", 0.5, 0.7),
    ("smooth", 0.4, 0.6),
    ("solid", 0.4, 0.5),
    ("strong", 0.4, 0.5),
    ("succeed", 0.5, 0.5),
    ("success", 0.6, 0.6),
    ("successful", 0.6, 0.65),
    ("sweet", 0.5, 0.75),
    ("useful", 0.4, 0.45),
    ("valuable", 0.5, 0.55),
    ("warm", 0.4, 0.6),
    ("welcome", 0.4, 0.5),
    ("win", 0.5, 0.5),
    ("wise", 0.5, 0.7),
    ("worthy", 0.4, 0.5),
    // strong negative
    ("abysmal", -0.9, 0.95),
    ("appalling", -0.9, 0.95),
    ("atrocious", -0.9, 0.95),
    ("awful", -0.9, 0.95),
    ("despise", -0.8, 0.9),
    ("disaster", -0.8, 0.7),
    ("disgusting", -0.9, 0.95),
    ("dreadful", -0.9, 0.95),
    ("hate", -0.8, 0.9),
    ("hated", -0.8, 0.9),
    ("hates", -0.8, 0.9),
    ("horrible", -0.9, 0.95),
    ("terrible", -0.9, 0.9),
    ("worst", -1.0, 0.5),
    // mild negative
    ("angry", -0.6, 0.9),
    ("annoying", -0.6, 0.8),
    ("bad", -0.7, 0.65),
    ("boring", -0.6, 0.8),
    ("broken", -0.4, 0.4),
    ("cheap", -0.3, 0.5),
    ("confusing", -0.4, 0.6),
    ("cruel", -0.7, 0.85),
    ("damage", -0.4, 0.4),
    ("dangerous", -0.5, 0.6),
    ("dark", -0.2, 0.4),
    ("dead", -0.4, 0.4),
    ("difficult", -0.4, 0.6),
    ("dirty", -0.5, 0.7),
    ("disappointed", -0.6, 0.8),
    ("disappointing", -0.6, 0.8),
    ("dull", -0.4, 0.7),
    ("expensive", -0.3, 0.6),
    ("fail", -0.5, 0.5),
    ("failed", -0.5, 0.5),
    ("failure", -0.6, 0.6),
    ("fake", -0.5, 0.6),
    ("fear", -0.5, 0.6),
    ("hard", -0.3, 0.55),
    ("harsh", -0.5, 0.7),
    ("hurt", -0.5, 0.6),
    ("lazy", -0.4, 0.7),
    ("lost", -0.3, 0.4),
    ("mediocre", -0.3, 0.7),
    ("mess", -0.4, 0.6),
    ("miserable", -0.7, 0.9),
    ("nasty", -0.6, 0.8),
    ("negative", -0.3, 0.4),
    ("noisy", -0.4, 0.6),
    ("painful", -0.6, 0.75),
    ("poor", -0.5, 0.6),
    ("problem", -0.3, 0.35),
    ("rude", -0.6, 0.8),
    ("sad", -0.6, 1.0),
    ("scary", -0.5, 0.75),
    ("slow", -0.3, 0.45),
    ("stupid", -0.7, 0.85),
    ("suspicious", -0.3, 0.5),
    ("tired", -0.3, 0.55),
    ("ugly", -0.7, 0.9),
    ("unfair", -0.5, 0.7),
    ("unhappy", -0.6, 0.9),
    ("unreliable", -0.5, 0.6),
    ("useless", -0.6, 0.7),
    ("weak", -0.4, 0.5),
    ("worse", -0.6, 0.6),
    ("wrong", -0.5, 0.55),
];

/// Intensifier → multiplier applied to the next lexicon hit.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.5),
    ("completely", 1.4),
    ("deeply", 1.3),
    ("extremely", 1.5),
    ("fairly", 0.9),
    ("hardly", 0.4),
    ("highly", 1.4),
    ("incredibly", 1.6),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("totally", 1.4),
    ("truly", 1.3),
    ("utterly", 1.5),
    ("very", 1.3),
];

fn is_negator(token: &str) -> bool {
    token.ends_with("n't")
        || matches!(
            token,
            "not" | "no" | "never" | "cannot" | "neither" | "nor" | "nobody" | "nothing" | "without"
        )
}

/// Lexicon-backed implementation of [`SentimentScorer`].
pub struct LexiconScorer {
    entries: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            entries: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        let mut intensity = 1.0f64;
        let mut negated = false;
        let mut reach = 0u8;

        for raw in text.split(|c: char| !c.is_alphanumeric() && c != '\'') {
            let token = raw.trim_matches('\'').to_lowercase();
            if token.is_empty() {
                continue;
            }

            if let Some(&factor) = self.intensifiers.get(token.as_str()) {
                intensity *= factor;
                reach = MODIFIER_REACH;
                continue;
            }
            if is_negator(&token) {
                negated = !negated;
                reach = MODIFIER_REACH;
                continue;
            }

            if let Some(&(pol, subj)) = self.entries.get(token.as_str()) {
                let mut polarity = pol * intensity;
                if negated {
                    polarity *= -0.5;
                }
                polarity_sum += polarity.clamp(-1.0, 1.0);
                subjectivity_sum += (subj * intensity.max(1.0)).clamp(0.0, 1.0);
                hits += 1;
                intensity = 1.0;
                negated = false;
                reach = 0;
                continue;
            }

            // plain miss: pending modifiers decay instead of vanishing at once
            if reach > 0 {
                reach -= 1;
                if reach == 0 {
                    intensity = 1.0;
                    negated = false;
                }
            }
        }

        if hits == 0 {
            return SentimentScore::neutral();
        }
        SentimentScore::new(polarity_sum / hits as f64, subjectivity_sum / hits as f64)
    }
}
