//! Sentence boundary detection.
//!
//! Locale-agnostic heuristic: a run of terminal punctuation followed by
//! whitespace and an upper-case/opening character ends a sentence. A short
//! abbreviation list keeps "Dr. Smith" in one piece; anything fancier is the
//! scorer's problem, not the splitter's.

/// Common abbreviations whose trailing dot never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "inc", "ltd", "jr", "sr", "e.g", "i.e",
];

fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn opens_sentence(ch: char) -> bool {
    ch.is_uppercase() || ch.is_ascii_digit() || matches!(ch, '"' | '\'' | '“' | '‘' | '(' | '[')
}

/// Split raw text into an ordered sequence of trimmed sentences.
///
/// Trailing text without terminal punctuation still counts as a sentence.
/// Whitespace-only input yields an empty sequence.
///
/// ```
/// use sentalizer_nlp::sentence::split_sentences;
///
/// let sentences = split_sentences("I love this. I hate that. It is fine.");
/// assert_eq!(sentences, vec!["I love this.", "I hate that.", "It is fine."]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if !is_terminal(chars[i].1) {
            i += 1;
            continue;
        }

        if chars[i].1 == '.' && preceded_by_abbreviation(text, chars[i].0) {
            i += 1;
            continue;
        }

        // absorb the punctuation run plus any closing quotes/brackets
        let mut j = i + 1;
        while j < chars.len() && (is_terminal(chars[j].1) || is_closer(chars[j].1)) {
            j += 1;
        }
        let end = chars.get(j).map(|&(b, _)| b).unwrap_or(text.len());

        // look past whitespace for the start of the next sentence
        let mut k = j;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }
        let at_boundary = match chars.get(k) {
            None => true,
            Some(&(_, next)) => k > j && opens_sentence(next),
        };

        if at_boundary {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = chars.get(k).map(|&(b, _)| b).unwrap_or(text.len());
            i = k;
        } else {
            i = j;
        }
    }

    if start < text.len() {
        let rest = text[start..].trim();
        if !rest.is_empty() {
            out.push(rest);
        }
    }

    out
}

/// True when the word ending at byte offset `dot` is a known abbreviation
/// or a single-letter initial ("J. Smith").
fn preceded_by_abbreviation(text: &str, dot: usize) -> bool {
    let head = &text[..dot];
    let word_start = head
        .rfind(|c: char| !c.is_alphanumeric() && c != '.')
        .map(|p| p + 1)
        .unwrap_or(0);
    let word = head[word_start..].trim_end_matches('.');
    if word.is_empty() {
        return false;
    }
    if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
        return true;
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let got = split_sentences("I love this. I hate that. It is fine.");
        assert_eq!(got, vec!["I love this.", "I hate that.", "It is fine."]);
    }

    #[test]
    fn handles_exclamation_and_question_marks() {
        let got = split_sentences("What a day! Did you see it? Unbelievable.");
        assert_eq!(got, vec!["What a day!", "Did you see it?", "Unbelievable."]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn trailing_text_without_punctuation_is_a_sentence() {
        let got = split_sentences("First one. and then a fragment");
        assert_eq!(got, vec!["First one. and then a fragment"]);

        let got = split_sentences("First one. And then a fragment");
        assert_eq!(got, vec!["First one.", "And then a fragment"]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let got = split_sentences("Dr. Smith arrived. Mr. Jones left.");
        assert_eq!(got, vec!["Dr. Smith arrived.", "Mr. Jones left."]);
    }

    #[test]
    fn initials_do_not_split() {
        let got = split_sentences("J. R. Hartley wrote it. It sold well.");
        assert_eq!(got, vec!["J. R. Hartley wrote it.", "It sold well."]);
    }

    #[test]
    fn punctuation_runs_stay_with_their_sentence() {
        let got = split_sentences("Really?! Yes. \"Quoted ending.\" Next.");
        assert_eq!(got, vec!["Really?!", "Yes.", "\"Quoted ending.\"", "Next."]);
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        let got = split_sentences("version 2.0 shipped today");
        assert_eq!(got, vec!["version 2.0 shipped today"]);
    }
}
