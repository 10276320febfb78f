//! The page-report pipeline: fetch a URL, extract its visible text, and
//! summarize sentence-level sentiment.
//!
//! Failure policy: everything is converted to a user-facing message at the
//! binary boundary. A fetch failure (bad URL, transport error, non-2xx) asks
//! the user to fix the URL and never reaches the summarizer; a page with no
//! analyzable text is reported as such.

use serde::Serialize;
use sentalizer_http::{FetchError, PageFetcher};
use sentalizer_nlp::{ScoredSentence, SentimentScorer, SentimentSummary, SummarizeError, Summarizer};
use sentalizer_web::extract_page;
use thiserror::Error;
use time::OffsetDateTime;
use url::Url;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl ReportError {
    /// The message shown to the user; the cause goes to the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ReportError::Url(_) | ReportError::Fetch(_) => "Invalid url. Please fix and resubmit.",
            ReportError::Summarize(SummarizeError::EmptyInput) => {
                "This page had no analyzable text."
            }
        }
    }
}

/// What the app renders: the page identity plus its sentiment summary.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub url: String,
    pub header: Option<String>,
    pub summary: SentimentSummary,
}

/// Run the whole pipeline for one URL.
pub async fn run_report<S: SentimentScorer>(
    fetcher: &PageFetcher,
    summarizer: &Summarizer<S>,
    raw_url: &str,
) -> Result<PageReport, ReportError> {
    let url = Url::parse(raw_url)?;

    let html = fetcher.fetch_html(&url).await?;

    let page = extract_page(&url, &html, OffsetDateTime::now_utc());
    tracing::info!(
        url = %page.url,
        header = page.header.as_deref().unwrap_or("-"),
        text_len = page.text.len(),
        checksum = %page.html_checksum,
        "report.page.extracted"
    );

    let summary = summarizer.summarize(&page.text)?;

    Ok(PageReport {
        url: page.url.to_string(),
        header: page.header,
        summary,
    })
}

/// Human-readable rendering of a report.
pub fn render_text(report: &PageReport) -> String {
    let s = &report.summary;
    let mut out = String::new();
    out.push_str(&format!("URL:     {}\n", report.url));
    out.push_str(&format!(
        "Header:  {}\n",
        report.header.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Overall: polarity {:+.3}, subjectivity {:.3}\n\n",
        s.overall.polarity, s.overall.subjectivity
    ));
    out.push_str(&polarity_line("Most polar", &s.most_polar));
    out.push_str(&polarity_line("Least polar", &s.least_polar));
    out.push_str(&subjectivity_line("Most objective", &s.most_objective));
    out.push_str(&subjectivity_line("Most subjective", &s.most_subjective));
    out
}

fn polarity_line(label: &str, sentence: &ScoredSentence) -> String {
    format!(
        "{label:<16} [{:+.3}] {}\n",
        sentence.score.polarity, sentence.text
    )
}

fn subjectivity_line(label: &str, sentence: &ScoredSentence) -> String {
    format!(
        "{label:<16} [{:.3}] {}\n",
        sentence.score.subjectivity, sentence.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentalizer_nlp::SentimentScore;

    fn sample_report() -> PageReport {
        let sentence = |text: &str, p, s| ScoredSentence {
            text: text.to_string(),
            score: SentimentScore::new(p, s),
        };
        PageReport {
            url: "https://example.com/".to_string(),
            header: Some("Example".to_string()),
            summary: SentimentSummary {
                overall: SentimentScore::new(0.25, 0.5),
                most_polar: sentence("Great stuff.", 0.8, 0.75),
                least_polar: sentence("Awful stuff.", -0.9, 0.95),
                most_objective: sentence("Stuff exists.", 0.0, 0.0),
                most_subjective: sentence("I adore stuff.", 0.6, 0.9),
            },
        }
    }

    #[test]
    fn text_rendering_includes_all_sections() {
        let rendered = render_text(&sample_report());
        assert!(rendered.contains("URL:     https://example.com/"));
        assert!(rendered.contains("Header:  Example"));
        assert!(rendered.contains("Overall: polarity +0.250, subjectivity 0.500"));
        assert!(rendered.contains("[+0.800] Great stuff."));
        assert!(rendered.contains("[-0.900] Awful stuff."));
        assert!(rendered.contains("[0.000] Stuff exists."));
        assert!(rendered.contains("[0.900] I adore stuff."));
    }

    #[test]
    fn missing_header_renders_a_placeholder() {
        let mut report = sample_report();
        report.header = None;
        assert!(render_text(&report).contains("Header:  -"));
    }

    #[test]
    fn report_serializes_to_json() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["url"], "https://example.com/");
        assert_eq!(value["summary"]["most_polar"]["score"]["polarity"], 0.8);
    }
}
