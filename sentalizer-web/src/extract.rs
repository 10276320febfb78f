//! Visible-text extraction from HTML.
//!
//! Uses a real DOM parser (`scraper`) rather than tag-stripping heuristics:
//! entities are decoded, script/style content is excluded, and malformed
//! markup is handled by the html5ever tree builder.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};
use time::OffsetDateTime;
use url::Url;

/// Everything we keep from one fetched page.
#[derive(Debug, Clone)]
pub struct PageArtifact {
    pub url: Url,
    /// First `<h1>` text, falling back to the `<title>`; `None` when the
    /// document has neither.
    pub header: Option<String>,
    /// Visible body text with whitespace collapsed.
    pub text: String,
    pub html_checksum: String,
    pub retrieved_at: OffsetDateTime,
}

/// Extract header and visible text from a fetched HTML document.
pub fn extract_page(url: &Url, html: &str, retrieved_at: OffsetDateTime) -> PageArtifact {
    let doc = Html::parse_document(html);

    let header = extract_header(&doc);
    let text = visible_text(&doc);

    tracing::debug!(
        url = %url,
        header = header.as_deref().unwrap_or("-"),
        text_len = text.len(),
        "web.extract.done"
    );

    PageArtifact {
        url: url.clone(),
        header,
        text,
        html_checksum: blake3::hash(html.as_bytes()).to_hex().to_string(),
        retrieved_at,
    }
}

/// The document's header label: first `<h1>`, else the `<title>`.
fn extract_header(doc: &Html) -> Option<String> {
    for css in ["h1", "title"] {
        let selector = Selector::parse(css).expect("static selector");
        if let Some(element) = doc.select(&selector).next() {
            let text = collapse_whitespace(&element.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Concatenate the document's visible text nodes, skipping non-rendered
/// subtrees, and collapse runs of whitespace.
fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    collect_text(doc.tree.root(), &mut out);
    collapse_whitespace(&out)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&text.text),
        Node::Element(element) => {
            if matches!(
                element.name(),
                "script" | "style" | "noscript" | "template" | "head"
            ) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
            // block boundaries should not glue adjacent words together,
            // but inline markup must not split a word in half
            if !is_inline(element.name()) {
                out.push(' ');
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Phrasing-content elements whose boundaries sit inside running text.
/// Anything not listed is treated as a block and separates words.
fn is_inline(name: &str) -> bool {
    matches!(
        name,
        "a" | "abbr"
            | "b"
            | "bdi"
            | "bdo"
            | "cite"
            | "code"
            | "data"
            | "del"
            | "dfn"
            | "em"
            | "i"
            | "ins"
            | "kbd"
            | "label"
            | "mark"
            | "q"
            | "ruby"
            | "rt"
            | "rp"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "u"
            | "var"
            | "wbr"
    )
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(html: &str) -> PageArtifact {
        let url = Url::parse("https://example.com/page").unwrap();
        extract_page(&url, html, OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn prefers_h1_over_title() {
        let page = artifact(
            "<html><head><title>The Title</title></head>\
             <body><h1>The Heading</h1><p>Body.</p></body></html>",
        );
        assert_eq!(page.header.as_deref(), Some("The Heading"));
    }

    #[test]
    fn falls_back_to_title_without_h1() {
        let page = artifact("<html><head><title>Only Title</title></head><body>Hi.</body></html>");
        assert_eq!(page.header.as_deref(), Some("Only Title"));
    }

    #[test]
    fn header_is_none_when_both_missing() {
        let page = artifact("<html><body><p>No labels here.</p></body></html>");
        assert_eq!(page.header, None);
    }

    #[test]
    fn script_and_style_text_is_excluded() {
        let page = artifact(
            "<html><body><p>Visible words.</p>\
             <script>var hidden = 'secret';</script>\
             <style>p { color: red; }</style></body></html>",
        );
        assert!(page.text.contains("Visible words."));
        assert!(!page.text.contains("secret"));
        assert!(!page.text.contains("color"));
    }

    #[test]
    fn entities_are_decoded_and_whitespace_collapsed() {
        let page = artifact("<html><body><p>Fish &amp; chips,\n\n   twice.</p></body></html>");
        assert_eq!(page.text, "Fish & chips, twice.");
    }

    #[test]
    fn inline_markup_does_not_split_words() {
        let page = artifact("<html><body><p>un<b>believ</b>able, <em>truly</em>.</p></body></html>");
        assert_eq!(page.text, "unbelievable, truly.");
    }

    #[test]
    fn block_boundaries_separate_words() {
        let page = artifact(
            "<html><body><h1>Heading</h1><p>first</p><p>second</p>\
             <ul><li>one</li><li>two</li></ul></body></html>",
        );
        assert_eq!(page.text, "Heading first second one two");
    }

    #[test]
    fn blank_page_yields_empty_text() {
        let page = artifact("<html><body>   </body></html>");
        assert!(page.text.is_empty());
    }

    #[test]
    fn checksum_tracks_the_raw_markup() {
        let a = artifact("<html><body>one</body></html>");
        let b = artifact("<html><body>two</body></html>");
        assert_ne!(a.html_checksum, b.html_checksum);
        assert_eq!(a.html_checksum.len(), 64);
    }
}
