//! HTML page acquisition artifacts.
//!
//! Turns a fetched HTML document into a [`extract::PageArtifact`]: a header
//! label, the visible body text, and a checksum of the raw markup.

pub mod extract;

pub use extract::{extract_page, PageArtifact};
