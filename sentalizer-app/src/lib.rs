//! Library surface of the Sentalizer binary: the fetch → extract → summarize
//! pipeline, kept out of `main.rs` so integration tests can drive it.

pub mod report;
