//! Deterministic study-content generators.
//!
//! Every generator here is a pure function: fixed templates with the
//! topic or message interpolated, plus the extractive summarizer. One
//! call, one result, no shared mutable state, no I/O.

pub mod chat;
pub mod explain;
pub mod flashcards;
pub mod keyterms;
pub mod quiz;
pub mod stopwords;
pub mod summarize;
