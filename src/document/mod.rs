//! Tagged-line document corpus parsing
//!
//! The corpus format stores one document per line as
//! `<subject>…</subject><content>…</content><maincat>…</maincat>`.
//! This module extracts the fields, normalizes the escaped markup the raw
//! corpus carries, tokenizes into sentences, and aggregates word counts.

pub mod corpus;
pub mod document;
pub mod markup;
pub mod tagged;

pub use corpus::Corpus;
pub use document::Document;
pub use tagged::{extract_tag, TaggedRecord};
