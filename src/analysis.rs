//! Tag analysis module for Taglink.
//!
//! Tokenizers locate tag tokens in text and report them as [`token::TagMatch`]
//! values with codepoint offsets.

pub mod token;
pub mod tokenizer;
