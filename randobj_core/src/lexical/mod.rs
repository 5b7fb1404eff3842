//! Lexical classification of comma-separated objects
//!
//! Splits source text on the separator and assigns each non-empty segment
//! a [`Category`](crate::tokens::Category) using ordered, anchored rules.

pub mod classifier;

pub use classifier::{
    category_of, classify_token, split_tokens, ClassificationOutcome, Classifier,
};
