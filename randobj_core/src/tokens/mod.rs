//! Object model shared by the generator and the classifier
//!
//! - **[`Variant`]** - the four shapes the generator can draw
//! - **[`Category`]** - the five classification outcomes, in rule priority order
//! - **[`ClassificationRecord`]** - raw substring, trimmed value and category
//! - **[`CategoryCounts`]** - aggregate occurrences per category

pub mod token;

pub use token::{Category, CategoryCounts, ClassificationRecord, Variant};
