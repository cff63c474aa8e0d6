//! # survey-catalog
//!
//! The travel survey question catalog.
//!
//! The catalog is built once, on first access, and is read-only for the rest
//! of the process. Consumers get shared references only, so every call sees
//! the same questions in the same order.
//!
//! ## Usage
//!
//! ```rust
//! use survey_catalog::QuestionKind;
//!
//! for question in survey_catalog::questions() {
//!     match question.kind() {
//!         QuestionKind::Text(text) => {
//!             println!("{} (hint: {:?})", question.title(), text.placeholder);
//!         }
//!         kind => {
//!             for option in kind.options().unwrap_or_default() {
//!                 println!("{}: [{}] {}", question.id(), option.value, option.label);
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Rendering the questions and storing answers keyed by [`Question::id`] is
//! left to the consumer.

// Re-export all types from survey-catalog-types
pub use survey_catalog_types::*;

mod travel;
pub use travel::{catalog, questions};
