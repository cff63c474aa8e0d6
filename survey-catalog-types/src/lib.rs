//! Core types for the survey-catalog crate.
//!
//! This crate provides the foundational types for describing a questionnaire:
//! - `Catalog` - The ordered, top-level collection of questions
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `AnswerOption` - One selectable choice of a radio, checkbox or select question
//! - `CatalogError` - Structural violations and JSON loading failures

mod question;
pub use question::{AnswerOption, ChoiceQuestion, Question, QuestionKind, TextQuestion};

mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::CatalogError;
