use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Question};

/// The ordered collection of all questions in a survey.
///
/// A catalog is presentation-agnostic: it says what to ask and how to
/// interpret answers, and leaves rendering and answer storage to its
/// consumers. Insertion order is render order.
///
/// Serializes as a plain JSON array of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog from questions in display order.
    ///
    /// No checks are made; see [`Catalog::try_new`] and [`Catalog::validate`].
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Create a catalog and validate it.
    pub fn try_new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let catalog = Self::new(questions);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::debug!(questions = catalog.len(), "loaded catalog from JSON");
        Ok(catalog)
    }

    /// Serialize to a compact JSON array.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON array.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the type system cannot express.
    ///
    /// Questions are checked in order and the first violation is returned:
    /// ids are non-empty and unique, and every choice question has a
    /// non-empty option list whose values are unique within that question.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();

        for (index, question) in self.questions.iter().enumerate() {
            if question.id().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !ids.insert(question.id()) {
                return Err(CatalogError::DuplicateId {
                    id: question.id().to_string(),
                });
            }

            let Some(options) = question.kind().options() else {
                continue;
            };
            if options.is_empty() {
                return Err(CatalogError::NoOptions {
                    id: question.id().to_string(),
                });
            }

            let mut values = HashSet::new();
            for option in options {
                if !values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOptionValue {
                        id: question.id().to_string(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get an iterator over the questions in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Check if the catalog has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
