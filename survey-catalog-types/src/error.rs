/// Error type for catalog validation and loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A question has an empty id, so answers could not be keyed by it.
    #[error("Question at position {index} has an empty id")]
    EmptyId { index: usize },

    /// Two questions share the same id.
    #[error("Duplicate question id: {id}")]
    DuplicateId { id: String },

    /// A radio, checkbox or select question has nothing to choose from.
    #[error("Question '{id}' has no options")]
    NoOptions { id: String },

    /// Two options of the same question share a value token.
    #[error("Question '{id}' has duplicate option value '{value}'")]
    DuplicateOptionValue { id: String, value: String },

    /// The catalog JSON could not be parsed or produced.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// The id of the offending question, if the error is tied to one.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateId { id }
            | Self::NoOptions { id }
            | Self::DuplicateOptionValue { id, .. } => Some(id),
            Self::EmptyId { .. } | Self::Json(_) => None,
        }
    }
}
