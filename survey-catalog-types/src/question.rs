use serde::{Deserialize, Serialize};

/// A single question in a catalog.
///
/// Serializes to the flat shape front-ends consume:
/// `{ "id", "title", "description"?, "type", "options"? | "placeholder"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable key that collected answers are stored under.
    id: String,

    /// The prompt text shown to the user.
    title: String,

    /// Optional helper text shown under the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// The kind of question (determines the input widget and its payload).
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    /// Create a new question without a description.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            kind,
        }
    }

    /// Set the helper text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the helper text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The wire name of this question's type.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// The kind of question, determining the input widget.
///
/// Choice kinds always carry an option list and text never does, so a text
/// question with options cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Pick exactly one option, all options visible.
    Radio(ChoiceQuestion),

    /// Pick any number of options.
    Checkbox(ChoiceQuestion),

    /// Pick exactly one option from a dropdown.
    Select(ChoiceQuestion),

    /// Free-form single-line text.
    Text(TextQuestion),
}

impl QuestionKind {
    /// The wire name: `radio`, `checkbox`, `select` or `text`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Radio(_) => "radio",
            Self::Checkbox(_) => "checkbox",
            Self::Select(_) => "select",
            Self::Text(_) => "text",
        }
    }

    /// The option list of a choice question, `None` for text.
    pub fn options(&self) -> Option<&[AnswerOption]> {
        match self {
            Self::Radio(choice) | Self::Checkbox(choice) | Self::Select(choice) => {
                Some(choice.options())
            }
            Self::Text(_) => None,
        }
    }

    /// The input hint of a text question.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.placeholder.as_deref(),
            _ => None,
        }
    }

    /// Check if answers are picked from a fixed option list.
    pub fn is_choice(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Check if more than one option may be selected.
    pub fn allows_multiple(&self) -> bool {
        matches!(self, Self::Checkbox(_))
    }
}

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Token stored as the answer when this option is selected.
    pub value: String,

    /// Display text.
    pub label: String,
}

impl AnswerOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Configuration for a radio, checkbox or select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceQuestion {
    /// The available options, in display order.
    pub options: Vec<AnswerOption>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new(options: Vec<AnswerOption>) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Find the option stored under `value`.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextQuestion {
    /// Hint shown inside the empty input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextQuestion {
    /// Create a text question without a placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> Question {
        Question::new(
            "budget",
            "Budget?",
            QuestionKind::Select(ChoiceQuestion::new(vec![
                AnswerOption::new("1", "Low"),
                AnswerOption::new("2", "High"),
            ])),
        )
    }

    #[test]
    fn type_names() {
        let choice = ChoiceQuestion::new(vec![AnswerOption::new("1", "One")]);
        assert_eq!(QuestionKind::Radio(choice.clone()).type_name(), "radio");
        assert_eq!(QuestionKind::Checkbox(choice.clone()).type_name(), "checkbox");
        assert_eq!(QuestionKind::Select(choice).type_name(), "select");
        assert_eq!(QuestionKind::Text(TextQuestion::new()).type_name(), "text");
    }

    #[test]
    fn only_checkbox_allows_multiple() {
        let choice = ChoiceQuestion::new(vec![AnswerOption::new("1", "One")]);
        assert!(!QuestionKind::Radio(choice.clone()).allows_multiple());
        assert!(!QuestionKind::Select(choice.clone()).allows_multiple());
        assert!(QuestionKind::Checkbox(choice).allows_multiple());
        assert!(!QuestionKind::Text(TextQuestion::new()).allows_multiple());
    }

    #[test]
    fn text_has_no_options() {
        let kind = QuestionKind::Text(TextQuestion::with_placeholder("e.g. Japan"));
        assert!(!kind.is_choice());
        assert!(kind.options().is_none());
        assert_eq!(kind.placeholder(), Some("e.g. Japan"));
    }

    #[test]
    fn option_lookup() {
        let question = budget();
        let QuestionKind::Select(choice) = question.kind() else {
            panic!("expected a select question");
        };
        assert_eq!(choice.option("2").map(|o| o.label.as_str()), Some("High"));
        assert!(choice.option("3").is_none());
    }

    #[test]
    fn choice_serializes_flat() {
        let value = serde_json::to_value(budget().with_description("Pick one")).unwrap();
        assert_eq!(value["id"], "budget");
        assert_eq!(value["type"], "select");
        assert_eq!(value["title"], "Budget?");
        assert_eq!(value["description"], "Pick one");
        assert_eq!(value["options"][1]["value"], "2");
        assert_eq!(value["options"][1]["label"], "High");
        assert!(value.get("placeholder").is_none());
    }

    #[test]
    fn text_serializes_without_options() {
        let question = Question::new(
            "where",
            "Where to?",
            QuestionKind::Text(TextQuestion::with_placeholder("e.g. Japan")),
        );
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["placeholder"], "e.g. Japan");
        assert!(value.get("options").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn text_with_options_is_rejected() {
        let json = r#"{"id":"x","type":"text","title":"X","options":[{"value":"1","label":"One"}]}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn choice_without_options_is_rejected() {
        let json = r#"{"id":"x","type":"radio","title":"X"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
