//! The travel habits survey.

use std::sync::LazyLock;

use crate::{AnswerOption, Catalog, ChoiceQuestion, Question, QuestionKind, TextQuestion};

static TRAVEL_SURVEY: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::new(vec![
        Question::new(
            "travel_frequency",
            "Как часто вы путешествуете?",
            QuestionKind::Radio(ChoiceQuestion::new(vec![
                AnswerOption::new("1", "Раз в год или реже"),
                AnswerOption::new("2", "2-4 раза в год"),
                AnswerOption::new("3", "5+ раз в год"),
            ])),
        )
        .with_description("Выберите наиболее подходящий вариант"),
        Question::new(
            "travel_type",
            "Какие виды путешествий вам интересны?",
            QuestionKind::Checkbox(ChoiceQuestion::new(vec![
                AnswerOption::new("1", "Пляжный отдых"),
                AnswerOption::new("2", "Горы и природа"),
                AnswerOption::new("3", "Города и культура"),
                AnswerOption::new("4", "Экстрим и приключения"),
                AnswerOption::new("5", "Spa и релакс"),
            ])),
        ),
        Question::new(
            "budget",
            "Какой бюджет вы обычно планируете на поездку?",
            QuestionKind::Select(ChoiceQuestion::new(vec![
                AnswerOption::new("1", "До $500"),
                AnswerOption::new("2", "$500-$1000"),
                AnswerOption::new("3", "$1000-$2000"),
                AnswerOption::new("4", "$2000-$5000"),
                AnswerOption::new("5", "$5000+"),
            ])),
        ),
        Question::new(
            "dream_destination",
            "Куда вы мечтаете поехать?",
            QuestionKind::Text(TextQuestion::with_placeholder(
                "Например: Исландия, Япония, Новая Зеландия",
            )),
        ),
    ]);

    tracing::debug!(questions = catalog.len(), "built travel survey catalog");
    catalog
});

/// The travel survey catalog.
pub fn catalog() -> &'static Catalog {
    &TRAVEL_SURVEY
}

/// All travel survey questions, in display order.
///
/// Every call returns the same slice.
pub fn questions() -> &'static [Question] {
    TRAVEL_SURVEY.questions()
}
