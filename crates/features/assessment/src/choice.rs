use crate::id::ChoiceId;
use serde::Serialize;

/// A single answer option owned by a [`Question`](crate::Question).
///
/// Choices are only created through [`Question::add_choice`](crate::Question::add_choice);
/// their correctness only changes through
/// [`Question::set_correct_choices`](crate::Question::set_correct_choices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) const fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self { id, text, is_correct }
    }

    #[must_use]
    pub const fn id(&self) -> &ChoiceId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) const fn mark(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
