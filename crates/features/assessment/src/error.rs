use crate::id::ChoiceId;
use std::borrow::Cow;

/// Errors raised by question and choice operations.
///
/// Every variant is returned before any state is touched, so a failed call leaves
/// the question exactly as it was.
#[qhub_derive::qhub_error]
pub enum AssessmentError {
    /// An input broke one of the question rules (lengths, ranges, selection limit).
    #[error("Invalid {field}{}: {message}", format_context(.context))]
    Validation {
        field: &'static str,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The referenced choice does not belong to the question.
    #[error("Choice not found{}: {id}", format_context(.context))]
    ChoiceNotFound { id: ChoiceId, context: Option<Cow<'static, str>> },
}

impl AssessmentError {
    pub(crate) fn validation(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { field, message: message.into(), context: None }
    }

    pub(crate) const fn choice_not_found(id: ChoiceId) -> Self {
        Self::ChoiceNotFound { id, context: None }
    }

    /// Returns `true` for [`AssessmentError::Validation`].
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` for [`AssessmentError::ChoiceNotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ChoiceNotFound { .. })
    }
}
