use crate::choice::Choice;
use crate::error::AssessmentError;
use crate::id::{ChoiceId, QuestionId};
use fxhash::FxHashSet;
use private::Sealed;
use qhub_domain::config::QuestionLimits;
use qhub_domain::constants::{
    CHOICE_TEXT_MIN_LEN, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, TITLE_MIN_LEN,
};
use serde::Serialize;
use tracing::{debug, trace};

/// A quiz question owning an ordered list of answer choices.
///
/// A `Question` can only be obtained through [`Question::new`] or [`Question::builder`], both of
/// which validate every field. Afterwards the invariants below hold between any two calls:
///
/// * the title is between 1 and `title_max_len` characters,
/// * `points` lies within `points_min..=points_max`,
/// * `max_selections` is at least 1,
/// * every choice text is between 1 and `choice_text_max_len` characters,
/// * choice ids are unique within the question.
///
/// Every mutating method validates its input before touching state; a returned error means
/// nothing changed.
///
/// `Question` is not `Clone`: its id identifies one live instance.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    #[serde(skip)]
    limits: QuestionLimits,
}

impl Question {
    /// Creates a question worth one point that accepts a single selection.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if the title is empty or too long.
    pub fn new(title: impl Into<String>) -> Result<Self, AssessmentError> {
        Self::builder().title(title).build()
    }

    /// Returns a [`QuestionBuilder`] for setting points, selection limit, or custom limits.
    ///
    /// # Example
    /// ```rust
    /// use qhub_assessment::Question;
    ///
    /// let question = Question::builder().title("q1").points(5).max_selections(2).build().unwrap();
    /// assert_eq!(question.points(), 5);
    /// assert_eq!(question.max_selections(), 2);
    /// ```
    #[must_use]
    pub fn builder() -> QuestionBuilder {
        QuestionBuilder::new()
    }

    #[must_use]
    pub const fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub const fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The limits this question was validated against.
    #[must_use]
    pub const fn limits(&self) -> &QuestionLimits {
        &self.limits
    }

    /// Looks up a choice by id.
    #[must_use]
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id() == id)
    }

    /// Iterates over the choices currently marked correct.
    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|choice| choice.is_correct())
    }

    /// Appends a new choice and returns it.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if `text` is empty or longer than the
    /// configured maximum; the choice list is left untouched.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, AssessmentError> {
        let text = text.into();
        check_len("choice text", &text, CHOICE_TEXT_MIN_LEN, self.limits.choice_text_max_len)?;

        let id = self.unused_choice_id();
        debug!(question = %self.id, choice = %id, is_correct, "Choice added");

        let index = self.choices.len();
        self.choices.push(Choice::new(id, text, is_correct));
        Ok(&self.choices[index])
    }

    /// Removes the choice with the given id and hands it back.
    ///
    /// The remaining choices keep their relative order.
    ///
    /// # Errors
    /// Returns [`AssessmentError::ChoiceNotFound`] if no choice has that id.
    pub fn remove_choice_by_id(&mut self, id: &ChoiceId) -> Result<Choice, AssessmentError> {
        let Some(index) = self.choices.iter().position(|choice| choice.id() == id) else {
            return Err(AssessmentError::choice_not_found(id.clone()));
        };

        let removed = self.choices.remove(index);
        debug!(question = %self.id, choice = %id, "Choice removed");
        Ok(removed)
    }

    /// Drops every choice. Does nothing on an empty question.
    pub fn remove_all_choices(&mut self) {
        let removed = self.choices.len();
        self.choices.clear();
        debug!(question = %self.id, removed, "Choices cleared");
    }

    /// Filters a selection down to the ids that belong to this question.
    ///
    /// The limit is checked against the raw input length, before unknown ids are dropped.
    /// Input order (and any repetition) is preserved.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if more than `max_selections` ids are given.
    pub fn select_choices(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, AssessmentError> {
        self.check_selection(ids)?;

        let selected: Vec<ChoiceId> =
            ids.iter().filter(|id| self.choice(id).is_some()).cloned().collect();

        trace!(question = %self.id, requested = ids.len(), selected = selected.len(), "Choices selected");
        Ok(selected)
    }

    /// Marks exactly the given choices as correct and every other choice as incorrect.
    ///
    /// # Errors
    /// Returns [`AssessmentError::ChoiceNotFound`] for the first id that does not belong to
    /// this question; no flag is changed in that case.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<(), AssessmentError> {
        if let Some(unknown) = ids.iter().find(|id| self.choice(id).is_none()) {
            return Err(AssessmentError::choice_not_found(unknown.clone()));
        }

        let correct: FxHashSet<&ChoiceId> = ids.iter().collect();
        for choice in &mut self.choices {
            let is_correct = correct.contains(choice.id());
            choice.mark(is_correct);
        }

        debug!(question = %self.id, correct = correct.len(), "Correct choices updated");
        Ok(())
    }

    pub(crate) fn check_selection(&self, ids: &[ChoiceId]) -> Result<(), AssessmentError> {
        if ids.len() > self.max_selections {
            return Err(AssessmentError::validation(
                "selection",
                format!("at most {} choices may be selected, got {}", self.max_selections, ids.len()),
            ));
        }
        Ok(())
    }

    fn unused_choice_id(&self) -> ChoiceId {
        loop {
            let id = ChoiceId::generate();
            if self.choice(&id).is_none() {
                return id;
            }
        }
    }
}

fn check_len(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), AssessmentError> {
    let len = value.chars().count();
    if len < min {
        return Err(AssessmentError::validation(field, "must not be empty"));
    }
    if len > max {
        return Err(AssessmentError::validation(
            field,
            format!("must be at most {max} characters, got {len}"),
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct NoTitle;
#[derive(Debug)]
pub struct WithTitle(String);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoTitle {}
impl Sealed for WithTitle {}

/// Typestate builder for [`Question`]; `build` is only available once a title is set.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct QuestionBuilder<S: Sealed = NoTitle> {
    state: S,
    points: u32,
    max_selections: usize,
    limits: QuestionLimits,
}

impl Default for QuestionBuilder<NoTitle> {
    fn default() -> Self {
        Self {
            state: NoTitle,
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
            limits: QuestionLimits::default(),
        }
    }
}

#[allow(private_bounds)]
impl<S: Sealed> QuestionBuilder<S> {
    #[must_use = "Sets the points awarded for a fully correct answer"]
    pub const fn points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    #[must_use = "Sets how many choices may be selected at once"]
    pub const fn max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    #[must_use = "Replaces the default validation limits"]
    pub const fn limits(mut self, limits: QuestionLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl QuestionBuilder<NoTitle> {
    #[must_use = "Creates a new question builder with default points and selection limit"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the question title"]
    pub fn title(self, title: impl Into<String>) -> QuestionBuilder<WithTitle> {
        QuestionBuilder {
            state: WithTitle(title.into()),
            points: self.points,
            max_selections: self.max_selections,
            limits: self.limits,
        }
    }
}

impl QuestionBuilder<WithTitle> {
    /// Validates the collected fields and creates the question.
    ///
    /// Checks run in order: limits, title, points, selection limit. Nothing is created
    /// unless all of them pass.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] naming the first offending field.
    pub fn build(self) -> Result<Question, AssessmentError> {
        let Self { state: WithTitle(title), points, max_selections, limits } = self;

        limits.check().map_err(|message| AssessmentError::validation("limits", message))?;
        check_len("title", &title, TITLE_MIN_LEN, limits.title_max_len)?;

        if !(limits.points_min..=limits.points_max).contains(&points) {
            return Err(AssessmentError::validation(
                "points",
                format!(
                    "must be between {} and {}, got {points}",
                    limits.points_min, limits.points_max
                ),
            ));
        }
        if max_selections == 0 {
            return Err(AssessmentError::validation("max_selections", "must be at least 1"));
        }

        let question = Question {
            id: QuestionId::generate(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            limits,
        };
        debug!(question = %question.id, points, max_selections, "Question created");

        Ok(question)
    }
}
