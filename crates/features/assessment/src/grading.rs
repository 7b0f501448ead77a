//! Answer checking for a single question.

use crate::error::AssessmentError;
use crate::id::ChoiceId;
use crate::question::Question;
use fxhash::FxHashSet;

impl Question {
    /// Returns the selected ids whose choice is marked correct, in selection order.
    ///
    /// Applies the same `max_selections` gate as [`Question::select_choices`]; unknown ids
    /// and incorrect picks are dropped.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if more than `max_selections` ids are given.
    pub fn correct_selections(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, AssessmentError> {
        self.check_selection(ids)?;

        Ok(ids
            .iter()
            .filter(|id| self.choice(id).is_some_and(|choice| choice.is_correct()))
            .cloned()
            .collect())
    }

    /// Whether the selection names every correct choice and nothing else.
    ///
    /// Repeated ids count once. A selection containing an unknown id is never fully correct.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if more than `max_selections` ids are given.
    pub fn is_fully_correct(&self, ids: &[ChoiceId]) -> Result<bool, AssessmentError> {
        self.check_selection(ids)?;

        let selected: FxHashSet<&ChoiceId> = ids.iter().collect();
        if selected.iter().any(|id| self.choice(id).is_none()) {
            return Ok(false);
        }

        let expected: FxHashSet<&ChoiceId> = self.correct_choices().map(|c| c.id()).collect();
        Ok(selected == expected)
    }

    /// Points earned by a selection: all of them for a fully correct answer, zero otherwise.
    ///
    /// # Errors
    /// Returns [`AssessmentError::Validation`] if more than `max_selections` ids are given.
    pub fn award(&self, ids: &[ChoiceId]) -> Result<u32, AssessmentError> {
        Ok(if self.is_fully_correct(ids)? { self.points() } else { 0 })
    }
}
