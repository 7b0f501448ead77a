use crate::constants::{CHOICE_TEXT_MAX_LEN, POINTS_MAX, POINTS_MIN, TITLE_MAX_LEN};
use serde::Deserialize;

/// Assessment slice configuration, usually loaded from the `[assessment]` table.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    pub limits: QuestionLimits,
}

/// Validation bounds applied to questions and their choices.
///
/// Minimum lengths are fixed at one character; only the upper bounds and the
/// points range can be tuned. The defaults are the canonical quiz limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestionLimits {
    pub title_max_len: usize,
    pub choice_text_max_len: usize,
    pub points_min: u32,
    pub points_max: u32,
}

impl QuestionLimits {
    /// Reports the first inconsistency in this limit set.
    ///
    /// Limits may only tighten the canonical bounds in [`crate::constants`], never widen them.
    ///
    /// # Errors
    /// Returns a short description when a bound is zero, exceeds its canonical maximum, or the
    /// points range is inverted.
    pub const fn check(&self) -> Result<(), &'static str> {
        if self.title_max_len == 0 {
            return Err("title_max_len must be at least 1");
        }
        if self.title_max_len > TITLE_MAX_LEN {
            return Err("title_max_len must not exceed 200");
        }
        if self.choice_text_max_len == 0 {
            return Err("choice_text_max_len must be at least 1");
        }
        if self.choice_text_max_len > CHOICE_TEXT_MAX_LEN {
            return Err("choice_text_max_len must not exceed 100");
        }
        if self.points_min == 0 {
            return Err("points_min must be at least 1");
        }
        if self.points_max > POINTS_MAX {
            return Err("points_max must not exceed 100");
        }
        if self.points_min > self.points_max {
            return Err("points_min must not exceed points_max");
        }
        Ok(())
    }
}

impl Default for QuestionLimits {
    fn default() -> Self {
        Self {
            title_max_len: TITLE_MAX_LEN,
            choice_text_max_len: CHOICE_TEXT_MAX_LEN,
            points_min: POINTS_MIN,
            points_max: POINTS_MAX,
        }
    }
}
