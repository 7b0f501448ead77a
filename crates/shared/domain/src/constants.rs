//! Validation bounds for quiz questions.

pub const TITLE_MIN_LEN: usize = 1;
pub const TITLE_MAX_LEN: usize = 200;

pub const CHOICE_TEXT_MIN_LEN: usize = 1;
pub const CHOICE_TEXT_MAX_LEN: usize = 100;

pub const POINTS_MIN: u32 = 1;
pub const POINTS_MAX: u32 = 100;
pub const DEFAULT_POINTS: u32 = 1;

pub const DEFAULT_MAX_SELECTIONS: usize = 1;
