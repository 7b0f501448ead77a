//! # Assessment
//!
//! The quiz question slice: a [`Question`] with a title, a point value, and a cap on how
//! many answers may be picked, owning an ordered list of [`Choice`]s.
//!
//! All state is in memory and owned by the caller. Every operation validates its input up
//! front and either applies fully or returns an [`AssessmentError`] without side effects.
//!
//! ## Example
//!
//! ```rust
//! use qhub_assessment::Question;
//!
//! let mut question = Question::builder().title("q1").max_selections(2).build().unwrap();
//! let a = question.add_choice("a", true).unwrap().id().clone();
//! let b = question.add_choice("b", true).unwrap().id().clone();
//! question.add_choice("c", false).unwrap();
//!
//! assert_eq!(question.select_choices(&[a.clone(), b.clone()]).unwrap(), vec![a.clone(), b]);
//!
//! question.set_correct_choices(&[a.clone()]).unwrap();
//! assert_eq!(question.correct_choices().count(), 1);
//! assert_eq!(question.award(&[a]).unwrap(), 1);
//! ```
//!
//! Validation bounds default to [`QuestionLimits::default`]; services that load an
//! [`AssessmentConfig`](qhub_domain::config::AssessmentConfig) pass its limits to
//! [`QuestionBuilder::limits`].

mod choice;
mod error;
mod grading;
mod id;
mod question;

pub use crate::choice::Choice;
pub use crate::error::{AssessmentError, AssessmentErrorExt};
pub use crate::id::{ChoiceId, QuestionId};
pub use crate::question::{NoTitle, Question, QuestionBuilder, WithTitle};
pub use qhub_domain::config::QuestionLimits;
