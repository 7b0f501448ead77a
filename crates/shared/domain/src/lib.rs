//! # Domain Data
//!
//! Plain data shared by the QuizHub crates, with `serde` as the only dependency.
//! No I/O and no entity behaviour here; that lives in the feature slices.

pub mod config;
pub mod constants;
