//! Repository modules implementing the question bank and survey operations.
//!
//! Each module adds methods to `SurveyService` via `impl SurveyService` blocks.

pub mod question;
pub mod survey;
