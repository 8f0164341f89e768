//! # survey-core
//!
//! Core types, ID helpers, and error types for the survey builder.
//!
//! This crate provides the foundational types shared across all survey crates:
//! - Entity structs for questions and surveys (stored and populated forms)
//! - The free-text `QuestionType` with its well-known variants
//! - ID prefix constants, format validation, and shareable link formatting
//! - Cross-cutting error types
//!
//! Wire names follow the JSON contract of the HTTP API (`_id`, camelCase).

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
