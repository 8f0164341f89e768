//! # survey-client
//!
//! Typed async client for the survey HTTP API. Mirrors every route:
//! question creation and listing, survey creation and populated retrieval.
//!
//! ```no_run
//! # async fn demo() -> Result<(), survey_client::ClientError> {
//! use survey_client::SurveyClient;
//! use survey_core::entities::NewQuestion;
//!
//! let client = SurveyClient::new("http://127.0.0.1:3000");
//! let question = client
//!     .create_question(&NewQuestion::new("Color?", "multiple-choice", ["Red", "Blue"]))
//!     .await?;
//! println!("created {}", question.id);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::SurveyClient;
pub use error::ClientError;
