//! Entity structs for the survey builder.
//!
//! Each stored entity maps to a table in the libSQL database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation. The `New*` structs are creation payloads: every field is
//! optional on the wire and defaults to empty.

mod question;
mod survey;

pub use question::{NewQuestion, Question};
pub use survey::{Condition, NewSurvey, PopulatedSurvey, Survey, SurveyQuestion};
