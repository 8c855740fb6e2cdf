//! Advisory output for the water dashboard.
//!
//! - [`chat`]: keyword-driven replies to free-text questions.
//! - [`report`]: a single JSON document combining the overall water status,
//!   the individual parameter readings and per-crop recommendations.

pub mod chat;
mod error;
pub mod report;

pub use chat::{GREETING, SUGGESTIONS, Topic, classify_question, respond};
pub use error::AdvisoryError;
pub use report::{AdvisoryReport, ParameterSummary, to_json};
