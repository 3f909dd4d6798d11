//! Wire schema for the question-answering endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while asking the remote endpoint for an answer.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The request could not be built or sent.
    #[error("answer request failed: {0}")]
    Transport(String),

    /// The endpoint returned a non-success HTTP status.
    #[error("answer request failed: status {status}")]
    Status { status: u16 },

    /// The response body was not `{ "answer": string }`.
    #[error("answer response parse failed: {0}")]
    Decode(String),

    /// No HTTP stack in this build (non-browser target).
    #[error("answer client unavailable outside the browser")]
    Unavailable,
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Geographic position of the visitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// `POST` body. Coordinates serialize as `null` when unknown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, name: impl Into<String>, location: Option<Coordinates>) -> Self {
        Self {
            question: question.into(),
            name: name.into(),
            lat: location.map(|c| c.lat),
            lng: location.map(|c| c.lng),
        }
    }
}

/// Success body. `answer` may contain Markdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
