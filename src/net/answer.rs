//! Question-answering client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpAnswerClient`] reports [`AnswerError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Callers use [`answer_or_fallback`], which logs the failure and substitutes
//! the fixed fallback reply so a broken endpoint never crashes the widget or
//! leaks error text to the visitor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use super::types::{AnswerError, AskRequest};
use crate::state::conversation::FALLBACK_ANSWER;

/// Something that can answer a question. Enables stubbing in tests.
#[async_trait::async_trait(?Send)]
pub trait AnswerSource {
    /// Ask one question and return the answer text.
    async fn ask(&self, request: &AskRequest) -> Result<String, AnswerError>;
}

/// HTTP client for the `POST {endpoint}` question-answering API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAnswerClient {
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl AnswerSource for HttpAnswerClient {
    async fn ask(&self, request: &AskRequest) -> Result<String, AnswerError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| AnswerError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AnswerError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(AnswerError::Status { status: resp.status() });
            }
            let body: super::types::AskResponse =
                resp.json().await.map_err(|e| AnswerError::Decode(e.to_string()))?;
            Ok(body.answer)
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no HTTP transport for {} outside the browser", self.endpoint);
            let _ = request;
            Err(AnswerError::Unavailable)
        }
    }
}

/// Ask `source`, replacing any failure with [`FALLBACK_ANSWER`].
///
/// Returns the reply text and whether it is the fallback.
pub async fn answer_or_fallback<S: AnswerSource + ?Sized>(source: &S, request: &AskRequest) -> (String, bool) {
    match source.ask(request).await {
        Ok(answer) => (answer, false),
        Err(e) => {
            log::error!("error fetching bot response: {e}");
            (FALLBACK_ANSWER.to_owned(), true)
        }
    }
}
