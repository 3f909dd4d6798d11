//! Send controller: one question from input to settled reply.
//!
//! DESIGN
//! ======
//! The user message is appended synchronously, before the first suspension
//! point, so history order always matches request order. The store is reached
//! through [`ConversationStore`], which yields `None` once the owning widget
//! is disposed; a reply that arrives after teardown is dropped. A drop guard
//! lowers the typing indicator if the send future is cancelled mid-flight.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::answer::{AnswerSource, answer_or_fallback};
use crate::net::geolocation::LocationSource;
use crate::net::types::AskRequest;
use crate::state::conversation::{ConversationState, SendRejected};
use crate::util::clock::now_iso;

/// Mutable access to a widget's conversation.
pub trait ConversationStore {
    /// Run `f` against the conversation. `None` when the store is gone.
    fn with_conversation<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationStore for RwSignal<ConversationState> {
    fn with_conversation<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How a send attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent.
    Rejected(SendRejected),
    /// The endpoint answered and the reply was appended.
    Answered,
    /// The request failed and the fallback reply was appended.
    FellBack,
    /// The widget was torn down before the reply could be stored.
    Disposed,
}

/// Lowers the typing indicator unless the send settled normally.
struct PendingReply<'a, C: ConversationStore> {
    store: &'a C,
    settled: bool,
}

impl<C: ConversationStore> Drop for PendingReply<'_, C> {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.store.with_conversation(ConversationState::abandon_send);
        }
    }
}

/// Send `text` as the visitor's question and append the reply.
pub async fn send_question<C, L, A>(store: &C, locator: &L, source: &A, persona_name: &str, text: &str) -> SendOutcome
where
    C: ConversationStore,
    L: LocationSource + ?Sized,
    A: AnswerSource + ?Sized,
{
    let question = match store.with_conversation(|c| c.begin_send(text, now_iso())) {
        None => return SendOutcome::Disposed,
        Some(Err(rejected)) => return SendOutcome::Rejected(rejected),
        Some(Ok(question)) => question,
    };
    let mut pending = PendingReply { store, settled: false };

    let location = locator.locate().await;
    let request = AskRequest::new(question, persona_name, location);
    let (reply, fell_back) = answer_or_fallback(source, &request).await;

    let stored = store.with_conversation(|c| c.settle_send(reply, now_iso()));
    pending.settled = true;
    match (stored, fell_back) {
        (None, _) => {
            log::debug!("widget disposed before reply arrived");
            SendOutcome::Disposed
        }
        (Some(()), false) => SendOutcome::Answered,
        (Some(()), true) => SendOutcome::FellBack,
    }
}
