//! Conversation store: ordered message history and the send lifecycle.
//!
//! DESIGN
//! ======
//! History is append-only. The single exception is the seeded welcome
//! message, whose text is swapped in as the typing effect reveals it.
//! `is_typing` spans exactly one outstanding answer request; a second send is
//! refused until the pending one settles so replies can never interleave.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::state::persona::IconRef;

/// Reply text appended when the answer request fails for any reason.
pub const FALLBACK_ANSWER: &str = "Something went wrong. Please try again.";

/// Who authored a message. Each variant owns its presentation mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Row modifier shared by the message row and wrapper classes.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    #[must_use]
    pub fn bubble_class(self) -> &'static str {
        match self {
            Self::User => "user-bubble-custom",
            Self::Bot => "bot-bubble-custom",
        }
    }

    /// Side of the bubble the avatar sits on.
    #[must_use]
    pub fn avatar_side(self) -> &'static str {
        match self {
            Self::User => "right",
            Self::Bot => "left",
        }
    }

    /// Bot messages show the current persona icon, user messages a fixed avatar.
    #[must_use]
    pub fn avatar<'a>(self, persona_icon: &'a IconRef, user_icon: &'a IconRef) -> &'a IconRef {
        match self {
            Self::User => user_icon,
            Self::Bot => persona_icon,
        }
    }

    /// Bot text is rendered as Markdown; user text is shown verbatim.
    #[must_use]
    pub fn renders_markdown(self) -> bool {
        matches!(self, Self::Bot)
    }
}

/// A single conversation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// RFC 3339 / ISO-8601 creation time.
    pub timestamp: String,
}

impl Message {
    fn new(sender: Sender, text: String, timestamp: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text, timestamp }
    }
}

/// Why a send attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendRejected {
    /// Input was empty or whitespace only.
    #[error("message is empty")]
    Empty,
    /// A reply to an earlier question is still pending.
    #[error("a reply is already pending")]
    Busy,
}

/// Ordered message history plus the pending-reply flag.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    is_typing: bool,
    /// Bumped on every append; drives auto-scroll.
    revision: u64,
}

impl ConversationState {
    /// Start a conversation seeded with an empty bot welcome message.
    pub fn with_welcome(timestamp: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::new(Sender::Bot, String::new(), timestamp.into())],
            is_typing: false,
            revision: 0,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Timestamp of the seeded welcome message, if any.
    #[must_use]
    pub fn started_at(&self) -> Option<&str> {
        self.messages.first().map(|m| m.timestamp.as_str())
    }

    /// Append a user message. Returns `false` (and changes nothing) when the
    /// trimmed text is empty.
    pub fn append_user_message(&mut self, text: &str, timestamp: impl Into<String>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(Message::new(Sender::User, text.to_owned(), timestamp.into()));
        true
    }

    pub fn append_bot_message(&mut self, text: impl Into<String>, timestamp: impl Into<String>) {
        self.push(Message::new(Sender::Bot, text.into(), timestamp.into()));
    }

    /// Replace the text of the first message. Used only to reveal the welcome
    /// greeting; does not count as an append.
    pub fn replace_first_message_text(&mut self, text: &str) {
        if let Some(first) = self.messages.first_mut() {
            if first.text != text {
                text.clone_into(&mut first.text);
            }
        }
    }

    /// Start a send: append the user message and raise the typing indicator.
    ///
    /// Returns the trimmed question to forward to the answer client.
    ///
    /// # Errors
    ///
    /// [`SendRejected::Busy`] while a reply is pending, [`SendRejected::Empty`]
    /// for blank input. Neither changes state.
    pub fn begin_send(&mut self, text: &str, timestamp: impl Into<String>) -> Result<String, SendRejected> {
        if self.is_typing {
            return Err(SendRejected::Busy);
        }
        if !self.append_user_message(text, timestamp) {
            return Err(SendRejected::Empty);
        }
        self.is_typing = true;
        Ok(text.trim().to_owned())
    }

    /// Finish a send with the reply (answer or fallback) and drop the typing
    /// indicator.
    pub fn settle_send(&mut self, reply: impl Into<String>, timestamp: impl Into<String>) {
        self.append_bot_message(reply, timestamp);
        self.is_typing = false;
    }

    /// Drop the typing indicator without a reply.
    pub fn abandon_send(&mut self) {
        self.is_typing = false;
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }
}
