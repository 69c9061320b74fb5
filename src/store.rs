//! Conversation state for one widget session.
//!
//! The store is a plain state machine: it appends messages, tracks the
//! pending flag, and holds the transient input-adjacent state (draft text,
//! suggested follow-ups, active side-content flag). It never performs I/O;
//! `submit` hands back a [`PendingTurn`] for the caller to dispatch and
//! `ingest` accepts the outcome. Every change to the message list bumps
//! `revision`, which the presentation layer watches to scroll to the latest
//! message.

use crate::api::ChatError;
use crate::interpret::Interpreted;
use crate::topic::{self, Topic};
use crate::types::ChatMessage;
use tracing::warn;

/// A submission accepted by the store, ready to be dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub query: String,
    pub topic: Topic,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    pending: bool,
    draft: String,
    suggestions: Vec<String>,
    active_side_content: bool,
    revision: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the session with a seeded assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.push_message(ChatMessage::assistant(greeting));
        store
    }

    // ------------------------------------------------------------------
    // Read-only projections for the presentation layer
    // ------------------------------------------------------------------

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_side_content(&self) -> bool {
        self.active_side_content
    }

    /// Bumped whenever `messages` changes; the scroll-to-latest signal.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Accept a submission, or refuse it without touching any state.
    ///
    /// Empty (after trimming) input and submissions while a request is in
    /// flight are both silent no-ops; at-most-one in-flight request is
    /// enforced by rejection, not queuing. On acceptance the user message is
    /// appended, the draft cleared, the pending flag raised, and the topic
    /// classified once for the whole turn.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.pending {
            warn!("submission refused: a request is already in flight");
            return None;
        }

        let topic = topic::classify(trimmed);
        self.push_message(ChatMessage::user(trimmed));
        self.draft.clear();
        self.pending = true;

        Some(PendingTurn {
            query: trimmed.to_string(),
            topic,
        })
    }

    /// Ingest the outcome of a dispatched turn.
    ///
    /// Success appends the interpreted assistant message and replaces the
    /// follow-up set. Failure appends an assistant message embedding the
    /// error description and clears the side-content flag; the follow-up set
    /// is left alone. Either way the store returns to a receptive idle state.
    pub fn ingest(&mut self, outcome: Result<Interpreted, ChatError>) {
        match outcome {
            Ok(reply) => {
                self.active_side_content = reply.side_content.is_some();
                self.push_message(ChatMessage::assistant_with_side_content(
                    reply.content,
                    reply.side_content,
                ));
                self.suggestions = reply.follow_ups;
            }
            Err(err) => {
                warn!(error = %err, "chat turn failed");
                self.active_side_content = false;
                self.push_message(ChatMessage::assistant(format!(
                    "Something went wrong: {err}"
                )));
            }
        }
        self.pending = false;
    }

    /// A suggested follow-up was picked: stage it and retire the whole set.
    pub fn select_suggestion(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.suggestions.clear();
    }

    /// Quick-reply path: stage canned text without touching the suggestions.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }
}
