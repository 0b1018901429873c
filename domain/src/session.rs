use crate::message::{ChatTurn, Message};

/// Seeded assistant opener shown before any user input.
pub const GREETING: &str = "Hello! I'm here to support you. How are you feeling today?";

/// Whether a submission is currently being answered. `AwaitingReply` is
/// the sole concurrency guard: new submissions are rejected, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    AwaitingReply,
}

/// Ordered, append-only conversation transcript plus submission status.
/// Only `begin_submission` and `resolve` mutate it, so each submission's
/// append -> await -> append lifecycle stays atomic.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    status: SessionStatus,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            status: SessionStatus::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == SessionStatus::Idle
    }

    /// Accepts a new user submission, or returns `None` without touching
    /// the session when the trimmed text is empty or a reply is still in
    /// flight. On acceptance the user message is appended and the status
    /// flips to `AwaitingReply`.
    pub fn begin_submission(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.status != SessionStatus::Idle {
            return None;
        }
        self.messages.push(Message::user(text));
        self.status = SessionStatus::AwaitingReply;
        Some(text.to_string())
    }

    /// Finishes the in-flight submission with the assistant's reply and
    /// returns the status to `Idle`. Called exactly once per accepted
    /// submission, whatever the outcome of producing the reply.
    pub fn resolve(&mut self, reply: impl Into<String>) {
        self.messages.push(Message::assistant(reply));
        self.status = SessionStatus::Idle;
    }

    /// The transcript replayed to the completion service as context:
    /// every message before the in-flight user message. The in-flight
    /// text travels separately, inside the mood-annotated final turn.
    pub fn context_turns(&self) -> Vec<ChatTurn> {
        let upto = match self.status {
            SessionStatus::AwaitingReply => self.messages.len() - 1,
            SessionStatus::Idle => self.messages.len(),
        };
        self.messages[..upto].iter().map(Message::to_turn).collect()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
