use std::time::Duration;

use async_trait::async_trait;
use domain::message::ChatTurn;
use domain::mood::{detect_mood, Mood};
use domain::session::ChatSession;
use infrastructure::openrouter_client::OpenRouterClient;
use shared::types::Result;

/// Persona sent as the first turn of every completion request.
pub const SYSTEM_PROMPT: &str = "You are an empathetic and supportive AI friend.";

/// Canned crisis reply. Never generated remotely: safety-critical text
/// must be deterministic and available offline.
pub const CRISIS_REPLY: &str = "I'm really sorry you're feeling this way. Your life is valuable, and you deserve support. Please reach out to a professional. In India, you can call Kiran Helpline: 1800-599-0019 (24x7).";

/// Substituted when the service answers without a usable completion.
pub const FALLBACK_REPLY: &str = "I'm here for you, even if words feel hard right now.";

/// Prefix on in-transcript transport failure notices.
pub const ERROR_PREFIX: &str = "⚠️ Error:";

/// Simulated thinking time before the canned crisis reply.
const CRISIS_REPLY_DELAY: Duration = Duration::from_millis(1200);

/// Seam between the chat flow and the completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// `Ok(None)`: the service answered but the completion field was
    /// absent. Transport failures and non-success statuses are `Err`.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<Option<String>>;
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<Option<String>> {
        self.request_reply(turns).await
    }
}

/// Outcome of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A reply (canned, remote, fallback, or error notice) was appended.
    Handled,
    /// Blank input, or a reply was already in flight; nothing happened.
    Ignored,
}

/// The conversational support session: owns the transcript and drives
/// one submission at a time through classify -> reply -> idle.
pub struct ChatService<B> {
    session: ChatSession,
    backend: B,
}

impl<B: CompletionBackend> ChatService<B> {
    pub fn new(backend: B) -> Self {
        Self::with_session(ChatSession::new(), backend)
    }

    /// Wraps an existing session, e.g. to continue a conversation handed
    /// over from elsewhere.
    pub fn with_session(session: ChatSession, backend: B) -> Self {
        Self { session, backend }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Runs one full submission. Crisis messages get the canned helpline
    /// reply after a short delay and never reach the backend; everything
    /// else is answered remotely with the mood label attached. Whatever
    /// happens, the session ends the call back in idle.
    pub async fn submit(&mut self, text: &str) -> Submission {
        let Some(text) = self.session.begin_submission(text) else {
            return Submission::Ignored;
        };

        match detect_mood(&text) {
            Mood::Crisis => {
                tokio::time::sleep(CRISIS_REPLY_DELAY).await;
                self.session.resolve(CRISIS_REPLY);
            }
            mood => {
                let turns = build_request_turns(&self.session, mood, &text);
                // Every arm resolves exactly once, so the session cannot
                // be left stuck in AwaitingReply.
                match self.backend.complete(&turns).await {
                    Ok(Some(reply)) => self.session.resolve(reply),
                    Ok(None) => self.session.resolve(FALLBACK_REPLY),
                    Err(err) => self.session.resolve(format!("{ERROR_PREFIX} {err:#}")),
                }
            }
        }

        Submission::Handled
    }
}

/// System persona, the prior transcript, then the mood-annotated final
/// user turn. The annotation gives the model mood context without
/// altering the literal transcript shown to the user.
fn build_request_turns(session: &ChatSession, mood: Mood, text: &str) -> Vec<ChatTurn> {
    let mut turns = vec![ChatTurn::new("system", SYSTEM_PROMPT)];
    turns.extend(session.context_turns());
    turns.push(ChatTurn::new("user", format!("Mood: {mood}. Message: {text}")));
    turns
}
