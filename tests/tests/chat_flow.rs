//! End-to-end submission flows through the chat service, with the
//! completion backend replaced by a scripted fake.

use std::sync::{Arc, Mutex};

use application::chat_service::{
    ChatService, CompletionBackend, Submission, CRISIS_REPLY, ERROR_PREFIX, FALLBACK_REPLY,
    SYSTEM_PROMPT,
};
use async_trait::async_trait;
use domain::message::{ChatTurn, Sender};
use domain::mood::{detect_mood, Mood};
use domain::session::{ChatSession, GREETING};
use infrastructure::openrouter_client::extract_reply;
use shared::types::Result;

enum Script {
    Reply(&'static str),
    Empty,
    Fail(&'static str),
}

struct FakeState {
    script: Script,
    requests: Mutex<Vec<Vec<ChatTurn>>>,
}

#[derive(Clone)]
struct FakeBackend {
    state: Arc<FakeState>,
}

impl FakeBackend {
    fn new(script: Script) -> Self {
        Self {
            state: Arc::new(FakeState {
                script,
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> Vec<ChatTurn> {
        self.state.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<Option<String>> {
        self.state.requests.lock().unwrap().push(turns.to_vec());
        match &self.state.script {
            Script::Reply(text) => Ok(Some(text.to_string())),
            Script::Empty => Ok(None),
            Script::Fail(msg) => Err(anyhow::anyhow!(*msg)),
        }
    }
}

#[tokio::test]
async fn crisis_submission_never_reaches_the_backend() {
    let backend = FakeBackend::new(Script::Reply("remote text"));
    let mut service = ChatService::new(backend.clone());

    service.submit("Lately I've been thinking about suicide").await;

    assert_eq!(backend.request_count(), 0);
    let reply = service.session().messages().last().unwrap();
    assert_eq!(reply.sender, Sender::Assistant);
    assert_eq!(reply.text, CRISIS_REPLY);
    assert!(reply.text.contains("1800-599-0019"));
    assert!(service.session().is_idle());
}

#[tokio::test]
async fn tired_message_is_annotated_as_sad() {
    assert_eq!(detect_mood("I feel tired today"), Mood::Sad);

    let backend = FakeBackend::new(Script::Reply("Rest matters. Be kind to yourself."));
    let mut service = ChatService::new(backend.clone());
    service.submit("I feel tired today").await;

    let turns = backend.last_request();
    assert_eq!(turns[0].role, "system");
    assert_eq!(turns[0].content, SYSTEM_PROMPT);
    assert_eq!(turns[1].content, GREETING);
    assert_eq!(
        turns.last().unwrap().content,
        "Mood: sad. Message: I feel tired today"
    );
    // The in-flight message travels only inside the annotated turn.
    assert_eq!(turns.len(), 3);
}

#[tokio::test]
async fn conversation_context_grows_across_turns() {
    let backend = FakeBackend::new(Script::Reply("reply"));
    let mut service = ChatService::new(backend.clone());

    service.submit("first message").await;
    service.submit("second message").await;

    let turns = backend.last_request();
    // system + greeting + first exchange (2) + annotated second message.
    assert_eq!(turns.len(), 5);
    assert_eq!(turns[2].role, "user");
    assert_eq!(turns[2].content, "first message");
    assert_eq!(turns[3].role, "assistant");
    assert_eq!(turns[3].content, "reply");
}

#[tokio::test]
async fn backend_failure_is_survivable() {
    let backend = FakeBackend::new(Script::Fail("network unreachable"));
    let mut service = ChatService::new(backend.clone());

    let before = service.session().messages().len();
    service.submit("hello?").await;

    let messages = service.session().messages();
    // Exactly one user message and one error notice were appended.
    assert_eq!(messages.len(), before + 2);
    let notice = messages.last().unwrap();
    assert!(notice.text.starts_with(ERROR_PREFIX));
    assert!(notice.text.contains("network unreachable"));
    assert!(service.session().is_idle());

    // A later submission is accepted again.
    assert_eq!(service.submit("try again").await, Submission::Handled);
    assert_eq!(backend.request_count(), 2);
}

#[tokio::test]
async fn missing_completion_field_uses_the_fallback_line() {
    let backend = FakeBackend::new(Script::Empty);
    let mut service = ChatService::new(backend.clone());

    service.submit("I had a long week").await;

    assert_eq!(
        service.session().messages().last().unwrap().text,
        FALLBACK_REPLY
    );
    assert!(service.session().is_idle());
}

#[tokio::test]
async fn in_flight_sessions_ignore_new_submissions() {
    let mut session = ChatSession::new();
    session.begin_submission("first").unwrap();

    let backend = FakeBackend::new(Script::Reply("hi"));
    let mut service = ChatService::with_session(session, backend.clone());

    assert_eq!(service.submit("second").await, Submission::Ignored);
    assert_eq!(backend.request_count(), 0);
    assert_eq!(service.session().messages().len(), 2);
}

#[test]
fn response_parsing_matches_the_service_shape() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"hang in there"}}]}"#;
    assert_eq!(extract_reply(body).as_deref(), Some("hang in there"));
    assert_eq!(extract_reply("{}"), None);
}
