use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use super::templates::{compose, SiteKind};
use crate::config;

pub const WELCOME_MESSAGE: &str = "🤖 Hello! I'm your AI gambling site builder. Tell me what kind of gambling site you want to create. For example: 'A crypto casino with slots and poker' or 'A sports betting platform'";
pub const ERROR_MESSAGE: &str = "❌ Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Where the simulated assistant is. Input is only accepted when `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    Typing,
    Generating,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    Empty,
    #[error("assistant is busy ({0:?})")]
    Busy(ChatPhase),
    #[error("expected {expected:?} but the chat is {actual:?}")]
    OutOfPhase {
        expected: ChatPhase,
        actual: ChatPhase,
    },
}

/// Summary handed to the page after a reply lands.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteDraft {
    pub user_input: String,
    pub ai_response: String,
    pub site_kind: SiteKind,
    pub estimated_revenue: u32,
    pub features: Vec<&'static str>,
    pub timestamp: DateTime<Utc>,
}

/// Append-only message log plus the Idle → Typing → Generating → Idle
/// state machine that drives it. Timers live with the caller; the session
/// only hands back how long each phase should last.
#[derive(Clone, Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    phase: ChatPhase,
    pending: Option<String>,
    next_id: u64,
}

impl ChatSession {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "welcome".to_string(),
                role: Role::Assistant,
                content: WELCOME_MESSAGE.to_string(),
                timestamp: now,
            }],
            phase: ChatPhase::Idle,
            pending: None,
            next_id: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != ChatPhase::Idle
    }

    /// Logs the user's line and enters `Typing`. Returns the thinking delay.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Duration, ChatError> {
        if self.is_busy() {
            return Err(ChatError::Busy(self.phase));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::Empty);
        }
        self.push("user", Role::User, text.to_string(), now);
        self.pending = Some(text.to_string());
        self.phase = ChatPhase::Typing;
        Ok(Duration::from_millis(rng.gen_range(
            config::TYPING_DELAY_MIN_MS..=config::TYPING_DELAY_MAX_MS,
        )))
    }

    /// `Typing` → `Generating`. Returns the build delay.
    pub fn start_generating(&mut self) -> Result<Duration, ChatError> {
        self.require(ChatPhase::Typing)?;
        self.phase = ChatPhase::Generating;
        Ok(Duration::from_millis(config::GENERATING_DELAY_MS))
    }

    /// `Generating` → `Idle`, appending the templated reply.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<SiteDraft, ChatError> {
        self.require(ChatPhase::Generating)?;
        let prompt = self.pending.take().ok_or(ChatError::Empty)?;
        let reply = compose(&prompt, rng);
        self.push("ai", Role::Assistant, reply.text.clone(), now);
        self.phase = ChatPhase::Idle;
        Ok(SiteDraft {
            user_input: prompt,
            ai_response: reply.text,
            site_kind: reply.kind,
            estimated_revenue: reply.estimated_revenue,
            features: vec!["crypto-payments", "mobile-responsive", "ai-optimized"],
            timestamp: now,
        })
    }

    /// Abandons the in-flight reply with an apology and returns to `Idle`.
    pub fn fail(&mut self, now: DateTime<Utc>) {
        self.pending = None;
        self.push("error", Role::Assistant, ERROR_MESSAGE.to_string(), now);
        self.phase = ChatPhase::Idle;
    }

    fn require(&self, expected: ChatPhase) -> Result<(), ChatError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ChatError::OutOfPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn push(&mut self, prefix: &str, role: Role, content: String, now: DateTime<Utc>) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: format!("{}-{}", prefix, self.next_id),
            role,
            content,
            timestamp: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn session() -> (ChatSession, StdRng) {
        (ChatSession::new(at(0)), StdRng::seed_from_u64(42))
    }

    #[test]
    fn starts_idle_with_welcome() {
        let (chat, _) = session();
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert_eq!(chat.messages()[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn full_cycle_appends_user_then_assistant() {
        let (mut chat, mut rng) = session();
        let typing = chat.submit("  Crypto casino with slots  ", at(1), &mut rng).unwrap();
        assert!(typing >= Duration::from_millis(1_000) && typing <= Duration::from_millis(3_000));
        assert_eq!(chat.phase(), ChatPhase::Typing);
        assert_eq!(chat.messages()[1].content, "Crypto casino with slots");
        assert_eq!(chat.messages()[1].role, Role::User);

        assert_eq!(chat.start_generating().unwrap(), Duration::from_millis(2_000));
        assert_eq!(chat.phase(), ChatPhase::Generating);

        let draft = chat.complete(at(5), &mut rng).unwrap();
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(draft.site_kind, SiteKind::Casino);
        assert_eq!(draft.user_input, "Crypto casino with slots");

        let last = chat.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, draft.ai_response);
        assert_eq!(last.timestamp, at(5));
    }

    #[test]
    fn rejects_input_while_busy() {
        let (mut chat, mut rng) = session();
        chat.submit("sports", at(1), &mut rng).unwrap();
        assert_eq!(
            chat.submit("casino", at(2), &mut rng),
            Err(ChatError::Busy(ChatPhase::Typing))
        );
        chat.start_generating().unwrap();
        assert_eq!(
            chat.submit("casino", at(3), &mut rng),
            Err(ChatError::Busy(ChatPhase::Generating))
        );
        assert_eq!(chat.messages().len(), 2);

        let draft = chat.complete(at(4), &mut rng).unwrap();
        assert_eq!(draft.site_kind, SiteKind::Sports);
    }

    #[test]
    fn ignores_blank_input() {
        let (mut chat, mut rng) = session();
        assert_eq!(chat.submit("   ", at(1), &mut rng), Err(ChatError::Empty));
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn transitions_out_of_order_are_errors() {
        let (mut chat, mut rng) = session();
        assert!(matches!(
            chat.start_generating(),
            Err(ChatError::OutOfPhase { expected: ChatPhase::Typing, actual: ChatPhase::Idle })
        ));
        chat.submit("hi", at(1), &mut rng).unwrap();
        assert!(matches!(
            chat.complete(at(2), &mut rng),
            Err(ChatError::OutOfPhase { expected: ChatPhase::Generating, .. })
        ));
    }

    #[test]
    fn failure_apologises_and_unlocks_input() {
        let (mut chat, mut rng) = session();
        chat.submit("hi", at(1), &mut rng).unwrap();
        chat.fail(at(2));
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.messages().last().unwrap().content, ERROR_MESSAGE);
        assert!(chat.submit("again", at(3), &mut rng).is_ok());
    }

    #[test]
    fn message_ids_are_unique() {
        let (mut chat, mut rng) = session();
        for prompt in ["casino", "poker", "lottery"] {
            chat.submit(prompt, at(1), &mut rng).unwrap();
            chat.start_generating().unwrap();
            chat.complete(at(2), &mut rng).unwrap();
        }
        let mut ids: Vec<&str> = chat.messages().iter().map(|m| m.id.as_str()).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert_eq!(len, 7);
    }
}
