//! Scripted stand-in for the AI site builder chat.

pub mod session;
pub mod templates;

pub use session::{ChatError, ChatMessage, ChatPhase, ChatSession, Role, SiteDraft};
