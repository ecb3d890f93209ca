//! GigaChat-backed course assistant.
//!
//! [`Assistant`] owns the cached bearer credential and never returns an error:
//! failures become a user-facing string (answers) or an empty list
//! (suggestions). The HTTP transport sits behind [`ChatBackend`].

pub mod client;
pub mod context;

pub use client::{AiError, Assistant, ChatBackend, ChatMessage, HttpBackend, Sampling, Token};
pub use context::{context_for, COURSE_CONTEXT};
