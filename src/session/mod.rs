//! Per-user conversation state: which screen the user is on and, for quizzes,
//! tests and games, how far the current run has progressed.

pub mod activity;
pub mod grading;
pub mod state;
pub mod store;

pub use activity::{ActivityKind, AnswerOutcome, Run, Summary, Verdict};
pub use grading::Tier;
pub use state::{LastExchange, SessionState};
pub use store::SessionStore;
