use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::activity::{ActivityKind, AnswerOutcome};
use super::state::SessionState;

/// In-memory per-user session table, shared between handlers.
///
/// Each user has at most one entry. A missing entry reads as
/// [`SessionState::MainMenu`]. Sessions do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<i64, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: i64) -> SessionState {
        self.inner
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn set(&self, user_id: i64, state: SessionState) {
        self.inner.lock().await.insert(user_id, state);
    }

    pub async fn clear(&self, user_id: i64) {
        self.inner.lock().await.remove(&user_id);
    }

    /// Number of users with a live session.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Applies an answer to the user's run of `kind` under one lock, so two
    /// presses of the same button cannot both score. A finished run drops
    /// the session.
    pub async fn submit_answer(
        &self,
        user_id: i64,
        kind: ActivityKind,
        choice: usize,
        now: Instant,
    ) -> AnswerOutcome {
        let mut sessions = self.inner.lock().await;
        let Some(run) = sessions.get_mut(&user_id).and_then(|s| s.run_mut(kind)) else {
            return AnswerOutcome::AlreadyFinished;
        };

        let outcome = run.answer(choice, now);
        if matches!(outcome, AnswerOutcome::Finished { .. }) {
            sessions.remove(&user_id);
        }
        outcome
    }
}
