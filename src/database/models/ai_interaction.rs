use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Thumbs up / thumbs down on an assistant answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Dislike,
    Like,
}

impl Feedback {
    pub fn as_i64(&self) -> i64 {
        match self {
            Feedback::Dislike => 0,
            Feedback::Like => 1,
        }
    }
}

/// What happened to a rating request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOutcome {
    Recorded,
    AlreadyRated,
    /// No such interaction, or it belongs to another user.
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AiInteraction {
    pub id: i64,
    pub user_id: i64,
    pub question: String,
    pub answer: String,
    pub feedback: Option<i64>,
    pub created_at: String,
}

impl AiInteraction {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        question: &str,
        answer: &str,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        let id = sqlx::query(
            "INSERT INTO ai_interactions (user_id, question, answer, created_at) VALUES (?, ?, ?, ?)"
        )
        .bind(user_id)
        .bind(question)
        .bind(answer)
        .bind(&now)
        .execute(pool)
        .await?
        .last_insert_rowid();

        Ok(AiInteraction {
            id,
            user_id,
            question: question.to_string(),
            answer: answer.to_string(),
            feedback: None,
            created_at: now,
        })
    }

    /// Records feedback once. Returns `false` when the interaction does not
    /// exist or already carries feedback.
    pub async fn record_feedback(
        pool: &sqlx::SqlitePool,
        id: i64,
        feedback: Feedback,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE ai_interactions SET feedback = ? WHERE id = ? AND feedback IS NULL"
        )
        .bind(feedback.as_i64())
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, AiInteraction>(
            "SELECT id, user_id, question, answer, feedback, created_at FROM ai_interactions WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Rates an interaction on behalf of `user_id`. Only the user who asked
    /// may rate it, and only once.
    pub async fn rate(
        pool: &sqlx::SqlitePool,
        id: i64,
        user_id: i64,
        feedback: Feedback,
    ) -> Result<RateOutcome, sqlx::Error> {
        let Some(interaction) = Self::find_by_id(pool, id).await? else {
            return Ok(RateOutcome::NotFound);
        };
        if interaction.user_id != user_id {
            return Ok(RateOutcome::NotFound);
        }
        if interaction.feedback.is_some() {
            return Ok(RateOutcome::AlreadyRated);
        }

        if Self::record_feedback(pool, id, feedback).await? {
            Ok(RateOutcome::Recorded)
        } else {
            Ok(RateOutcome::AlreadyRated)
        }
    }
}
