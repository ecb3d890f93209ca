use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub test_type: String,
    pub score: i64,
    pub total_questions: i64,
    /// Seconds from the first question to the last answer, for timed tests.
    pub completion_time: Option<f64>,
    pub created_at: String,
}

/// Aggregate over every attempt of one test type, used by `/stats`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestTypeStats {
    pub test_type: String,
    pub attempts: i64,
    pub best_score: i64,
    pub last_score: i64,
    pub last_total: i64,
    pub last_at: String,
}

impl TestResult {
    /// Appends a finished attempt. Results are never updated afterwards.
    pub async fn create(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        test_type: &str,
        score: i64,
        total_questions: i64,
        completion_time: Option<f64>,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        let id = sqlx::query(
            r#"
            INSERT INTO test_results (user_id, test_type, score, total_questions, completion_time, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(test_type)
        .bind(score)
        .bind(total_questions)
        .bind(completion_time)
        .bind(&now)
        .execute(pool)
        .await?
        .last_insert_rowid();

        Ok(TestResult {
            id,
            user_id,
            test_type: test_type.to_string(),
            score,
            total_questions,
            completion_time,
            created_at: now,
        })
    }

    /// Latest attempts first.
    pub async fn find_by_user(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, TestResult>(
            "SELECT id, user_id, test_type, score, total_questions, completion_time, created_at FROM test_results WHERE user_id = ? ORDER BY id DESC LIMIT ?"
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    pub async fn stats_for_user(
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<Vec<TestTypeStats>, sqlx::Error> {
        sqlx::query_as::<_, TestTypeStats>(
            r#"
            SELECT
                t.test_type AS test_type,
                COUNT(*) AS attempts,
                MAX(t.score) AS best_score,
                (SELECT l.score FROM test_results l
                    WHERE l.user_id = t.user_id AND l.test_type = t.test_type
                    ORDER BY l.id DESC LIMIT 1) AS last_score,
                (SELECT l.total_questions FROM test_results l
                    WHERE l.user_id = t.user_id AND l.test_type = t.test_type
                    ORDER BY l.id DESC LIMIT 1) AS last_total,
                MAX(t.created_at) AS last_at
            FROM test_results t
            WHERE t.user_id = ?
            GROUP BY t.test_type
            ORDER BY t.test_type
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
