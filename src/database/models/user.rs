use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// How often a user wants to be nudged back into training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderFrequency {
    None,
    Daily,
    EveryTwoDays,
    MonThu,
    Weekends,
}

impl ReminderFrequency {
    pub const ALL: [ReminderFrequency; 5] = [
        ReminderFrequency::None,
        ReminderFrequency::Daily,
        ReminderFrequency::EveryTwoDays,
        ReminderFrequency::MonThu,
        ReminderFrequency::Weekends,
    ];

    /// Tag stored in the `users.reminder_frequency` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderFrequency::None => "none",
            ReminderFrequency::Daily => "daily",
            ReminderFrequency::EveryTwoDays => "2days",
            ReminderFrequency::MonThu => "mon_thu",
            ReminderFrequency::Weekends => "weekends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderFrequency::None => "Без напоминаний",
            ReminderFrequency::Daily => "Раз в день",
            ReminderFrequency::EveryTwoDays => "Раз в 2 дня",
            ReminderFrequency::MonThu => "По понедельникам и четвергам",
            ReminderFrequency::Weekends => "Только по выходным",
        }
    }
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderFrequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ReminderFrequency::None),
            "daily" => Ok(ReminderFrequency::Daily),
            "2days" => Ok(ReminderFrequency::EveryTwoDays),
            "mon_thu" => Ok(ReminderFrequency::MonThu),
            "weekends" => Ok(ReminderFrequency::Weekends),
            other => Err(anyhow::anyhow!("Unknown reminder frequency: {other}")),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub reminder_frequency: String,
    pub reminder_enabled: bool,
    pub created_at: String,
}

/// Projection returned to the reminder scheduler.
#[derive(Debug, Clone, FromRow)]
pub struct ReminderSubscriber {
    pub user_id: i64,
    pub reminder_frequency: String,
}

impl ReminderSubscriber {
    /// Unknown tags fall back to `None` so a bad row never matches a trigger.
    pub fn frequency(&self) -> ReminderFrequency {
        self.reminder_frequency.parse().unwrap_or(ReminderFrequency::None)
    }
}

impl User {
    pub fn frequency(&self) -> ReminderFrequency {
        self.reminder_frequency.parse().unwrap_or(ReminderFrequency::None)
    }

    /// Registers a user on first contact; existing rows are left untouched.
    pub async fn register(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        username: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (user_id, username, first_name, last_name, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(&now)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, first_name, last_name, reminder_frequency, reminder_enabled, created_at FROM users WHERE user_id = ?"
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Stores the reminder preference, creating the user row when the user
    /// reached the settings menu without ever sending `/start`.
    pub async fn set_reminder(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        frequency: ReminderFrequency,
    ) -> Result<(), sqlx::Error> {
        let enabled = frequency != ReminderFrequency::None;
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO users (user_id, reminder_frequency, reminder_enabled, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                reminder_frequency = excluded.reminder_frequency,
                reminder_enabled = excluded.reminder_enabled
            "#,
        )
        .bind(user_id)
        .bind(frequency.as_str())
        .bind(enabled)
        .bind(&now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn with_reminders_enabled(
        pool: &sqlx::SqlitePool,
    ) -> Result<Vec<ReminderSubscriber>, sqlx::Error> {
        sqlx::query_as::<_, ReminderSubscriber>(
            "SELECT user_id, reminder_frequency FROM users WHERE reminder_enabled = TRUE ORDER BY user_id"
        )
        .fetch_all(pool)
        .await
    }
}
