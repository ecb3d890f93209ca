#![allow(clippy::unwrap_used)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use mind_trainer_bot::content::messages::REMINDER_MESSAGES;
use mind_trainer_bot::database::connection::DatabaseManager;
use mind_trainer_bot::database::models::{ReminderFrequency, User};
use mind_trainer_bot::services::reminder::{dispatch, DispatchReport, Notifier};
use mind_trainer_bot::services::timezone::Trigger;
use std::sync::Mutex;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db = DatabaseManager::new(&database_url).await?;
    db.run_migrations().await?;

    Ok((db, temp_dir))
}

/// Records deliveries instead of talking to Telegram.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(i64, String)>>,
    failing: Vec<i64>,
}

impl RecordingNotifier {
    fn failing_for(ids: &[i64]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: ids.to_vec(),
        }
    }

    fn recipients(&self) -> Vec<i64> {
        self.sent.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, user_id: i64, text: &str) -> Result<()> {
        if self.failing.contains(&user_id) {
            return Err(anyhow!("Forbidden: bot was blocked by the user"));
        }
        self.sent.lock().unwrap().push((user_id, text.to_string()));
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed(db: &DatabaseManager, users: &[(i64, ReminderFrequency)]) -> Result<()> {
    for (user_id, frequency) in users {
        User::set_reminder(&db.pool, *user_id, *frequency).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_daily_trigger_reaches_only_daily_users() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    seed(
        &db,
        &[
            (1, ReminderFrequency::Daily),
            (2, ReminderFrequency::Weekends),
            (3, ReminderFrequency::MonThu),
        ],
    )
    .await?;

    let notifier = RecordingNotifier::default();
    // Wednesday
    let report = dispatch(&notifier, &db, Trigger::Daily, date(2024, 1, 3)).await?;

    assert_eq!(notifier.recipients(), vec![1]);
    assert_eq!(
        report,
        DispatchReport {
            matched: 1,
            delivered: 1,
            failed: 0
        }
    );

    let sent = notifier.sent.lock().unwrap();
    assert!(REMINDER_MESSAGES.contains(&sent[0].1.as_str()));
    Ok(())
}

#[tokio::test]
async fn test_weekday_triggers() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    seed(
        &db,
        &[
            (1, ReminderFrequency::Daily),
            (2, ReminderFrequency::Weekends),
            (3, ReminderFrequency::MonThu),
        ],
    )
    .await?;

    let notifier = RecordingNotifier::default();
    // Monday
    dispatch(&notifier, &db, Trigger::MonThu, date(2024, 1, 1)).await?;
    assert_eq!(notifier.recipients(), vec![3]);

    let notifier = RecordingNotifier::default();
    // Saturday
    dispatch(&notifier, &db, Trigger::Weekend, date(2024, 1, 6)).await?;
    assert_eq!(notifier.recipients(), vec![2]);

    Ok(())
}

#[tokio::test]
async fn test_every_two_days_follows_day_parity() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    seed(&db, &[(5, ReminderFrequency::EveryTwoDays)]).await?;

    // 2024-01-02 is day 19724 since the epoch.
    let notifier = RecordingNotifier::default();
    dispatch(&notifier, &db, Trigger::Daily, date(2024, 1, 2)).await?;
    assert_eq!(notifier.recipients(), vec![5]);

    let notifier = RecordingNotifier::default();
    let report = dispatch(&notifier, &db, Trigger::Daily, date(2024, 1, 3)).await?;
    assert!(notifier.recipients().is_empty());
    assert_eq!(report.matched, 0);

    Ok(())
}

#[tokio::test]
async fn test_failed_delivery_does_not_stop_the_rest() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    seed(
        &db,
        &[
            (1, ReminderFrequency::Daily),
            (2, ReminderFrequency::Daily),
            (3, ReminderFrequency::Daily),
        ],
    )
    .await?;

    let notifier = RecordingNotifier::failing_for(&[2]);
    let report = dispatch(&notifier, &db, Trigger::Daily, date(2024, 1, 3)).await?;

    assert_eq!(notifier.recipients(), vec![1, 3]);
    assert_eq!(report.matched, 3);
    assert_eq!(report.delivered, 2);
    assert_eq!(report.failed, 1);
    Ok(())
}

#[tokio::test]
async fn test_opted_out_users_get_nothing() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    seed(&db, &[(1, ReminderFrequency::Daily)]).await?;
    User::set_reminder(&db.pool, 1, ReminderFrequency::None).await?;
    User::register(&db.pool, 2, Some("quiet"), None, None).await?;

    let notifier = RecordingNotifier::default();
    let report = dispatch(&notifier, &db, Trigger::Daily, date(2024, 1, 2)).await?;

    assert_eq!(report, DispatchReport::default());
    assert!(notifier.recipients().is_empty());
    Ok(())
}

#[test]
fn test_triggers_fire_at_moscow_times_in_utc() {
    assert_eq!(Trigger::Daily.utc_cron(), "0 0 7 * * *");
    assert_eq!(Trigger::MonThu.utc_cron(), "0 0 15 * * Mon,Thu");
    assert_eq!(Trigger::Weekend.utc_cron(), "0 0 9 * * Sat,Sun");
}
