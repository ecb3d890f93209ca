use async_trait::async_trait;
use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use teloxide::{prelude::*, types::ChatId};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::keyboards;
use crate::content::messages::REMINDER_MESSAGES;
use crate::database::{connection::DatabaseManager, models::User};
use crate::services::timezone::{self, Trigger};
use crate::utils::logging;

/// Outbound side of the message bus used for reminders.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: i64, text: &str) -> anyhow::Result<()>;
}

#[async_trait]
impl Notifier for Bot {
    async fn notify(&self, user_id: i64, text: &str) -> anyhow::Result<()> {
        self.send_message(ChatId(user_id), text)
            .reply_markup(keyboards::reminder_keyboard())
            .await?;
        Ok(())
    }
}

/// Outcome of one trigger fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub matched: usize,
    pub delivered: usize,
    pub failed: usize,
}

pub struct ReminderService {
    notifier: Arc<dyn Notifier>,
    db: Arc<DatabaseManager>,
    scheduler: JobScheduler,
}

impl ReminderService {
    pub async fn new(notifier: Arc<dyn Notifier>, db: Arc<DatabaseManager>) -> anyhow::Result<Self> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            notifier,
            db,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> anyhow::Result<()> {
        for trigger in Trigger::ALL {
            let notifier = self.notifier.clone();
            let db = self.db.clone();
            let cron = trigger.utc_cron();

            let job = Job::new_async(cron.as_str(), move |_uuid, _l| {
                let notifier = notifier.clone();
                let db = db.clone();
                Box::pin(async move {
                    let today = timezone::moscow_now().date_naive();
                    if let Err(e) = dispatch(notifier.as_ref(), &db, trigger, today).await {
                        tracing::error!("Failed to send {} reminders: {}", trigger.name(), e);
                    }
                })
            })?;

            self.scheduler.add(job).await?;
            tracing::info!("Scheduled {} reminders with cron '{}' (UTC)", trigger.name(), cron);
        }

        self.scheduler.start().await?;
        logging::log_system_event(
            "reminders_started",
            Some("daily 10:00, mon/thu 18:00, weekend 12:00 MSK"),
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> anyhow::Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

/// Sends one reminder to every opted-in user due on this fire. A failed
/// delivery is logged and counted; the rest still go out.
pub async fn dispatch(
    notifier: &dyn Notifier,
    db: &DatabaseManager,
    trigger: Trigger,
    today: NaiveDate,
) -> anyhow::Result<DispatchReport> {
    let subscribers = User::with_reminders_enabled(&db.pool).await?;
    let mut report = DispatchReport::default();

    for subscriber in subscribers
        .iter()
        .filter(|s| trigger.matches(s.frequency(), today))
    {
        report.matched += 1;
        let text = random_message();

        match notifier.notify(subscriber.user_id, text).await {
            Ok(()) => {
                report.delivered += 1;
                logging::log_reminder_sent(subscriber.user_id, trigger.name());
            }
            Err(e) => {
                report.failed += 1;
                tracing::error!(
                    "Failed to send reminder to user {}: {}",
                    subscriber.user_id,
                    e
                );
            }
        }
    }

    tracing::info!(
        "Reminder trigger {} done: {} matched, {} delivered, {} failed",
        trigger.name(),
        report.matched,
        report.delivered,
        report.failed
    );
    Ok(report)
}

fn random_message() -> &'static str {
    REMINDER_MESSAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("🧠 Время потренировать мышление!")
}
