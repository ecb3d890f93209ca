//! # Mind Trainer Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the database, starts
//! the reminder triggers and the health endpoint, and runs the Telegram bot.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mind_trainer_bot::ai::Assistant;
use mind_trainer_bot::bot::handlers::BotHandler;
use mind_trainer_bot::config::Config;
use mind_trainer_bot::database::connection::DatabaseManager;
use mind_trainer_bot::services::health::HealthService;
use mind_trainer_bot::services::reminder::{Notifier, ReminderService};
use mind_trainer_bot::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mind Trainer Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}, HTTP Port: {}, GigaChat model: {}",
        config.database_url, config.http_port, config.gigachat.model
    );

    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    let assistant = Arc::new(
        Assistant::from_config(config.gigachat.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create GigaChat client: {}", e))?,
    );
    let sessions = SessionStore::new();

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(db_arc.clone(), sessions.clone(), assistant);
    info!("Telegram bot initialized successfully");

    info!("Initializing reminder service...");
    let notifier: Arc<dyn Notifier> = Arc::new(bot.clone());
    let mut reminder_service = match ReminderService::new(notifier, db_arc.clone()).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to create reminder service: {}", e);
            return Err(anyhow::anyhow!("Failed to create reminder service: {}", e));
        }
    };

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
    } else {
        info!("Reminder service started successfully");
    }

    let health_service = HealthService::new(db_arc.clone(), sessions);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, BotHandler::schema())
            .dependencies(handler.dependencies())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Err(e) = reminder_service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
