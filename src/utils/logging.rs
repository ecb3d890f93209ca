use tracing::{debug, error, info, warn};

/// Logs an inbound command or button press
pub fn log_action(action: &str, user: &str, user_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("ACTION: {} by {}({}) - {}", action, user, user_id, d),
        None => info!("ACTION: {} by {}({})", action, user, user_id),
    }
}

/// Logs a finished quiz, test or game
pub fn log_activity_done(test_type: &str, user_id: i64, score: usize, total: usize, elapsed_secs: f64) {
    info!(
        "ACTIVITY_DONE: {} by user {} - {}/{} in {:.1}s",
        test_type, user_id, score, total, elapsed_secs
    );
}

/// Logs a stale or unexpected button press
pub fn log_stale_action(action: &str, user_id: i64, state: &str) {
    warn!(
        "STALE_ACTION: {} from user {} while in state {}",
        action, user_id, state
    );
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("DB_ERROR: {} on {} failed: {} - {}", operation, table, error, d),
        None => error!("DB_ERROR: {} on {} failed: {}", operation, table, error),
    }
}

/// Logs one delivered reminder
pub fn log_reminder_sent(user_id: i64, trigger: &str) {
    info!("REMINDER: {} reminder delivered to user {}", trigger, user_id);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
