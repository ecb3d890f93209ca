use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::{keyboards, screens};
use crate::database::{connection::DatabaseManager, models::TestResult};
use crate::utils::{feedback::CommandFeedback, logging};

pub async fn handle_stats(bot: Bot, msg: Message, user_id: i64, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);

    let stats = match TestResult::stats_for_user(&db.pool, user_id).await {
        Ok(stats) => stats,
        Err(e) => {
            logging::log_database_error("stats_for_user", "test_results", &e.to_string(), None);
            feedback.error("Не удалось загрузить результаты, попробуй позже").await?;
            return Ok(());
        }
    };

    let recent = match TestResult::find_by_user(&db.pool, user_id, screens::RECENT_ATTEMPTS).await {
        Ok(recent) => recent,
        Err(e) => {
            logging::log_database_error("find_by_user", "test_results", &e.to_string(), None);
            Vec::new()
        }
    };

    bot.send_message(msg.chat.id, screens::stats(&stats, &recent))
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(keyboards::back_to_menu())
        .await?;
    Ok(())
}
