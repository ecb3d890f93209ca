use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::commands::{stats, Command};
use crate::bot::keyboards;
use crate::content::messages::{HELP_MESSAGE, MAIN_MENU_MESSAGE, WELCOME_MESSAGE};
use crate::database::{connection::DatabaseManager, models::User};
use crate::session::SessionStore;
use crate::utils::logging;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: Arc<DatabaseManager>,
    sessions: SessionStore,
) -> ResponseResult<()> {
    let Some(from) = msg.from() else {
        return Ok(());
    };
    let user_id = from.id.0 as i64;
    let username = from.username.clone().unwrap_or_else(|| "unknown".to_string());

    match cmd {
        Command::Start => {
            logging::log_action("/start", &username, user_id, None);
            if let Err(e) = User::register(
                &db.pool,
                user_id,
                from.username.as_deref(),
                Some(from.first_name.as_str()),
                from.last_name.as_deref(),
            )
            .await
            {
                logging::log_database_error("register", "users", &e.to_string(), None);
            }
            sessions.clear(user_id).await;
            bot.send_message(msg.chat.id, WELCOME_MESSAGE)
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Command::Help => {
            logging::log_action("/help", &username, user_id, None);
            bot.send_message(msg.chat.id, HELP_MESSAGE)
                .reply_markup(keyboards::back_to_menu())
                .await?;
        }
        Command::Menu => {
            logging::log_action("/menu", &username, user_id, None);
            sessions.clear(user_id).await;
            bot.send_message(msg.chat.id, MAIN_MENU_MESSAGE)
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Command::Stats => {
            logging::log_action("/stats", &username, user_id, None);
            stats::handle_stats(bot, msg, user_id, &db).await?;
        }
    }
    Ok(())
}
