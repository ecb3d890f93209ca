pub mod ai_chat;
pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
    types::InlineKeyboardMarkup,
    RequestError,
};

use crate::ai::Assistant;
use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::session::SessionStore;

/// Everything the update handlers need, injected through `dptree`.
pub struct BotHandler {
    pub db: Arc<DatabaseManager>,
    pub sessions: SessionStore,
    pub assistant: Arc<Assistant>,
}

impl BotHandler {
    pub fn new(db: Arc<DatabaseManager>, sessions: SessionStore, assistant: Arc<Assistant>) -> Self {
        Self {
            db,
            sessions,
            assistant,
        }
    }

    pub fn schema() -> UpdateHandler<RequestError> {
        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(message::command_handler),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().is_some())
                    .endpoint(ai_chat::text_handler),
            )
            .branch(Update::filter_callback_query().endpoint(callback::callback_handler))
    }

    pub fn dependencies(&self) -> dptree::di::DependencyMap {
        dptree::deps![self.db.clone(), self.sessions.clone(), self.assistant.clone()]
    }
}

/// Chat a callback came from; private chats share the user's id.
pub(crate) fn callback_chat_id(q: &CallbackQuery) -> ChatId {
    q.message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or(ChatId(q.from.id.0 as i64))
}

/// Replaces the screen the pressed button belongs to. Falls back to a new
/// message when the old one cannot be edited.
pub(crate) async fn show_screen(
    bot: &Bot,
    q: &CallbackQuery,
    text: String,
    markup: InlineKeyboardMarkup,
) -> ResponseResult<()> {
    if let Some(message) = &q.message {
        match bot
            .edit_message_text(message.chat.id, message.id, text.clone())
            .reply_markup(markup.clone())
            .await
        {
            Ok(_) => return Ok(()),
            Err(e) => tracing::debug!("Could not edit message {}: {}", message.id.0, e),
        }
    }

    bot.send_message(callback_chat_id(q), text)
        .reply_markup(markup)
        .await?;
    Ok(())
}
