use std::sync::Arc;
use teloxide::prelude::*;

use crate::ai::{context_for, Assistant};
use crate::bot::{keyboards, screens};
use crate::content::messages;
use crate::database::{connection::DatabaseManager, models::AiInteraction};
use crate::session::{LastExchange, SessionState, SessionStore};
use crate::utils::{feedback::CommandFeedback, logging, validation::validate_question_text};

/// Plain text messages. Inside the AI chat they are questions for the
/// assistant; anywhere else the user gets a hint.
pub async fn text_handler(
    bot: Bot,
    msg: Message,
    db: Arc<DatabaseManager>,
    sessions: SessionStore,
    assistant: Arc<Assistant>,
) -> ResponseResult<()> {
    let (Some(from), Some(text)) = (msg.from(), msg.text()) else {
        return Ok(());
    };
    let user_id = from.id.0 as i64;
    let username = from.username.as_deref().unwrap_or("unknown");

    if text.starts_with('/') {
        bot.send_message(msg.chat.id, messages::UNKNOWN_COMMAND_MESSAGE)
            .await?;
        return Ok(());
    }

    let state = sessions.get(user_id).await;
    if !state.accepts_ai_questions() {
        bot.send_message(msg.chat.id, messages::AI_OUTSIDE_CHAT_HINT)
            .reply_markup(keyboards::main_menu())
            .await?;
        return Ok(());
    }

    let question = match validate_question_text(text) {
        Ok(question) => question.to_string(),
        Err(e) => {
            CommandFeedback::new(bot.clone(), msg.chat.id)
                .validation_error(&e.to_string(), "Сформулируй вопрос короче и отправь ещё раз.")
                .await?;
            return Ok(());
        }
    };
    logging::log_action(
        "ai_question",
        username,
        user_id,
        Some(&format!("{} chars", question.chars().count())),
    );

    let thinking = bot
        .send_message(msg.chat.id, messages::AI_THINKING_MESSAGE)
        .await?;

    let context = context_for(&question);
    let answer = assistant.answer(&question, context).await;
    let suggestions = if answer.starts_with('❌') {
        Vec::new()
    } else {
        assistant.suggestions(&question, context).await
    };

    if let Err(e) = bot.delete_message(msg.chat.id, thinking.id).await {
        tracing::warn!("Failed to delete thinking message: {}", e);
    }

    let interaction_id = match AiInteraction::create(&db.pool, user_id, &question, &answer).await {
        Ok(interaction) => Some(interaction.id),
        Err(e) => {
            logging::log_database_error("insert", "ai_interactions", &e.to_string(), None);
            None
        }
    };

    let markup = match interaction_id {
        Some(id) => keyboards::ai_answer(id),
        None => keyboards::back_to_menu(),
    };
    bot.send_message(msg.chat.id, screens::ai_answer(&answer, &suggestions))
        .reply_markup(markup)
        .await?;

    sessions
        .set(
            user_id,
            SessionState::AiFeedback(LastExchange {
                interaction_id,
                question,
                answer,
            }),
        )
        .await;
    Ok(())
}
