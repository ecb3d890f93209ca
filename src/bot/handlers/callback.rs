use std::sync::Arc;
use std::time::Instant;
use teloxide::prelude::*;

use super::{callback_chat_id, show_screen};
use crate::bot::{actions::Action, keyboards, screens};
use crate::content::{brain_games, messages, quiz};
use crate::database::{
    connection::DatabaseManager,
    models::{AiInteraction, Feedback, RateOutcome, ReminderFrequency, User},
};
use crate::session::{ActivityKind, AnswerOutcome, Run, SessionState, SessionStore};
use crate::utils::{feedback::CommandFeedback, logging};

/// Routes every inline-button press. Each branch returns the toast shown on
/// the pressed button, if any; the query is answered exactly once.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    db: Arc<DatabaseManager>,
    sessions: SessionStore,
) -> ResponseResult<()> {
    let user_id = q.from.id.0 as i64;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(action) = q.data.as_deref().and_then(Action::parse) else {
        tracing::warn!("Unknown callback data {:?} from user {}", q.data, user_id);
        bot.answer_callback_query(q.id.clone())
            .text("Неизвестное действие")
            .await?;
        return Ok(());
    };
    logging::log_action(action.name(), username, user_id, q.data.as_deref());

    let toast = match action {
        Action::Quiz => {
            sessions.set(user_id, SessionState::QuizSelection).await;
            show_screen(
                &bot,
                &q,
                messages::QUIZ_SELECTION_MESSAGE.to_string(),
                keyboards::quiz_modules(),
            )
            .await?;
            None
        }
        Action::BrainGames => {
            sessions.set(user_id, SessionState::BrainGamesSelection).await;
            show_screen(
                &bot,
                &q,
                messages::BRAIN_GAMES_INTRO.to_string(),
                keyboards::brain_games(),
            )
            .await?;
            None
        }
        Action::QuizModule(_) | Action::BrainGame(_) | Action::Attention | Action::Speed => {
            match new_run(&action) {
                Some(run) => {
                    start_run(&bot, &q, &sessions, user_id, run, intro_for(&action)).await?;
                    None
                }
                None => Some("Такого задания нет"),
            }
        }
        Action::Answer { kind, choice } => {
            handle_answer(&bot, &q, &db, &sessions, user_id, kind, choice).await?
        }
        Action::AiAssistant => {
            sessions.set(user_id, SessionState::AiChat).await;
            show_screen(
                &bot,
                &q,
                messages::AI_WELCOME_MESSAGE.to_string(),
                keyboards::back_to_menu(),
            )
            .await?;
            None
        }
        Action::AiFeedback { interaction_id, feedback } => {
            handle_ai_feedback(&bot, &q, &db, &sessions, user_id, interaction_id, feedback).await?
        }
        Action::AiAnother => {
            sessions.set(user_id, SessionState::AiChat).await;
            bot.send_message(callback_chat_id(&q), messages::AI_NEXT_QUESTION_MESSAGE)
                .reply_markup(keyboards::back_to_menu())
                .await?;
            None
        }
        Action::Reminders => {
            sessions.set(user_id, SessionState::ReminderSetup).await;
            let current = match User::find_by_id(&db.pool, user_id).await {
                Ok(user) => user.map(|u| u.frequency()).unwrap_or(ReminderFrequency::None),
                Err(e) => {
                    logging::log_database_error("find_by_id", "users", &e.to_string(), None);
                    ReminderFrequency::None
                }
            };
            let text = format!(
                "{}\n\nСейчас: {}",
                messages::REMINDER_SETUP_MESSAGE,
                current.label()
            );
            show_screen(&bot, &q, text, keyboards::reminder_setup()).await?;
            None
        }
        Action::SetReminder(frequency) => {
            handle_set_reminder(&bot, &q, &db, &sessions, user_id, frequency).await?
        }
        Action::Help => {
            show_screen(
                &bot,
                &q,
                messages::HELP_MESSAGE.to_string(),
                keyboards::back_to_menu(),
            )
            .await?;
            None
        }
        Action::BackToMenu => {
            sessions.clear(user_id).await;
            show_screen(
                &bot,
                &q,
                messages::MAIN_MENU_MESSAGE.to_string(),
                keyboards::main_menu(),
            )
            .await?;
            None
        }
    };

    let mut answer = bot.answer_callback_query(q.id.clone());
    if let Some(text) = toast {
        answer = answer.text(text);
    }
    answer.await?;
    Ok(())
}

/// Builds a fresh run for an activity-starting action.
fn new_run(action: &Action) -> Option<Run> {
    let mut rng = rand::rng();
    let now = Instant::now();
    match action {
        Action::QuizModule(id) => quiz::find_module(id).map(|m| Run::quiz(m, &mut rng, now)),
        Action::BrainGame(id) => {
            brain_games::find_game(id).map(|g| Run::brain_game(g, &mut rng, now))
        }
        Action::Attention => Some(Run::attention(&mut rng, now)),
        Action::Speed => Some(Run::speed(&mut rng, now)),
        _ => None,
    }
}

fn intro_for(action: &Action) -> Option<&'static str> {
    match action {
        Action::Attention => Some(messages::ATTENTION_TEST_INTRO),
        Action::Speed => Some(messages::SPEED_TEST_INTRO),
        _ => None,
    }
}

async fn start_run(
    bot: &Bot,
    q: &CallbackQuery,
    sessions: &SessionStore,
    user_id: i64,
    run: Run,
    intro: Option<&str>,
) -> ResponseResult<()> {
    let Some(first) = run.current().cloned() else {
        tracing::error!("Activity '{}' has no questions", run.title);
        return Ok(());
    };

    let mut text = screens::question(run.kind, run.title, 1, run.total(), &first);
    if let Some(intro) = intro {
        text = format!("{}\n\n{}", intro, text);
    }
    let markup = keyboards::answer_options(run.kind, &first);

    sessions.set(user_id, SessionState::for_run(run)).await;
    show_screen(bot, q, text, markup).await
}

async fn handle_answer(
    bot: &Bot,
    q: &CallbackQuery,
    db: &DatabaseManager,
    sessions: &SessionStore,
    user_id: i64,
    kind: ActivityKind,
    choice: usize,
) -> ResponseResult<Option<&'static str>> {
    match sessions.submit_answer(user_id, kind, choice, Instant::now()).await {
        AnswerOutcome::AlreadyFinished => {
            let state = sessions.get(user_id).await;
            logging::log_stale_action(&format!("{:?} answer {}", kind, choice), user_id, state.name());
            Ok(Some(messages::ALREADY_FINISHED_MESSAGE))
        }
        AnswerOutcome::Next {
            verdict,
            title,
            question,
            number,
            total,
        } => {
            let text = format!(
                "{}\n\n{}",
                screens::verdict(&verdict),
                screens::question(kind, title, number, total, &question)
            );
            show_screen(bot, q, text, keyboards::answer_options(kind, &question)).await?;
            Ok(None)
        }
        AnswerOutcome::Finished { verdict, summary } => {
            let saved = summary.finalize(&db.pool, user_id).await;

            let text = format!(
                "{}\n\n{}",
                screens::verdict(&verdict),
                screens::result(&summary)
            );
            show_screen(bot, q, text, keyboards::result_actions(&summary)).await?;

            if !saved {
                CommandFeedback::new(bot.clone(), callback_chat_id(q))
                    .warning(messages::RESULT_NOT_SAVED_MESSAGE)
                    .await?;
            }
            Ok(None)
        }
    }
}

async fn handle_ai_feedback(
    bot: &Bot,
    q: &CallbackQuery,
    db: &DatabaseManager,
    sessions: &SessionStore,
    user_id: i64,
    interaction_id: i64,
    feedback: Feedback,
) -> ResponseResult<Option<&'static str>> {
    let toast = match AiInteraction::rate(&db.pool, interaction_id, user_id, feedback).await {
        Ok(RateOutcome::Recorded) => {
            logging::log_database_operation(
                "record_feedback",
                "ai_interactions",
                Some(&format!("id {} = {:?}", interaction_id, feedback)),
            );
            messages::AI_FEEDBACK_THANKS
        }
        Ok(RateOutcome::AlreadyRated) => messages::AI_FEEDBACK_ALREADY_GIVEN,
        Ok(RateOutcome::NotFound) => {
            let state = sessions.get(user_id).await;
            logging::log_stale_action(
                &format!("ai_feedback {}", interaction_id),
                user_id,
                state.name(),
            );
            messages::AI_FEEDBACK_UNAVAILABLE
        }
        Err(e) => {
            logging::log_database_error("record_feedback", "ai_interactions", &e.to_string(), None);
            "Не удалось сохранить отзыв"
        }
    };

    // Rating the answer still awaiting feedback returns the user to the chat;
    // rating an older answer leaves the current activity alone.
    if let SessionState::AiFeedback(last) = sessions.get(user_id).await {
        if last.interaction_id == Some(interaction_id) {
            sessions.set(user_id, SessionState::AiChat).await;
        }
    }

    if let Some(message) = &q.message {
        if let Err(e) = bot
            .edit_message_reply_markup(message.chat.id, message.id)
            .reply_markup(keyboards::back_to_menu())
            .await
        {
            tracing::debug!("Could not drop feedback buttons: {}", e);
        }
    }

    Ok(Some(toast))
}

async fn handle_set_reminder(
    bot: &Bot,
    q: &CallbackQuery,
    db: &DatabaseManager,
    sessions: &SessionStore,
    user_id: i64,
    frequency: ReminderFrequency,
) -> ResponseResult<Option<&'static str>> {
    if let Err(e) = User::set_reminder(&db.pool, user_id, frequency).await {
        logging::log_database_error(
            "set_reminder",
            "users",
            &e.to_string(),
            Some(frequency.as_str()),
        );
        return Ok(Some("Не удалось сохранить настройки, попробуй позже"));
    }

    sessions.clear(user_id).await;
    let text = match frequency {
        ReminderFrequency::None => messages::REMINDER_CANCELLED_MESSAGE.to_string(),
        _ => format!(
            "{}\n\nЧастота: {}",
            messages::REMINDER_CONFIRMED_MESSAGE,
            frequency.label()
        ),
    };
    show_screen(bot, q, text, keyboards::back_to_menu()).await?;
    Ok(None)
}
