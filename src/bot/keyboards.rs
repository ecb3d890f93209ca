use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::actions::Action;
use crate::content::{brain_games::BRAIN_GAMES, quiz::QUIZ_MODULES, Question};
use crate::database::models::ReminderFrequency;
use crate::session::{ActivityKind, Summary};

fn button(text: impl Into<String>, action: Action) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.callback_data())
}

fn back_row() -> Vec<InlineKeyboardButton> {
    vec![button("🔙 Главное меню", Action::BackToMenu)]
}

pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            button("📚 Тест-квиз", Action::Quiz),
            button("👁 Тест на внимание", Action::Attention),
        ],
        vec![
            button("⚡ Тест на скорость", Action::Speed),
            button("🧠 Разминка мозга", Action::BrainGames),
        ],
        vec![
            button("🤖 ИИ помощник", Action::AiAssistant),
            button("⏰ Напоминания", Action::Reminders),
        ],
        vec![button("❓ Помощь", Action::Help)],
    ])
}

pub fn back_to_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![back_row()])
}

pub fn quiz_modules() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = QUIZ_MODULES
        .iter()
        .map(|m| vec![button(format!("📖 {}", m.title), Action::QuizModule(m.id.to_string()))])
        .collect();
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}

pub fn brain_games() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = BRAIN_GAMES
        .iter()
        .map(|g| vec![button(format!("🎯 {}", g.title), Action::BrainGame(g.id.to_string()))])
        .collect();
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}

/// One button per option, in display order.
pub fn answer_options(kind: ActivityKind, question: &Question) -> InlineKeyboardMarkup {
    let rows = question
        .options
        .iter()
        .enumerate()
        .map(|(choice, option)| vec![button(option.clone(), Action::Answer { kind, choice })])
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// Retry / pick another / main menu, under a result screen.
pub fn result_actions(summary: &Summary) -> InlineKeyboardMarkup {
    let retry = match (summary.kind, summary.source_id) {
        (ActivityKind::Quiz, Some(id)) => Action::QuizModule(id.to_string()),
        (ActivityKind::BrainGame, Some(id)) => Action::BrainGame(id.to_string()),
        (ActivityKind::Quiz, None) => Action::Quiz,
        (ActivityKind::BrainGame, None) => Action::BrainGames,
        (ActivityKind::Attention, _) => Action::Attention,
        (ActivityKind::Speed, _) => Action::Speed,
    };

    let mut rows = vec![vec![button("🔄 Пройти ещё раз", retry)]];
    match summary.kind {
        ActivityKind::Quiz => rows.push(vec![button("📚 Другой модуль", Action::Quiz)]),
        ActivityKind::BrainGame => rows.push(vec![button("🧠 Другая игра", Action::BrainGames)]),
        ActivityKind::Attention | ActivityKind::Speed => {}
    }
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}

/// Feedback buttons under an assistant answer, bound to its stored row.
pub fn ai_answer(interaction_id: i64) -> InlineKeyboardMarkup {
    use crate::database::models::Feedback;

    InlineKeyboardMarkup::new(vec![
        vec![
            button(
                "👍 Полезно",
                Action::AiFeedback { interaction_id, feedback: Feedback::Like },
            ),
            button(
                "👎 Не помогло",
                Action::AiFeedback { interaction_id, feedback: Feedback::Dislike },
            ),
        ],
        vec![button("❓ Задать другой вопрос", Action::AiAnother)],
        back_row(),
    ])
}

pub fn reminder_setup() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = ReminderFrequency::ALL
        .iter()
        .filter(|f| **f != ReminderFrequency::None)
        .map(|f| vec![button(format!("📅 {}", f.label()), Action::SetReminder(*f))])
        .collect();
    rows.push(vec![button(
        "❌ Отключить напоминания",
        Action::SetReminder(ReminderFrequency::None),
    )]);
    rows.push(back_row());
    InlineKeyboardMarkup::new(rows)
}

/// Shortcut menu attached to every reminder message.
pub fn reminder_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            button("📚 Квиз", Action::Quiz),
            button("👁 Внимание", Action::Attention),
        ],
        vec![
            button("⚡ Скорость", Action::Speed),
            button("🧠 Разминка", Action::BrainGames),
        ],
        vec![button("🤖 Спросить ИИ", Action::AiAssistant)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callbacks(markup: &InlineKeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|b| match &b.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_main_menu_layout() {
        assert_eq!(
            callbacks(&main_menu()),
            vec![
                vec!["quiz", "attention"],
                vec!["speed", "brain_games"],
                vec!["ai_assistant", "reminders"],
                vec!["help"],
            ]
        );
    }

    #[test]
    fn test_every_button_parses() {
        let markups = [
            main_menu(),
            back_to_menu(),
            quiz_modules(),
            brain_games(),
            ai_answer(31),
            reminder_setup(),
            reminder_keyboard(),
        ];
        for markup in &markups {
            for data in callbacks(markup).into_iter().flatten() {
                assert!(Action::parse(&data).is_some(), "unroutable button: {data}");
            }
        }
    }

    #[test]
    fn test_ai_answer_buttons_name_the_interaction() {
        assert_eq!(
            callbacks(&ai_answer(31)),
            vec![
                vec!["ai_like_31", "ai_dislike_31"],
                vec!["ai_another"],
                vec!["back_to_menu"],
            ]
        );
    }

    #[test]
    fn test_answer_buttons_follow_option_order() {
        let question = Question {
            prompt: "?".to_string(),
            options: vec!["7".into(), "8".into(), "9".into()],
            correct: 2,
            explanation: None,
        };
        assert_eq!(
            callbacks(&answer_options(ActivityKind::Speed, &question)),
            vec![vec!["speed_answer_0"], vec!["speed_answer_1"], vec!["speed_answer_2"]]
        );
    }

    #[test]
    fn test_result_actions_retry_same_module() {
        let summary = Summary {
            kind: ActivityKind::Quiz,
            source_id: Some("module2"),
            title: "Креативные техники",
            score: 3,
            total: 5,
            elapsed: Duration::from_secs(40),
            tier: crate::session::Tier::Middle,
        };
        assert_eq!(
            callbacks(&result_actions(&summary)),
            vec![vec!["quiz_module_module2"], vec!["quiz"], vec!["back_to_menu"]]
        );
    }

    #[test]
    fn test_reminder_setup_offers_every_frequency() {
        let data: Vec<String> = callbacks(&reminder_setup()).into_iter().flatten().collect();
        assert_eq!(
            data,
            vec![
                "reminder_daily",
                "reminder_2days",
                "reminder_mon_thu",
                "reminder_weekends",
                "reminder_cancel",
                "back_to_menu",
            ]
        );
    }
}
