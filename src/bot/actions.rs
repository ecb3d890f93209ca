//! Inline-button payloads.
//!
//! Every button the bot sends carries the string produced by
//! [`Action::callback_data`], and every callback is routed through
//! [`Action::parse`].

use crate::database::models::{Feedback, ReminderFrequency};
use crate::session::ActivityKind;
use crate::utils::validation::parse_answer_index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quiz,
    Attention,
    Speed,
    BrainGames,
    AiAssistant,
    Reminders,
    Help,
    BackToMenu,
    QuizModule(String),
    BrainGame(String),
    Answer { kind: ActivityKind, choice: usize },
    /// Rating of one stored assistant answer.
    AiFeedback { interaction_id: i64, feedback: Feedback },
    AiAnother,
    SetReminder(ReminderFrequency),
}

/// Prefix of the answer buttons of each activity.
pub fn answer_prefix(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Quiz => "quiz_answer_",
        ActivityKind::Attention => "attention_answer_",
        ActivityKind::Speed => "speed_answer_",
        ActivityKind::BrainGame => "brain_answer_",
    }
}

const ANSWER_KINDS: [ActivityKind; 4] = [
    ActivityKind::Quiz,
    ActivityKind::Attention,
    ActivityKind::Speed,
    ActivityKind::BrainGame,
];

impl Action {
    pub fn parse(data: &str) -> Option<Action> {
        let action = match data {
            "quiz" => Action::Quiz,
            "attention" => Action::Attention,
            "speed" => Action::Speed,
            "brain_games" => Action::BrainGames,
            "ai_assistant" => Action::AiAssistant,
            "reminders" => Action::Reminders,
            "help" => Action::Help,
            "back_to_menu" => Action::BackToMenu,
            "ai_another" => Action::AiAnother,
            "reminder_cancel" => Action::SetReminder(ReminderFrequency::None),
            _ => return Self::parse_prefixed(data),
        };
        Some(action)
    }

    fn parse_prefixed(data: &str) -> Option<Action> {
        for kind in ANSWER_KINDS {
            if let Some(raw) = data.strip_prefix(answer_prefix(kind)) {
                let choice = parse_answer_index(raw).ok()?;
                return Some(Action::Answer { kind, choice });
            }
        }

        for (prefix, feedback) in [("ai_like_", Feedback::Like), ("ai_dislike_", Feedback::Dislike)] {
            if let Some(raw) = data.strip_prefix(prefix) {
                let interaction_id = raw.parse::<i64>().ok().filter(|id| *id > 0)?;
                return Some(Action::AiFeedback { interaction_id, feedback });
            }
        }

        if let Some(id) = data.strip_prefix("quiz_module_") {
            return non_empty(id).map(Action::QuizModule);
        }
        if let Some(id) = data.strip_prefix("brain_game_") {
            return non_empty(id).map(Action::BrainGame);
        }
        if let Some(tag) = data.strip_prefix("reminder_") {
            return match tag.parse::<ReminderFrequency>() {
                Ok(ReminderFrequency::None) | Err(_) => None,
                Ok(frequency) => Some(Action::SetReminder(frequency)),
            };
        }

        None
    }

    pub fn callback_data(&self) -> String {
        match self {
            Action::Quiz => "quiz".to_string(),
            Action::Attention => "attention".to_string(),
            Action::Speed => "speed".to_string(),
            Action::BrainGames => "brain_games".to_string(),
            Action::AiAssistant => "ai_assistant".to_string(),
            Action::Reminders => "reminders".to_string(),
            Action::Help => "help".to_string(),
            Action::BackToMenu => "back_to_menu".to_string(),
            Action::QuizModule(id) => format!("quiz_module_{id}"),
            Action::BrainGame(id) => format!("brain_game_{id}"),
            Action::Answer { kind, choice } => format!("{}{}", answer_prefix(*kind), choice),
            Action::AiFeedback { interaction_id, feedback: Feedback::Like } => {
                format!("ai_like_{interaction_id}")
            }
            Action::AiFeedback { interaction_id, feedback: Feedback::Dislike } => {
                format!("ai_dislike_{interaction_id}")
            }
            Action::AiAnother => "ai_another".to_string(),
            Action::SetReminder(ReminderFrequency::None) => "reminder_cancel".to_string(),
            Action::SetReminder(frequency) => format!("reminder_{}", frequency.as_str()),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Quiz => "quiz",
            Action::Attention => "attention",
            Action::Speed => "speed",
            Action::BrainGames => "brain_games",
            Action::AiAssistant => "ai_assistant",
            Action::Reminders => "reminders",
            Action::Help => "help",
            Action::BackToMenu => "back_to_menu",
            Action::QuizModule(_) => "quiz_module",
            Action::BrainGame(_) => "brain_game",
            Action::Answer { .. } => "answer",
            Action::AiFeedback { .. } => "ai_feedback",
            Action::AiAnother => "ai_another",
            Action::SetReminder(_) => "set_reminder",
        }
    }
}

fn non_empty(id: &str) -> Option<String> {
    (!id.is_empty()).then(|| id.to_string())
}
