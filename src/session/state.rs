use super::activity::{ActivityKind, Run};

/// The last AI answer shown to the user, kept for like/dislike/another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastExchange {
    /// Row id of the stored interaction. `None` when saving it failed.
    pub interaction_id: Option<i64>,
    pub question: String,
    pub answer: String,
}

/// Where a user currently is in the conversation.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    MainMenu,
    QuizSelection,
    QuizInProgress(Run),
    AttentionTest(Run),
    SpeedTest(Run),
    BrainGamesSelection,
    BrainGameInProgress(Run),
    ReminderSetup,
    AiChat,
    AiFeedback(LastExchange),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::MainMenu => "main_menu",
            SessionState::QuizSelection => "quiz_selection",
            SessionState::QuizInProgress(_) => "quiz_in_progress",
            SessionState::AttentionTest(_) => "attention_test",
            SessionState::SpeedTest(_) => "speed_test",
            SessionState::BrainGamesSelection => "brain_games_selection",
            SessionState::BrainGameInProgress(_) => "brain_game_in_progress",
            SessionState::ReminderSetup => "reminder_setup",
            SessionState::AiChat => "ai_chat",
            SessionState::AiFeedback(_) => "ai_feedback",
        }
    }

    /// Wraps a fresh run in the state matching its activity.
    pub fn for_run(run: Run) -> Self {
        match run.kind {
            ActivityKind::Quiz => SessionState::QuizInProgress(run),
            ActivityKind::Attention => SessionState::AttentionTest(run),
            ActivityKind::Speed => SessionState::SpeedTest(run),
            ActivityKind::BrainGame => SessionState::BrainGameInProgress(run),
        }
    }

    /// The in-progress run, if this state holds one of `kind`.
    pub fn run_mut(&mut self, kind: ActivityKind) -> Option<&mut Run> {
        match (self, kind) {
            (SessionState::QuizInProgress(run), ActivityKind::Quiz)
            | (SessionState::AttentionTest(run), ActivityKind::Attention)
            | (SessionState::SpeedTest(run), ActivityKind::Speed)
            | (SessionState::BrainGameInProgress(run), ActivityKind::BrainGame) => Some(run),
            _ => None,
        }
    }

    /// True while the user is talking to the AI assistant.
    pub fn accepts_ai_questions(&self) -> bool {
        matches!(self, SessionState::AiChat | SessionState::AiFeedback(_))
    }
}
