use rand::Rng;
use std::time::{Duration, Instant};

use super::grading::{self, Tier};
use crate::content::{self, assessments, brain_games, quiz::QuizModule, Question};
use crate::database::models::TestResult;
use crate::utils::logging;

/// The four quiz-like activities. They share one run engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Quiz,
    Attention,
    Speed,
    BrainGame,
}

impl ActivityKind {
    /// Timed activities persist their completion time.
    pub fn is_timed(&self) -> bool {
        matches!(self, ActivityKind::Speed)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Quiz => "Квиз",
            ActivityKind::Attention => "Тест на внимание",
            ActivityKind::Speed => "Тест на скорость",
            ActivityKind::BrainGame => "Игра",
        }
    }
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub correct_option: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// Stale or out-of-range answer; nothing changed.
    AlreadyFinished,
    Next {
        verdict: Verdict,
        title: &'static str,
        question: Question,
        number: usize,
        total: usize,
    },
    Finished {
        verdict: Verdict,
        summary: Summary,
    },
}

/// Final tally of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kind: ActivityKind,
    pub source_id: Option<&'static str>,
    pub title: &'static str,
    pub score: usize,
    pub total: usize,
    pub elapsed: Duration,
    pub tier: Tier,
}

impl Summary {
    pub fn percentage(&self) -> f64 {
        grading::percentage(self.score, self.total)
    }

    pub fn average_seconds(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() / self.total as f64
    }

    /// Tag stored in `test_results.test_type`.
    pub fn test_type(&self) -> String {
        match (self.kind, self.source_id) {
            (ActivityKind::Quiz, Some(id)) => format!("quiz_{id}"),
            (ActivityKind::BrainGame, Some(id)) => format!("brain_game_{id}"),
            (ActivityKind::Quiz, None) => "quiz".to_string(),
            (ActivityKind::BrainGame, None) => "brain_game".to_string(),
            (ActivityKind::Attention, _) => "attention".to_string(),
            (ActivityKind::Speed, _) => "speed".to_string(),
        }
    }

    pub fn completion_time(&self) -> Option<f64> {
        self.kind.is_timed().then(|| self.elapsed.as_secs_f64())
    }

    /// Appends this tally to the result history.
    pub async fn persist(
        &self,
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<TestResult, sqlx::Error> {
        TestResult::create(
            pool,
            user_id,
            &self.test_type(),
            self.score as i64,
            self.total as i64,
            self.completion_time(),
        )
        .await
    }

    /// Logs the finished run and stores it. Returns whether the result was
    /// saved; a failed write is logged and the run still counts as done.
    pub async fn finalize(&self, pool: &sqlx::SqlitePool, user_id: i64) -> bool {
        let test_type = self.test_type();
        logging::log_activity_done(
            &test_type,
            user_id,
            self.score,
            self.total,
            self.elapsed.as_secs_f64(),
        );

        match self.persist(pool, user_id).await {
            Ok(_) => true,
            Err(e) => {
                logging::log_database_error("insert", "test_results", &e.to_string(), Some(&test_type));
                false
            }
        }
    }
}

/// An in-progress quiz, test or game.
#[derive(Debug, Clone)]
pub struct Run {
    pub kind: ActivityKind,
    pub source_id: Option<&'static str>,
    pub title: &'static str,
    questions: Vec<Question>,
    index: usize,
    score: usize,
    started_at: Instant,
}

impl Run {
    pub fn new(
        kind: ActivityKind,
        source_id: Option<&'static str>,
        title: &'static str,
        questions: Vec<Question>,
        started_at: Instant,
    ) -> Self {
        Self {
            kind,
            source_id,
            title,
            questions,
            index: 0,
            score: 0,
            started_at,
        }
    }

    pub fn quiz<R: Rng + ?Sized>(module: &'static QuizModule, rng: &mut R, now: Instant) -> Self {
        let questions = content::shuffled(module.questions, rng);
        Self::new(ActivityKind::Quiz, Some(module.id), module.title, questions, now)
    }

    pub fn attention<R: Rng + ?Sized>(rng: &mut R, now: Instant) -> Self {
        let questions = content::shuffled(assessments::ATTENTION_QUESTIONS, rng);
        Self::new(ActivityKind::Attention, None, "Тест на внимание", questions, now)
    }

    pub fn speed<R: Rng + ?Sized>(rng: &mut R, now: Instant) -> Self {
        let questions = content::shuffled(assessments::SPEED_QUESTIONS, rng);
        Self::new(ActivityKind::Speed, None, "Тест на скорость", questions, now)
    }

    pub fn brain_game<R: Rng + ?Sized>(game: &'static brain_games::BrainGame, rng: &mut R, now: Instant) -> Self {
        let questions = brain_games::generate_rounds(game.kind, brain_games::ROUNDS_PER_GAME, rng);
        Self::new(ActivityKind::BrainGame, Some(game.id), game.title, questions, now)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Checks `choice` against the current question and advances the run.
    /// Answers past the end, or naming an option the question does not have,
    /// leave the run untouched.
    pub fn answer(&mut self, choice: usize, now: Instant) -> AnswerOutcome {
        let Some(question) = self.questions.get(self.index) else {
            return AnswerOutcome::AlreadyFinished;
        };
        if choice >= question.options.len() {
            return AnswerOutcome::AlreadyFinished;
        }

        let correct = choice == question.correct;
        let verdict = Verdict {
            correct,
            correct_option: question.correct_option().to_string(),
            explanation: question.explanation.clone(),
        };

        if correct {
            self.score += 1;
        }
        self.index += 1;

        match self.questions.get(self.index) {
            Some(next) => AnswerOutcome::Next {
                verdict,
                title: self.title,
                question: next.clone(),
                number: self.index + 1,
                total: self.questions.len(),
            },
            None => AnswerOutcome::Finished {
                verdict,
                summary: self.summary(now),
            },
        }
    }

    pub fn summary(&self, now: Instant) -> Summary {
        let elapsed = now.saturating_duration_since(self.started_at);
        let total = self.questions.len();
        Summary {
            kind: self.kind,
            source_id: self.source_id,
            title: self.title,
            score: self.score,
            total,
            elapsed,
            tier: grading::grade(self.kind, self.score, total, elapsed),
        }
    }
}
