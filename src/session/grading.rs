use super::activity::ActivityKind;
use crate::content::assessments::SPEED_TARGET_SECONDS_PER_QUESTION;
use std::time::Duration;

/// Commentary tier of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Best,
    Middle,
    Low,
}

pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    score as f64 / total as f64 * 100.0
}

/// 80% and up is the best tier, 60% and up the middle one. Speed runs also
/// need to average under the per-question target to reach the best tier.
pub fn grade(kind: ActivityKind, score: usize, total: usize, elapsed: Duration) -> Tier {
    let pct = percentage(score, total);
    let fast_enough = match kind {
        ActivityKind::Speed => {
            total > 0 && elapsed.as_secs_f64() / (total as f64) < SPEED_TARGET_SECONDS_PER_QUESTION
        }
        _ => true,
    };

    if pct >= 80.0 && fast_enough {
        Tier::Best
    } else if pct >= 60.0 {
        Tier::Middle
    } else {
        Tier::Low
    }
}

impl Tier {
    /// Emoji and verdict line shown on the result screen.
    pub fn commentary(&self, kind: ActivityKind) -> (&'static str, &'static str) {
        match (kind, self) {
            (ActivityKind::Quiz, Tier::Best) => ("🎉", "Отличный результат!"),
            (ActivityKind::Quiz, Tier::Middle) => ("👍", "Хороший результат!"),
            (ActivityKind::Quiz, Tier::Low) => ("📚", "Есть куда расти!"),
            (ActivityKind::Attention, Tier::Best) => ("🦅", "Отличная внимательность!"),
            (ActivityKind::Attention, Tier::Middle) => ("👁", "Хорошее внимание!"),
            (ActivityKind::Attention, Tier::Low) => ("🔍", "Нужно тренировать внимание!"),
            (ActivityKind::Speed, Tier::Best) => ("🚀", "Отличная скорость и точность!"),
            (ActivityKind::Speed, Tier::Middle) => ("⚡", "Хорошая скорость!"),
            (ActivityKind::Speed, Tier::Low) => ("🐌", "Нужно тренировать скорость!"),
            (ActivityKind::BrainGame, Tier::Best) => ("🧠", "Отличная работа мозга!"),
            (ActivityKind::BrainGame, Tier::Middle) => ("💡", "Хорошая логика!"),
            (ActivityKind::BrainGame, Tier::Low) => ("🤔", "Нужно тренировать мышление!"),
        }
    }
}
