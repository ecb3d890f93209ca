//! Texts of the dynamic screens: questions, verdicts, results and stats.

use crate::content::{brain_games, quiz, Question};
use crate::database::models::{TestResult, TestTypeStats};
use crate::session::{ActivityKind, Summary, Verdict};
use crate::utils::datetime::{format_elapsed, format_timestamp};
use crate::utils::markdown::{bold, escape_markdown};

/// Related questions shown under an assistant answer.
pub const MAX_SUGGESTIONS: usize = 3;

/// Attempts listed at the bottom of `/stats`.
pub const RECENT_ATTEMPTS: i64 = 5;

fn activity_emoji(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Quiz => "📚",
        ActivityKind::Attention => "👁",
        ActivityKind::Speed => "⚡",
        ActivityKind::BrainGame => "🧠",
    }
}

pub fn question(kind: ActivityKind, title: &str, number: usize, total: usize, question: &Question) -> String {
    format!(
        "{} {}\n\nВопрос {}/{}:\n{}",
        activity_emoji(kind),
        title,
        number,
        total,
        question.prompt
    )
}

pub fn verdict(verdict: &Verdict) -> String {
    let mut text = if verdict.correct {
        "✅ Правильно!".to_string()
    } else {
        format!("❌ Неправильно. Правильный ответ: {}", verdict.correct_option)
    };
    if let Some(explanation) = &verdict.explanation {
        text.push_str(&format!("\n💡 {}", explanation));
    }
    text
}

pub fn result(summary: &Summary) -> String {
    let (emoji, comment) = summary.tier.commentary(summary.kind);
    let mut text = format!(
        "{} {} завершён!\n{}\n\nПравильных ответов: {}/{} ({:.0}%)",
        activity_emoji(summary.kind),
        summary.kind.display_name(),
        summary.title,
        summary.score,
        summary.total,
        summary.percentage()
    );

    if summary.kind.is_timed() {
        text.push_str(&format!(
            "\nВремя: {}\nВ среднем на вопрос: {:.1} сек",
            format_elapsed(summary.elapsed),
            summary.average_seconds()
        ));
    }

    text.push_str(&format!("\n\n{} {}", emoji, comment));
    text
}

/// Display name of a stored `test_type` tag.
pub fn test_type_label(test_type: &str) -> String {
    if let Some(id) = test_type.strip_prefix("quiz_") {
        return match quiz::find_module(id) {
            Some(module) => format!("Квиз: {}", module.title),
            None => format!("Квиз: {}", id),
        };
    }
    if let Some(id) = test_type.strip_prefix("brain_game_") {
        return match brain_games::find_game(id) {
            Some(game) => format!("Игра: {}", game.title),
            None => format!("Игра: {}", id),
        };
    }
    match test_type {
        "attention" => ActivityKind::Attention.display_name().to_string(),
        "speed" => ActivityKind::Speed.display_name().to_string(),
        other => other.to_string(),
    }
}

/// `/stats` screen, in MarkdownV2.
pub fn stats(stats: &[TestTypeStats], recent: &[TestResult]) -> String {
    if stats.is_empty() {
        return escape_markdown(
            "📊 У тебя пока нет результатов. Пройди любой тест из /menu, и он появится здесь.",
        );
    }

    let mut text = format!("📊 {}\n\n", bold("Твои результаты"));
    for entry in stats {
        text.push_str(&format!(
            "{}\n{}\n\n",
            bold(&test_type_label(&entry.test_type)),
            escape_markdown(&format!(
                "• Попыток: {}\n• Последний результат: {}/{} ({})\n• Лучший результат: {}",
                entry.attempts,
                entry.last_score,
                entry.last_total,
                format_timestamp(&entry.last_at),
                entry.best_score
            ))
        ));
    }

    if !recent.is_empty() {
        text.push_str(&format!("{}\n", bold("Последние попытки")));
        for attempt in recent {
            text.push_str(&escape_markdown(&format!(
                "• {}: {}/{}, {}\n",
                test_type_label(&attempt.test_type),
                attempt.score,
                attempt.total_questions,
                format_timestamp(&attempt.created_at)
            )));
        }
    }
    text.trim_end().to_string()
}

pub fn ai_answer(answer: &str, suggestions: &[String]) -> String {
    let mut text = format!("🤖 {}", answer.trim());
    if !suggestions.is_empty() {
        text.push_str("\n\n💡 Похожие вопросы:");
        for suggestion in suggestions.iter().take(MAX_SUGGESTIONS) {
            text.push_str(&format!("\n• {}", suggestion));
        }
    }
    text
}
