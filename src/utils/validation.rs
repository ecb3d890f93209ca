use anyhow::{anyhow, Result};

/// Longest question accepted by the AI assistant, in characters.
pub const MAX_QUESTION_CHARS: usize = 2000;

/// Checks a question for the AI assistant and returns it trimmed.
pub fn validate_question_text(text: &str) -> Result<&str> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("Вопрос не может быть пустым"));
    }

    if text.chars().count() > MAX_QUESTION_CHARS {
        return Err(anyhow!(
            "Вопрос слишком длинный (максимум {} символов)",
            MAX_QUESTION_CHARS
        ));
    }

    Ok(text)
}

/// Parses the numeric suffix of an answer button.
pub fn parse_answer_index(raw: &str) -> Result<usize> {
    let index: usize = raw
        .parse()
        .map_err(|_| anyhow!("Invalid answer index '{}'", raw))?;

    if index > 16 {
        return Err(anyhow!("Answer index {} out of range", index));
    }

    Ok(index)
}
