//! Telegram MarkdownV2 helpers.
//!
//! Most bot texts go out as plain text. Screens that use MarkdownV2 build
//! their dynamic parts through these functions.

/// Escapes every character with special meaning in MarkdownV2.
///
/// # Example
/// ```
/// use mind_trainer_bot::utils::markdown::escape_markdown;
///
/// let escaped = escape_markdown("Итог: 4/5 (80%)!");
/// assert_eq!(escaped, "Итог: 4/5 \\(80%\\)\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escaped text wrapped in bold markers.
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}
