use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::config::GigaChatConfig;

/// Shown when the backend answered with a non-success status.
pub fn api_error_message(status: u16) -> String {
    format!("❌ Ошибка API: {}", status)
}

pub const GENERIC_ERROR_MESSAGE: &str = "❌ Произошла ошибка при обработке запроса";

/// A cached credential refreshes this long before it expires.
const REFRESH_MARGIN_SECONDS: i64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("credential rejected by backend")]
    Unauthorized,
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl AiError {
    /// Text shown to the user in place of an answer.
    pub fn user_message(&self) -> String {
        match self {
            AiError::Status(status) => api_error_message(*status),
            AiError::Unauthorized => api_error_message(401),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AiError::Malformed(e.to_string())
        } else {
            AiError::Transport(e.to_string())
        }
    }
}

/// Bearer credential issued by the authorization endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Credentials without an expiry stay usable until the backend rejects them.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at - now > ChronoDuration::seconds(REFRESH_MARGIN_SECONDS),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

/// Generation limits of one completion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Sampling {
    pub const ANSWER: Sampling = Sampling { max_tokens: 500, temperature: 0.7 };
    pub const SUGGESTIONS: Sampling = Sampling { max_tokens: 200, temperature: 0.8 };
}

/// Transport to the chat backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn fetch_token(&self) -> Result<Token, AiError>;

    /// Returns the generated text, or [`AiError::Unauthorized`] when the
    /// credential was rejected.
    async fn complete(
        &self,
        access_token: &str,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<String, AiError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Epoch milliseconds.
    expires_at: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// GigaChat over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    config: GigaChatConfig,
}

impl HttpBackend {
    pub fn new(config: GigaChatConfig) -> Result<Self, AiError> {
        if config.auth_key.trim().is_empty() {
            return Err(AiError::Config("GigaChat authorization key is empty".to_string()));
        }

        // The backend serves certificates from a private CA.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| AiError::Config(format!("http client build: {e}")))?;

        Ok(Self { http, config })
    }

    async fn request_token(&self) -> Result<Token, AiError> {
        let response = self
            .http
            .post(&self.config.auth_url)
            .header("Authorization", format!("Basic {}", self.config.auth_key))
            .header("RqUID", uuid::Uuid::new_v4().to_string())
            .header("Accept", "application/json")
            .form(&[("scope", self.config.scope.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "GigaChat token request failed: {} - {}",
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(AiError::Status(status.as_u16()));
        }

        let body: TokenResponse = response.json().await?;
        Ok(Token {
            access_token: body.access_token,
            expires_at: body.expires_at.and_then(DateTime::<Utc>::from_timestamp_millis),
        })
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn fetch_token(&self) -> Result<Token, AiError> {
        let attempts = self.config.max_retries.max(1);
        let mut last_error = AiError::Transport("no attempt made".to_string());

        for attempt in 1..=attempts {
            match self.request_token().await {
                Err(AiError::Transport(e)) => {
                    warn!("GigaChat token attempt {}/{} failed: {}", attempt, attempts, e);
                    last_error = AiError::Transport(e);
                }
                other => return other,
            }
        }

        Err(last_error)
    }

    async fn complete(
        &self,
        access_token: &str,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<String, AiError> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "GigaChat API error: {} - {}",
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(AiError::Status(status.as_u16()));
        }

        let body: CompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::Malformed("no choices in completion".to_string()))
    }
}

/// Course Q&A on top of a [`ChatBackend`].
pub struct Assistant {
    backend: Arc<dyn ChatBackend>,
    token: Mutex<Option<Token>>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            token: Mutex::new(None),
        }
    }

    pub fn from_config(config: GigaChatConfig) -> Result<Self, AiError> {
        Ok(Self::new(Arc::new(HttpBackend::new(config)?)))
    }

    /// Answers a course question. Never fails; errors come back as text.
    pub async fn answer(&self, question: &str, context: &str) -> String {
        let messages = [ChatMessage::system(system_prompt(context)), ChatMessage::user(question)];

        match self.complete(&messages, Sampling::ANSWER).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error in GigaChat API: {}", e);
                e.user_message()
            }
        }
    }

    /// Up to a handful of related questions, one per line of the model output.
    /// Empty on any failure.
    pub async fn suggestions(&self, question: &str, _context: &str) -> Vec<String> {
        let messages = [
            ChatMessage::system(
                "Ты помощник по курсу развития креативного мышления. Предлагай релевантные вопросы.",
            ),
            ChatMessage::user(format!(
                "На основе вопроса '{}' предложи 3 похожих вопроса по теме курса. \
                 Формат: только вопросы, каждый с новой строки.",
                question
            )),
        ];

        match self.complete(&messages, Sampling::SUGGESTIONS).await {
            Ok(text) if !text.trim_start().starts_with('❌') => split_lines(&text),
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!("Error getting suggestions: {}", e);
                Vec::new()
            }
        }
    }

    /// One completion, with a single re-authentication if the cached
    /// credential is rejected.
    async fn complete(&self, messages: &[ChatMessage], sampling: Sampling) -> Result<String, AiError> {
        let token = self.access_token(false).await?;

        match self.backend.complete(&token, messages, sampling).await {
            Err(AiError::Unauthorized) => {
                debug!("GigaChat credential rejected, re-authenticating");
                let token = self.access_token(true).await?;
                self.backend.complete(&token, messages, sampling).await
            }
            other => other,
        }
    }

    async fn access_token(&self, force_refresh: bool) -> Result<String, AiError> {
        let mut cached = self.token.lock().await;

        if !force_refresh {
            if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.backend.fetch_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}

pub fn system_prompt(context: &str) -> String {
    if context.trim().is_empty() {
        return "Ты полезный помощник по курсу развития креативного мышления. \
                Отвечай кратко и по существу."
            .to_string();
    }

    format!(
        "Ты помощник курса по развитию креативного мышления.\n\
         Используй следующий контекст курса для ответов:\n\n\
         {}\n\n\
         Отвечай кратко, по существу и дружелюбно. Если вопрос не связан с курсом,\n\
         вежливо перенаправь на темы курса.",
        context
    )
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted backend: hands out numbered tokens and replays completions.
    struct ScriptedBackend {
        token_calls: AtomicUsize,
        token_expiry: Option<DateTime<Utc>>,
        completions: std::sync::Mutex<VecDeque<Result<String, AiError>>>,
        seen_tokens: std::sync::Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(completions: Vec<Result<String, AiError>>) -> Self {
            Self {
                token_calls: AtomicUsize::new(0),
                token_expiry: None,
                completions: std::sync::Mutex::new(completions.into()),
                seen_tokens: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn token_calls(&self) -> usize {
            self.token_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn fetch_token(&self) -> Result<Token, AiError> {
            let n = self.token_calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Token {
                access_token: format!("token-{n}"),
                expires_at: self.token_expiry,
            })
        }

        async fn complete(
            &self,
            access_token: &str,
            _messages: &[ChatMessage],
            _sampling: Sampling,
        ) -> Result<String, AiError> {
            self.seen_tokens.lock().unwrap().push(access_token.to_string());
            self.completions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(AiError::Status(500)))
        }
    }

    #[tokio::test]
    async fn test_unauthorized_triggers_exactly_one_reauth() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(AiError::Unauthorized),
            Ok("Мозговой штурм — это метод генерации идей.".to_string()),
        ]));
        let assistant = Assistant::new(backend.clone());

        let answer = assistant.answer("Что такое мозговой штурм?", "контекст").await;

        assert_eq!(answer, "Мозговой штурм — это метод генерации идей.");
        assert_eq!(backend.token_calls(), 2);
        assert_eq!(*backend.seen_tokens.lock().unwrap(), vec!["token-1", "token-2"]);
    }

    #[tokio::test]
    async fn test_second_unauthorized_becomes_error_text() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(AiError::Unauthorized),
            Err(AiError::Unauthorized),
            Ok("never reached".to_string()),
        ]));
        let assistant = Assistant::new(backend.clone());

        let answer = assistant.answer("вопрос", "").await;

        assert_eq!(answer, "❌ Ошибка API: 401");
        assert_eq!(backend.token_calls(), 2);
    }

    #[tokio::test]
    async fn test_token_is_cached_between_calls() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]));
        let assistant = Assistant::new(backend.clone());

        assert_eq!(assistant.answer("a", "").await, "first");
        assert_eq!(assistant.answer("b", "").await, "second");
        assert_eq!(backend.token_calls(), 1);
    }

    #[tokio::test]
    async fn test_expiring_token_is_refreshed_proactively() {
        let mut backend = ScriptedBackend::new(vec![Ok("first".to_string()), Ok("second".to_string())]);
        backend.token_expiry = Some(Utc::now() + ChronoDuration::seconds(30));
        let backend = Arc::new(backend);
        let assistant = Assistant::new(backend.clone());

        assistant.answer("a", "").await;
        assistant.answer("b", "").await;
        assert_eq!(backend.token_calls(), 2);
    }

    #[tokio::test]
    async fn test_status_error_text() {
        let backend = Arc::new(ScriptedBackend::new(vec![Err(AiError::Status(503))]));
        let assistant = Assistant::new(backend);
        assert_eq!(assistant.answer("a", "").await, "❌ Ошибка API: 503");
    }

    #[tokio::test]
    async fn test_transport_error_text() {
        let backend = Arc::new(ScriptedBackend::new(vec![Err(AiError::Transport("reset".into()))]));
        let assistant = Assistant::new(backend);
        assert_eq!(assistant.answer("a", "").await, GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_suggestions_split_non_empty_lines() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(
            "Что такое SCAMPER?\n\n  Как работает мозговой штурм?  \nЗачем нужны интеллект-карты?\n".to_string(),
        )]));
        let assistant = Assistant::new(backend);

        let suggestions = assistant.suggestions("креативность", COURSE).await;
        assert_eq!(
            suggestions,
            vec![
                "Что такое SCAMPER?",
                "Как работает мозговой штурм?",
                "Зачем нужны интеллект-карты?"
            ]
        );
    }

    #[tokio::test]
    async fn test_suggestions_empty_on_failure() {
        let backend = Arc::new(ScriptedBackend::new(vec![Err(AiError::Status(500))]));
        let assistant = Assistant::new(backend);
        assert!(assistant.suggestions("x", COURSE).await.is_empty());

        let backend = Arc::new(ScriptedBackend::new(vec![Ok("❌ Ошибка API: 500".to_string())]));
        let assistant = Assistant::new(backend);
        assert!(assistant.suggestions("x", COURSE).await.is_empty());
    }

    #[test]
    fn test_token_freshness() {
        let now = Utc::now();
        let token = |expires_at| Token { access_token: "t".into(), expires_at };
        assert!(token(None).is_fresh(now));
        assert!(token(Some(now + ChronoDuration::minutes(10))).is_fresh(now));
        assert!(!token(Some(now + ChronoDuration::seconds(59))).is_fresh(now));
        assert!(!token(Some(now - ChronoDuration::seconds(1))).is_fresh(now));
    }

    #[test]
    fn test_system_prompt_embeds_context() {
        let prompt = system_prompt("Модуль 1");
        assert!(prompt.contains("Модуль 1"));
        assert!(prompt.starts_with("Ты помощник курса"));
        assert!(!system_prompt("").contains("контекст"));
    }

    #[test]
    fn test_http_backend_rejects_empty_key() {
        let config = GigaChatConfig {
            auth_key: " ".to_string(),
            scope: "GIGACHAT_API_PERS".to_string(),
            auth_url: "https://localhost/oauth".to_string(),
            api_url: "https://localhost/chat".to_string(),
            model: "GigaChat:latest".to_string(),
            timeout: std::time::Duration::from_secs(1),
            max_retries: 1,
        };
        assert!(matches!(HttpBackend::new(config), Err(AiError::Config(_))));
    }

    #[test]
    fn test_completion_request_wire_format() {
        let messages = [ChatMessage::system("sys"), ChatMessage::user("Что такое ТРИЗ?")];
        let request = CompletionRequest {
            model: "GigaChat:latest",
            messages: &messages,
            max_tokens: Sampling::ANSWER.max_tokens,
            temperature: Sampling::ANSWER.temperature,
        };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&encoded).unwrap(),
            serde_json::json!({
                "model": "GigaChat:latest",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "Что такое ТРИЗ?"}
                ],
                "max_tokens": 500,
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_token_and_completion_responses_parse() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"abc","expires_at":1706000000000}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_at, Some(1_706_000_000_000));

        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Ответ"},"index":0}],"model":"GigaChat"}"#,
        )
        .unwrap();
        assert_eq!(completion.choices[0].message.content, "Ответ");
    }

    const COURSE: &str = "контекст курса";
}
