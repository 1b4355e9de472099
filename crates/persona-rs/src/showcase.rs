//! Mode selection, input validation, and dispatch.
//!
//! A [`Showcase`] is built once at startup from the credential lookup. A
//! present, non-blank credential puts it in [`Mode::Ai`] for its whole
//! lifetime; otherwise it stays in [`Mode::Demo`] and never touches the
//! network. Surfaces hand it an [`AskRequest`] and get back either a
//! [`ValidationError`] (no call attempted) or a [`Reply`] to display.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::CompletionClient;
use crate::api::CompletionResult;
use crate::config::ClientConfig;
use crate::demo::demo_reply;
use crate::personality::{CUSTOM_ID, Personality, Preset};
use crate::prompt::compose_system_prompt;

const CONNECTION_TEST_ROLE: &str = "You are a friendly AI assistant";
const CONNECTION_TEST_STYLE: &str = "Say hello in one short sentence";
const CONNECTION_TEST_MESSAGE: &str = "Hello!";

/// Whether questions go to the model or to the canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Ai,
    Demo,
}

impl Mode {
    /// AI mode iff the credential is present and not blank.
    pub fn from_credential(credential: Option<&str>) -> Self {
        match credential {
            Some(key) if !key.trim().is_empty() => Mode::Ai,
            _ => Mode::Demo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Ai => "AI Mode",
            Mode::Demo => "Demo Mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input rejected before any completion call is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuestion,
    MissingCustomRole,
    UnknownPersonality(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyQuestion => write!(f, "Please enter a question."),
            ValidationError::MissingCustomRole => write!(
                f,
                "Please provide at least a Role for your custom personality."
            ),
            ValidationError::UnknownPersonality(id) => write!(f, "Unknown personality '{id}'."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A question as submitted by a surface.
///
/// `custom_role` and `custom_style` are only read when `personality` is
/// `"custom"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskRequest {
    pub personality: String,
    pub question: String,
    #[serde(default)]
    pub custom_role: String,
    #[serde(default)]
    pub custom_style: String,
}

impl AskRequest {
    pub fn preset(personality: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            personality: personality.into(),
            question: question.into(),
            ..Default::default()
        }
    }

    pub fn custom(
        role: impl Into<String>,
        style: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            personality: CUSTOM_ID.to_string(),
            question: question.into(),
            custom_role: role.into(),
            custom_style: style.into(),
        }
    }

    /// Check the request and resolve its personality.
    ///
    /// The question is checked first, then the personality id, then the
    /// custom role.
    pub fn validate(&self) -> Result<Personality, ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        let id = self.personality.trim();
        if id == CUSTOM_ID {
            if self.custom_role.trim().is_empty() {
                return Err(ValidationError::MissingCustomRole);
            }
            return Ok(Personality::custom(&self.custom_role, &self.custom_style));
        }
        id.parse::<Preset>()
            .map(Personality::Preset)
            .map_err(|_| ValidationError::UnknownPersonality(id.to_string()))
    }
}

/// What a surface shows after a question was asked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Reply {
    /// Personality id that answered.
    pub personality: String,
    pub name: String,
    pub emoji: String,
    /// The reply, or the user-facing error message when `ok` is false.
    pub text: String,
    pub ok: bool,
}

impl Reply {
    fn new(personality: &Personality, result: &CompletionResult) -> Self {
        Self {
            personality: personality.id().to_string(),
            name: personality.name().to_string(),
            emoji: personality.emoji().to_string(),
            text: result.user_message(),
            ok: result.is_success(),
        }
    }
}

/// Result of the connection test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionCheck {
    /// The canned call succeeded; carries the model's greeting.
    Working(String),
    /// The canned call failed; carries the user-facing error message.
    Failed(String),
    /// No credential configured, nothing to test.
    DemoMode,
}

impl ConnectionCheck {
    pub fn status(&self) -> &'static str {
        match self {
            ConnectionCheck::Working(_) => "working",
            ConnectionCheck::Failed(_) => "failed",
            ConnectionCheck::DemoMode => "demo",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConnectionCheck::Working(text) => format!("✅ API Working!\n\n{text}"),
            ConnectionCheck::Failed(message) => message.clone(),
            ConnectionCheck::DemoMode => format!(
                "Add your API key ({}) to test the connection",
                crate::API_KEY_ENV
            ),
        }
    }
}

enum Backend {
    Ai(CompletionClient),
    Demo,
}

/// Validates questions and answers them in the mode chosen at startup.
pub struct Showcase {
    backend: Backend,
    config: ClientConfig,
}

impl Showcase {
    /// Build a showcase; the credential decides the mode once and for all.
    pub fn new(credential: Option<String>, config: ClientConfig) -> Result<Self, String> {
        let mode = Mode::from_credential(credential.as_deref());
        let backend = match (mode, credential) {
            (Mode::Ai, Some(key)) => Backend::Ai(CompletionClient::new(key, config.clone())?),
            _ => Backend::Demo,
        };
        info!(
            "{} active (model={}, provider={})",
            mode,
            config.model,
            config.provider()
        );
        Ok(Self { backend, config })
    }

    /// A showcase that only ever gives canned replies.
    pub fn demo(config: ClientConfig) -> Self {
        Self {
            backend: Backend::Demo,
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.backend {
            Backend::Ai(_) => Mode::Ai,
            Backend::Demo => Mode::Demo,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validate a request and answer it.
    ///
    /// Invalid requests return before any call is made. Completion
    /// failures are not errors here: they come back as a [`Reply`] with
    /// `ok == false` and the message to show.
    pub async fn ask(&self, request: &AskRequest) -> Result<Reply, ValidationError> {
        let personality = request.validate()?;
        debug!(
            "Asking {} ({}) in {}",
            personality.name(),
            personality.id(),
            self.mode()
        );

        let result = match &self.backend {
            Backend::Ai(client) => {
                client
                    .complete(&personality.system_prompt(), &request.question)
                    .await
            }
            Backend::Demo => CompletionResult::Success(demo_reply(personality.id()).to_string()),
        };
        Ok(Reply::new(&personality, &result))
    }

    /// Send a fixed greeting to check the credential and endpoint.
    pub async fn test_connection(&self) -> ConnectionCheck {
        let client = match &self.backend {
            Backend::Ai(client) => client,
            Backend::Demo => return ConnectionCheck::DemoMode,
        };
        let system_prompt = compose_system_prompt(CONNECTION_TEST_ROLE, CONNECTION_TEST_STYLE);
        match client.complete(&system_prompt, CONNECTION_TEST_MESSAGE).await {
            CompletionResult::Success(text) => ConnectionCheck::Working(text),
            failure => ConnectionCheck::Failed(failure.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_credential() {
        assert_eq!(Mode::from_credential(Some("gsk_abc")), Mode::Ai);
        assert_eq!(Mode::from_credential(Some("")), Mode::Demo);
        assert_eq!(Mode::from_credential(Some("   ")), Mode::Demo);
        assert_eq!(Mode::from_credential(None), Mode::Demo);
    }

    #[test]
    fn showcase_mode_follows_credential() {
        let ai = Showcase::new(Some("gsk_abc".into()), ClientConfig::default()).unwrap();
        assert_eq!(ai.mode(), Mode::Ai);
        let blank = Showcase::new(Some(String::new()), ClientConfig::default()).unwrap();
        assert_eq!(blank.mode(), Mode::Demo);
        let none = Showcase::new(None, ClientConfig::default()).unwrap();
        assert_eq!(none.mode(), Mode::Demo);
    }

    #[test]
    fn empty_question_rejected_first() {
        let req = AskRequest::custom("", "", "   ");
        assert_eq!(req.validate(), Err(ValidationError::EmptyQuestion));
    }

    #[test]
    fn custom_requires_role() {
        let req = AskRequest::custom("  ", "Be loud.", "Why?");
        assert_eq!(req.validate(), Err(ValidationError::MissingCustomRole));

        let ok = AskRequest::custom("You are a pirate", "", "Why?");
        assert_eq!(ok.validate(), Ok(Personality::custom("You are a pirate", "")));
    }

    #[test]
    fn unknown_personality_rejected() {
        let req = AskRequest::preset("grumpy_wizard", "Why?");
        assert_eq!(
            req.validate(),
            Err(ValidationError::UnknownPersonality("grumpy_wizard".into()))
        );
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::EmptyQuestion.to_string(),
            "Please enter a question."
        );
        assert!(ValidationError::MissingCustomRole.to_string().contains("Role"));
    }

    #[tokio::test]
    async fn demo_mode_answers_from_table() {
        let showcase = Showcase::demo(ClientConfig::default());
        let reply = showcase
            .ask(&AskRequest::preset("sassy_fairy", "Why is the sky blue?"))
            .await
            .unwrap();
        assert!(reply.ok);
        assert_eq!(reply.name, "Sassy Fairy");
        assert_eq!(reply.emoji, "🧚");
        assert_eq!(reply.text, demo_reply("sassy_fairy"));
    }

    #[tokio::test]
    async fn demo_mode_custom_reply() {
        let showcase = Showcase::demo(ClientConfig::default());
        let reply = showcase
            .ask(&AskRequest::custom("You are a pirate", "Arr.", "Hi"))
            .await
            .unwrap();
        assert_eq!(reply.personality, CUSTOM_ID);
        assert_eq!(reply.text, demo_reply(CUSTOM_ID));
    }

    #[tokio::test]
    async fn demo_mode_connection_test_is_offline() {
        let showcase = Showcase::demo(ClientConfig::default());
        let check = showcase.test_connection().await;
        assert_eq!(check, ConnectionCheck::DemoMode);
        assert_eq!(check.status(), "demo");
    }

    #[test]
    fn connection_check_messages() {
        let working = ConnectionCheck::Working("Hello there!".into());
        assert_eq!(working.status(), "working");
        assert!(working.message().ends_with("Hello there!"));
        let failed = ConnectionCheck::Failed("⏱️ Request timed out. Please try again.".into());
        assert_eq!(failed.status(), "failed");
        assert!(failed.message().contains("timed out"));
    }
}
