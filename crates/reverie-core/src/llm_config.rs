use crate::analyzer::MoodPolicy;
use crate::config::error::ConfigError;
use async_openai::config::OpenAIConfig;
use reverie_utils::args::llm::LlmServices as LlmServiceArgs;
use std::borrow::Cow;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LlmService {
    #[default]
    OpenAI,
    /// Gemini through its OpenAI compatible endpoint.
    Gemini,
    /// Any other OpenAI compatible api.
    Custom(Url),
}

impl FromStr for LlmService {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LlmService::OpenAI),
            "gemini" => Ok(LlmService::Gemini),
            _ => Url::parse(s)
                .map(LlmService::Custom)
                .map_err(|_| ConfigError::UnknownLlmService(s.to_string())),
        }
    }
}

impl LlmService {
    #[must_use]
    pub fn get_base(&self) -> Cow<'_, str> {
        match self {
            LlmService::OpenAI => "https://api.openai.com/v1".into(),
            LlmService::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai".into(),
            LlmService::Custom(url) => Cow::from(url.as_str().trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmService::OpenAI | LlmService::Custom(_) => "gpt-4.1-mini",
            LlmService::Gemini => "gemini-1.5-flash",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub service: LlmService,
    key: Option<String>,
    model: Option<String>,
    pub timeout: Duration,
    pub mood_policy: MoodPolicy,
}

impl TryFrom<LlmServiceArgs> for LlmConfig {
    type Error = ConfigError;

    fn try_from(args: LlmServiceArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            service: args.ai_service.parse()?,
            key: args.ai_key,
            model: args.ai_model,
            timeout: Duration::from_secs(args.ai_timeout),
            mood_policy: if args.coerce_unknown_moods {
                MoodPolicy::Coerce
            } else {
                MoodPolicy::PassThrough
            },
        })
    }
}

impl LlmConfig {
    #[must_use]
    pub fn new(service: LlmService, key: Option<String>, model: Option<String>) -> Self {
        Self {
            service,
            key,
            model,
            timeout: Duration::from_secs(30),
            mood_policy: MoodPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_mood_policy(mut self, mood_policy: MoodPolicy) -> Self {
        self.mood_policy = mood_policy;
        self
    }

    /// The api key, unless it is missing or blank.
    #[must_use]
    pub fn get_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.trim().is_empty())
    }

    #[must_use]
    pub fn get_model(&self) -> &str {
        if let Some(model) = &self.model {
            model.as_str()
        } else {
            tracing::debug!("Using default model for journal analysis");
            self.service.default_model()
        }
    }

    #[must_use]
    pub fn get_openai_config(&self) -> OpenAIConfig {
        let mut openai_config = OpenAIConfig::default().with_api_base(self.service.get_base());
        if let Some(api_key) = self.get_key() {
            openai_config = openai_config.with_api_key(api_key);
        }
        openai_config
    }
}
