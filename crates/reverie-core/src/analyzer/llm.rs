use crate::analyzer::error::AnalyzeError;
use crate::analyzer::{Analysis, MoodPolicy, TextAnalyzer, prompt};
use crate::llm_config::LlmConfig;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use reverie_model::status::AnalysisMode;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use tracing::instrument;

/// Asks an OpenAI compatible chat api for mood and summary, one request each.
pub struct LlmAnalyzer {
    client: Client<OpenAIConfig>,
    model: String,
    mood_policy: MoodPolicy,
}

impl fmt::Debug for LlmAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmAnalyzer")
            .field("model", &self.model)
            .field("mood_policy", &self.mood_policy)
            .finish_non_exhaustive()
    }
}

impl LlmAnalyzer {
    pub fn new(config: &LlmConfig) -> Result<Self, AnalyzeError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to build http client for the language model");
            })?;

        // A single attempt per request
        let backoff = ExponentialBackoffBuilder::default()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(config.get_openai_config())
            .with_http_client(http_client)
            .with_backoff(backoff);

        Ok(Self {
            client,
            model: config.get_model().to_owned(),
            mood_policy: config.mood_policy,
        })
    }

    async fn complete(&self, prompt: String) -> Result<String, AnalyzeError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await.inspect_err(|error| {
            tracing::warn!(error = error as &dyn Error, "language model call failed");
        })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AnalyzeError::EmptyResponse)
    }

    async fn try_analyze(&self, text: &str) -> Result<Analysis, AnalyzeError> {
        let (mood, summary) = futures::try_join!(self.complete(prompt::mood(text)), self.complete(prompt::summary(text)))?;

        let mood = self.mood_policy.apply(&mood).ok_or(AnalyzeError::Malformed("mood"))?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(AnalyzeError::Malformed("summary"));
        }

        Ok(Analysis {
            mood,
            summary: summary.to_owned(),
        })
    }
}

#[async_trait]
impl TextAnalyzer for LlmAnalyzer {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn analyze(&self, text: &str) -> Analysis {
        match self.try_analyze(text).await {
            Ok(analysis) => {
                tracing::debug!(mood = %analysis.mood, "analyzed journal entry");
                analysis
            }
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, "failed to analyze journal entry, using fallback");
                Analysis::fallback()
            }
        }
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Model
    }
}
