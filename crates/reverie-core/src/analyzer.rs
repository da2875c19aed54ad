pub mod error;
mod llm;
mod prompt;

pub use llm::LlmAnalyzer;

use crate::analyzer::error::AnalyzeError;
use crate::llm_config::LlmConfig;
use async_trait::async_trait;
use reverie_model::mood::Mood;
use reverie_model::status::AnalysisMode;
use std::sync::Arc;

pub const FALLBACK_SUMMARY: &str = "A personal reflection and thoughts.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub mood: String,
    pub summary: String,
}

impl Analysis {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            mood: Mood::FALLBACK.to_string(),
            summary: FALLBACK_SUMMARY.to_owned(),
        }
    }
}

/// Derives a mood label and a short summary from the text of an entry.
///
/// Implementations never fail: whatever goes wrong is logged and answered with
/// [`Analysis::fallback`].
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Analysis;

    fn mode(&self) -> AnalysisMode;
}

/// Used when no api key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAnalyzer;

#[async_trait]
impl TextAnalyzer for FallbackAnalyzer {
    async fn analyze(&self, _text: &str) -> Analysis {
        tracing::debug!("no language model configured, using fallback analysis");
        Analysis::fallback()
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Fallback
    }
}

/// What to do with a mood the model answered that is not part of [`Mood`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoodPolicy {
    /// Keep the trimmed, lower-cased answer as is.
    #[default]
    PassThrough,
    /// Strip surrounding punctuation and replace unknown moods with [`Mood::FALLBACK`].
    Coerce,
}

impl MoodPolicy {
    /// Normalizes a raw model answer. `None` if nothing usable is left.
    #[must_use]
    pub fn apply(self, raw: &str) -> Option<String> {
        let mood = raw.trim().to_lowercase();
        let mood = match self {
            MoodPolicy::PassThrough => mood,
            MoodPolicy::Coerce => {
                let stripped = mood.trim_matches(|c: char| !c.is_alphanumeric());
                if stripped.is_empty() {
                    return None;
                }
                Mood::parse(stripped).unwrap_or(Mood::FALLBACK).to_string()
            }
        };
        (!mood.is_empty()).then_some(mood)
    }
}

/// Builds the analyzer for `config`. Without an api key every entry gets the fallback analysis.
pub fn create_analyzer(config: &LlmConfig) -> Result<Arc<dyn TextAnalyzer>, AnalyzeError> {
    if config.get_key().is_none() {
        tracing::warn!("no api key for the language model configured, journal analysis will use fallback values");
        return Ok(Arc::new(FallbackAnalyzer));
    }
    Ok(Arc::new(LlmAnalyzer::new(config)?))
}
