use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Entries are analyzed by the language model.
    Model,
    /// No key configured, every entry gets the fallback mood and summary.
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub analysis: AnalysisMode,
    pub entry_backend: String,
    pub version: String,
}
