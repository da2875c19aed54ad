use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),

    #[error(transparent)]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("No response from the language model")]
    EmptyResponse,

    #[error("The language model answered an empty {0}")]
    Malformed(&'static str),
}
