use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct LlmServices {
    #[arg(
        long,
        env = "REVERIE_AI_KEY",
        hide_env_values = true,
        help = "Api key of the language model. Without it every entry gets the fallback analysis"
    )]
    pub ai_key: Option<String>,

    #[arg(
        long,
        env = "REVERIE_AI_SERVICE",
        default_value = "openai",
        help = "openai, gemini or the base url of an openai compatible api"
    )]
    pub ai_service: String,

    #[arg(long, env = "REVERIE_AI_MODEL")]
    pub ai_model: Option<String>,

    #[arg(long, default_value_t = 30, help = "Timeout for a single analysis request in seconds")]
    pub ai_timeout: u64,

    #[arg(long, help = "Replace moods outside the known set with the fallback mood")]
    pub coerce_unknown_moods: bool,
}
