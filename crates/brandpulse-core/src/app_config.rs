/// Application configuration loaded from the environment.
///
/// The LLM fields only matter when enrichment is enabled; batch analysis
/// runs fully offline.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub llm_api_key: Option<String>,
    pub llm_base_url: Option<String>,
    pub llm_model: String,
    pub llm_request_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub analytics_max_concurrent: usize,
    pub enrichment_enabled: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "llm_api_key",
                &self.llm_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .field("llm_request_timeout_secs", &self.llm_request_timeout_secs)
            .field("llm_max_retries", &self.llm_max_retries)
            .field("analytics_max_concurrent", &self.analytics_max_concurrent)
            .field("enrichment_enabled", &self.enrichment_enabled)
            .finish()
    }
}
