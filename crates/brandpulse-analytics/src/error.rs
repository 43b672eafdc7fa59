use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("mention pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
