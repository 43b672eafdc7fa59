use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// One stored response produced by an external language model.
///
/// Immutable once produced; owned by the external response store. The
/// analytics engine only ever reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseText {
    pub id: String,
    pub provider: String,
    pub model: String,
    pub prompt_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The (provider, model) pair that produced a response.
///
/// Used to partition analysis records when comparing model performance.
/// Serializes as the `provider/model` display string so comparison maps
/// stay plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelKey {
    pub provider: String,
    pub model: String,
}

impl ModelKey {
    /// The key of the model that produced `response`.
    #[must_use]
    pub fn of(response: &ResponseText) -> Self {
        Self {
            provider: response.provider.clone(),
            model: response.model.clone(),
        }
    }
}

impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

impl Serialize for ModelKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
