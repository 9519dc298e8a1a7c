use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use greenstack_core::DEFAULT_SKILL_ID;

/// Reserved metadata key naming the target skill.
pub const METADATA_SKILL_ID: &str = "skill_id";
/// Reserved metadata key carrying the error message on failure responses.
pub const METADATA_ERROR: &str = "error";

/// Declared kind of an envelope payload. Kinds outside `text`/`json` are
/// preserved verbatim so the executor can report them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Text,
    Json,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub content: serde_json::Value,
}

impl MessageContent {
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            content: serde_json::Value::String(body.into()),
        }
    }

    #[must_use]
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            kind: PayloadKind::Json,
            content: body,
        }
    }
}

/// Self-contained message: id, typed content, string metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Envelope {
    /// New envelope with a freshly generated id.
    #[must_use]
    pub fn new(content: MessageContent, metadata: HashMap<String, String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            metadata,
        }
    }

    /// Target skill id; the default entry when the key is absent.
    #[must_use]
    pub fn skill_id(&self) -> &str {
        self.metadata
            .get(METADATA_SKILL_ID)
            .map_or(DEFAULT_SKILL_ID, String::as_str)
    }

    /// Success response carrying the resolved skill id.
    #[must_use]
    pub fn success(content: MessageContent, skill_id: &str) -> Self {
        Self::new(
            content,
            HashMap::from([(METADATA_SKILL_ID.to_owned(), skill_id.to_owned())]),
        )
    }

    /// Text-kind error response; payload and metadata carry the same message.
    #[must_use]
    pub fn error_text(message: &str) -> Self {
        let payload = serde_json::json!({ "error": message });
        Self::new(
            MessageContent::text(serde_json::to_string(&payload).unwrap_or_default()),
            HashMap::from([(METADATA_ERROR.to_owned(), message.to_owned())]),
        )
    }

    /// Json-kind error response; payload and metadata carry the same message.
    #[must_use]
    pub fn error_json(message: &str) -> Self {
        Self::new(
            MessageContent::json(serde_json::json!({ "error": message })),
            HashMap::from([(METADATA_ERROR.to_owned(), message.to_owned())]),
        )
    }
}
