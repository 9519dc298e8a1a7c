use serde::{Deserialize, Serialize};

/// Shape of a payload, independent of which protocol carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Structured,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Structured => write!(f, "structured"),
        }
    }
}

/// Content mode a skill declares as accepted or produced.
///
/// Attached to the agent card for documentation; the executors trust the
/// registry entry rather than re-deriving capabilities from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentMode {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "application/json")]
    StructuredJson,
}

impl ContentMode {
    #[must_use]
    pub fn kind(self) -> ContentKind {
        match self {
            Self::TextPlain => ContentKind::Text,
            Self::StructuredJson => ContentKind::Structured,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextPlain => "text/plain",
            Self::StructuredJson => "application/json",
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized argument handed to a skill after routing and projection.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillInput {
    Text(String),
    Structured(serde_json::Value),
}

/// Value a skill produced, before protocol-specific wrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillOutput {
    Text(String),
    Structured(serde_json::Value),
}

impl SkillOutput {
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Structured(_) => ContentKind::Structured,
        }
    }

    /// Flatten into a JSON value; text becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        match self {
            Self::Text(s) => serde_json::Value::String(s),
            Self::Structured(v) => v,
        }
    }

    /// Flatten into text; structured results are serialized.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Structured(v) => serde_json::to_string(&v).unwrap_or_default(),
        }
    }
}
