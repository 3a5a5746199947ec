use serde::{Deserialize, Deserializer};

/// Server-assigned story identifier.
///
/// The service may send it as a JSON string or a JSON number; both map to
/// the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryId(String);

impl StoryId {
    pub fn parse(s: String) -> Result<StoryId, String> {
        if s.trim().is_empty() {
            Err("A story id must not be empty.".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Integers are stringified directly, never through `f64`, so large
        // ids survive unchanged. Fractional numbers match no variant.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawStoryId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        let raw = match RawStoryId::deserialize(deserializer)? {
            RawStoryId::Text(id) => id,
            RawStoryId::Unsigned(id) => id.to_string(),
            RawStoryId::Signed(id) => id.to_string(),
        };
        StoryId::parse(raw).map_err(serde::de::Error::custom)
    }
}

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
