use crate::domain::StoryId;
use serde::Deserialize;

/// Envelope returned by the story endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub msg: Option<String>,
    // `story` is an older spelling of the same field. A body carrying both
    // keys is rejected as a duplicate field.
    #[serde(default, rename = "storyId", alias = "story")]
    pub story_id: Option<StoryId>,
}
