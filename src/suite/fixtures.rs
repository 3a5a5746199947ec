//! Request bodies sent by the checks

use crate::domain::Story;

pub fn new_story() -> Result<Story, String> {
    Story::parse(
        "The Hidden Truth".into(),
        "Jane Doe".into(),
        "Once upon a time... (spoiler removed)".into(),
        "Drama".into(),
        None,
    )
}

pub fn revised_story() -> Result<Story, String> {
    Story::parse(
        "The Hidden Truth - Revised".into(),
        "Jane Doe".into(),
        "Updated story content with new spoilers...".into(),
        "Thriller".into(),
        None,
    )
}

pub fn ghost_story() -> Result<Story, String> {
    Story::parse(
        "Ghost Story".into(),
        "Unknown".into(),
        "This story should not exist".into(),
        "Horror".into(),
        None,
    )
}

/// A create body lacking `title` and `description`.
pub fn incomplete_story() -> serde_json::Value {
    serde_json::json!({
        "author": "John Doe",
        "genre": "Mystery"
    })
}
