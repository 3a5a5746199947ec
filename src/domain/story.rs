use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateUrl;

const MAX_FIELD_GRAPHEMES: usize = 256;

/// A story as sent to the create and edit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Story {
    pub fn parse(
        title: String,
        author: String,
        description: String,
        genre: String,
        url: Option<String>,
    ) -> Result<Story, String> {
        let story = Story {
            title: parse_text_field("title", title)?,
            author: parse_text_field("author", author)?,
            description: parse_text_field("description", description)?,
            genre: parse_text_field("genre", genre)?,
            url,
        };
        if let Some(url) = &story.url {
            if !url.validate_url() {
                return Err(format!("{} is not a valid story url.", url));
            }
        }
        Ok(story)
    }
}

fn parse_text_field(field: &str, value: String) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("The story {} must not be empty.", field));
    }
    if value.graphemes(true).count() > MAX_FIELD_GRAPHEMES {
        return Err(format!(
            "The story {} must be at most {} characters long.",
            field, MAX_FIELD_GRAPHEMES
        ));
    }
    Ok(value)
}
