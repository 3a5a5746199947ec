mod api_response;
mod story;
mod story_id;

pub use api_response::ApiResponse;
pub use story::Story;
pub use story_id::StoryId;
