use anyhow::Context;
use reqwest::StatusCode;

use super::constants::{
    MSG_DELETED_SUCCESSFULLY, MSG_NO_SPOILERS, MSG_SUCCESSFULLY_EDITED, MSG_UNABLE_TO_DELETE,
    NON_EXISTING_DELETE_ID, NON_EXISTING_EDIT_ID,
};
use super::failure::{CaseFailure, expect_message, expect_status, parse_api_response};
use super::fixtures;
use super::state::{SuiteEvent, SuiteState};
use crate::domain::StoryId;
use crate::story_client::StoryClient;

/// State shared by the checks of one run.
///
/// The story id is written by the create check and read, unmodified, by the
/// edit and delete checks.
#[derive(Debug)]
pub struct SuiteContext {
    client: StoryClient,
    story_id: Option<StoryId>,
    state: SuiteState,
}

impl SuiteContext {
    pub fn new(client: StoryClient) -> Self {
        Self {
            client,
            story_id: None,
            state: SuiteState::Unauthenticated,
        }
    }

    pub fn story_id(&self) -> Option<&StoryId> {
        self.story_id.as_ref()
    }

    pub fn state(&self) -> SuiteState {
        self.state
    }

    pub fn advance(&mut self, event: SuiteEvent) {
        self.state = self.state.advance(event);
    }

    fn require_story_id(&self) -> Result<StoryId, CaseFailure> {
        self.story_id.clone().ok_or(CaseFailure::MissingStoryId)
    }
}

/// The ordered checks. Later checks depend on what earlier ones recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryCase {
    CreateStory,
    EditStory,
    GetAllStories,
    DeleteStory,
    CreateStoryWithoutRequiredFields,
    EditNonExistingStory,
    DeleteNonExistingStory,
}

impl StoryCase {
    pub const ALL: [StoryCase; 7] = [
        StoryCase::CreateStory,
        StoryCase::EditStory,
        StoryCase::GetAllStories,
        StoryCase::DeleteStory,
        StoryCase::CreateStoryWithoutRequiredFields,
        StoryCase::EditNonExistingStory,
        StoryCase::DeleteNonExistingStory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StoryCase::CreateStory => "create_story_returns_201_and_story_id",
            StoryCase::EditStory => "edit_story_returns_200_and_success_message",
            StoryCase::GetAllStories => "get_all_stories_returns_200_and_non_empty_array",
            StoryCase::DeleteStory => "delete_story_returns_200_and_success_message",
            StoryCase::CreateStoryWithoutRequiredFields => {
                "create_story_without_required_fields_returns_400"
            }
            StoryCase::EditNonExistingStory => "edit_non_existing_story_returns_404",
            StoryCase::DeleteNonExistingStory => "delete_non_existing_story_returns_400",
        }
    }

    pub async fn run(self, context: &mut SuiteContext) -> Result<(), CaseFailure> {
        match self {
            StoryCase::CreateStory => create_story(context).await,
            StoryCase::EditStory => edit_story(context).await,
            StoryCase::GetAllStories => get_all_stories(context).await,
            StoryCase::DeleteStory => delete_story(context).await,
            StoryCase::CreateStoryWithoutRequiredFields => {
                create_story_without_required_fields(context).await
            }
            StoryCase::EditNonExistingStory => edit_non_existing_story(context).await,
            StoryCase::DeleteNonExistingStory => delete_non_existing_story(context).await,
        }
    }
}

impl std::fmt::Display for StoryCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

async fn create_story(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let story = fixtures::new_story().map_err(CaseFailure::InvalidRequestBody)?;
    let response = context.client.create_story(&story).await?;
    expect_status(&response, StatusCode::CREATED)?;
    let story_id = parse_api_response(response)
        .await?
        .story_id
        .ok_or(CaseFailure::StoryIdNotReturned)?;
    tracing::info!(%story_id, "Story created");
    context.story_id = Some(story_id);
    context.advance(SuiteEvent::StoryCreated);
    Ok(())
}

async fn edit_story(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let story_id = context.require_story_id()?;
    let story = fixtures::revised_story().map_err(CaseFailure::InvalidRequestBody)?;
    let response = context.client.edit_story(&story_id, &story).await?;
    expect_status(&response, StatusCode::OK)?;
    expect_message(response, MSG_SUCCESSFULLY_EDITED).await?;
    context.advance(SuiteEvent::StoryEdited);
    Ok(())
}

async fn get_all_stories(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let response = context.client.get_all_stories().await?;
    expect_status(&response, StatusCode::OK)?;
    let stories: Vec<serde_json::Value> = response
        .json()
        .await
        .context("Failed to parse the story listing as a JSON array.")
        .map_err(CaseFailure::Payload)?;
    if stories.is_empty() {
        return Err(CaseFailure::EmptyListing);
    }
    tracing::info!(count = stories.len(), "Stories listed");
    Ok(())
}

async fn delete_story(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let story_id = context.require_story_id()?;
    let outcome: Result<(), CaseFailure> = async {
        let response = context.client.delete_story(&story_id).await?;
        expect_status(&response, StatusCode::OK)?;
        expect_message(response, MSG_DELETED_SUCCESSFULLY).await
    }
    .await;
    context.advance(match outcome {
        Ok(()) => SuiteEvent::StoryDeleted,
        Err(_) => SuiteEvent::StoryDeletionFailed,
    });
    outcome
}

async fn create_story_without_required_fields(
    context: &mut SuiteContext,
) -> Result<(), CaseFailure> {
    let response = context
        .client
        .create_story(&fixtures::incomplete_story())
        .await?;
    expect_status(&response, StatusCode::BAD_REQUEST)
}

async fn edit_non_existing_story(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let story = fixtures::ghost_story().map_err(CaseFailure::InvalidRequestBody)?;
    let response = context
        .client
        .edit_story(&StoryId::from(NON_EXISTING_EDIT_ID), &story)
        .await?;
    expect_status(&response, StatusCode::NOT_FOUND)?;
    expect_message(response, MSG_NO_SPOILERS).await
}

async fn delete_non_existing_story(context: &mut SuiteContext) -> Result<(), CaseFailure> {
    let response = context
        .client
        .delete_story(&StoryId::from(NON_EXISTING_DELETE_ID))
        .await?;
    expect_status(&response, StatusCode::BAD_REQUEST)?;
    expect_message(response, MSG_UNABLE_TO_DELETE).await
}
