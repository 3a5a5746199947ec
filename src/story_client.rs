use crate::authentication::AccessToken;
use crate::domain::StoryId;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;

pub const CREATE_STORY_PATH: &str = "/api/Story/Create";
pub const EDIT_STORY_PATH: &str = "/api/Story/Edit";
pub const ALL_STORIES_PATH: &str = "/api/Story/All";
pub const DELETE_STORY_PATH: &str = "/api/Story/Delete";

/// HTTP client for the story endpoints.
///
/// Every request carries the bearer token the client was built with. Status
/// codes are handed back untouched: asserting on them is the caller's job.
#[derive(Clone, Debug)]
pub struct StoryClient {
    base_url: String,
    http_client: Client,
    access_token: AccessToken,
}

impl StoryClient {
    pub fn new(
        base_url: String,
        access_token: AccessToken,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
            access_token,
        })
    }

    #[tracing::instrument(name = "Creating story", skip_all)]
    pub async fn create_story<Body>(&self, body: &Body) -> Result<Response, reqwest::Error>
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}{}", self.base_url, CREATE_STORY_PATH))
            .bearer_auth(self.access_token.expose_secret())
            .json(body)
            .send()
            .await
    }

    #[tracing::instrument(name = "Editing story", skip(self, body))]
    pub async fn edit_story<Body>(
        &self,
        story_id: &StoryId,
        body: &Body,
    ) -> Result<Response, reqwest::Error>
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}{}/{}", self.base_url, EDIT_STORY_PATH, story_id))
            .bearer_auth(self.access_token.expose_secret())
            .json(body)
            .send()
            .await
    }

    #[tracing::instrument(name = "Listing stories", skip_all)]
    pub async fn get_all_stories(&self) -> Result<Response, reqwest::Error> {
        self.http_client
            .get(format!("{}{}", self.base_url, ALL_STORIES_PATH))
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await
    }

    #[tracing::instrument(name = "Deleting story", skip(self))]
    pub async fn delete_story(&self, story_id: &StoryId) -> Result<Response, reqwest::Error> {
        self.http_client
            .delete(format!("{}{}/{}", self.base_url, DELETE_STORY_PATH, story_id))
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await
    }
}
