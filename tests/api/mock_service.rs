//! In-process stand-in for the story service, answering the way the demo
//! deployment does, negative paths included.

use crate::test_data::{CREATED_STORY_ID, TEST_PASSWORD, TEST_TOKEN, TEST_USERNAME};
use story_spoiler::suite::constants::{
    MSG_DELETED_SUCCESSFULLY, MSG_NO_SPOILERS, MSG_SUCCESSFULLY_EDITED, MSG_UNABLE_TO_DELETE,
};
use wiremock::matchers::{any, bearer_token, body_json, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

// Lower numbers win when several mocks match. Tests override the contract
// by mounting their own mocks with priority 1.
const SPECIFIC: u8 = 5;
const FALLBACK: u8 = 10;
const UNAUTHORIZED: u8 = 20;

/// Matches story bodies carrying every required field.
pub struct CompleteStoryBody;

impl wiremock::Match for CompleteStoryBody {
    fn matches(&self, request: &Request) -> bool {
        let result: Result<serde_json::Value, _> = serde_json::from_slice(&request.body);
        if let Ok(body) = result {
            ["title", "author", "description", "genre"]
                .iter()
                .all(|field| body.get(field).and_then(|v| v.as_str()).is_some())
        } else {
            false
        }
    }
}

pub struct MockStoryService {
    pub server: MockServer,
}

impl MockStoryService {
    /// Starts a server implementing the whole contract.
    pub async fn start() -> Self {
        let service = Self::start_bare().await;
        service.mount_authentication().await;
        service.mount_story_contract().await;
        service
    }

    /// Starts a server without any mocks mounted.
    pub async fn start_bare() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub async fn mount_authentication(&self) {
        Mock::given(method("POST"))
            .and(path("/api/User/Authentication"))
            .and(body_json(serde_json::json!({
                "username": TEST_USERNAME,
                "password": TEST_PASSWORD,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "username": TEST_USERNAME,
                    "accessToken": TEST_TOKEN,
                })),
            )
            .with_priority(SPECIFIC)
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/User/Authentication"))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(FALLBACK)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_story_contract(&self) {
        let created_story_path = |prefix: &str| format!("{}/{}", prefix, CREATED_STORY_ID);

        // Create
        Mock::given(method("POST"))
            .and(path("/api/Story/Create"))
            .and(bearer_token(TEST_TOKEN))
            .and(CompleteStoryBody)
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "msg": "Successfully created!",
                "storyId": CREATED_STORY_ID,
            })))
            .with_priority(SPECIFIC)
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/Story/Create"))
            .and(bearer_token(TEST_TOKEN))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errors": { "Title": ["The Title field is required."] }
            })))
            .with_priority(FALLBACK)
            .mount(&self.server)
            .await;

        // Edit
        Mock::given(method("PUT"))
            .and(path(created_story_path("/api/Story/Edit")))
            .and(bearer_token(TEST_TOKEN))
            .and(CompleteStoryBody)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "msg": MSG_SUCCESSFULLY_EDITED })),
            )
            .with_priority(SPECIFIC)
            .mount(&self.server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/api/Story/Edit/[^/]+$"))
            .and(bearer_token(TEST_TOKEN))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "msg": MSG_NO_SPOILERS })),
            )
            .with_priority(FALLBACK)
            .mount(&self.server)
            .await;

        // List
        Mock::given(method("GET"))
            .and(path("/api/Story/All"))
            .and(bearer_token(TEST_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": CREATED_STORY_ID,
                "title": "The Hidden Truth",
                "author": "Jane Doe",
                "description": "Once upon a time... (spoiler removed)",
                "genre": "Drama",
                "url": ""
            }])))
            .with_priority(SPECIFIC)
            .mount(&self.server)
            .await;

        // Delete
        Mock::given(method("DELETE"))
            .and(path(created_story_path("/api/Story/Delete")))
            .and(bearer_token(TEST_TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "msg": MSG_DELETED_SUCCESSFULLY })),
            )
            .with_priority(SPECIFIC)
            .mount(&self.server)
            .await;
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/Story/Delete/[^/]+$"))
            .and(bearer_token(TEST_TOKEN))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "msg": MSG_UNABLE_TO_DELETE })),
            )
            .with_priority(FALLBACK)
            .mount(&self.server)
            .await;

        // Anything else, e.g. a story request without the bearer token
        Mock::given(any())
            .respond_with(ResponseTemplate::new(401))
            .with_priority(UNAUTHORIZED)
            .mount(&self.server)
            .await;
    }
}
