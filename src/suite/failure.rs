use anyhow::Context;
use reqwest::{Response, StatusCode};

use crate::domain::ApiResponse;

/// Why a single check did not pass.
#[derive(thiserror::Error, Debug)]
pub enum CaseFailure {
    #[error("Expected status {expected}, got {actual}.")]
    UnexpectedStatus { expected: u16, actual: u16 },
    #[error("Expected message {expected:?}, got {actual:?}.")]
    UnexpectedMessage {
        expected: &'static str,
        actual: Option<String>,
    },
    #[error("The create response did not contain a story id.")]
    StoryIdNotReturned,
    #[error("No story id was recorded by the create check.")]
    MissingStoryId,
    #[error("Expected at least one story in the listing.")]
    EmptyListing,
    #[error("The request body is invalid: {0}")]
    InvalidRequestBody(String),
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("The request could not be completed.")]
    Request(#[from] reqwest::Error),
    #[error("The response payload was malformed.")]
    Payload(#[source] anyhow::Error),
}

impl CaseFailure {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CaseFailure::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

pub fn expect_status(response: &Response, expected: StatusCode) -> Result<(), CaseFailure> {
    let actual = response.status();
    if actual == expected {
        Ok(())
    } else {
        Err(CaseFailure::UnexpectedStatus {
            expected: expected.as_u16(),
            actual: actual.as_u16(),
        })
    }
}

pub async fn parse_api_response(response: Response) -> Result<ApiResponse, CaseFailure> {
    response
        .json::<ApiResponse>()
        .await
        .context("Failed to parse the response body as an API response.")
        .map_err(CaseFailure::Payload)
}

pub async fn expect_message(
    response: Response,
    expected: &'static str,
) -> Result<(), CaseFailure> {
    let body = parse_api_response(response).await?;
    if body.msg.as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(CaseFailure::UnexpectedMessage {
            expected,
            actual: body.msg,
        })
    }
}
