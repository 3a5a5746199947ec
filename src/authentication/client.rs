use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

pub const AUTHENTICATION_PATH: &str = "/api/User/Authentication";

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("The authentication endpoint answered with status {status}.")]
    Rejected { status: u16 },
    #[error("The authentication response did not contain an access token.")]
    MissingToken,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// Bearer token handed out by the authentication endpoint.
#[derive(Clone, Debug)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }
}

impl ExposeSecret<String> for AccessToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    http_client: Client,
}

#[derive(serde::Serialize)]
struct AuthenticationRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl AuthClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    #[tracing::instrument(
        name = "Authenticating against the story service",
        skip(self, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        let url = format!("{}{}", self.base_url, AUTHENTICATION_PATH);
        let request_body = AuthenticationRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send the authentication request.")?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Authentication was rejected with status {}", status);
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: AuthenticationResponse = response
            .json()
            .await
            .context("Failed to parse the authentication response as JSON.")?;
        body.access_token
            .filter(|token| !token.is_empty())
            .map(|token| AccessToken::new(Secret::new(token)))
            .ok_or(AuthError::MissingToken)
    }
}
