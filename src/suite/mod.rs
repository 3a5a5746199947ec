mod cases;
pub mod constants;
mod failure;
pub mod fixtures;
mod report;
mod state;

pub use cases::{StoryCase, SuiteContext};
pub use failure::CaseFailure;
pub use report::{CaseOutcome, CaseReport, SuiteReport};
pub use state::{SuiteEvent, SuiteState};

use anyhow::Context;
use tracing::Instrument;
use uuid::Uuid;

use crate::authentication::{AuthClient, AuthError, Credentials};
use crate::configuration::Settings;
use crate::story_client::StoryClient;

/// Runs the ordered story checks against one server.
///
/// Authentication happens once, at the start of [`StorySuite::run`]; the
/// resulting client lives for exactly one run.
#[derive(Debug)]
pub struct StorySuite {
    base_url: String,
    credentials: Credentials,
    timeout: std::time::Duration,
    auth_client: AuthClient,
}

impl StorySuite {
    pub fn new(
        base_url: String,
        credentials: Credentials,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let auth_client = AuthClient::new(base_url.clone(), timeout)?;
        Ok(Self {
            base_url,
            credentials,
            timeout,
            auth_client,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.api.base_url.clone(),
            settings.credentials.credentials(),
            settings.api.timeout(),
        )
    }

    /// Authenticates and builds the context the checks share.
    pub async fn setup(&self) -> Result<SuiteContext, AuthError> {
        let access_token = self.auth_client.authenticate(&self.credentials).await?;
        let client = StoryClient::new(self.base_url.clone(), access_token, self.timeout)
            .context("Failed to build the story client.")?;
        let mut context = SuiteContext::new(client);
        context.advance(SuiteEvent::Authenticated);
        Ok(context)
    }

    #[tracing::instrument(
        name = "Running story checks",
        skip(self),
        fields(base_url = %self.base_url, run_id = tracing::field::Empty)
    )]
    pub async fn run(self) -> SuiteReport {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        let mut context = match self.setup().await {
            Ok(context) => context,
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    "Authentication failed, skipping all checks"
                );
                return SuiteReport::authentication_failed(run_id, &e);
            }
        };

        let mut cases = Vec::with_capacity(StoryCase::ALL.len());
        for case in StoryCase::ALL {
            let outcome: CaseOutcome = case
                .run(&mut context)
                .instrument(tracing::info_span!("Running check", case = case.name()))
                .await
                .into();
            match outcome.failure() {
                None => tracing::info!(case = case.name(), "Check passed"),
                Some(failure) => tracing::error!(
                    case = case.name(),
                    status = ?failure.status_code(),
                    error.cause_chain = ?failure,
                    "Check failed: {}",
                    failure
                ),
            }
            cases.push(CaseReport { case, outcome });
        }

        let final_state = context.state();
        if !final_state.is_terminal() {
            tracing::warn!(
                ?final_state,
                story_id = ?context.story_id(),
                "Story checks ended without a delete attempt"
            );
        }
        // Dropping the context releases the authenticated client.
        drop(context);
        tracing::info!(?final_state, "Story checks finished");

        SuiteReport {
            run_id,
            cases,
            final_state,
        }
    }
}
