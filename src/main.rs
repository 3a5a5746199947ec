use anyhow::Context;
use story_spoiler::configuration::get_configuration;
use story_spoiler::suite::StorySuite;
use story_spoiler::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let subscriber = get_subscriber(
        "story_spoiler".into(),
        configuration.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let suite =
        StorySuite::from_settings(&configuration).context("Failed to build the HTTP clients.")?;
    let report = suite.run().await;

    tracing::info!(
        run_id = %report.run_id,
        passed = report.passed(),
        failed = report.failed(),
        "Story check summary"
    );
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} story checks failed",
            report.failed(),
            report.cases.len()
        );
    }
    Ok(())
}
