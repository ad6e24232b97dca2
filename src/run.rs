use crate::auth;
use crate::batch::{self, BatchSummary};
use crate::catalog;
use crate::config;
use crate::github::client::GitHubClient;
use crate::output;
use std::process::ExitCode;

/// How a run ended.
#[derive(Debug, PartialEq)]
pub enum Completion {
    /// The batch ran to the end, whatever the per-issue results.
    Finished(BatchSummary),
    /// Pre-flight failure: no token. Nothing was sent.
    MissingCredential,
    /// Pre-flight failure: bad repository override. Nothing was sent.
    InvalidConfig,
}

impl Completion {
    /// Partial failures still exit 0; only pre-flight failures exit 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Completion::Finished(_) => ExitCode::SUCCESS,
            Completion::MissingCredential | Completion::InvalidConfig => ExitCode::FAILURE,
        }
    }
}

/// Posts the whole catalog. Entry point shared by the binary and the acceptance tests.
///
/// There are no arguments: every invocation runs the full batch.
/// `env` resolves environment variables; the binary passes `std::env::var`.
pub async fn run<F>(
    env: F,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<Completion>
where
    F: Fn(&str) -> Option<String>,
{
    let credential = match auth::load_credential(&env) {
        Ok(credential) => credential,
        Err(err) => {
            tracing::error!(%err, "aborting before any request");
            output::println(auth::SETUP_INSTRUCTIONS, &mut stdout_additional)?;
            return Ok(Completion::MissingCredential);
        }
    };

    let settings = match config::Settings::from_lookup(&env) {
        Ok(settings) => settings,
        Err(err) => {
            output::println(&format!("Error: {err}"), &mut stdout_additional)?;
            return Ok(Completion::InvalidConfig);
        }
    };

    let client = GitHubClient::new(credential, &settings)?;
    tracing::info!(endpoint = client.endpoint(), "posting user stories");

    let summary = batch::run_batch(
        catalog::ISSUES,
        &client,
        &settings.repository,
        stdout_additional,
    )
    .await?;
    Ok(Completion::Finished(summary))
}
