use crate::auth::Credential;
use crate::batch::{HTTP_CREATED, RequestOutcome};
use crate::config::Settings;
use crate::github::issues::IssueRecord;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::future::Future;
use std::time::Duration;

pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "issue-seeder";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates one issue per call. Implementations never fail the batch: every
/// problem is reported through the returned [`RequestOutcome`].
pub trait IssueCreator {
    fn create_issue(&self, record: &IssueRecord) -> impl Future<Output = RequestOutcome>;
}

/// Issue creator backed by the GitHub REST v3 API.
#[derive(Debug)]
pub struct GitHubClient {
    client: reqwest::Client,
    credential: Credential,
    endpoint: String,
}

impl GitHubClient {
    pub fn new(credential: Credential, settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(GitHubClient {
            client,
            credential,
            endpoint: settings.repository.issues_endpoint(&settings.api_base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IssueCreator for GitHubClient {
    async fn create_issue(&self, record: &IssueRecord) -> RequestOutcome {
        tracing::debug!(endpoint = %self.endpoint, title = record.title, "creating issue");

        let response = match self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.credential.authorization_header())
            .header(ACCEPT, GITHUB_V3_ACCEPT)
            .json(record)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return RequestOutcome::transport_failure(err.to_string()),
        };

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| err.to_string());
        outcome_from_body(status, body)
    }
}

/// Classifies a response whose body may have failed to arrive.
///
/// A 201 is a created issue even without a readable body.
fn outcome_from_body(status: u16, body: Result<String, String>) -> RequestOutcome {
    match body {
        Ok(text) => RequestOutcome::from_response(status, text),
        Err(err) => {
            tracing::warn!(status, %err, "failed to read response body");
            if status == HTTP_CREATED {
                RequestOutcome::from_response(status, String::new())
            } else {
                RequestOutcome::transport_failure(format!(
                    "HTTP {status}, failed to read response body: {err}"
                ))
            }
        }
    }
}
