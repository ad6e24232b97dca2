use crate::config::Repository;
use crate::github::client::IssueCreator;
use crate::github::issues::{IssueRecord, extract_number_from_created_issue};
use crate::output;
use anyhow::Result;
use std::io::Write;

pub const HTTP_CREATED: u16 = 201;
const RULE_WIDTH: usize = 60;

/// Result of creating a single issue.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    pub success: bool,
    /// `None` when no HTTP response was received.
    pub status_code: Option<u16>,
    pub issue_number: Option<u64>,
    /// Response text, or the transport error message when there was no response.
    pub raw_response_body: Option<String>,
}

impl RequestOutcome {
    /// Classifies an HTTP response. Only `201 Created` counts as success.
    ///
    /// A 201 whose body cannot be parsed is still a success: the issue exists,
    /// we just cannot report its number.
    pub fn from_response(status_code: u16, body: String) -> Self {
        if status_code == HTTP_CREATED {
            let issue_number = match extract_number_from_created_issue(&body) {
                Ok(number) => Some(number),
                Err(err) => {
                    tracing::warn!(%err, "issue created but number unreadable");
                    None
                }
            };
            RequestOutcome {
                success: true,
                status_code: Some(status_code),
                issue_number,
                raw_response_body: Some(body),
            }
        } else {
            RequestOutcome {
                success: false,
                status_code: Some(status_code),
                issue_number: None,
                raw_response_body: Some(body),
            }
        }
    }

    /// Outcome for a request that never produced a response (DNS, connect, timeout).
    pub fn transport_failure(message: String) -> Self {
        RequestOutcome {
            success: false,
            status_code: None,
            issue_number: None,
            raw_response_body: Some(message),
        }
    }
}

/// Final tally of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub total_count: usize,
}

impl BatchSummary {
    pub fn all_created(&self) -> bool {
        self.success_count == self.total_count
    }
}

/// Creates every record in order, one request at a time.
///
/// A failed record is reported and skipped; it never stops the batch. Only a
/// failure to write progress output is returned as an error.
pub async fn run_batch<C>(
    records: &[IssueRecord],
    creator: &C,
    repository: &Repository,
    mut stdout_additional: Option<&mut dyn Write>,
) -> Result<BatchSummary>
where
    C: IssueCreator,
{
    let total_count = records.len();
    let mut success_count = 0;

    output::println(
        &format!("Creating user stories in repository: {repository}"),
        &mut stdout_additional,
    )?;
    output::println(&"=".repeat(RULE_WIDTH), &mut stdout_additional)?;

    for (index, record) in records.iter().enumerate() {
        let outcome = creator.create_issue(record).await;
        for line in describe_outcome(record, &outcome) {
            output::println(&line, &mut stdout_additional)?;
        }

        if outcome.success {
            success_count += 1;
        } else {
            tracing::warn!(
                position = index + 1,
                title = record.title,
                status = ?outcome.status_code,
                "issue creation failed"
            );
        }
    }

    let summary = BatchSummary {
        success_count,
        total_count,
    };

    output::println(&"=".repeat(RULE_WIDTH), &mut stdout_additional)?;
    output::println(
        &format!("Successfully created {success_count} out of {total_count} user stories"),
        &mut stdout_additional,
    )?;
    output::println(
        &format!("View them at: {}", repository.issues_page_url()),
        &mut stdout_additional,
    )?;

    Ok(summary)
}

/// Progress lines for one record.
pub fn describe_outcome(record: &IssueRecord, outcome: &RequestOutcome) -> Vec<String> {
    let body = outcome.raw_response_body.as_deref().unwrap_or_default();
    match (outcome.success, outcome.status_code, outcome.issue_number) {
        (true, _, Some(number)) => vec![format!("✓ Created issue #{number}: {}", record.title)],
        (true, _, None) => vec![format!(
            "✓ Created issue (number unavailable): {}",
            record.title
        )],
        (false, Some(status), _) => vec![
            format!("✗ Failed to create issue: {}", record.title),
            format!("  Status: {status}"),
            format!("  Response: {body}"),
        ],
        (false, None, _) => vec![
            format!("✗ Failed to create issue: {}", record.title),
            format!("  Error: {body}"),
        ],
    }
}
