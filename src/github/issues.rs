use serde::{Deserialize, Serialize};

/// Payload for `POST /repos/{owner}/{repo}/issues`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IssueRecord {
    pub title: &'static str,
    pub body: &'static str,
    pub labels: &'static [&'static str],
}

/// The parts of the created-issue response we read.
#[derive(Deserialize, Debug, PartialEq)]
pub struct CreatedIssueResponse {
    /// Repository-scoped issue number.
    pub number: u64,
}

/// Extracts the `number` field from a created-issue JSON response string.
///
/// # Returns
///
/// * `Ok(number)` if parsing succeeds.
/// * `Err(error_message)` if parsing fails.
pub fn extract_number_from_created_issue(json: &str) -> Result<u64, String> {
    serde_json::from_str::<CreatedIssueResponse>(json)
        .map(|issue| issue.number)
        .map_err(|e| format!("Failed to parse created issue response: {e}"))
}
