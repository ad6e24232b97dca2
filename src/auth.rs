use std::fmt;
use thiserror::Error;

/// Environment variable holding the personal access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Printed when no token is available.
pub const SETUP_INSTRUCTIONS: &str = "\
Error: GITHUB_TOKEN environment variable is not set
Please set it with: export GITHUB_TOKEN=your_token_here
Create a token with the 'repo' scope at https://github.com/settings/tokens";

#[derive(Error, Debug, PartialEq)]
pub enum CredentialError {
    #[error("GITHUB_TOKEN environment variable is not set")]
    Missing,
}

/// Personal access token sent as `Authorization: token ...`
#[derive(Clone, PartialEq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, rejecting empty or whitespace-only input.
    pub fn new(token: &str) -> Result<Self, CredentialError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CredentialError::Missing);
        }
        Ok(Credential(token.to_string()))
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Reads the token once through `lookup`, typically `std::env::var`.
pub fn load_credential<F>(lookup: F) -> Result<Credential, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(TOKEN_ENV_VAR)
        .ok_or(CredentialError::Missing)
        .and_then(|token| Credential::new(&token))
}
