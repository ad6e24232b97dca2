use std::fmt;
use thiserror::Error;

/// Repository the user stories are posted to unless overridden.
pub const DEFAULT_REPOSITORY: &str = "kozto/devops-capstone-project";
/// Optional `owner/repo` override.
pub const REPOSITORY_ENV_VAR: &str = "ISSUE_SEEDER_REPOSITORY";
/// Optional REST API base override, as set by GitHub Actions and GHES.
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid repository format '{0}'. Please use <owner>/<repo>.")]
    InvalidRepository(String),
}

/// Owner and name of the target repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parses `owner/repo`. Both parts must be non-empty and contain no further `/`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = value.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ConfigError::InvalidRepository(value.to_string())),
        }
    }

    /// `{api_base}/repos/{owner}/{name}/issues`
    pub fn issues_endpoint(&self, api_base_url: &str) -> String {
        format!("{}/repos/{}/{}/issues", api_base_url, self.owner, self.name)
    }

    /// Browser link to the repository's issue list.
    pub fn issues_page_url(&self) -> String {
        format!("https://github.com/{}/{}/issues", self.owner, self.name)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything a run needs apart from the credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub repository: Repository,
    pub api_base_url: String,
}

impl Settings {
    /// Builds settings from environment lookups, falling back to the defaults.
    ///
    /// Unset and blank variables are treated the same. A trailing `/` on the
    /// API base is dropped so endpoint paths join cleanly.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repository = match non_blank(REPOSITORY_ENV_VAR) {
            Some(value) => Repository::parse(&value)?,
            None => Repository::parse(DEFAULT_REPOSITORY)?,
        };

        let api_base_url = non_blank(API_URL_ENV_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Settings {
            repository,
            api_base_url,
        })
    }
}
