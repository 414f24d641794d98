use std::{fmt, time::Duration};

use tracing::info;

use crate::{
    foundation::error::{CityError, CityResult},
    scene::model::ContributionCalendar,
    source::ContributionSource,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const USER_AGENT: &str = "contribution-city-generator";

const CALENDAR_QUERY: &str = "\
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
            weekday
          }
        }
      }
    }
  }
}";

/// Raw GraphQL envelope.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ResponseData {
    pub user: Option<UserNode>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlResponse {
    /// Unwrap the calendar, surfacing an explicit `errors` payload or a missing user.
    pub fn into_calendar(self) -> CityResult<ContributionCalendar> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CityError::upstream(format!("GraphQL errors: {joined}")));
        }
        let user = self
            .data
            .ok_or_else(|| CityError::upstream("GraphQL response has no data"))?
            .user
            .ok_or_else(|| CityError::upstream("GraphQL response has no such user"))?;
        Ok(user.contributions_collection.contribution_calendar)
    }
}

/// Fetches the calendar from the GitHub GraphQL API.
#[derive(Clone)]
pub struct GithubSource {
    pub endpoint: String,
    pub user: String,
    token: String,
    pub timeout: Duration,
}

impl GithubSource {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user: user.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "query": CALENDAR_QUERY,
            "variables": { "username": self.user },
        })
    }
}

impl fmt::Debug for GithubSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubSource")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ContributionSource for GithubSource {
    #[tracing::instrument(skip(self), fields(user = %self.user))]
    fn fetch_calendar(&self) -> CityResult<ContributionCalendar> {
        info!(endpoint = %self.endpoint, "fetching contributions");

        let agent = ureq::AgentBuilder::new()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build();
        let response = match agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.token))
            .send_json(self.request_body())
        {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                let body = r.into_string().unwrap_or_default();
                return Err(CityError::upstream(format!(
                    "GitHub returned HTTP {code}: {}",
                    body.trim()
                )));
            }
            Err(e) => {
                return Err(CityError::Other(
                    anyhow::Error::new(e).context("request contribution calendar"),
                ));
            }
        };

        let envelope: GraphQlResponse = response
            .into_json()
            .map_err(|e| CityError::upstream(format!("malformed GraphQL response: {e}")))?;
        let calendar = envelope.into_calendar()?;
        info!(
            total = calendar.total_contributions,
            days = calendar.days().count(),
            "fetched contributions"
        );
        Ok(calendar)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/github.rs"]
mod tests;
