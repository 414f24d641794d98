use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;

use crate::{
    foundation::error::{CityError, CityResult},
    scene::model::ContributionCalendar,
    source::{ContributionSource, github::GraphQlResponse},
};

/// Reads a calendar from a JSON file on disk.
///
/// Accepts either the bare `contributionCalendar` object or a full GraphQL response as
/// saved from the API.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse fixture JSON text.
///
/// An object carrying `data` or `errors` is read as a saved GraphQL response; anything else
/// must be a bare calendar. Well-formed JSON of the wrong shape is upstream data.
pub fn parse_calendar_json(text: &str) -> CityResult<ContributionCalendar> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let is_response = value
        .as_object()
        .is_some_and(|o| o.contains_key("data") || o.contains_key("errors"));
    if is_response {
        let response: GraphQlResponse = serde_json::from_value(value)
            .map_err(|e| CityError::upstream(format!("malformed GraphQL response: {e}")))?;
        response.into_calendar()
    } else {
        serde_json::from_value(value)
            .map_err(|e| CityError::upstream(format!("malformed calendar: {e}")))
    }
}

impl ContributionSource for FixtureSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn fetch_calendar(&self) -> CityResult<ContributionCalendar> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read calendar fixture '{}'", self.path.display()))?;
        let calendar = parse_calendar_json(&text)?;
        info!(
            total = calendar.total_contributions,
            days = calendar.days().count(),
            "loaded contributions"
        );
        Ok(calendar)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/fixture.rs"]
mod tests;
