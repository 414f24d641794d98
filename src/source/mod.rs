//! Where contribution calendars come from.

use crate::{foundation::error::CityResult, scene::model::ContributionCalendar};

pub(crate) mod fixture;
pub(crate) mod github;

/// A provider of contribution calendars.
///
/// The renderer does not care whether the calendar comes from the network or from disk;
/// it only requires at least seven chronologically ordered days.
pub trait ContributionSource {
    fn fetch_calendar(&self) -> CityResult<ContributionCalendar>;
}
