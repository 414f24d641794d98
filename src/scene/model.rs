use crate::foundation::error::{CityError, CityResult};

/// Number of days rendered; the last one is "today".
pub const WINDOW_DAYS: usize = 7;

/// Day of the week, numbered the way the contribution calendar numbers it (0 = Sunday).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_index(index: i64) -> CityResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| CityError::validation(format!("weekday {index} is outside 0..=6")))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter upper-case label.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sunday => "SUN",
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
        }
    }

    pub fn succ(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 7]
    }
}

/// One validated calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    pub weekday: Weekday,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub contribution_count: u32,
}

impl DayRecord {
    /// Validate raw values. Out-of-range values are rejected, never clamped.
    pub fn new(weekday: i64, date: impl Into<String>, contribution_count: i64) -> CityResult<Self> {
        let date = date.into();
        let weekday = Weekday::from_index(weekday)?;
        if contribution_count < 0 {
            return Err(CityError::validation(format!(
                "contribution count {contribution_count} on {date} is negative"
            )));
        }
        let contribution_count = u32::try_from(contribution_count).map_err(|_| {
            CityError::validation(format!(
                "contribution count {contribution_count} on {date} is out of range"
            ))
        })?;
        if !is_iso_date(&date) {
            return Err(CityError::upstream(format!("malformed date '{date}'")));
        }
        Ok(Self {
            weekday,
            date,
            contribution_count,
        })
    }
}

fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits = |r: std::ops::Range<usize>| -> Option<u32> {
        let part = s.get(r)?;
        if !part.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };
    match (digits(0..4), digits(5..7), digits(8..10)) {
        (Some(y), Some(m), Some(d)) => {
            (1..=12).contains(&m) && (1..=days_in_month(y, m)).contains(&d)
        }
        _ => false,
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Contribution calendar as returned by the GitHub GraphQL API.
///
/// Values are kept as raw signed integers so that validation can tell a negative count apart
/// from a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: i64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: i64,
    pub date: String,
    pub weekday: i64,
}

impl ContributionCalendar {
    /// All days in calendar order.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|w| w.contribution_days.iter())
    }
}

/// The seven most recent days plus the all-time total: everything the scene needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContributionWindow {
    total: u64,
    days: [DayRecord; WINDOW_DAYS],
}

impl ContributionWindow {
    /// Build from exactly seven consecutive, oldest-first days.
    pub fn new(total_contributions: i64, days: Vec<DayRecord>) -> CityResult<Self> {
        let total = u64::try_from(total_contributions).map_err(|_| {
            CityError::validation(format!(
                "total contributions {total_contributions} is negative"
            ))
        })?;

        let n = days.len();
        let days: [DayRecord; WINDOW_DAYS] = days.try_into().map_err(|_| {
            CityError::upstream(format!("expected {WINDOW_DAYS} days, got {n}"))
        })?;

        for pair in days.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.date <= prev.date {
                return Err(CityError::upstream(format!(
                    "days are not in chronological order: {} then {}",
                    prev.date, next.date
                )));
            }
            if next.weekday != prev.weekday.succ() {
                return Err(CityError::upstream(format!(
                    "days are not consecutive: {} ({}) then {} ({})",
                    prev.date,
                    prev.weekday.abbrev(),
                    next.date,
                    next.weekday.abbrev()
                )));
            }
        }

        Ok(Self { total, days })
    }

    /// Take the last seven days of a fetched calendar.
    pub fn from_calendar(calendar: &ContributionCalendar) -> CityResult<Self> {
        let all: Vec<&ContributionDay> = calendar.days().collect();
        if all.len() < WINDOW_DAYS {
            return Err(CityError::upstream(format!(
                "calendar has {} days, need at least {WINDOW_DAYS}",
                all.len()
            )));
        }
        let days = all[all.len() - WINDOW_DAYS..]
            .iter()
            .map(|d| DayRecord::new(d.weekday, d.date.clone(), d.contribution_count))
            .collect::<CityResult<Vec<_>>>()?;
        Self::new(calendar.total_contributions, days)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Oldest first.
    pub fn days(&self) -> &[DayRecord; WINDOW_DAYS] {
        &self.days
    }

    pub fn today(&self) -> &DayRecord {
        &self.days[WINDOW_DAYS - 1]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
