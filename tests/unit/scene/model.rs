use super::*;

fn week(counts: [i64; 7]) -> Vec<DayRecord> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| DayRecord::new(i as i64, format!("2026-10-{:02}", 11 + i), c).unwrap())
        .collect()
}

fn calendar(days: &[(i64, &str, i64)], total: i64) -> ContributionCalendar {
    ContributionCalendar {
        total_contributions: total,
        weeks: days
            .chunks(7)
            .map(|chunk| ContributionWeek {
                contribution_days: chunk
                    .iter()
                    .map(|&(weekday, date, count)| ContributionDay {
                        contribution_count: count,
                        date: date.to_string(),
                        weekday,
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[test]
fn weekday_bounds_are_enforced() {
    assert_eq!(Weekday::from_index(0).unwrap(), Weekday::Sunday);
    assert_eq!(Weekday::from_index(6).unwrap(), Weekday::Saturday);
    assert!(matches!(
        Weekday::from_index(7),
        Err(CityError::InputValidation(_))
    ));
    assert!(matches!(
        Weekday::from_index(-1),
        Err(CityError::InputValidation(_))
    ));
    assert_eq!(Weekday::Saturday.succ(), Weekday::Sunday);
    assert_eq!(Weekday::Wednesday.abbrev(), "WED");
}

#[test]
fn negative_counts_are_rejected_not_clamped() {
    let err = DayRecord::new(1, "2026-10-12", -3).unwrap_err();
    assert!(matches!(err, CityError::InputValidation(_)));
}

#[test]
fn malformed_dates_are_upstream_errors() {
    let shapes = ["2026-1-12", "2026/10/12", "2026-13-01", "2026-10-32", "yesterday", ""];
    let calendar = ["2026-02-29", "2026-02-31", "2026-04-31", "1900-02-29"];
    for bad in shapes.into_iter().chain(calendar) {
        let err = DayRecord::new(1, bad, 0).unwrap_err();
        assert!(matches!(err, CityError::UpstreamData(_)), "{bad}");
    }
}

#[test]
fn leap_days_follow_the_gregorian_rule() {
    assert!(DayRecord::new(0, "2028-02-29", 1).is_ok());
    assert!(DayRecord::new(2, "2000-02-29", 1).is_ok());
    assert!(DayRecord::new(4, "2026-12-31", 1).is_ok());
}

#[test]
fn window_requires_exactly_seven_days() {
    let mut days = week([1, 2, 3, 4, 5, 6, 7]);
    days.pop();
    let err = ContributionWindow::new(10, days).unwrap_err();
    assert!(matches!(err, CityError::UpstreamData(_)));
}

#[test]
fn window_rejects_negative_total() {
    let err = ContributionWindow::new(-1, week([0; 7])).unwrap_err();
    assert!(matches!(err, CityError::InputValidation(_)));
}

#[test]
fn window_rejects_out_of_order_days() {
    let mut days = week([0; 7]);
    days.swap(2, 3);
    let err = ContributionWindow::new(0, days).unwrap_err();
    assert!(matches!(err, CityError::UpstreamData(_)));
}

#[test]
fn window_rejects_weekday_gaps() {
    let mut days = week([0; 7]);
    days[4] = DayRecord::new(5, "2026-10-15", 0).unwrap();
    let err = ContributionWindow::new(0, days).unwrap_err();
    assert!(matches!(err, CityError::UpstreamData(_)));
}

#[test]
fn today_is_the_last_day() {
    let window = ContributionWindow::new(1234, week([0, 3, 0, 12, 5, 0, 20])).unwrap();
    assert_eq!(window.today().contribution_count, 20);
    assert_eq!(window.today().weekday, Weekday::Saturday);
    assert_eq!(window.total(), 1234);
}

#[test]
fn calendar_window_takes_the_last_seven_days() {
    let dates: Vec<String> = (0..10).map(|i| format!("2026-10-{:02}", 8 + i)).collect();
    // 2026-10-08 is a Thursday.
    let days: Vec<(i64, &str, i64)> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| ((i as i64 + 4) % 7, d.as_str(), i as i64))
        .collect();
    let cal = calendar(&days, 45);

    let window = ContributionWindow::from_calendar(&cal).unwrap();
    let counts: Vec<u32> = window.days().iter().map(|d| d.contribution_count).collect();
    assert_eq!(counts, vec![3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(window.days()[0].date, "2026-10-11");
    assert_eq!(window.days()[0].weekday, Weekday::Sunday);
}

#[test]
fn short_calendar_is_an_upstream_error() {
    let cal = calendar(&[(0, "2026-10-11", 1), (1, "2026-10-12", 2)], 3);
    let err = ContributionWindow::from_calendar(&cal).unwrap_err();
    assert!(matches!(err, CityError::UpstreamData(_)));
}

#[test]
fn calendar_parses_graphql_shape() {
    let json = r#"{
        "totalContributions": 5,
        "weeks": [{ "contributionDays": [
            { "contributionCount": 5, "date": "2026-10-11", "weekday": 0 }
        ]}]
    }"#;
    let cal: ContributionCalendar = serde_json::from_str(json).unwrap();
    assert_eq!(cal.total_contributions, 5);
    assert_eq!(cal.days().count(), 1);
}
