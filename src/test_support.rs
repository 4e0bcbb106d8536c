use chrono::NaiveDate;

use crate::types::{LaunchRecord, LaunchTable, MissionStatus};

pub(crate) fn launch(
    company: &str,
    date: Option<&str>,
    rocket: &str,
    mission: &str,
    rocket_status: &str,
    status: &str,
) -> LaunchRecord {
    LaunchRecord::new(
        company,
        "Test Site",
        date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("valid test date")),
        None,
        rocket,
        mission,
        rocket_status,
        None,
        MissionStatus::parse(status),
    )
}

/// Eleven launches: four companies, one undated record, two launches sharing a date, and a
/// record (Sputnik-3 #1) that sits after a later-dated one in table order.
pub(crate) fn sample_table() -> LaunchTable {
    LaunchTable::new(vec![
        launch("RVSN USSR", Some("1957-10-04"), "Sputnik 8K71PS", "Sputnik-1", "Retired", "Success"),
        launch("RVSN USSR", Some("1957-11-03"), "Sputnik 8K71PS", "Sputnik-2", "Retired", "Success"),
        launch("US Navy", Some("1957-12-06"), "Vanguard", "Vanguard TV3", "Retired", "Failure"),
        launch("US Navy", Some("1958-03-17"), "Vanguard", "Vanguard 1", "Retired", "Success"),
        launch("US Navy", Some("1958-04-29"), "Vanguard", "Vanguard TV5", "Retired", "Failure"),
        launch("RVSN USSR", Some("1958-05-15"), "Sputnik 8A91", "Sputnik-3", "Retired", "Success"),
        launch("RVSN USSR", Some("1958-04-27"), "Sputnik 8A91", "Sputnik-3 #1", "Retired", "Partial Failure"),
        launch("NASA", Some("1958-10-11"), "Thor-Able I", "Pioneer 1", "Retired", "Success"),
        launch("NASA", None, "Delta II", "Undated Demo", "Retired", "Success"),
        launch("SpaceX", Some("2020-05-30"), "Falcon 9 Block 5", "Crew Dragon Demo-2", "Active", "Success"),
        launch("SpaceX", Some("2020-05-30"), "Falcon 9 Block 5", "Starlink V1 L7", "Active", "Success"),
    ])
}
