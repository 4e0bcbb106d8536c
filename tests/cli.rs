use clap::Parser;

use space_missions::cli::{execute, Cli, CliError};

const FIXTURE: &str = "tests/fixtures/launches.csv";

fn run(args: &[&str]) -> serde_json::Value {
    let argv = ["space-missions", "--data", FIXTURE].iter().chain(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    serde_json::from_str(&execute(&cli).unwrap()).unwrap()
}

#[test]
fn query_commands_print_json() {
    assert_eq!(run(&["count", "RVSN USSR"]), 4);
    assert_eq!(run(&["success-rate", "SpaceX"]), 66.67);
    assert_eq!(
        run(&["range", "1957-10-01", "1957-12-31"]),
        serde_json::json!(["Sputnik-1", "Sputnik-2", "Vanguard TV3"])
    );
    assert_eq!(run(&["top", "1"]), serde_json::json!([["RVSN USSR", 4]]));
    assert_eq!(run(&["statuses"])["Prelaunch Failure"], 1);
    assert_eq!(run(&["year", "1957"]), 3);
    assert_eq!(run(&["rocket"]), "Falcon 9 Block 5");
    assert_eq!(run(&["average", "1957", "1958"]), 5.5);
}

#[test]
fn malformed_arguments_give_neutral_answers() {
    assert_eq!(run(&["year", "abc"]), 0);
    assert_eq!(run(&["year", "2020.5"]), 0);
    assert_eq!(run(&["top", "3.5"]), serde_json::json!([]));
    assert_eq!(run(&["range", "abc", "xyz"]), serde_json::json!([]));
    assert_eq!(run(&["average", "2020", "2010"]), 0.0);
}

#[test]
fn dashboard_applies_flags() {
    let out = run(&["dashboard", "--from", "1957", "--to", "1957", "--status", "Success"]);
    assert_eq!(out["summary"]["total"], 2);
    assert_eq!(out["summary"]["success_rate_percent"], 100.0);
}

#[test]
fn missing_data_file_is_a_load_error() {
    let cli = Cli::try_parse_from(["space-missions", "--data", "tests/fixtures/nope.csv", "rocket"]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert!(matches!(err, CliError::Load(_)));
    assert!(err.to_string().starts_with("failed to load launch record"));
}

#[test]
fn company_arguments_stay_text_even_when_numeric() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numeric_company.csv");
    std::fs::write(
        &path,
        "Company,Location,Date,Rocket,Mission,RocketStatus,Price,MissionStatus\n\
         1,Site,2001-01-01,R,A,Active,,Success\n\
         1,Site,2001-02-01,R,B,Active,,Failure\n\
         inf,Site,2001-03-01,R,C,Active,,Success\n",
    )
    .unwrap();
    let data = path.to_str().unwrap();

    let run_on = |args: &[&str]| -> serde_json::Value {
        let prefix = ["space-missions", "--data", data];
        let argv = prefix.iter().chain(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        serde_json::from_str(&execute(&cli).unwrap()).unwrap()
    };
    assert_eq!(run_on(&["count", "1"]), 2);
    assert_eq!(run_on(&["success-rate", "1"]), 50.0);
    assert_eq!(run_on(&["count", "inf"]), 1);
}

#[test]
fn range_accepts_year_and_month_bounds() {
    let q4 = serde_json::json!(["Sputnik-1", "Sputnik-2", "Vanguard TV3"]);
    assert_eq!(run(&["range", "1957", "1957-12-31"]), q4);
    assert_eq!(run(&["range", "1957-10", "1957-12-31"]), q4);
}
