use std::{
    fs::{read_dir, read_to_string},
    path::PathBuf,
};

use call_tariffs::{pricer::Pricer, record::CallNumber, types::money::Money};
use serde::Deserialize;

/// Totals a test case log is expected to produce.
#[derive(Deserialize)]
pub struct Expected {
    pub total_cost: Money,
    pub most_called: CallNumber,
}

pub struct LogTest {
    pub path: PathBuf,
    pub log: String,
    pub expected: Expected,
}

pub fn collect_log_tests() -> Result<Vec<LogTest>, Box<dyn std::error::Error>> {
    let mut tests = Vec::new();

    for test_dir in read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/resources"))? {
        let test_dir_path = test_dir?.path();

        if !test_dir_path.is_dir() {
            continue;
        }

        let log = read_to_string(test_dir_path.join("log.csv"))?;
        let expected =
            serde_json::from_str(&read_to_string(test_dir_path.join("expected.json"))?)?;

        tests.push(LogTest {
            path: test_dir_path,
            log,
            expected,
        });
    }

    Ok(tests)
}

pub fn validate_log(test: &LogTest) {
    let report = Pricer::new(&test.log).build_report();

    assert_eq!(
        test.expected.total_cost,
        report.total_cost.with_scale(),
        "total_cost"
    );

    assert_eq!(test.expected.most_called, report.most_called, "most_called");
}
