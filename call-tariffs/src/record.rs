use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::types::time::LocalDateTime;

/// Timestamp pattern used by the log, e.g. `13-01-2020 18:10:15`.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A destination number as it appears in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CallNumber(u64);

impl CallNumber {
    /// The destination that records without a parsable number field are
    /// billed to.
    pub const UNKNOWN: Self = Self(0);
}

impl From<u64> for CallNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for CallNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One row of the call log with every field kept exactly as parsed.
///
/// A `None` field failed to parse. The pricing layer decides how a missing
/// field is billed, the parser itself never fails or drops a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord {
    /// Destination number, `None` if the field is not a non-negative integer.
    pub number: Option<CallNumber>,
    /// Start timestamp, `None` if the field does not match the log pattern.
    pub start: Option<LocalDateTime>,
    /// End timestamp, `None` if the field does not match the log pattern.
    pub end: Option<LocalDateTime>,
}

/// Parse a full call log into records, one per non-empty line, in input
/// order.
///
/// Parsing is lenient: a malformed field becomes `None` in its record and
/// processing continues with the remaining fields and rows. A row with fewer
/// than three fields yields `None` for every missing field, fields beyond
/// the third are ignored. Whitespace is not trimmed, a padded field does not
/// parse.
pub fn parse_log(log: &str) -> Vec<CallRecord> {
    log.split('\n')
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> CallRecord {
    let mut fields = line.split(',');

    let number = fields
        .next()
        .and_then(|field| field.parse::<u64>().ok())
        .map(CallNumber);
    let start = fields.next().and_then(parse_timestamp);
    let end = fields.next().and_then(parse_timestamp);

    CallRecord { number, start, end }
}

fn parse_timestamp(field: &str) -> Option<LocalDateTime> {
    LocalDateTime::parse_from_str(field, TIMESTAMP_FORMAT).ok()
}
