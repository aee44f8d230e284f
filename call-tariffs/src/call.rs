use chrono::{Duration, NaiveTime};

use crate::record::{CallNumber, CallRecord};
use crate::types::time::{LocalDateTime, MinutesCeil};

/// A single call as seen by the billing calculation.
///
/// This is the one place where the fallback policy for malformed log fields
/// is applied: a record without a parsable destination number is billed to
/// [`CallNumber::UNKNOWN`], a record missing either timestamp has no
/// billable period.
pub(crate) struct Call {
    pub number: CallNumber,
    pub period: Option<CallPeriod>,
}

impl Call {
    pub fn new(record: &CallRecord) -> Self {
        let period = match (record.start, record.end) {
            (Some(start), Some(end)) => Some(CallPeriod { start, end }),
            _ => None,
        };

        Self {
            number: record.number.unwrap_or(CallNumber::UNKNOWN),
            period,
        }
    }
}

/// The wall-clock extent of a call.
pub(crate) struct CallPeriod {
    pub start: LocalDateTime,
    pub end: LocalDateTime,
}

impl CallPeriod {
    /// Signed duration, negative when the end precedes the start.
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Billable length in whole minutes, rounded up.
    pub fn billed_minutes(&self) -> MinutesCeil {
        self.duration().into()
    }

    /// Local time of day the call started at, which selects the base rate.
    pub fn start_time(&self) -> NaiveTime {
        self.start.time()
    }
}

#[cfg(test)]
mod policy_tests {
    use super::Call;
    use crate::record::{parse_log, CallNumber};

    #[test]
    fn unparsable_number_is_billed_to_unknown() {
        let records = parse_log("x0x,13-01-2020 18:10:15,13-01-2020 18:12:57");
        let call = Call::new(&records[0]);

        assert_eq!(call.number, CallNumber::UNKNOWN);
        assert!(call.period.is_some());
    }

    #[test]
    fn missing_timestamp_yields_no_period() {
        let records = parse_log("42,not a date,13-01-2020 18:12:57");
        let call = Call::new(&records[0]);

        assert_eq!(call.number, CallNumber::from(42));
        assert!(call.period.is_none());
    }

    #[test]
    fn period_spans_start_to_end() {
        let records = parse_log("42,13-01-2020 18:10:15,13-01-2020 18:12:57");
        let call = Call::new(&records[0]);

        let period = call.period.unwrap();
        assert_eq!(period.duration().num_seconds(), 162);
        assert_eq!(period.billed_minutes().num_minutes(), 3);
    }
}
