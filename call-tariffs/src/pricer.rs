use chrono::Duration;
use serde::Serialize;

use crate::{
    call::Call,
    frequency,
    record::{self, CallNumber, CallRecord},
    tariff::Tariff,
    types::{money::Money, time::LocalDateTime},
};

/// Pricer that encapsulates a parsed call log and a rate table. To run the
/// pricer call `build_report`. The resulting report contains the total and a
/// breakdown of the calculation per call.
///
/// Either price a log with the built-in tariff:
/// ```
/// use call_tariffs::pricer::Pricer;
///
/// let report = Pricer::new("420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57").build_report();
/// assert!(report.calls[0].exempted);
/// ```
///
/// Or provide a custom rate table:
/// ```
/// use call_tariffs::{pricer::Pricer, tariff::Tariff};
/// use rust_decimal_macros::dec;
///
/// let log = "101,13-01-2020 18:00:00,13-01-2020 18:02:00\n\
///            202,13-01-2020 19:00:00,13-01-2020 19:02:00";
///
/// let tariff = Tariff {
///     off_peak_rate: dec!(1.0).into(),
///     ..Tariff::default()
/// };
///
/// // 101 and 202 tie on occurrence count, the larger number is exempted.
/// let report = Pricer::with_tariff(log, tariff).build_report();
/// assert_eq!(report.total_cost.to_string(), "2.00");
/// ```
pub struct Pricer {
    records: Vec<CallRecord>,
    tariff: Tariff,
}

impl Pricer {
    /// Parse `phone_log` and prepare pricing with the built-in tariff.
    #[must_use]
    pub fn new(phone_log: &str) -> Self {
        Self::with_tariff(phone_log, Tariff::default())
    }

    /// Parse `phone_log` and prepare pricing with a custom rate table.
    #[must_use]
    pub fn with_tariff(phone_log: &str, tariff: Tariff) -> Self {
        Self {
            records: record::parse_log(phone_log),
            tariff,
        }
    }

    /// Price every call and build a report containing the total and a
    /// per-call breakdown.
    ///
    /// The most-called destination is determined once over the whole log.
    /// Every call to it is exempted and contributes zero to the total, all
    /// other calls are priced by the tariff and summed with exact decimal
    /// addition. An empty log totals to zero.
    #[must_use]
    pub fn build_report(&self) -> Report {
        let calls: Vec<Call> = self.records.iter().map(Call::new).collect();
        let most_called = frequency::most_called(&calls);

        let mut total_cost = Money::zero();
        let mut total_billed_minutes = 0;
        let mut call_reports = Vec::with_capacity(calls.len());

        for (record, call) in self.records.iter().zip(&calls) {
            let minutes = call
                .period
                .as_ref()
                .map(|period| period.billed_minutes().num_minutes())
                .unwrap_or(0);

            let exempted = call.number == most_called;

            let cost = if exempted {
                Money::zero()
            } else {
                total_billed_minutes += minutes;
                self.tariff.call_cost(call)
            };

            total_cost += cost;

            call_reports.push(CallReport {
                number: call.number,
                start: record.start,
                end: record.end,
                minutes,
                cost,
                exempted,
                warnings: CallWarnings::new(record, call),
            });
        }

        Report {
            total_cost,
            most_called,
            total_billed_minutes,
            calls: call_reports,
        }
    }
}

/// The call log priced according to the tariff.
#[derive(Serialize)]
pub struct Report {
    /// Sum of the cost of every non-exempt call.
    pub total_cost: Money,
    /// The destination that was exempted from billing.
    pub most_called: CallNumber,
    /// Sum of the whole-minute lengths of all non-exempt calls.
    pub total_billed_minutes: u64,
    /// Per-call details, in log order.
    pub calls: Vec<CallReport>,
}

/// Billing details of a single call.
#[derive(Serialize)]
pub struct CallReport {
    /// Destination the call was billed to.
    pub number: CallNumber,
    /// Start timestamp as parsed from the log.
    pub start: Option<LocalDateTime>,
    /// End timestamp as parsed from the log.
    pub end: Option<LocalDateTime>,
    /// Length of the call in whole minutes, rounded up. Zero when the record
    /// has no valid period.
    pub minutes: u64,
    /// Cost charged for this call, zero when exempted.
    pub cost: Money,
    /// Whether this call was free because it went to the most-called
    /// destination.
    pub exempted: bool,
    /// Conditions observed while parsing and pricing this record.
    pub warnings: CallWarnings,
}

/// Conditions that degraded a record to fallback values instead of failing
/// the calculation.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct CallWarnings {
    /// The number field did not parse, the call was billed to destination 0.
    pub invalid_number: bool,
    /// The start timestamp did not parse, the call priced to zero.
    pub invalid_start: bool,
    /// The end timestamp did not parse, the call priced to zero.
    pub invalid_end: bool,
    /// The end precedes the start, the call priced to zero.
    pub negative_duration: bool,
}

impl CallWarnings {
    fn new(record: &CallRecord, call: &Call) -> Self {
        Self {
            invalid_number: record.number.is_none(),
            invalid_start: record.start.is_none(),
            invalid_end: record.end.is_none(),
            negative_duration: call
                .period
                .as_ref()
                .is_some_and(|period| period.duration() < Duration::zero()),
        }
    }

    /// Whether any condition was observed for this record.
    #[must_use]
    pub fn any(&self) -> bool {
        self.invalid_number || self.invalid_start || self.invalid_end || self.negative_duration
    }
}
