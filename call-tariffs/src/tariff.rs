use chrono::NaiveTime;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::types::{money::Money, number::Number};

/// The rate table applied to every priced call.
///
/// The built-in tariff ([`Tariff::default`]) bills peak minutes at 1.0,
/// off-peak minutes at 0.5 and every minute after the fifth at a flat 0.2,
/// with the peak window spanning 08:00 (inclusive) to 16:00 (exclusive).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tariff {
    /// Per-minute rate for calls starting inside the peak window.
    pub peak_rate: Money,
    /// Per-minute rate for calls starting outside the peak window.
    pub off_peak_rate: Money,
    /// Flat per-minute rate for every minute beyond `reduced_after`, no
    /// matter which window the call started in.
    pub reduced_rate: Money,
    /// Amount of minutes billed at the base rate before `reduced_rate`
    /// applies.
    pub reduced_after: u64,
    /// Start of the peak window, inclusive.
    pub peak_start: NaiveTime,
    /// End of the peak window, exclusive.
    pub peak_end: NaiveTime,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            peak_rate: dec!(1.0).into(),
            off_peak_rate: dec!(0.5).into(),
            reduced_rate: dec!(0.2).into(),
            reduced_after: 5,
            peak_start: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
            peak_end: NaiveTime::from_hms_opt(16, 0, 0).expect("valid time"),
        }
    }
}

impl Tariff {
    /// Price a single call.
    ///
    /// The call is billed in whole minutes, rounded up. The first
    /// `reduced_after` minutes cost the base rate selected by the start
    /// instant, the remainder costs `reduced_rate`. A call missing either
    /// timestamp prices to zero, as does one whose end precedes its start.
    pub(crate) fn call_cost(&self, call: &Call) -> Money {
        let Some(period) = &call.period else {
            return Money::zero();
        };

        let minutes = period.billed_minutes().num_minutes();
        let base_rate = self.base_rate(period.start_time());

        if minutes > self.reduced_after {
            base_rate * Number::from(self.reduced_after)
                + self.reduced_rate * Number::from(minutes - self.reduced_after)
        } else {
            base_rate * Number::from(minutes)
        }
    }

    /// The per-minute rate the given start instant falls under.
    fn base_rate(&self, start: NaiveTime) -> Money {
        if start >= self.peak_start && start < self.peak_end {
            self.peak_rate
        } else {
            self.off_peak_rate
        }
    }
}

#[cfg(test)]
mod tariff_tests {
    use rust_decimal_macros::dec;

    use super::Tariff;
    use crate::call::Call;
    use crate::record::parse_log;
    use crate::types::money::Money;

    fn cost(start: &str, end: &str) -> Money {
        let records = parse_log(&format!("1,{start},{end}"));
        Tariff::default().call_cost(&Call::new(&records[0]))
    }

    #[test]
    fn peak_minutes_cost_the_full_rate() {
        let cost = cost("08-02-2014 09:00:00", "08-02-2014 09:04:00");
        assert_eq!(cost, dec!(4.0).into());
    }

    #[test]
    fn minutes_beyond_the_fifth_cost_the_reduced_rate() {
        let cost = cost("01-02-2014 08:00:00", "01-02-2014 08:10:00");
        assert_eq!(cost, dec!(6.0).into());
    }

    #[test]
    fn off_peak_minutes_cost_half() {
        let cost = cost("01-02-2014 20:00:00", "01-02-2014 20:03:00");
        assert_eq!(cost, dec!(1.5).into());
    }

    #[test]
    fn exactly_five_minutes_are_all_base_rate() {
        let cost = cost("01-02-2014 09:00:00", "01-02-2014 09:05:00");
        assert_eq!(cost, dec!(5.0).into());
    }

    #[test]
    fn the_sixth_minute_is_reduced() {
        let cost = cost("01-02-2014 09:00:00", "01-02-2014 09:06:00");
        assert_eq!(cost, dec!(5.2).into());
    }

    #[test]
    fn reduced_rate_applies_off_peak_too() {
        let cost = cost("01-02-2014 20:00:00", "01-02-2014 20:10:00");
        assert_eq!(cost, dec!(3.5).into());
    }

    #[test]
    fn a_started_minute_bills_as_a_whole_minute() {
        let cost = cost("01-02-2014 09:00:00", "01-02-2014 09:01:01");
        assert_eq!(cost, dec!(2.0).into());
    }

    #[test]
    fn the_window_start_is_inclusive() {
        let cost = cost("01-02-2014 08:00:00", "01-02-2014 08:01:00");
        assert_eq!(cost, dec!(1.0).into());
    }

    #[test]
    fn the_window_end_is_exclusive() {
        let cost = cost("01-02-2014 16:00:00", "01-02-2014 16:01:00");
        assert_eq!(cost, dec!(0.5).into());
    }

    #[test]
    fn the_second_before_the_window_is_off_peak() {
        let cost = cost("01-02-2014 07:59:59", "01-02-2014 08:00:59");
        assert_eq!(cost, dec!(0.5).into());
    }

    #[test]
    fn the_last_window_second_is_peak() {
        let cost = cost("01-02-2014 15:59:59", "01-02-2014 16:01:00");
        assert_eq!(cost, dec!(2.0).into());
    }

    #[test]
    fn zero_duration_prices_to_zero() {
        let cost = cost("01-02-2014 09:00:00", "01-02-2014 09:00:00");
        assert_eq!(cost, Money::zero());
    }

    #[test]
    fn an_end_before_the_start_prices_to_zero() {
        let cost = cost("01-02-2014 09:10:00", "01-02-2014 09:00:00");
        assert_eq!(cost, Money::zero());
    }

    #[test]
    fn a_missing_timestamp_prices_to_zero() {
        let records = parse_log("1,not a date,01-02-2014 09:00:00");
        let cost = Tariff::default().call_cost(&Call::new(&records[0]));
        assert_eq!(cost, Money::zero());
    }
}
