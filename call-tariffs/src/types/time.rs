use chrono::Duration;

/// A timestamp from the call log.
///
/// The log carries no zone or offset, all times are naive local calendar
/// times.
pub type LocalDateTime = chrono::NaiveDateTime;

/// A duration billed in whole minutes, any started minute counts as a full
/// minute.
///
/// A negative duration clamps to zero minutes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MinutesCeil(Duration);

impl MinutesCeil {
    /// The billable amount of minutes.
    #[must_use]
    pub fn num_minutes(&self) -> u64 {
        let seconds = self.0.num_seconds();

        if seconds <= 0 {
            return 0;
        }

        let seconds =
            u64::try_from(seconds).unwrap_or_else(|_| unreachable!("seconds is positive"));

        seconds.div_ceil(60)
    }
}

impl From<Duration> for MinutesCeil {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}
