//! # Call tariffs library
//!
//! Functionality to calculate the total cost of a telephone call log. Use
//! the [`pricer::Pricer`] to perform the actual calculation, or
//! [`calculate`] to go from log text to a total in a single call.
//!
//! A log consists of newline separated rows, each holding a destination
//! number and the start and end timestamp of one call:
//!
//! ```text
//! 420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57
//! 420776562353,18-01-2020 08:59:20,18-01-2020 09:10:00
//! ```
//!
//! Calls are billed per started minute. Minutes of a call starting between
//! 08:00 and 16:00 cost the peak rate, any other start instant bills the
//! off-peak rate, and every minute after the fifth costs a flat reduced
//! rate. The most frequently called destination in the log is free. The
//! exact rates live in [`tariff::Tariff`].
//!
//! Parsing is lenient: malformed fields degrade to fallback values instead
//! of failing the calculation, see [`record::parse_log`]. The resulting
//! [`pricer::Report`] flags every degraded record.

/// Structures describing the textual call log format.
pub mod record;

/// Module containing the functionality to price call logs with provided
/// tariffs.
pub mod pricer;

/// Rate tables for pricing individual calls.
pub mod tariff;

/// Numeric types used for calculations, serializing and deserializing.
pub mod types;

mod call;
mod frequency;

use types::money::Money;

/// Calculate the total cost of `phone_log` under the built-in tariff.
///
/// The most frequently called destination is free, ties resolving to the
/// numerically larger number. An empty log costs zero.
///
/// ```
/// use call_tariffs::calculate;
///
/// let log = "420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57\n\
///            420776562353,18-01-2020 08:59:20,18-01-2020 09:10:00\n\
///            420776562353,18-01-2020 12:00:00,18-01-2020 12:01:00";
///
/// // 420776562353 is called most often and is free, the remaining call
/// // lasts three minutes off-peak.
/// assert_eq!(calculate(log).to_string(), "1.50");
/// ```
#[must_use]
pub fn calculate(phone_log: &str) -> Money {
    pricer::Pricer::new(phone_log).build_report().total_cost
}
