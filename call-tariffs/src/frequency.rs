use std::collections::HashMap;

use crate::call::Call;
use crate::record::CallNumber;

/// The destination that occurs most often in `calls`.
///
/// Equal occurrence counts resolve to the numerically larger destination.
/// An empty set yields [`CallNumber::UNKNOWN`].
pub(crate) fn most_called(calls: &[Call]) -> CallNumber {
    let mut counts: HashMap<CallNumber, u64> = HashMap::new();

    for call in calls {
        *counts.entry(call.number).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(number, count)| (count, number))
        .map(|(number, _)| number)
        .unwrap_or(CallNumber::UNKNOWN)
}
