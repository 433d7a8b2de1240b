use log::debug;

use crate::cell::ScalarCell;

/// Values must strictly exceed this to be stored.
pub const STORE_THRESHOLD: i64 = 10;

/// Offers `value` for storage.
///
/// Returns a present cell holding `value` when `value > STORE_THRESHOLD`
/// (strictly); otherwise the cell stays absent and no storage is
/// acquired.
///
/// ```
/// use condstore::store::{offer, STORE_THRESHOLD};
///
/// assert!(offer(STORE_THRESHOLD + 1).is_present());
/// assert!(!offer(STORE_THRESHOLD).is_present());
/// ```
#[must_use]
pub fn offer(value: i64) -> ScalarCell<i64> {
    let mut cell = ScalarCell::absent();
    if value > STORE_THRESHOLD {
        debug!("{value} exceeds threshold {STORE_THRESHOLD}, storing it");
        cell.admit(value);
    } else {
        debug!("{value} does not exceed threshold {STORE_THRESHOLD}, nothing stored");
    }
    cell
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{offer, STORE_THRESHOLD};

    #[test_case(11, true; "just above threshold")]
    #[test_case(10, false; "at threshold")]
    #[test_case(1000, true; "far above threshold")]
    #[test_case(0, false; "zero")]
    #[test_case(-5, false; "negative")]
    fn threshold_is_strict(value: i64, present: bool) {
        assert_eq!(offer(value).is_present(), present);
    }

    #[test]
    fn stored_value_is_the_offered_one() {
        assert_eq!(offer(42).value(), Some(&42));
        assert_eq!(offer(i64::MAX).value(), Some(&i64::MAX));
    }

    proptest! {
        #[test]
        fn presence_matches_the_comparison(value in any::<i64>()) {
            let cell = offer(value);
            prop_assert_eq!(cell.is_present(), value > STORE_THRESHOLD);
            if let Some(stored) = cell.value() {
                prop_assert_eq!(*stored, value);
            }
        }
    }
}
