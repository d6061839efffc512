//! Value wrapper enforcing a closed range.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// A value kept inside a fixed closed range.
///
/// Construction requires the initial value to be inside the range; after
/// that, [`set`](ClampedValue::set) silently clamps out-of-range writes to
/// the nearest bound and never fails. The range is immutable.
///
/// # Example
///
/// ```
/// use cellkit::ClampedValue;
///
/// let mut volume = ClampedValue::new(0.5, 0.0..=1.0);
/// volume.set(1.1);
/// assert_eq!(volume.get(), 1.0);
/// volume.set(-0.1);
/// assert_eq!(volume.get(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClampedValue<V> {
    value: V,
    range: RangeInclusive<V>,
}

impl<V: PartialOrd + Clone + fmt::Debug> ClampedValue<V> {
    /// Create a clamped value.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or `initial` lies outside it. Use
    /// [`try_new`](ClampedValue::try_new) for the recoverable form.
    pub fn new(initial: V, range: RangeInclusive<V>) -> Self {
        match Self::try_new(initial, range) {
            Ok(clamped) => clamped,
            Err(e) => panic!("ClampedValue: {e}"),
        }
    }

    /// Create a clamped value, returning an error if the range is empty or
    /// `initial` lies outside it.
    pub fn try_new(initial: V, range: RangeInclusive<V>) -> Result<Self> {
        if range.start() > range.end() {
            return Err(Error::EmptyRange {
                range: format!("{:?}..={:?}", range.start(), range.end()),
            });
        }
        if !range.contains(&initial) {
            return Err(Error::OutOfRange {
                value: format!("{initial:?}"),
                range: format!("{:?}..={:?}", range.start(), range.end()),
            });
        }
        Ok(Self {
            value: initial,
            range,
        })
    }
}

impl<V: PartialOrd + Clone> ClampedValue<V> {
    /// Return the current value. Always inside the range.
    pub fn get(&self) -> V {
        self.value.clone()
    }

    /// Store `value`, clamped to the range bounds.
    ///
    /// Values that compare with neither bound (e.g. a NaN float) resolve to
    /// the lower bound, so the stored value is always inside the range.
    pub fn set(&mut self, value: V) {
        self.value = if !(value >= *self.range.start()) {
            self.range.start().clone()
        } else if value > *self.range.end() {
            self.range.end().clone()
        } else {
            value
        };
    }

    /// The allowed range.
    pub fn range(&self) -> &RangeInclusive<V> {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_value_inside_range_is_kept() {
        let clamped = ClampedValue::new(5, 0..=10);
        assert_eq!(clamped.get(), 5);
    }

    #[test]
    fn set_clamps_to_upper_bound() {
        let mut clamped = ClampedValue::new(0.5, 0.0..=1.0);
        clamped.set(1.1);
        assert_eq!(clamped.get(), 1.0);
    }

    #[test]
    fn set_clamps_to_lower_bound() {
        let mut clamped = ClampedValue::new(0.5, 0.0..=1.0);
        clamped.set(-0.1);
        assert_eq!(clamped.get(), 0.0);
    }

    #[test]
    fn set_inside_range_stores_exactly() {
        let mut clamped = ClampedValue::new(0, -5..=5);
        clamped.set(3);
        assert_eq!(clamped.get(), 3);
    }

    #[test]
    fn bounds_themselves_are_valid_initial_values() {
        assert_eq!(ClampedValue::new(0, 0..=10).get(), 0);
        assert_eq!(ClampedValue::new(10, 0..=10).get(), 10);
    }

    #[test]
    fn nan_write_resolves_to_lower_bound() {
        let mut clamped = ClampedValue::new(0.5, 0.0..=1.0);
        clamped.set(f64::NAN);
        let got = clamped.get();
        assert!((0.0..=1.0).contains(&got));
        assert_eq!(got, 0.0);
    }

    #[test]
    #[should_panic(expected = "outside range")]
    fn initial_value_outside_range_panics() {
        let _ = ClampedValue::new(11, 0..=10);
    }

    #[test]
    fn try_new_reports_out_of_range() {
        let result = ClampedValue::try_new(11, 0..=10);
        assert!(matches!(result, Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn try_new_reports_empty_range() {
        let result = ClampedValue::try_new(0, 10..=0);
        assert!(matches!(result, Err(Error::EmptyRange { .. })));
    }

    proptest! {
        #[test]
        fn set_always_lands_inside_range(x in -1.0e12f64..1.0e12f64) {
            let mut clamped = ClampedValue::new(0.5, 0.0..=1.0);
            clamped.set(x);
            let got = clamped.get();
            prop_assert!((0.0..=1.0).contains(&got));
            prop_assert_eq!(got, x.clamp(0.0, 1.0));
        }
    }
}
