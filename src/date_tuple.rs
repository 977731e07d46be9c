//! Date-time tuples in the three qualified frames.
//!
//! A [`DateTuple`] is `(year, month, day, seconds-of-day)` plus the frame
//! suffix the value is expressed in. Seconds are deliberately not bounded
//! to a day: rule and era times such as `24:00` or `25:00` are legal
//! inputs, and frame shifting routinely pushes a tuple across midnight.
//! [`DateTuple::normalize`] folds the excess into the date portion.

use core::cmp::Ordering;

use crate::types::MIN_YEAR;
use crate::utils;

/// The frame a qualified time is expressed in.
///
/// Rule `AT` columns and era `UNTIL` columns carry one of these: wall
/// clock (`w`), local standard time (`s`), or universal time (`u`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeSuffix {
    /// Wall clock: standard offset plus any DST saving.
    #[default]
    Wall,
    /// Local standard time: standard offset, no DST saving.
    Standard,
    /// Universal time.
    Universal,
}

/// A date-time broken into `(year, month, day, seconds)` plus a frame
/// suffix.
///
/// Ordering and equality compare the date-time fields only; the suffix is
/// carried alongside and never participates in comparisons. Callers
/// compare tuples expressed in the same frame.
#[derive(Debug, Clone, Copy)]
pub struct DateTuple {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    /// Seconds since local midnight. May be negative or exceed 24h in an
    /// unnormalized tuple.
    pub seconds: i32,
    pub suffix: TimeSuffix,
}

impl DateTuple {
    pub const fn new(year: i16, month: u8, day: u8, seconds: i32, suffix: TimeSuffix) -> Self {
        Self {
            year,
            month,
            day,
            seconds,
            suffix,
        }
    }

    /// Fold out-of-range seconds into the date portion.
    ///
    /// Tuples at the `-INF` sentinel year normalize to the sentinel
    /// origin regardless of their fields.
    pub fn normalize(self) -> Self {
        if self.year == MIN_YEAR {
            return Self::new(MIN_YEAR, 1, 1, 0, self.suffix);
        }
        let days = i64::from(utils::epoch_days_from_ymd(
            i32::from(self.year),
            self.month,
            self.day,
        ));
        let total = days * utils::SECONDS_PER_DAY + i64::from(self.seconds);
        let day = total.div_euclid(utils::SECONDS_PER_DAY) as i32;
        let seconds = total.rem_euclid(utils::SECONDS_PER_DAY) as i32;
        let (year, month, day) = utils::ymd_from_epoch_days(day);
        Self::new(year as i16, month, day, seconds, self.suffix)
    }

    /// The tuple's fields read as an epoch-second count, ignoring the
    /// suffix. Meaningful for universal-frame tuples, and as a frame-local
    /// second count for the others.
    pub fn epoch_seconds(&self) -> i64 {
        let days = utils::epoch_days_from_ymd(i32::from(self.year), self.month, self.day);
        i64::from(days) * utils::SECONDS_PER_DAY + i64::from(self.seconds)
    }

    /// Express this tuple in all three frames, given the `(standard
    /// offset, DST saving)` in effect just before it.
    ///
    /// The conversions are purely additive: wall and standard differ by
    /// the saving, standard and universal by the standard offset. Each
    /// result is normalized.
    pub fn expand(self, offset_seconds: i32, delta_seconds: i32) -> (Self, Self, Self) {
        let (w, s, u) = match self.suffix {
            TimeSuffix::Wall => {
                let s = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds - delta_seconds,
                    TimeSuffix::Standard,
                );
                let u = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds - delta_seconds - offset_seconds,
                    TimeSuffix::Universal,
                );
                (self, s, u)
            }
            TimeSuffix::Standard => {
                let w = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds + delta_seconds,
                    TimeSuffix::Wall,
                );
                let u = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds - offset_seconds,
                    TimeSuffix::Universal,
                );
                (w, self, u)
            }
            TimeSuffix::Universal => {
                let w = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds + delta_seconds + offset_seconds,
                    TimeSuffix::Wall,
                );
                let s = Self::new(
                    self.year,
                    self.month,
                    self.day,
                    self.seconds + offset_seconds,
                    TimeSuffix::Standard,
                );
                (w, s, self)
            }
        };
        (w.normalize(), s.normalize(), u.normalize())
    }
}

/// Seconds in `a - b`, ignoring the suffixes.
pub fn subtract_date_tuple(a: &DateTuple, b: &DateTuple) -> i64 {
    let da = utils::epoch_days_from_ymd(i32::from(a.year), a.month, a.day);
    let db = utils::epoch_days_from_ymd(i32::from(b.year), b.month, b.day);
    i64::from(da - db) * utils::SECONDS_PER_DAY + i64::from(a.seconds - b.seconds)
}

impl PartialEq for DateTuple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DateTuple {}

impl PartialOrd for DateTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day, self.seconds).cmp(&(
            other.year,
            other.month,
            other.day,
            other.seconds,
        ))
    }
}

/// A `(year, month)` pair bounding the matching window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearMonth {
    pub(crate) year: i16,
    pub(crate) month: u8,
}

impl YearMonth {
    pub(crate) const fn new(year: i16, month: u8) -> Self {
        Self { year, month }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let dt = DateTuple::new(2000, 2, 1, 0, TimeSuffix::Wall).normalize();
        assert_eq!(dt, DateTuple::new(2000, 2, 1, 0, TimeSuffix::Wall));

        // 24:00 rolls into the next day.
        let dt = DateTuple::new(2000, 1, 31, 24 * 3600, TimeSuffix::Standard).normalize();
        assert_eq!(dt, DateTuple::new(2000, 2, 1, 0, TimeSuffix::Standard));

        // Negative seconds borrow from the previous day, across a leap
        // February.
        let dt = DateTuple::new(2000, 3, 1, -3600, TimeSuffix::Universal).normalize();
        assert_eq!(dt, DateTuple::new(2000, 2, 29, 23 * 3600, TimeSuffix::Universal));
    }

    #[test]
    fn expand_from_each_frame() {
        let expected = (
            DateTuple::new(2000, 1, 30, 10800, TimeSuffix::Wall),
            DateTuple::new(2000, 1, 30, 7200, TimeSuffix::Standard),
            DateTuple::new(2000, 1, 30, 0, TimeSuffix::Universal),
        );

        let w = DateTuple::new(2000, 1, 30, 10800, TimeSuffix::Wall);
        assert_eq!(w.expand(7200, 3600), expected);

        let s = DateTuple::new(2000, 1, 30, 7200, TimeSuffix::Standard);
        assert_eq!(s.expand(7200, 3600), expected);

        let u = DateTuple::new(2000, 1, 30, 0, TimeSuffix::Universal);
        assert_eq!(u.expand(7200, 3600), expected);
    }

    #[test]
    fn subtraction() {
        let a = DateTuple::new(2000, 1, 1, 43, TimeSuffix::Wall);
        let b = DateTuple::new(2000, 1, 1, 44, TimeSuffix::Wall);
        assert_eq!(subtract_date_tuple(&a, &b), -1);

        let a = DateTuple::new(2000, 1, 2, 43, TimeSuffix::Wall);
        let b = DateTuple::new(2000, 1, 1, 44, TimeSuffix::Wall);
        assert_eq!(subtract_date_tuple(&a, &b), 24 * 3600 - 1);

        let a = DateTuple::new(2000, 1, 2, 43, TimeSuffix::Wall);
        let b = DateTuple::new(2000, 2, 1, 44, TimeSuffix::Wall);
        assert_eq!(subtract_date_tuple(&a, &b), -31 * 24 * 3600 + 24 * 3600 - 1);
    }

    #[test]
    fn ordering_ignores_suffix() {
        let w = DateTuple::new(2001, 3, 1, 0, TimeSuffix::Wall);
        let u = DateTuple::new(2001, 3, 1, 0, TimeSuffix::Universal);
        assert_eq!(w, u);
        assert!(DateTuple::new(2001, 2, 28, 86399, TimeSuffix::Wall) < w);
    }

    #[test]
    fn epoch_seconds() {
        let dt = DateTuple::new(2000, 4, 2, 10800, TimeSuffix::Wall);
        assert_eq!(dt.epoch_seconds(), 954_644_400);
        let dt = DateTuple::new(1970, 1, 1, 0, TimeSuffix::Universal);
        assert_eq!(dt.epoch_seconds(), 0);
    }
}
