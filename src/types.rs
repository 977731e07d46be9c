//! The passive zone record model.
//!
//! These types mirror the constants emitted by the zone database
//! compiler: a [`ZoneInfo`] owns an era history, each [`ZoneEra`] either
//! names a [`ZonePolicy`] of recurrence rules or carries a fixed DST
//! offset, and a Link is a [`ZoneInfo`] that borrows the era list of its
//! target. The record graph is a DAG of `'static` references; nothing
//! here is mutated after compilation.

use crate::date_tuple::{DateTuple, TimeSuffix};

/// Marker year for `-INF` in rule from/to years and era bounds.
pub const MIN_YEAR: i16 = 0;

/// Marker year for `+INF` in era `until_year` fields.
pub const MAX_UNTIL_YEAR: i16 = 10_000;

/// Marker year for `+INF` in rule `to_year` fields.
pub const MAX_TO_YEAR: i16 = MAX_UNTIL_YEAR - 1;

/// Sentinel for "no year".
pub(crate) const INVALID_YEAR: i16 = i16::MIN;

/// Database-wide metadata shared by every [`ZoneInfo`] of a compiled
/// database.
#[derive(Debug)]
pub struct ZoneContext {
    /// The IANA tzdb release the database was compiled from.
    pub tzdb_version: &'static str,
    /// First year covered by the database (inclusive).
    pub start_year: i16,
    /// Last year covered by the database (exclusive).
    pub until_year: i16,
    /// The year compact 8/16-bit year offsets in serialized databases are
    /// measured against. Carried as metadata; the in-memory records hold
    /// absolute years.
    pub base_epoch_year: i16,
}

/// One recurrence rule within a policy.
#[derive(Debug, PartialEq, Eq)]
pub struct ZoneRule {
    /// First year the rule applies in (inclusive). `MIN_YEAR` means
    /// `-INF`.
    pub from_year: i16,
    /// Last year the rule applies in (inclusive). `MAX_TO_YEAR` means
    /// `+INF`.
    pub to_year: i16,
    /// Month of the transition, 1..=12.
    pub in_month: u8,
    /// ISO day of week (1 = Monday .. 7 = Sunday), or 0 for an exact
    /// `on_day_of_month` match.
    pub on_day_of_week: u8,
    /// Day of month; 0 selects the last `on_day_of_week` of the month,
    /// a negative value selects the weekday on or before its absolute
    /// value.
    pub on_day_of_month: i8,
    /// Transition time of day, in seconds, in the `at_suffix` frame.
    pub at_seconds: i32,
    /// Frame of `at_seconds`.
    pub at_suffix: TimeSuffix,
    /// Seconds of DST saving added to standard time while the rule is in
    /// effect.
    pub delta_seconds: i32,
    /// Letter substituted for `%s` in abbreviation templates. Empty when
    /// the source column is `-`.
    pub letter: &'static str,
}

impl ZoneRule {
    /// Whether this rule applies in the given calendar year.
    pub fn applies_in(&self, year: i16) -> bool {
        self.from_year <= year && year <= self.to_year
    }
}

/// A named, ordered list of rules.
#[derive(Debug)]
pub struct ZonePolicy {
    pub name: &'static str,
    pub rules: &'static [ZoneRule],
}

/// One row of a zone's history: a fixed standard offset, a DST source,
/// and an upper bound.
#[derive(Debug)]
pub struct ZoneEra {
    /// Standard offset from UTC in seconds.
    pub offset_seconds: i32,
    /// The policy supplying DST transitions, or `None` when the era uses
    /// `delta_seconds` as a fixed saving (possibly zero).
    pub policy: Option<&'static ZonePolicy>,
    /// Fixed DST saving in seconds; only consulted when `policy` is
    /// `None`.
    pub delta_seconds: i32,
    /// Abbreviation template: a literal, a `%s` template, or a
    /// `std/dst` pair.
    pub format: &'static str,
    /// Upper bound, exclusive, in the `until_suffix` frame.
    pub until_year: i16,
    pub until_month: u8,
    pub until_day: u8,
    pub until_seconds: i32,
    pub until_suffix: TimeSuffix,
}

impl ZoneEra {
    /// The era's upper bound as a date tuple in its declared frame.
    pub fn until_date_tuple(&self) -> DateTuple {
        DateTuple::new(
            self.until_year,
            self.until_month,
            self.until_day,
            self.until_seconds,
            self.until_suffix,
        )
    }
}

/// A zone's identity: either a true zone with an era history, or a Link
/// borrowing the eras of its target.
#[derive(Debug)]
pub struct ZoneInfo {
    /// Full IANA name, e.g. `"America/Los_Angeles"`.
    pub name: &'static str,
    /// For a Link, the zone whose records this name aliases. Links never
    /// chain; the compiler resolves them to true zones.
    pub target: Option<&'static ZoneInfo>,
    /// The era history. Empty for a Link.
    pub eras: &'static [ZoneEra],
    /// The owning database context.
    pub context: &'static ZoneContext,
    /// Capacity bound for the processor's transition storage, as computed
    /// by the database compiler. Exceeding it at runtime is a data bug.
    pub transition_buf_size: u8,
}

impl ZoneInfo {
    pub fn is_link(&self) -> bool {
        self.target.is_some()
    }

    /// The zone actually holding the era records: the target for a Link,
    /// `self` otherwise.
    pub fn data(&'static self) -> &'static ZoneInfo {
        self.target.unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zonedb;

    #[test]
    fn rule_applicability() {
        let rule = &zonedb::POLICY_US.rules[1];
        assert_eq!(rule.from_year, 1942);
        assert!(rule.applies_in(1942));
        assert!(!rule.applies_in(1941));
        assert!(!rule.applies_in(1943));
    }

    #[test]
    fn link_resolution() {
        assert!(zonedb::ZONE_US_PACIFIC.is_link());
        assert_eq!(
            zonedb::ZONE_US_PACIFIC.data().name,
            "America/Los_Angeles"
        );
        assert!(!zonedb::ZONE_AMERICA_LOS_ANGELES.is_link());
        assert_eq!(
            zonedb::ZONE_AMERICA_LOS_ANGELES.data().name,
            "America/Los_Angeles"
        );
    }

    #[test]
    fn era_bounds_are_monotonic() {
        for zone in zonedb::ZONE_REGISTRY {
            let mut prev: Option<DateTuple> = None;
            for era in zone.eras {
                let until = era.until_date_tuple();
                if let Some(p) = prev {
                    assert!(p < until, "{}: eras out of order", zone.name);
                }
                prev = Some(until);
            }
            assert_eq!(
                zone.eras.last().map(|e| e.until_year),
                Some(MAX_UNTIL_YEAR),
                "{}: last era must be open-ended",
                zone.name
            );
        }
    }
}
