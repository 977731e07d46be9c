//! The tzinfo-style adapter and the zone manager.
//!
//! [`TimeZone`] wraps one [`ZoneProcessor`] behind interior mutability so
//! a host date/time library can hold it as an immutable timezone object
//! while the processor re-caches years underneath. It is strictly
//! single-threaded; give each thread its own instance or wrap it in a
//! lock.

use core::cell::RefCell;

use crate::date_tuple::DateTuple;
use crate::processor::{OffsetInfo, ZoneProcessor};
use crate::types::ZoneInfo;
use crate::utils;
use crate::TzResult;

use tinystr::TinyAsciiStr;

/// Local wall-clock components, the shape the engine exchanges with a
/// host library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTime {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    /// Seconds since local midnight, `0..86_400`.
    pub second_of_day: i32,
}

impl LocalDateTime {
    pub const fn new(year: i16, month: u8, day: u8, second_of_day: i32) -> Self {
        Self {
            year,
            month,
            day,
            second_of_day,
        }
    }

    pub const fn from_hms(year: i16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::new(
            year,
            month,
            day,
            (hour as i32 * 60 + minute as i32) * 60 + second as i32,
        )
    }
}

/// A local date-time paired with its PEP 495 fold and the offsets that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDateTime {
    pub local: LocalDateTime,
    /// 1 iff the local time is the second occurrence in an overlap.
    pub fold: u8,
    pub offset: OffsetInfo,
}

/// A pluggable timezone object over one zone record.
///
/// Equality compares zone names, so a link is not equal to its target.
#[derive(Debug)]
pub struct TimeZone {
    processor: RefCell<ZoneProcessor>,
}

impl TimeZone {
    /// Build directly from a zone record.
    pub fn from_zone_info(zone: &'static ZoneInfo) -> Self {
        Self {
            processor: RefCell::new(ZoneProcessor::new(zone)),
        }
    }

    /// Total offset `utc + dst` in seconds at an instant.
    pub fn utcoffset(&self, epoch_seconds: i64) -> TzResult<i32> {
        Ok(self.offset_info(epoch_seconds)?.total_offset)
    }

    /// DST component in seconds at an instant.
    pub fn dst(&self, epoch_seconds: i64) -> TzResult<i32> {
        Ok(self.offset_info(epoch_seconds)?.dst_offset)
    }

    /// Abbreviation at an instant, e.g. `PST`. The zone's full name is
    /// [`TimeZone::tzfullname`].
    pub fn tzname(&self, epoch_seconds: i64) -> TzResult<TinyAsciiStr<8>> {
        Ok(self.offset_info(epoch_seconds)?.abbrev)
    }

    /// The complete offset record at an instant.
    pub fn offset_info(&self, epoch_seconds: i64) -> TzResult<OffsetInfo> {
        self.processor.borrow_mut().offset_for_instant(epoch_seconds)
    }

    /// Convert an instant to local wall-clock components, stamped with
    /// the fold a host library needs to round-trip overlap times.
    pub fn fromutc(&self, epoch_seconds: i64) -> TzResult<ZonedDateTime> {
        let offset = self.offset_info(epoch_seconds)?;
        let shifted = epoch_seconds + i64::from(offset.total_offset);
        let days = shifted.div_euclid(utils::SECONDS_PER_DAY) as i32;
        let second_of_day = shifted.rem_euclid(utils::SECONDS_PER_DAY) as i32;
        let (year, month, day) = utils::ymd_from_epoch_days(days);
        Ok(ZonedDateTime {
            local: LocalDateTime::new(year as i16, month, day, second_of_day),
            fold: offset.fold,
            offset,
        })
    }

    /// Convert local wall-clock components to an instant, honouring
    /// `fold` in gaps and overlaps.
    pub fn localize(&self, local: LocalDateTime, fold: u8) -> TzResult<i64> {
        let offset = self.processor.borrow_mut().offset_for_local(
            local.year,
            local.month,
            local.day,
            local.second_of_day,
            fold,
        )?;
        let days = utils::epoch_days_from_ymd(i32::from(local.year), local.month, local.day);
        Ok(i64::from(days) * utils::SECONDS_PER_DAY + i64::from(local.second_of_day)
            - i64::from(offset.total_offset))
    }

    /// The offset record a local time resolves to under the given fold.
    pub fn offset_info_for_local(&self, local: LocalDateTime, fold: u8) -> TzResult<OffsetInfo> {
        self.processor.borrow_mut().offset_for_local(
            local.year,
            local.month,
            local.day,
            local.second_of_day,
            fold,
        )
    }

    pub fn is_link(&self) -> bool {
        self.processor.borrow().is_link()
    }

    /// The zone's full IANA name (the link name for a link).
    pub fn tzfullname(&self) -> &'static str {
        self.processor.borrow().name()
    }

    /// The target zone's name when this timezone is a link.
    pub fn targetname(&self) -> Option<&'static str> {
        self.processor.borrow().target_name()
    }

    /// Direct access to the underlying processor, for validation tooling.
    pub fn processor(&self) -> &RefCell<ZoneProcessor> {
        &self.processor
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.tzfullname() == other.tzfullname()
    }
}

impl Eq for TimeZone {}

/// Factory of [`TimeZone`]s over a sorted registry, usually
/// [`crate::zonedb::ZONE_REGISTRY`] or
/// [`crate::zonedb::ZONE_AND_LINK_REGISTRY`]. Applications can supply a
/// custom registry as long as it is sorted by zone name.
#[derive(Debug, Clone, Copy)]
pub struct ZoneManager {
    registry: &'static [&'static ZoneInfo],
}

impl ZoneManager {
    pub const fn new(registry: &'static [&'static ZoneInfo]) -> Self {
        Self { registry }
    }

    /// Look up a zone record by name. `None` for unknown names, matching
    /// the lookup conventions of host libraries.
    pub fn get(&self, name: &str) -> Option<&'static ZoneInfo> {
        self.registry
            .binary_search_by(|zone| zone.name.cmp(name))
            .ok()
            .map(|index| self.registry[index])
    }

    /// Build a [`TimeZone`] by name.
    pub fn timezone(&self, name: &str) -> Option<TimeZone> {
        self.get(name).map(TimeZone::from_zone_info)
    }
}

// Keep DateTuple in the module's public face: hosts that already work in
// date tuples can skip LocalDateTime.
impl From<LocalDateTime> for DateTuple {
    fn from(local: LocalDateTime) -> Self {
        DateTuple::new(
            local.year,
            local.month,
            local.day,
            local.second_of_day,
            crate::date_tuple::TimeSuffix::Wall,
        )
    }
}
