//! `zonetime` is an on-demand IANA time zone engine.
//!
//! Instead of carrying a pre-expanded list of every transition a zone has
//! ever made, the engine stores each zone as a compact sequence of eras
//! and recurrence rules, and materialises the concrete transitions for
//! one year at a time, on demand. A query for an instant (epoch seconds)
//! or a local wall-clock date-time is then answered by an ordered scan of
//! that small per-year buffer.
//!
//! The three entry points, outermost first:
//!
//! * [`TimeZone`]: a tzinfo-style adapter suitable for embedding under a
//!   host date/time library, exposing `utcoffset`, `dst`, `tzname`,
//!   `fromutc`, and `localize` with PEP 495 `fold` disambiguation of gaps
//!   and overlaps.
//! * [`ZoneManager`]: name lookup over a sorted registry of zones and
//!   links.
//! * [`ZoneProcessor`]: the core state machine, for callers that want
//!   direct access to the per-year transition buffer.
//!
//! Zone records are plain `'static` data emitted by an external database
//! compiler; a hand-curated subset of the IANA database ships in
//! [`zonedb`] for tests and examples. All arithmetic in the offset path
//! is integer arithmetic.

// Implementation note: the engine commits to fixed-capacity transition
// buffers so that its resource profile matches the embedded
// implementations of the same algorithm. Exceeding a declared capacity is
// treated as corrupt zone data, not as a condition to recover from.

#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod date_tuple;
pub mod error;
pub mod processor;
pub mod timezone;
pub mod types;
pub mod zonedb;

pub(crate) mod utils;

#[doc(inline)]
pub use error::{ErrorKind, TzError};

pub use date_tuple::{DateTuple, TimeSuffix};
pub use processor::{OffsetInfo, ZoneProcessor};
pub use timezone::{LocalDateTime, TimeZone, ZoneManager, ZonedDateTime};
pub use types::{ZoneContext, ZoneEra, ZoneInfo, ZonePolicy, ZoneRule};

/// The `zonetime` result type.
pub type TzResult<T> = Result<T, TzError>;
