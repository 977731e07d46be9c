//! The error type returned by the engine.

use core::fmt;

/// The category of a [`TzError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested year lies outside the coverage window of the zone
    /// database context. A well-behaved caller can avoid this entirely.
    OutOfRange,
    /// A zone record invariant was broken at runtime: eras out of order,
    /// a fixed buffer exceeded, or an unresolvable record field. Fatal
    /// and non-retryable; it indicates a database compiler regression or
    /// a handcrafted record bug.
    BadZoneData,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfRange => "out of range",
            Self::BadZoneData => "bad zone data",
        };
        f.write_str(s)
    }
}

/// The error type for time zone queries.
///
/// Errors are built with the kind constructors and optionally refined
/// with a static message:
///
/// ```
/// use zonetime::TzError;
///
/// let err = TzError::out_of_range().with_message("year precedes zone database");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzError {
    kind: ErrorKind,
    message: &'static str,
}

impl TzError {
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, message: "" }
    }

    /// Create an out-of-range error.
    pub const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    /// Create a bad-zone-data error.
    pub const fn bad_zone_data() -> Self {
        Self::new(ErrorKind::BadZoneData)
    }

    /// Attach a diagnostic message to this error.
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    /// The error's kind.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error's diagnostic message, possibly empty.
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for TzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TzError {}
