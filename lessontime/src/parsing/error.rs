//! Error types for the display-format validation boundary.

/// Result type for display-format parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for display-format parsing.
///
/// These are the only two failure modes the engine surfaces; everything
/// past the parsing boundary operates on already-validated values and has
/// no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not match the expected shape: wrong separator count,
    /// a non-numeric group, a missing AM/PM marker, or an hour/minute
    /// outside the 1-12 / 0-59 range.
    #[error("invalid format")]
    InvalidFormat,

    /// The input is shaped correctly but names no real calendar date
    /// (e.g. 02/30/2026).
    #[error("invalid date")]
    InvalidDate,
}
