//! Error types.
//!
//! The core has no I/O, so the only failure it reports as an error value
//! is an out-of-bounds grid access. "No valid timetable" is an ordinary
//! (empty) result, not an error.

use thiserror::Error;

/// Errors raised by [`TimeGrid`](crate::models::TimeGrid) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A day or hour index outside the 5x13 week grid.
    #[error("cell (day {day}, hour {hour}) is outside the 5x13 week grid")]
    OutOfRange {
        /// Requested day index.
        day: usize,
        /// Requested hour index.
        hour: usize,
    },
}
