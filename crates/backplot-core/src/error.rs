//! Error handling for Backplot
//!
//! The accumulator itself performs no validation of axis magnitudes; the
//! interpreter collaborator owns geometric validity. The errors here cover
//! the two operations that can genuinely fail: arc tessellation and work
//! coordinate system lookup.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Backplot error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Arc tessellation could not produce intermediate positions
    #[error("Arc tessellation failed at line {line_number}: {reason}")]
    ArcTessellation {
        /// Source line the arc was attributed to.
        line_number: u32,
        /// Why the arc could not be tessellated.
        reason: String,
    },

    /// Work coordinate system index outside the G54..G59.3 range
    #[error("Invalid work coordinate system index {index} (expected 1-9)")]
    InvalidCoordinateSystem {
        /// The rejected index.
        index: u8,
    },
}

/// Result type alias using the Backplot error
pub type Result<T> = std::result::Result<T, Error>;
