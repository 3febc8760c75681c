//! # Backplot Core
//!
//! Core types for toolpath backplotting.
//! Provides the 9-axis position value type, plane selection, bounding
//! extents, unit conversions, and the shared error types.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, Result};
pub use geometry::{AxisPosition, Extents, PathExtents, Plane, EXTENT_SENTINEL};
