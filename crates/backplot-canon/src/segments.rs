//! Accumulated path primitives
//!
//! Segments are recorded in the output frame (offsets and rotation already
//! applied) and annotated with the source line, the feed rate where one
//! applies, and the tool-length offset that was active at emission time.
//! Lists of these are append-only; emission order is program execution order.

use backplot_core::{AxisPosition, Plane};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Rapid (non-cutting) move between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraverseSegment {
    /// Source line this segment was emitted for
    pub line_number: u32,
    /// Position before the move
    pub start: AxisPosition,
    /// Position after the move
    pub end: AxisPosition,
    /// Tool-length offset (linear axes) active at emission
    pub tool_offset: DVec3,
}

/// Cutting move with its programmed feed rate.
///
/// Used for straight feeds, probe moves, rigid-tap plunge/retract pairs, and
/// tessellated arc spans (the latter kept in their own list).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedSegment {
    /// Source line this segment was emitted for
    pub line_number: u32,
    /// Position before the move
    pub start: AxisPosition,
    /// Position after the move
    pub end: AxisPosition,
    /// Feed rate in machine units per second
    pub feed_rate: f64,
    /// Tool-length offset (linear axes) active at emission
    pub tool_offset: DVec3,
}

/// Color tag distinguishing the events a point marker records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkKind {
    /// Timed dwell (G4)
    Dwell,
    /// Custom M-code invocation (M100..M199)
    UserDefined,
}

/// Point marker recorded at the current position for non-motion events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DwellMark {
    /// Source line the event was emitted for
    pub line_number: u32,
    /// What kind of event the marker records
    pub kind: MarkKind,
    /// Tool-tip position at the time of the event
    pub position: DVec3,
    /// Arc plane active at the time of the event
    pub plane: Plane,
}
