//! Canonical-motion callback protocol
//!
//! A G-code interpreter drives a [`Canon`] implementation synchronously, one
//! call per emitted motion primitive. `next_line` establishes the source
//! line attributed to the primitives that follow it. Implementations in this
//! crate: [`crate::ToolpathAccumulator`] (geometry accumulation) and
//! [`crate::TraceCanon`] (diagnostic logging).

use backplot_core::{AxisPosition, Plane, Result};
use serde::{Deserialize, Serialize};

/// Parameters of a canonical arc-feed primitive.
///
/// Coordinates follow the active-plane convention: `first`/`second` are the
/// in-plane axes (X/Y for G17, Z/X for G18, Y/Z for G19) and `axis_end` is
/// the end coordinate along the plane normal. `rotation` is a signed turn
/// count: positive counter-clockwise, negative clockwise, magnitudes above
/// one add full circles. All values are in program coordinates, before any
/// offset or rotation transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    /// End coordinate on the first in-plane axis
    pub first_end: f64,
    /// End coordinate on the second in-plane axis
    pub second_end: f64,
    /// Arc center on the first in-plane axis
    pub first_center: f64,
    /// Arc center on the second in-plane axis
    pub second_center: f64,
    /// Signed turn count; sign selects direction, zero is invalid
    pub rotation: i32,
    /// End coordinate along the plane normal (helix axis)
    pub axis_end: f64,
    /// A-axis end position
    pub a: f64,
    /// B-axis end position
    pub b: f64,
    /// C-axis end position
    pub c: f64,
    /// U-axis end position
    pub u: f64,
    /// V-axis end position
    pub v: f64,
    /// W-axis end position
    pub w: f64,
}

/// Canonical-motion callback interface.
///
/// One method per motion primitive or interpreter state change. All methods
/// are synchronous and non-blocking; only [`Canon::arc_feed`] can fail.
pub trait Canon {
    /// Establish the source line number attributed to subsequent primitives.
    fn next_line(&mut self, line_number: u32);

    /// Interpreter comment text. Default: ignored.
    fn comment(&mut self, _text: &str) {}

    /// Operator message text. Default: ignored.
    fn message(&mut self, _text: &str) {}

    /// Set the programmed feed rate in machine units per minute.
    fn set_feed_rate(&mut self, units_per_minute: f64);

    /// Select the active arc plane.
    fn set_plane(&mut self, plane: Plane);

    /// Replace the active work-coordinate-system offset wholesale.
    fn set_g5x_offset(&mut self, index: u8, offset: AxisPosition);

    /// Replace the global (G92) offset wholesale.
    fn set_g92_offset(&mut self, offset: AxisPosition);

    /// Set the XY rotation in degrees.
    fn set_xy_rotation(&mut self, degrees: f64);

    /// Replace the tool-length offset.
    fn tool_offset(&mut self, offset: AxisPosition);

    /// A tool change completed; subsequent motion starts a new path.
    fn change_tool(&mut self, tool_number: u16);

    /// Rapid move to `target` (program coordinates).
    fn straight_traverse(&mut self, target: AxisPosition);

    /// Feed move to `target` (program coordinates).
    fn straight_feed(&mut self, target: AxisPosition);

    /// Probe move; recorded like a feed move.
    fn straight_probe(&mut self, target: AxisPosition) {
        self.straight_feed(target);
    }

    /// Rigid tapping cycle: plunge to the given linear position and retract.
    fn rigid_tap(&mut self, x: f64, y: f64, z: f64);

    /// Circular or helical feed in the active plane.
    fn arc_feed(&mut self, params: ArcParams) -> Result<()>;

    /// Timed dwell at the current position.
    fn dwell(&mut self, seconds: f64);

    /// Custom M-code (M100..M199) invocation.
    fn user_defined_function(&mut self, code: u32, p: f64, q: f64);
}
