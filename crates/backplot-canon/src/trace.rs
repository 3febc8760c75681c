//! Diagnostic canon implementation
//!
//! Logs every callback through `tracing` and keeps per-category counters.
//! Useful when bringing up an interpreter binding: point it at a
//! [`TraceCanon`] first and read the call stream before wiring the real
//! accumulator.

use crate::canon::{ArcParams, Canon};
use backplot_core::{AxisPosition, Plane, Result};
use tracing::debug;

/// Callback counters kept by [`TraceCanon`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// `straight_traverse` calls
    pub traverses: u64,
    /// `straight_feed` / `straight_probe` calls
    pub feeds: u64,
    /// `arc_feed` calls
    pub arcs: u64,
    /// `rigid_tap` calls
    pub taps: u64,
    /// `dwell` and `user_defined_function` calls
    pub marks: u64,
    /// Offset, rotation, plane, feed-rate, and tool state changes
    pub state_changes: u64,
}

/// A [`Canon`] that records nothing and logs everything.
#[derive(Debug, Default)]
pub struct TraceCanon {
    line_number: u32,
    counts: CallCounts,
}

impl TraceCanon {
    /// Create a trace canon with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated so far.
    pub fn counts(&self) -> CallCounts {
        self.counts
    }
}

impl Canon for TraceCanon {
    fn next_line(&mut self, line_number: u32) {
        self.line_number = line_number;
    }

    fn comment(&mut self, text: &str) {
        debug!(line = self.line_number, text, "comment");
    }

    fn message(&mut self, text: &str) {
        debug!(line = self.line_number, text, "message");
    }

    fn set_feed_rate(&mut self, units_per_minute: f64) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, units_per_minute, "set_feed_rate");
    }

    fn set_plane(&mut self, plane: Plane) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, %plane, "set_plane");
    }

    fn set_g5x_offset(&mut self, index: u8, offset: AxisPosition) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, index, %offset, "set_g5x_offset");
    }

    fn set_g92_offset(&mut self, offset: AxisPosition) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, %offset, "set_g92_offset");
    }

    fn set_xy_rotation(&mut self, degrees: f64) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, degrees, "set_xy_rotation");
    }

    fn tool_offset(&mut self, offset: AxisPosition) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, %offset, "tool_offset");
    }

    fn change_tool(&mut self, tool_number: u16) {
        self.counts.state_changes += 1;
        debug!(line = self.line_number, tool_number, "change_tool");
    }

    fn straight_traverse(&mut self, target: AxisPosition) {
        self.counts.traverses += 1;
        debug!(line = self.line_number, %target, "straight_traverse");
    }

    fn straight_feed(&mut self, target: AxisPosition) {
        self.counts.feeds += 1;
        debug!(line = self.line_number, %target, "straight_feed");
    }

    fn rigid_tap(&mut self, x: f64, y: f64, z: f64) {
        self.counts.taps += 1;
        debug!(line = self.line_number, x, y, z, "rigid_tap");
    }

    fn arc_feed(&mut self, params: ArcParams) -> Result<()> {
        self.counts.arcs += 1;
        debug!(
            line = self.line_number,
            first_end = params.first_end,
            second_end = params.second_end,
            rotation = params.rotation,
            "arc_feed"
        );
        Ok(())
    }

    fn dwell(&mut self, seconds: f64) {
        self.counts.marks += 1;
        debug!(line = self.line_number, seconds, "dwell");
    }

    fn user_defined_function(&mut self, code: u32, p: f64, q: f64) {
        self.counts.marks += 1;
        debug!(line = self.line_number, code, p, q, "user_defined_function");
    }
}
