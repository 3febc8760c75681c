//! Toolpath accumulation from canonical-motion callbacks
//!
//! [`ToolpathAccumulator`] is the interpreter-facing stage of a backplot:
//! it consumes the [`Canon`] call stream and produces categorized,
//! offset-corrected segment lists plus bounding extents. One instance per
//! program load; a reload starts from a fresh instance.

use crate::arc::{ArcTessellator, PlanarArcTessellator};
use crate::canon::{ArcParams, Canon};
use crate::segments::{DwellMark, FeedSegment, MarkKind, TraverseSegment};
use crate::transform::TransformState;
use backplot_core::{units, AxisPosition, Extents, PathExtents, Plane, Result};
use glam::DVec3;
use tracing::{debug, trace, warn};

/// Default tessellation span count for a full arc turn.
pub const DEFAULT_ARC_DIVISIONS: u32 = 64;

/// Accumulates motion primitives into renderable segment lists.
///
/// Single-threaded by design: the interpreter calls it synchronously, one
/// call per emitted primitive, and the renderer reads the finished lists
/// afterwards. A consumer that must read while interpretation continues
/// takes its own snapshot (`to_vec()` on the slices).
pub struct ToolpathAccumulator {
    traverse: Vec<TraverseSegment>,
    feed: Vec<FeedSegment>,
    arcfeed: Vec<FeedSegment>,
    dwells: Vec<DwellMark>,

    transform: TransformState,
    tessellator: Box<dyn ArcTessellator>,

    /// Stored per second; the protocol supplies per minute.
    feed_rate: f64,
    dwell_time: f64,
    line_number: u32,
    last_position: AxisPosition,
    first_move: bool,
    in_arc: bool,
    suppress: u32,
    plane: Plane,
    arc_divisions: u32,
    active_tool: Option<u16>,
}

impl ToolpathAccumulator {
    /// Create an accumulator with the default planar arc tessellator.
    pub fn new() -> Self {
        Self::with_tessellator(Box::new(PlanarArcTessellator))
    }

    /// Create an accumulator with an injected arc tessellator.
    pub fn with_tessellator(tessellator: Box<dyn ArcTessellator>) -> Self {
        Self {
            traverse: Vec::new(),
            feed: Vec::new(),
            arcfeed: Vec::new(),
            dwells: Vec::new(),
            transform: TransformState::new(),
            tessellator,
            feed_rate: 1.0,
            dwell_time: 0.0,
            line_number: 0,
            last_position: AxisPosition::ZERO,
            first_move: true,
            in_arc: false,
            suppress: 0,
            plane: Plane::XY,
            arc_divisions: DEFAULT_ARC_DIVISIONS,
            active_tool: None,
        }
    }

    /// Set the tessellation span count per full arc turn.
    pub fn set_arc_divisions(&mut self, divisions: u32) {
        self.arc_divisions = divisions.max(1);
    }

    /// Accumulated rapid segments, in emission order.
    pub fn traverse(&self) -> &[TraverseSegment] {
        &self.traverse
    }

    /// Accumulated straight-feed segments, in emission order.
    pub fn feed(&self) -> &[FeedSegment] {
        &self.feed
    }

    /// Accumulated tessellated arc spans, in emission order.
    pub fn arcfeed(&self) -> &[FeedSegment] {
        &self.arcfeed
    }

    /// Accumulated dwell/custom-M-code markers, in emission order.
    pub fn dwells(&self) -> &[DwellMark] {
        &self.dwells
    }

    /// Total number of positional segments across all three lists.
    pub fn segment_count(&self) -> usize {
        self.traverse.len() + self.feed.len() + self.arcfeed.len()
    }

    /// Position after the most recent recorded motion, in the output frame.
    pub fn last_position(&self) -> AxisPosition {
        self.last_position
    }

    /// Source line currently attributed to emitted segments.
    pub fn current_line(&self) -> u32 {
        self.line_number
    }

    /// Sum of all dwell durations seen so far, in seconds.
    pub fn total_dwell_time(&self) -> f64 {
        self.dwell_time
    }

    /// Tool selected by the most recent `change_tool`, if any.
    pub fn active_tool(&self) -> Option<u16> {
        self.active_tool
    }

    /// Read access to the offset/rotation state.
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// True while recording is paused (e.g. optional-block skip).
    pub fn is_suppressed(&self) -> bool {
        self.suppress > 0
    }

    /// True only during an arc-feed call.
    pub fn is_in_arc(&self) -> bool {
        self.in_arc
    }

    /// Pause recording. Calls nest; every `suppress_recording` needs a
    /// matching [`ToolpathAccumulator::resume_recording`]. While paused,
    /// motion calls are no-ops but offset/rotation/feed-rate state still
    /// updates.
    pub fn suppress_recording(&mut self) {
        self.suppress += 1;
    }

    /// Undo one level of suppression.
    pub fn resume_recording(&mut self) {
        self.suppress = self.suppress.saturating_sub(1);
    }

    /// Bounding extents of all positional segments, with and without the
    /// tool-length offset.
    ///
    /// O(n) scan over the full segment history. An empty accumulation
    /// returns the sentinel boxes; check [`Extents::is_empty`] before using
    /// the corners.
    pub fn compute_extents(&self) -> PathExtents {
        let mut with_tool = Extents::new();
        let mut without_tool = Extents::new();

        fn expand(
            with_tool: &mut Extents,
            without_tool: &mut Extents,
            start: AxisPosition,
            end: AxisPosition,
            tool_offset: DVec3,
        ) {
            for point in [start.xyz(), end.xyz()] {
                with_tool.expand(point);
                without_tool.expand(point - tool_offset);
            }
        }

        for seg in &self.traverse {
            expand(&mut with_tool, &mut without_tool, seg.start, seg.end, seg.tool_offset);
        }
        for seg in self.feed.iter().chain(self.arcfeed.iter()) {
            expand(&mut with_tool, &mut without_tool, seg.start, seg.end, seg.tool_offset);
        }

        PathExtents {
            with_tool,
            without_tool,
        }
    }
}

impl Default for ToolpathAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Canon for ToolpathAccumulator {
    fn next_line(&mut self, line_number: u32) {
        self.line_number = line_number;
    }

    fn set_feed_rate(&mut self, units_per_minute: f64) {
        self.feed_rate = units::per_minute_to_per_second(units_per_minute);
    }

    fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    fn set_g5x_offset(&mut self, index: u8, offset: AxisPosition) {
        trace!(index, %offset, "work offset replaced");
        self.transform.set_g5x_offset(index, offset);
    }

    fn set_g92_offset(&mut self, offset: AxisPosition) {
        trace!(%offset, "global offset replaced");
        self.transform.set_g92_offset(offset);
    }

    fn set_xy_rotation(&mut self, degrees: f64) {
        trace!(degrees, "xy rotation set");
        self.transform.set_rotation(degrees);
    }

    fn tool_offset(&mut self, offset: AxisPosition) {
        // Shift the held position by the offset delta instead of emitting a
        // segment: the displayed tool tip stays continuous across the change
        // and no traverse line represents the physical tool swap.
        self.first_move = true;
        let old = self.transform.replace_tool_offset(offset);
        self.last_position = self.last_position - offset + old;
        debug!(%offset, "tool offset replaced");
    }

    fn change_tool(&mut self, tool_number: u16) {
        self.first_move = true;
        self.active_tool = Some(tool_number);
        debug!(tool_number, "tool change");
    }

    fn straight_traverse(&mut self, target: AxisPosition) {
        if self.suppress > 0 {
            return;
        }

        let pos = self.transform.apply(target);
        if !self.first_move {
            self.traverse.push(TraverseSegment {
                line_number: self.line_number,
                start: self.last_position,
                end: pos,
                tool_offset: self.transform.tool_offset().xyz(),
            });
        }
        self.last_position = pos;
        self.first_move = false;
    }

    fn straight_feed(&mut self, target: AxisPosition) {
        if self.suppress > 0 {
            return;
        }

        self.first_move = false;
        let pos = self.transform.apply(target);
        self.feed.push(FeedSegment {
            line_number: self.line_number,
            start: self.last_position,
            end: pos,
            feed_rate: self.feed_rate,
            tool_offset: self.transform.tool_offset().xyz(),
        });
        self.last_position = pos;
    }

    fn rigid_tap(&mut self, x: f64, y: f64, z: f64) {
        if self.suppress > 0 {
            return;
        }

        self.first_move = false;
        let linear = self.transform.apply(AxisPosition::from_xyz(x, y, z));
        // rotary and secondary axes carry over unchanged
        let pos = self.last_position.with_xyz(linear.x, linear.y, linear.z);
        let tool_offset = self.transform.tool_offset().xyz();

        // plunge and retract; the held position stays at the pre-tap point
        self.feed.push(FeedSegment {
            line_number: self.line_number,
            start: self.last_position,
            end: pos,
            feed_rate: self.feed_rate,
            tool_offset,
        });
        self.feed.push(FeedSegment {
            line_number: self.line_number,
            start: pos,
            end: self.last_position,
            feed_rate: self.feed_rate,
            tool_offset,
        });
    }

    fn arc_feed(&mut self, params: ArcParams) -> Result<()> {
        if self.suppress > 0 {
            return Ok(());
        }

        self.first_move = false;
        self.in_arc = true;
        let tessellated = self.tessellator.tessellate(
            &params,
            &self.transform,
            self.plane,
            self.last_position,
            self.line_number,
            self.arc_divisions,
        );
        // the flag never survives tessellation failure
        self.in_arc = false;

        let points = match tessellated {
            Ok(points) => points,
            Err(err) => {
                warn!(line = self.line_number, %err, "arc tessellation failed");
                return Err(err);
            }
        };

        let tool_offset = self.transform.tool_offset().xyz();
        let mut start = self.last_position;
        for end in points {
            self.arcfeed.push(FeedSegment {
                line_number: self.line_number,
                start,
                end,
                feed_rate: self.feed_rate,
                tool_offset,
            });
            start = end;
        }
        self.last_position = start;
        Ok(())
    }

    fn dwell(&mut self, seconds: f64) {
        if self.suppress > 0 {
            return;
        }

        self.dwell_time += seconds;
        self.dwells.push(DwellMark {
            line_number: self.line_number,
            kind: MarkKind::Dwell,
            position: self.last_position.xyz(),
            plane: self.plane,
        });
    }

    fn user_defined_function(&mut self, code: u32, _p: f64, _q: f64) {
        if self.suppress > 0 {
            return;
        }

        trace!(code, "user defined function marker");
        self.dwells.push(DwellMark {
            line_number: self.line_number,
            kind: MarkKind::UserDefined,
            position: self.last_position.xyz(),
            plane: self.plane,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_traverse_is_swallowed() {
        let mut canon = ToolpathAccumulator::new();
        canon.next_line(1);
        canon.straight_traverse(AxisPosition::from_xyz(1.0, 0.0, 0.0));
        assert!(canon.traverse().is_empty());

        canon.next_line(2);
        canon.straight_traverse(AxisPosition::from_xyz(2.0, 0.0, 0.0));
        assert_eq!(canon.traverse().len(), 1);
        assert_eq!(canon.traverse()[0].line_number, 2);
        assert_eq!(canon.traverse()[0].start.x, 1.0);
        assert_eq!(canon.traverse()[0].end.x, 2.0);
    }

    #[test]
    fn test_feed_rate_stored_per_second() {
        let mut canon = ToolpathAccumulator::new();
        canon.set_feed_rate(120.0);
        canon.straight_feed(AxisPosition::from_xyz(1.0, 1.0, 0.0));
        assert_eq!(canon.feed()[0].feed_rate, 2.0);
    }

    #[test]
    fn test_probe_records_as_feed() {
        let mut canon = ToolpathAccumulator::new();
        canon.straight_probe(AxisPosition::from_xyz(0.0, 0.0, -5.0));
        assert_eq!(canon.feed().len(), 1);
        assert_eq!(canon.feed()[0].end.z, -5.0);
    }

    #[test]
    fn test_dwell_accumulates_time_and_marks() {
        let mut canon = ToolpathAccumulator::new();
        canon.straight_feed(AxisPosition::from_xyz(3.0, 4.0, 5.0));
        canon.dwell(0.5);
        canon.dwell(1.25);
        assert_eq!(canon.total_dwell_time(), 1.75);
        assert_eq!(canon.dwells().len(), 2);
        assert_eq!(canon.dwells()[0].kind, MarkKind::Dwell);
        assert_eq!(canon.dwells()[1].position, DVec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_user_defined_function_marks_position() {
        let mut canon = ToolpathAccumulator::new();
        canon.user_defined_function(101, 0.0, 0.0);
        assert_eq!(canon.dwells().len(), 1);
        assert_eq!(canon.dwells()[0].kind, MarkKind::UserDefined);
    }

    #[test]
    fn test_suppressed_motion_records_nothing() {
        let mut canon = ToolpathAccumulator::new();
        canon.straight_traverse(AxisPosition::from_xyz(1.0, 0.0, 0.0));
        canon.straight_traverse(AxisPosition::from_xyz(2.0, 0.0, 0.0));
        assert_eq!(canon.segment_count(), 1);

        canon.suppress_recording();
        canon.straight_traverse(AxisPosition::from_xyz(3.0, 0.0, 0.0));
        canon.straight_feed(AxisPosition::from_xyz(4.0, 0.0, 0.0));
        canon.dwell(1.0);
        assert_eq!(canon.segment_count(), 1);
        assert!(canon.dwells().is_empty());

        canon.resume_recording();
        canon.straight_traverse(AxisPosition::from_xyz(5.0, 0.0, 0.0));
        assert_eq!(canon.traverse().len(), 2);
    }

    #[test]
    fn test_setters_apply_while_suppressed() {
        let mut canon = ToolpathAccumulator::new();
        canon.straight_traverse(AxisPosition::ZERO);
        canon.suppress_recording();
        canon.set_g5x_offset(2, AxisPosition::from_xyz(5.0, 0.0, 0.0));
        canon.set_xy_rotation(45.0);
        canon.resume_recording();

        assert_eq!(canon.transform().g5x_index(), 2);
        assert_eq!(canon.transform().rotation_degrees(), 45.0);
    }

    #[test]
    fn test_empty_extents_sentinel() {
        let canon = ToolpathAccumulator::new();
        let extents = canon.compute_extents();
        assert!(extents.with_tool.is_empty());
        assert!(extents.without_tool.is_empty());
        assert_eq!(extents.with_tool.min, DVec3::splat(9e99));
        assert_eq!(extents.with_tool.max, DVec3::splat(-9e99));
    }

    #[test]
    fn test_extents_cover_all_categories() {
        let mut canon = ToolpathAccumulator::new();
        canon.straight_traverse(AxisPosition::from_xyz(-1.0, 0.0, 0.0));
        canon.straight_traverse(AxisPosition::from_xyz(2.0, 0.0, 0.0));
        canon.straight_feed(AxisPosition::from_xyz(2.0, 7.0, -3.0));

        let extents = canon.compute_extents();
        assert_eq!(extents.with_tool.min, DVec3::new(-1.0, 0.0, -3.0));
        assert_eq!(extents.with_tool.max, DVec3::new(2.0, 7.0, 0.0));
    }

    #[test]
    fn test_extents_without_tool_subtracts_offset() {
        let mut canon = ToolpathAccumulator::new();
        canon.tool_offset(AxisPosition::from_xyz(0.0, 0.0, 2.0));
        canon.straight_feed(AxisPosition::from_xyz(0.0, 0.0, 0.0));
        canon.straight_feed(AxisPosition::from_xyz(1.0, 0.0, 0.0));

        let extents = canon.compute_extents();
        assert_eq!(extents.with_tool.max.z, 0.0);
        assert_eq!(extents.without_tool.max.z, -2.0);
    }
}
