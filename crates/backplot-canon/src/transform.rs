//! Running coordinate-transform state
//!
//! Converts program coordinates into the output frame segments are recorded
//! in. The order is fixed: translate by the G92 offset, rotate X/Y by the
//! cached angle, then translate by the work-coordinate-system offset.
//! Reversing that order corrupts all recorded geometry for any program that
//! combines rotation with offsets, so both directions live here in one place.

use backplot_core::AxisPosition;
use serde::{Deserialize, Serialize};

/// Offset and rotation state owned by the accumulator.
///
/// Mutated only through the explicit setters; motion recording reads it but
/// never changes it, so offset updates affect only subsequently emitted
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    g92_offset: AxisPosition,
    g5x_offset: AxisPosition,
    g5x_index: u8,
    rotation_deg: f64,
    rotation_cos: f64,
    rotation_sin: f64,
    tool_offset: AxisPosition,
}

impl TransformState {
    /// Identity transform: no offsets, no rotation, G54 active.
    pub fn new() -> Self {
        Self {
            g92_offset: AxisPosition::ZERO,
            g5x_offset: AxisPosition::ZERO,
            g5x_index: 1,
            rotation_deg: 0.0,
            rotation_cos: 1.0,
            rotation_sin: 0.0,
            tool_offset: AxisPosition::ZERO,
        }
    }

    /// Replace the work-coordinate-system offset and record which system is
    /// active.
    pub fn set_g5x_offset(&mut self, index: u8, offset: AxisPosition) {
        self.g5x_index = index;
        self.g5x_offset = offset;
    }

    /// Replace the G92 global offset.
    pub fn set_g92_offset(&mut self, offset: AxisPosition) {
        self.g92_offset = offset;
    }

    /// Set the XY rotation and cache its cosine/sine.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation_deg = degrees;
        let theta = degrees.to_radians();
        self.rotation_cos = theta.cos();
        self.rotation_sin = theta.sin();
    }

    /// Replace the tool-length offset, returning the previous one so the
    /// caller can apply the delta to its held position.
    pub fn replace_tool_offset(&mut self, offset: AxisPosition) -> AxisPosition {
        std::mem::replace(&mut self.tool_offset, offset)
    }

    /// Currently active work-coordinate-system index.
    pub fn g5x_index(&self) -> u8 {
        self.g5x_index
    }

    /// Active work-coordinate-system offset.
    pub fn g5x_offset(&self) -> AxisPosition {
        self.g5x_offset
    }

    /// Active G92 offset.
    pub fn g92_offset(&self) -> AxisPosition {
        self.g92_offset
    }

    /// Current XY rotation in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_deg
    }

    /// Current tool-length offset.
    pub fn tool_offset(&self) -> AxisPosition {
        self.tool_offset
    }

    /// Transform a program-coordinate position into the output frame.
    pub fn apply(&self, pos: AxisPosition) -> AxisPosition {
        let mut p = pos + self.g92_offset;
        if self.rotation_deg != 0.0 {
            let rx = p.x * self.rotation_cos - p.y * self.rotation_sin;
            let ry = p.x * self.rotation_sin + p.y * self.rotation_cos;
            p.x = rx;
            p.y = ry;
        }
        p + self.g5x_offset
    }

    /// Map an output-frame position back to program coordinates.
    ///
    /// Exact inverse of [`TransformState::apply`]; arc tessellation uses it
    /// to recover the program-space start point of an arc.
    pub fn unapply(&self, pos: AxisPosition) -> AxisPosition {
        let mut p = pos - self.g5x_offset;
        if self.rotation_deg != 0.0 {
            let rx = p.x * self.rotation_cos + p.y * self.rotation_sin;
            let ry = -p.x * self.rotation_sin + p.y * self.rotation_cos;
            p.x = rx;
            p.y = ry;
        }
        p - self.g92_offset
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}
