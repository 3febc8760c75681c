//! Arc tessellation
//!
//! Converts circular/helical arc-feed primitives into short straight spans
//! for approximation. Tessellation is a collaborator of the accumulator and
//! is injected at construction time; [`PlanarArcTessellator`] is the default
//! implementation.

use crate::canon::ArcParams;
use crate::transform::TransformState;
use backplot_core::{AxisPosition, Error, Plane, Result};
use std::f64::consts::TAU;

/// Angular slack when normalizing the swept angle, so a start/end pair that
/// coincides within floating error still reads as a full turn.
const CIRCLE_FUZZ: f64 = 1e-9;

/// Minimum number of spans per arc regardless of sweep.
const MIN_ARC_STEPS: u32 = 3;

/// Converts one canonical arc into intermediate positions.
///
/// Implementations receive the accumulator's transform state and the current
/// position in the output frame, and must return output-frame positions in
/// emission order with the arc endpoint as the final element.
pub trait ArcTessellator: Send + Sync {
    /// Tessellate one arc.
    ///
    /// `divisions` is the span count for a full turn; shorter sweeps get
    /// proportionally fewer spans.
    fn tessellate(
        &self,
        params: &ArcParams,
        transform: &TransformState,
        plane: Plane,
        current_position: AxisPosition,
        line_number: u32,
        divisions: u32,
    ) -> Result<Vec<AxisPosition>>;
}

/// Default tessellator: circular interpolation in the active plane with
/// linear interpolation of the radius (spiral), the plane normal (helix),
/// and the six remaining axes.
///
/// Works in program coordinates: the current position is mapped back through
/// the inverse transform, swept about the center, and each generated point
/// is pushed through the forward transform again. This keeps the arc true in
/// the program frame even when an XY rotation is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarArcTessellator;

impl PlanarArcTessellator {
    /// Map a position into (first, second, axis) plane coordinates.
    fn to_plane(plane: Plane, pos: AxisPosition) -> (f64, f64, f64) {
        match plane {
            Plane::XY => (pos.x, pos.y, pos.z),
            Plane::XZ => (pos.z, pos.x, pos.y),
            Plane::YZ => (pos.y, pos.z, pos.x),
        }
    }

    /// Map (first, second, axis) plane coordinates back to (x, y, z).
    fn from_plane(plane: Plane, first: f64, second: f64, axis: f64) -> (f64, f64, f64) {
        match plane {
            Plane::XY => (first, second, axis),
            Plane::XZ => (second, axis, first),
            Plane::YZ => (axis, first, second),
        }
    }

    /// Swept angle from `theta1` to `theta2` honoring the signed turn count.
    fn sweep_angle(theta1: f64, theta2: f64, rotation: i32) -> f64 {
        let mut theta2 = theta2;
        if rotation < 0 {
            while theta2 - theta1 > -CIRCLE_FUZZ {
                theta2 -= TAU;
            }
            theta2 -= TAU * (rotation.unsigned_abs() as f64 - 1.0);
        } else {
            while theta2 - theta1 < CIRCLE_FUZZ {
                theta2 += TAU;
            }
            theta2 += TAU * (rotation as f64 - 1.0);
        }
        theta2 - theta1
    }
}

impl ArcTessellator for PlanarArcTessellator {
    fn tessellate(
        &self,
        params: &ArcParams,
        transform: &TransformState,
        plane: Plane,
        current_position: AxisPosition,
        line_number: u32,
        divisions: u32,
    ) -> Result<Vec<AxisPosition>> {
        if params.rotation == 0 {
            return Err(Error::ArcTessellation {
                line_number,
                reason: "rotation count is zero".to_string(),
            });
        }

        let start = transform.unapply(current_position);
        let (o_first, o_second, o_axis) = Self::to_plane(plane, start);

        let start_radius =
            (o_first - params.first_center).hypot(o_second - params.second_center);
        let end_radius =
            (params.first_end - params.first_center).hypot(params.second_end - params.second_center);
        if !start_radius.is_finite() || !end_radius.is_finite() {
            return Err(Error::ArcTessellation {
                line_number,
                reason: "non-finite arc radius".to_string(),
            });
        }
        if start_radius < CIRCLE_FUZZ {
            return Err(Error::ArcTessellation {
                line_number,
                reason: "start position coincides with arc center".to_string(),
            });
        }

        let theta1 = (o_second - params.second_center).atan2(o_first - params.first_center);
        let theta2 =
            (params.second_end - params.second_center).atan2(params.first_end - params.first_center);
        let sweep = Self::sweep_angle(theta1, theta2, params.rotation);

        let steps = ((divisions as f64 * sweep.abs() / TAU).ceil() as u32).max(MIN_ARC_STEPS);
        let inv_steps = 1.0 / steps as f64;

        let end = {
            let (x, y, z) =
                Self::from_plane(plane, params.first_end, params.second_end, params.axis_end);
            AxisPosition::new(x, y, z, params.a, params.b, params.c, params.u, params.v, params.w)
        };

        let mut points = Vec::with_capacity(steps as usize);
        for i in 1..steps {
            let t = i as f64 * inv_steps;
            let angle = theta1 + sweep * t;
            let radius = start_radius + (end_radius - start_radius) * t;
            let first = params.first_center + radius * angle.cos();
            let second = params.second_center + radius * angle.sin();
            let axis = o_axis + (params.axis_end - o_axis) * t;
            let (x, y, z) = Self::from_plane(plane, first, second, axis);

            // in-plane coordinates sweep the circle; the other six axes
            // interpolate linearly alongside
            let blended = start.lerp(end, t);
            let point = blended.with_xyz(x, y, z);
            points.push(transform.apply(point));
        }

        // land exactly on the programmed endpoint, no accumulated drift
        points.push(transform.apply(end));
        Ok(points)
    }
}
