//! Geometry primitives for toolpath accumulation
//!
//! This module provides:
//! - Full 9-axis position tracking (X, Y, Z, A, B, C, U, V, W)
//! - Canonical plane selection (G17/G18/G19)
//! - Bounding-extent containers with an explicit "empty" sentinel

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Sentinel magnitude marking extents that contain no points yet.
///
/// A fresh [`Extents`] starts at `min = (9e99, ...)`, `max = (-9e99, ...)`;
/// callers must check [`Extents::is_empty`] before treating the corners as
/// valid geometry.
pub const EXTENT_SENTINEL: f64 = 9e99;

/// A full 9-axis machine position.
///
/// Covers the three linear axes (X, Y, Z), the three rotary axes (A, B, C),
/// and the three secondary linear axes (U, V, W). Positions are plain value
/// types: accumulation steps produce new positions rather than mutating old
/// ones, so a stored segment can never observe later motion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisPosition {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
    /// A-axis (rotary) position
    pub a: f64,
    /// B-axis (rotary) position
    pub b: f64,
    /// C-axis (rotary) position
    pub c: f64,
    /// U-axis position
    pub u: f64,
    /// V-axis position
    pub v: f64,
    /// W-axis position
    pub w: f64,
}

impl AxisPosition {
    /// The all-zero position.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        a: 0.0,
        b: 0.0,
        c: 0.0,
        u: 0.0,
        v: 0.0,
        w: 0.0,
    };

    /// Create a position with all nine axes specified.
    #[allow(clippy::too_many_arguments)]
    pub fn new(x: f64, y: f64, z: f64, a: f64, b: f64, c: f64, u: f64, v: f64, w: f64) -> Self {
        Self {
            x,
            y,
            z,
            a,
            b,
            c,
            u,
            v,
            w,
        }
    }

    /// Create a position from the linear axes only, the rest at zero.
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::ZERO
        }
    }

    /// Create a position from an axis array ordered X..W.
    pub fn from_array(axes: [f64; 9]) -> Self {
        let [x, y, z, a, b, c, u, v, w] = axes;
        Self::new(x, y, z, a, b, c, u, v, w)
    }

    /// All nine axes as an array ordered X..W.
    pub fn to_array(self) -> [f64; 9] {
        [
            self.x, self.y, self.z, self.a, self.b, self.c, self.u, self.v, self.w,
        ]
    }

    /// The three linear axes as a 3D vector.
    pub fn xyz(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Copy of this position with the linear axes replaced.
    pub fn with_xyz(self, x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, ..self }
    }

    /// Linear interpolation between two positions, component-wise.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for AxisPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            c: self.c + rhs.c,
            u: self.u + rhs.u,
            v: self.v + rhs.v,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for AxisPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            a: self.a - rhs.a,
            b: self.b - rhs.b,
            c: self.c - rhs.c,
            u: self.u - rhs.u,
            v: self.v - rhs.v,
            w: self.w - rhs.w,
        }
    }
}

impl std::ops::Mul<f64> for AxisPosition {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            a: self.a * rhs,
            b: self.b * rhs,
            c: self.c * rhs,
            u: self.u * rhs,
            v: self.v * rhs,
            w: self.w * rhs,
        }
    }
}

impl fmt::Display for AxisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{:.3} Y:{:.3} Z:{:.3} A:{:.3} B:{:.3} C:{:.3} U:{:.3} V:{:.3} W:{:.3}",
            self.x, self.y, self.z, self.a, self.b, self.c, self.u, self.v, self.w
        )
    }
}

/// Canonical plane selection (G17/G18/G19)
///
/// Determines which pair of axes an arc sweeps in and which axis carries the
/// helix. The in-plane axis ordering follows the canonical-motion convention:
/// X/Y for [`Plane::XY`], Z/X for [`Plane::XZ`], Y/Z for [`Plane::YZ`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Plane {
    /// XY plane (G17), helix along Z
    #[default]
    XY,
    /// XZ plane (G18), helix along Y
    XZ,
    /// YZ plane (G19), helix along X
    YZ,
}

impl Plane {
    /// Map a plane-select G-code number (17, 18, 19) to a plane.
    pub fn from_gcode(code: u16) -> Option<Self> {
        match code {
            17 => Some(Self::XY),
            18 => Some(Self::XZ),
            19 => Some(Self::YZ),
            _ => None,
        }
    }

    /// Zero-based plane index in G17/G18/G19 order.
    pub fn index(self) -> u8 {
        match self {
            Self::XY => 0,
            Self::XZ => 1,
            Self::YZ => 2,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XY => write!(f, "XY"),
            Self::XZ => write!(f, "XZ"),
            Self::YZ => write!(f, "YZ"),
        }
    }
}

/// Axis-aligned bounding box over the three linear axes.
///
/// Starts at the [`EXTENT_SENTINEL`] corners; expanding with the first point
/// collapses it onto that point. The sentinel state is how an empty path
/// reports "no extents yet" instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Extents {
    /// Create empty extents at the sentinel corners.
    pub fn new() -> Self {
        Self {
            min: DVec3::splat(EXTENT_SENTINEL),
            max: DVec3::splat(-EXTENT_SENTINEL),
        }
    }

    /// True while no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grow the box to contain `point`.
    pub fn expand(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Edge lengths of the box, zero while empty.
    pub fn size(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Geometric center of the box, origin while empty.
    pub fn center(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounding extents of an accumulated path, with and without the per-segment
/// tool-length offset applied.
///
/// The accumulated positions describe the tool tip; subtracting each
/// segment's recorded tool offset yields the extents of the controlled
/// point instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathExtents {
    /// Extents of the tool-tip positions as recorded.
    pub with_tool: Extents,
    /// Extents with each segment's tool-length offset subtracted.
    pub without_tool: Extents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_position_add_sub() {
        let a = AxisPosition::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let b = AxisPosition::from_xyz(0.5, 0.5, 0.5);
        let sum = a + b;
        assert_eq!(sum.x, 1.5);
        assert_eq!(sum.y, 2.5);
        assert_eq!(sum.a, 4.0);
        let diff = sum - b;
        assert_eq!(diff, a);
    }

    #[test]
    fn test_axis_position_lerp_midpoint() {
        let a = AxisPosition::from_xyz(0.0, 0.0, 0.0);
        let b = AxisPosition::new(10.0, 0.0, -4.0, 90.0, 0.0, 0.0, 0.0, 0.0, 2.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.x, 5.0);
        assert_eq!(mid.z, -2.0);
        assert_eq!(mid.a, 45.0);
        assert_eq!(mid.w, 1.0);
    }

    #[test]
    fn test_axis_array_ordering() {
        let pos = AxisPosition::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(pos.c, 6.0);
        assert_eq!(pos.w, 9.0);
        assert_eq!(pos.to_array()[3], 4.0);
    }

    #[test]
    fn test_plane_gcode_mapping() {
        assert_eq!(Plane::from_gcode(17), Some(Plane::XY));
        assert_eq!(Plane::from_gcode(18), Some(Plane::XZ));
        assert_eq!(Plane::from_gcode(19), Some(Plane::YZ));
        assert_eq!(Plane::from_gcode(20), None);
        assert_eq!(Plane::XZ.index(), 1);
    }

    #[test]
    fn test_extents_sentinel_when_empty() {
        let extents = Extents::new();
        assert!(extents.is_empty());
        assert_eq!(extents.min, DVec3::splat(EXTENT_SENTINEL));
        assert_eq!(extents.max, DVec3::splat(-EXTENT_SENTINEL));
        assert_eq!(extents.size(), DVec3::ZERO);
    }

    #[test]
    fn test_extents_expand() {
        let mut extents = Extents::new();
        extents.expand(DVec3::new(1.0, -2.0, 3.0));
        assert!(!extents.is_empty());
        assert_eq!(extents.min, DVec3::new(1.0, -2.0, 3.0));
        extents.expand(DVec3::new(-1.0, 4.0, 3.0));
        assert_eq!(extents.min, DVec3::new(-1.0, -2.0, 3.0));
        assert_eq!(extents.max, DVec3::new(1.0, 4.0, 3.0));
        assert_eq!(extents.size(), DVec3::new(2.0, 6.0, 0.0));
        assert_eq!(extents.center(), DVec3::new(0.0, 1.0, 3.0));
    }
}
