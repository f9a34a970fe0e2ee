// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Snapping of 2D input to a fixed set of directions.

use crate::utils::Vec2;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Number of evenly spaced directions, starting at "up".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SnapAngles {
    None,
    Four,
    Eight,
    Sixteen,
}

impl SnapAngles {
    pub fn count(self) -> u32 {
        match self {
            SnapAngles::None => 0,
            SnapAngles::Four => 4,
            SnapAngles::Eight => 8,
            SnapAngles::Sixteen => 16,
        }
    }
}

impl Default for SnapAngles {
    fn default() -> Self {
        SnapAngles::None
    }
}

/// Rotates `vector` to nearest of `angles` directions. Magnitude is preserved.
pub fn snap_to(vector: Vec2, angles: SnapAngles) -> Vec2 {
    match angles.count() {
        0 => vector,
        n => snap_to_angle(vector, 360.0 / n as f32),
    }
}

/// Rotates `vector` to nearest multiple of `snap_angle` degrees measured from "up".
pub fn snap_to_angle(vector: Vec2, snap_angle: f32) -> Vec2 {
    if !(snap_angle > 0.0) {
        return vector;
    }

    let angle = vector.angle(Vec2::UP);
    let half = snap_angle / 2.0;

    if angle < half {
        return Vec2::UP * vector.magnitude();
    }

    if angle > 180.0 - half {
        return -Vec2::UP * vector.magnitude();
    }

    let delta = (angle / snap_angle).round() * snap_angle - angle;

    // Angle is unsigned, rotate away from "up" on whichever side vector is.
    if vector.x > 0.0 {
        vector.rotate(-delta)
    } else {
        vector.rotate(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn four_directions() {
        assert!(approx(snap_to(Vec2::new(0.9, 0.1), SnapAngles::Four), Vec2::new(0.9055385, 0.0)));
        assert!(approx(snap_to(Vec2::new(-0.9, 0.2), SnapAngles::Four), Vec2::new(-0.92195445, 0.0)));
        assert!(approx(snap_to(Vec2::new(0.1, 0.5), SnapAngles::Four), Vec2::new(0.0, 0.50990195)));
        assert!(approx(snap_to(Vec2::new(0.1, -0.5), SnapAngles::Four), Vec2::new(0.0, -0.50990195)));
    }

    #[test]
    fn eight_directions() {
        let diag = snap_to(Vec2::new(1.0, 0.8), SnapAngles::Eight);
        assert!((diag.x - diag.y).abs() < 1e-5);
        assert!((diag.magnitude() - Vec2::new(1.0, 0.8).magnitude()).abs() < 1e-5);

        let diag = snap_to(Vec2::new(-0.7, -0.6), SnapAngles::Eight);
        assert!((diag.x - diag.y).abs() < 1e-5);
        assert!(diag.x < 0.0);
    }

    #[test]
    fn none_and_zero() {
        let v = Vec2::new(0.3, 0.7);
        assert_eq!(snap_to(v, SnapAngles::None), v);
        assert_eq!(snap_to(Vec2::ZERO, SnapAngles::Eight), Vec2::ZERO);
        assert_eq!(snap_to_angle(v, 0.0), v);
    }
}
