// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Dead-zone shaping of raw analog values.
//!
//! Analog sticks and triggers never rest exactly at zero and rarely reach their mechanical
//! extreme. Shaping suppresses everything below `lower` threshold, saturates everything above
//! `upper` threshold and linearly rescales what is between, so the result covers the full
//! `[-1.0, 1.0]` range. The mapping is continuous and monotonic.
//!
//! Sticks should be shaped with [`apply_circular_dead_zone`]. Shaping each axis independently
//! produces a square dead zone and distorts diagonals; circular shaping only attenuates the
//! magnitude and keeps direction intact.
//!
//! ```
//! use tactus::shape::{apply_circular_dead_zone, apply_dead_zone};
//!
//! assert_eq!(apply_dead_zone(0.1, 0.2, 0.9), 0.0);
//! assert_eq!(apply_dead_zone(-0.95, 0.2, 0.9), -1.0);
//! assert!((apply_dead_zone(0.55, 0.2, 0.9) - 0.5).abs() < 1e-6);
//!
//! let (x, y) = apply_circular_dead_zone(0.6, 0.8, 0.2, 0.9);
//! assert!((x / y - 0.75).abs() < 1e-6);
//! ```

pub mod snap;

use crate::ev::{Axis, AxisSample, Stick, StickSample};
use crate::utils::{self, Vec2};

use vec_map::VecMap;

use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOWER_DEAD_ZONE: f32 = 0.2;
pub const DEFAULT_UPPER_DEAD_ZONE: f32 = 0.9;

/// Shapes single axis value.
///
/// Returns `0.0` when `|raw| <= lower`, `±1.0` when `|raw| >= upper` and linearly rescaled value
/// with sign of `raw` otherwise. Thresholds outside `[0.0, 1.0]` are clamped. If `upper` is not
/// greater than `lower` the result is a step at `lower`. `NaN` is treated as `0.0`.
pub fn apply_dead_zone(raw: f32, lower: f32, upper: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }

    let lower = utils::clamp(lower, 0.0, 1.0);
    let upper = utils::clamp(upper, 0.0, 1.0);
    let mag = raw.abs();

    if mag <= lower {
        0.0
    } else if mag >= upper {
        utils::sign(raw)
    } else {
        utils::sign(raw) * (mag - lower) / (upper - lower)
    }
}

/// Shapes stick value using its magnitude.
///
/// Returns `(0.0, 0.0)` when magnitude is not above `lower`. Otherwise returns unit direction of
/// `(x, y)` scaled by `apply_dead_zone(magnitude, lower, upper)`, which is never above `1.0`.
pub fn apply_circular_dead_zone(x: f32, y: f32, lower: f32, upper: f32) -> (f32, f32) {
    let mag = x.hypot(y);

    if mag.is_nan() || mag <= utils::clamp(lower, 0.0, 1.0) {
        return (0.0, 0.0);
    }

    if mag.is_infinite() {
        // Direction of infinite vector is only known if one component is finite.
        return match (x.is_infinite(), y.is_infinite()) {
            (true, false) => (utils::sign(x), 0.0),
            (false, true) => (0.0, utils::sign(y)),
            _ => (0.0, 0.0),
        };
    }

    let scale = apply_dead_zone(mag, lower, upper) / mag;
    (x * scale, y * scale)
}

/// Validated pair of dead-zone thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DeadZone {
    lower: f32,
    upper: f32,
}

impl DeadZone {
    /// Creates new dead zone. Both thresholds must be finite, in `[0.0, 1.0]` and `lower` must
    /// be less than `upper`.
    pub fn new(lower: f32, upper: f32) -> Result<Self, Error> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::NotFinite);
        }

        if lower < 0.0 || lower > 1.0 || upper < 0.0 || upper > 1.0 {
            return Err(Error::OutOfRange);
        }

        if lower >= upper {
            return Err(Error::LowerNotBelowUpper);
        }

        Ok(DeadZone { lower, upper })
    }

    /// Dead zone that passes values through unchanged.
    pub fn none() -> Self {
        DeadZone {
            lower: 0.0,
            upper: 1.0,
        }
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    pub fn apply(&self, raw: f32) -> f32 {
        apply_dead_zone(raw, self.lower, self.upper)
    }

    pub fn apply_circular(&self, value: Vec2) -> Vec2 {
        apply_circular_dead_zone(value.x, value.y, self.lower, self.upper).into()
    }
}

impl Default for DeadZone {
    fn default() -> Self {
        DeadZone {
            lower: DEFAULT_LOWER_DEAD_ZONE,
            upper: DEFAULT_UPPER_DEAD_ZONE,
        }
    }
}

/// Shapes raw samples of a virtual gamepad.
///
/// Created with [`AnalogShaperBuilder`]. Triggers are clamped to `[0.0, 1.0]` before and after
/// shaping.
#[derive(Clone, Debug)]
pub struct AnalogShaper {
    axes: VecMap<DeadZone>,
    default: DeadZone,
    circular_sticks: bool,
    invert_y: bool,
}

impl AnalogShaper {
    /// Creates shaper with default dead zone on every axis and circular sticks.
    pub fn new() -> Self {
        AnalogShaperBuilder::new().build()
    }

    /// Returns dead zone used for `axis`.
    pub fn dead_zone(&self, axis: Axis) -> DeadZone {
        self.axes
            .get(axis as usize)
            .cloned()
            .unwrap_or(self.default)
    }

    pub fn is_circular(&self) -> bool {
        self.circular_sticks
    }

    /// Shapes single axis. Axes of sticks are shaped independently here, use `shape_stick()` for
    /// circular dead zone.
    pub fn shape_axis(&self, axis: Axis, sample: &AxisSample) -> f32 {
        let dz = self.dead_zone(axis);

        if axis.is_trigger() {
            return utils::clamp(dz.apply(utils::clamp(sample.value, 0.0, 1.0)), 0.0, 1.0);
        }

        let value = if self.invert_y && axis.is_y() {
            -sample.value
        } else {
            sample.value
        };

        dz.apply(value)
    }

    /// Shapes both axes of stick. Circular sticks use dead zone of the X axis.
    pub fn shape_stick(&self, stick: Stick, sample: &StickSample) -> Vec2 {
        let (x_axis, y_axis) = stick.axes();
        let y = if self.invert_y { -sample.y } else { sample.y };

        if self.circular_sticks {
            self.dead_zone(x_axis).apply_circular(Vec2::new(sample.x, y))
        } else {
            Vec2::new(
                self.dead_zone(x_axis).apply(sample.x),
                self.dead_zone(y_axis).apply(y),
            )
        }
    }
}

impl Default for AnalogShaper {
    fn default() -> Self {
        AnalogShaper::new()
    }
}

/// Creates `AnalogShaper` with customized options.
#[derive(Clone, Debug)]
pub struct AnalogShaperBuilder {
    axes: VecMap<DeadZone>,
    default: DeadZone,
    circular_sticks: bool,
    invert_y: bool,
}

impl AnalogShaperBuilder {
    pub fn new() -> Self {
        AnalogShaperBuilder {
            axes: VecMap::new(),
            default: DeadZone::default(),
            circular_sticks: true,
            invert_y: false,
        }
    }

    /// Dead zone for axes without explicitly set one.
    pub fn default_dead_zone(mut self, dz: DeadZone) -> Self {
        self.default = dz;
        self
    }

    /// Sets dead zone of single axis. `Axis::Unknown` is ignored.
    pub fn dead_zone(mut self, axis: Axis, dz: DeadZone) -> Self {
        if axis != Axis::Unknown {
            self.axes.insert(axis as usize, dz);
        }
        self
    }

    /// Sets dead zone of both axes of `stick`.
    pub fn stick_dead_zone(self, stick: Stick, dz: DeadZone) -> Self {
        let (x, y) = stick.axes();
        self.dead_zone(x, dz).dead_zone(y, dz)
    }

    /// Shape sticks by magnitude instead of per axis. Default: `true`.
    pub fn circular_sticks(mut self, circular: bool) -> Self {
        self.circular_sticks = circular;
        self
    }

    /// Negate Y axes of sticks before shaping, for sources that report Y pointing down.
    /// Default: `false`.
    pub fn invert_y(mut self, invert: bool) -> Self {
        self.invert_y = invert;
        self
    }

    pub fn build(self) -> AnalogShaper {
        AnalogShaper {
            axes: self.axes,
            default: self.default,
            circular_sticks: self.circular_sticks,
            invert_y: self.invert_y,
        }
    }
}

impl Default for AnalogShaperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid dead-zone configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// One of thresholds is NaN or infinite.
    NotFinite,
    /// One of thresholds is outside `[0.0, 1.0]`.
    OutOfRange,
    /// Lower threshold is not less than upper threshold.
    LowerNotBelowUpper,
}

impl Error {
    pub fn to_str(self) -> &'static str {
        match self {
            Error::NotFinite => "dead zone threshold is not finite",
            Error::OutOfRange => "dead zone threshold is outside [0, 1]",
            Error::LowerNotBelowUpper => "lower dead zone must be less than upper dead zone",
        }
    }
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.to_str())
    }
}
