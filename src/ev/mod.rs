// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Samples, events and cached state of analog and digital controls.

pub mod filter;
pub mod state;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Raw value of a single axis delivered by the host for one tick.
///
/// Sticks report values in `[-1.0, 1.0]`, triggers in `[0.0, 1.0]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisSample {
    pub value: f32,
    pub tick: u64,
    pub delta_time: f32,
}

impl AxisSample {
    pub fn new(value: f32, tick: u64, delta_time: f32) -> Self {
        AxisSample {
            value,
            tick,
            delta_time,
        }
    }
}

/// Raw values of both axes of a stick, sampled in the same tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StickSample {
    pub x: f32,
    pub y: f32,
    pub tick: u64,
    pub delta_time: f32,
}

impl StickSample {
    pub fn new(x: f32, y: f32, tick: u64, delta_time: f32) -> Self {
        StickSample {
            x,
            y,
            tick,
            delta_time,
        }
    }

    /// Splits sample into `(x, y)` axis samples.
    pub fn split(&self) -> (AxisSample, AxisSample) {
        (
            AxisSample::new(self.x, self.tick, self.delta_time),
            AxisSample::new(self.y, self.tick, self.delta_time),
        )
    }
}

/// Analog controls of a virtual gamepad.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    LeftStickX = 0,
    LeftStickY = 1,
    RightStickX = 2,
    RightStickY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
    Unknown = 6,
}

impl Axis {
    /// Returns `true` for axes with `[0.0, 1.0]` range.
    pub fn is_trigger(self) -> bool {
        match self {
            Axis::LeftTrigger | Axis::RightTrigger => true,
            _ => false,
        }
    }

    /// Returns stick this axis is part of.
    pub fn stick(self) -> Option<Stick> {
        match self {
            Axis::LeftStickX | Axis::LeftStickY => Some(Stick::Left),
            Axis::RightStickX | Axis::RightStickY => Some(Stick::Right),
            _ => None,
        }
    }

    pub fn is_y(self) -> bool {
        match self {
            Axis::LeftStickY | Axis::RightStickY => true,
            _ => false,
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Unknown
    }
}

/// Pair of axes shaped together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Stick {
    Left,
    Right,
}

impl Stick {
    /// Returns `(x, y)` axes of stick.
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Stick::Left => (Axis::LeftStickX, Axis::LeftStickY),
            Stick::Right => (Axis::RightStickX, Axis::RightStickY),
        }
    }
}

/// Digital controls of a virtual gamepad.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Button {
    // Action Pad
    Action1 = 0,
    Action2 = 1,
    Action3 = 2,
    Action4 = 3,
    // Shoulders
    LeftBumper = 4,
    RightBumper = 5,
    LeftTrigger = 6,
    RightTrigger = 7,
    // D-Pad
    DPadUp = 8,
    DPadDown = 9,
    DPadLeft = 10,
    DPadRight = 11,
    // Sticks
    LeftStickButton = 12,
    RightStickButton = 13,

    Menu = 14,
    Unknown = 15,
}

impl Default for Button {
    fn default() -> Self {
        Button::Unknown
    }
}

/// Event of a virtual gamepad.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Event {
    pub event: EventType,
    pub tick: u64,
}

impl Event {
    pub fn new(event: EventType, tick: u64) -> Self {
        Event { event, tick }
    }

    /// Creates `AxisChanged` event from raw sample.
    pub fn axis_changed(axis: Axis, sample: &AxisSample) -> Self {
        Event::new(EventType::AxisChanged(axis, sample.value), sample.tick)
    }

    /// Returns `Event` with `EventType::Dropped`.
    pub fn dropped() -> Self {
        Event::new(EventType::Dropped, 0)
    }

    /// Returns `true` if event is `Dropped` and should be ignored.
    pub fn is_dropped(&self) -> bool {
        self.event == EventType::Dropped
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventType {
    ButtonPressed(Button),
    ButtonReleased(Button),
    AxisChanged(Axis, f32),
    /// Event was dropped by a filter.
    Dropped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_axes() {
        assert_eq!(Stick::Left.axes(), (Axis::LeftStickX, Axis::LeftStickY));
        assert_eq!(Axis::RightStickY.stick(), Some(Stick::Right));
        assert_eq!(Axis::LeftTrigger.stick(), None);
        assert!(Axis::RightTrigger.is_trigger());
        assert!(!Axis::LeftStickX.is_trigger());
    }

    #[test]
    fn split_stick_sample() {
        let (x, y) = StickSample::new(0.3, -0.4, 7, 0.02).split();
        assert_eq!(x, AxisSample::new(0.3, 7, 0.02));
        assert_eq!(y, AxisSample::new(-0.4, 7, 0.02));
    }
}
