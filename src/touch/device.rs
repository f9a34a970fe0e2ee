// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Virtual gamepad driven by on-screen touch controls.
//!
//! Touch controls (virtual sticks, buttons) receive contacts from `TouchTracker` and submit the
//! resulting values here once per tick. Game code then reads the device the same way it reads a
//! physical gamepad.

use crate::ev::state::InputState;
use crate::ev::{Axis, Button, Stick};
use crate::shape::DeadZone;
use crate::utils::{self, Vec2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Stick(s) an analog touch control writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AnalogTarget {
    None,
    LeftStick,
    RightStick,
    Both,
}

impl AnalogTarget {
    fn sticks(self) -> &'static [Stick] {
        match self {
            AnalogTarget::None => &[],
            AnalogTarget::LeftStick => &[Stick::Left],
            AnalogTarget::RightStick => &[Stick::Right],
            AnalogTarget::Both => &[Stick::Left, Stick::Right],
        }
    }
}

impl Default for AnalogTarget {
    fn default() -> Self {
        AnalogTarget::None
    }
}

#[derive(Clone, Debug, Default)]
pub struct TouchDevice {
    state: InputState,
}

impl TouchDevice {
    pub fn new() -> Self {
        TouchDevice {
            state: InputState::new(),
        }
    }

    /// Submits stick value after applying circular dead zone.
    pub fn submit_analog(&mut self, target: AnalogTarget, value: Vec2, dz: DeadZone, tick: u64) {
        self.submit_raw_analog(target, dz.apply_circular(value), tick);
    }

    /// Submits stick value as is, clamped to `[-1.0, 1.0]`.
    pub fn submit_raw_analog(&mut self, target: AnalogTarget, value: Vec2, tick: u64) {
        let x = utils::clamp(value.x, -1.0, 1.0);
        let y = utils::clamp(value.y, -1.0, 1.0);

        for stick in target.sticks() {
            let (x_axis, y_axis) = stick.axes();
            self.state.update_axis(x_axis, x, tick);
            self.state.update_axis(y_axis, y, tick);
        }
    }

    /// Submits button state. `Button::Unknown` is ignored.
    pub fn submit_button(&mut self, button: Button, pressed: bool, tick: u64) {
        self.state.update_button(button, pressed, tick);
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn value(&self, axis: Axis) -> f32 {
        self.state.value(axis)
    }

    pub fn stick(&self, stick: Stick) -> Vec2 {
        let (x, y) = stick.axes();
        Vec2::new(self.value(x), self.value(y))
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.state.is_pressed(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analog_targets() {
        let mut dev = TouchDevice::new();
        dev.submit_raw_analog(AnalogTarget::LeftStick, Vec2::new(0.5, -0.5), 1);
        assert_eq!(dev.stick(Stick::Left), Vec2::new(0.5, -0.5));
        assert_eq!(dev.stick(Stick::Right), Vec2::ZERO);

        dev.submit_raw_analog(AnalogTarget::Both, Vec2::new(2.0, 0.0), 2);
        assert_eq!(dev.stick(Stick::Left), Vec2::new(1.0, 0.0));
        assert_eq!(dev.stick(Stick::Right), Vec2::new(1.0, 0.0));

        dev.submit_raw_analog(AnalogTarget::None, Vec2::new(-1.0, -1.0), 3);
        assert_eq!(dev.stick(Stick::Left), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn analog_dead_zone() {
        let mut dev = TouchDevice::new();
        let dz = DeadZone::default();
        dev.submit_analog(AnalogTarget::RightStick, Vec2::new(0.1, 0.1), dz, 1);
        assert_eq!(dev.stick(Stick::Right), Vec2::ZERO);

        dev.submit_analog(AnalogTarget::RightStick, Vec2::new(0.0, -3.0), dz, 2);
        assert_eq!(dev.stick(Stick::Right), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn buttons() {
        let mut dev = TouchDevice::new();
        dev.submit_button(Button::Action1, true, 1);
        assert!(dev.is_pressed(Button::Action1));
        assert!(dev.state().was_pressed(Button::Action1, 1));
        dev.submit_button(Button::Action1, false, 2);
        assert!(!dev.is_pressed(Button::Action1));
    }
}
