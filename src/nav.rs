// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Discrete menu navigation from analog input.
//!
//! `MoveRepeat` turns stick or d-pad direction into single "move" steps the way keyboard
//! auto-repeat does: one step when the direction is pushed, another after `first_delay` and
//! then one every `repeat_delay` while it is held.
//!
//! ```
//! use tactus::nav::{MoveDirection, MoveRepeat};
//! use tactus::Vec2;
//!
//! let mut nav = MoveRepeat::new();
//! assert_eq!(nav.update(Vec2::new(0.9, 0.1), 0.016), Some(MoveDirection::Right));
//! assert_eq!(nav.update(Vec2::new(0.9, 0.1), 0.016), None);
//! ```

use crate::utils::{self, Vec2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// If direction is pushed again within this many seconds after being released, repeating starts
/// with `repeat_delay` instead of `first_delay`.
const REPRESS_WINDOW: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Key-repeat for directional input. Time is accumulated from `delta_time` passed to `update()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveRepeat {
    /// Axis value that has to be exceeded for direction to count as pushed.
    pub threshold: f32,
    /// Seconds between first and second step.
    pub first_delay: f32,
    /// Seconds between subsequent steps.
    pub repeat_delay: f32,
    time: f32,
    this_vector: Vec2,
    last_vector: Vec2,
    next_move_time: f32,
    last_pressed_time: f32,
}

impl MoveRepeat {
    /// Creates new `MoveRepeat` with threshold 0.5, first delay 0.8 s and repeat delay 0.1 s.
    pub fn new() -> Self {
        MoveRepeat {
            threshold: 0.5,
            first_delay: 0.8,
            repeat_delay: 0.1,
            time: 0.0,
            this_vector: Vec2::ZERO,
            last_vector: Vec2::ZERO,
            next_move_time: 0.0,
            last_pressed_time: f32::NEG_INFINITY,
        }
    }

    /// Advances time by `delta_time` seconds and returns step to take in this tick, if any.
    pub fn update(&mut self, direction: Vec2, delta_time: f32) -> Option<MoveDirection> {
        self.time += delta_time.max(0.0);
        self.last_vector = self.this_vector;
        self.this_vector = Vec2::new(self.digitize(direction.x), self.digitize(direction.y));

        let pressed = self.this_vector != Vec2::ZERO;
        let just_pressed = pressed && self.last_vector == Vec2::ZERO;

        if !pressed {
            self.next_move_time = 0.0;
            return None;
        }

        if just_pressed {
            self.next_move_time = if self.time > self.last_pressed_time + REPRESS_WINDOW {
                self.time + self.first_delay
            } else {
                self.time + self.repeat_delay
            };
        }
        self.last_pressed_time = self.time;

        if just_pressed || self.time > self.next_move_time {
            self.next_move_time = self.next_move_time.max(self.time + self.repeat_delay);
            Some(move_direction(self.this_vector))
        } else {
            None
        }
    }

    /// Returns direction as seen in last update, each component is `-1.0`, `0.0` or `1.0`.
    pub fn vector(&self) -> Vec2 {
        self.this_vector
    }

    fn digitize(&self, value: f32) -> f32 {
        if value.abs() > self.threshold {
            utils::sign(value)
        } else {
            0.0
        }
    }
}

impl Default for MoveRepeat {
    fn default() -> Self {
        Self::new()
    }
}

/// Dominant axis wins, vertical on ties.
fn move_direction(v: Vec2) -> MoveDirection {
    if v.x.abs() > v.y.abs() {
        if v.x > 0.0 {
            MoveDirection::Right
        } else {
            MoveDirection::Left
        }
    } else if v.y > 0.0 {
        MoveDirection::Up
    } else {
        MoveDirection::Down
    }
}

/// Detects released to pressed transitions of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    last: bool,
}

impl ButtonEdge {
    pub fn new() -> Self {
        ButtonEdge { last: false }
    }

    /// Returns `true` if button is pressed now and was not in previous update.
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.last;
        self.last = pressed;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.05;

    fn steps(nav: &mut MoveRepeat, dir: Vec2, ticks: usize) -> usize {
        (0..ticks).filter(|_| nav.update(dir, DT).is_some()).count()
    }

    #[test]
    fn first_delay_then_repeat() {
        let mut nav = MoveRepeat::new();
        let right = Vec2::new(1.0, 0.0);

        assert_eq!(nav.update(right, DT), Some(MoveDirection::Right));
        // 0.8 s of silence.
        assert_eq!(steps(&mut nav, right, 15), 0);
        // Then one step every 0.1 s (every second tick at 20 Hz, give or take rounding).
        let n = steps(&mut nav, right, 20);
        assert!(n >= 6 && n <= 10, "{}", n);
    }

    #[test]
    fn below_threshold() {
        let mut nav = MoveRepeat::new();
        assert_eq!(nav.update(Vec2::new(0.4, -0.5), DT), None);
        assert_eq!(nav.vector(), Vec2::ZERO);
    }

    #[test]
    fn quick_repress_uses_repeat_delay() {
        let mut nav = MoveRepeat::new();
        let up = Vec2::new(0.0, 0.8);

        assert_eq!(nav.update(up, DT), Some(MoveDirection::Up));
        assert_eq!(nav.update(Vec2::ZERO, 0.01), None);
        assert_eq!(nav.update(up, 0.01), Some(MoveDirection::Up));
        // Repeats after repeat delay, not first delay.
        assert!(steps(&mut nav, up, 4) > 0);
    }

    #[test]
    fn directions() {
        assert_eq!(move_direction(Vec2::new(-1.0, 0.0)), MoveDirection::Left);
        assert_eq!(move_direction(Vec2::new(0.0, -1.0)), MoveDirection::Down);
        assert_eq!(move_direction(Vec2::new(1.0, 1.0)), MoveDirection::Up);
    }

    #[test]
    fn button_edge() {
        let mut edge = ButtonEdge::new();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }
}
