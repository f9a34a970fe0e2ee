// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::ev::{Axis, Button, Event, EventType};

use fnv::FnvHashMap;

use std::collections::hash_map;

/// Cached state of a virtual gamepad.
///
/// Every element remembers the tick at which it last *changed*. Comparing it with the current
/// tick tells whether a button went down this tick, which is what most gameplay code wants
/// instead of raw "is pressed".
///
/// ```
/// use tactus::ev::state::InputState;
/// use tactus::{Button, Event, EventType};
///
/// let mut state = InputState::new();
/// state.update(&Event::new(EventType::ButtonPressed(Button::Action1), 3));
///
/// assert!(state.is_pressed(Button::Action1));
/// assert!(state.was_pressed(Button::Action1, 3));
/// assert!(!state.was_pressed(Button::Action1, 4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputState {
    buttons: FnvHashMap<Button, ButtonData>,
    axes: FnvHashMap<Axis, AxisData>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            buttons: FnvHashMap::default(),
            axes: FnvHashMap::default(),
        }
    }

    /// Updates state according to `event`. Dropped events and unknown elements are ignored.
    pub fn update(&mut self, event: &Event) {
        match event.event {
            EventType::ButtonPressed(btn) => self.update_button(btn, true, event.tick),
            EventType::ButtonReleased(btn) => self.update_button(btn, false, event.tick),
            EventType::AxisChanged(axis, value) => self.update_axis(axis, value, event.tick),
            EventType::Dropped => (),
        }
    }

    pub fn update_button(&mut self, btn: Button, pressed: bool, tick: u64) {
        if btn == Button::Unknown {
            return;
        }

        match self.buttons.entry(btn) {
            hash_map::Entry::Occupied(mut e) => {
                if e.get().is_pressed() != pressed {
                    e.insert(ButtonData::new(pressed, tick));
                }
            }
            hash_map::Entry::Vacant(e) => {
                e.insert(ButtonData::new(pressed, tick));
            }
        }
    }

    pub fn update_axis(&mut self, axis: Axis, value: f32, tick: u64) {
        if axis == Axis::Unknown {
            return;
        }

        match self.axes.entry(axis) {
            hash_map::Entry::Occupied(mut e) => {
                if e.get().value() != value {
                    e.insert(AxisData::new(value, tick));
                }
            }
            hash_map::Entry::Vacant(e) => {
                e.insert(AxisData::new(value, tick));
            }
        }
    }

    /// Returns `true` if given button is pressed. Returns `false` if there is no information about
    /// `btn` or it is not pressed.
    pub fn is_pressed(&self, btn: Button) -> bool {
        self.buttons
            .get(&btn)
            .map(|s| s.is_pressed())
            .unwrap_or(false)
    }

    /// Returns `true` if `btn` went from released to pressed at `tick`.
    pub fn was_pressed(&self, btn: Button, tick: u64) -> bool {
        self.buttons
            .get(&btn)
            .map(|s| s.is_pressed() && s.tick() == tick)
            .unwrap_or(false)
    }

    /// Returns `true` if `btn` went from pressed to released at `tick`.
    pub fn was_released(&self, btn: Button, tick: u64) -> bool {
        self.buttons
            .get(&btn)
            .map(|s| !s.is_pressed() && s.tick() == tick)
            .unwrap_or(false)
    }

    /// Returns value of axis or 0.0 when there is no information about axis.
    pub fn value(&self, axis: Axis) -> f32 {
        self.axes.get(&axis).map(|s| s.value()).unwrap_or(0.0)
    }

    /// Iterate over buttons data.
    pub fn buttons(&self) -> ButtonDataIter {
        ButtonDataIter(self.buttons.iter())
    }

    /// Iterate over axes data.
    pub fn axes(&self) -> AxisDataIter {
        AxisDataIter(self.axes.iter())
    }

    /// Returns button state and when it changed.
    pub fn button_data(&self, btn: Button) -> Option<&ButtonData> {
        self.buttons.get(&btn)
    }

    /// Returns axis state and when it changed.
    pub fn axis_data(&self, axis: Axis) -> Option<&AxisData> {
        self.axes.get(&axis)
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.axes.clear();
    }
}

/// Iterator over `ButtonData`.
pub struct ButtonDataIter<'a>(hash_map::Iter<'a, Button, ButtonData>);

/// Iterator over `AxisData`.
pub struct AxisDataIter<'a>(hash_map::Iter<'a, Axis, AxisData>);

impl<'a> Iterator for ButtonDataIter<'a> {
    type Item = (Button, &'a ButtonData);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (*k, v))
    }
}

impl<'a> Iterator for AxisDataIter<'a> {
    type Item = (Axis, &'a AxisData);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (*k, v))
    }
}

/// Information about button stored in `InputState`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonData {
    pressed: bool,
    tick: u64,
}

impl ButtonData {
    pub(crate) fn new(pressed: bool, tick: u64) -> Self {
        ButtonData { pressed, tick }
    }

    /// Returns `true` if button is pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns tick at which button state last changed.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

/// Information about axis stored in `InputState`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisData {
    value: f32,
    tick: u64,
}

impl AxisData {
    pub(crate) fn new(value: f32, tick: u64) -> Self {
        AxisData { value, tick }
    }

    /// Returns value of axis.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns tick at which axis value last changed.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
