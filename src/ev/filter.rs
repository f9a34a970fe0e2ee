// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Alter events in various ways.
//!
//! This modules contains "event filters" that can change or drop events. To use them, import
//! `Filter` trait and call `filter_ev()` function on `Option<Event>` or `Event`. Because `filter_ev`
//! also returns `Option<Event>` you can combine multiple filters by using `filter_ev()` function on
//! returned event.
//!
//! `AnalogShaper` is a filter too: it replaces raw axis value with shaped one. Note that it shapes
//! every axis independently, feed whole sticks through `AnalogShaper::shape_stick()` if you want
//! circular dead zone.
//!
//! # Example
//!
//! ```
//! use tactus::ev::filter::Jitter;
//! use tactus::ev::state::InputState;
//! use tactus::ev::AxisSample;
//! use tactus::{AnalogShaper, Axis, Event, Filter};
//!
//! let shaper = AnalogShaper::new();
//! let jitter = Jitter { threshold: 0.02 };
//! let mut state = InputState::new();
//!
//! let raw = Event::axis_changed(Axis::LeftTrigger, &AxisSample::new(0.95, 1, 0.016));
//! if let Some(ev) = raw.filter_ev(&shaper, &state).filter_ev(&jitter, &state) {
//!     state.update(&ev);
//! }
//!
//! assert_eq!(state.value(Axis::LeftTrigger), 1.0);
//! ```
//!
//! # Implementing custom filters
//!
//! If you want to implement your own filters, you will have to implement `FilterFn` trait.
//! **Do not return `None` if you got `Some(event)`**. If you want to discard an event, use
//! `EventType::Dropped`.

use crate::ev::state::InputState;
use crate::ev::{AxisSample, Event, EventType};
use crate::shape::AnalogShaper;

/// Discard axis events that changed less than `threshold`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Jitter {
    pub threshold: f32,
}

impl Jitter {
    /// Creates new `Jitter` filter with threshold set to 0.01.
    pub fn new() -> Self {
        Jitter { threshold: 0.01 }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFn for Jitter {
    fn filter(&self, ev: Option<Event>, state: &InputState) -> Option<Event> {
        match ev {
            Some(Event {
                event: EventType::AxisChanged(axis, val),
                ..
            }) => match state.axis_data(axis) {
                // Always let values snapping back to rest or extremes through.
                Some(data)
                    if (val - data.value()).abs() < self.threshold
                        && val != 0.0
                        && val.abs() != 1.0 =>
                {
                    Some(Event::dropped())
                }
                _ => ev,
            },
            _ => ev,
        }
    }
}

impl FilterFn for AnalogShaper {
    fn filter(&self, ev: Option<Event>, _state: &InputState) -> Option<Event> {
        match ev {
            Some(Event {
                event: EventType::AxisChanged(axis, val),
                tick,
            }) => {
                let sample = AxisSample::new(val, tick, 0.0);
                Some(Event::new(
                    EventType::AxisChanged(axis, self.shape_axis(axis, &sample)),
                    tick,
                ))
            }
            _ => ev,
        }
    }
}

/// Allow filtering events.
///
/// See module level documentation for more info.
pub trait Filter {
    fn filter_ev<F: FilterFn>(&self, filter: &F, state: &InputState) -> Option<Event>;
}

/// Actual filter implementation.
///
/// See module level documentation for more info.
pub trait FilterFn {
    fn filter(&self, ev: Option<Event>, state: &InputState) -> Option<Event>;
}

impl Filter for Option<Event> {
    fn filter_ev<F: FilterFn>(&self, filter: &F, state: &InputState) -> Option<Event> {
        let e = filter.filter(*self, state);
        debug_assert!(
            !(self.is_some() && e.is_none()),
            "Filter changed Some(event) into None. See ev::filter documentation for more info."
        );

        e
    }
}

impl Filter for Event {
    fn filter_ev<F: FilterFn>(&self, filter: &F, state: &InputState) -> Option<Event> {
        let e = filter.filter(Some(*self), state);
        debug_assert!(
            e.is_some(),
            "Filter changed Some(event) into None. See ev::filter documentation for more info."
        );

        e
    }
}
