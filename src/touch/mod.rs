// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Touch and emulated mouse contacts.
//!
//! Platforms report touches with a "native" phase that is not always trustworthy: contacts can
//! disappear without ever reporting that they ended, and a finger resting in place is reported
//! as stationary. [`TouchTracker`] turns these reports into contacts whose phases always follow
//! `Began → Moved* → Ended`, and calls a [`ContactListener`] for every active contact.
//!
//! ```
//! use tactus::touch::{NativePhase, RawTouch, TouchPhase, TouchTracker};
//! use tactus::Vec2;
//!
//! let mut tracker = TouchTracker::new();
//!
//! let began = [RawTouch::new(2, NativePhase::Began, Vec2::new(5.0, 5.0), 1)];
//! tracker.update(10, 0.016, &began, None, &mut ());
//!
//! let moved = [RawTouch::new(2, NativePhase::Moved, Vec2::new(8.0, 5.0), 1)];
//! tracker.update(11, 0.016, &moved, None, &mut ());
//! assert_eq!(tracker.contact(2).unwrap().delta_position(), Vec2::new(3.0, 0.0));
//!
//! // Platform "forgot" to report the end.
//! tracker.update(12, 0.016, &[], None, &mut ());
//! assert_eq!(tracker.active_contact(0).unwrap().phase(), TouchPhase::Ended);
//! ```

pub mod device;
pub mod screen;
mod tracker;

pub use self::tracker::{
    ActiveContacts, TouchTracker, TrackerBuilder, DEFAULT_MAX_CONTACTS, MAX_CONTACT_SLOTS,
};

use crate::utils::Vec2;

use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Phase of a tracked contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Canceled,
}

impl TouchPhase {
    /// Returns `true` for `Began` and `Moved`.
    pub fn is_active(self) -> bool {
        match self {
            TouchPhase::Began | TouchPhase::Moved => true,
            TouchPhase::Ended | TouchPhase::Canceled => false,
        }
    }
}

impl Default for TouchPhase {
    fn default() -> Self {
        TouchPhase::Ended
    }
}

/// Phase as reported by platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum NativePhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

/// Single touch reported by platform in current tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawTouch {
    /// Finger (slot) id, stable for the whole life of a touch.
    pub id: usize,
    pub phase: NativePhase,
    pub position: Vec2,
    pub tap_count: u32,
}

impl RawTouch {
    pub fn new(id: usize, phase: NativePhase, position: Vec2, tap_count: u32) -> Self {
        RawTouch {
            id,
            phase,
            position,
            tap_count,
        }
    }
}

/// State of the primary mouse button in current tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Went down in this tick.
    Down,
    /// Is held since an earlier tick.
    Held,
    /// Went up in this tick.
    Up,
}

/// Mouse state used to emulate a single touch. Pass `None` to `TouchTracker::update()` when the
/// primary button is neither held nor changed this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseSample {
    pub position: Vec2,
    pub button: MouseButton,
}

impl MouseSample {
    pub fn new(position: Vec2, button: MouseButton) -> Self {
        MouseSample { position, button }
    }
}

/// Tracked touch or emulated mouse contact.
///
/// Contacts live in a fixed pool owned by `TouchTracker` and are reused; a contact in `Ended`
/// phase is resting and waits for a new touch with the same id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    id: usize,
    phase: TouchPhase,
    tap_count: u32,
    position: Vec2,
    last_position: Vec2,
    delta_position: Vec2,
    delta_time: f32,
    update_tick: u64,
}

impl Contact {
    pub(crate) fn new(id: usize) -> Self {
        Contact {
            id,
            phase: TouchPhase::Ended,
            tap_count: 0,
            position: Vec2::ZERO,
            last_position: Vec2::ZERO,
            delta_position: Vec2::ZERO,
            delta_time: 0.0,
            update_tick: 0,
        }
    }

    /// Slot id. For touches it is the platform finger id.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position in previous tick this contact was updated.
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// `position() - last_position()`, zero in `Began` phase.
    pub fn delta_position(&self) -> Vec2 {
        self.delta_position
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Tick of last update.
    pub fn update_tick(&self) -> u64 {
        self.update_tick
    }

    pub(crate) fn begin(&mut self, position: Vec2, tap_count: u32, tick: u64, delta_time: f32) {
        self.phase = TouchPhase::Began;
        self.tap_count = tap_count;
        self.delta_position = Vec2::ZERO;
        self.last_position = position;
        self.position = position;
        self.stamp(tick, delta_time);
    }

    pub(crate) fn advance(
        &mut self,
        phase: TouchPhase,
        position: Vec2,
        tap_count: u32,
        tick: u64,
        delta_time: f32,
    ) {
        self.phase = phase;
        self.tap_count = tap_count;
        self.last_position = self.position;
        self.position = position;
        self.delta_position = position - self.last_position;
        self.stamp(tick, delta_time);
    }

    /// Ends contact without new data, position stays where it was last seen.
    pub(crate) fn forget(&mut self, tick: u64, delta_time: f32) {
        self.phase = TouchPhase::Ended;
        self.last_position = self.position;
        self.delta_position = Vec2::ZERO;
        self.stamp(tick, delta_time);
    }

    fn stamp(&mut self, tick: u64, delta_time: f32) {
        self.update_tick = tick;
        self.delta_time = delta_time;
    }
}

/// Receives phase changes of contacts.
///
/// All methods have empty default implementation. `()` implements this trait and ignores
/// everything.
pub trait ContactListener {
    fn on_began(&mut self, _contact: &Contact) {}
    fn on_moved(&mut self, _contact: &Contact) {}
    /// Called for both `Ended` and `Canceled` contacts.
    fn on_ended(&mut self, _contact: &Contact) {}
}

impl ContactListener for () {}

impl<'a, L: ContactListener + ?Sized> ContactListener for &'a mut L {
    fn on_began(&mut self, contact: &Contact) {
        (**self).on_began(contact)
    }

    fn on_moved(&mut self, contact: &Contact) {
        (**self).on_moved(contact)
    }

    fn on_ended(&mut self, contact: &Contact) {
        (**self).on_ended(contact)
    }
}

/// Invalid tracker configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Pool must have at least one touch slot.
    NoContacts,
    /// Pool is larger than `MAX_CONTACT_SLOTS`.
    TooManyContacts,
}

impl Error {
    pub fn to_str(self) -> &'static str {
        match self {
            Error::NoContacts => "touch tracker needs at least one contact slot",
            Error::TooManyContacts => "touch tracker can not have that many contact slots",
        }
    }
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_lifecycle() {
        let mut c = Contact::new(3);
        assert_eq!(c.phase(), TouchPhase::Ended);

        c.begin(Vec2::new(1.0, 1.0), 2, 1, 0.5);
        assert_eq!(c.phase(), TouchPhase::Began);
        assert_eq!(c.delta_position(), Vec2::ZERO);
        assert_eq!(c.last_position(), Vec2::new(1.0, 1.0));
        assert_eq!(c.tap_count(), 2);

        c.advance(TouchPhase::Moved, Vec2::new(4.0, 1.0), 2, 2, 0.5);
        c.advance(TouchPhase::Moved, Vec2::new(6.0, 3.0), 2, 3, 0.5);
        assert_eq!(c.last_position(), Vec2::new(4.0, 1.0));
        assert_eq!(c.delta_position(), Vec2::new(2.0, 2.0));
        assert_eq!(c.update_tick(), 3);

        c.forget(4, 0.25);
        assert_eq!(c.phase(), TouchPhase::Ended);
        assert_eq!(c.position(), Vec2::new(6.0, 3.0));
        assert_eq!(c.delta_position(), Vec2::ZERO);
        assert_eq!(c.delta_time(), 0.25);
    }

    #[test]
    fn phase_activity() {
        assert!(TouchPhase::Began.is_active());
        assert!(TouchPhase::Moved.is_active());
        assert!(!TouchPhase::Ended.is_active());
        assert!(!TouchPhase::Canceled.is_active());
    }
}
