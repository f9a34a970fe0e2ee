// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{
    Contact, ContactListener, Error, MouseButton, MouseSample, NativePhase, RawTouch, TouchPhase,
};

use std::slice;

pub const DEFAULT_MAX_CONTACTS: usize = 16;
/// Largest number of touch slots `TrackerBuilder` accepts.
pub const MAX_CONTACT_SLOTS: usize = 1024;

/// Entry of the per-tick dispatch list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Slot {
    /// Previous life of a slot that began again in this tick.
    Restarted(usize),
    Current(usize),
}

/// Tracks phases of touches and emulated mouse contact.
///
/// Contacts are stored in a fixed pool indexed by finger id, created once and reused. If mouse
/// emulation is enabled, one extra slot after the touch slots is reserved for the mouse.
///
/// Call `update()` once per tick with everything platform reported. The tracker then
///
/// 1. updates contacts that received data,
/// 2. ends active contacts that received nothing (the platform lost them),
/// 3. calls listener for every contact that was touched in this tick, mouse first and then
///    touches in ascending id order.
///
/// A slot that begins again while still active is ended first; the ended copy is dispatched
/// right before the new beginning and is part of `active()`.
///
/// Ids outside of the pool and second samples for the same id in one tick are ignored.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    contacts: Vec<Contact>,
    restarted: Vec<Option<Contact>>,
    reported: Vec<bool>,
    active: Vec<Slot>,
    max_contacts: usize,
    mouse_emulation: bool,
    dispatch_enabled: bool,
    tick: u64,
}

impl TouchTracker {
    /// Creates tracker with 16 touch slots and mouse emulation.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MAX_CONTACTS, true)
    }

    /// `max_contacts` must not exceed `MAX_CONTACT_SLOTS`.
    fn with_config(max_contacts: usize, mouse_emulation: bool) -> Self {
        let slots = if mouse_emulation {
            max_contacts + 1
        } else {
            max_contacts
        };

        TouchTracker {
            contacts: (0..slots).map(Contact::new).collect(),
            restarted: vec![None; slots],
            reported: vec![false; slots],
            active: Vec::with_capacity(2 * slots),
            max_contacts,
            mouse_emulation,
            dispatch_enabled: true,
            tick: 0,
        }
    }

    /// Processes one tick of input and calls `listener` for every contact active in it.
    pub fn update<L>(
        &mut self,
        tick: u64,
        delta_time: f32,
        touches: &[RawTouch],
        mouse: Option<MouseSample>,
        listener: &mut L,
    ) where
        L: ContactListener + ?Sized,
    {
        self.tick = tick;
        self.active.clear();
        for r in self.reported.iter_mut() {
            *r = false;
        }
        for r in self.restarted.iter_mut() {
            *r = None;
        }

        if let Some(mouse) = mouse {
            if self.mouse_emulation {
                let slot = self.max_contacts;
                self.reported[slot] = self.apply_mouse(slot, mouse, tick, delta_time);
            }
        }

        for touch in touches {
            if touch.id >= self.max_contacts {
                debug!(
                    "Ignoring touch {} outside of contact pool (size {}).",
                    touch.id, self.max_contacts
                );
                continue;
            }

            if self.reported[touch.id] {
                debug!("Ignoring second sample of touch {} in tick {}.", touch.id, tick);
                continue;
            }

            self.reported[touch.id] = self.apply_touch(touch, tick, delta_time);
        }

        if self.mouse_emulation {
            self.collect(self.max_contacts, tick, delta_time);
        }
        for id in 0..self.max_contacts {
            self.collect(id, tick, delta_time);
        }

        if self.dispatch_enabled {
            for contact in self.active() {
                match contact.phase() {
                    TouchPhase::Began => listener.on_began(contact),
                    TouchPhase::Moved => listener.on_moved(contact),
                    TouchPhase::Ended | TouchPhase::Canceled => listener.on_ended(contact),
                }
            }
        }
    }

    /// Adds slot to active list if it received data, or ends it if platform forgot about it.
    fn collect(&mut self, idx: usize, tick: u64, delta_time: f32) {
        if self.restarted[idx].is_some() {
            self.active.push(Slot::Restarted(idx));
        }

        if self.reported[idx] {
            self.active.push(Slot::Current(idx));
        } else if self.contacts[idx].phase().is_active() {
            trace!("Contact {} was not reported in tick {}, ending it.", idx, tick);
            self.contacts[idx].forget(tick, delta_time);
            self.active.push(Slot::Current(idx));
        }
    }

    /// Returns `true` if contact changed and should be dispatched.
    fn apply_touch(&mut self, touch: &RawTouch, tick: u64, dt: f32) -> bool {
        let active = self.contacts[touch.id].phase().is_active();

        match touch.phase {
            NativePhase::Began => {
                if active {
                    self.restart(touch.id, tick, dt);
                }
                self.contacts[touch.id].begin(touch.position, touch.tap_count, tick, dt);
                true
            }
            NativePhase::Moved | NativePhase::Stationary => {
                let contact = &mut self.contacts[touch.id];
                if active {
                    contact.advance(TouchPhase::Moved, touch.position, touch.tap_count, tick, dt);
                } else {
                    debug!("Touch {} moved without beginning, treating as new touch.", touch.id);
                    contact.begin(touch.position, touch.tap_count, tick, dt);
                }
                true
            }
            NativePhase::Ended | NativePhase::Canceled if active => {
                let phase = if touch.phase == NativePhase::Ended {
                    TouchPhase::Ended
                } else {
                    TouchPhase::Canceled
                };
                self.contacts[touch.id].advance(phase, touch.position, touch.tap_count, tick, dt);
                true
            }
            NativePhase::Ended | NativePhase::Canceled => false,
        }
    }

    fn apply_mouse(&mut self, slot: usize, mouse: MouseSample, tick: u64, dt: f32) -> bool {
        let position = mouse.position.round();
        let active = self.contacts[slot].phase().is_active();

        match mouse.button {
            MouseButton::Down => {
                if active {
                    self.restart(slot, tick, dt);
                }
                self.contacts[slot].begin(position, 1, tick, dt);
                true
            }
            MouseButton::Held => {
                let contact = &mut self.contacts[slot];
                if active {
                    contact.advance(TouchPhase::Moved, position, 1, tick, dt);
                } else {
                    contact.begin(position, 1, tick, dt);
                }
                true
            }
            MouseButton::Up if active => {
                self.contacts[slot].advance(TouchPhase::Ended, position, 1, tick, dt);
                true
            }
            MouseButton::Up => false,
        }
    }

    /// Ends previous life of a slot that received new beginning while still active.
    fn restart(&mut self, idx: usize, tick: u64, dt: f32) {
        warn!("Contact {} began again without ending.", idx);

        let mut previous = self.contacts[idx];
        previous.forget(tick, dt);
        self.restarted[idx] = Some(previous);
    }

    fn resolve(&self, slot: Slot) -> &Contact {
        resolve(&self.contacts, &self.restarted, slot)
    }

    /// Returns contacts updated in last tick, in dispatch order.
    pub fn active(&self) -> ActiveContacts {
        ActiveContacts {
            contacts: &self.contacts,
            restarted: &self.restarted,
            slots: self.active.iter(),
        }
    }

    /// Returns number of contacts updated in last tick.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns `idx`th contact updated in last tick.
    pub fn active_contact(&self, idx: usize) -> Option<&Contact> {
        self.active.get(idx).map(|&slot| self.resolve(slot))
    }

    /// Returns touch contact with given finger id, whether active or not.
    pub fn contact(&self, id: usize) -> Option<&Contact> {
        if id < self.max_contacts {
            self.contacts.get(id)
        } else {
            None
        }
    }

    /// Returns emulated mouse contact if mouse emulation is enabled.
    pub fn mouse_contact(&self) -> Option<&Contact> {
        if self.mouse_emulation {
            self.contacts.get(self.max_contacts)
        } else {
            None
        }
    }

    /// Tick of last update.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of touch slots, excluding mouse.
    pub fn max_contacts(&self) -> usize {
        self.max_contacts
    }

    /// When disabled, contacts are still tracked but listeners are not called.
    pub fn set_dispatch_enabled(&mut self, enabled: bool) {
        self.dispatch_enabled = enabled;
    }

    pub fn is_dispatch_enabled(&self) -> bool {
        self.dispatch_enabled
    }

    /// Puts every contact back to rest without calling any listener.
    pub fn reset(&mut self) {
        for (id, contact) in self.contacts.iter_mut().enumerate() {
            *contact = Contact::new(id);
        }
        for r in self.restarted.iter_mut() {
            *r = None;
        }
        self.active.clear();
    }
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve<'a>(
    contacts: &'a [Contact],
    restarted: &'a [Option<Contact>],
    slot: Slot,
) -> &'a Contact {
    match slot {
        // Only pushed by `collect()` when the copy is present.
        Slot::Restarted(idx) => restarted[idx].as_ref().unwrap_or(&contacts[idx]),
        Slot::Current(idx) => &contacts[idx],
    }
}

/// Iterator over contacts updated in last tick.
pub struct ActiveContacts<'a> {
    contacts: &'a [Contact],
    restarted: &'a [Option<Contact>],
    slots: slice::Iter<'a, Slot>,
}

impl<'a> Iterator for ActiveContacts<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let (contacts, restarted) = (self.contacts, self.restarted);
        self.slots.next().map(|&slot| resolve(contacts, restarted, slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a> ExactSizeIterator for ActiveContacts<'a> {}

/// Creates `TouchTracker` with customized options.
#[derive(Copy, Clone, Debug)]
pub struct TrackerBuilder {
    max_contacts: usize,
    mouse_emulation: bool,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        TrackerBuilder {
            max_contacts: DEFAULT_MAX_CONTACTS,
            mouse_emulation: true,
        }
    }

    /// Number of touch slots. Touches with id equal or greater are ignored. Default: 16, at most
    /// `MAX_CONTACT_SLOTS`.
    pub fn max_contacts(mut self, max: usize) -> Self {
        self.max_contacts = max;
        self
    }

    /// Reserve slot for emulated mouse contact. Default: `true`.
    pub fn mouse_emulation(mut self, enabled: bool) -> Self {
        self.mouse_emulation = enabled;
        self
    }

    pub fn build(self) -> Result<TouchTracker, Error> {
        if self.max_contacts == 0 {
            return Err(Error::NoContacts);
        }

        if self.max_contacts > MAX_CONTACT_SLOTS {
            return Err(Error::TooManyContacts);
        }

        Ok(TouchTracker::with_config(
            self.max_contacts,
            self.mouse_emulation,
        ))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<(usize, TouchPhase)>);

    impl ContactListener for Recorder {
        fn on_began(&mut self, c: &Contact) {
            self.0.push((c.id(), c.phase()));
        }

        fn on_moved(&mut self, c: &Contact) {
            self.0.push((c.id(), c.phase()));
        }

        fn on_ended(&mut self, c: &Contact) {
            self.0.push((c.id(), c.phase()));
        }
    }

    fn touch(id: usize, phase: NativePhase, x: f32, y: f32) -> RawTouch {
        RawTouch::new(id, phase, Vec2::new(x, y), 1)
    }

    #[test]
    fn began_moved_forgotten() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();

        tracker.update(10, 0.1, &[touch(0, NativePhase::Began, 5.0, 5.0)], None, &mut rec);
        let c = tracker.active_contact(0).unwrap();
        assert_eq!(c.phase(), TouchPhase::Began);
        assert_eq!(c.delta_position(), Vec2::ZERO);

        tracker.update(11, 0.1, &[touch(0, NativePhase::Moved, 8.0, 5.0)], None, &mut rec);
        let c = tracker.active_contact(0).unwrap();
        assert_eq!(c.phase(), TouchPhase::Moved);
        assert_eq!(c.delta_position(), Vec2::new(3.0, 0.0));

        tracker.update(12, 0.1, &[], None, &mut rec);
        let c = tracker.active_contact(0).unwrap();
        assert_eq!(c.phase(), TouchPhase::Ended);
        assert_eq!(c.update_tick(), 12);

        tracker.update(13, 0.1, &[], None, &mut rec);
        assert_eq!(tracker.active_count(), 0);

        assert_eq!(
            rec.0,
            vec![
                (0, TouchPhase::Began),
                (0, TouchPhase::Moved),
                (0, TouchPhase::Ended),
            ]
        );
    }

    #[test]
    fn stationary_is_moved() {
        let mut tracker = TouchTracker::new();
        tracker.update(1, 0.1, &[touch(4, NativePhase::Began, 1.0, 1.0)], None, &mut ());
        tracker.update(2, 0.1, &[touch(4, NativePhase::Stationary, 1.0, 1.0)], None, &mut ());
        assert_eq!(tracker.contact(4).unwrap().phase(), TouchPhase::Moved);
        assert_eq!(tracker.contact(4).unwrap().delta_position(), Vec2::ZERO);
    }

    #[test]
    fn canceled_ends_once() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        tracker.update(1, 0.1, &[touch(1, NativePhase::Began, 0.0, 0.0)], None, &mut rec);
        tracker.update(2, 0.1, &[touch(1, NativePhase::Canceled, 0.0, 0.0)], None, &mut rec);
        tracker.update(3, 0.1, &[], None, &mut rec);

        assert_eq!(
            rec.0,
            vec![(1, TouchPhase::Began), (1, TouchPhase::Canceled)]
        );
    }

    #[test]
    fn out_of_range_and_duplicates_ignored() {
        let mut tracker = TrackerBuilder::new().max_contacts(2).build().unwrap();
        let touches = [
            touch(5, NativePhase::Began, 0.0, 0.0),
            touch(1, NativePhase::Began, 1.0, 0.0),
            touch(1, NativePhase::Began, 9.0, 9.0),
        ];
        tracker.update(1, 0.1, &touches, None, &mut ());

        assert_eq!(tracker.active_count(), 1);
        assert_eq!(tracker.contact(1).unwrap().position(), Vec2::new(1.0, 0.0));
        assert!(tracker.contact(5).is_none());
    }

    #[test]
    fn ascending_order_mouse_first() {
        let mut tracker = TouchTracker::new();
        let touches = [
            touch(7, NativePhase::Began, 0.0, 0.0),
            touch(2, NativePhase::Began, 0.0, 0.0),
        ];
        let mouse = MouseSample::new(Vec2::new(1.0, 1.0), MouseButton::Down);
        tracker.update(1, 0.1, &touches, Some(mouse), &mut ());

        let ids: Vec<usize> = tracker.active().map(|c| c.id()).collect();
        assert_eq!(ids, vec![DEFAULT_MAX_CONTACTS, 2, 7]);
    }

    #[test]
    fn ended_on_resting_slot_ignored() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        tracker.update(1, 0.1, &[touch(3, NativePhase::Ended, 0.0, 0.0)], None, &mut rec);
        assert_eq!(tracker.active_count(), 0);
        assert!(rec.0.is_empty());
    }

    #[test]
    fn restart_ends_previous() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        tracker.update(1, 0.1, &[touch(0, NativePhase::Began, 0.0, 0.0)], None, &mut rec);
        tracker.update(2, 0.1, &[touch(0, NativePhase::Began, 3.0, 3.0)], None, &mut rec);

        assert_eq!(
            rec.0,
            vec![
                (0, TouchPhase::Began),
                (0, TouchPhase::Ended),
                (0, TouchPhase::Began),
            ]
        );
        assert_eq!(tracker.contact(0).unwrap().position(), Vec2::new(3.0, 3.0));
    }

    fn seen(tracker: &TouchTracker) -> Vec<(usize, TouchPhase)> {
        tracker.active().map(|c| (c.id(), c.phase())).collect()
    }

    #[test]
    fn restart_keeps_dispatch_order() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        let began = [
            touch(1, NativePhase::Began, 0.0, 0.0),
            touch(3, NativePhase::Began, 0.0, 0.0),
        ];
        tracker.update(1, 0.1, &began, None, &mut rec);
        rec.0.clear();

        let touches = [
            touch(1, NativePhase::Moved, 1.0, 0.0),
            touch(3, NativePhase::Began, 5.0, 5.0),
        ];
        let mouse = MouseSample::new(Vec2::new(1.0, 1.0), MouseButton::Down);
        tracker.update(2, 0.1, &touches, Some(mouse), &mut rec);

        let expected = vec![
            (DEFAULT_MAX_CONTACTS, TouchPhase::Began),
            (1, TouchPhase::Moved),
            (3, TouchPhase::Ended),
            (3, TouchPhase::Began),
        ];
        assert_eq!(rec.0, expected);
        assert_eq!(seen(&tracker), expected);
        assert_eq!(tracker.active_count(), 4);

        let ended = tracker.active_contact(2).unwrap();
        assert_eq!(ended.position(), Vec2::new(0.0, 0.0));
        assert_eq!(ended.update_tick(), 2);
        assert_eq!(tracker.contact(3).unwrap().position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn mouse_restart_keeps_dispatch_order() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        let down = MouseSample::new(Vec2::new(1.0, 1.0), MouseButton::Down);
        tracker.update(1, 0.1, &[touch(2, NativePhase::Began, 0.0, 0.0)], Some(down), &mut rec);
        rec.0.clear();

        let down = MouseSample::new(Vec2::new(9.0, 9.0), MouseButton::Down);
        tracker.update(2, 0.1, &[touch(0, NativePhase::Began, 0.0, 0.0)], Some(down), &mut rec);

        let expected = vec![
            (DEFAULT_MAX_CONTACTS, TouchPhase::Ended),
            (DEFAULT_MAX_CONTACTS, TouchPhase::Began),
            (0, TouchPhase::Began),
            (2, TouchPhase::Ended),
        ];
        assert_eq!(rec.0, expected);
        assert_eq!(seen(&tracker), expected);

        // Restarted copy is gone in next tick.
        let held = MouseSample::new(Vec2::new(9.0, 9.0), MouseButton::Held);
        tracker.update(3, 0.1, &[], Some(held), &mut rec);
        assert_eq!(
            seen(&tracker),
            vec![
                (DEFAULT_MAX_CONTACTS, TouchPhase::Moved),
                (0, TouchPhase::Ended),
            ]
        );
    }

    #[test]
    fn dispatch_disabled() {
        let mut tracker = TouchTracker::new();
        let mut rec = Recorder::default();
        tracker.set_dispatch_enabled(false);
        tracker.update(1, 0.1, &[touch(0, NativePhase::Began, 0.0, 0.0)], None, &mut rec);
        assert!(rec.0.is_empty());
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn builder() {
        assert_eq!(
            TrackerBuilder::new().max_contacts(0).build().unwrap_err(),
            Error::NoContacts
        );

        assert_eq!(
            TrackerBuilder::new()
                .max_contacts(usize::MAX)
                .build()
                .unwrap_err(),
            Error::TooManyContacts
        );
        assert_eq!(
            TrackerBuilder::new()
                .max_contacts(MAX_CONTACT_SLOTS + 1)
                .mouse_emulation(false)
                .build()
                .unwrap_err(),
            Error::TooManyContacts
        );

        let tracker = TrackerBuilder::new().max_contacts(MAX_CONTACT_SLOTS).build().unwrap();
        assert_eq!(tracker.mouse_contact().unwrap().id(), MAX_CONTACT_SLOTS);

        let tracker = TrackerBuilder::new().mouse_emulation(false).build().unwrap();
        assert!(tracker.mouse_contact().is_none());
        assert_eq!(tracker.max_contacts(), DEFAULT_MAX_CONTACTS);
    }

    #[test]
    fn reset() {
        let mut tracker = TouchTracker::new();
        tracker.update(1, 0.1, &[touch(0, NativePhase::Began, 0.0, 0.0)], None, &mut ());
        tracker.reset();
        assert_eq!(tracker.active_count(), 0);
        assert_eq!(tracker.contact(0).unwrap().phase(), TouchPhase::Ended);

        let mut rec = Recorder::default();
        tracker.update(2, 0.1, &[], None, &mut rec);
        assert!(rec.0.is_empty());
    }
}
