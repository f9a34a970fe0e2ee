// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Tactus - analog shaping and touch tracking
//! ==========================================
//!
//! Tactus is the part of a game input layer that does not care where input comes from. The host
//! (game engine, windowing library, platform SDK) polls hardware once per tick and hands raw
//! samples over; tactus turns them into values game logic can use directly.
//!
//! Main features:
//!
//! - Dead-zone shaping of single axes and circular shaping of sticks
//! - Touch phase tracking with a fixed pool of contacts, mouse emulation and automatic ending of
//!   contacts the platform forgot about
//! - Virtual gamepad fed by on-screen touch controls
//! - Discrete UI navigation with key-repeat from analog input
//!
//! Example
//! -------
//!
//! ```
//! use tactus::touch::{Contact, ContactListener, NativePhase, RawTouch, TouchTracker};
//! use tactus::{apply_dead_zone, Vec2};
//!
//! struct Printer;
//!
//! impl ContactListener for Printer {
//!     fn on_began(&mut self, contact: &Contact) {
//!         println!("contact {} began at {:?}", contact.id(), contact.position());
//!     }
//! }
//!
//! assert!((apply_dead_zone(0.55, 0.2, 0.9) - 0.5).abs() < 1e-6);
//!
//! let mut tracker = TouchTracker::new();
//! let touches = [RawTouch::new(0, NativePhase::Began, Vec2::new(5.0, 5.0), 1)];
//! tracker.update(10, 0.016, &touches, None, &mut Printer);
//! assert_eq!(tracker.active_count(), 1);
//! ```
//!
//! Ticks
//! -----
//!
//! Every operation is driven by a tick counter supplied by the host. Tactus never reads a clock
//! and never spawns threads; everything that happens in a tick is finished when the call returns.

#[macro_use]
extern crate log;
extern crate fnv;
extern crate vec_map;
#[cfg(feature = "serde-serialize")]
extern crate serde;

mod utils;

pub mod ev;
pub mod nav;
pub mod shape;
pub mod touch;

pub use crate::ev::filter::Filter;
pub use crate::ev::{Axis, Button, Event, EventType};
pub use crate::shape::{
    apply_circular_dead_zone, apply_dead_zone, AnalogShaper, AnalogShaperBuilder, DeadZone,
};
pub use crate::touch::{Contact, ContactListener, TouchTracker};
pub use crate::utils::{Rect, Vec2};
