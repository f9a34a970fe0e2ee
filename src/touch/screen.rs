// Copyright 2026 Tactus Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Conversion between screen units and world units of an orthographic camera.
//!
//! On-screen controls are laid out either in pixels or in percent of the screen. The camera is
//! assumed to be orthographic and centered on the origin, so the visible world area is
//! `2 * ortho_size * aspect` wide and `2 * ortho_size` tall.

use crate::utils::{Rect, Vec2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Unit in which control size or offset is specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TouchUnit {
    Pixels,
    Percent,
}

impl Default for TouchUnit {
    fn default() -> Self {
        TouchUnit::Percent
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenMetrics {
    screen_size: Vec2,
    half_screen_size: Vec2,
    view_size: Vec2,
    percent_to_world: f32,
    pixel_to_world: f32,
}

impl ScreenMetrics {
    /// `screen_size` in pixels, `ortho_size` is half of visible world height.
    pub fn new(screen_size: Vec2, ortho_size: f32) -> Self {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            debug!("Screen has no area ({:?}), world conversion disabled.", screen_size);
            return ScreenMetrics {
                screen_size,
                half_screen_size: screen_size * 0.5,
                view_size: Vec2::ZERO,
                percent_to_world: 0.0,
                pixel_to_world: 0.0,
            };
        }

        let aspect = screen_size.x / screen_size.y;
        // World extent of one percent of the half-view, matching `(rect - 50%) * view_size`.
        let view_size = Vec2::new(ortho_size * aspect, ortho_size) * 0.02;

        ScreenMetrics {
            screen_size,
            half_screen_size: screen_size * 0.5,
            view_size,
            percent_to_world: view_size.x.min(view_size.y),
            pixel_to_world: 2.0 * ortho_size / screen_size.y,
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    pub fn half_screen_size(&self) -> Vec2 {
        self.half_screen_size
    }

    /// World size of one percent of the screen along each axis.
    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    /// World size of one percent of the shorter screen side.
    pub fn percent_to_world(&self) -> f32 {
        self.percent_to_world
    }

    pub fn half_percent_to_world(&self) -> f32 {
        self.percent_to_world / 2.0
    }

    pub fn pixel_to_world(&self) -> f32 {
        self.pixel_to_world
    }

    pub fn half_pixel_to_world(&self) -> f32 {
        self.pixel_to_world / 2.0
    }

    pub fn convert_to_world(&self, value: f32, unit: TouchUnit) -> f32 {
        match unit {
            TouchUnit::Pixels => value * self.pixel_to_world,
            TouchUnit::Percent => value * self.percent_to_world,
        }
    }

    /// Rect in percent of screen, `(0, 0)` is bottom left corner.
    pub fn percent_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            (rect.x - 50.0) * self.view_size.x,
            (rect.y - 50.0) * self.view_size.y,
            rect.width * self.view_size.x,
            rect.height * self.view_size.y,
        )
    }

    /// Rect in pixels, `(0, 0)` is bottom left corner. Pixels are rounded first.
    pub fn pixel_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            (rect.x - self.half_screen_size.x).round() * self.pixel_to_world,
            (rect.y - self.half_screen_size.y).round() * self.pixel_to_world,
            rect.width.round() * self.pixel_to_world,
            rect.height.round() * self.pixel_to_world,
        )
    }

    pub fn convert_rect_to_world(&self, rect: Rect, unit: TouchUnit) -> Rect {
        match unit {
            TouchUnit::Pixels => self.pixel_to_world_rect(rect),
            TouchUnit::Percent => self.percent_to_world_rect(rect),
        }
    }

    /// Converts contact position to world coordinates.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        (point - self.half_screen_size) * self.pixel_to_world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn metrics() -> ScreenMetrics {
        ScreenMetrics::new(Vec2::new(800.0, 400.0), 5.0)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_rect(a: Rect, b: Rect) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.width, b.width) && approx(a.height, b.height)
    }

    #[test]
    fn scales() {
        let m = metrics();
        assert!(approx(m.pixel_to_world(), 0.025));
        assert!(approx(m.half_pixel_to_world(), 0.0125));
        assert!(approx(m.view_size().x, 0.2));
        assert!(approx(m.view_size().y, 0.1));
        assert!(approx(m.percent_to_world(), 0.1));
        assert!(approx(m.convert_to_world(40.0, TouchUnit::Pixels), 1.0));
        assert!(approx(m.convert_to_world(10.0, TouchUnit::Percent), 1.0));
    }

    #[test]
    fn rects() {
        let m = metrics();
        // Whole screen covers whole view.
        let full = m.convert_rect_to_world(Rect::new(0.0, 0.0, 100.0, 100.0), TouchUnit::Percent);
        assert!(approx_rect(full, Rect::new(-10.0, -5.0, 20.0, 10.0)));

        let px = m.convert_rect_to_world(Rect::new(0.0, 0.0, 800.0, 400.0), TouchUnit::Pixels);
        assert!(approx_rect(px, Rect::new(-10.0, -5.0, 20.0, 10.0)));
    }

    #[test]
    fn screen_point() {
        let m = metrics();
        assert_eq!(m.screen_to_world(Vec2::new(400.0, 200.0)), Vec2::ZERO);
        let corner = m.screen_to_world(Vec2::new(800.0, 400.0));
        assert!(approx(corner.x, 10.0) && approx(corner.y, 5.0));
    }

    #[test]
    fn empty_screen() {
        let m = ScreenMetrics::new(Vec2::ZERO, 5.0);
        assert_eq!(m.pixel_to_world(), 0.0);
        assert_eq!(m.convert_to_world(10.0, TouchUnit::Percent), 0.0);
    }
}
