extern crate env_logger;
extern crate tactus;

use tactus::ev::{Button, Stick};
use tactus::nav::{ButtonEdge, MoveRepeat};
use tactus::shape::DeadZone;
use tactus::touch::device::{AnalogTarget, TouchDevice};
use tactus::touch::screen::{ScreenMetrics, TouchUnit};
use tactus::touch::{
    Contact, ContactListener, MouseButton, MouseSample, NativePhase, RawTouch, TouchTracker,
};
use tactus::{Rect, Vec2};

const DT: f32 = 1.0 / 60.0;

/// Left half of the screen is a stick, right half is a button.
struct Controls<'a> {
    device: &'a mut TouchDevice,
    metrics: ScreenMetrics,
    stick_origin: Option<(usize, Vec2)>,
    /// Contact holding the button down.
    button_contact: Option<usize>,
    button_area: Rect,
    tick: u64,
}

impl<'a> Controls<'a> {
    fn in_button(&self, c: &Contact) -> bool {
        let p = c.position();
        self.button_area.contains(p)
    }
}

impl<'a> ContactListener for Controls<'a> {
    fn on_began(&mut self, c: &Contact) {
        println!("{:>4} began   #{:<2} at {:?}", self.tick, c.id(), c.position());
        if self.in_button(c) {
            if self.button_contact.is_none() {
                self.button_contact = Some(c.id());
                self.device.submit_button(Button::Action1, true, self.tick);
            }
        } else if self.stick_origin.is_none() {
            self.stick_origin = Some((c.id(), c.position()));
        }
    }

    fn on_moved(&mut self, c: &Contact) {
        if let Some((id, origin)) = self.stick_origin {
            if id == c.id() {
                let radius = self.metrics.convert_to_world(10.0, TouchUnit::Percent);
                let offset = self.metrics.screen_to_world(c.position())
                    - self.metrics.screen_to_world(origin);
                self.device.submit_analog(
                    AnalogTarget::LeftStick,
                    offset * (1.0 / radius),
                    DeadZone::default(),
                    self.tick,
                );
            }
        }
    }

    fn on_ended(&mut self, c: &Contact) {
        println!("{:>4} {:?} #{:<2} at {:?}", self.tick, c.phase(), c.id(), c.position());
        if let Some((id, _)) = self.stick_origin {
            if id == c.id() {
                self.stick_origin = None;
                self.device
                    .submit_raw_analog(AnalogTarget::LeftStick, Vec2::ZERO, self.tick);
            }
        }

        if self.button_contact == Some(c.id()) {
            self.button_contact = None;
            self.device.submit_button(Button::Action1, false, self.tick);
        }
    }
}

fn script(tick: u64) -> (Vec<RawTouch>, Option<MouseSample>) {
    let mut touches = Vec::new();
    let mut mouse = None;

    // Finger 0 drags the stick to the right, then the platform loses it.
    match tick {
        1 => touches.push(RawTouch::new(0, NativePhase::Began, Vec2::new(200.0, 200.0), 1)),
        2..=40 => {
            let x = 200.0 + 4.0 * (tick - 1) as f32;
            touches.push(RawTouch::new(0, NativePhase::Moved, Vec2::new(x, 200.0), 1));
        }
        _ => (),
    }

    // Mouse taps the button.
    match tick {
        20 => mouse = Some(MouseSample::new(Vec2::new(700.0, 100.0), MouseButton::Down)),
        21..=24 => mouse = Some(MouseSample::new(Vec2::new(700.0, 100.0), MouseButton::Held)),
        25 => mouse = Some(MouseSample::new(Vec2::new(700.0, 100.0), MouseButton::Up)),
        _ => (),
    }

    (touches, mouse)
}

fn main() {
    env_logger::init();

    let metrics = ScreenMetrics::new(Vec2::new(800.0, 400.0), 5.0);
    let mut tracker = TouchTracker::new();
    let mut device = TouchDevice::new();
    let mut nav = MoveRepeat::new();
    let mut confirm = ButtonEdge::new();
    let mut stick_origin = None;
    let mut button_contact = None;

    for tick in 1..=60 {
        let (touches, mouse) = script(tick);
        let mut controls = Controls {
            device: &mut device,
            metrics,
            stick_origin,
            button_contact,
            button_area: Rect::new(400.0, 0.0, 400.0, 400.0),
            tick,
        };
        tracker.update(tick, DT, &touches, mouse, &mut controls);
        stick_origin = controls.stick_origin;
        button_contact = controls.button_contact;

        if let Some(dir) = nav.update(device.stick(Stick::Left), DT) {
            println!("{:>4} move    {:?} (stick {:?})", tick, dir, device.stick(Stick::Left));
        }
        if confirm.update(device.is_pressed(Button::Action1)) {
            println!("{:>4} confirm", tick);
        }
    }
}
