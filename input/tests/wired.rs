// input/tests/wired.rs

use std::cell::Cell;
use std::rc::Rc;

use hid::MAX_REPORT_LEN;
use input::{InputHub, InputMode, ModeError, new_wired_device};
use wired::{Gpio, WiredPins};

/// Dos mandos simulados; los botones pulsados se cambian desde el test.
#[derive(Clone)]
struct Bench {
    pins: WiredPins,
    a: Rc<Cell<u16>>,
    b: Rc<Cell<u16>>,
    pos: usize,
}

impl Gpio for Bench {
    fn read(&mut self, pin: u8) -> bool {
        let held = if pin == self.pins.a_data { self.a.get() } else { self.b.get() };
        held >> self.pos & 1 == 0
    }

    fn write(&mut self, pin: u8, level: bool) {
        if pin == self.pins.latch && level {
            self.pos = 0;
        } else if pin == self.pins.clock && level {
            self.pos += 1;
        }
    }
}

fn bench() -> (Bench, Rc<Cell<u16>>, Rc<Cell<u16>>) {
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let bench = Bench { pins: WiredPins::default(), a: a.clone(), b: b.clone(), pos: 0 };
    (bench, a, b)
}

#[test]
fn snes_pads_report_both_players() {
    let (gpio, a, b) = bench();
    let mut hub = InputHub::new();
    hub.attach(
        InputMode::Snes,
        new_wired_device(InputMode::Snes, gpio, WiredPins::default()).unwrap(),
    );

    let mut dst = [0u8; MAX_REPORT_LEN];
    assert_eq!(hub.poll(&mut dst), 0);

    a.set(1 << 3); // START
    b.set(1 << 9); // X
    assert_eq!(hub.poll(&mut dst), 6);
    assert_eq!(&dst[..6], &[0xA1, 0x42, 0x40, 0x00, 0x00, 0x10]);
    assert_eq!(hub.poll(&mut dst), 0);
}

#[test]
fn menu_chord_on_nes() {
    let (gpio, a, _) = bench();
    let mut hub = InputHub::new();
    hub.attach(InputMode::Nes, new_wired_device(InputMode::Nes, gpio, WiredPins::default()).unwrap());

    a.set(1 << 2 | 1 << 6); // SELECT + LEFT
    let mut dst = [0u8; MAX_REPORT_LEN];
    assert_eq!(hub.poll(&mut dst), 6);
    assert_eq!(&dst[2..4], &[0x24, 0x01]); // LEFT | SELECT | OTHER
}

#[test]
fn only_pad_modes_are_wired() {
    let (gpio, _, _) = bench();
    let err = new_wired_device(InputMode::Retcon, gpio, WiredPins::default()).err();
    assert_eq!(err, Some(ModeError::NotWired(InputMode::Retcon)));
}
