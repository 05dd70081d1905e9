// wired/src/lib.rs

//! Mandos clásicos NES / SNES cableados.
//!
//! No hay IR ni tiempos: en cada frame se pulsa el latch y se sacan los bits
//! del registro de desplazamiento de los dos mandos a la vez, con un reloj
//! compartido. Las líneas de datos son activas en bajo (0 = pulsado).

use hid::{Buttons, IrState, InputDevice, ReportBuffer};

/// Acceso a los pines del SoC
pub trait Gpio {
    fn read(&mut self, pin: u8) -> bool;
    fn write(&mut self, pin: u8, level: bool);
}

/// Mapa de pines de la placa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WiredPins {
    pub a_data: u8,
    pub b_data: u8,
    pub latch: u8,
    pub clock: u8,
}

impl Default for WiredPins {
    fn default() -> Self {
        Self { a_data: 21, b_data: 17, latch: 27, clock: 22 }
    }
}

/// Orden de salida de los bits del mando NES
pub const NES_MAP: [Buttons; 8] = [
    Buttons::FIRE.union(Buttons::FIRE_A), // A
    Buttons::FIRE_B,                      // B
    Buttons::SELECT,
    Buttons::START,
    Buttons::UP,
    Buttons::DOWN,
    Buttons::LEFT,
    Buttons::RIGHT,
];

/// Orden de salida de los bits del mando SNES
pub const SNES_MAP: [Buttons; 12] = [
    Buttons::FIRE_B, // B
    Buttons::FIRE_C, // Y
    Buttons::SELECT,
    Buttons::START,
    Buttons::UP,
    Buttons::DOWN,
    Buttons::LEFT,
    Buttons::RIGHT,
    Buttons::FIRE.union(Buttons::FIRE_A), // A
    Buttons::FIRE_X,                      // X
    Buttons::FIRE_Y,                      // L
    Buttons::FIRE_Z,                      // R
];

/// Izquierda + select en el mando A abre el menú de archivos
pub const MENU_CHORD: Buttons = Buttons::LEFT.union(Buttons::SELECT);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKind {
    Nes,
    Snes,
}

impl PadKind {
    pub fn map(self) -> &'static [Buttons] {
        match self {
            PadKind::Nes => &NES_MAP,
            PadKind::Snes => &SNES_MAP,
        }
    }
}

pub struct WiredPads<G> {
    gpio: G,
    pins: WiredPins,
    kind: PadKind,
    state: IrState,
}

impl<G: Gpio> WiredPads<G> {
    pub fn new(gpio: G, pins: WiredPins, kind: PadKind) -> Self {
        Self { gpio, pins, kind, state: IrState::new() }
    }

    /// Lee los dos mandos. Devuelve (A, B) con el acorde ya aplicado.
    pub fn scan(&mut self) -> [Buttons; 2] {
        let p = self.pins;
        self.gpio.write(p.latch, true);
        self.gpio.write(p.latch, false);

        let mut a = Buttons::empty();
        let mut b = Buttons::empty();
        for &bit in self.kind.map() {
            if !self.gpio.read(p.a_data) {
                a |= bit;
            }
            if !self.gpio.read(p.b_data) {
                b |= bit;
            }
            self.gpio.write(p.clock, false);
            self.gpio.write(p.clock, true);
        }

        if a == MENU_CHORD {
            a |= Buttons::OTHER;
        }
        [a, b]
    }
}

impl<G: Gpio> InputDevice for WiredPads<G> {
    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        let [a, b] = self.scan();
        // Sin auto-liberación: el cable dice el estado real cada frame
        self.state.set(0, a, 0);
        self.state.set(1, b, 0);
        let n = self.state.get_hid(dst);
        if n != 0 {
            log::debug!("{:?} {:04X} {:04X}", self.kind, a.bits(), b.bits());
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid::MAX_REPORT_LEN;

    /// Dos registros de desplazamiento 4021 simulados.
    #[derive(Default)]
    struct FakePads {
        pins: WiredPins,
        a: u16, // Bit i = botón i pulsado
        b: u16,
        pos: usize,
        clock: bool,
        latches: usize,
        clocks: usize,
    }

    impl Gpio for FakePads {
        fn read(&mut self, pin: u8) -> bool {
            let held = if pin == self.pins.a_data { self.a } else { self.b };
            held >> self.pos & 1 == 0
        }

        fn write(&mut self, pin: u8, level: bool) {
            if pin == self.pins.latch && level {
                self.pos = 0;
                self.latches += 1;
            } else if pin == self.pins.clock {
                if level && !self.clock {
                    self.pos += 1;
                    self.clocks += 1;
                }
                self.clock = level;
            }
        }
    }

    fn pads(kind: PadKind, a: u16, b: u16) -> WiredPads<FakePads> {
        let gpio = FakePads { a, b, clock: true, ..Default::default() };
        WiredPads::new(gpio, WiredPins::default(), kind)
    }

    #[test]
    fn nes_scan_clocks_eight_bits() {
        let mut p = pads(PadKind::Nes, 0b0001_0001, 0b1000_0000);
        let [a, b] = p.scan();
        assert_eq!(a, Buttons::FIRE | Buttons::FIRE_A | Buttons::UP);
        assert_eq!(b, Buttons::RIGHT);
        assert_eq!(p.gpio.latches, 1);
        assert_eq!(p.gpio.clocks, 8);
    }

    #[test]
    fn snes_scan_clocks_twelve_bits() {
        let mut p = pads(PadKind::Snes, 1 << 11 | 1 << 1, 1 << 8);
        let [a, b] = p.scan();
        assert_eq!(a, Buttons::FIRE_Z | Buttons::FIRE_C);
        assert_eq!(b, Buttons::FIRE | Buttons::FIRE_A);
        assert_eq!(p.gpio.clocks, 12);
    }

    #[test]
    fn left_select_opens_menu() {
        // SELECT es el bit 2, LEFT el 6
        let mut p = pads(PadKind::Nes, 1 << 2 | 1 << 6, 1 << 2 | 1 << 6);
        let [a, b] = p.scan();
        assert_eq!(a, Buttons::LEFT | Buttons::SELECT | Buttons::OTHER);
        assert_eq!(b, Buttons::LEFT | Buttons::SELECT); // Sólo el mando A
    }

    #[test]
    fn held_buttons_are_sticky_and_report_once() {
        let mut p = pads(PadKind::Nes, 1 << 3, 0);
        let mut dst = [0u8; MAX_REPORT_LEN];
        assert_eq!(p.poll_report(&mut dst), 6);
        assert_eq!(&dst[..6], &[0xA1, 0x42, 0x40, 0x00, 0x00, 0x00]);
        for _ in 0..100 {
            assert_eq!(p.poll_report(&mut dst), 0);
        }
        p.gpio.a = 0;
        assert_eq!(p.poll_report(&mut dst), 6);
        assert_eq!(&dst[2..6], &[0, 0, 0, 0]);
    }

    #[test]
    fn opposing_directions_keep_previous_state() {
        let mut p = pads(PadKind::Nes, 1 << 4, 0); // UP
        let mut dst = [0u8; MAX_REPORT_LEN];
        assert_eq!(p.poll_report(&mut dst), 6);
        p.gpio.a = 1 << 4 | 1 << 5; // UP + DOWN: ruido
        assert_eq!(p.poll_report(&mut dst), 0);
        assert_eq!(p.state.buttons(0), Buttons::UP);
    }
}
