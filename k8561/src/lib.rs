// k8561/src/lib.rs

//! Teclado IR Velleman K8561.
//!
//! 12 bits en los pulsos ALTOS: arranque ~25 ticks, 0 corto (~6), 1 largo (~13).
//! El bit 8 marca "tecla soltada". Las teclas de modificador no se reportan:
//! sólo enganchan un estado que decide qué tabla se usa para las demás.
//! Una sola tecla activa a la vez.

mod keymap;

use std::ops::RangeInclusive;

use edge::{Decoder, EdgeEvent, Mailbox, ShiftRegister};
use hid::{InputDevice, KeyCode, KeyMod, ReportBuffer, write_keyboard_report};

pub use keymap::{ALT_KEYS, BASE_KEYS, CTRL_KEYS, SHIFT_KEYS};

pub const FRAME_BITS: u8 = 12;

/// Bit de "tecla soltada"
pub const KEY_UP: u16 = 0x0100;

/// Autoliberación por si se pierde el código de soltar
pub const KEY_DOWN_FRAMES: u8 = 40;
pub const KEY_UP_FRAMES: u8 = 1;

const START: RangeInclusive<u8> = 23..=28;
const SHORT: RangeInclusive<u8> = 5..=8;
const LONG: RangeInclusive<u8> = 11..=15;

// Códigos que sólo cambian el estado enganchado
pub const LSHIFT_DOWN: u16 = 0x06FC;
pub const LSHIFT_UP: u16 = 0x07FC;
pub const RSHIFT_DOWN: u16 = 0x0C2A;
pub const RSHIFT_UP: u16 = 0x0D2A;
pub const LCTRL_DOWN: u16 = 0x02B2;
pub const LCTRL_UP: u16 = 0x03B2;
pub const LALT_DOWN: u16 = 0x0CC2;
pub const LALT_UP: u16 = 0x0DC2;
pub const RALT_DOWN: u16 = 0x02E2;
pub const RALT_UP: u16 = 0x03E2;
pub const CAPS_LOCK: u16 = 0x0D4C;

// =========================================================================
//  DECODIFICADOR
// =========================================================================

#[derive(Debug, Default)]
pub struct K8561Decoder {
    started: bool,
    reg: ShiftRegister,
}

impl K8561Decoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for K8561Decoder {
    type Code = u16;

    fn advance(&mut self, edge: EdgeEvent) -> Option<u16> {
        if !edge.level {
            return None;
        }
        let t = edge.duration;

        if !self.started {
            if START.contains(&t) {
                self.started = true;
                self.reg.clear();
            }
            return None;
        }

        let bit = if SHORT.contains(&t) {
            false
        } else if LONG.contains(&t) {
            true
        } else {
            self.started = false; // Largo de bit inválido
            return None;
        };
        if self.reg.push(bit) == FRAME_BITS {
            self.started = false;
            return Some(self.reg.code() as u16);
        }
        None
    }

    fn is_idle(&self) -> bool {
        !self.started
    }
}

// =========================================================================
//  TRADUCCIÓN CON MODIFICADORES ENGANCHADOS
// =========================================================================

/// Estado de shift/ctrl/alt (izquierdo y derecho) entre códigos.
#[derive(Debug, Default, Clone)]
pub struct Keymap {
    latch: KeyMod,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latched(&self) -> KeyMod {
        self.latch
    }

    /// Actualiza el estado enganchado y traduce. Las teclas sin traducción
    /// (incluidos los propios modificadores) dan `KeyCode::NONE`.
    pub fn translate(&mut self, raw: u16) -> KeyCode {
        match raw {
            LSHIFT_DOWN => self.latch.insert(KeyMod::LSHIFT),
            LSHIFT_UP => self.latch.remove(KeyMod::LSHIFT),
            RSHIFT_DOWN => self.latch.insert(KeyMod::RSHIFT),
            RSHIFT_UP => self.latch.remove(KeyMod::RSHIFT),
            LCTRL_DOWN => self.latch.insert(KeyMod::LCTRL),
            LCTRL_UP => self.latch.remove(KeyMod::LCTRL),
            LALT_DOWN => self.latch.insert(KeyMod::LALT),
            LALT_UP => self.latch.remove(KeyMod::LALT),
            RALT_DOWN => self.latch.insert(KeyMod::RALT),
            RALT_UP => self.latch.remove(KeyMod::RALT),
            CAPS_LOCK => {
                let shift = KeyMod::LSHIFT | KeyMod::RSHIFT;
                if self.latch.intersects(shift) {
                    self.latch.remove(shift);
                } else {
                    self.latch.insert(KeyMod::LSHIFT);
                }
            }
            _ => {}
        }

        let cmd = raw & !KEY_UP;
        let table: &[(u16, KeyCode)] = if self.latch.intersects(KeyMod::LSHIFT | KeyMod::RSHIFT) {
            &SHIFT_KEYS
        } else if self.latch.intersects(KeyMod::LALT | KeyMod::RALT) {
            &ALT_KEYS
        } else if self.latch.intersects(KeyMod::LCTRL | KeyMod::RCTRL) {
            &CTRL_KEYS
        } else {
            &BASE_KEYS
        };
        table
            .iter()
            .find(|(code, _)| *code == cmd)
            .map_or(KeyCode::NONE, |(_, key)| *key)
    }
}

// =========================================================================
//  DISPOSITIVO
// =========================================================================

#[derive(Debug, Default)]
pub struct K8561Keyboard {
    decoder: K8561Decoder,
    output: Mailbox<u16>,
    keymap: Keymap,
    expire: u8,
}

impl K8561Keyboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for K8561Keyboard {
    fn on_edge(&mut self, edge: EdgeEvent) {
        if let Some(code) = self.decoder.advance(edge) {
            self.output.post(code);
        }
    }

    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        if let Some(raw) = self.output.take() {
            let key = self.keymap.translate(raw);
            log::debug!(
                "k8561 {:04X} -> {:02X} mod {:02X}",
                raw,
                key.scancode,
                key.modifiers.bits()
            );

            if raw & KEY_UP == 0 {
                // Los modificadores solos no generan reporte
                if key.scancode == 0 {
                    return 0;
                }
                self.expire = KEY_DOWN_FRAMES;
                return write_keyboard_report(dst, key.modifiers, &[key.scancode]);
            }
            self.expire = KEY_UP_FRAMES;
            return write_keyboard_report(dst, KeyMod::empty(), &[]);
        }

        if self.expire > 0 {
            self.expire -= 1;
            if self.expire == 0 {
                log::debug!("k8561 liberación forzada");
                return write_keyboard_report(dst, KeyMod::empty(), &[]);
            }
        }
        0
    }
}
