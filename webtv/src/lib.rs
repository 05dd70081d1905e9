// webtv/src/lib.rs

//! Teclado IR de WebTV.
//!
//! Protocolo tipo UART: preámbulo de 3.25 bits en cero, un bit de arranque y
//! luego 16 bits (10 de tipo de mensaje: tecla abajo, tecla arriba, todas
//! sueltas...; 7 de código de tecla + 1 de paridad).
//! Mantiene hasta 6 teclas pulsadas a la vez (rollover) con expiración propia.

mod scancodes;

use std::ops::RangeInclusive;

pub use scancodes::IR_TO_SCANCODE;

use edge::{Decoder, EdgeEvent, MAX_TICKS, Mailbox, ShiftRegister};
use hid::{InputDevice, KeyMod, ROLLOVER_KEYS, ReportBuffer, write_keyboard_report};

/// Ancho de un bit de la UART en ticks de HSYNC
pub const BAUD: u16 = 12;

pub const FRAME_BITS: u8 = 16;

/// Tipos de mensaje (byte alto de la trama)
pub const KEYDOWN: u8 = 0x4A;
pub const KEYUP: u8 = 0x5E;

/// Una tecla se da por pulsada ~130ms (8 frames) tras el último código
pub const KEY_FRAMES: u8 = 8;

/// Preámbulo de 3.25 baudios en bajo
pub const PREAMBLE: RangeInclusive<u8> = 36..=40;
/// Bit de arranque corto (~1.5ms). Los datos no usan ventanas: se cuentan baudios.
pub const START_BIT: RangeInclusive<u8> = 9..=13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebTvCode {
    Down(u8),
    Up(u8),
}

/// Paridad impar sobre los 8 bits. Las teclas que no cumplen se tiran.
pub fn parity_check(k: u8) -> Option<u8> {
    (k.count_ones() & 1 == 1).then_some(k)
}

/// Teclas modificadoras -> bit de modificador. Se compara sin el bit de
/// paridad, igual que la tabla de scancodes.
pub fn ctrl_mask(k: u8) -> KeyMod {
    match k & 0xFE {
        0x38 => KeyMod::LCTRL,
        0x8C => KeyMod::LSHIFT,
        0x18 => KeyMod::LALT,
        0xD4 => KeyMod::LGUI,
        0x2A => KeyMod::RCTRL,
        0x4C => KeyMod::RSHIFT,
        0x14 => KeyMod::RALT,
        0x62 => KeyMod::RGUI,
        _ => KeyMod::empty(),
    }
}

pub fn scancode(k: u8) -> u8 {
    IR_TO_SCANCODE[(k >> 1) as usize]
}

// =========================================================================
//  DECODIFICADOR
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    StartBit,
    Bits,
}

#[derive(Debug)]
pub struct WebTvDecoder {
    phase: Phase,
    reg: ShiftRegister,
}

impl WebTvDecoder {
    pub fn new() -> Self {
        Self { phase: Phase::Idle, reg: ShiftRegister::new() }
    }
}

impl Default for WebTvDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for WebTvDecoder {
    type Code = WebTvCode;

    fn advance(&mut self, edge: EdgeEvent) -> Option<WebTvCode> {
        match self.phase {
            Phase::Idle => {
                // Cero largo: flanco de subida del bit de arranque
                if PREAMBLE.contains(&edge.duration) && !edge.level {
                    self.phase = Phase::StartBit;
                }
                None
            }
            Phase::StartBit => {
                if START_BIT.contains(&edge.duration) && edge.level {
                    self.phase = Phase::Bits;
                    self.reg.clear();
                } else {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Bits => {
                // Un pulso saturado no se sabe cuánto duró: error de trama
                if edge.duration == MAX_TICKS {
                    self.phase = Phase::Idle;
                    return None;
                }
                // Redondeamos al baudio más cercano: cada baudio entero es un bit
                // del nivel que tenía la línea.
                let mut t = edge.duration as u16 + BAUD / 2;
                while t > BAUD && self.reg.count() < FRAME_BITS {
                    t -= BAUD;
                    self.reg.push(edge.level);
                }
                if self.reg.count() < FRAME_BITS {
                    return None;
                }

                self.phase = Phase::Idle;
                // El bit bajo del código es la paridad
                let parity = (t <= BAUD) as u16;
                let code = self.reg.code() as u16 | parity;
                let key = code as u8;
                match (code >> 8) as u8 {
                    KEYDOWN => Some(WebTvCode::Down(key)),
                    KEYUP => Some(WebTvCode::Up(key)),
                    _ => None,
                }
            }
        }
    }

    fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

// =========================================================================
//  ROLLOVER: hasta 6 teclas con expiración
// =========================================================================

#[derive(Debug, Default, Clone)]
pub struct Rollover {
    keys: [u8; ROLLOVER_KEYS],   // Código IR (con paridad), 0 = libre
    expire: [u8; ROLLOVER_KEYS], // Frames que le quedan a cada tecla
    modifiers: KeyMod,
}

impl Rollover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> KeyMod {
        self.modifiers
    }

    /// Teclas vivas (códigos IR) en orden de plaza
    pub fn held(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().zip(self.expire.iter()).filter(|(_, e)| **e != 0).map(|(k, _)| *k)
    }

    /// La tecla expira en este mismo frame, no ahora: así el poll siguiente
    /// todavía la reporta una vez más.
    pub fn release(&mut self, k: u8) {
        self.modifiers.remove(ctrl_mask(k));
        if let Some(i) = self.keys.iter().position(|&key| key == k) {
            self.expire[i] = 1;
        }
    }

    /// Inserta la tecla en la lista de pulsadas. Devuelve `true` si cambió
    /// el contenido de la lista.
    pub fn press(&mut self, k: u8) -> bool {
        self.modifiers.insert(ctrl_mask(k));

        // Plaza libre, caducada o con la misma tecla; si no hay, la que
        // menos tiempo le queda.
        let mut j = 0;
        for i in 0..ROLLOVER_KEYS {
            if self.keys[i] == 0 || self.expire[i] == 0 || self.keys[i] == k {
                j = i;
                break;
            }
            if self.expire[i] < self.expire[j] {
                j = i;
            }
        }

        let changed = self.keys[j] != k;
        self.keys[j] = k;
        self.expire[j] = KEY_FRAMES;
        changed
    }

    /// Avanza un frame y arma el reporte. Sólo escribe en `dst` si algo cambió.
    pub fn report(&mut self, mut dirty: bool, dst: &mut ReportBuffer) -> usize {
        let mut pressed = [0u8; ROLLOVER_KEYS];
        let mut n = 0;
        for i in 0..ROLLOVER_KEYS {
            if self.expire[i] != 0 {
                self.expire[i] -= 1;
                if self.expire[i] == 0 {
                    dirty = true;
                }
            }
            if self.expire[i] == 0 {
                self.keys[i] = 0;
            } else {
                pressed[n] = scancode(self.keys[i]);
                n += 1;
            }
        }

        if !dirty {
            return 0;
        }
        write_keyboard_report(dst, self.modifiers, &pressed[..n])
    }
}

// =========================================================================
//  DISPOSITIVO
// =========================================================================

#[derive(Debug, Default)]
pub struct WebTvKeyboard {
    decoder: WebTvDecoder,
    key_down: Mailbox<u8>,
    key_up: Mailbox<u8>,
    rollover: Rollover,
}

impl WebTvKeyboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for WebTvKeyboard {
    fn on_edge(&mut self, edge: EdgeEvent) {
        match self.decoder.advance(edge) {
            Some(WebTvCode::Down(k)) => self.key_down.post(k),
            Some(WebTvCode::Up(k)) => self.key_up.post(k),
            None => {}
        }
    }

    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        let mut dirty = false;

        if let Some(k) = self.key_up.take() {
            match parity_check(k) {
                Some(k) => {
                    log::debug!("webtv up {:02X}", k);
                    self.rollover.release(k);
                }
                None => log::trace!("webtv paridad incorrecta {:02X}", k),
            }
        }

        if let Some(k) = self.key_down.take() {
            match parity_check(k) {
                Some(k) => {
                    log::debug!("webtv down {:02X} -> {:02X}", k, scancode(k));
                    dirty |= self.rollover.press(k);
                }
                None => log::trace!("webtv paridad incorrecta {:02X}", k),
            }
        }

        self.rollover.report(dirty, dst)
    }
}
