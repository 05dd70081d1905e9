// flashback/src/lib.rs

//! Mandos inalámbricos Atari Flashback 4.
//!
//! Código de 18 bits con reloj de ~1.87 kHz. El periodo de HSYNC es
//! 44/315*455 = 63.555 µs, así que:
//!   preámbulo 2.3ms en cero  -> ~36 ticks
//!   0 es un pulso de 0.27ms  -> ~4
//!   1 es un pulso de 0.80ms  -> ~13
//!
//! Los códigos llegan en parejas separadas 33ms y la secuencia se repite cada
//! 133ms. Hasta 12 bits de botones + 4 bits de checksum que además dicen qué
//! jugador mandó la trama.

use edge::{Decoder, EdgeEvent, Mailbox, ShiftRegister, Windows};
use hid::{Buttons, InputDevice, IrState, ReportBuffer};

pub const FRAME_BITS: u8 = 18;

/// Expiración por jugador (frames sin código antes de soltar)
pub const PLAYER1_FRAMES: u8 = 15;
pub const PLAYER2_FRAMES: u8 = 20;

pub fn windows() -> Windows {
    Windows { preamble: 34..=38, zero: 2..=6, one: 11..=15 }
}

/// Separa botones y checksum. El checksum vale suma+1 para el jugador 1 y
/// suma-1 para el jugador 2; cualquier otro valor es basura.
/// Los 12 bits de botones ya siguen el layout genérico.
pub fn decode_player(code: u16) -> Option<(usize, Buttons)> {
    let m = code >> 4;
    let csum = (code & 0xF) as u8;
    let s = m.wrapping_add(m >> 4).wrapping_add(m >> 8) as u8;
    let buttons = Buttons::from_bits_truncate(m);
    if s.wrapping_add(1) & 0xF == csum {
        Some((0, buttons))
    } else if s.wrapping_sub(1) & 0xF == csum {
        Some((1, buttons))
    } else {
        None
    }
}

// =========================================================================
//  DECODIFICADOR
// =========================================================================

#[derive(Debug)]
pub struct FlashbackDecoder {
    started: bool,
    reg: ShiftRegister,
    windows: Windows,
}

impl FlashbackDecoder {
    pub fn new() -> Self {
        Self { started: false, reg: ShiftRegister::new(), windows: windows() }
    }
}

impl Default for FlashbackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FlashbackDecoder {
    /// Sólo se conservan los 16 bits bajos: botones + checksum
    type Code = u16;

    fn advance(&mut self, edge: EdgeEvent) -> Option<u16> {
        let t = edge.duration;

        if !self.started {
            // Cero largo: flanco de subida del bit de arranque
            if self.windows.is_preamble(t) && !edge.level {
                self.started = true;
                self.reg.clear();
            }
            return None;
        }

        if !edge.level {
            // Entre bits el cero siempre es corto
            if !self.windows.zero.contains(&t) {
                self.started = false;
            }
            return None;
        }

        let Some(bit) = self.windows.classify(t) else {
            self.started = false; // Error de trama
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
//  DISPOSITIVO
// =========================================================================

#[derive(Debug, Default)]
pub struct FlashbackPad {
    decoder: FlashbackDecoder,
    output: Mailbox<u16>,
    state: IrState,
}

impl FlashbackPad {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for FlashbackPad {
    fn on_edge(&mut self, edge: EdgeEvent) {
        if let Some(code) = self.decoder.advance(edge) {
            self.output.post(code);
        }
    }

    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        if let Some(code) = self.output.take() {
            log::debug!("flashback {:04X}", code >> 4);
            match decode_player(code) {
                Some((0, m)) => self.state.set(0, m, PLAYER1_FRAMES),
                Some((_, m)) => self.state.set(1, m, PLAYER2_FRAMES),
                None => log::trace!("flashback checksum incorrecto: {:04X}", code),
            }
        }
        self.state.get_hid(dst)
    }
}
