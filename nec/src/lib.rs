// nec/src/lib.rs

//! Mando Apple (plateado o blanco) sobre protocolo NEC.
//! Es fácil de adaptar a cualquier mando NEC cambiando la tabla de comandos.
//!
//! Tiempos en ticks de línea (~63.6 µs):
//!   preámbulo 9ms bajo ~142
//!   4.5ms alto ~71  -> inicio de trama
//!   2.25ms alto ~35 -> código de repetición
//!   32 bits: 0 = 562.5µs/562.5µs (~9), 1 = 562.5µs/1.6875ms (~27)

use std::ops::RangeInclusive;

use edge::{Decoder, EdgeEvent, Mailbox, ShiftRegister, Windows};
use hid::{Buttons, InputDevice, IrState, ReportBuffer};

/// Bits de una trama NEC completa
pub const FRAME_BITS: u8 = 32;

/// Frames que dura una pulsación sin repetición (~108ms)
pub const REPEAT_FRAMES: u8 = 15;

/// Preámbulo (marca baja larga) y clasificación de los espacios en alto.
/// 255 es un pulso saturado: no sabemos cuánto duró de verdad.
pub fn windows() -> Windows {
    Windows { preamble: 33..=254, zero: 0..=11, one: 12..=31 }
}

/// Espacio alto tras el preámbulo que indica "repite la última tecla"
const REPEAT_SPACE: RangeInclusive<u8> = 33..=39;
/// Espacio alto tras el preámbulo que abre una trama de datos
const START_SPACE: RangeInclusive<u8> = 40..=254;

// Comandos del mando Apple (7 bits)
pub const APPLE_MENU: u8 = 0x40;
pub const APPLE_PLAY: u8 = 0x7A;
pub const APPLE_CENTER: u8 = 0x3A;
pub const APPLE_RIGHT: u8 = 0x60;
pub const APPLE_LEFT: u8 = 0x10;
pub const APPLE_UP: u8 = 0x50;
pub const APPLE_DOWN: u8 = 0x30;
pub const APPLE_RELEASE: u8 = 0x20; // Llega después de menu y play

/// Lo que deja el decodificador en el buzón.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NecCode {
    Frame(u32),
    Repeat,
}

/// El comando Apple vive en los bits 14-8 de la trama.
pub fn command(code: u32) -> u8 {
    ((code >> 8) & 0x7F) as u8
}

/// Comando Apple -> botones genéricos. Lo desconocido suelta todo.
pub fn apple_buttons(cmd: u8) -> Buttons {
    match cmd {
        APPLE_UP => Buttons::UP,
        APPLE_DOWN => Buttons::DOWN,
        APPLE_LEFT => Buttons::LEFT,
        APPLE_RIGHT => Buttons::RIGHT,
        APPLE_CENTER => Buttons::FIRE,
        APPLE_MENU => Buttons::RESET,
        APPLE_PLAY => Buttons::SELECT,
        _ => Buttons::empty(),
    }
}

// =========================================================================
//  DECODIFICADOR
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Leader, // Vimos el preámbulo, falta el espacio
    Bits,
}

#[derive(Debug)]
pub struct NecDecoder {
    phase: Phase,
    reg: ShiftRegister,
    windows: Windows,
}

impl NecDecoder {
    pub fn new() -> Self {
        Self { phase: Phase::Idle, reg: ShiftRegister::new(), windows: windows() }
    }
}

impl Default for NecDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for NecDecoder {
    type Code = NecCode;

    fn advance(&mut self, edge: EdgeEvent) -> Option<NecCode> {
        let t = edge.duration;

        // Las marcas en bajo no llevan información, salvo el preámbulo,
        // que reinicia la trama esté donde esté.
        if !edge.level {
            if self.windows.is_preamble(t) {
                self.phase = Phase::Leader;
                self.reg.clear();
            }
            return None;
        }

        match self.phase {
            Phase::Idle => None,
            Phase::Leader => {
                self.phase = Phase::Idle;
                if REPEAT_SPACE.contains(&t) {
                    return Some(NecCode::Repeat);
                }
                if START_SPACE.contains(&t) {
                    self.phase = Phase::Bits;
                }
                None
            }
            Phase::Bits => match self.windows.classify(t) {
                Some(bit) => {
                    if self.reg.push(bit) == FRAME_BITS {
                        self.phase = Phase::Idle;
                        Some(NecCode::Frame(self.reg.code()))
                    } else {
                        None
                    }
                }
                None => {
                    self.phase = Phase::Idle; // Error de trama
                    None
                }
            },
        }
    }

    fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

// =========================================================================
//  DISPOSITIVO
// =========================================================================

/// Mando Apple completo: decodificador + buzón + estado de botones.
#[derive(Debug, Default)]
pub struct AppleRemote {
    decoder: NecDecoder,
    output: Mailbox<NecCode>,
    state: IrState,
    key_down: u8, // Último comando, lo reutiliza la repetición
}

impl AppleRemote {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for AppleRemote {
    fn on_edge(&mut self, edge: EdgeEvent) {
        if let Some(code) = self.decoder.advance(edge) {
            self.output.post(code);
        }
    }

    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        if let Some(code) = self.output.take() {
            if let NecCode::Frame(raw) = code {
                self.key_down = command(raw);
                log::debug!("apple {:08X} cmd {:02X}", raw, self.key_down);
            }
            self.state.set(0, apple_buttons(self.key_down), REPEAT_FRAMES);
        }
        self.state.get_hid(dst)
    }
}
