// hid/src/lib.rs

//! Vocabulario genérico de botones y los reportes HID "falsos" que consume
//! la capa de entrada del emulador una vez por frame.

use edge::EdgeEvent;

// =========================================================================
//  FORMATO DE LOS REPORTES
//  Gamepad:  A1 42 j0_lo j0_hi j1_lo j1_hi
//  Teclado:  A1 01 mods 00 k k k k k k
// =========================================================================

pub const REPORT_HEADER: u8 = 0xA1;
pub const GAMEPAD_REPORT_ID: u8 = 0x42;
pub const KEYBOARD_REPORT_ID: u8 = 0x01;

pub const GAMEPAD_REPORT_LEN: usize = 6;
pub const KEYBOARD_REPORT_LEN: usize = 10;
pub const MAX_REPORT_LEN: usize = KEYBOARD_REPORT_LEN;

/// Teclas simultáneas que caben en un reporte de teclado
pub const ROLLOVER_KEYS: usize = 6;

/// Buffer donde cualquier fuente escribe su reporte.
pub type ReportBuffer = [u8; MAX_REPORT_LEN];

bitflags::bitflags! {
    /// Botones genéricos: todos los protocolos traducen a este vocabulario.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Buttons: u16 {
        const UP     = 0x0001;
        const DOWN   = 0x0002;
        const LEFT   = 0x0004;
        const RIGHT  = 0x0008;
        const FIRE   = 0x0010;
        const SELECT = 0x0020;
        const START  = 0x0040;
        const RESET  = 0x0080;
        const OTHER  = 0x0100; // Abre el menú de archivos
        const FIRE_A = 0x0200;
        const FIRE_B = 0x0400;
        const FIRE_C = 0x0800;
        const FIRE_X = 0x1000;
        const FIRE_Y = 0x2000;
        const FIRE_Z = 0x4000;
    }
}

impl Buttons {
    /// Arriba+abajo o izquierda+derecha a la vez no existen en un mando real:
    /// es ruido de la recepción.
    pub fn is_contradictory(self) -> bool {
        self.contains(Buttons::UP | Buttons::DOWN) || self.contains(Buttons::LEFT | Buttons::RIGHT)
    }
}

bitflags::bitflags! {
    /// Byte de modificadores del reporte de teclado (layout USB boot).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct KeyMod: u8 {
        const LCTRL  = 0x01;
        const LSHIFT = 0x02;
        const LALT   = 0x04;
        const LGUI   = 0x08;
        const RCTRL  = 0x10;
        const RSHIFT = 0x20;
        const RALT   = 0x40;
        const RGUI   = 0x80;
    }
}

/// Tecla ya traducida: scancode USB + modificadores que la acompañan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyCode {
    pub scancode: u8,
    pub modifiers: KeyMod,
}

impl KeyCode {
    pub const NONE: KeyCode = KeyCode { scancode: 0, modifiers: KeyMod::empty() };

    pub const fn new(scancode: u8, modifiers: KeyMod) -> Self {
        Self { scancode, modifiers }
    }
}

/// Escribe un reporte de teclado completo y devuelve su longitud.
/// Las plazas que no vienen en `keys` quedan a cero.
pub fn write_keyboard_report(dst: &mut ReportBuffer, modifiers: KeyMod, keys: &[u8]) -> usize {
    dst[0] = REPORT_HEADER;
    dst[1] = KEYBOARD_REPORT_ID;
    dst[2] = modifiers.bits();
    dst[3] = 0;
    for (i, slot) in dst[4..4 + ROLLOVER_KEYS].iter_mut().enumerate() {
        *slot = keys.get(i).copied().unwrap_or(0);
    }
    KEYBOARD_REPORT_LEN
}

// =========================================================================
//  INTERFAZ DE LOS DISPOSITIVOS
// =========================================================================

/// Cualquier fuente de entrada que el multiplexor sabe sondear.
pub trait InputDevice {
    /// Flanco del receptor IR (contexto de interrupción).
    /// Los mandos cableados lo ignoran.
    fn on_edge(&mut self, _edge: EdgeEvent) {}

    /// Se llama una vez por frame. Devuelve 0 si no hay cambios, y en ese
    /// caso `dst` no se toca.
    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize;
}

// =========================================================================
//  MOTOR GENÉRICO DE BOTONES (dos jugadores / dos plazas)
// =========================================================================

/// Estado de dos plazas con auto-liberación.
/// Los protocolos inalámbricos no mandan "suelto", así que si no llega un
/// código en `expiry` frames se asume que el botón se soltó.
#[derive(Debug, Default, Clone)]
pub struct IrState {
    joy: [Buttons; 2],
    joy_last: [Buttons; 2], // Lo último que se envió
    timer: [u8; 2],         // 0 = sin auto-liberación
}

impl IrState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda la máscara de una plaza y rearma su temporizador.
    /// Una máscara contradictoria se descarta entera.
    pub fn set(&mut self, slot: usize, mask: Buttons, expiry: u8) {
        if mask.is_contradictory() {
            log::trace!("mascara descartada: {:04X}", mask.bits());
            return;
        }
        self.joy[slot] = mask;
        self.timer[slot] = expiry;
    }

    pub fn buttons(&self, slot: usize) -> Buttons {
        self.joy[slot]
    }

    /// Genera el reporte de gamepad sólo si algo cambió desde el último envío.
    pub fn get_hid(&mut self, dst: &mut ReportBuffer) -> usize {
        for slot in 0..2 {
            if self.timer[slot] != 0 {
                self.timer[slot] -= 1;
                if self.timer[slot] == 0 {
                    self.joy[slot] = Buttons::empty();
                }
            }
        }

        if self.joy == self.joy_last {
            return 0;
        }
        self.joy_last = self.joy;

        let [j0, j1] = self.joy.map(|j| j.bits().to_le_bytes());
        dst[0] = REPORT_HEADER;
        dst[1] = GAMEPAD_REPORT_ID;
        dst[2..4].copy_from_slice(&j0);
        dst[4..6].copy_from_slice(&j1);
        GAMEPAD_REPORT_LEN
    }
}
