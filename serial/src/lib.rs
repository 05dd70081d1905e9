// serial/src/lib.rs

//! Teclado por el enlace serie del host.
//!
//! Cada byte es una tecla: ASCII más unos códigos extendidos para flechas y
//! teclas de función. No hay "tecla soltada", así que se suelta sola.

use std::collections::VecDeque;

use hid::{InputDevice, KeyCode, KeyMod, ReportBuffer, write_keyboard_report};

/// Polls sin byte que se aguanta la última tecla; el reporte vacío sale en
/// el siguiente. Un poll que lee un byte sin traducción no descuenta.
pub const RELEASE_FRAMES: u8 = 10;

// Códigos extendidos del teclado serie
pub const KEY_TAB: u8 = 0x09;
pub const KEY_ENTER: u8 = 0x0A;
pub const KEY_ESCAPE: u8 = 0x1B;
pub const KEY_BACK: u8 = 0x7F;
pub const KEY_LEFT: u8 = 0x92;
pub const KEY_UP: u8 = 0x95;
pub const KEY_DOWN: u8 = 0x96;
pub const KEY_RIGHT: u8 = 0x99;
pub const KEY_F1: u8 = 0x9A;
pub const KEY_F12: u8 = 0xA5;

/// Byte -> tecla USB. `None` si el byte no tiene traducción.
pub fn ascii_to_key(b: u8) -> Option<KeyCode> {
    let plain = |sc| KeyCode::new(sc, KeyMod::empty());
    let shifted = |sc| KeyCode::new(sc, KeyMod::LSHIFT);
    // Las flechas del emulador van con ctrl
    let ctrl = |sc| KeyCode::new(sc, KeyMod::LCTRL);

    let key = match b {
        b'A'..=b'Z' => plain(0x04 + (b - b'A')),
        b'a'..=b'z' => plain(0x04 + (b - b'a')),
        b'1'..=b'9' => plain(0x1E + (b - b'1')),
        b'0' => plain(0x27),
        b'!' => shifted(0x1E),
        b'@' => shifted(0x1F),
        b'#' => shifted(0x20),
        b'$' => shifted(0x21),
        b'%' => shifted(0x22),
        b'&' => shifted(0x23),
        b'*' => shifted(0x25),
        b'(' => shifted(0x26),
        b')' => shifted(0x27),
        KEY_ENTER => plain(0x28),
        KEY_ESCAPE => plain(0x29),
        KEY_BACK => plain(0x2A),
        KEY_TAB => plain(0x2B),
        b' ' => plain(0x2C),
        b'-' => plain(0x2D),
        b'_' => shifted(0x2D),
        b'=' => plain(0x2E),
        b'+' => shifted(0x2E),
        b'[' => shifted(0x2F),
        b']' => shifted(0x30),
        b'|' => shifted(0x31),
        b';' => plain(0x33),
        b':' => shifted(0x33),
        b'"' => shifted(0x34),
        b',' => plain(0x36),
        b'<' => shifted(0x36),
        b'.' => plain(0x37),
        b'>' => shifted(0x37),
        b'/' => plain(0x38),
        b'?' => shifted(0x38),
        KEY_F1..=KEY_F12 => plain(0x3A + (b - KEY_F1)),
        KEY_RIGHT => ctrl(0x4F),
        KEY_LEFT => ctrl(0x50),
        KEY_DOWN => ctrl(0x51),
        KEY_UP => ctrl(0x52),
        _ => return None,
    };
    Some(key)
}

/// De donde salen los bytes (UART, stdin, un buffer de prueba...)
pub trait ByteSource {
    /// Sin bloquear: `None` si no hay nada pendiente.
    fn read_byte(&mut self) -> Option<u8>;
}

impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

pub struct SerialKeyboard<S> {
    source: S,
    release: Option<u8>, // Polls vacíos que faltan antes del reporte vacío
}

impl<S: ByteSource> SerialKeyboard<S> {
    pub fn new(source: S) -> Self {
        Self { source, release: None }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: ByteSource> InputDevice for SerialKeyboard<S> {
    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        // Un byte por frame como mucho
        if let Some(b) = self.source.read_byte() {
            return match ascii_to_key(b) {
                Some(key) => {
                    log::debug!("serial {:02X} -> {:02X}", b, key.scancode);
                    self.release = Some(RELEASE_FRAMES);
                    write_keyboard_report(dst, key.modifiers, &[key.scancode])
                }
                None => {
                    log::trace!("serial {:02X} sin tecla", b);
                    0
                }
            };
        }

        match self.release {
            Some(0) => {
                self.release = None;
                write_keyboard_report(dst, KeyMod::empty(), &[])
            }
            Some(n) => {
                self.release = Some(n - 1);
                0
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid::MAX_REPORT_LEN;

    fn keyboard(text: &[u8]) -> SerialKeyboard<VecDeque<u8>> {
        SerialKeyboard::new(text.iter().copied().collect())
    }

    #[test]
    fn translation_table() {
        assert_eq!(ascii_to_key(b'a'), Some(KeyCode::new(0x04, KeyMod::empty())));
        assert_eq!(ascii_to_key(b'Z'), Some(KeyCode::new(0x1D, KeyMod::empty())));
        assert_eq!(ascii_to_key(b'9'), Some(KeyCode::new(0x26, KeyMod::empty())));
        assert_eq!(ascii_to_key(b'?'), Some(KeyCode::new(0x38, KeyMod::LSHIFT)));
        assert_eq!(ascii_to_key(0xA1), Some(KeyCode::new(0x41, KeyMod::empty()))); // F8
        assert_eq!(ascii_to_key(KEY_UP), Some(KeyCode::new(0x52, KeyMod::LCTRL)));
        assert_eq!(ascii_to_key(b'~'), None);
        assert_eq!(ascii_to_key(0x80), None);
    }

    #[test]
    fn nothing_pending_is_silent() {
        let mut kb = keyboard(b"");
        let mut dst = [0x11u8; MAX_REPORT_LEN];
        for _ in 0..30 {
            assert_eq!(kb.poll_report(&mut dst), 0);
        }
        assert_eq!(dst, [0x11u8; MAX_REPORT_LEN]);
    }

    #[test]
    fn key_then_release_on_eleventh_poll() {
        let mut kb = keyboard(b"!");
        let mut dst = [0u8; MAX_REPORT_LEN];
        assert_eq!(kb.poll_report(&mut dst), 10);
        assert_eq!(dst, [0xA1, 0x01, 0x02, 0x00, 0x1E, 0, 0, 0, 0, 0]);
        for _ in 0..RELEASE_FRAMES {
            assert_eq!(kb.poll_report(&mut dst), 0);
        }
        assert_eq!(kb.poll_report(&mut dst), 10);
        assert_eq!(dst, [0xA1, 0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(kb.poll_report(&mut dst), 0);
    }

    #[test]
    fn unmapped_byte_holds_the_countdown() {
        let mut kb = keyboard(b"a");
        let mut dst = [0u8; MAX_REPORT_LEN];
        assert_eq!(kb.poll_report(&mut dst), 10);
        for _ in 0..RELEASE_FRAMES {
            kb.source_mut().push_back(b'~');
            assert_eq!(kb.poll_report(&mut dst), 0);
        }
        // Los bytes ignorados no cuentan: faltan los diez polls vacíos
        for _ in 0..RELEASE_FRAMES {
            assert_eq!(kb.poll_report(&mut dst), 0);
        }
        assert_eq!(kb.poll_report(&mut dst), 10);
        assert_eq!(dst[4], 0);
    }

    #[test]
    fn one_byte_per_frame() {
        let mut kb = keyboard(b"hi");
        let mut dst = [0u8; MAX_REPORT_LEN];
        assert_eq!(kb.poll_report(&mut dst), 10);
        assert_eq!(dst[4], 0x0B);
        assert_eq!(kb.poll_report(&mut dst), 10);
        assert_eq!(dst[4], 0x0C);
        kb.source_mut().push_back(b'~');
        assert_eq!(kb.poll_report(&mut dst), 0); // Ignorado
        assert_eq!(dst[4], 0x0C);
    }
}
