// k8561/src/keymap.rs

//! Tablas código del teclado (sin el bit de soltar) -> tecla USB.
//! Teclado alemán: la Z y la Y van cambiadas.

use hid::{KeyCode, KeyMod};

/// Con shift (izquierdo o derecho) enganchado
pub const SHIFT_KEYS: [(u16, KeyCode); 44] = [
    (0x0444, KeyCode::new(0x1E, KeyMod::LSHIFT)), // '!'
    (0x0CC4, KeyCode::new(0x34, KeyMod::LSHIFT)), // '\'
    (0x0CA4, KeyCode::new(0x21, KeyMod::LSHIFT)), // '$'
    (0x0C64, KeyCode::new(0x22, KeyMod::LSHIFT)), // '%'
    (0x02E4, KeyCode::new(0x24, KeyMod::LSHIFT)), // '&'
    (0x0000, KeyCode::new(0x38, KeyMod::empty())), // '/'
    (0x0880, KeyCode::new(0x26, KeyMod::LSHIFT)), // '('
    (0x0840, KeyCode::new(0x27, KeyMod::LSHIFT)), // ')'
    (0x04C0, KeyCode::new(0x2E, KeyMod::empty())), // '='
    (0x0414, KeyCode::new(0x38, KeyMod::LSHIFT)), // '?'
    (0x0C34, KeyCode::new(0x14, KeyMod::empty())), // 'Q'
    (0x02B4, KeyCode::new(0x1A, KeyMod::empty())), // 'W'
    (0x0274, KeyCode::new(0x08, KeyMod::empty())), // 'E'
    (0x0AF4, KeyCode::new(0x15, KeyMod::empty())), // 'R'
    (0x040C, KeyCode::new(0x17, KeyMod::empty())), // 'T'
    (0x0C8C, KeyCode::new(0x1D, KeyMod::empty())), // 'Z'
    (0x0820, KeyCode::new(0x18, KeyMod::empty())), // 'U'
    (0x04A0, KeyCode::new(0x0C, KeyMod::empty())), // 'I'
    (0x0460, KeyCode::new(0x12, KeyMod::empty())), // 'O'
    (0x0CE0, KeyCode::new(0x13, KeyMod::empty())), // 'P'
    (0x0AEA, KeyCode::new(0x25, KeyMod::LSHIFT)), // '*'
    (0x02CC, KeyCode::new(0x04, KeyMod::empty())), // 'A'
    (0x0C2C, KeyCode::new(0x16, KeyMod::empty())), // 'S'
    (0x02AC, KeyCode::new(0x07, KeyMod::empty())), // 'D'
    (0x026C, KeyCode::new(0x09, KeyMod::empty())), // 'F'
    (0x0AEC, KeyCode::new(0x0A, KeyMod::empty())), // 'G'
    (0x0C1C, KeyCode::new(0x0B, KeyMod::empty())), // 'H'
    (0x0810, KeyCode::new(0x0D, KeyMod::empty())), // 'J'
    (0x0490, KeyCode::new(0x0E, KeyMod::empty())), // 'K'
    (0x0450, KeyCode::new(0x0F, KeyMod::empty())), // 'L'
    (0x029C, KeyCode::new(0x1C, KeyMod::empty())), // 'Y'
    (0x025C, KeyCode::new(0x1B, KeyMod::empty())), // 'X'
    (0x0ADC, KeyCode::new(0x06, KeyMod::empty())), // 'C'
    (0x023C, KeyCode::new(0x19, KeyMod::empty())), // 'V'
    (0x0ABC, KeyCode::new(0x05, KeyMod::empty())), // 'B'
    (0x0A7C, KeyCode::new(0x11, KeyMod::empty())), // 'N'
    (0x0430, KeyCode::new(0x10, KeyMod::empty())), // 'M'
    (0x025A, KeyCode::new(0x33, KeyMod::empty())), // ';'
    (0x0CB0, KeyCode::new(0x33, KeyMod::LSHIFT)), // ':'
    (0x0C1A, KeyCode::new(0x34, KeyMod::empty())), // '''
    (0x0C70, KeyCode::new(0x2D, KeyMod::LSHIFT)), // '_'
    (0x0C46, KeyCode::new(0x37, KeyMod::LSHIFT)), // '>'
    (0x0428, KeyCode::new(0x3E, KeyMod::LSHIFT)), // Shift F5
    (0x02F0, KeyCode::new(0x28, KeyMod::LSHIFT)), // Shift ENTER
];

/// Con alt enganchado
pub const ALT_KEYS: [(u16, KeyCode); 5] = [
    (0x0880, KeyCode::new(0x2F, KeyMod::LSHIFT)), // '['
    (0x0840, KeyCode::new(0x30, KeyMod::LSHIFT)), // ']'
    (0x0414, KeyCode::new(0x31, KeyMod::empty())), // '\'
    (0x0C34, KeyCode::new(0x1F, KeyMod::LSHIFT)), // '@'
    (0x0C46, KeyCode::new(0x31, KeyMod::LSHIFT)), // '|'
];

/// Con ctrl enganchado: símbolos gráficos de Atari
pub const CTRL_KEYS: [(u16, KeyCode); 26] = [
    (0x0C34, KeyCode::new(0x14, KeyMod::LCTRL)), // 'Q'
    (0x02B4, KeyCode::new(0x1A, KeyMod::LCTRL)), // 'W'
    (0x0274, KeyCode::new(0x08, KeyMod::LCTRL)), // 'E'
    (0x0AF4, KeyCode::new(0x15, KeyMod::LCTRL)), // 'R'
    (0x040C, KeyCode::new(0x17, KeyMod::LCTRL)), // 'T'
    (0x0C8C, KeyCode::new(0x1D, KeyMod::LCTRL)), // 'Z'
    (0x0820, KeyCode::new(0x18, KeyMod::LCTRL)), // 'U'
    (0x04A0, KeyCode::new(0x0C, KeyMod::LCTRL)), // 'I'
    (0x0460, KeyCode::new(0x12, KeyMod::LCTRL)), // 'O'
    (0x0CE0, KeyCode::new(0x13, KeyMod::LCTRL)), // 'P'
    (0x02CC, KeyCode::new(0x04, KeyMod::LCTRL)), // 'A'
    (0x0C2C, KeyCode::new(0x16, KeyMod::LCTRL)), // 'S'
    (0x02AC, KeyCode::new(0x07, KeyMod::LCTRL)), // 'D'
    (0x026C, KeyCode::new(0x09, KeyMod::LCTRL)), // 'F'
    (0x0AEC, KeyCode::new(0x0A, KeyMod::LCTRL)), // 'G'
    (0x0C1C, KeyCode::new(0x0B, KeyMod::LCTRL)), // 'H'
    (0x0810, KeyCode::new(0x0D, KeyMod::LCTRL)), // 'J'
    (0x0490, KeyCode::new(0x0E, KeyMod::LCTRL)), // 'K'
    (0x0450, KeyCode::new(0x0F, KeyMod::LCTRL)), // 'L'
    (0x029C, KeyCode::new(0x1C, KeyMod::LCTRL)), // 'Y'
    (0x025C, KeyCode::new(0x1B, KeyMod::LCTRL)), // 'X'
    (0x0ADC, KeyCode::new(0x06, KeyMod::LCTRL)), // 'C'
    (0x023C, KeyCode::new(0x19, KeyMod::LCTRL)), // 'V'
    (0x0ABC, KeyCode::new(0x05, KeyMod::LCTRL)), // 'B'
    (0x0A7C, KeyCode::new(0x11, KeyMod::LCTRL)), // 'N'
    (0x0430, KeyCode::new(0x10, KeyMod::LCTRL)), // 'M'
];

/// Sin modificadores
pub const BASE_KEYS: [(u16, KeyCode); 67] = [
    (0x0444, KeyCode::new(0x1E, KeyMod::empty())), // '1'
    (0x0CC4, KeyCode::new(0x1F, KeyMod::empty())), // '2'
    (0x0424, KeyCode::new(0x20, KeyMod::empty())), // '3'
    (0x0CA4, KeyCode::new(0x21, KeyMod::empty())), // '4'
    (0x0C64, KeyCode::new(0x22, KeyMod::empty())), // '5'
    (0x02E4, KeyCode::new(0x23, KeyMod::empty())), // '6'
    (0x0000, KeyCode::new(0x24, KeyMod::empty())), // '7'
    (0x0880, KeyCode::new(0x25, KeyMod::empty())), // '8'
    (0x0840, KeyCode::new(0x26, KeyMod::empty())), // '9'
    (0x04C0, KeyCode::new(0x27, KeyMod::empty())), // '0'
    (0x0C34, KeyCode::new(0x14, KeyMod::empty())), // 'q'
    (0x02B4, KeyCode::new(0x1A, KeyMod::empty())), // 'w'
    (0x0274, KeyCode::new(0x08, KeyMod::empty())), // 'e'
    (0x0AF4, KeyCode::new(0x15, KeyMod::empty())), // 'r'
    (0x040C, KeyCode::new(0x17, KeyMod::empty())), // 't'
    (0x0C8C, KeyCode::new(0x1D, KeyMod::empty())), // 'z'
    (0x0820, KeyCode::new(0x18, KeyMod::empty())), // 'u'
    (0x04A0, KeyCode::new(0x0C, KeyMod::empty())), // 'i'
    (0x0460, KeyCode::new(0x12, KeyMod::empty())), // 'o'
    (0x0CE0, KeyCode::new(0x13, KeyMod::empty())), // 'p'
    (0x0AEA, KeyCode::new(0x2E, KeyMod::LSHIFT)), // '+'
    (0x0C1A, KeyCode::new(0x20, KeyMod::LSHIFT)), // '#'
    (0x02CC, KeyCode::new(0x04, KeyMod::empty())), // 'a'
    (0x0C2C, KeyCode::new(0x16, KeyMod::empty())), // 's'
    (0x02AC, KeyCode::new(0x07, KeyMod::empty())), // 'd'
    (0x026C, KeyCode::new(0x09, KeyMod::empty())), // 'f'
    (0x0AEC, KeyCode::new(0x0A, KeyMod::empty())), // 'g'
    (0x0C1C, KeyCode::new(0x0B, KeyMod::empty())), // 'h'
    (0x0810, KeyCode::new(0x0D, KeyMod::empty())), // 'j'
    (0x0490, KeyCode::new(0x0E, KeyMod::empty())), // 'k'
    (0x0450, KeyCode::new(0x0F, KeyMod::empty())), // 'l'
    (0x029C, KeyCode::new(0x1C, KeyMod::empty())), // 'y'
    (0x025C, KeyCode::new(0x1B, KeyMod::empty())), // 'x'
    (0x0ADC, KeyCode::new(0x06, KeyMod::empty())), // 'c'
    (0x023C, KeyCode::new(0x19, KeyMod::empty())), // 'v'
    (0x0ABC, KeyCode::new(0x05, KeyMod::empty())), // 'b'
    (0x0A7C, KeyCode::new(0x11, KeyMod::empty())), // 'n'
    (0x0430, KeyCode::new(0x10, KeyMod::empty())), // 'm'
    (0x025A, KeyCode::new(0x36, KeyMod::empty())), // ','
    (0x0CB0, KeyCode::new(0x37, KeyMod::empty())), // '.'
    (0x0C70, KeyCode::new(0x2D, KeyMod::empty())), // '-'
    (0x0C46, KeyCode::new(0x36, KeyMod::LSHIFT)), // '<'
    (0x0C38, KeyCode::new(0x29, KeyMod::empty())), // ESCAPE
    (0x0C54, KeyCode::new(0x2A, KeyMod::empty())), // BACKSPACE
    (0x0AF2, KeyCode::new(0x50, KeyMod::LCTRL)), // LEFT
    (0x0482, KeyCode::new(0x52, KeyMod::LCTRL)), // UP
    (0x0272, KeyCode::new(0x51, KeyMod::LCTRL)), // DOWN
    (0x0442, KeyCode::new(0x4F, KeyMod::LCTRL)), // RIGHT
    (0x0804, KeyCode::new(0x40, KeyMod::empty())), // STOP
    (0x02D4, KeyCode::new(0x2B, KeyMod::empty())), // TABULATOR
    (0x02F0, KeyCode::new(0x28, KeyMod::empty())), // ENTER
    (0x0808, KeyCode::new(0x3A, KeyMod::empty())), // F1
    (0x0488, KeyCode::new(0x3B, KeyMod::empty())), // F2
    (0x0448, KeyCode::new(0x3C, KeyMod::empty())), // F3
    (0x0CC8, KeyCode::new(0x3D, KeyMod::empty())), // F4
    (0x0428, KeyCode::new(0x3E, KeyMod::empty())), // F5
    (0x0CA8, KeyCode::new(0x3F, KeyMod::empty())), // F6
    (0x0C68, KeyCode::new(0x40, KeyMod::empty())), // F7
    (0x02E8, KeyCode::new(0x41, KeyMod::empty())), // F8
    (0x0418, KeyCode::new(0x42, KeyMod::empty())), // F9
    (0x0C98, KeyCode::new(0x43, KeyMod::empty())), // F10
    (0x0C58, KeyCode::new(0x44, KeyMod::empty())), // F11
    (0x02D8, KeyCode::new(0x45, KeyMod::empty())), // F12
    (0x02AA, KeyCode::new(0x2C, KeyMod::empty())), // SPACE
    (0x0484, KeyCode::new(0x23, KeyMod::LSHIFT)), // '^'
    (0x0CA2, KeyCode::new(0x4B, KeyMod::empty())), // Page up
    (0x0C4A, KeyCode::new(0x4E, KeyMod::empty())), // Page down
];
