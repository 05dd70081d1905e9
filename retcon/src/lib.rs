// retcon/src/lib.rs

//! Mandos inalámbricos RETCON.
//!
//! Repetición de teclado cada 75ms. Preámbulo: 0.80ms bajo, 0.5ms alto.
//! Cada bit es un pulso bajo (0.57ms = 0, 0.27ms = 1) seguido de ~0.37ms alto.
//! 16 bits; el bit 15 dice qué jugador mandó la trama.
//!
//! En ticks de 63.555 µs: preámbulo ~12.6 / 7.9, LOW0 ~9, LOW1 ~4.3, HIGH ~5.8

use edge::{Decoder, EdgeEvent, Mailbox, ShiftRegister, Windows};
use hid::{Buttons, InputDevice, IrState, ReportBuffer};

pub const FRAME_BITS: u8 = 16;

/// Frames sin código antes de soltar los botones
pub const REPEAT_FRAMES: u8 = 20;

/// Aquí los bits van en los pulsos BAJOS y el corto es el 1.
pub fn windows() -> Windows {
    Windows { preamble: 12..=14, zero: 8..=10, one: 4..=6 }
}

/// Bit del mando -> botón genérico
const BUTTON_MAP: [(u16, Buttons); 12] = [
    (0x0400, Buttons::UP),
    (0x0200, Buttons::DOWN),
    (0x0100, Buttons::LEFT),
    (0x0080, Buttons::RIGHT),
    (0x1000, Buttons::SELECT),
    (0x0800, Buttons::START),
    (0x0020, Buttons::FIRE_X),
    (0x0040, Buttons::FIRE_Y),
    (0x0002, Buttons::FIRE_Z),
    (0x2000, Buttons::FIRE_A),
    (0x4000, Buttons::FIRE_B),
    (0x0008, Buttons::FIRE_C),
];

/// Traduce una trama a (jugador, botones).
pub fn translate(code: u16) -> (usize, Buttons) {
    let buttons = BUTTON_MAP
        .iter()
        .filter(|(bit, _)| code & bit != 0)
        .fold(Buttons::empty(), |m, (_, b)| m | *b);
    ((code >> 15) as usize, buttons)
}

// =========================================================================
//  DECODIFICADOR
// =========================================================================

#[derive(Debug)]
pub struct RetconDecoder {
    started: bool,
    reg: ShiftRegister,
    windows: Windows,
}

impl RetconDecoder {
    pub fn new() -> Self {
        Self { started: false, reg: ShiftRegister::new(), windows: windows() }
    }
}

impl Default for RetconDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for RetconDecoder {
    type Code = u16;

    fn advance(&mut self, edge: EdgeEvent) -> Option<u16> {
        // Los pulsos altos sólo separan bits
        if edge.level {
            return None;
        }
        let t = edge.duration;

        if !self.started {
            if self.windows.is_preamble(t) {
                self.started = true;
                self.reg.clear();
            }
            return None;
        }

        let Some(bit) = self.windows.classify(t) else {
            self.started = false;
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
pub struct RetconPad {
    decoder: RetconDecoder,
    output: Mailbox<u16>,
    state: IrState,
}

impl RetconPad {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDevice for RetconPad {
    fn on_edge(&mut self, edge: EdgeEvent) {
        if let Some(code) = self.decoder.advance(edge) {
            self.output.post(code);
        }
    }

    fn poll_report(&mut self, dst: &mut ReportBuffer) -> usize {
        if let Some(code) = self.output.take() {
            let (player, m) = translate(code);
            log::debug!("retcon {:04X} -> p{} {:04X}", code, player, m.bits());
            self.state.set(player, m, REPEAT_FRAMES);
        }
        self.state.get_hid(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid::MAX_REPORT_LEN;
    use proptest::prelude::*;

    fn frame(code: u16) -> Vec<EdgeEvent> {
        let mut edges = vec![EdgeEvent::low(13), EdgeEvent::high(8)];
        for i in (0..FRAME_BITS).rev() {
            edges.push(EdgeEvent::low(if code >> i & 1 == 1 { 5 } else { 9 }));
            edges.push(EdgeEvent::high(6));
        }
        edges
    }

    fn feed(dec: &mut RetconDecoder, edges: &[EdgeEvent]) -> Vec<u16> {
        edges.iter().filter_map(|e| dec.advance(*e)).collect()
    }

    #[test]
    fn translate_ors_mapped_bits() {
        let (player, m) = translate(0x0400 | 0x2000 | 0x0008);
        assert_eq!(player, 0);
        assert_eq!(m, Buttons::UP | Buttons::FIRE_A | Buttons::FIRE_C);
        // Bits sin mapear no aportan nada
        assert_eq!(translate(0x0001 | 0x0010), (0, Buttons::empty()));
        assert_eq!(translate(0x8000 | 0x0100).0, 1);
    }

    #[test]
    fn second_player_lands_in_slot_one() {
        let mut pad = RetconPad::new();
        let mut dst = [0u8; MAX_REPORT_LEN];
        for e in frame(0x8000 | 0x0800) {
            pad.on_edge(e);
        }
        assert_eq!(pad.poll_report(&mut dst), 6);
        assert_eq!(&dst[..6], &[0xA1, 0x42, 0, 0, 0x40, 0x00]);
    }

    #[test]
    fn up_and_down_together_is_ignored() {
        let mut pad = RetconPad::new();
        let mut dst = [0u8; MAX_REPORT_LEN];
        for e in frame(0x0400 | 0x0200) {
            pad.on_edge(e);
        }
        assert_eq!(pad.poll_report(&mut dst), 0);
    }

    #[test]
    fn invalid_low_aborts_frame() {
        let mut dec = RetconDecoder::new();
        let mut edges = frame(0x1234);
        edges[8] = EdgeEvent::low(7); // Entre LOW1 y LOW0
        assert!(feed(&mut dec, &edges).is_empty());
        assert_eq!(feed(&mut dec, &frame(0x1234)), vec![0x1234]);
    }

    proptest! {
        #[test]
        fn idle_without_preamble_emits_nothing(
            edges in proptest::collection::vec((any::<bool>(), any::<u8>()), 0..200)
        ) {
            let mut dec = RetconDecoder::new();
            for (high, t) in edges {
                let t = if !high && (12..=14).contains(&t) { t + 10 } else { t };
                prop_assert_eq!(dec.advance(EdgeEvent::new(t, high)), None);
                prop_assert!(dec.is_idle());
            }
        }

        #[test]
        fn any_frame_round_trips(code in any::<u16>()) {
            let mut dec = RetconDecoder::new();
            prop_assert_eq!(feed(&mut dec, &frame(code)), vec![code]);
            prop_assert!(dec.is_idle());
        }
    }
}
