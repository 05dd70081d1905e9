// edge/src/lib.rs

//! Muestreo del pin IR y piezas comunes de los decodificadores.
//! Todo lo de este crate corre en contexto de interrupción (una vez por línea
//! horizontal, ~15.6-15.7 kHz), así que nada aquí reserva memoria ni escribe logs.

use std::ops::RangeInclusive;

/// Duración máxima representable. Un pulso más largo se queda "pegado" en 255.
pub const MAX_TICKS: u8 = 0xFF;

/// Un flanco del receptor IR.
/// `duration` son los ticks que el pin estuvo en `level` ANTES del cambio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    pub duration: u8,
    pub level: bool,
}

impl EdgeEvent {
    pub fn new(duration: u8, level: bool) -> Self {
        Self { duration, level }
    }

    /// Atajo para un pulso en nivel bajo
    pub fn low(duration: u8) -> Self {
        Self::new(duration, false)
    }

    /// Atajo para un pulso en nivel alto
    pub fn high(duration: u8) -> Self {
        Self::new(duration, true)
    }
}

// =========================================================================
//  MUESTREADOR DE FLANCOS
// =========================================================================

/// Convierte niveles muestreados a ritmo fijo en eventos de flanco.
#[derive(Debug, Default)]
pub struct EdgeSampler {
    last: bool, // Último nivel visto
    count: u8,  // Ticks desde el último flanco (satura en 255)
}

impl EdgeSampler {
    pub fn new() -> Self {
        Self { last: false, count: 0 }
    }

    /// Se llama una vez por tick con el nivel actual del pin.
    /// Devuelve un flanco cuando el nivel cambia. Nunca hay más de uno pendiente:
    /// el decodificador lo tiene que consumir en la misma llamada.
    pub fn sample(&mut self, level: bool) -> Option<EdgeEvent> {
        let mut edge = None;
        if level != self.last {
            edge = Some(EdgeEvent::new(self.count, self.last));
            self.count = 0;
            self.last = level;
        }
        // El tick actual ya cuenta para el nuevo nivel
        if self.count != MAX_TICKS {
            self.count += 1;
        }
        edge
    }

    pub fn level(&self) -> bool {
        self.last
    }

    pub fn ticks_since_edge(&self) -> u8 {
        self.count
    }
}

// =========================================================================
//  VENTANAS DE TIEMPO
// =========================================================================

/// Ventanas de clasificación de un protocolo (rangos inclusivos, en ticks).
/// Son generosas a propósito: el reloj de línea tiene jitter.
#[derive(Debug, Clone)]
pub struct Windows {
    pub preamble: RangeInclusive<u8>,
    pub zero: RangeInclusive<u8>,
    pub one: RangeInclusive<u8>,
}

impl Windows {
    pub fn is_preamble(&self, t: u8) -> bool {
        self.preamble.contains(&t)
    }

    /// Clasifica un pulso como bit. `None` significa error de trama.
    pub fn classify(&self, t: u8) -> Option<bool> {
        if self.one.contains(&t) {
            Some(true)
        } else if self.zero.contains(&t) {
            Some(false)
        } else {
            None
        }
    }
}

// =========================================================================
//  REGISTRO DE DESPLAZAMIENTO
// =========================================================================

/// Acumula bits MSB primero, en orden de llegada.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRegister {
    code: u32,
    count: u8,
}

impl ShiftRegister {
    pub fn new() -> Self {
        Self { code: 0, count: 0 }
    }

    pub fn clear(&mut self) {
        self.code = 0;
        self.count = 0;
    }

    /// Mete un bit y devuelve cuántos bits van.
    pub fn push(&mut self, bit: bool) -> u8 {
        self.code = (self.code << 1) | bit as u32;
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}

// =========================================================================
//  BUZÓN Y DECODIFICADOR
// =========================================================================

/// Buzón de una sola plaza entre la interrupción (productor) y el poll por
/// frame (consumidor). Si llega un código antes de que se lea el anterior,
/// el anterior se pierde: el protocolo repite tramas más lento que el poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escribe (o pisa) el código pendiente.
    pub fn post(&mut self, code: T) {
        self.slot = Some(code);
    }

    /// Lee y vacía el buzón en un solo paso.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Interfaz común de las máquinas de estado por anchura de pulso.
pub trait Decoder {
    /// Código crudo del protocolo
    type Code: Copy;

    /// Procesa un flanco. Devuelve un código sólo al completar una trama válida.
    fn advance(&mut self, edge: EdgeEvent) -> Option<Self::Code>;

    /// `true` si el decodificador espera un preámbulo.
    fn is_idle(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sampler_reports_duration_and_prior_level() {
        let mut s = EdgeSampler::new();
        assert_eq!(s.sample(false), None);
        assert_eq!(s.sample(false), None);
        assert_eq!(s.sample(false), None);
        // Tres muestras en bajo -> flanco de duración 3
        assert_eq!(s.sample(true), Some(EdgeEvent::low(3)));
        assert_eq!(s.sample(true), None);
        assert_eq!(s.sample(false), Some(EdgeEvent::high(2)));
    }

    #[test]
    fn sampler_saturates_long_pulses() {
        let mut s = EdgeSampler::new();
        for _ in 0..1000 {
            assert_eq!(s.sample(false), None);
        }
        assert_eq!(s.ticks_since_edge(), MAX_TICKS);
        assert_eq!(s.sample(true), Some(EdgeEvent::low(MAX_TICKS)));
        assert!(s.level());
    }

    #[test]
    fn windows_are_inclusive() {
        let w = Windows { preamble: 34..=38, zero: 2..=6, one: 11..=15 };
        assert!(w.is_preamble(34) && w.is_preamble(38));
        assert!(!w.is_preamble(33) && !w.is_preamble(39));
        assert_eq!(w.classify(2), Some(false));
        assert_eq!(w.classify(6), Some(false));
        assert_eq!(w.classify(11), Some(true));
        assert_eq!(w.classify(15), Some(true));
        assert_eq!(w.classify(8), None);
        assert_eq!(w.classify(MAX_TICKS), None);
    }

    #[test]
    fn shift_register_is_msb_first() {
        let mut r = ShiftRegister::new();
        r.push(true);
        r.push(false);
        assert_eq!(r.push(true), 3);
        assert_eq!(r.code(), 0b101);
        r.clear();
        assert_eq!(r, ShiftRegister::default());
    }

    #[test]
    fn mailbox_keeps_only_the_latest_code() {
        let mut m = Mailbox::new();
        assert!(m.is_empty());
        m.post(1u16);
        m.post(2u16);
        assert_eq!(m.take(), Some(2));
        assert_eq!(m.take(), None);
    }

    proptest! {
        #[test]
        fn sampler_durations_match_held_samples(runs in proptest::collection::vec(1usize..400, 1..20)) {
            let mut s = EdgeSampler::new();
            let mut level = true;
            // El primer tramo arranca en alto, así que el primer flanco viene del cambio 0 -> 1
            s.sample(true);
            let mut held = 1usize;
            for run in runs {
                for _ in 1..run {
                    prop_assert_eq!(s.sample(level), None);
                }
                held += run - 1;
                let edge = s.sample(!level).unwrap();
                prop_assert_eq!(edge.level, level);
                prop_assert_eq!(edge.duration as usize, held.min(MAX_TICKS as usize));
                level = !level;
                held = 1;
            }
        }
    }
}
