// input/src/lib.rs

//! Multiplexor de reportes HID.
//!
//! El emulador llama a `InputHub::poll` una vez por frame; el muestreador se
//! alimenta con `tick` una vez por línea. Cada fuente conectada recibe los
//! flancos y, en el poll, gana la primera (por prioridad) que tenga reporte.

mod capture;

pub use capture::{CaptureError, FrameReport, Pulse, VideoStandard, parse_capture, replay};

use std::fmt;
use std::str::FromStr;

use edge::EdgeSampler;
use hid::{InputDevice, ReportBuffer};
use thiserror::Error;

use flashback::FlashbackPad;
use k8561::K8561Keyboard;
use nec::AppleRemote;
use retcon::RetconPad;
use webtv::WebTvKeyboard;
use wired::{Gpio, PadKind, WiredPads, WiredPins};

/// Fuentes de entrada, ya en orden de prioridad del multiplexor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum InputMode {
    /// Mando Apple (NEC)
    Apple,
    Flashback,
    Retcon,
    Nes,
    Snes,
    #[value(name = "webtv")]
    WebTv,
    Serial,
    K8561,
}

impl InputMode {
    pub const ALL: [InputMode; 8] = [
        InputMode::Apple,
        InputMode::Flashback,
        InputMode::Retcon,
        InputMode::Nes,
        InputMode::Snes,
        InputMode::WebTv,
        InputMode::Serial,
        InputMode::K8561,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputMode::Apple => "apple",
            InputMode::Flashback => "flashback",
            InputMode::Retcon => "retcon",
            InputMode::Nes => "nes",
            InputMode::Snes => "snes",
            InputMode::WebTv => "webtv",
            InputMode::Serial => "serial",
            InputMode::K8561 => "k8561",
        }
    }

    /// `true` si la fuente decodifica pulsos del receptor IR
    pub fn is_ir(self) -> bool {
        matches!(
            self,
            InputMode::Apple
                | InputMode::Flashback
                | InputMode::Retcon
                | InputMode::WebTv
                | InputMode::K8561
        )
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        InputMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModeError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("modo de entrada desconocido: '{0}'")]
    Unknown(String),
    #[error("el modo {0} no es IR: necesita su propio hardware")]
    NotIr(InputMode),
    #[error("el modo {0} no es un mando cableado")]
    NotWired(InputMode),
}

/// Crea la fuente IR de un modo. Los mandos cableados y el teclado serie se
/// construyen a mano porque necesitan sus pines o su flujo de bytes.
pub fn new_ir_device(mode: InputMode) -> Result<Box<dyn InputDevice>, ModeError> {
    let device: Box<dyn InputDevice> = match mode {
        InputMode::Apple => Box::new(AppleRemote::new()),
        InputMode::Flashback => Box::new(FlashbackPad::new()),
        InputMode::Retcon => Box::new(RetconPad::new()),
        InputMode::WebTv => Box::new(WebTvKeyboard::new()),
        InputMode::K8561 => Box::new(K8561Keyboard::new()),
        InputMode::Nes | InputMode::Snes | InputMode::Serial => {
            return Err(ModeError::NotIr(mode));
        }
    };
    Ok(device)
}

/// Crea los mandos cableados (NES o SNES) sobre los pines dados.
pub fn new_wired_device<G: Gpio + 'static>(
    mode: InputMode,
    gpio: G,
    pins: WiredPins,
) -> Result<Box<dyn InputDevice>, ModeError> {
    let kind = match mode {
        InputMode::Nes => PadKind::Nes,
        InputMode::Snes => PadKind::Snes,
        _ => return Err(ModeError::NotWired(mode)),
    };
    Ok(Box::new(WiredPads::new(gpio, pins, kind)))
}

// =========================================================================
//  MULTIPLEXOR
// =========================================================================

#[derive(Default)]
pub struct InputHub {
    sampler: EdgeSampler,
    devices: Vec<(InputMode, Box<dyn InputDevice>)>, // Ordenado por prioridad
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conecta una fuente. Con el mismo modo, la que llegó antes va primero.
    pub fn attach(&mut self, mode: InputMode, device: Box<dyn InputDevice>) {
        let at = self.devices.partition_point(|(m, _)| *m <= mode);
        self.devices.insert(at, (mode, device));
        log::info!("entrada conectada: {}", mode);
    }

    pub fn modes(&self) -> impl Iterator<Item = InputMode> + '_ {
        self.devices.iter().map(|(m, _)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Una muestra del pin IR (contexto de interrupción).
    pub fn tick(&mut self, level: bool) {
        if let Some(edge) = self.sampler.sample(level) {
            for (_, device) in self.devices.iter_mut() {
                device.on_edge(edge);
            }
        }
    }

    /// Una vez por frame. Devuelve la longitud del primer reporte no vacío,
    /// o 0 sin tocar `dst`.
    pub fn poll(&mut self, dst: &mut ReportBuffer) -> usize {
        for (mode, device) in self.devices.iter_mut() {
            let n = device.poll_report(dst);
            if n != 0 {
                log::trace!("{} -> {:02X?}", mode, &dst[..n]);
                return n;
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in InputMode::ALL {
            assert_eq!(mode.to_string().parse::<InputMode>(), Ok(mode));
        }
        assert_eq!(" WebTV ".parse::<InputMode>(), Ok(InputMode::WebTv));
        assert_eq!(
            "sega".parse::<InputMode>(),
            Err(ModeError::Unknown("sega".to_string()))
        );
    }

    #[test]
    fn priority_follows_declaration_order() {
        let mut sorted = InputMode::ALL;
        sorted.sort();
        assert_eq!(sorted, InputMode::ALL);
        assert!(InputMode::Apple < InputMode::K8561);
    }

    #[test]
    fn factory_only_builds_ir_modes() {
        for mode in InputMode::ALL {
            assert_eq!(new_ir_device(mode).is_ok(), mode.is_ir(), "{mode}");
        }
        assert_eq!(new_ir_device(InputMode::Nes).err(), Some(ModeError::NotIr(InputMode::Nes)));
    }

    #[test]
    fn attach_keeps_priority_order() {
        let mut hub = InputHub::new();
        assert!(hub.is_empty());
        for mode in [InputMode::K8561, InputMode::Retcon, InputMode::Apple] {
            if let Ok(dev) = new_ir_device(mode) {
                hub.attach(mode, dev);
            }
        }
        let modes: Vec<_> = hub.modes().collect();
        assert_eq!(modes, vec![InputMode::Apple, InputMode::Retcon, InputMode::K8561]);
        assert!(!hub.is_empty());
    }
}
