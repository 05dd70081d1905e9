// input/src/capture.rs

//! Capturas de texto del receptor IR y su reproducción.
//!
//! Una línea por pulso: `<nivel> <ticks>`, nivel `0`/`1` o `L`/`H`.
//! `#` empieza un comentario; las líneas vacías se saltan.

use hid::MAX_REPORT_LEN;
use thiserror::Error;

use crate::InputHub;

/// Un tramo de la señal: `ticks` muestras seguidas en `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub level: bool,
    pub ticks: u32,
}

impl Pulse {
    pub fn new(level: bool, ticks: u32) -> Self {
        Self { level, ticks }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("línea {line}: nivel inválido '{found}'")]
    BadLevel { line: usize, found: String },
    #[error("línea {line}: duración inválida '{found}'")]
    BadTicks { line: usize, found: String },
    #[error("línea {line}: falta la duración")]
    MissingTicks { line: usize },
    #[error("línea {line}: sobra '{found}'")]
    Trailing { line: usize, found: String },
}

pub fn parse_capture(text: &str) -> Result<Vec<Pulse>, CaptureError> {
    let mut pulses = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let body = raw.split('#').next().unwrap_or("");
        let mut fields = body.split_whitespace();

        let Some(level) = fields.next() else {
            continue;
        };
        let level = match level {
            "0" | "L" | "l" => false,
            "1" | "H" | "h" => true,
            other => return Err(CaptureError::BadLevel { line, found: other.to_string() }),
        };

        let ticks = fields.next().ok_or(CaptureError::MissingTicks { line })?;
        let ticks = ticks
            .parse::<u32>()
            .map_err(|_| CaptureError::BadTicks { line, found: ticks.to_string() })?;

        if let Some(extra) = fields.next() {
            return Err(CaptureError::Trailing { line, found: extra.to_string() });
        }
        pulses.push(Pulse::new(level, ticks));
    }

    Ok(pulses)
}

/// Norma de vídeo: define cuántas líneas (ticks) hay por frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VideoStandard {
    Pal,
    #[default]
    Ntsc,
}

impl VideoStandard {
    pub fn lines_per_frame(self) -> u32 {
        match self {
            VideoStandard::Pal => 312,
            VideoStandard::Ntsc => 262,
        }
    }
}

/// Reporte emitido en un frame concreto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u32,
    pub bytes: Vec<u8>,
}

/// Pasa la captura por el multiplexor tick a tick y hace un poll cada
/// `ticks_per_frame` ticks. Devuelve sólo los frames con reporte.
pub fn replay(hub: &mut InputHub, pulses: &[Pulse], ticks_per_frame: u32) -> Vec<FrameReport> {
    let ticks_per_frame = ticks_per_frame.max(1);
    let mut reports = Vec::new();
    let mut dst = [0u8; MAX_REPORT_LEN];
    let mut tick = 0u32;
    let mut frame = 0u32;

    for pulse in pulses {
        for _ in 0..pulse.ticks {
            hub.tick(pulse.level);
            tick += 1;
            if tick == ticks_per_frame {
                tick = 0;
                let n = hub.poll(&mut dst);
                if n != 0 {
                    reports.push(FrameReport { frame, bytes: dst[..n].to_vec() });
                }
                frame += 1;
            }
        }
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_comments_and_blank_lines() {
        let text = "# captura\n\nH 50\n0 36   # preámbulo\n  1 13\nl 4\n";
        let pulses = parse_capture(text).unwrap();
        assert_eq!(
            pulses,
            vec![
                Pulse::new(true, 50),
                Pulse::new(false, 36),
                Pulse::new(true, 13),
                Pulse::new(false, 4),
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_capture("1 10\nX 3\n"),
            Err(CaptureError::BadLevel { line: 2, found: "X".into() })
        );
        assert_eq!(
            parse_capture("1 10\n\n0 -4\n"),
            Err(CaptureError::BadTicks { line: 3, found: "-4".into() })
        );
        assert_eq!(parse_capture("0\n"), Err(CaptureError::MissingTicks { line: 1 }));
        assert_eq!(
            parse_capture("0 1 2\n"),
            Err(CaptureError::Trailing { line: 1, found: "2".into() })
        );
    }

    #[test]
    fn lines_per_frame() {
        assert_eq!(VideoStandard::Pal.lines_per_frame(), 312);
        assert_eq!(VideoStandard::Ntsc.lines_per_frame(), 262);
    }

    #[test]
    fn empty_hub_replays_silently() {
        let mut hub = InputHub::new();
        let reports = replay(&mut hub, &[Pulse::new(true, 10_000)], 262);
        assert!(reports.is_empty());
    }
}
