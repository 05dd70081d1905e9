use std::collections::VecDeque;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use input::{
    InputHub, InputMode, ModeError, Pulse, VideoStandard, new_ir_device, parse_capture, replay,
};
use serial::SerialKeyboard;

/// Reproduce una captura del receptor IR y muestra los reportes HID que
/// vería el emulador, frame a frame.
#[derive(Parser, Debug)]
#[command(name = "ir-hid", version)]
struct Args {
    /// Captura de pulsos: una línea `<nivel> <ticks>` por tramo
    capture: Option<PathBuf>,

    /// Fuente de entrada a decodificar. nes y snes necesitan los pines de un
    /// Gpio: desde aquí sólo van los modos IR y serial.
    #[arg(long, value_enum, default_value_t = InputMode::Apple)]
    mode: InputMode,

    /// Norma de vídeo (líneas por frame)
    #[arg(long, value_enum, default_value_t = VideoStandard::Ntsc)]
    standard: VideoStandard,

    /// Frames en reposo al final, para que expiren los botones
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Texto que teclea el teclado serie (modo serial)
    #[arg(long)]
    serial_text: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // 1. Leer la captura (si la hay)
    let mut pulses = match &args.capture {
        Some(path) => {
            log::info!("Cargando captura: {}", path.display());
            parse_capture(&fs::read_to_string(path)?)?
        }
        None => Vec::new(),
    };

    // 2. Conectar la fuente elegida
    let mut hub = InputHub::new();
    attach_mode(&mut hub, args.mode, args.serial_text.as_deref())?;

    // 3. Línea en reposo (alta) al final y a reproducir
    let ticks_per_frame = args.standard.lines_per_frame();
    pulses.push(Pulse::new(true, args.frames.saturating_mul(ticks_per_frame)));
    log::info!("{} pulsos, {} ticks por frame", pulses.len(), ticks_per_frame);

    let reports = replay(&mut hub, &pulses, ticks_per_frame);
    for report in &reports {
        let hex: Vec<String> = report.bytes.iter().map(|b| format!("{:02X}", b)).collect();
        println!("{:6} {}", report.frame, hex.join(" "));
    }
    log::info!("{} reportes", reports.len());
    Ok(())
}

/// Conecta la fuente pedida. Los mandos cableados no tienen Gpio en la
/// línea de comandos y se rechazan.
fn attach_mode(hub: &mut InputHub, mode: InputMode, serial_text: Option<&str>) -> Result<(), ModeError> {
    match mode {
        InputMode::Serial => {
            let source: VecDeque<u8> = serial_text.unwrap_or_default().bytes().collect();
            hub.attach(InputMode::Serial, Box::new(SerialKeyboard::new(source)));
        }
        mode => hub.attach(mode, new_ir_device(mode)?),
    }
    Ok(())
}
