use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, LevelFilter};

use dip_core::{Chip8, Config, LogTracer, Quirks, UnknownOpcodePolicy, CLOCK_SPEED, TIMER_SPEED};
use dip_display::{Rgb, AMBER, BLACK, PHOSPHOR_GREEN, WHITE};

mod audio;
mod cadence;
mod keymap;
mod run;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OnUnknownOpcode {
    Halt,
    Skip,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Palette {
    Green,
    Amber,
    White,
}

impl Palette {
    /// Colors of lit and unlit pixels
    fn colors(self) -> (Rgb, Rgb) {
        match self {
            Palette::Green => (PHOSPHOR_GREEN, BLACK),
            Palette::Amber => (AMBER, BLACK),
            Palette::White => (WHITE, BLACK),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dip", about = "Run a Chip-8 ROM in a window.")]
struct Args {
    /// ROM image to load at 0x200.
    #[arg(short, long, value_name = "PATH")]
    rom: PathBuf,

    /// Instructions executed per second.
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    clock_hz: u32,

    /// Delay and sound timer decrements per second.
    #[arg(long, default_value_t = TIMER_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    timer_hz: u32,

    /// Window pixels per Chip-8 pixel.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Color of lit pixels.
    #[arg(long, value_enum, default_value_t = Palette::Green)]
    palette: Palette,

    /// What to do with an opcode that doesn't decode.
    #[arg(long, value_enum, default_value_t = OnUnknownOpcode::Halt)]
    on_unknown_opcode: OnUnknownOpcode,

    /// SHR/SHL shift Vy into Vx.
    #[arg(long)]
    shift_quirk: bool,

    /// LD [I], Vx and LD Vx, [I] advance I.
    #[arg(long)]
    load_store_quirk: bool,

    /// Seed for RND.
    #[arg(long)]
    seed: Option<u64>,

    /// Don't beep.
    #[arg(long)]
    mute: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            on_unknown_opcode: match self.on_unknown_opcode {
                OnUnknownOpcode::Halt => UnknownOpcodePolicy::Halt,
                OnUnknownOpcode::Skip => UnknownOpcodePolicy::Skip,
            },
            quirks: Quirks {
                shift_uses_vy: self.shift_quirk,
                load_store_increments_i: self.load_store_quirk,
            },
            seed: self.seed,
        }
    }

    fn settings(&self) -> run::Settings {
        run::Settings {
            clock_hz: self.clock_hz,
            timer_hz: self.timer_hz,
            scale: self.scale,
            palette: self.palette.colors(),
            mute: self.mute,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // RUST_LOG=info shows lifecycle messages; --trace turns on the per-instruction log
    let mut logger = env_logger::Builder::from_default_env();
    if args.trace {
        logger.filter_module("dip_core::trace", LevelFilter::Trace);
    }
    logger.init();

    let mut chip8 = Chip8::with_config(args.config());
    if args.trace {
        chip8.set_tracer(Box::new(LogTracer));
    }

    // Load ROM
    info!("ROM location: {}", args.rom.display());
    let file = File::open(&args.rom)
        .map_err(|e| format!("unable to open {}: {}", args.rom.display(), e))?;
    let size = chip8.load_rom(&mut BufReader::new(file))?;
    info!("ROM size: {}", size);

    if let Err(e) = run::run(chip8, &args.settings()) {
        error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
