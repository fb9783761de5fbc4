use std::error::Error;
use std::time::{Duration, Instant};

use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use dip_core::{Chip8, Step};
use dip_display::{Display, Rgb};

use crate::audio::{Beeper, Mute, Sound};
use crate::cadence::Cadence;
use crate::keymap::keymap;

/// How much faster the CPU runs while fast forward is held
const FAST_FORWARD: u32 = 8;

/// How the driver runs a machine
pub struct Settings {
    pub clock_hz: u32,
    pub timer_hz: u32,
    pub scale: u32,
    /// Colors of lit and unlit pixels
    pub palette: (Rgb, Rgb),
    pub mute: bool,
}

/// Runs `chip8` in a window until it is closed or the machine hits a fatal error.
///
/// Steps and timer ticks are scheduled independently: steps at `clock_hz` and ticks at
/// `timer_hz`, each from the wall-clock time elapsed since the last frame.
pub fn run(mut chip8: Chip8, settings: &Settings) -> Result<(), Box<dyn Error>> {
    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, "Dip", settings.scale)?;
    let (on, off) = settings.palette;
    display.set_palette(on, off);
    let mut events = sdl.event_pump()?;
    let mut sound: Box<dyn Sound> = if settings.mute {
        Box::new(Mute)
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Box::new(beeper),
            Err(e) => {
                warn!("no audio ({}); continuing muted", e);
                Box::new(Mute)
            }
        }
    };

    let mut cpu = Cadence::new(settings.clock_hz);
    let mut fast_cpu = Cadence::new(settings.clock_hz.saturating_mul(FAST_FORWARD));
    let mut timers = Cadence::new(settings.timer_hz);
    let mut last_frame = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc)?,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc)?,
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        let elapsed = now - last_frame;
        last_frame = now;

        let steps = if fast_forward {
            fast_cpu.due(elapsed)
        } else {
            cpu.due(elapsed)
        };
        for _ in 0..steps {
            match chip8.step()? {
                Step::Skipped { opcode, pc } => {
                    warn!("skipped unknown opcode {:04X} at {:#05X}", opcode, pc)
                }
                Step::AwaitingKey => break,
                Step::Executed(_) => {}
            }
        }
        for _ in 0..timers.due(elapsed) {
            chip8.tick();
        }
        sound.set_beeping(chip8.sound_active());

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    sound.set_beeping(false);
    info!("Exiting...");
    Ok(())
}
