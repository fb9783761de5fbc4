use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;

/// Something that can make the Chip-8 beep
pub trait Sound {
    fn set_beeping(&mut self, beeping: bool);
}

/// No sound at all
pub struct Mute;

impl Sound for Mute {
    fn set_beeping(&mut self, _beeping: bool) {}
}

struct SquareWave {
    phase_inc: f32,
    phase: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 { VOLUME } else { -VOLUME };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// A square wave played through the default SDL2 audio device
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    beeping: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
        })?;
        Ok(Beeper {
            device,
            beeping: false,
        })
    }
}

impl Sound for Beeper {
    fn set_beeping(&mut self, beeping: bool) {
        if beeping == self.beeping {
            return;
        }
        if beeping {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.beeping = beeping;
    }
}
