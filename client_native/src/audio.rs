//! Sound effects via rodio. Every failure path degrades to silence: no
//! output device means the whole bank is absent, a missing or undecodable
//! wav file silences just that effect, and a disabled bank ignores play
//! requests entirely.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Directories probed for wav files, relative to the working directory
const SOUND_DIRS: [&str; 2] = ["sounds", "../sounds"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    PaddleHit,
    WallBounce,
    Score,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::PaddleHit,
        SoundEffect::WallBounce,
        SoundEffect::Score,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "paddle_hit.wav",
            SoundEffect::WallBounce => "wall_bounce.wav",
            SoundEffect::Score => "score.wav",
        }
    }

    pub fn volume(self) -> f32 {
        match self {
            SoundEffect::PaddleHit => 0.5,
            SoundEffect::WallBounce => 0.3,
            SoundEffect::Score => 0.6,
        }
    }

    fn index(self) -> usize {
        match self {
            SoundEffect::PaddleHit => 0,
            SoundEffect::WallBounce => 1,
            SoundEffect::Score => 2,
        }
    }
}

pub struct SoundBank {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    enabled: bool,
    clips: [Option<Vec<u8>>; 3],
}

impl SoundBank {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;

        let clips = SoundEffect::ALL.map(load_clip);
        let loaded = clips.iter().filter(|clip| clip.is_some()).count();
        if loaded == 0 {
            println!("No sound files found; running silently");
        }

        Ok(Self {
            _stream: stream,
            handle,
            enabled: true,
            clips,
        })
    }

    /// Fire-and-forget playback; does nothing when disabled or the effect
    /// failed to load
    pub fn play(&self, effect: SoundEffect) {
        if !self.enabled {
            return;
        }
        let Some(bytes) = &self.clips[effect.index()] else {
            return;
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) else {
            return;
        };
        sink.set_volume(effect.volume());
        sink.append(source);
        sink.detach();
    }

    /// Flip sounds on/off; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Read a clip into memory, verifying up front that it decodes
fn load_clip(effect: SoundEffect) -> Option<Vec<u8>> {
    for dir in SOUND_DIRS {
        let path = Path::new(dir).join(effect.file_name());
        if let Ok(bytes) = fs::read(&path) {
            if Decoder::new(Cursor::new(bytes.clone())).is_ok() {
                return Some(bytes);
            }
            println!("Could not decode {}", path.display());
        }
    }
    None
}
