//! # Audio Module
//!
//! WAV inspection and one-shot playback through the default output device.

use crate::app::AppContext;
use crate::config;
use crate::{PrimerError, PrimerResult};
use macroquad::audio::{load_sound_from_bytes, play_sound_once, Sound};
use std::io::Cursor;
use tracing::{info, warn};

/// Format of individual samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Signed integer samples of the given bit depth
    Int(u16),
    /// 32-bit float samples
    Float,
}

/// Sample rate, channel count and sample format of an audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub freq: u32,
    pub channels: u16,
    pub format: SampleFormat,
}

impl AudioSpec {
    /// The playback format the walkthrough asks for: 44.1 kHz, mono, s16.
    pub const fn desired() -> Self {
        Self {
            freq: config::AUDIO_SAMPLE_RATE,
            channels: config::AUDIO_CHANNELS,
            format: SampleFormat::Int(config::AUDIO_BITS_PER_SAMPLE),
        }
    }
}

/// Header information of a WAV file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavInfo {
    pub spec: AudioSpec,
    /// Samples per channel
    pub frames: u32,
}

impl WavInfo {
    /// Reads the header of an in-memory WAV file.
    pub fn from_bytes(bytes: &[u8]) -> PrimerResult<Self> {
        let reader = hound::WavReader::new(Cursor::new(bytes))?;
        let spec = reader.spec();

        let format = match spec.sample_format {
            hound::SampleFormat::Int => SampleFormat::Int(spec.bits_per_sample),
            hound::SampleFormat::Float => SampleFormat::Float,
        };

        Ok(Self {
            spec: AudioSpec {
                freq: spec.sample_rate,
                channels: spec.channels,
                format,
            },
            frames: reader.duration(),
        })
    }

    /// Play time in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.frames as f32 / self.spec.freq as f32
    }

    /// True when the file already matches `desired` and needs no conversion.
    pub fn matches(&self, desired: &AudioSpec) -> bool {
        self.spec == *desired
    }
}

/// A decoded WAV file ready to play.
pub struct AudioPlayer {
    info: WavInfo,
    sound: Sound,
}

impl AudioPlayer {
    /// Name of the only playback device the backend exposes.
    pub const DEFAULT_DEVICE: &'static str = "default playback device";

    /// Loads and decodes `<base>/audio/<filename>`.
    pub async fn load(ctx: &AppContext, filename: &str) -> PrimerResult<Self> {
        let path = ctx.locate_asset("audio", filename);
        let bytes = std::fs::read(&path)?;
        let info = WavInfo::from_bytes(&bytes)?;

        info!(
            "Loaded {}: {} Hz, {} channel(s), {:?}, {:.2}s",
            path.display(),
            info.spec.freq,
            info.spec.channels,
            info.spec.format,
            info.duration_secs()
        );

        let desired = AudioSpec::desired();
        if !info.matches(&desired) {
            warn!(
                "{} differs from the desired {:?}, the backend will convert it",
                path.display(),
                desired
            );
        }

        let sound = load_sound_from_bytes(&bytes).await.map_err(|e| {
            PrimerError::Platform(format!("Failed to decode {}: {}", path.display(), e))
        })?;

        Ok(Self { info, sound })
    }

    /// Header information of the loaded file.
    pub fn info(&self) -> &WavInfo {
        &self.info
    }

    /// Starts playing the sound once.
    pub fn play(&self) {
        play_sound_once(&self.sound);
    }
}
