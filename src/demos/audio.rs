//! # Audio
//!
//! Loads `audio/default.wav` and plays it once on the default device.

use crate::app::{App, AppContext, AppResult};
use crate::audio::AudioPlayer;
use crate::config;
use crate::PrimerResult;
use macroquad::prelude::{clear_background, BLACK};
use tracing::info;

/// Plays a WAV file.
pub struct AudioDemo {
    player: AudioPlayer,
}

impl AudioDemo {
    /// Loads the sound and starts playback.
    pub async fn init(ctx: &AppContext) -> PrimerResult<Self> {
        info!("AudioDevice {}", AudioPlayer::DEFAULT_DEVICE);

        let player = AudioPlayer::load(ctx, config::DEFAULT_WAV_FILE).await?;
        player.play();
        info!("Playing {:.2}s of audio", player.info().duration_secs());

        Ok(Self { player })
    }
}

impl App for AudioDemo {
    fn name(&self) -> &str {
        "audio"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(BLACK);
        Ok(AppResult::Continue)
    }

    fn quit(&mut self, result: AppResult) {
        info!(
            "audio finished with {:?} ({} frames queued)",
            result,
            self.player.info().frames
        );
    }
}
