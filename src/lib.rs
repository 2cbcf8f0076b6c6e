//! # Primer
//!
//! Minimal walkthrough programs for a windowing, GPU, audio, input and
//! storage stack, built around a small 3D transform math core.
//!
//! ## Architecture Overview
//!
//! Each walkthrough is self-contained and exercises one platform surface end
//! to end: initialise, perform one operation per frame (or once), tear down.
//!
//! - **Math**: pure vector/matrix functions for a camera's view-projection
//!   transform. No dependency on anything else in the crate.
//! - **App**: the init/event/iterate/quit lifecycle shared by every demo
//! - **Input**: keyboard events and throttled mouse sampling
//! - **Rendering**: vertex layouts, geometry, mesh uploads, shaders, textures
//! - **Audio**: WAV inspection and playback
//! - **Storage**: per-user save files
//! - **Demos**: the nine walkthrough programs
//!
//! Platform work goes through macroquad. Failures are logged and end the
//! program; nothing attempts recovery.

pub mod app;
pub mod audio;
pub mod demos;
pub mod input;
pub mod math;
pub mod rendering;
pub mod storage;

pub use app::*;
pub use audio::*;
pub use demos::*;
pub use input::*;
pub use math::*;
pub use rendering::*;
pub use storage::*;

/// Core error type for the walkthrough programs.
#[derive(thiserror::Error, Debug)]
pub enum PrimerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// WAV file could not be parsed
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Image file could not be decoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Window, GPU or audio backend reported a failure
    #[error("Platform error: {0}")]
    Platform(String),

    /// Mesh, shader or pipeline setup is invalid
    #[error("Render error: {0}")]
    Render(String),

    /// Storage path or storage access is invalid
    #[error("Storage error: {0}")]
    Storage(String),

    /// Program state is invalid
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Primer codebase.
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Version information for the walkthroughs.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Walkthrough configuration constants.
pub mod config {
    /// Window size used by the window, input and storage walkthroughs
    pub const DEFAULT_WINDOW_WIDTH: i32 = 640;

    /// Window height used by the window, input and storage walkthroughs
    pub const DEFAULT_WINDOW_HEIGHT: i32 = 800;

    /// Window size of the textured quad walkthrough
    pub const TEXTURE_WINDOW_SIZE: i32 = 500;

    /// Viewport walkthrough window width
    pub const VIEWPORT_WINDOW_WIDTH: i32 = 600;

    /// Viewport walkthrough window height
    pub const VIEWPORT_WINDOW_HEIGHT: i32 = 400;

    /// Clear color of the plain window walkthroughs (RGBA, 0..255)
    pub const WINDOW_CLEAR_COLOR: [u8; 4] = [255, 50, 50, 255];

    /// Clear color of the textured quad walkthrough
    pub const TEXTURE_CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

    /// Organisation name for per-user storage
    pub const STORAGE_ORG: &str = "com.example";

    /// Application name for per-user storage
    pub const STORAGE_APP: &str = "my-game";

    /// Save file written by the storage walkthrough
    pub const SAVE_FILE_NAME: &str = "save0.sav";

    /// Payload written by the storage walkthrough
    pub const SAVE_PAYLOAD: &str = "<your game data from the user>";

    /// WAV file played by the audio walkthrough, under `<base>/audio/`
    pub const DEFAULT_WAV_FILE: &str = "default.wav";

    /// Desired playback sample rate
    pub const AUDIO_SAMPLE_RATE: u32 = 44100;

    /// Desired playback channel count
    pub const AUDIO_CHANNELS: u16 = 1;

    /// Desired playback bits per sample (signed integer samples)
    pub const AUDIO_BITS_PER_SAMPLE: u16 = 16;

    /// Vertical field of view of the viewport walkthrough, in degrees
    pub const CAMERA_FOV_DEGREES: f32 = 75.0;

    /// Near plane of the viewport walkthrough
    pub const CAMERA_NEAR_PLANE: f32 = 20.0;

    /// Far plane of the viewport walkthrough
    pub const CAMERA_FAR_PLANE: f32 = 60.0;

    /// Camera orbit radius and height
    pub const CAMERA_ORBIT_RADIUS: f32 = 30.0;

    /// Orbit angle added every frame
    pub const CAMERA_TIME_STEP: f32 = 0.1;

    /// Seconds between two mouse position log lines
    pub const MOUSE_LOG_INTERVAL_SECS: f64 = 1.0;
}
