//! # Demos Module
//!
//! The nine walkthrough programs, one platform surface each.

pub mod audio;
pub mod keyboard;
pub mod mouse_position;
pub mod triangle;
pub mod user_storage;
pub mod uv_texture;
pub mod vertex_buffer;
pub mod viewport_projection;
pub mod window;

pub use audio::AudioDemo;
pub use keyboard::KeyboardDemo;
pub use mouse_position::MousePositionDemo;
pub use triangle::TriangleDemo;
pub use user_storage::UserStorageDemo;
pub use uv_texture::UvTextureDemo;
pub use vertex_buffer::VertexBufferDemo;
pub use viewport_projection::ViewportProjectionDemo;
pub use window::WindowDemo;

use crate::app::{run, AppContext};
use crate::config;
use crate::input::InputHandler;
use crate::PrimerResult;
use clap::ValueEnum;
use tracing::info;

/// Selects which walkthrough to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Open a window and clear it every frame
    Window,
    /// Log key presses and releases
    Keyboard,
    /// Draw a triangle through a custom pipeline
    Triangle,
    /// Upload a vertex buffer and draw it
    VertexBuffer,
    /// Draw a textured quad with tiling UVs
    UvTexture,
    /// Rotate a cube with a view-projection matrix
    ViewportProjection,
    /// Play a WAV file
    Audio,
    /// Write and read back a per-user save file
    UserStorage,
    /// Log the mouse position once per second
    MousePosition,
}

impl DemoKind {
    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            DemoKind::ViewportProjection => "Viewport",
            DemoKind::UvTexture => "Texture",
            DemoKind::Audio => "Audio",
            DemoKind::UserStorage => "Storage",
            _ => "Window",
        }
    }

    /// Window size in pixels.
    pub fn window_size(self) -> (i32, i32) {
        match self {
            DemoKind::UvTexture => (config::TEXTURE_WINDOW_SIZE, config::TEXTURE_WINDOW_SIZE),
            DemoKind::ViewportProjection => {
                (config::VIEWPORT_WINDOW_WIDTH, config::VIEWPORT_WINDOW_HEIGHT)
            }
            _ => (config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Options that only some walkthroughs read.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Image under `<base>/images/` for the texture walkthrough
    pub image: Option<String>,
}

/// Initialises the selected walkthrough and runs it to completion.
pub async fn run_demo(kind: DemoKind, ctx: &AppContext, options: &DemoOptions) -> PrimerResult<()> {
    info!("Running {:?} from {}", kind, ctx.base_path.display());
    let input = InputHandler::new();

    match kind {
        DemoKind::Window => run(&mut WindowDemo::init(ctx)?, &input).await,
        DemoKind::Keyboard => run(&mut KeyboardDemo::init(ctx)?, &input).await,
        DemoKind::Triangle => run(&mut TriangleDemo::init(ctx)?, &input).await,
        DemoKind::VertexBuffer => run(&mut VertexBufferDemo::init(ctx)?, &input).await,
        DemoKind::UvTexture => {
            run(&mut UvTextureDemo::init(ctx, options.image.as_deref())?, &input).await
        }
        DemoKind::ViewportProjection => {
            run(&mut ViewportProjectionDemo::init(ctx)?, &input).await
        }
        DemoKind::Audio => run(&mut AudioDemo::init(ctx).await?, &input).await,
        DemoKind::UserStorage => run(&mut UserStorageDemo::init(ctx)?, &input).await,
        DemoKind::MousePosition => run(&mut MousePositionDemo::init(ctx)?, &input).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_sizes() {
        assert_eq!(DemoKind::Window.window_size(), (640, 800));
        assert_eq!(DemoKind::UvTexture.window_size(), (500, 500));
        assert_eq!(DemoKind::ViewportProjection.window_size(), (600, 400));
    }

    #[test]
    fn test_demo_names_parse_from_cli() {
        assert_eq!(
            DemoKind::from_str("viewport-projection", true).unwrap(),
            DemoKind::ViewportProjection
        );
        assert_eq!(
            DemoKind::from_str("user-storage", true).unwrap(),
            DemoKind::UserStorage
        );
        assert!(DemoKind::from_str("teapot", true).is_err());
    }

    #[test]
    fn test_titles() {
        assert_eq!(DemoKind::ViewportProjection.title(), "Viewport");
        assert_eq!(DemoKind::Keyboard.title(), "Window");
    }
}
