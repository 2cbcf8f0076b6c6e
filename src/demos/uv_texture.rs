//! # UV Texture
//!
//! Draws a quad whose texture coordinates tile a texture four times.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::rendering::{
    checkerboard, color_from_floats, load_image, quad_indices, textured_quad, MeshUpload,
    Pipeline, PipelineDesc,
};
use crate::PrimerResult;
use macroquad::models::Mesh;
use macroquad::prelude::{clear_background, Color, FilterMode, Image, Texture2D, DARKGRAY, WHITE};
use tracing::info;

/// Size of the generated texture in pixels.
const CHECKER_SIZE: u16 = 64;

/// Draws a textured quad.
pub struct UvTextureDemo {
    pipeline: Pipeline,
    mesh: Mesh,
    clear_color: Color,
}

impl UvTextureDemo {
    /// Loads the texture (from `images/<image>` or generated) and uploads
    /// the quad.
    pub fn init(ctx: &AppContext, image: Option<&str>) -> PrimerResult<Self> {
        let image: Image = match image {
            Some(filename) => load_image(ctx, filename)?,
            None => {
                info!("No image given, generating a checkerboard");
                checkerboard(CHECKER_SIZE, CHECKER_SIZE, CHECKER_SIZE / 8, WHITE, DARKGRAY)
            }
        };

        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Linear);

        let pipeline = Pipeline::load("textured_quad.vert", "textured_quad.frag", PipelineDesc::default())?;
        let mesh = MeshUpload::new(&textured_quad(), &quad_indices())?
            .with_texture(texture)
            .into_mesh();

        Ok(Self {
            pipeline,
            mesh,
            clear_color: color_from_floats(config::TEXTURE_CLEAR_COLOR),
        })
    }
}

impl App for UvTextureDemo {
    fn name(&self) -> &str {
        "uv-texture"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(self.clear_color);
        self.pipeline.draw(&self.mesh);
        Ok(AppResult::Continue)
    }
}
