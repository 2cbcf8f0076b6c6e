//! # Vertex Buffer
//!
//! Uploads per-vertex colors and draws them with an interpolating pipeline.

use crate::app::{App, AppContext, AppResult};
use crate::rendering::{triangle, MeshUpload, Pipeline, PipelineDesc};
use crate::PrimerResult;
use macroquad::models::Mesh;
use macroquad::prelude::{clear_background, BLACK};
use tracing::info;

/// Draws a triangle from an uploaded vertex buffer.
pub struct VertexBufferDemo {
    pipeline: Pipeline,
    mesh: Mesh,
}

impl VertexBufferDemo {
    /// Builds the pipeline and uploads the triangle.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        let pipeline = Pipeline::load("position_color.vert", "vertex_color.frag", PipelineDesc::default())?;

        let upload = MeshUpload::new(&triangle(), &[0, 1, 2])?;
        info!("Vertex buffer upload: {} bytes", upload.byte_size());

        Ok(Self {
            pipeline,
            mesh: upload.into_mesh(),
        })
    }
}

impl App for VertexBufferDemo {
    fn name(&self) -> &str {
        "vertex-buffer"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(BLACK);
        self.pipeline.draw(&self.mesh);
        Ok(AppResult::Continue)
    }
}
