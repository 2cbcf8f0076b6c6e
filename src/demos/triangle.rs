//! # Triangle
//!
//! Draws one triangle through a custom pipeline with a fill color uniform.

use crate::app::{App, AppContext, AppResult};
use crate::rendering::{triangle, MeshUpload, Pipeline, PipelineDesc};
use crate::PrimerResult;
use macroquad::miniquad::UniformType;
use macroquad::models::Mesh;
use macroquad::prelude::{clear_background, BLACK};
use macroquad::math::Vec4;

const FILL_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];

/// Fills a triangle with a solid color.
pub struct TriangleDemo {
    pipeline: Pipeline,
    mesh: Mesh,
}

impl TriangleDemo {
    /// Builds the fill pipeline and the triangle mesh.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        let pipeline = Pipeline::load(
            "raw_triangle.vert",
            "solid_color.frag",
            PipelineDesc::default().uniform("FillColor", UniformType::Float4),
        )?;
        let mesh = MeshUpload::new(&triangle(), &[0, 1, 2])?.into_mesh();

        Ok(Self { pipeline, mesh })
    }
}

impl App for TriangleDemo {
    fn name(&self) -> &str {
        "triangle"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(BLACK);
        self.pipeline.set_uniform("FillColor", Vec4::from_array(FILL_COLOR));
        self.pipeline.draw(&self.mesh);
        Ok(AppResult::Continue)
    }
}
