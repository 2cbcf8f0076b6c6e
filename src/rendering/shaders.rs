//! # Shaders and Pipelines
//!
//! GLSL sources shipped in `shaders/` and the materials built from them.

use crate::math::Matrix4x4;
use crate::{PrimerError, PrimerResult};
use macroquad::material::{gl_use_default_material, gl_use_material, load_material, Material, MaterialParams};
use macroquad::math::Mat4;
use macroquad::miniquad::{Comparison, PipelineParams, ShaderSource, UniformDesc, UniformType};
use macroquad::models::{draw_mesh, Mesh};
use tracing::{debug, info};

/// Pipeline stage a shader runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Classifies a shader by its file name: `.vert` or `.frag`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primer::ShaderStage;
    ///
    /// assert_eq!(ShaderStage::from_filename("raw_triangle.vert").unwrap(), ShaderStage::Vertex);
    /// assert!(ShaderStage::from_filename("notes.txt").is_err());
    /// ```
    pub fn from_filename(filename: &str) -> PrimerResult<Self> {
        if filename.contains(".vert") {
            Ok(ShaderStage::Vertex)
        } else if filename.contains(".frag") {
            Ok(ShaderStage::Fragment)
        } else {
            Err(PrimerError::Render(format!(
                "Invalid shader stage for {}",
                filename
            )))
        }
    }
}

const SHADERS: &[(&str, &str)] = &[
    ("raw_triangle.vert", include_str!("../../shaders/raw_triangle.vert")),
    ("solid_color.frag", include_str!("../../shaders/solid_color.frag")),
    ("position_color.vert", include_str!("../../shaders/position_color.vert")),
    ("vertex_color.frag", include_str!("../../shaders/vertex_color.frag")),
    ("textured_quad.vert", include_str!("../../shaders/textured_quad.vert")),
    ("textured_quad.frag", include_str!("../../shaders/textured_quad.frag")),
    (
        "position_color_transform.vert",
        include_str!("../../shaders/position_color_transform.vert"),
    ),
    ("depth_color.frag", include_str!("../../shaders/depth_color.frag")),
];

/// Lookup of the embedded shader sources.
pub struct ShaderLibrary;

impl ShaderLibrary {
    /// Source of the shader called `filename`.
    pub fn source(filename: &str) -> PrimerResult<&'static str> {
        SHADERS
            .iter()
            .find(|(name, _)| *name == filename)
            .map(|(_, source)| *source)
            .ok_or_else(|| PrimerError::Render(format!("Unknown shader {}", filename)))
    }

    /// Names of every embedded shader.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SHADERS.iter().map(|(name, _)| *name)
    }
}

/// Uniforms and fixed-function state of a pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineDesc {
    /// Uniform names and types, in declaration order
    pub uniforms: Vec<(String, UniformType)>,
    /// Whether to depth-test and depth-write
    pub depth_test: bool,
}

impl PipelineDesc {
    /// Adds a uniform.
    pub fn uniform(mut self, name: &str, ty: UniformType) -> Self {
        self.uniforms.push((name.to_string(), ty));
        self
    }

    /// Turns depth testing on.
    pub fn with_depth_test(mut self) -> Self {
        self.depth_test = true;
        self
    }

    fn pipeline_params(&self) -> PipelineParams {
        if self.depth_test {
            PipelineParams {
                depth_test: Comparison::LessOrEqual,
                depth_write: true,
                ..Default::default()
            }
        } else {
            PipelineParams::default()
        }
    }
}

/// A compiled vertex/fragment pair with its uniform layout.
pub struct Pipeline {
    material: Material,
}

impl Pipeline {
    /// Builds a pipeline from two embedded shaders.
    ///
    /// The first name must be a vertex shader and the second a fragment
    /// shader.
    pub fn load(vertex_shader: &str, fragment_shader: &str, desc: PipelineDesc) -> PrimerResult<Self> {
        check_stage(vertex_shader, ShaderStage::Vertex)?;
        check_stage(fragment_shader, ShaderStage::Fragment)?;

        let vertex = ShaderLibrary::source(vertex_shader)?;
        let fragment = ShaderLibrary::source(fragment_shader)?;

        let material = load_material(
            ShaderSource::Glsl { vertex, fragment },
            MaterialParams {
                pipeline_params: desc.pipeline_params(),
                uniforms: desc
                    .uniforms
                    .iter()
                    .map(|(name, ty)| UniformDesc::new(name, *ty))
                    .collect(),
                ..Default::default()
            },
        )
        .map_err(|e| {
            PrimerError::Platform(format!(
                "Failed to create pipeline {}/{}: {}",
                vertex_shader, fragment_shader, e
            ))
        })?;

        info!("Created pipeline {} + {}", vertex_shader, fragment_shader);
        Ok(Self { material })
    }

    /// Uploads a matrix in the row-vector layout the shaders expect.
    pub fn set_matrix(&self, name: &str, matrix: Matrix4x4) {
        self.material.set_uniform(name, Mat4::from(matrix));
    }

    /// Uploads any other uniform value.
    pub fn set_uniform<T>(&self, name: &str, value: T) {
        self.material.set_uniform(name, value);
    }

    /// Draws `mesh` with this pipeline bound.
    pub fn draw(&self, mesh: &Mesh) {
        gl_use_material(&self.material);
        draw_mesh(mesh);
        gl_use_default_material();
    }
}

fn check_stage(filename: &str, expected: ShaderStage) -> PrimerResult<()> {
    let stage = ShaderStage::from_filename(filename)?;
    if stage != expected {
        return Err(PrimerError::Render(format!(
            "{} is a {:?} shader, expected {:?}",
            filename, stage, expected
        )));
    }
    debug!("{} is a {:?} shader", filename, stage);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_from_filename() {
        assert_eq!(
            ShaderStage::from_filename("depth_color.frag").unwrap(),
            ShaderStage::Fragment
        );
        assert_eq!(
            ShaderStage::from_filename("PositionColorTransform.vert.spv").unwrap(),
            ShaderStage::Vertex
        );
        assert!(matches!(
            ShaderStage::from_filename("shader.glsl"),
            Err(PrimerError::Render(_))
        ));
    }

    #[test]
    fn test_every_embedded_shader_has_a_stage() {
        for name in ShaderLibrary::names() {
            assert!(ShaderStage::from_filename(name).is_ok(), "{}", name);
            assert!(ShaderLibrary::source(name).unwrap().starts_with("#version 100"));
        }
    }

    #[test]
    fn test_unknown_shader() {
        assert!(ShaderLibrary::source("missing.vert").is_err());
    }

    #[test]
    fn test_stage_mismatch_is_rejected() {
        assert!(check_stage("vertex_color.frag", ShaderStage::Vertex).is_err());
        assert!(check_stage("position_color.vert", ShaderStage::Vertex).is_ok());
    }

    #[test]
    fn test_transform_shader_declares_view_projection() {
        let source = ShaderLibrary::source("position_color_transform.vert").unwrap();
        assert!(source.contains("uniform mat4 ViewProj"));
        assert!(source.contains("ViewProj * vec4(position, 1.0)"));
    }

    #[test]
    fn test_pipeline_desc_builder() {
        let desc = PipelineDesc::default()
            .uniform("ViewProj", UniformType::Mat4)
            .uniform("NearFar", UniformType::Float2)
            .with_depth_test();
        assert_eq!(desc.uniforms.len(), 2);
        assert_eq!(desc.uniforms[0].0, "ViewProj");
        assert!(desc.depth_test);
    }
}
