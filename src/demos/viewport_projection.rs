//! # Viewport Projection
//!
//! Spins a camera around a cube and draws it through a view-projection
//! matrix built by the math module.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::math::{degrees_to_radians, Matrix4x4, Vector3};
use crate::rendering::{cube_indices, cube_vertices, MeshUpload, Pipeline, PipelineDesc};
use crate::PrimerResult;
use macroquad::math::Vec2;
use macroquad::miniquad::UniformType;
use macroquad::models::Mesh;
use macroquad::prelude::{clear_background, BLACK};
use tracing::info;

/// Camera circling the origin at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    pub up: Vector3,
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: config::CAMERA_ORBIT_RADIUS,
            height: config::CAMERA_ORBIT_RADIUS,
            up: Vector3::new(0.0, 2.0, 0.0),
            fov_degrees: config::CAMERA_FOV_DEGREES,
            aspect_ratio: config::VIEWPORT_WINDOW_WIDTH as f32 / config::VIEWPORT_WINDOW_HEIGHT as f32,
            near_plane: config::CAMERA_NEAR_PLANE,
            far_plane: config::CAMERA_FAR_PLANE,
        }
    }
}

impl OrbitCamera {
    /// Projection matrix; depends only on the lens, so build it once.
    pub fn projection(&self) -> Matrix4x4 {
        Matrix4x4::perspective_field_of_view(
            degrees_to_radians(self.fov_degrees),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    /// Camera position at orbit angle `time`.
    pub fn position(&self, time: f32) -> Vector3 {
        Vector3::new(time.cos() * self.radius, self.height, time.sin() * self.radius)
    }

    /// View matrix looking at the origin from [`OrbitCamera::position`].
    pub fn view(&self, time: f32) -> Matrix4x4 {
        Matrix4x4::look_at(self.position(time), Vector3::ZERO, self.up)
    }
}

/// Rotating cube walkthrough.
pub struct ViewportProjectionDemo {
    pipeline: Pipeline,
    mesh: Mesh,
    camera: OrbitCamera,
    projection: Matrix4x4,
    time: f32,
}

impl ViewportProjectionDemo {
    /// Builds the pipeline, uploads the cube and fixes the projection.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        let pipeline = Pipeline::load(
            "position_color_transform.vert",
            "depth_color.frag",
            PipelineDesc::default()
                .uniform("ViewProj", UniformType::Mat4)
                .uniform("NearFar", UniformType::Float2)
                .with_depth_test(),
        )?;

        let upload = MeshUpload::new(&cube_vertices(), &cube_indices())?;
        info!("Cube upload: {} bytes", upload.byte_size());

        let camera = OrbitCamera::default();
        Ok(Self {
            pipeline,
            mesh: upload.into_mesh(),
            projection: camera.projection(),
            camera,
            time: 0.0,
        })
    }
}

impl App for ViewportProjectionDemo {
    fn name(&self) -> &str {
        "viewport-projection"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        self.time += config::CAMERA_TIME_STEP;

        let view = self.camera.view(self.time);
        let view_proj = Matrix4x4::multiply(&view, &self.projection);

        clear_background(BLACK);
        self.pipeline.set_matrix("ViewProj", view_proj);
        self.pipeline.set_uniform(
            "NearFar",
            Vec2::new(self.camera.near_plane, self.camera.far_plane),
        );
        self.pipeline.draw(&self.mesh);

        Ok(AppResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::CUBE_HALF_SIZE;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_orbit_positions() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.position(0.0), Vector3::new(30.0, 30.0, 0.0));

        let quarter = camera.position(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(quarter.z, 30.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cube_stays_inside_the_frustum() {
        let camera = OrbitCamera::default();
        let projection = camera.projection();

        for step in 0..64 {
            let time = step as f32 * config::CAMERA_TIME_STEP;
            let view_proj = Matrix4x4::multiply(&camera.view(time), &projection);

            for corner in cube_vertices().iter().map(|v| Vector3::new(v.x, v.y, v.z)) {
                let clip = view_proj.transform_point(corner);
                let w = clip[3];
                assert!(w > 0.0);
                assert!(clip[0].abs() <= w, "x outside at time {}", time);
                assert!(clip[1].abs() <= w, "y outside at time {}", time);
                assert!(clip[2] >= 0.0 && clip[2] <= w, "z outside at time {}", time);
            }
        }
        assert_eq!(CUBE_HALF_SIZE, 10.0);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = OrbitCamera::default();
        let view_proj = Matrix4x4::multiply(&camera.view(1.7), &camera.projection());
        let clip = view_proj.transform_point(Vector3::ZERO);
        assert_relative_eq!(clip[0] / clip[3], 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip[1] / clip[3], 0.0, epsilon = 1e-5);
    }
}
