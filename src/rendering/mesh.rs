//! # Mesh Uploads
//!
//! Checked vertex/index uploads that end up as macroquad meshes.

use crate::{PrimerError, PrimerResult};
use macroquad::models::{Mesh, Vertex};
use macroquad::texture::Texture2D;
use std::mem::size_of;
use tracing::debug;

/// Vertex and index data validated for drawing as a triangle list.
pub struct MeshUpload {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    vertex_stride: usize,
    texture: Option<Texture2D>,
}

impl MeshUpload {
    /// Validates and converts `vertices`/`indices`.
    ///
    /// Fails when there are no vertices, more than a 16-bit index can
    /// address, an index count that is not a multiple of three, or an index
    /// past the last vertex.
    pub fn new<V>(vertices: &[V], indices: &[u16]) -> PrimerResult<Self>
    where
        V: Copy + Into<Vertex>,
    {
        if vertices.is_empty() {
            return Err(PrimerError::Render("Mesh has no vertices".to_string()));
        }
        if vertices.len() > u16::MAX as usize + 1 {
            return Err(PrimerError::Render(format!(
                "Mesh has {} vertices, 16-bit indices address at most {}",
                vertices.len(),
                u16::MAX as usize + 1
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(PrimerError::Render(format!(
                "Index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(PrimerError::Render(format!(
                "Index {} out of range for {} vertices",
                index,
                vertices.len()
            )));
        }

        Ok(Self {
            vertices: vertices.iter().map(|&v| v.into()).collect(),
            indices: indices.to_vec(),
            vertex_stride: size_of::<V>(),
            texture: None,
        })
    }

    /// Attaches a texture sampled by the pipeline's `Texture` uniform.
    pub fn with_texture(mut self, texture: Texture2D) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Bytes needed to stage the vertices followed by the 16-bit indices.
    pub fn byte_size(&self) -> usize {
        self.vertex_stride * self.vertices.len() + size_of::<u16>() * self.indices.len()
    }

    /// Finishes the upload.
    pub fn into_mesh(self) -> Mesh {
        debug!(
            "Uploading {} vertices and {} indices ({} bytes)",
            self.vertices.len(),
            self.indices.len(),
            self.byte_size()
        );

        Mesh {
            vertices: self.vertices,
            indices: self.indices,
            texture: self.texture,
        }
    }
}
