use crate::foundation::core::{Point, Rgba8};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One vertex in the generated mesh stream.
pub struct Vertex {
    /// Local-space position; z is always 0 for UI quads.
    pub position: [f32; 3],
    /// Vertex color.
    pub color: Rgba8,
    /// Normalized texture coordinate.
    pub uv: [f32; 2],
}

/// Append-only mesh output written by the generator.
///
/// The sink is owned by the host and handed to [`crate::generate_mesh`]
/// for the duration of one generation pass: it is cleared at entry and
/// fully populated before return, with no observable intermediate state.
/// Triangle indices refer to the vertex stream in append order.
pub trait MeshSink {
    /// Remove all vertices and triangles.
    fn clear(&mut self);

    /// Number of vertices currently in the sink.
    fn vertex_count(&self) -> usize;

    /// Append one vertex.
    fn add_vertex(&mut self, position: Point, color: Rgba8, uv: Point);

    /// Append one triangle as indices into the vertex stream.
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Growable vertex/index buffer implementing [`MeshSink`].
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices in append order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle indices, three per triangle, in append order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles in the buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the buffer holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }
}

impl MeshSink for MeshBuffer {
    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn add_vertex(&mut self, position: Point, color: Rgba8, uv: Point) {
        self.vertices.push(Vertex {
            position: [position.x as f32, position.y as f32, 0.0],
            color,
            uv: [uv.x as f32, uv.y as f32],
        });
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/buffer.rs"]
mod tests;
