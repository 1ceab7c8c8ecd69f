//! Shape generation for 2D primitives

use super::vertex::Vertex;
use super::{Color, Rect, Surface};

/// Generate two triangles covering `rect`
pub fn rect(rect: Rect, color: Color) -> [Vertex; 6] {
    let (x0, y0) = (rect.pos.x, rect.pos.y);
    let (x1, y1) = (rect.right(), rect.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Surface that collects filled rects as a triangle list
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of rects drawn
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Surface for QuadBatch {
    fn fill_rect(&mut self, r: Rect, color: Color) {
        self.vertices.extend_from_slice(&rect(r, color));
    }
}
