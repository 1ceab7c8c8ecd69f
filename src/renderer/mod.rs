//! Rendering surface
//!
//! The simulation only knows the [`Surface`] trait. [`QuadBatch`] is the
//! stock surface: it turns draw calls into triangle vertices ready to upload
//! to a GPU vertex buffer.

pub mod shapes;
pub mod vertex;

pub use shapes::QuadBatch;
pub use vertex::{Vertex, colors};

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Screen-space rectangle (top-left origin)
pub type Rect = crate::sim::Aabb;

/// Anything entities can draw onto
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
