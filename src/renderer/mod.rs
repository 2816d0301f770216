//! Presentation layer
//!
//! The scene is described through the [`Surface`] trait; [`VertexBatch`]
//! tessellates it for the WebGPU pipeline and keeps text aside for the DOM
//! overlay.

pub mod batch;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::config::{MessageStyle, Rgba};
use crate::sim::Rect;

pub use batch::{TextDraw, VertexBatch};
pub use pipeline::RenderState;
pub use scene::{draw_idle, draw_outcome, draw_scene};

/// A 2-D drawing target in playfield pixels
pub trait Surface {
    /// Wipe the surface to a solid color
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Draw a message centred on `center`
    fn fill_text(&mut self, style: &MessageStyle, center: Vec2);
}
