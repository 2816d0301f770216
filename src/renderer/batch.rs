//! Vertex batch surface
//!
//! Collects one frame's worth of triangles for [`super::RenderState`]. Text is
//! not tessellated; it is kept as [`TextDraw`] requests for the DOM overlay.

use glam::Vec2;

use super::Surface;
use super::shapes;
use super::vertex::Vertex;
use crate::config::{MessageStyle, Rgba};
use crate::sim::Rect;

/// A pending centred text message
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub style: MessageStyle,
    pub center: Vec2,
}

/// Triangle-list surface in playfield pixels
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub clear_color: Rgba,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextDraw>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for VertexBatch {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices
            .extend(shapes::circle(center, radius, color, shapes::CIRCLE_SEGMENTS));
    }

    fn fill_text(&mut self, style: &MessageStyle, center: Vec2) {
        self.texts.push(TextDraw {
            style: style.clone(),
            center,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;

    #[test]
    fn test_clear_resets_frame() {
        let mut batch = VertexBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4]);
        batch.fill_text(&ThemeConfig::default().idle, Vec2::ZERO);
        assert_eq!(batch.vertices.len(), 6);
        assert_eq!(batch.texts.len(), 1);

        batch.clear([0.0, 0.0, 0.0, 1.0]);
        assert!(batch.vertices.is_empty());
        assert!(batch.texts.is_empty());
        assert_eq!(batch.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_circle_tessellation() {
        let mut batch = VertexBatch::new();
        batch.fill_circle(Vec2::new(5.0, 5.0), 2.0, [1.0; 4]);
        assert_eq!(batch.vertices.len(), (shapes::CIRCLE_SEGMENTS * 3) as usize);
    }
}
