//! Rectangle batching

use glam::Vec2;

use super::vertex::Vertex;
use crate::platform::{Color, Rect};

/// Two triangles covering `rect`, in field units (y grows downward)
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let x0 = rect.x as f32;
    let y0 = rect.y as f32;
    let x1 = x0 + rect.w as f32;
    let y1 = y0 + rect.h as f32;

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Map a field position to normalized device coordinates.
/// Field origin is top-left; NDC origin is the center with y up.
#[inline]
pub fn field_to_ndc(pos: Vec2, field_size: Vec2) -> Vec2 {
    Vec2::new(
        pos.x / field_size.x * 2.0 - 1.0,
        1.0 - pos.y / field_size.y * 2.0,
    )
}

/// CPU-side list of rectangles for the current frame
#[derive(Debug, Clone)]
pub struct RectBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

impl Default for RectBatch {
    fn default() -> Self {
        Self {
            clear_color: Color::rgb(0, 0, 0),
            vertices: Vec::new(),
        }
    }
}

impl RectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop queued rectangles and set the background
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    pub fn push(&mut self, r: Rect, color: Color) {
        self.vertices.extend_from_slice(&rect(r, color.to_f32()));
    }

    pub fn rect_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Vertices converted to NDC for upload
    pub fn ndc_vertices(&self, field_size: Vec2) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| {
                let ndc = field_to_ndc(Vec2::from(v.position), field_size);
                Vertex::new(ndc.x, ndc.y, v.color)
            })
            .collect()
    }
}
