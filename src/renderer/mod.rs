//! Rendering module
//!
//! The game issues immediate-mode draw calls against a [`DrawTarget`].
//! [`DrawList`] batches them into world-space triangles plus HUD text, and
//! [`RenderState`] presents a batch through WebGPU.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use glam::Vec3;

/// Primitive draw operations offered to the frame loop
pub trait DrawTarget {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);
    /// Axis-aligned box
    fn cube(&mut self, center: Vec3, size: Vec3, color: [f32; 4]);
    /// Ground grid centered on the origin
    fn grid(&mut self, slices: u32, spacing: f32);
    /// Screen-space text at pixel `(x, y)`
    fn text(&mut self, text: &str, x: i32, y: i32, font_size: u32, color: [f32; 4]);
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub color: [f32; 4],
}

/// One frame's worth of draw calls
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    /// Number of `cube` calls this frame
    pub cube_count: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            ..Default::default()
        }
    }
}

impl DrawTarget for DrawList {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
        self.cube_count = 0;
    }

    fn cube(&mut self, center: Vec3, size: Vec3, color: [f32; 4]) {
        self.vertices.extend(shapes::cube(center, size, color));
        self.cube_count += 1;
    }

    fn grid(&mut self, slices: u32, spacing: f32) {
        self.vertices.extend(shapes::grid(slices, spacing));
    }

    fn text(&mut self, text: &str, x: i32, y: i32, font_size: u32, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.to_owned(),
            x,
            y,
            font_size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_batches_and_clears() {
        let mut list = DrawList::new();
        list.cube(Vec3::ZERO, Vec3::ONE, colors::PROJECTILE);
        list.cube(Vec3::ONE, Vec3::ONE, colors::PROJECTILE);
        list.text("hello", 10, 10, 20, colors::HUD_TEXT);

        assert_eq!(list.cube_count, 2);
        assert_eq!(list.vertices.len(), 72);
        assert_eq!(list.texts[0].text, "hello");

        list.clear([0.1, 0.2, 0.3, 1.0]);
        assert_eq!(list.clear_color, [0.1, 0.2, 0.3, 1.0]);
        assert!(list.vertices.is_empty());
        assert!(list.texts.is_empty());
        assert_eq!(list.cube_count, 0);
    }
}
