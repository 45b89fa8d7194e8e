//! Drawing target abstraction shared by the simulation and the browser canvas.

use crate::{Color, Point};

/// A 2D drawing surface sized to the viewport.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase everything drawn during the previous frame.
    fn clear(&mut self);

    /// Paint a filled circle. `alpha` is applied on top of `color`.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32);
}

/// Records draw calls instead of painting them.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub clears: usize,
    pub circles: Vec<(Point, f32, Color, f32)>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color, alpha: f32) {
        self.circles.push((center, radius, color, alpha));
    }
}
