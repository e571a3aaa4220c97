//! Raster canvas and the shapes painted onto it
//!
//! Thin layer over `image` buffers and `imageproc` drawing. Shapes are plain
//! data so the map and mask can share one layout.

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use std::path::Path;

use crate::error::GenerationResult;

/// Axis-aligned box in pixels, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Horizontal and vertical radii of the inscribed ellipse
    pub fn radii(&self) -> (i32, i32) {
        ((self.right - self.left) / 2, (self.bottom - self.top) / 2)
    }

    /// True if (x, y) falls inside the inscribed ellipse
    #[cfg(test)]
    pub(crate) fn ellipse_contains(&self, x: f32, y: f32) -> bool {
        let (cx, cy) = self.center();
        let (rx, ry) = self.radii();
        if rx <= 0 || ry <= 0 {
            return false;
        }
        let nx = (x - cx as f32) / rx as f32;
        let ny = (y - cy as f32) / ry as f32;
        nx * nx + ny * ny <= 1.0
    }
}

/// Geometric primitive painted onto a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled ellipse inscribed in `bounds`
    Ellipse { bounds: BoundingBox, fill: Rgb<u8> },
    /// Straight stroke from `from` to `to`, `width` pixels wide
    Line {
        from: (i32, i32),
        to: (i32, i32),
        stroke: Rgb<u8>,
        width: u32,
    },
}

/// In-memory RGB raster that shapes are painted onto before saving
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn paint(&mut self, shape: &Shape) {
        match *shape {
            Shape::Ellipse { bounds, fill } => {
                let (rx, ry) = bounds.radii();
                draw_filled_ellipse_mut(&mut self.image, bounds.center(), rx, ry, fill);
            }
            Shape::Line {
                from,
                to,
                stroke,
                width,
            } => self.paint_line(from, to, stroke, width),
        }
    }

    pub fn paint_all(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            self.paint(shape);
        }
    }

    /// Wide lines are drawn as a quad offset by half the width on each side
    fn paint_line(&mut self, from: (i32, i32), to: (i32, i32), stroke: Rgb<u8>, width: u32) {
        let dx = (to.0 - from.0) as f32;
        let dy = (to.1 - from.1) as f32;
        let len = (dx * dx + dy * dy).sqrt();

        if len == 0.0 {
            // Degenerate segment: a dot as wide as the stroke
            let radius = (width / 2).max(1) as i32;
            draw_filled_circle_mut(&mut self.image, from, radius, stroke);
            return;
        }

        if width <= 1 {
            draw_line_segment_mut(
                &mut self.image,
                (from.0 as f32, from.1 as f32),
                (to.0 as f32, to.1 as f32),
                stroke,
            );
            return;
        }

        let half = width as f32 / 2.0;
        let nx = -dy / len * half;
        let ny = dx / len * half;
        let corner = |p: (i32, i32), sign: f32| {
            Point::new(
                (p.0 as f32 + sign * nx).round() as i32,
                (p.1 as f32 + sign * ny).round() as i32,
            )
        };
        let quad = [
            corner(from, 1.0),
            corner(to, 1.0),
            corner(to, -1.0),
            corner(from, -1.0),
        ];
        draw_polygon_mut(&mut self.image, &quad, stroke);
    }

    #[cfg(test)]
    pub(crate) fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode as PNG and write to `path`, replacing any existing file
    pub fn save_png(&self, path: &Path) -> GenerationResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
