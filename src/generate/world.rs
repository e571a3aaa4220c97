//! Placeholder world layout
//!
//! Five ellipses stand in for the continents and two strokes stand in for
//! barriers (a river and a mountain ridge). The map and the mask are built
//! from the same landmass list so they stay pixel-aligned.

use image::Rgb;

use super::canvas::{BoundingBox, Canvas, Shape};
use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAP_BACKGROUND, MAP_LAND, MASK_BARRIER, MASK_LAND, MASK_WATER,
};

/// A continent approximated by its bounding ellipse
#[derive(Debug, Clone, Copy)]
pub struct Landmass {
    pub name: &'static str,
    pub bounds: BoundingBox,
}

/// Impassable stroke drawn through land on the mask only
#[derive(Debug, Clone, Copy)]
pub struct Barrier {
    pub name: &'static str,
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub width: u32,
}

impl Barrier {
    pub fn midpoint(&self) -> (i32, i32) {
        ((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }
}

pub const LANDMASSES: [Landmass; 5] = [
    Landmass {
        name: "Eurasia",
        bounds: BoundingBox::new(120, 130, 680, 370),
    },
    Landmass {
        name: "Africa",
        bounds: BoundingBox::new(270, 320, 430, 520),
    },
    Landmass {
        name: "North America",
        bounds: BoundingBox::new(90, 60, 210, 340),
    },
    Landmass {
        name: "South America",
        bounds: BoundingBox::new(80, 310, 180, 490),
    },
    Landmass {
        name: "Australia",
        bounds: BoundingBox::new(580, 400, 720, 500),
    },
];

pub const BARRIERS: [Barrier; 2] = [
    Barrier {
        name: "river",
        from: (300, 200),
        to: (320, 280),
        width: 8,
    },
    Barrier {
        name: "ridge",
        from: (450, 180),
        to: (480, 240),
        width: 12,
    },
];

fn landmass_shapes(fill: Rgb<u8>) -> Vec<Shape> {
    LANDMASSES
        .iter()
        .map(|land| Shape::Ellipse {
            bounds: land.bounds,
            fill,
        })
        .collect()
}

/// Shapes for the colored map: landmasses in earth tone
pub fn map_shapes() -> Vec<Shape> {
    landmass_shapes(MAP_LAND)
}

/// Shapes for the mask: white landmasses, then black barriers on top
pub fn mask_shapes() -> Vec<Shape> {
    let mut shapes = landmass_shapes(MASK_LAND);
    shapes.extend(BARRIERS.iter().map(|barrier| Shape::Line {
        from: barrier.from,
        to: barrier.to,
        stroke: MASK_BARRIER,
        width: barrier.width,
    }));
    shapes
}

pub fn paint_map() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, MAP_BACKGROUND);
    canvas.paint_all(&map_shapes());
    canvas
}

pub fn paint_mask() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, MASK_WATER);
    canvas.paint_all(&mask_shapes());
    canvas
}
