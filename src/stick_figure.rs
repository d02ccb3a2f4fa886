use std::f32::consts::PI;

use gl_wrapper::geometry::Primitive;

use crate::palette::{rgba, Color};

pub const HEAD_SEGMENTS: usize = 64;
pub const HEAD_CENTER: (f32, f32) = (0.0, 0.5);
pub const HEAD_RADIUS: f32 = 0.15;

pub const LINE_WIDTH: f32 = 6.0;
pub const POINT_SIZE: f32 = 8.0;

/// One piece of the figure, vertices are `xyz` triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub vertices: Vec<f32>,
    pub primitive: Primitive,
    pub color: Color,
}

impl Part {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

pub fn head() -> Part {
    let (cx, cy) = HEAD_CENTER;

    let vertices = (0..HEAD_SEGMENTS)
        .flat_map(|i| {
            let a = i as f32 * 2.0 * PI / HEAD_SEGMENTS as f32;
            [cx + HEAD_RADIUS * a.cos(), cy + HEAD_RADIUS * a.sin(), 0.0]
        })
        .collect();

    Part {
        name: "head",
        vertices,
        primitive: Primitive::LineLoop,
        color: rgba(1.0, 1.0, 1.0, 1.0),
    }
}

#[rustfmt::skip]
pub fn body() -> Part {
    Part {
        name: "body",
        vertices: vec![
            0.0, 0.35, 0.0,
            0.0, -0.20, 0.0,
        ],
        primitive: Primitive::Lines,
        color: rgba(0.7, 0.7, 1.0, 1.0),
    }
}

#[rustfmt::skip]
pub fn arms() -> Part {
    Part {
        name: "arms",
        vertices: vec![
            0.0, 0.25, 0.0,     -0.30, 0.00, 0.0,
            0.0, 0.25, 0.0,     0.30, 0.00, 0.0,
        ],
        primitive: Primitive::Lines,
        color: rgba(0.7, 1.0, 0.7, 1.0),
    }
}

#[rustfmt::skip]
pub fn legs() -> Part {
    Part {
        name: "legs",
        vertices: vec![
            0.0, -0.20, 0.0,    -0.20, -0.70, 0.0,
            0.0, -0.20, 0.0,    0.20, -0.70, 0.0,
        ],
        primitive: Primitive::Lines,
        color: rgba(1.0, 0.7, 0.7, 1.0),
    }
}

/// All parts in draw order.
pub fn parts() -> [Part; 4] {
    [head(), body(), arms(), legs()]
}
