/// Position (xyz) followed by color (rgb) for each corner.
#[rustfmt::skip]
pub const VERTICES: [f32; 18] = [
    -0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
    0.5, -0.5, 0.0,     0.0, 1.0, 0.0,
    0.0, 0.5, 0.0,      0.0, 0.0, 1.0,
];

pub const INDICES: [u32; 3] = [0, 1, 2];

pub const FLOATS_PER_VERTEX: usize = 6;
