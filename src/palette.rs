use cgmath::Vector4;

pub type Color = Vector4<f32>;

pub(crate) const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Vector4 {
        x: r,
        y: g,
        z: b,
        w: a,
    }
}

/// Colors cycled through by shape index.
pub const PALETTE: [Color; 6] = [
    rgba(1.0, 0.0, 0.0, 1.0),
    rgba(0.0, 1.0, 0.0, 1.0),
    rgba(0.0, 0.0, 1.0, 1.0),
    rgba(1.0, 1.0, 0.0, 1.0),
    rgba(0.0, 1.0, 1.0, 1.0),
    rgba(1.0, 0.0, 1.0, 1.0),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
