use cgmath::Vector2;

/// Maps a window pixel position to normalized device coordinates.
///
/// Pixel space has its origin in the top-left corner with y growing down, so
/// the y axis is flipped. Positions outside the window are not clamped.
pub fn pixel_to_ndc(px: f64, py: f64, width: u32, height: u32) -> Vector2<f32> {
    let x = px / width as f64 * 2.0 - 1.0;
    let y = 1.0 - py / height as f64 * 2.0;

    Vector2::new(x as f32, y as f32)
}
