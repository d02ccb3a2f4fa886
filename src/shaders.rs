//! GLSL sources shared by the exercises.

/// Per-vertex position and color, interpolated across the primitive.
pub const VERTEX_COLOR_VERT: &str = include_str!("gl_shaders/vertex_color.vert.glsl");
pub const VERTEX_COLOR_FRAG: &str = include_str!("gl_shaders/vertex_color.frag.glsl");

/// Position only, the color comes from [`COLOR_UNIFORM`].
pub const POSITION_VERT: &str = include_str!("gl_shaders/position.vert.glsl");
pub const UNIFORM_COLOR_FRAG: &str = include_str!("gl_shaders/uniform_color.frag.glsl");

pub const COLOR_UNIFORM: &str = "inputColor";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_declared() {
        assert!(UNIFORM_COLOR_FRAG.contains(&format!("uniform vec4 {COLOR_UNIFORM};")));
    }

    #[test]
    fn sources_have_no_nul() {
        for src in [
            VERTEX_COLOR_VERT,
            VERTEX_COLOR_FRAG,
            POSITION_VERT,
            UNIFORM_COLOR_FRAG,
        ] {
            assert!(!src.contains('\0'));
            assert!(src.starts_with("#version 400"));
        }
    }
}
