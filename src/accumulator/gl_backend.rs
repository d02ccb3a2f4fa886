use cgmath::Vector2;

use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::Program;
use gl_wrapper::renderer::GlRenderer;

use crate::accumulator::{ShapeBackend, VERTICES_PER_SHAPE};
use crate::palette::Color;
use crate::shaders::COLOR_UNIFORM;

/// Uploads shapes as one VAO/VBO pair each and draws them with a uniform
/// color. Dropping a [`Geometry`] deletes its buffers.
pub struct GlShapeBackend<'r> {
    renderer: &'r mut GlRenderer,
}

impl<'r> GlShapeBackend<'r> {
    pub fn new(renderer: &'r mut GlRenderer) -> Self {
        Self { renderer }
    }
}

impl ShapeBackend for GlShapeBackend<'_> {
    type Drawable = Geometry;
    type Program = Program;
    type Error = GBError;

    fn upload_triangle(
        &mut self,
        points: &[Vector2<f32>; VERTICES_PER_SHAPE],
    ) -> Result<Geometry, GBError> {
        let data: Vec<f32> = points.iter().flat_map(|p| [p.x, p.y, 0.0]).collect();

        GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec3)
            .build()
    }

    fn set_color(&mut self, program: &Program, color: Color) {
        self.renderer.use_program(program);

        if let Some(loc) = program.uniform_location(COLOR_UNIFORM) {
            program.set_vec4(loc, color.into());
        }
    }

    fn draw_triangles(&mut self, program: &Program, drawable: &Geometry, vertex_count: usize) {
        self.renderer.draw_count(drawable, program, vertex_count);
    }

    fn release(&mut self, drawable: Geometry) {
        drop(drawable);
    }
}
