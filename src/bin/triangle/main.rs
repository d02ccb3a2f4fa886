use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use gl_exercises::app::{launch, Exercise, SetupError};
use gl_exercises::shaders::{VERTEX_COLOR_FRAG, VERTEX_COLOR_VERT};
use gl_exercises::triangle::{INDICES, VERTICES};

struct Triangle {
    program: Program,
    geometry: Geometry,
}

impl Triangle {
    fn new(renderer: &mut GlRenderer) -> Result<Self, SetupError> {
        let program = ProgramBuilder::new(VERTEX_COLOR_VERT, VERTEX_COLOR_FRAG).build()?;
        renderer.use_program(&program);

        let geometry = GeometryBuilder::new(&VERTICES)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&INDICES)
            .build()?;

        Ok(Self { program, geometry })
    }
}

impl Exercise for Triangle {
    fn render(&mut self, renderer: &mut GlRenderer) {
        renderer.draw(&self.geometry, &self.program);
    }
}

fn main() {
    launch("Hello Triangle!", Triangle::new)
}
