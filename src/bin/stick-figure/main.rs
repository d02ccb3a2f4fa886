use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use gl_exercises::app::{launch, Exercise, SetupError};
use gl_exercises::palette::Color;
use gl_exercises::shaders::{COLOR_UNIFORM, POSITION_VERT, UNIFORM_COLOR_FRAG};
use gl_exercises::stick_figure::{self, LINE_WIDTH, POINT_SIZE};

struct StickFigure {
    program: Program,
    color_loc: Option<i32>,
    parts: Vec<(Geometry, Color)>,
}

impl StickFigure {
    fn new(renderer: &mut GlRenderer) -> Result<Self, SetupError> {
        let program = ProgramBuilder::new(POSITION_VERT, UNIFORM_COLOR_FRAG).build()?;
        renderer.use_program(&program);

        let color_loc = program.uniform_location(COLOR_UNIFORM);
        if color_loc.is_none() {
            log::warn!("uniform {COLOR_UNIFORM} not found, parts will not be colored");
        }

        renderer.line_width(LINE_WIDTH);
        renderer.point_size(POINT_SIZE);

        let parts = stick_figure::parts()
            .into_iter()
            .map(|part| -> Result<_, SetupError> {
                let geometry = GeometryBuilder::new(&part.vertices)
                    .with_attribute(VertexAttribute::Vec3)
                    .with_primitive(part.primitive)
                    .build()?;
                Ok((geometry, part.color))
            })
            .collect::<Result<Vec<_>, SetupError>>()?;

        Ok(Self {
            program,
            color_loc,
            parts,
        })
    }
}

impl Exercise for StickFigure {
    fn render(&mut self, renderer: &mut GlRenderer) {
        renderer.use_program(&self.program);

        for (geometry, color) in &self.parts {
            if let Some(loc) = self.color_loc {
                self.program.set_vec4(loc, (*color).into());
            }
            renderer.draw(geometry, &self.program);
        }
    }
}

fn main() {
    launch("Stick Figure", StickFigure::new)
}
