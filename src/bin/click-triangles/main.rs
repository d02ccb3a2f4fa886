use gl_wrapper::geometry::Geometry;
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use gl_exercises::accumulator::{ClickOutcome, GlShapeBackend, ShapeAccumulator};
use gl_exercises::app::{launch, Exercise, SetupError};
use gl_exercises::input::InputEvent;
use gl_exercises::shaders::{POSITION_VERT, UNIFORM_COLOR_FRAG};

struct ClickTriangles {
    program: Program,
    // taken on shutdown
    shapes: Option<ShapeAccumulator<Geometry>>,
}

impl ClickTriangles {
    fn new(_renderer: &mut GlRenderer) -> Result<Self, SetupError> {
        let program = ProgramBuilder::new(POSITION_VERT, UNIFORM_COLOR_FRAG).build()?;

        Ok(Self {
            program,
            shapes: Some(ShapeAccumulator::new()),
        })
    }
}

impl Exercise for ClickTriangles {
    fn show_fps(&self) -> bool {
        false
    }

    fn handle_input(&mut self, event: &InputEvent, renderer: &mut GlRenderer) {
        let (InputEvent::Click(click), Some(shapes)) = (event, &mut self.shapes) else {
            return;
        };

        let mut backend = GlShapeBackend::new(renderer);
        match shapes.handle_click(&mut backend, click) {
            Ok(ClickOutcome::Closed(i)) => log::info!("Triangle {} closed", i + 1),
            Ok(_) => {}
            Err(e) => log::error!("Could not upload triangle: {e}"),
        }
    }

    fn render(&mut self, renderer: &mut GlRenderer) {
        if let Some(shapes) = &self.shapes {
            shapes.render_all(&mut GlShapeBackend::new(renderer), &self.program);
        }
    }

    fn shutdown(&mut self, renderer: &mut GlRenderer) {
        if let Some(shapes) = self.shapes.take() {
            let released = shapes.shutdown(&mut GlShapeBackend::new(renderer));
            log::info!("Released {released} triangles");
        }
    }
}

fn main() {
    launch("Hello Triangles!", ClickTriangles::new)
}
