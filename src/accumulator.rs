use cgmath::Vector2;

use crate::input::Click;
use crate::math::pixel_to_ndc;
use crate::palette::{palette_color, Color};

mod gl_backend;

pub use gl_backend::GlShapeBackend;

pub const VERTICES_PER_SHAPE: usize = 3;

/// Rendering side of the accumulator: uploads closed triangles and draws them.
pub trait ShapeBackend {
    type Drawable;
    type Program;
    type Error;

    fn upload_triangle(
        &mut self,
        points: &[Vector2<f32>; VERTICES_PER_SHAPE],
    ) -> Result<Self::Drawable, Self::Error>;

    fn set_color(&mut self, program: &Self::Program, color: Color);

    fn draw_triangles(
        &mut self,
        program: &Self::Program,
        drawable: &Self::Drawable,
        vertex_count: usize,
    );

    fn release(&mut self, drawable: Self::Drawable);
}

/// A closed triangle and the backend resource holding its vertices.
pub struct Shape<D> {
    points: [Vector2<f32>; VERTICES_PER_SHAPE],
    drawable: D,
}

impl<D> Shape<D> {
    pub fn points(&self) -> &[Vector2<f32>; VERTICES_PER_SHAPE] {
        &self.points
    }

    pub fn drawable(&self) -> &D {
        &self.drawable
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not a primary button press.
    Ignored,
    /// Point stored, holds the number of pending points.
    Buffered(usize),
    /// Point closed a shape, holds its index in the registry.
    Closed(usize),
}

/// Turns primary clicks into triangles, one for every three clicks.
///
/// Pending points never exceed two between clicks; the third one is uploaded
/// together with them and the buffer is emptied in the same step.
pub struct ShapeAccumulator<D> {
    pending: Vec<Vector2<f32>>,
    shapes: Vec<Shape<D>>,
}

impl<D> ShapeAccumulator<D> {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(VERTICES_PER_SHAPE - 1),
            shapes: Vec::new(),
        }
    }

    pub fn handle_click<B>(
        &mut self,
        backend: &mut B,
        click: &Click,
    ) -> Result<ClickOutcome, B::Error>
    where
        B: ShapeBackend<Drawable = D>,
    {
        if !click.is_primary_press() {
            return Ok(ClickOutcome::Ignored);
        }

        let point = pixel_to_ndc(click.x, click.y, click.window_width, click.window_height);

        if self.pending.len() + 1 < VERTICES_PER_SHAPE {
            self.pending.push(point);
            return Ok(ClickOutcome::Buffered(self.pending.len()));
        }

        let points = [self.pending[0], self.pending[1], point];

        // On failure the third point is dropped and the registry stays as is.
        let drawable = backend.upload_triangle(&points)?;

        self.pending.clear();
        self.shapes.push(Shape { points, drawable });

        let index = self.shapes.len() - 1;
        log::debug!("closed shape {index}: {points:?}");

        Ok(ClickOutcome::Closed(index))
    }

    /// Draws every shape in creation order, colored by its index.
    pub fn render_all<B>(&self, backend: &mut B, program: &B::Program)
    where
        B: ShapeBackend<Drawable = D>,
    {
        for (i, shape) in self.shapes.iter().enumerate() {
            backend.set_color(program, palette_color(i));
            backend.draw_triangles(program, &shape.drawable, VERTICES_PER_SHAPE);
        }
    }

    /// Releases every drawable, returns how many were released.
    pub fn shutdown<B>(self, backend: &mut B) -> usize
    where
        B: ShapeBackend<Drawable = D>,
    {
        let count = self.shapes.len();

        for shape in self.shapes {
            backend.release(shape.drawable);
        }

        count
    }

    pub fn pending(&self) -> &[Vector2<f32>] {
        &self.pending
    }

    pub fn shapes(&self) -> &[Shape<D>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<D> Default for ShapeAccumulator<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::input::{Action, MouseButton};
    use crate::palette::PALETTE;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Upload(u32),
        Color(Color),
        Draw(u32, usize),
        Release(u32),
    }

    #[derive(Debug, PartialEq)]
    struct UploadFailed;

    #[derive(Default)]
    struct RecordingBackend {
        next_id: u32,
        fail_uploads: bool,
        calls: Vec<Call>,
    }

    impl RecordingBackend {
        fn take_calls(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }
    }

    impl ShapeBackend for RecordingBackend {
        type Drawable = u32;
        type Program = ();
        type Error = UploadFailed;

        fn upload_triangle(
            &mut self,
            _points: &[Vector2<f32>; VERTICES_PER_SHAPE],
        ) -> Result<u32, UploadFailed> {
            if self.fail_uploads {
                return Err(UploadFailed);
            }

            let id = self.next_id;
            self.next_id += 1;
            self.calls.push(Call::Upload(id));
            Ok(id)
        }

        fn set_color(&mut self, _program: &(), color: Color) {
            self.calls.push(Call::Color(color));
        }

        fn draw_triangles(&mut self, _program: &(), drawable: &u32, vertex_count: usize) {
            self.calls.push(Call::Draw(*drawable, vertex_count));
        }

        fn release(&mut self, drawable: u32) {
            self.calls.push(Call::Release(drawable));
        }
    }

    fn click_at(x: f64, y: f64, button: MouseButton, action: Action) -> Click {
        Click {
            x,
            y,
            button,
            action,
            window_width: 800,
            window_height: 600,
        }
    }

    fn primary(x: f64, y: f64) -> Click {
        click_at(x, y, MouseButton::Primary, Action::Press)
    }

    #[test]
    fn shapes_follow_click_count() {
        for n in 0..20 {
            let mut backend = RecordingBackend::default();
            let mut acc = ShapeAccumulator::new();

            for i in 0..n {
                acc.handle_click(&mut backend, &primary(i as f64 * 10.0, 5.0))
                    .unwrap();
            }

            assert_eq!(acc.len(), n / 3, "clicks: {n}");
            assert_eq!(acc.pending().len(), n % 3, "clicks: {n}");
        }
    }

    #[test]
    fn outcomes() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        let outcomes: Vec<_> = (0..4)
            .map(|_| acc.handle_click(&mut backend, &primary(1.0, 1.0)).unwrap())
            .collect();

        assert_eq!(
            outcomes,
            vec![
                ClickOutcome::Buffered(1),
                ClickOutcome::Buffered(2),
                ClickOutcome::Closed(0),
                ClickOutcome::Buffered(1),
            ]
        );
    }

    #[test]
    fn other_buttons_and_releases_are_ignored() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        acc.handle_click(&mut backend, &primary(100.0, 100.0)).unwrap();
        acc.handle_click(&mut backend, &primary(200.0, 100.0)).unwrap();

        let ignored = [
            click_at(1.0, 1.0, MouseButton::Primary, Action::Release),
            click_at(1.0, 1.0, MouseButton::Secondary, Action::Press),
            click_at(1.0, 1.0, MouseButton::Middle, Action::Press),
            click_at(1.0, 1.0, MouseButton::Other(8), Action::Press),
            click_at(1.0, 1.0, MouseButton::Secondary, Action::Release),
        ];

        for click in &ignored {
            let outcome = acc.handle_click(&mut backend, click).unwrap();
            assert_eq!(outcome, ClickOutcome::Ignored);
        }

        assert_eq!(acc.pending().len(), 2);
        assert!(acc.is_empty());
        assert!(backend.take_calls().is_empty());
    }

    #[test]
    fn points_are_stored_in_ndc() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        acc.handle_click(&mut backend, &primary(0.0, 0.0)).unwrap();
        acc.handle_click(&mut backend, &primary(800.0, 600.0)).unwrap();
        acc.handle_click(&mut backend, &primary(400.0, 300.0)).unwrap();

        let expected: [Vector2<f32>; 3] = [
            Vector2::new(-1.0, 1.0),
            Vector2::new(1.0, -1.0),
            Vector2::new(0.0, 0.0),
        ];

        assert_eq!(acc.shapes()[0].points(), &expected);
    }

    #[test]
    fn nine_clicks_make_three_colored_shapes() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        let clicks = [
            (100.0, 100.0),
            (200.0, 100.0),
            (150.0, 50.0),
            (400.0, 300.0),
            (500.0, 300.0),
            (450.0, 250.0),
            (600.0, 500.0),
            (700.0, 500.0),
            (650.0, 450.0),
        ];

        for (x, y) in clicks {
            acc.handle_click(&mut backend, &primary(x, y)).unwrap();
        }

        assert_eq!(acc.len(), 3);
        assert!(acc.pending().is_empty());
        assert_eq!(
            backend.take_calls(),
            vec![Call::Upload(0), Call::Upload(1), Call::Upload(2)]
        );

        acc.render_all(&mut backend, &());

        assert_eq!(
            backend.take_calls(),
            vec![
                Call::Color(PALETTE[0]),
                Call::Draw(0, 3),
                Call::Color(PALETTE[1]),
                Call::Draw(1, 3),
                Call::Color(PALETTE[2]),
                Call::Draw(2, 3),
            ]
        );
    }

    #[test]
    fn two_clicks_draw_nothing() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        acc.handle_click(&mut backend, &primary(10.0, 10.0)).unwrap();
        acc.handle_click(&mut backend, &primary(20.0, 10.0)).unwrap();
        acc.render_all(&mut backend, &());

        assert!(acc.is_empty());
        assert!(backend.take_calls().is_empty());
    }

    #[test]
    fn render_is_repeatable() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        for i in 0..24 {
            acc.handle_click(&mut backend, &primary(i as f64, 0.0)).unwrap();
        }
        backend.take_calls();

        acc.render_all(&mut backend, &());
        let first = backend.take_calls();
        acc.render_all(&mut backend, &());
        let second = backend.take_calls();

        assert_eq!(first.len(), 16);
        assert_eq!(first, second);
    }

    #[test]
    fn colors_wrap_around_palette() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        for _ in 0..(PALETTE.len() + 2) * 3 {
            acc.handle_click(&mut backend, &primary(5.0, 5.0)).unwrap();
        }
        backend.take_calls();

        acc.render_all(&mut backend, &());

        let colors: Vec<_> = backend
            .take_calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Color(c) => Some(c),
                _ => None,
            })
            .collect();

        assert_eq!(colors.len(), PALETTE.len() + 2);
        assert_eq!(colors[PALETTE.len()], PALETTE[0]);
        assert_eq!(colors[PALETTE.len() + 1], PALETTE[1]);
    }

    #[test]
    fn failed_upload_keeps_registry() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        acc.handle_click(&mut backend, &primary(1.0, 1.0)).unwrap();
        acc.handle_click(&mut backend, &primary(2.0, 1.0)).unwrap();

        backend.fail_uploads = true;
        let res = acc.handle_click(&mut backend, &primary(3.0, 1.0));

        assert_eq!(res, Err(UploadFailed));
        assert!(acc.is_empty());
        assert_eq!(acc.pending().len(), 2);

        backend.fail_uploads = false;
        let res = acc.handle_click(&mut backend, &primary(3.0, 1.0));

        assert_eq!(res, Ok(ClickOutcome::Closed(0)));
        assert!(acc.pending().is_empty());
    }

    #[test]
    fn shutdown_releases_every_shape() {
        let mut backend = RecordingBackend::default();
        let mut acc = ShapeAccumulator::new();

        for _ in 0..11 {
            acc.handle_click(&mut backend, &primary(5.0, 5.0)).unwrap();
        }
        backend.take_calls();

        assert_eq!(acc.shutdown(&mut backend), 3);
        assert_eq!(
            backend.take_calls(),
            vec![Call::Release(0), Call::Release(1), Call::Release(2)]
        );
    }
}
