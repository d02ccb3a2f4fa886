use std::ffi::{c_char, CStr};

use crate::geometry::Geometry;
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    pub fn use_program(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        self.use_program(program);

        let mode = geometry.primitive().gl_enum();

        unsafe {
            gl::BindVertexArray(geometry.vao());
            if geometry.is_indexed() {
                gl::DrawElements(
                    mode,
                    geometry.elements() as i32,
                    gl::UNSIGNED_INT,
                    std::ptr::null(),
                );
            } else {
                gl::DrawArrays(mode, 0, geometry.elements() as i32);
            }
            gl::BindVertexArray(0);
        }
    }

    /// Like [`GlRenderer::draw`], but limited to the first `count` elements.
    pub fn draw_count(&mut self, geometry: &Geometry, program: &Program, count: usize) {
        self.use_program(program);

        let count = count.min(geometry.elements()) as i32;

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(geometry.primitive().gl_enum(), 0, count);
            gl::BindVertexArray(0);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn line_width(&self, width: f32) {
        unsafe { gl::LineWidth(width) }
    }

    pub fn point_size(&self, size: f32) {
        unsafe { gl::PointSize(size) }
    }

    pub fn info(&self) -> GlInfo {
        GlInfo {
            renderer: gl_string(gl::RENDERER),
            version: gl_string(gl::VERSION),
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct GlInfo {
    pub renderer: String,
    pub version: String,
}

fn gl_string(name: gl::types::GLenum) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("<unknown>");
        }
        CStr::from_ptr(ptr as *const c_char)
            .to_string_lossy()
            .into_owned()
    }
}
