use gl::types::{GLenum, GLint, GLuint};
use std::ffi::{c_char, CString, NulError};
use thiserror::Error;

const INFO_LOG_LEN: usize = 512;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    /// Compiles both stages and links them.
    ///
    /// A stage that fails to compile or a program that fails to link is
    /// reported through the log and the program is still returned, so the
    /// caller keeps running with whatever the driver produced. Check
    /// [`Program::is_linked`] to tell the two apart.
    pub fn build(self) -> Result<Program, PBError> {
        let vert_src = CString::new(self.vert)?;
        let frag_src = CString::new(self.frag)?;

        let mut success: GLint = 0;

        unsafe {
            let vert = compile_stage(gl::VERTEX_SHADER, &vert_src, "VERTEX");
            let frag = compile_stage(gl::FRAGMENT_SHADER, &frag_src, "FRAGMENT");

            let id = gl::CreateProgram();
            gl::AttachShader(id, vert);
            gl::AttachShader(id, frag);
            gl::LinkProgram(id);

            gl::GetProgramiv(id, gl::LINK_STATUS, (&mut success) as *mut GLint);
            let linked = success == gl::TRUE as GLint;
            if !linked {
                let mut buf = [0_u8; INFO_LOG_LEN];
                gl::GetProgramInfoLog(
                    id,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                log::error!("program linking failed:\n{}", info_log_text(&buf));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id, linked })
        }
    }
}

unsafe fn compile_stage(kind: GLenum, src: &CString, stage: &str) -> GLuint {
    let mut success: GLint = 0;

    let shader = gl::CreateShader(kind);
    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );
    gl::CompileShader(shader);

    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut GLint);
    if success != gl::TRUE as GLint {
        let mut buf = [0_u8; INFO_LOG_LEN];
        gl::GetShaderInfoLog(
            shader,
            INFO_LOG_LEN as i32,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );
        log::error!("{stage} shader compilation failed:\n{}", info_log_text(&buf));
    }

    shader
}

/// Driver logs are nul terminated, anything after the first nul is garbage.
fn info_log_text(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);
    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("Shader source contains a nul byte: {0}")]
    InvalidSource(#[from] NulError),
}

pub struct Program {
    id: GLuint,
    linked: bool,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Returns `None` when the uniform does not exist or was optimized away.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let name = CString::new(name).ok()?;
        let loc = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        (loc >= 0).then_some(loc)
    }

    /// Expects the program to be bound.
    pub fn set_vec4(&self, location: GLint, value: [f32; 4]) {
        unsafe { gl::Uniform4fv(location, 1, value.as_ptr()) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
