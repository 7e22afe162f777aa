//! Thin helpers that turn shader source and flat `f32` arrays into
//! render-ready WebGL objects.
//!
//! Every function here mutates global context state (current program, the
//! `ARRAY_BUFFER` binding). Callers sequence them; prior bindings are not
//! restored.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
};

use crate::error::{Result, SketchError};
use crate::shader::ShaderStage;

/// Acquires a WebGL2 context from `canvas`. There is no WebGL1 fallback.
pub fn create_context(canvas: &HtmlCanvasElement) -> Result<GL> {
    let context = canvas
        .get_context("webgl2")
        .map_err(SketchError::js)?
        .ok_or_else(|| SketchError::ContextUnavailable("WebGL2 not supported".into()))?;
    context
        .dyn_into::<GL>()
        .map_err(|_| SketchError::ContextUnavailable("context is not WebGL2".into()))
}

/// Compiles `source` for `stage`, failing with the driver's info log.
pub fn compile_shader(gl: &GL, source: &str, stage: ShaderStage) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(stage.gl_kind())
        .ok_or(SketchError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        log::debug!("compiled {stage} shader");
        return Ok(shader);
    }

    let log = gl
        .get_shader_info_log(&shader)
        .filter(|log| !log.trim().is_empty())
        .unwrap_or_else(|| "unknown compile error".to_string());
    gl.delete_shader(Some(&shader));
    log::error!("{stage} shader failed to compile: {log}");
    Err(SketchError::ShaderCompile { stage, log })
}

/// Links both stages into a program and makes it current.
///
/// The stage objects are deleted right after linking whether or not it
/// succeeds; the program keeps what it needs.
pub fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or(SketchError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    gl.delete_shader(Some(vertex));
    gl.delete_shader(Some(fragment));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let log = gl
            .get_program_info_log(&program)
            .filter(|log| !log.trim().is_empty())
            .unwrap_or_else(|| "unknown link error".to_string());
        log::error!("program failed to link: {log}");
        return Err(SketchError::ProgramLink { log });
    }

    gl.use_program(Some(&program));
    log::debug!("linked program");
    Ok(program)
}

/// Copies `data` into a new `STATIC_DRAW` array buffer. Nothing is left bound
/// to `ARRAY_BUFFER` on return.
pub fn upload_vertex_data(gl: &GL, data: &[f32]) -> Result<WebGlBuffer> {
    let buffer = gl
        .create_buffer()
        .ok_or(SketchError::ResourceCreation("buffer"))?;

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let view = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    gl.bind_buffer(GL::ARRAY_BUFFER, None);

    log::debug!("uploaded {} floats", data.len());
    Ok(buffer)
}

/// Points attribute `location` at `buffer`, reading `stride` floats per
/// vertex, unnormalized, tightly packed from offset 0.
///
/// Leaves `buffer` bound to `ARRAY_BUFFER`.
pub fn bind_attribute(gl: &GL, buffer: &WebGlBuffer, location: u32, stride: usize) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, stride as i32, GL::FLOAT, false, 0, 0);
}

/// Looks up a named vertex input, failing if the linker dropped it.
pub fn attribute_location(gl: &GL, program: &WebGlProgram, name: &str) -> Result<u32> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location)
        .map_err(|_| SketchError::Js(format!("attribute `{name}` not found in program")))
}

/// Whether anything is bound to the `ARRAY_BUFFER` target.
pub fn array_buffer_bound(gl: &GL) -> Result<bool> {
    let binding = gl
        .get_parameter(GL::ARRAY_BUFFER_BINDING)
        .map_err(SketchError::js)?;
    Ok(!binding.is_null())
}
