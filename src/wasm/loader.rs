//! Fetching shader text and turning it into a linked program.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, WebGl2RenderingContext as GL, WebGlProgram};

use super::gl;
use crate::error::{Result, SketchError};
use crate::shader::{ShaderPaths, ShaderStage};

/// Fetches `path` relative to the page and returns its body as text.
/// No caching and no retry.
pub async fn load_text(path: &str) -> Result<String> {
    let load_error = |reason: String| SketchError::ResourceLoad {
        path: path.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| load_error("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| load_error(format!("fetch failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| load_error("not a Response".into()))?;

    if !response.ok() {
        return Err(load_error(format!("HTTP {}", response.status())));
    }

    let text = response
        .text()
        .map_err(|e| load_error(format!("unreadable body: {e:?}")))?;
    JsFuture::from(text)
        .await
        .map_err(|e| load_error(format!("unreadable body: {e:?}")))?
        .as_string()
        .ok_or_else(|| load_error("body is not text".into()))
}

/// Loads, compiles and links the program described by `paths`.
///
/// Ordering contract: the vertex source is fetched *and compiled* before the
/// fragment source is requested, so a broken vertex shader never costs a
/// second request.
pub async fn load_program(gl: &GL, paths: &ShaderPaths) -> Result<WebGlProgram> {
    let vertex_source = load_text(paths.path(ShaderStage::Vertex)).await?;
    let vertex = gl::compile_shader(gl, &vertex_source, ShaderStage::Vertex)?;

    let fragment_source = load_text(paths.path(ShaderStage::Fragment)).await?;
    let fragment = gl::compile_shader(gl, &fragment_source, ShaderStage::Fragment)?;

    let program = gl::link_program(gl, &vertex, &fragment)?;
    log::info!("loaded program from {} + {}", paths.vertex, paths.fragment);
    Ok(program)
}
