//! Error type shared by the bootstrap utility, the shader loader and the demos.

use wasm_bindgen::JsValue;

use crate::shader::ShaderStage;

pub type Result<T> = std::result::Result<T, SketchError>;

/// Every failure here is terminal for the demo instance that hit it.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    #[error("WebGL2 context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program failed to link: {log}")]
    ProgramLink { log: String },

    #[error("driver refused to create {0}")]
    ResourceCreation(&'static str),

    #[error("failed to load {path}: {reason}")]
    ResourceLoad { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown demo {0:?}")]
    UnknownDemo(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl SketchError {
    /// Wraps an arbitrary thrown JavaScript value.
    pub fn js(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<SketchError> for JsValue {
    fn from(err: SketchError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
