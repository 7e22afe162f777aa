use std::fmt;

use web_sys::WebGl2RenderingContext as GL;

/// Pipeline stage a piece of GLSL source is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The `gl.createShader` type enum for this stage.
    pub fn gl_kind(self) -> u32 {
        match self {
            Self::Vertex => GL::VERTEX_SHADER,
            Self::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Where a demo's shader sources are served from, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderPaths {
    /// `./shader/<name>.vert` and `./shader/<name>.frag`.
    pub fn named(name: &str) -> Self {
        Self {
            vertex: format!("./shader/{name}.vert"),
            fragment: format!("./shader/{name}.frag"),
        }
    }

    pub fn path(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}
