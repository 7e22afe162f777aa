//! Browser graphics sketches: a raw WebGL2 triangle-fan shader demo and a
//! globe demo where a body flies a constrained path over a sphere.
//!
//! The math, geometry and configuration modules are plain Rust and build on
//! every target; everything touching the DOM or WebGL lives in [`wasm`] and
//! only compiles for `wasm32`.

pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod flight;
pub mod geometry;
pub mod orbit;
pub mod shader;

pub use error::{Result, SketchError};

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{Demo, LogConfig};
    use crate::error::SketchError;

    mod fan;
    mod flight;
    pub mod gl;
    pub mod loader;
    pub mod render;

    /// Canvas the page is expected to provide.
    const CANVAS_ID: &str = "c";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second init (e.g. under the test harness) only fails because a
        // logger is already installed.
        console_log::init_with_level(LogConfig::default().level).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            log::warn!("no #{CANVAS_ID} canvas on this page, nothing to run");
            return Ok(());
        };

        let demo: Demo = match element.get_attribute("data-demo") {
            Some(name) => name.parse()?,
            None => Demo::default(),
        };
        let canvas = element
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SketchError::Js(format!("#{CANVAS_ID} is not a canvas")))?;

        log::info!("starting {demo:?} demo");
        wasm_bindgen_futures::spawn_local(async move {
            let started = match demo {
                Demo::Fan => fan::start(canvas).await,
                Demo::Flight => flight::start(canvas).await,
            };
            if let Err(err) = started {
                log::error!("{demo:?} demo failed to start: {err}");
            }
        });
        Ok(())
    }
}
