//! Hand-written shader demo: a colored triangle fan animated by a `time`
//! uniform.

use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlUniformLocation,
};

use super::{gl, loader, render};
use crate::clock::FrameClock;
use crate::config::{Demo, FanConfig};
use crate::error::{Result, SketchError};
use crate::geometry::{self, COLOR_STRIDE, POSITION_STRIDE};

struct FanScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    time: Option<WebGlUniformLocation>,
    vertex_count: i32,
    clock: FrameClock,
    config: FanConfig,
}

impl FanScene {
    fn frame(&mut self) -> Result<()> {
        let gl = &self.gl;
        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        let c = self.config.clear_color;
        gl.clear_color(c.x, c.y, c.z, c.w);
        gl.clear(GL::COLOR_BUFFER_BIT);

        let elapsed = self.clock.elapsed_secs(render::now_ms()?);
        gl.use_program(Some(&self.program));
        gl.uniform1f(self.time.as_ref(), elapsed);
        gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
        Ok(())
    }
}

pub async fn start(canvas: HtmlCanvasElement) -> Result<()> {
    let config = FanConfig::default();
    config.validate()?;

    let context = gl::create_context(&canvas)?;

    // Square canvas fitted to the smaller window dimension.
    let win = web_sys::window().ok_or_else(|| SketchError::Js("no window".into()))?;
    let (w, h) = render::inner_size(&win)?;
    let size = w.min(h);
    canvas.set_width(size);
    canvas.set_height(size);

    let program = loader::load_program(&context, &Demo::Fan.shader_paths()).await?;

    let mesh = geometry::triangle_fan(&config);
    let positions = gl::upload_vertex_data(&context, &mesh.positions)?;
    let colors = gl::upload_vertex_data(&context, &mesh.colors)?;

    let position_location = gl::attribute_location(&context, &program, "position")?;
    let color_location = gl::attribute_location(&context, &program, "color")?;
    gl::bind_attribute(&context, &positions, position_location, POSITION_STRIDE);
    gl::bind_attribute(&context, &colors, color_location, COLOR_STRIDE);

    let time = context.get_uniform_location(&program, "time");

    let mut scene = FanScene {
        gl: context,
        canvas,
        program,
        time,
        vertex_count: mesh.vertex_count() as i32,
        clock: FrameClock::starting_at(render::now_ms()?),
        config,
    };
    log::info!("fan ready: {} vertices", scene.vertex_count);
    render::run_forever(move || scene.frame())
}
