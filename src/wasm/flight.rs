//! Globe demo: a spinning point-cloud earth with surface markers, an orbiting
//! moon, and a dart flying a fixed-altitude path around it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec4};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlUniformLocation,
};

use super::{gl, loader, render};
use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::config::{CameraConfig, Demo, FlightConfig, OrbitConfig, SURFACE_SITES};
use crate::error::Result;
use crate::flight::FlightState;
use crate::geometry::{self, Mesh, COLOR_STRIDE, POSITION_STRIDE};
use crate::orbit::{self, EarthSpin};

const EARTH_COLOR: Vec4 = Vec4::new(0.0, 0.45, 0.87, 1.0);
const MARKER_COLOR: Vec4 = Vec4::new(0.2, 0.91, 0.19, 1.0);
const MOON_COLOR: Vec4 = Vec4::new(0.47, 0.55, 0.64, 1.0);
const BODY_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Vertex data resident on the GPU plus how to draw it.
struct GpuMesh {
    positions: WebGlBuffer,
    colors: WebGlBuffer,
    count: i32,
    mode: u32,
    point_size: f32,
}

impl GpuMesh {
    fn upload(context: &GL, mesh: &Mesh, mode: u32, point_size: f32) -> Result<Self> {
        Ok(Self {
            positions: gl::upload_vertex_data(context, &mesh.positions)?,
            colors: gl::upload_vertex_data(context, &mesh.colors)?,
            count: mesh.vertex_count() as i32,
            mode,
            point_size,
        })
    }
}

struct Locations {
    position: u32,
    color: u32,
    mvp: Option<WebGlUniformLocation>,
    point_size: Option<WebGlUniformLocation>,
}

struct FlightScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    locations: Locations,
    globe: GpuMesh,
    markers: GpuMesh,
    moon: GpuMesh,
    body: GpuMesh,
    camera: Camera,
    clock: FrameClock,
    camera_config: CameraConfig,
    flight_config: FlightConfig,
    orbit_config: OrbitConfig,
    spin: EarthSpin,
    state: FlightState,
}

impl FlightScene {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.camera.projection.resize(width, height);
    }

    fn draw(&self, mesh: &GpuMesh, model: Mat4, view_projection: Mat4) {
        let gl = &self.gl;
        gl::bind_attribute(gl, &mesh.positions, self.locations.position, POSITION_STRIDE);
        gl::bind_attribute(gl, &mesh.colors, self.locations.color, COLOR_STRIDE);
        let mvp = view_projection * model;
        gl.uniform_matrix4fv_with_f32_array(
            self.locations.mvp.as_ref(),
            false,
            &mvp.to_cols_array(),
        );
        gl.uniform1f(self.locations.point_size.as_ref(), mesh.point_size);
        gl.draw_arrays(mesh.mode, 0, mesh.count);
    }

    fn frame(&mut self) -> Result<()> {
        let elapsed = self.clock.elapsed_secs(render::now_ms()?);
        self.spin.advance(&self.orbit_config);
        self.state.step(&self.flight_config);
        let moon = Mat4::from_rotation_translation(
            orbit::moon_rotation(elapsed, &self.orbit_config),
            orbit::moon_position(elapsed, &self.orbit_config),
        );

        let gl = &self.gl;
        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        let c = self.camera_config.clear_color;
        gl.clear_color(c.x, c.y, c.z, c.w);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));

        let view_projection = self.camera.view_projection();
        let earth = Mat4::from_quat(self.spin.rotation());
        self.draw(&self.globe, earth, view_projection);
        self.draw(&self.markers, earth, view_projection);
        self.draw(&self.moon, moon, view_projection);
        self.draw(
            &self.body,
            Mat4::from_rotation_translation(self.state.orientation, self.state.position),
            view_projection,
        );
        Ok(())
    }
}

fn surface_markers(radius: f32) -> Mesh {
    let spike = geometry::spike(0.9, 0.3, MARKER_COLOR);
    let mut markers = Mesh::default();
    for &(lat, lon) in SURFACE_SITES {
        let site = orbit::surface_point(lat, lon, radius);
        markers.append(&geometry::transformed(&spike, orbit::surface_orientation(site), site));
    }
    markers
}

pub async fn start(canvas: HtmlCanvasElement) -> Result<()> {
    let camera_config = CameraConfig::default();
    let flight_config = FlightConfig::default();
    let orbit_config = OrbitConfig::default();
    let state = FlightState::new(&flight_config)?;

    let context = gl::create_context(&canvas)?;
    let program = loader::load_program(&context, &Demo::Flight.shader_paths()).await?;
    context.enable(GL::DEPTH_TEST);

    let locations = Locations {
        position: gl::attribute_location(&context, &program, "position")?,
        color: gl::attribute_location(&context, &program, "color")?,
        mvp: context.get_uniform_location(&program, "mvp"),
        point_size: context.get_uniform_location(&program, "pointSize"),
    };

    let globe = geometry::globe_points(orbit_config.earth_radius, 24, 48, EARTH_COLOR);
    let markers = surface_markers(orbit_config.earth_radius);
    let moon = geometry::globe_points(orbit_config.earth_radius * 0.3, 8, 16, MOON_COLOR);
    let body = geometry::arrow(0.8, BODY_COLOR);
    let scene = FlightScene {
        globe: GpuMesh::upload(&context, &globe, GL::POINTS, 2.0)?,
        markers: GpuMesh::upload(&context, &markers, GL::TRIANGLES, 1.0)?,
        moon: GpuMesh::upload(&context, &moon, GL::POINTS, 2.0)?,
        body: GpuMesh::upload(&context, &body, GL::TRIANGLES, 1.0)?,
        camera: Camera::new(&camera_config, canvas.width(), canvas.height()),
        clock: FrameClock::starting_at(render::now_ms()?),
        gl: context,
        canvas,
        program,
        locations,
        camera_config,
        flight_config,
        orbit_config,
        spin: EarthSpin::default(),
        state,
    };
    log::info!(
        "flight ready: body at {} heading {}",
        scene.state.position,
        scene.state.direction
    );

    let scene = Rc::new(RefCell::new(scene));
    {
        let scene = scene.clone();
        render::track_window_size(move |w, h| scene.borrow_mut().resize(w, h))?;
    }
    render::run_forever(move || scene.borrow_mut().frame())
}
