use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3, Vec4};
use sketch_wasm::camera::{Camera, Projection};
use sketch_wasm::clock::FrameClock;
use sketch_wasm::config::{CameraConfig, Demo, FanConfig, OrbitConfig};
use sketch_wasm::geometry::{self, COLOR_STRIDE, POSITION_STRIDE};
use sketch_wasm::orbit::{self, EarthSpin};
use sketch_wasm::shader::{ShaderPaths, ShaderStage};
use sketch_wasm::SketchError;

const EPS: f32 = 1e-5;

fn vertices(positions: &[f32]) -> Vec<Vec3> {
    positions
        .chunks_exact(POSITION_STRIDE)
        .map(Vec3::from_slice)
        .collect()
}

#[test]
fn fan_has_one_triangle_per_segment_around_the_origin() {
    let config = FanConfig::default();
    let mesh = geometry::triangle_fan(&config);

    assert_eq!(mesh.vertex_count(), 15);
    assert_eq!(mesh.positions.len(), 15 * POSITION_STRIDE);

    let verts = vertices(&mesh.positions);
    for tri in verts.chunks_exact(3) {
        assert_eq!(tri[0], Vec3::ZERO);
        assert!((tri[1].length() - config.radius).abs() < EPS);
        assert!((tri[2].length() - config.radius).abs() < EPS);
    }
    // First rim vertex sits straight up, and the fan closes on itself.
    assert!(verts[1].abs_diff_eq(Vec3::new(0.0, config.radius, 0.0), EPS));
    assert!(verts[14].abs_diff_eq(verts[1], EPS));
}

#[test]
fn fan_palette_covers_every_drawn_vertex() {
    let config = FanConfig {
        segments: 7,
        ..FanConfig::default()
    };
    let mesh = geometry::triangle_fan(&config);
    let colors: Vec<Vec4> = mesh
        .colors
        .chunks_exact(COLOR_STRIDE)
        .map(Vec4::from_slice)
        .collect();

    assert!(colors.len() >= mesh.vertex_count());
    assert_eq!(colors.len(), 7 * 9);
    assert_eq!(colors[0], Vec4::new(1.2, 1.8, 0.4, 1.0));
    assert_eq!(colors[2].w, 0.5);
    assert_eq!(colors[8].w, 0.6);
}

#[test]
fn fan_config_rejects_degenerate_fans() {
    let config = FanConfig {
        segments: 2,
        ..FanConfig::default()
    };
    assert!(matches!(config.validate(), Err(SketchError::InvalidConfig(_))));
    assert!(FanConfig::default().validate().is_ok());
    assert_eq!(FanConfig::default().offset_theta, FRAC_PI_2);
}

#[test]
fn globe_points_lie_on_the_sphere() {
    let mesh = geometry::globe_points(5.0, 6, 10, Vec4::ONE);
    assert_eq!(mesh.vertex_count(), 5 * 10 + 2);
    assert_eq!(mesh.colors.len(), mesh.vertex_count() * COLOR_STRIDE);
    for v in vertices(&mesh.positions) {
        assert!((v.length() - 5.0).abs() < 1e-4, "{v}");
    }
}

#[test]
fn arrow_points_along_local_x() {
    let mesh = geometry::arrow(1.0, Vec4::ONE);
    let verts = vertices(&mesh.positions);
    let nose = verts
        .iter()
        .copied()
        .max_by(|a, b| a.x.total_cmp(&b.x))
        .unwrap();
    assert_eq!(nose, Vec3::new(0.5, 0.0, 0.0));
    assert!(verts.iter().all(|v| v.x <= 0.5));
}

#[test]
fn markers_stand_on_the_surface_pointing_outward() {
    let radius = 5.0;
    let site = orbit::surface_point(60.0, 40.0, radius);
    let spike = geometry::spike(0.9, 0.3, Vec4::ONE);
    let placed = geometry::transformed(&spike, orbit::surface_orientation(site), site);

    let tip = vertices(&placed.positions)[2];
    let expected = site.normalize() * (radius + 0.9);
    assert!(tip.abs_diff_eq(expected, 1e-4), "{tip} vs {expected}");
    assert_eq!(placed.colors, spike.colors);
}

#[test]
fn surface_point_follows_the_polar_mapping() {
    assert!(orbit::surface_point(0.0, 0.0, 5.0).abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
    assert!(orbit::surface_point(90.0, 0.0, 5.0).abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));
    assert!(orbit::surface_point(90.0, 90.0, 5.0).abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), EPS));
    for (lat, lon) in sketch_wasm::config::SURFACE_SITES {
        let p = orbit::surface_point(*lat, *lon, 5.0);
        assert!((p.length() - 5.0).abs() < 1e-4);
    }
}

#[test]
fn moon_circles_at_a_fixed_distance() {
    let config = OrbitConfig::default();
    assert!(orbit::moon_position(0.0, &config).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
    for t in [0.5, 3.0, 17.25, 120.0] {
        let p = orbit::moon_position(t, &config);
        assert!((p.length() - config.moon_distance).abs() < 1e-4);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn moon_turns_with_its_orbit() {
    let config = OrbitConfig::default();
    let start = orbit::moon_rotation(0.0, &config);
    assert!(start.abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2), 1e-6));

    // A quarter orbit later the moon has also turned a quarter about Y.
    let quarter = orbit::moon_rotation(config.moon_period_scale * FRAC_PI_2, &config);
    assert!(quarter.abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2 * 2.0), 1e-5));

    // A full orbit brings it back to the same facing.
    let full = orbit::moon_rotation(config.moon_period_scale * TAU + 0.3, &config);
    let expected = orbit::moon_rotation(0.3, &config);
    assert!(full.abs_diff_eq(expected, 1e-4) || full.abs_diff_eq(-expected, 1e-4));
}

#[test]
fn earth_spin_accumulates_and_wraps() {
    let config = OrbitConfig::default();
    let mut spin = EarthSpin::default();
    spin.advance(&config);
    assert!((spin.angle - config.earth_spin).abs() < 1e-7);
    for _ in 0..5_000 {
        spin.advance(&config);
    }
    assert!(spin.angle >= 0.0 && spin.angle < TAU);
    assert!(spin.rotation().abs_diff_eq(Quat::from_rotation_y(spin.angle), 1e-6));
}

#[test]
fn resize_recomputes_aspect() {
    let config = CameraConfig::default();
    let mut projection = Projection::new(&config, 1920, 1080);
    assert!((projection.aspect - 16.0 / 9.0).abs() < EPS);

    projection.resize(1080, 1920);
    assert!((projection.aspect - 9.0 / 16.0).abs() < EPS);

    // Minimised windows report a zero height; keep the last usable aspect.
    projection.resize(800, 0);
    assert!((projection.aspect - 9.0 / 16.0).abs() < EPS);
}

#[test]
fn camera_centres_its_target() {
    let camera = Camera::new(&CameraConfig::default(), 1280, 720);
    let clip = camera.view_projection() * camera.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < EPS && ndc.y.abs() < EPS);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn clock_reports_seconds() {
    let clock = FrameClock::starting_at(1_000.0);
    assert_eq!(clock.elapsed_secs(1_000.0), 0.0);
    assert!((clock.elapsed_secs(3_500.0) - 2.5).abs() < EPS);
    assert_eq!(clock.elapsed_secs(500.0), 0.0);
}

#[test]
fn demo_names_parse_from_canvas_attribute() {
    assert_eq!("fan".parse::<Demo>().unwrap(), Demo::Fan);
    assert_eq!(" Flight ".parse::<Demo>().unwrap(), Demo::Flight);
    assert!(matches!(
        "cube".parse::<Demo>(),
        Err(SketchError::UnknownDemo(name)) if name == "cube"
    ));
}

#[test]
fn shader_paths_are_served_under_shader_dir() {
    let paths = Demo::Flight.shader_paths();
    assert_eq!(paths.path(ShaderStage::Vertex), "./shader/flight.vert");
    assert_eq!(paths.path(ShaderStage::Fragment), "./shader/flight.frag");
    assert_eq!(ShaderPaths::named("fan"), Demo::Fan.shader_paths());
    assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
}

#[test]
fn errors_carry_driver_diagnostics() {
    let err = SketchError::ShaderCompile {
        stage: ShaderStage::Vertex,
        log: "ERROR: 0:1: 'foo' : syntax error".into(),
    };
    assert_eq!(
        err.to_string(),
        "vertex shader failed to compile: ERROR: 0:1: 'foo' : syntax error"
    );
}
