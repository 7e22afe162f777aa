//! Flat vertex arrays for the demos, laid out for direct upload.

use std::f32::consts::TAU;

use glam::{Vec3, Vec4};

use crate::config::FanConfig;

/// Components per vertex in [`Mesh::positions`] (XYZ).
pub const POSITION_STRIDE: usize = 3;
/// Components per vertex in [`Mesh::colors`] (RGBA).
pub const COLOR_STRIDE: usize = 4;

/// Interleaving-free vertex data: one flat array per attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl Mesh {
    pub fn push(&mut self, position: Vec3, color: Vec4) {
        self.positions.extend_from_slice(&position.to_array());
        self.colors.extend_from_slice(&color.to_array());
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_STRIDE
    }

    pub fn append(&mut self, other: &Mesh) {
        self.positions.extend_from_slice(&other.positions);
        self.colors.extend_from_slice(&other.colors);
    }
}

// Colors of a fan triangle's centre, first rim and second rim vertex. Values
// above 1.0 are intentional; the fragment shader clamps.
const FAN_CENTRE: Vec4 = Vec4::new(1.2, 1.8, 0.4, 1.0);
const FAN_RIM: Vec4 = Vec4::new(0.0, 1.2, 0.2, 1.0);
const FAN_EDGE: Vec4 = Vec4::new(0.4, 0.8, 1.0, 0.5);
const FAN_EDGE_LAST: Vec4 = Vec4::new(0.4, 0.8, 1.0, 0.6);

/// A flat fan in the XY plane: `segments` triangles sharing the origin.
///
/// Every segment also carries the palette for three triangles, so the color
/// array runs three times as long as the position array needs. Only the
/// first `vertex_count()` colors are ever read by the draw call.
pub fn triangle_fan(config: &FanConfig) -> Mesh {
    let mut mesh = Mesh::default();
    let step = TAU / config.segments as f32;

    for i in 0..config.segments {
        let theta = config.offset_theta + step * i as f32;
        let next_theta = config.offset_theta + step * (i + 1) as f32;

        let rim = |t: f32| Vec3::new(t.cos() * config.radius, t.sin() * config.radius, 0.0);
        mesh.positions.extend_from_slice(&Vec3::ZERO.to_array());
        mesh.positions.extend_from_slice(&rim(theta).to_array());
        mesh.positions.extend_from_slice(&rim(next_theta).to_array());

        for triangle in 0..3 {
            let edge = if triangle == 2 { FAN_EDGE_LAST } else { FAN_EDGE };
            for color in [FAN_CENTRE, FAN_RIM, edge] {
                mesh.colors.extend_from_slice(&color.to_array());
            }
        }
    }

    mesh
}

/// Point cloud on a sphere: `rings` latitude circles of `per_ring` points.
pub fn globe_points(radius: f32, rings: u32, per_ring: u32, color: Vec4) -> Mesh {
    let mut mesh = Mesh::default();
    for ring in 1..rings {
        let polar = std::f32::consts::PI * ring as f32 / rings as f32;
        for j in 0..per_ring {
            let azimuth = TAU * j as f32 / per_ring as f32;
            let p = Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            );
            mesh.push(p * radius, color);
        }
    }
    mesh.push(Vec3::Y * radius, color);
    mesh.push(Vec3::NEG_Y * radius, color);
    mesh
}

/// Dart-shaped marker pointing along local +X with its fin along +Y.
pub fn arrow(length: f32, color: Vec4) -> Mesh {
    let mut mesh = Mesh::default();
    let nose = Vec3::new(length * 0.5, 0.0, 0.0);
    let tail = -length * 0.5;
    let wing = length * 0.4;
    let fin = length * 0.25;

    let triangles = [
        [nose, Vec3::new(tail, 0.0, wing), Vec3::new(tail, 0.0, -wing)],
        [nose, Vec3::new(tail, 0.0, 0.0), Vec3::new(tail, fin, 0.0)],
    ];
    for tri in triangles {
        for v in tri {
            mesh.push(v, color);
        }
    }
    mesh
}

/// Thin upright spike with its base at the origin and its tip at +Z.
pub fn spike(height: f32, width: f32, color: Vec4) -> Mesh {
    let mut mesh = Mesh::default();
    let half = width * 0.5;
    for v in [
        Vec3::new(-half, 0.0, 0.0),
        Vec3::new(half, 0.0, 0.0),
        Vec3::new(0.0, 0.0, height),
        Vec3::new(0.0, -half, 0.0),
        Vec3::new(0.0, half, 0.0),
        Vec3::new(0.0, 0.0, height),
    ] {
        mesh.push(v, color);
    }
    mesh
}

/// Copy of `mesh` with every position rotated then translated.
pub fn transformed(mesh: &Mesh, rotation: glam::Quat, translation: Vec3) -> Mesh {
    let positions = mesh
        .positions
        .chunks_exact(POSITION_STRIDE)
        .flat_map(|p| (rotation * Vec3::from_slice(p) + translation).to_array())
        .collect();
    Mesh {
        positions,
        colors: mesh.colors.clone(),
    }
}
