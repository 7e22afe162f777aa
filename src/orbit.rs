//! Globe and moon motion for the flight demo.

use glam::{Quat, Vec3};

use crate::config::OrbitConfig;

/// Point on a sphere of `radius` for a site given in degrees.
///
/// `lat_deg` is measured from the +Z pole, so 0° sits on +Z and 90° on the
/// XY plane; `lon_deg` turns about Z starting at +X.
pub fn surface_point(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    Vec3::new(
        radius * lat.sin() * lon.cos(),
        radius * lat.sin() * lon.sin(),
        radius * lat.cos(),
    )
}

/// Rotation that stands an object modelled along +Z upright at `point`.
pub fn surface_orientation(point: Vec3) -> Quat {
    Quat::from_rotation_arc(Vec3::Z, point.normalize_or_zero())
}

/// Moon centre after `elapsed` seconds; circles the Y axis in the XZ plane.
pub fn moon_position(elapsed: f32, config: &OrbitConfig) -> Vec3 {
    let t = elapsed / config.moon_period_scale;
    Vec3::new(t.sin(), 0.0, t.cos()) * config.moon_distance
}

/// Moon spin about +Y, locked to its orbital phase and offset a quarter turn.
pub fn moon_rotation(elapsed: f32, config: &OrbitConfig) -> Quat {
    let phase = (elapsed / config.moon_period_scale) % std::f32::consts::TAU;
    Quat::from_rotation_y(phase + std::f32::consts::FRAC_PI_2)
}

/// Accumulated spin of the globe about +Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EarthSpin {
    pub angle: f32,
}

impl EarthSpin {
    pub fn advance(&mut self, config: &OrbitConfig) {
        self.angle = (self.angle + config.earth_spin) % std::f32::consts::TAU;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}
