//! Typed parameter bundles for the demos.
//!
//! Every demo reads its constants from one of these structs instead of
//! scattering literals through the render code. `Default` carries the values
//! the sketches were tuned with.

use std::f32::consts::FRAC_PI_2;
use std::str::FromStr;

use glam::{Vec3, Vec4};

use crate::error::{Result, SketchError};
use crate::shader::ShaderPaths;

/// Which sketch a canvas hosts, read from its `data-demo` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Fan,
    Flight,
}

impl Demo {
    pub fn shader_paths(self) -> ShaderPaths {
        match self {
            Self::Fan => ShaderPaths::named("fan"),
            Self::Flight => ShaderPaths::named("flight"),
        }
    }
}

impl FromStr for Demo {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fan" => Ok(Self::Fan),
            "flight" => Ok(Self::Flight),
            other => Err(SketchError::UnknownDemo(other.to_string())),
        }
    }
}

/// Smallest share of the start heading that must run along the sphere.
const MIN_TANGENT: f32 = 1.0e-3;

/// Body travelling over the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightConfig {
    /// Length of the linear step taken each frame before projecting back
    /// onto the sphere.
    pub speed: f32,
    /// Distance from the origin the body is held at.
    pub radius: f32,
    pub start_direction: Vec3,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            speed: 0.025,
            radius: 5.3,
            start_direction: Vec3::new(1.0, 1.0, 0.0),
        }
    }
}

impl FlightConfig {
    /// The body starts straight "up" from the origin.
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(0.0, self.radius, 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "flight radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "flight speed must be non-negative, got {}",
                self.speed
            )));
        }
        if self.speed >= 2.0 * self.radius {
            return Err(SketchError::InvalidConfig(format!(
                "flight speed {} must stay below twice the radius {}",
                self.speed, self.radius
            )));
        }
        if !self.start_direction.is_finite() || self.start_direction.length_squared() == 0.0 {
            return Err(SketchError::InvalidConfig(
                "flight start direction must be a non-zero vector".into(),
            ));
        }
        // A purely radial heading never leaves the start point.
        let up = self.start_position().normalize();
        let direction = self.start_direction.normalize();
        let tangent = direction - up * direction.dot(up);
        if tangent.length() < MIN_TANGENT {
            return Err(SketchError::InvalidConfig(format!(
                "flight start direction {} has no component along the sphere",
                self.start_direction
            )));
        }
        Ok(())
    }
}

/// Triangle fan drawn by the raw shader demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanConfig {
    pub segments: u32,
    pub radius: f32,
    /// Angle of the first rim vertex, in radians.
    pub offset_theta: f32,
    pub clear_color: Vec4,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            segments: 5,
            radius: 0.5,
            offset_theta: FRAC_PI_2,
            clear_color: Vec4::new(0.3, 0.3, 0.3, 1.0),
        }
    }
}

impl FanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.segments < 3 {
            return Err(SketchError::InvalidConfig(format!(
                "a fan needs at least 3 segments, got {}",
                self.segments
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "fan radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub fovy_deg: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub clear_color: Vec4,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy_deg: 60.0,
            near: 0.1,
            far: 200.0,
            eye: Vec3::new(10.0, 10.0, -10.0),
            target: Vec3::ZERO,
            clear_color: Vec4::new(0.13, 0.13, 0.13, 1.0),
        }
    }
}

/// Latitude/longitude pairs (degrees) of the markers planted on the globe.
pub const SURFACE_SITES: &[(f32, f32)] = &[
    (30.0, 140.0),
    (40.0, 140.0),
    (60.0, 40.0),
    (60.0, 50.0),
    (70.0, 40.0),
    (70.0, -10.0),
    (75.0, -20.0),
    (-80.0, 40.0),
    (-80.0, 50.0),
    (-60.0, 50.0),
    (160.0, 160.0),
    (170.0, 180.0),
    (180.0, 160.0),
    (160.0, 180.0),
    (90.0, 180.0),
    (100.0, 180.0),
    (230.0, 230.0),
    (240.0, 220.0),
    (240.0, 250.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub earth_radius: f32,
    /// Radians the globe turns about +Y every frame.
    pub earth_spin: f32,
    pub moon_distance: f32,
    /// Elapsed seconds are divided by this before driving the moon.
    pub moon_period_scale: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            earth_radius: 5.0,
            earth_spin: 0.005,
            moon_distance: 10.0,
            moon_period_scale: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: log::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: log::Level::Info,
        }
    }
}
