//! Constrained path follower: a body that flies over a sphere of fixed radius
//! and turns to face where it is going.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::config::FlightConfig;
use crate::error::Result;

/// Below this the cross product of two unit directions is treated as zero.
const PARALLEL_EPSILON: f32 = 1.0e-6;

/// Rotation turning the unit direction `from` onto the unit direction `to`,
/// derived from their cross product (axis) and dot product (angle).
///
/// Parallel inputs give the identity. Opposite inputs give a half turn about
/// an arbitrary axis orthogonal to `from`, since the cross product carries no
/// axis in that case.
pub fn incremental_rotation(from: Vec3, to: Vec3) -> Quat {
    let cos = from.dot(to).clamp(-1.0, 1.0);
    let axis = from.cross(to);
    let sin = axis.length();

    if sin <= PARALLEL_EPSILON {
        if cos > 0.0 {
            return Quat::IDENTITY;
        }
        return Quat::from_axis_angle(from.any_orthonormal_vector(), PI);
    }

    Quat::from_axis_angle(axis / sin, cos.acos())
}

/// Mutable per-instance state of the flying body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub position: Vec3,
    /// Unit heading.
    pub direction: Vec3,
    pub orientation: Quat,
}

impl FlightState {
    /// Places the body at `config.start_position()` heading along the
    /// normalized start direction, with an orientation whose local +X is
    /// that heading.
    pub fn new(config: &FlightConfig) -> Result<Self> {
        config.validate()?;
        let direction = config.start_direction.normalize();
        Ok(Self {
            position: config.start_position(),
            direction,
            orientation: Quat::from_rotation_arc(Vec3::X, direction),
        })
    }

    /// Advances one frame.
    ///
    /// The linear step `position + direction * speed` is projected back onto
    /// the sphere; the chord from the old to the new position becomes the new
    /// heading, and the turn between the two headings is composed onto the
    /// current orientation as `orientation * increment`.
    pub fn step(&mut self, config: &FlightConfig) {
        let prev_direction = self.direction;
        let prev_position = self.position;

        let stepped = prev_position + prev_direction * config.speed;
        if stepped.length_squared() == 0.0 {
            // Stepped through the origin; there is no point to project back.
            return;
        }
        let candidate = stepped.normalize() * config.radius;

        // A vanishing chord (zero speed) carries no heading; keep the old one.
        let chord = candidate - prev_position;
        if chord.length() > config.radius * PARALLEL_EPSILON {
            self.direction = chord.normalize();
        }
        self.position = candidate;

        let increment = incremental_rotation(prev_direction, self.direction);
        self.orientation = (self.orientation * increment).normalize();
    }

    /// Distance from the origin; equals the configured radius after any step.
    pub fn altitude(&self) -> f32 {
        self.position.length()
    }
}
