//! Perspective camera whose aspect ratio follows the canvas.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fovy_deg: config.fovy_deg,
            aspect: 1.0,
            near: config.near,
            far: config.far,
        };
        projection.resize(width, height);
        projection
    }

    /// Recomputes the aspect ratio for a new drawing-buffer size. A zero
    /// height (minimised window) keeps the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Camera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        Self {
            eye: config.eye,
            target: config.target,
            up: Vec3::Y,
            projection: Projection::new(config, width, height),
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.view()
    }
}
