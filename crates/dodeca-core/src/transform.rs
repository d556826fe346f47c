// Column-vector convention: `a * b` applies `b` first. Projection uses OpenGL
// clip space (depth -1..1); the GPU layer converts on upload.

use glam::{Mat4, Vec3};

use crate::constants::{FOVY_DEG, MODEL_TILT_X_DEG, Z_FAR, Z_NEAR};
use crate::state::{Camera, ViewState};

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_radians: FOVY_DEG.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_radians, aspect, self.znear, self.zfar)
    }
}

impl Camera {
    /// World to view space: yaw, then pitch, then the camera translation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw_deg.to_radians())
            * Mat4::from_rotation_x(self.pitch_deg.to_radians())
            * Mat4::from_translation(self.position)
    }
}

/// Constant presentation tilt between the object and the world.
#[inline]
pub fn model_tilt() -> Mat4 {
    Mat4::from_rotation_x(MODEL_TILT_X_DEG.to_radians())
}

/// Width over height of the drawable area. Degenerate sizes map to 1.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

impl ViewState {
    /// Scale followed by the X, Y, Z rotations (scale outermost). In orthogonal
    /// mode the horizontal scale is divided by `aspect` to undo the window
    /// stretch.
    pub fn object_matrix(&self, aspect: f32) -> Mat4 {
        let scale = if self.orthogonal {
            Vec3::new(self.scale / aspect, self.scale, self.scale)
        } else {
            Vec3::splat(self.scale)
        };
        let r = self.rotation_deg;
        Mat4::from_scale(scale)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
    }

    /// The matrix handed to the vertex shader for this frame.
    pub fn frame_matrix(&self, aspect: f32) -> Mat4 {
        let object = self.object_matrix(aspect);
        if self.orthogonal {
            return object;
        }
        Projection::default().matrix(aspect) * self.camera.view_matrix() * model_tilt() * object
    }
}
