use glam::Vec3;

use crate::constants::*;
use crate::input::{Action, InputSnapshot};

/// Free-fly camera without roll. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::from(DEFAULT_CAMERA_POSITION),
            yaw_deg: 0.0,
            pitch_deg: 0.0,
        }
    }
}

impl Camera {
    /// Move by `step` along the yaw-rotated forward axis (negative is backwards).
    pub fn advance(&mut self, step: f32) {
        let yaw = self.yaw_deg.to_radians();
        self.position.x -= step * yaw.sin();
        self.position.z += step * yaw.cos();
    }

    /// Move by `step` along the yaw-rotated right axis (negative is left).
    pub fn strafe(&mut self, step: f32) {
        let yaw = self.yaw_deg.to_radians();
        self.position.x -= step * yaw.cos();
        self.position.z -= step * yaw.sin();
    }

    /// Change pitch unless the result would leave ±[`CAMERA_PITCH_LIMIT_DEG`].
    pub fn tilt(&mut self, delta_deg: f32) {
        self.pitch_deg = revert_if(self.pitch_deg, self.pitch_deg + delta_deg, |p| {
            p.abs() > CAMERA_PITCH_LIMIT_DEG
        });
    }

    pub fn turn(&mut self, delta_deg: f32) {
        self.yaw_deg += delta_deg;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Object rotation about X, Y, Z in degrees.
    pub rotation_deg: Vec3,
    /// Uniform object scale, never negative.
    pub scale: f32,
    pub camera: Camera,
    /// Draw straight into clip space, skipping camera and projection.
    pub orthogonal: bool,
    /// Outline every triangle instead of just the pentagon perimeters.
    pub show_triangles: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_deg: Vec3::ZERO,
            scale: DEFAULT_SCALE,
            camera: Camera::default(),
            orthogonal: false,
            show_triangles: false,
        }
    }
}

impl ViewState {
    pub fn updated(&self, input: &InputSnapshot) -> Self {
        update(self, input)
    }

    /// Change the scale unless the result would be negative.
    pub fn rescale(&mut self, scroll_delta: f32) {
        self.scale = revert_if(self.scale, self.scale + scroll_delta * SCROLL_SCALE_STEP, |s| {
            s < 0.0
        });
    }
}

/// Bounded values are never clamped to the bound: a step that would cross it
/// is dropped and the previous value kept.
#[inline]
fn revert_if(current: f32, next: f32, out_of_bounds: impl Fn(f32) -> bool) -> f32 {
    if out_of_bounds(next) {
        current
    } else {
        next
    }
}

#[inline]
fn axis(input: &InputSnapshot, pos: Action, neg: Action) -> [bool; 2] {
    [input.is_held(pos), input.is_held(neg)]
}

/// Apply one frame of input to `state`.
pub fn update(state: &ViewState, input: &InputSnapshot) -> ViewState {
    let mut next = *state;

    // Object rotation
    let rotations = [
        (Action::RotateXPos, Action::RotateXNeg),
        (Action::RotateYPos, Action::RotateYNeg),
        (Action::RotateZPos, Action::RotateZNeg),
    ];
    for (i, (pos, neg)) in rotations.into_iter().enumerate() {
        let [up, down] = axis(input, pos, neg);
        if up {
            next.rotation_deg[i] += ROTATE_STEP_DEG;
        }
        if down {
            next.rotation_deg[i] -= ROTATE_STEP_DEG;
        }
    }

    // Translation relative to the current facing
    if input.is_held(Action::MoveForward) {
        next.camera.advance(CAMERA_MOVE_STEP);
    }
    if input.is_held(Action::MoveBackward) {
        next.camera.advance(-CAMERA_MOVE_STEP);
    }
    if input.is_held(Action::MoveRight) {
        next.camera.strafe(CAMERA_MOVE_STEP);
    }
    if input.is_held(Action::MoveLeft) {
        next.camera.strafe(-CAMERA_MOVE_STEP);
    }

    if input.is_held(Action::LookUp) {
        next.camera.tilt(CAMERA_PITCH_STEP_DEG);
    }
    if input.is_held(Action::LookDown) {
        next.camera.tilt(-CAMERA_PITCH_STEP_DEG);
    }
    if input.is_held(Action::LookLeft) {
        next.camera.turn(CAMERA_YAW_STEP_DEG);
    }
    if input.is_held(Action::LookRight) {
        next.camera.turn(-CAMERA_YAW_STEP_DEG);
    }

    if input.scroll_delta != 0.0 {
        next.rescale(input.scroll_delta);
    }

    if input.was_pressed(Action::ToggleOrthogonal) {
        next.orthogonal = !next.orthogonal;
        log::info!("[view] orthogonal mode {}", on_off(next.orthogonal));
    }
    if input.was_pressed(Action::ToggleTriangles) {
        next.show_triangles = !next.show_triangles;
        log::info!("[view] triangle wireframe {}", on_off(next.show_triangles));
    }

    if next != *state {
        log::trace!("[view] {:?}", next);
    }
    next
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
