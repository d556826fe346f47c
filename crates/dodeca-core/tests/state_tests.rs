// Host-side tests for the per-frame view state update.

use dodeca_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// Snapshot with `actions` held since an earlier frame (no fresh presses).
fn holding(actions: &[Action]) -> InputSnapshot {
    let mut t = InputTracker::new();
    for a in actions {
        t.key(*a, true, false);
    }
    let _ = t.snapshot();
    t.snapshot()
}

// Snapshot for the frame in which `actions` went down.
fn pressing(actions: &[Action]) -> InputSnapshot {
    let mut t = InputTracker::new();
    for a in actions {
        t.key(*a, true, false);
    }
    t.snapshot()
}

fn scrolled(lines: f32) -> InputSnapshot {
    let mut t = InputTracker::new();
    t.scroll(lines);
    t.snapshot()
}

fn frames(state: ViewState, input: &InputSnapshot, n: usize) -> ViewState {
    (0..n).fold(state, |s, _| update(&s, input))
}

#[test]
fn defaults_match_startup_values() {
    let s = ViewState::default();
    assert_eq!(s.scale, 0.4);
    assert_eq!(s.rotation_deg, glam::Vec3::ZERO);
    assert_eq!(s.camera.position, glam::Vec3::new(0.0, 0.0, -3.0));
    assert_eq!(s.camera.yaw_deg, 0.0);
    assert_eq!(s.camera.pitch_deg, 0.0);
    assert!(!s.orthogonal);
    assert!(!s.show_triangles);
}

#[test]
fn empty_input_changes_nothing() {
    let s = ViewState::default();
    assert_eq!(update(&s, &InputSnapshot::default()), s);
}

#[test]
fn rotate_z_positive_only_touches_z_angle() {
    let s = ViewState::default();
    let next = update(&s, &holding(&[Action::RotateZPos]));
    assert_eq!(next.rotation_deg.z, 3.0);
    let expected = ViewState {
        rotation_deg: glam::Vec3::new(0.0, 0.0, 3.0),
        ..s
    };
    assert_eq!(next, expected);
}

#[test]
fn rotation_keys_step_three_degrees_per_frame() {
    let s = ViewState::default();
    let input = holding(&[Action::RotateXPos, Action::RotateYNeg]);
    let next = frames(s, &input, 4);
    assert_eq!(next.rotation_deg, glam::Vec3::new(12.0, -12.0, 0.0));

    // opposing keys cancel
    let both = holding(&[Action::RotateZPos, Action::RotateZNeg]);
    assert_eq!(update(&s, &both).rotation_deg.z, 0.0);
}

#[test]
fn rotation_does_not_wrap() {
    let s = frames(
        ViewState::default(),
        &holding(&[Action::RotateYPos]),
        200,
    );
    assert_eq!(s.rotation_deg.y, 600.0);
}

#[test]
fn forward_moves_along_facing_direction() {
    let s = ViewState::default();
    let next = update(&s, &holding(&[Action::MoveForward]));
    assert!(approx(next.camera.position.x, 0.0));
    assert!(approx(next.camera.position.z, -2.9));

    let back = update(&next, &holding(&[Action::MoveBackward]));
    assert!(approx(back.camera.position.z, -3.0));
}

#[test]
fn strafing_uses_yaw_rotated_right_axis() {
    let mut s = ViewState::default();
    s.camera.yaw_deg = 90.0;

    let right = update(&s, &holding(&[Action::MoveRight]));
    assert!(approx(right.camera.position.x, 0.0));
    assert!(approx(right.camera.position.z, -3.1));

    let fwd = update(&s, &holding(&[Action::MoveForward]));
    assert!(approx(fwd.camera.position.x, -0.1));
    assert!(approx(fwd.camera.position.z, -3.0));

    let left = update(&ViewState::default(), &holding(&[Action::MoveLeft]));
    assert!(approx(left.camera.position.x, 0.1));
    assert!(approx(left.camera.position.z, -3.0));
}

#[test]
fn movement_uses_yaw_from_before_the_turn() {
    let s = ViewState::default();
    let next = update(
        &s,
        &holding(&[Action::MoveForward, Action::LookLeft]),
    );
    assert_eq!(next.camera.yaw_deg, 5.0);
    assert!(approx(next.camera.position.x, 0.0));
    assert!(approx(next.camera.position.z, -2.9));
}

#[test]
fn yaw_is_unclamped() {
    let s = frames(
        ViewState::default(),
        &holding(&[Action::LookRight]),
        80,
    );
    assert_eq!(s.camera.yaw_deg, -400.0);
}

#[test]
fn pitch_reaches_the_limit_and_stays_there() {
    let up = frames(
        ViewState::default(),
        &holding(&[Action::LookUp]),
        40,
    );
    assert_eq!(up.camera.pitch_deg, 90.0);

    let down = frames(up, &holding(&[Action::LookDown]), 100);
    assert_eq!(down.camera.pitch_deg, -90.0);
}

#[test]
fn pitch_decrease_at_lower_bound_is_reverted() {
    let mut s = ViewState::default();
    s.camera.pitch_deg = -90.0;
    let next = update(&s, &holding(&[Action::LookDown]));
    assert_eq!(next.camera.pitch_deg, -90.0);
}

#[test]
fn pitch_step_crossing_the_bound_is_dropped_not_clamped() {
    let mut s = ViewState::default();
    s.camera.pitch_deg = 88.5;
    let next = update(&s, &holding(&[Action::LookUp]));
    assert_eq!(next.camera.pitch_deg, 88.5);
}

#[test]
fn zero_scroll_keeps_scale() {
    let s = ViewState::default();
    assert_eq!(update(&s, &scrolled(0.0)).scale, s.scale);
}

#[test]
fn scroll_adjusts_scale() {
    let s = ViewState::default();
    let up = update(&s, &scrolled(5.0));
    assert!(approx(up.scale, 0.5));
    let down = update(&s, &scrolled(-10.0));
    assert!(approx(down.scale, 0.2));
}

#[test]
fn scroll_below_zero_is_reverted() {
    let s = ViewState::default();
    let next = update(&s, &scrolled(-25.0));
    assert_eq!(next.scale, 0.4);
}

#[test]
fn scroll_to_exactly_zero_is_allowed() {
    let mut s = ViewState::default();
    s.scale = 0.5;
    let next = update(&s, &scrolled(-25.0));
    assert!(next.scale >= 0.0);
    assert!(approx(next.scale, 0.0));
}

#[test]
fn toggles_flip_on_press_only() {
    let s = ViewState::default();
    let pressed = update(&s, &pressing(&[Action::ToggleOrthogonal]));
    assert!(pressed.orthogonal);
    assert!(!pressed.show_triangles);

    // still held on later frames: no further flips
    let held = frames(
        pressed,
        &holding(&[Action::ToggleOrthogonal]),
        10,
    );
    assert!(held.orthogonal);

    let again = update(&held, &pressing(&[Action::ToggleTriangles]));
    assert!(again.orthogonal);
    assert!(again.show_triangles);
}

#[test]
fn updated_is_update() {
    let s = ViewState::default();
    let input = holding(&[Action::RotateXNeg, Action::LookUp]);
    assert_eq!(s.updated(&input), update(&s, &input));
}
