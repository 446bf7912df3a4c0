// Host-side tests for surface state, touch lifecycle and motion input.

use glam::Vec2;
use liquid_core::constants::GRAVITY_EARTH;
use liquid_core::{
    normalize_position, CardStyle, LiquidMotionState, LiquidSurfaceState, MotionController,
};

#[test]
fn defaults_match_card_and_sheet_presets() {
    let card = LiquidSurfaceState::default();
    assert_eq!(card.viscosity, 0.9);
    assert_eq!(card.corner_radius, 36.0);
    assert_eq!(LiquidSurfaceState::sheet().corner_radius, 48.0);
    assert!(!card.is_pressed());
}

#[test]
fn touch_lifecycle_sets_and_clears_pointer() {
    let size = Vec2::new(200.0, 100.0);
    let mut state = LiquidSurfaceState::default();
    state.drag(Vec2::new(10.0, 10.0), size);
    assert!(!state.is_pressed(), "drag without press is ignored");

    state.press(Vec2::new(50.0, 25.0), size);
    assert_eq!(state.touch_point, Some(Vec2::new(0.25, 0.25)));
    assert_eq!(state.touch_strength, 0.6);

    state.drag(Vec2::new(100.0, 50.0), size);
    assert_eq!(state.touch_point, Some(Vec2::new(0.5, 0.5)));

    state.release();
    assert_eq!(state.touch_point, None);
    assert_eq!(state.touch_strength, 0.0);
}

#[test]
fn zero_sized_surface_normalises_to_origin() {
    assert_eq!(normalize_position(Vec2::new(30.0, 40.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(normalize_position(Vec2::new(30.0, 40.0), Vec2::new(0.0, 5.0)), Vec2::ZERO);
}

#[test]
fn motion_state_is_clamped() {
    let m = LiquidMotionState::new(Vec2::new(3.0, -7.0));
    assert_eq!(m.accel, Vec2::new(1.0, -1.0));
}

#[test]
fn controller_normalises_and_inverts_x() {
    let ctrl = MotionController::new();
    ctrl.start();
    ctrl.on_sensor_changed(GRAVITY_EARTH * 0.5, GRAVITY_EARTH * 0.25, GRAVITY_EARTH);
    let accel = ctrl.snapshot().accel;
    assert!((accel - Vec2::new(-0.5, 0.25)).length() < 1e-6, "{accel:?}");

    ctrl.on_sensor_changed(GRAVITY_EARTH * 4.0, 0.0, 0.0);
    assert_eq!(ctrl.snapshot().accel, Vec2::new(-1.0, 0.0));
}

#[test]
fn stopped_controller_ignores_samples_and_keeps_last() {
    let ctrl = MotionController::new();
    ctrl.on_sensor_changed(5.0, 5.0, 0.0);
    assert_eq!(ctrl.snapshot(), LiquidMotionState::default());

    ctrl.start();
    ctrl.on_sensor_changed(0.0, GRAVITY_EARTH, 0.0);
    ctrl.stop();
    assert!(!ctrl.is_running());
    ctrl.on_sensor_changed(0.0, -GRAVITY_EARTH, 0.0);
    assert_eq!(ctrl.snapshot().accel, Vec2::new(0.0, 1.0));
}

#[test]
fn controller_accepts_samples_from_another_thread() {
    let ctrl = MotionController::new();
    ctrl.start();
    let sensor = ctrl.clone();
    std::thread::spawn(move || sensor.on_sensor_changed(-GRAVITY_EARTH, 0.0, 0.0))
        .join()
        .expect("sensor thread");
    assert_eq!(ctrl.snapshot().accel, Vec2::new(1.0, 0.0));
}

#[test]
fn surface_state_feeds_distortion_params() {
    let mut state = LiquidSurfaceState::new(0.95, 32.0);
    state.press(Vec2::new(20.0, 10.0), Vec2::new(40.0, 20.0));
    let params = state.distortion(LiquidMotionState::new(Vec2::new(0.2, -0.1)));
    assert_eq!(params.viscosity, 0.95);
    assert_eq!(params.effective_touch_point(), Vec2::new(0.5, 0.5));
    assert_eq!(params.accel, Vec2::new(0.2, -0.1));
}

#[test]
fn card_style_overrides_container_only() {
    let style = CardStyle::default().with_container_color([0.1, 0.2, 0.3, 1.0]);
    assert_eq!(style.container_color, [0.1, 0.2, 0.3, 1.0]);
    assert_eq!(style.border_color, CardStyle::default().border_color);
}
