use std::time::{Duration, Instant};

use gimbal_engine::glam::{Mat4, Vec3};
use gimbal_engine::input::{Control, ControlEvent, InputController, REPEAT_PERIOD};
use gimbal_engine::sim::AttitudeState;
use gimbal_engine::time::Ticker;
use gimbal_engine::view::{axis_model, plane_model, ViewKind, PLANE_SCALE};

// ---------------------------------------------------------------------------
// Hold → repeat → release, checked all the way down to the view matrices
// ---------------------------------------------------------------------------

#[test]
fn hold_roll_release_banks_the_scene_thirty_degrees() {
    let t0 = Instant::now();
    let mut state = AttitudeState::new();
    let mut controller = InputController::new();

    // Hold roll-left across three repeat periods, then let go.
    controller.handle_event(ControlEvent::pressed(Control::RollLeft), &mut state, t0);
    for i in 1..=3u32 {
        controller.poll(&mut state, t0 + REPEAT_PERIOD * i);
    }
    controller.handle_event(
        ControlEvent::released(Control::RollLeft),
        &mut state,
        t0 + Duration::from_millis(320),
    );

    assert_eq!((state.pitch, state.yaw, state.roll), (0, 0, 30));

    // Once released, time passing changes nothing.
    controller.poll(&mut state, t0 + Duration::from_secs(5));
    assert_eq!(state.roll, 30);

    // The side pane and the combined pane both show the bank.
    let expected = Mat4::from_rotation_z((-30.0f32).to_radians())
        * Mat4::from_scale(Vec3::splat(PLANE_SCALE));
    assert!(plane_model(ViewKind::SideRoll, &state).abs_diff_eq(expected, 1e-6));
    assert!(plane_model(ViewKind::Combined, &state).abs_diff_eq(expected, 1e-6));

    // The single-axis panes for the other two axes stay at rest.
    let at_rest = Mat4::from_scale(Vec3::splat(PLANE_SCALE));
    assert!(plane_model(ViewKind::TopYaw, &state).abs_diff_eq(at_rest, 1e-6));
    assert!(plane_model(ViewKind::FrontPitch, &state).abs_diff_eq(at_rest, 1e-6));
}

// ---------------------------------------------------------------------------
// Two timers on one clock: 100 ms input repeat, 50 ms frame tick
// ---------------------------------------------------------------------------

#[test]
fn spin_ticks_twice_per_input_step_on_a_shared_clock() {
    let t0 = Instant::now();
    let mut state = AttitudeState::new();
    let mut controller = InputController::new();
    let mut frame_tick = Ticker::new(Duration::from_millis(50), t0);

    controller.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);

    // Walk a shared clock in 10 ms slices for one second.
    for step in 1..=100u32 {
        let now = t0 + Duration::from_millis(10) * step;
        controller.poll(&mut state, now);
        for _ in 0..frame_tick.poll(now) {
            state.advance_spin();
        }
    }

    assert_eq!(state.yaw, 100); // 10 input steps of 10 degrees
    assert_eq!(state.spin, -200); // 20 frame ticks of -10 degrees
}

#[test]
fn reset_mid_hold_zeroes_orientation_but_not_spin() {
    let t0 = Instant::now();
    let mut state = AttitudeState::new();
    let mut controller = InputController::new();
    let mut frame_tick = Ticker::new(Duration::from_millis(50), t0);

    controller.handle_event(ControlEvent::pressed(Control::PitchUp), &mut state, t0);

    let walk = |from_ms: u64,
                to_ms: u64,
                controller: &mut InputController,
                state: &mut AttitudeState,
                frame_tick: &mut Ticker| {
        for ms in from_ms..=to_ms {
            let now = t0 + Duration::from_millis(ms);
            controller.poll(state, now);
            for _ in 0..frame_tick.poll(now) {
                state.advance_spin();
            }
        }
    };

    walk(1, 250, &mut controller, &mut state, &mut frame_tick);
    assert_eq!(state.pitch, 20);
    assert_eq!(state.spin, -50);

    controller.handle_event(
        ControlEvent::pressed(Control::Reset),
        &mut state,
        t0 + Duration::from_millis(250),
    );
    assert_eq!(state.pitch, 0);
    assert_eq!(state.spin, -50);

    // The hold survives the reset and keeps stepping on its own cadence.
    walk(251, 400, &mut controller, &mut state, &mut frame_tick);
    assert_eq!(state.pitch, 20);
    assert_eq!(state.spin, -80);
}

// ---------------------------------------------------------------------------
// Sequential holds on different axes compose in the combined pane
// ---------------------------------------------------------------------------

#[test]
fn combined_pane_composes_yaw_pitch_roll_in_order() {
    let t0 = Instant::now();
    let mut state = AttitudeState::new();
    let mut controller = InputController::new();
    let ms = Duration::from_millis(1);

    // Yaw left for two steps.
    controller.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);
    controller.poll(&mut state, t0 + ms * 100);
    controller.poll(&mut state, t0 + ms * 200);

    // Switch to pitch up for one step; the yaw hold is replaced.
    controller.handle_event(ControlEvent::pressed(Control::PitchUp), &mut state, t0 + ms * 200);
    controller.poll(&mut state, t0 + ms * 300);

    // Switch to roll right for one step.
    controller.handle_event(ControlEvent::pressed(Control::RollRight), &mut state, t0 + ms * 300);
    controller.poll(&mut state, t0 + ms * 400);

    controller.handle_event(
        ControlEvent::released(Control::RollRight),
        &mut state,
        t0 + ms * 450,
    );

    assert_eq!((state.pitch, state.yaw, state.roll), (10, 20, -10));

    let expected = Mat4::from_rotation_y((-20.0f32).to_radians())
        * Mat4::from_rotation_x((10.0f32).to_radians())
        * Mat4::from_rotation_z((10.0f32).to_radians());
    assert!(axis_model(ViewKind::Combined, &state).abs_diff_eq(expected, 1e-6));

    // Each single-axis pane isolates its own angle.
    let yaw_only = Mat4::from_rotation_y((-20.0f32).to_radians());
    assert!(axis_model(ViewKind::TopYaw, &state).abs_diff_eq(yaw_only, 1e-6));
}
