use std::time::{Duration, Instant};

use crate::sim::{AttitudeState, RotationAxis};
use crate::time::Ticker;

use super::types::{Control, ControlEvent, ControlState};

/// Degrees applied per repeat step of a held directional control.
pub const STEP_DEGREES: i32 = 10;

/// Cadence of the held-control repeat.
pub const REPEAT_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
struct HeldAction {
    axis: RotationAxis,
    step: i32,
    ticker: Ticker,
}

/// Press-and-hold rotation controller.
///
/// At most one directional action repeats at a time:
/// - pressing a directional control arms it; the first step lands one full
///   period after the press, not at press time
/// - pressing another directional control replaces the current action before
///   its next step
/// - releasing anything stops the action
/// - `Reset` zeroes the orientation immediately and leaves a held action
///   running
/// - `Other` stops the action and does nothing else
///
/// The controller never looks at the clock itself; the runtime feeds `now`
/// into [`handle_event`](InputController::handle_event) and
/// [`poll`](InputController::poll).
#[derive(Debug, Clone, Default)]
pub struct InputController {
    active: Option<HeldAction>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a directional control is held.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Instant the next repeat step becomes due, while an action is held.
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|action| action.ticker.deadline())
    }

    /// Feeds one control edge.
    ///
    /// Reset writes the orientation here; directional steps are deferred to
    /// [`poll`](InputController::poll).
    pub fn handle_event(&mut self, event: ControlEvent, state: &mut AttitudeState, now: Instant) {
        match event.state {
            ControlState::Released => {
                self.active = None;
            }
            ControlState::Pressed => match event.control.rotation() {
                Some((axis, direction)) => {
                    self.active = Some(HeldAction {
                        axis,
                        step: direction * STEP_DEGREES,
                        ticker: Ticker::new(REPEAT_PERIOD, now),
                    });
                }
                None if event.control == Control::Reset => {
                    state.reset_orientation();
                }
                None => {
                    self.active = None;
                }
            },
        }
    }

    /// Applies every repeat step due by `now`.
    pub fn poll(&mut self, state: &mut AttitudeState, now: Instant) {
        if let Some(action) = self.active.as_mut() {
            for _ in 0..action.ticker.poll(now) {
                state.rotate(action.axis, action.step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (InputController, AttitudeState, Instant) {
        (InputController::new(), AttitudeState::new(), Instant::now())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── hold and repeat ───────────────────────────────────────────────────

    #[test]
    fn first_step_waits_one_full_period() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::RollLeft), &mut state, t0);
        assert_eq!(state.roll, 0);

        ctl.poll(&mut state, t0 + ms(99));
        assert_eq!(state.roll, 0);

        ctl.poll(&mut state, t0 + ms(100));
        assert_eq!(state.roll, 10);
    }

    #[test]
    fn three_ticks_of_roll_left_reach_thirty() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::RollLeft), &mut state, t0);
        for i in 1..=3 {
            ctl.poll(&mut state, t0 + ms(100 * i));
        }

        assert_eq!((state.pitch, state.yaw, state.roll), (0, 0, 30));

        ctl.handle_event(ControlEvent::released(Control::RollLeft), &mut state, t0 + ms(310));
        ctl.poll(&mut state, t0 + ms(1000));
        assert_eq!(state.roll, 30);
    }

    #[test]
    fn stalled_loop_catches_up_in_one_poll() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::PitchUp), &mut state, t0);
        ctl.poll(&mut state, t0 + ms(350));

        assert_eq!(state.pitch, 30);
    }

    #[test]
    fn directions_follow_their_sign() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::YawRight), &mut state, t0);
        ctl.poll(&mut state, t0 + ms(100));
        assert_eq!(state.yaw, -10);

        ctl.handle_event(ControlEvent::pressed(Control::PitchDown), &mut state, t0 + ms(100));
        ctl.poll(&mut state, t0 + ms(200));
        assert_eq!(state.pitch, -10);
    }

    // ── replacement and cancellation ──────────────────────────────────────

    #[test]
    fn new_press_replaces_the_held_action() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);
        ctl.poll(&mut state, t0 + ms(100));
        assert_eq!(state.yaw, 10);

        // Switch mid-hold: yaw must stop moving, pitch takes over.
        ctl.handle_event(ControlEvent::pressed(Control::PitchUp), &mut state, t0 + ms(150));
        ctl.poll(&mut state, t0 + ms(250));
        ctl.poll(&mut state, t0 + ms(350));

        assert_eq!(state.yaw, 10);
        assert_eq!(state.pitch, 20);
    }

    #[test]
    fn replacing_a_press_rearms_the_cadence() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);
        // Re-press at t0+50: the pending step at t0+100 is discarded.
        ctl.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0 + ms(50));

        ctl.poll(&mut state, t0 + ms(100));
        assert_eq!(state.yaw, 0);
        ctl.poll(&mut state, t0 + ms(150));
        assert_eq!(state.yaw, 10);
    }

    #[test]
    fn any_release_stops_the_action() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::RollRight), &mut state, t0);
        // Release of a different control still cancels.
        ctl.handle_event(ControlEvent::released(Control::Other), &mut state, t0 + ms(30));

        ctl.poll(&mut state, t0 + ms(500));
        assert_eq!(state.roll, 0);
        assert!(!ctl.is_active());
    }

    #[test]
    fn unrecognized_press_cancels() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);
        ctl.handle_event(ControlEvent::pressed(Control::Other), &mut state, t0 + ms(10));

        assert!(!ctl.is_active());
        ctl.poll(&mut state, t0 + ms(200));
        assert_eq!(state.yaw, 0);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_zeroes_orientation_immediately() {
        let (mut ctl, mut state, t0) = setup();
        state.pitch = 40;
        state.yaw = -90;
        state.roll = 120;
        state.spin = -50;

        ctl.handle_event(ControlEvent::pressed(Control::Reset), &mut state, t0);

        assert_eq!((state.pitch, state.yaw, state.roll), (0, 0, 0));
        assert_eq!(state.spin, -50);
    }

    #[test]
    fn reset_leaves_a_held_action_running() {
        let (mut ctl, mut state, t0) = setup();

        ctl.handle_event(ControlEvent::pressed(Control::RollLeft), &mut state, t0);
        ctl.poll(&mut state, t0 + ms(100));
        assert_eq!(state.roll, 10);

        ctl.handle_event(ControlEvent::pressed(Control::Reset), &mut state, t0 + ms(150));
        assert_eq!(state.roll, 0);
        assert!(ctl.is_active());

        // The held roll keeps stepping on its original cadence.
        ctl.poll(&mut state, t0 + ms(200));
        assert_eq!(state.roll, 10);
    }

    // ── deadlines ─────────────────────────────────────────────────────────

    #[test]
    fn deadline_tracks_the_held_action() {
        let (mut ctl, mut state, t0) = setup();
        assert_eq!(ctl.deadline(), None);

        ctl.handle_event(ControlEvent::pressed(Control::YawLeft), &mut state, t0);
        assert_eq!(ctl.deadline(), Some(t0 + REPEAT_PERIOD));

        ctl.handle_event(ControlEvent::released(Control::YawLeft), &mut state, t0 + ms(40));
        assert_eq!(ctl.deadline(), None);
    }
}
