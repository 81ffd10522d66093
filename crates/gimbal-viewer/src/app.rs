use std::time::{Duration, Instant};

use gimbal_engine::core::{App, AppControl, FrameCtx, Wake};
use gimbal_engine::geometry::SceneMeshes;
use gimbal_engine::input::{ControlEvent, InputController};
use gimbal_engine::render::SceneRenderer;
use gimbal_engine::sim::AttitudeState;
use gimbal_engine::time::Ticker;

/// Propeller + redraw cadence. Runs for the lifetime of the app.
const FRAME_PERIOD: Duration = Duration::from_millis(50);

/// The viewer application: one attitude state, one held-control tracker,
/// one frame ticker, and the four-pane renderer.
pub struct GimbalApp {
    state: AttitudeState,
    controller: InputController,
    frame_tick: Ticker,
    meshes: SceneMeshes,

    /// Created on the first frame, once a device exists.
    renderer: Option<SceneRenderer>,
}

impl GimbalApp {
    pub fn new(meshes: SceneMeshes) -> Self {
        Self {
            state: AttitudeState::new(),
            controller: InputController::new(),
            frame_tick: Ticker::new(FRAME_PERIOD, Instant::now()),
            meshes,
            renderer: None,
        }
    }
}

impl App for GimbalApp {
    fn on_control(&mut self, event: ControlEvent, now: Instant) -> AppControl {
        self.controller.handle_event(event, &mut self.state, now);
        AppControl::Continue
    }

    fn on_wake(&mut self, now: Instant) -> Wake {
        self.controller.poll(&mut self.state, now);

        let frames = self.frame_tick.poll(now);
        for _ in 0..frames {
            self.state.advance_spin();
        }

        // Input steps become visible at the next frame tick, at most one
        // frame period later.
        let next = match self.controller.deadline() {
            Some(input_deadline) => self.frame_tick.deadline().min(input_deadline),
            None => self.frame_tick.deadline(),
        };

        Wake {
            redraw: frames > 0,
            next_deadline: Some(next),
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let state = self.state;
        let meshes = &self.meshes;
        let renderer = &mut self.renderer;

        ctx.render(|rctx, target| {
            renderer
                .get_or_insert_with(|| {
                    SceneRenderer::new(rctx.device, rctx.surface_format, meshes)
                })
                .draw(rctx, target, &state);
        })
    }
}
