use anyhow::Result;
use winit::dpi::LogicalSize;

use gimbal_engine::device::GpuInit;
use gimbal_engine::geometry;
use gimbal_engine::logging::{init_logging, LoggingConfig};
use gimbal_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::GimbalApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let meshes = geometry::scene_meshes()?;

    log::info!("controls: arrows pitch/yaw, Q/E roll, R reset, Esc quit");

    let config = RuntimeConfig {
        title: "gimbal attitude viewer".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    Runtime::run(config, GpuInit::default(), GimbalApp::new(meshes))
}
