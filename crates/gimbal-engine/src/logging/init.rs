use std::sync::Once;

static INIT: Once = Once::new();

/// How the global logger gets set up.
///
/// `filter` takes `env_logger` directive syntax ("info",
/// "gimbal_engine=debug,wgpu=warn", ...). When unset, `RUST_LOG` wins, and
/// info level is the final fallback: it keeps adapter selection and surface
/// events visible without per-frame noise.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

/// Installs the global logger.
///
/// Safe to call more than once; only the first call takes effect. Belongs
/// at the top of `main`, before anything can log.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let directives = config.filter.or_else(|| std::env::var("RUST_LOG").ok());
        match directives {
            Some(directives) => {
                builder.parse_filters(&directives);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style).init();
        log::debug!("logging ready");
    });
}
