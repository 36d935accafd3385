//! Logger initialization.
//!
//! The library only talks to the `log` facade; the binary installs `env_logger` through
//! [`init_logging`].
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "voronoi_mosaic=debug"). When unset, `RUST_LOG` is consulted, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
  pub env_filter: Option<String>,
  pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      env_filter: None,
      write_style: env_logger::WriteStyle::Auto,
    }
  }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
  INIT.call_once(|| {
    let mut builder = env_logger::Builder::new();

    match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
      Some(filter) => { builder.parse_filters(&filter); }
      None => { builder.filter_level(log::LevelFilter::Info); }
    }
    builder.write_style(config.write_style);
    // fails if the host installed its own logger first
    if builder.try_init().is_ok() {
      log::debug!("logging initialized");
    }
  });
}

#[test] fn init_is_idempotent() {
  init_logging(LoggingConfig { env_filter: Some("debug".into()), ..Default::default() });
  init_logging(LoggingConfig::default());
  log::debug!("still alive");
  assert!(INIT.is_completed());
}
