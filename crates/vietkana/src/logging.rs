//! ログ初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、なければ設定ファイルのログレベルを使う。

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Builds the filter: `RUST_LOG` if set and valid, else `level` for everything.
pub fn env_filter(level: LogLevel) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Installs the global subscriber (registry + fmt layer).
///
/// Returns `false` when a global subscriber was already installed; calling it twice is harmless.
pub fn init_tracing(level: LogLevel) -> bool {
  tracing_subscriber::registry()
    .with(env_filter(level))
    .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
    .try_init()
    .is_ok()
}
