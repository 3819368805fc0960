//! ログ初期化
//!
//! 既定は warn、`--verbose` で debug。`RUST_LOG` があればそちらを優先する。

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,kaihan_gallery={level},kaihan_gallery_common={level}",
            level = level_str
        ))
    })
}
