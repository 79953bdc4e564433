//! 文件日志初始化
//!
//! stdout 被终端界面占用，因此日志写入 `<data_local_dir>/bizdash/bizdash.log`。
//! `log` 门面的记录（来自 bizdash-core）经由 tracing-subscriber 的兼容层一并输出。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use bizdash_core::CoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bizdash")
        .join("bizdash.log")
}

/// 初始化日志，`RUST_LOG` 优先于配置中的默认级别
pub fn init_logging(default_level: &str) -> Result<()> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

/// 错误链中的 `CoreError` 是否属于预期错误（配置问题）；其他错误一律视为非预期
pub fn is_expected_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CoreError>())
        .is_some_and(CoreError::is_expected)
}

/// 按错误分类选择日志级别：预期错误用 `warn`，其余用 `error`
pub fn log_failure(what: &str, err: &anyhow::Error) {
    if is_expected_failure(err) {
        tracing::warn!("{what}: {err:#}");
    } else {
        tracing::error!("{what}: {err:#}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_config_errors_are_expected() {
        let err = anyhow::Error::new(CoreError::DuplicatePath("/a".to_string()))
            .context("invalid navigation in config.json");
        assert!(is_expected_failure(&err));
    }

    #[test]
    fn test_store_errors_are_not_expected() {
        let err = anyhow::Error::new(CoreError::AlreadyInitialized("ThemeStore"));
        assert!(!is_expected_failure(&err));
    }

    #[test]
    fn test_foreign_errors_are_not_expected() {
        assert!(!is_expected_failure(&anyhow!("disk full")));
    }
}
