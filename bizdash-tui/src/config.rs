//! 配置服务
//!
//! 配置文件为 JSON，默认位于 `<config_dir>/bizdash/config.json`，
//! 可通过环境变量 `BIZDASH_CONFIG` 指定其他路径。文件不存在时使用默认配置。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bizdash_core::{CoreResult, NavItem, NavTree, ThemeMode};
use serde::Deserialize;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "BIZDASH_CONFIG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 启动时的主题
    pub theme: ThemeMode,
    /// 启动时侧边栏是否折叠
    pub sidebar_collapsed: bool,
    /// 启动页面路径
    pub start_path: String,
    /// 默认日志级别（`RUST_LOG` 优先）
    pub log_level: String,
    /// 自定义导航树（缺省使用内置仪表盘导航）
    pub navigation: Option<Vec<NavItem>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            sidebar_collapsed: false,
            start_path: "/".to_string(),
            log_level: "info".to_string(),
            navigation: None,
        }
    }
}

impl AppConfig {
    /// 最终使用的导航树，自定义导航在这里校验
    pub fn nav_tree(&self) -> CoreResult<NavTree> {
        match &self.navigation {
            Some(items) => NavTree::new(items.clone()),
            None => Ok(NavTree::dashboard()),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地 JSON 配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 优先使用 `BIZDASH_CONFIG`，否则使用平台配置目录
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        config
            .nav_tree()
            .with_context(|| format!("invalid navigation in {}", self.path.display()))?;
        Ok(config)
    }
}

/// 平台默认配置文件路径
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bizdash")
        .join("config.json")
}
