//! bizdash TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 导航状态（展开集合、当前路由、折叠标志）与主题存储来自 `bizdash-core`，
//! 本 crate 只负责把按键翻译成消息、把派生状态渲染到终端。
//!
//!
//! main.rs 的执行顺序：
//!
//!     config::load()          // 读取配置文件（缺失时使用默认值）
//!     init_logging()          // 日志写入文件，stdout 留给终端界面
//!     ThemeStore::init_global // 以配置中的主题初始化全局主题存储
//!     init_terminal()         // 进入 raw mode 与备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use bizdash_core::ThemeStore;

use config::{ConfigService, JsonConfigService};
use util::{init_logging, init_terminal, log_failure, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let service = JsonConfigService::from_env();
    let (config, config_warning) = match service.load() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    // 2. 初始化日志
    init_logging(&config.log_level)?;
    if let Some(err) = &config_warning {
        log_failure("Falling back to default configuration", err);
    }
    tracing::info!("Starting bizdash (config: {})", service.path().display());

    // 3. 初始化全局主题
    let theme_store = ThemeStore::init_global(config.theme).map_err(|e| {
        let err = anyhow::Error::new(e);
        log_failure("Failed to initialize theme store", &err);
        err
    })?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config, theme_store);
    if config_warning.is_some() {
        app.set_status("Invalid config file, using defaults");
    }

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log_failure("Main loop failed", e);
    }
    result
}
