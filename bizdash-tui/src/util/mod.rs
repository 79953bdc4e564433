//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志
//!     mod text;           // 显示宽度截断、金额格式化

mod logging;
mod terminal;
mod text;

pub use logging::{init_logging, log_failure, log_file_path};
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{format_cents, truncate_to_width};
