//! 应用主状态结构

use bizdash_core::{NavTree, Router, ThemeMode, ThemeStore, ThemeSubscription};

use super::{BusinessData, ContentState, FocusPanel, NavigationState, Page};
use crate::config::AppConfig;
use crate::util::log_failure;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 路由历史（当前路径的唯一持有者）
    pub router: Router,

    /// 侧边栏导航状态
    pub navigation: NavigationState,

    /// 当前页面（由当前路由解析）
    pub current_page: Page,

    /// 内容面板光标
    pub content: ContentState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 页面展示的业务数据
    pub data: BusinessData,

    /// 主题存储与本应用的订阅
    theme_store: &'static ThemeStore,
    theme_subscription: ThemeSubscription,
    /// 渲染使用的主题
    pub theme: ThemeMode,
}

impl App {
    /// 创建新的应用实例，并把起始路由通知给导航模型
    pub fn new(config: &AppConfig, theme_store: &'static ThemeStore) -> Self {
        let router = Router::new(&config.start_path);
        let tree = config.nav_tree().unwrap_or_else(|e| {
            log_failure("Ignoring navigation override", &anyhow::Error::new(e));
            NavTree::dashboard()
        });
        let mut navigation = NavigationState::new(tree, config.sidebar_collapsed);
        router.announce(&mut navigation.model);
        navigation.select_current_route();

        let theme_subscription = theme_store.subscribe();
        let theme = theme_subscription.current();

        Self {
            should_quit: false,
            focus: FocusPanel::Sidebar,
            current_page: Page::from_path(router.current()),
            router,
            navigation,
            content: ContentState::default(),
            status_message: None,
            data: BusinessData::sample(),
            theme_store,
            theme_subscription,
            theme,
        }
    }

    pub fn theme_store(&self) -> &'static ThemeStore {
        self.theme_store
    }

    /// 从订阅中取出最新主题
    pub fn sync_theme(&mut self) {
        if let Some(mode) = self.theme_subscription.changed() {
            self.theme = mode;
        }
    }

    /// 当前页面可选择的行数
    pub fn content_len(&self) -> usize {
        match &self.current_page {
            Page::Invoices => self.data.invoices.len(),
            Page::Products | Page::Inventory => self.data.products.len(),
            Page::Categories => self.data.categories.len(),
            Page::Customers => self.data.customers.len(),
            Page::Services | Page::ServicePlans => self.data.plans.len(),
            Page::Subscriptions => self.data.subscriptions.len(),
            Page::InvoiceDetail { id } => self.data.invoice(id).map_or(0, |i| i.lines.len()),
            Page::Dashboard | Page::Reports | Page::Settings | Page::NotFound { .. } => 0,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// 每个测试使用独立的主题存储，避免共享全局状态
    pub fn test_app(config: &AppConfig) -> App {
        let store: &'static ThemeStore = Box::leak(Box::new(ThemeStore::new(config.theme)));
        App::new(config, store)
    }
}
