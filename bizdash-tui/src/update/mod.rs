//!
//! src/update/mod.rs
//! Update 层：根据 Message 修改 Model
//!
//!     pub fn update(app: &mut App, msg: AppMessage)
//!
//! 所有路由变更都经过 `navigate` / `go_back` / `go_forward`，
//! 由 Router 通知 NavigationModel，从而保证每次路由事件只自动展开一次，
//! 而光标移动等纯选择操作不会触发自动展开。

mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, Page};

/// 处理消息
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::ToggleTheme => {
            let mode = app.theme_store().toggle();
            app.sync_theme();
            app.set_status(format!("Theme: {}", mode.as_str()));
        }

        AppMessage::ToggleSidebar => {
            let current = app.navigation.selected_path();
            let collapsed = app.navigation.model.toggle_collapsed();
            if let Some(path) = current {
                app.navigation.keep_selection_on(&path);
            }
            app.set_status(if collapsed {
                "Sidebar collapsed"
            } else {
                "Sidebar expanded"
            });
        }

        AppMessage::Navigate(path) => {
            navigate(app, &path);
        }

        AppMessage::GoBack => {
            if app.router.go_back(&mut app.navigation.model) {
                route_changed(app);
            } else if let Some(parent) = app.current_page.parent_path() {
                // 直接打开的详情页没有历史记录，用列表页替换当前记录
                if app.router.redirect(parent, &mut app.navigation.model) {
                    route_changed(app);
                }
            }
        }

        AppMessage::GoForward => {
            if app.router.go_forward(&mut app.navigation.model) {
                route_changed(app);
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Noop => {}
    }
}

/// 跳转到 `path`；路由未变化时不做任何事
pub(crate) fn navigate(app: &mut App, path: &str) {
    if app.router.navigate(path, &mut app.navigation.model) {
        route_changed(app);
    }
}

/// 路由变化后同步页面、光标与状态栏
fn route_changed(app: &mut App) {
    let page = Page::from_path(app.router.current());
    if let Page::NotFound { path } = &page {
        tracing::warn!("No page for route {path}");
    }
    app.current_page = page;
    app.content.reset();
    app.navigation.select_current_route();
    app.clear_status();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use bizdash_core::ThemeMode;

    use super::*;
    use crate::config::AppConfig;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::test_support::test_app;
    use crate::model::FocusPanel;

    fn app_at(path: &str) -> App {
        test_app(&AppConfig {
            start_path: path.to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_navigate_updates_page_and_highlight() {
        let mut app = app_at("/");
        update(&mut app, AppMessage::Navigate("/invoices/INV-1003".to_string()));

        assert_eq!(
            app.current_page,
            Page::InvoiceDetail {
                id: "INV-1003".to_string()
            }
        );
        let states = app.navigation.model.derive();
        let invoices = states.iter().find(|s| s.path == "/invoices").unwrap();
        assert!(invoices.active);
        assert!(!invoices.exact_active);
        assert_eq!(app.navigation.selected_path().as_deref(), Some("/invoices"));
    }

    #[test]
    fn test_go_back_walks_history() {
        let mut app = app_at("/");
        update(&mut app, AppMessage::Navigate("/customers".to_string()));
        update(&mut app, AppMessage::Navigate("/reports".to_string()));

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Customers);
        update(&mut app, AppMessage::GoForward);
        assert_eq!(app.current_page, Page::Reports);
    }

    #[test]
    fn test_go_back_from_deep_link_opens_list() {
        let mut app = app_at("/invoices/INV-1002");
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Invoices);
        assert_eq!(app.router.current(), "/invoices");
        assert!(!app.router.can_go_back());
        assert!(!app.router.can_go_forward());
    }

    #[test]
    fn test_toggle_theme_reaches_app() {
        let mut app = app_at("/");
        assert_eq!(app.theme, ThemeMode::Dark);
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(app.theme_store().get(), ThemeMode::Light);
        assert_eq!(app.status_message.as_deref(), Some("Theme: light"));
    }

    #[test]
    fn test_toggle_sidebar_keeps_cursor_on_same_route() {
        let mut app = app_at("/");
        update(&mut app, AppMessage::Navigate("/services/plans".to_string()));
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectLast));
        assert_eq!(app.navigation.selected_path().as_deref(), Some("/settings"));

        update(&mut app, AppMessage::ToggleSidebar);
        assert!(app.navigation.model.is_collapsed());
        assert_eq!(app.navigation.selected_path().as_deref(), Some("/settings"));
        assert!(app.navigation.model.is_expanded("/services"));
    }

    #[test]
    fn test_open_invoice_from_list() {
        let mut app = app_at("/invoices");
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::Open));
        assert_eq!(
            app.current_page,
            Page::InvoiceDetail {
                id: "INV-1002".to_string()
            }
        );
        assert_eq!(app.content.selected, 0);
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let mut app = app_at("/");
        update(&mut app, AppMessage::Navigate("/products2".to_string()));
        assert!(matches!(app.current_page, Page::NotFound { .. }));
        let states = app.navigation.model.derive();
        assert!(states.iter().all(|s| !s.active));
    }
}
