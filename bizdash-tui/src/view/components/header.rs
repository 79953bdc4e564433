//! 顶部标题栏：应用名、当前页面、主题与侧边栏模式

use bizdash_core::ThemeMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Page};
use crate::view::theme::ThemeColors;

const APP_NAME: &str = " bizdash";

/// 渲染标题栏
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let right = indicators(app);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_width)])
        .split(area);

    let left = Line::from(vec![
        Span::styled(APP_NAME, c.bar().add_modifier(Modifier::BOLD)),
        Span::styled(" │ ", c.bar()),
        Span::styled(breadcrumb(app), c.bar()),
    ]);

    frame.render_widget(Paragraph::new(left).style(c.bar()), columns[0]);
    frame.render_widget(Paragraph::new(right).style(c.bar()), columns[1]);
}

/// 面包屑：所属顶层导航项 › 页面标题
fn breadcrumb(app: &App) -> String {
    let title = app.current_page.title();
    let parent = app
        .navigation
        .model
        .derive()
        .into_iter()
        .find(|item| item.parent_active && !item.exact_active);
    match (&app.current_page, parent) {
        (Page::InvoiceDetail { id }, _) => format!("Invoices › {id}"),
        (_, Some(item)) => format!("{} › {title}", item.label),
        (_, None) => title.to_string(),
    }
}

fn indicators(app: &App) -> String {
    let theme = match app.theme {
        ThemeMode::Dark => "☾ Dark",
        ThemeMode::Light => "☀ Light",
    };
    let sidebar = if app.navigation.model.is_collapsed() {
        "Sidebar: icons"
    } else {
        "Sidebar: full"
    };
    format!("{sidebar} │ {theme} ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::test_support::test_app;

    fn app_at(path: &str) -> App {
        test_app(&AppConfig {
            start_path: path.to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_breadcrumb_top_level() {
        assert_eq!(breadcrumb(&app_at("/customers")), "Customers");
        assert_eq!(breadcrumb(&app_at("/")), "Dashboard");
    }

    #[test]
    fn test_breadcrumb_sub_item() {
        assert_eq!(breadcrumb(&app_at("/services/plans")), "Services › Plans");
        assert_eq!(breadcrumb(&app_at("/categories")), "Products › Categories");
    }

    #[test]
    fn test_breadcrumb_invoice_detail() {
        assert_eq!(breadcrumb(&app_at("/invoices/INV-1002")), "Invoices › INV-1002");
    }

    #[test]
    fn test_indicators_follow_state() {
        let mut app = app_at("/");
        assert_eq!(indicators(&app), "Sidebar: full │ ☾ Dark ");
        app.navigation.model.toggle_collapsed();
        app.theme = ThemeMode::Light;
        assert_eq!(indicators(&app), "Sidebar: icons │ ☀ Light ");
    }
}
