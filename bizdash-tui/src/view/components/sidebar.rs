//! 左侧导航侧边栏
//!
//! 每一行由 `NavigationModel::derive()` 的派生标志决定样式：
//! - `exact_active`：左侧指示条 `▌`
//! - `parent_active`：高亮文字（当前路由位于该项或其子项下）
//! - `expanded`：分组箭头 `▾` / `▸`
//!
//! 折叠模式下只显示图标，子项隐藏。

use bizdash_core::{NavIcon, NavItemState, NavRow, SubItemState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::ThemeColors;

/// 展开时的宽度
pub const EXPANDED_WIDTH: u16 = 28;
/// 折叠时的宽度（边框 + 指示条 + 图标）
pub const COLLAPSED_WIDTH: u16 = 7;

const INDICATOR: &str = "▌";

/// 侧边栏当前宽度
pub fn width(app: &App) -> u16 {
    if app.navigation.model.is_collapsed() {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

/// 图标标识到字形的映射
pub fn icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Dashboard => "⌂",
        NavIcon::Invoices => "$",
        NavIcon::Products => "▣",
        NavIcon::Customers => "@",
        NavIcon::Services => "✦",
        NavIcon::Reports => "▤",
        NavIcon::Settings => "≡",
        NavIcon::Generic => "•",
    }
}

/// 渲染侧边栏
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let nav = &app.navigation;
    let collapsed = nav.model.is_collapsed();
    let focused = app.focus.is_sidebar();

    let block = Block::default()
        .title(if collapsed { "" } else { " Menu " })
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));

    let inner_width = usize::from(area.width.saturating_sub(2));
    let states = nav.model.derive();

    let items: Vec<ListItem> = nav
        .rows()
        .into_iter()
        .filter_map(|row| match row {
            NavRow::Item(i) => states
                .get(i)
                .map(|state| item_line(state, collapsed, inner_width, c)),
            NavRow::SubItem(i, j) => states
                .get(i)
                .and_then(|state| state.sub_items.get(j))
                .map(|sub| sub_item_line(sub, inner_width, c)),
        })
        .map(ListItem::new)
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(c.selected());
    }

    let mut state = ListState::default();
    state.select(Some(nav.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn indicator(exact_active: bool, c: &ThemeColors) -> Span<'static> {
    if exact_active {
        Span::styled(INDICATOR, Style::default().fg(c.active))
    } else {
        Span::raw(" ")
    }
}

fn label_style(active: bool, c: &ThemeColors) -> Style {
    if active {
        Style::default().fg(c.active).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    }
}

/// 顶层项：`▌ ⌂ Label      [badge] ▸`
fn item_line(state: &NavItemState, collapsed: bool, width: usize, c: &ThemeColors) -> Line<'static> {
    let style = label_style(state.parent_active, c);
    let mut spans = vec![
        indicator(state.exact_active, c),
        Span::raw(" "),
        Span::styled(icon_glyph(state.icon), style),
    ];

    if collapsed {
        if state.badge.is_some() {
            spans.push(Span::styled("•", Style::default().fg(c.badge_bg)));
        }
        return Line::from(spans);
    }

    let chevron = match (state.has_sub_items(), state.expanded) {
        (false, _) => " ",
        (true, true) => "▾",
        (true, false) => "▸",
    };
    let badge = state.badge.as_ref().map(|b| format!(" {b} "));
    let badge_width = badge.as_ref().map_or(0, |b| b.width() + 1);

    // 指示条 + 空格 + 图标 + 空格 = 4，箭头前后共 2
    let label_width = width.saturating_sub(4 + 2 + badge_width);
    let label = truncate_to_width(&state.label, label_width);
    let padding = label_width.saturating_sub(label.width());

    spans.push(Span::raw(" "));
    spans.push(Span::styled(label, style));
    spans.push(Span::raw(" ".repeat(padding)));
    if let Some(badge) = badge {
        spans.push(Span::styled(
            badge,
            Style::default().bg(c.badge_bg).fg(c.badge_fg),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(chevron, Style::default().fg(c.muted)));

    Line::from(spans)
}

/// 子项：`▌    Label`
fn sub_item_line(sub: &SubItemState, width: usize, c: &ThemeColors) -> Line<'static> {
    let label = truncate_to_width(&sub.label, width.saturating_sub(5));
    Line::from(vec![
        indicator(sub.exact_active, c),
        Span::raw("    "),
        Span::styled(label, label_style(sub.active, c)),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use bizdash_core::NavigationModel;

    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_item_line_fits_width() {
        let mut model = NavigationModel::default();
        model.on_route_change("/categories");
        let c = ThemeColors::dark();
        for state in model.derive() {
            let text = line_text(&item_line(&state, false, 26, &c));
            assert_eq!(text.width(), 26, "{text:?}");
        }
    }

    #[test]
    fn test_item_line_marks_exact_and_expanded() {
        let mut model = NavigationModel::default();
        model.on_route_change("/products");
        let states = model.derive();
        let c = ThemeColors::dark();

        let products = line_text(&item_line(&states[2], false, 26, &c));
        assert!(products.starts_with(INDICATOR));
        assert!(products.ends_with('▾'));

        let services = line_text(&item_line(&states[4], false, 26, &c));
        assert!(services.starts_with(' '));
        assert!(services.ends_with('▸'));
    }

    #[test]
    fn test_collapsed_line_is_icon_only() {
        let model = NavigationModel::default();
        let states = model.derive();
        let c = ThemeColors::light();
        assert_eq!(line_text(&item_line(&states[0], true, 5, &c)), format!("{INDICATOR} ⌂"));
        assert_eq!(line_text(&item_line(&states[1], true, 5, &c)), "  $•");
    }
}
