//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::util::log_file_path;
use crate::view::theme::ThemeColors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 16;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let sidebar = if app.navigation.model.is_collapsed() {
        "Icons only"
    } else {
        "Full"
    };
    let log_path = log_file_path();

    let lines = vec![
        Line::from(""),
        render_setting_row("Theme", &format!("< {} >", app.theme.as_str()), app.focus.is_content(), c),
        render_setting_row("Sidebar", sidebar, false, c),
        render_setting_row("Log file", &log_path.display().to_string(), false, c),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", c.hint_key()),
            Span::styled(" Toggle theme | ", Style::default().fg(c.muted)),
            Span::styled("t", c.hint_key()),
            Span::styled(" Toggle theme anywhere | ", Style::default().fg(c.muted)),
            Span::styled("b", c.hint_key()),
            Span::styled(" Collapse sidebar", Style::default().fg(c.muted)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项，标签按显示宽度补齐
fn render_setting_row(label: &str, value: &str, selected: bool, c: &ThemeColors) -> Line<'static> {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let value_style = if selected {
        c.selected()
    } else {
        Style::default().fg(c.fg)
    };
    Line::from(vec![
        Span::styled(format!("  {label}{}", " ".repeat(padding)), Style::default().fg(c.muted)),
        Span::styled(value.to_string(), value_style),
    ])
}
