//! 各路由对应的页面视图

pub mod catalog;
pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod not_found;
pub mod reports;
pub mod services;
pub mod settings;

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Row, Table, TableState},
    Frame,
};

use crate::model::App;
use crate::view::theme::ThemeColors;

/// 渲染带表头的列表，内容面板获得焦点时高亮光标行
pub(super) fn render_table<'a>(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    c: &ThemeColors,
    header: &'a [&'a str],
    rows: Vec<Row<'a>>,
    widths: &[Constraint],
) {
    let mut table = Table::new(rows, widths.iter().copied())
        .header(Row::new(header.iter().copied()).style(c.table_header()))
        .column_spacing(2);
    if app.focus.is_content() {
        table = table.row_highlight_style(c.selected());
    }

    let mut state = TableState::default().with_selected(Some(app.content.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
