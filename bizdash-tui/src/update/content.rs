//! 内容面板更新逻辑

use crate::message::{AppMessage, ContentMessage};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            app.content.select_previous();
        }

        ContentMessage::SelectNext => {
            let len = app.content_len();
            app.content.select_next(len);
        }

        ContentMessage::Open => match app.current_page.clone() {
            Page::Invoices => {
                if let Some(route) = app.data.invoices.get(app.content.selected).map(|i| i.route()) {
                    super::navigate(app, &route);
                }
            }
            Page::Settings => {
                super::update(app, AppMessage::ToggleTheme);
            }
            Page::NotFound { .. } => {
                super::navigate(app, "/");
            }
            _ => {}
        },
    }
}
