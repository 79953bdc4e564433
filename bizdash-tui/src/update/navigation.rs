//! 侧边栏更新逻辑

use bizdash_core::NavAction;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }

        NavigationMessage::Activate => {
            let Some(path) = app.navigation.selected_path() else {
                return;
            };
            match app.navigation.model.activate(&path) {
                NavAction::Toggled { path, expanded } => {
                    app.navigation.keep_selection_on(&path);
                    let label = app.navigation.model.tree().label_of(&path).unwrap_or(path.as_str());
                    let verb = if expanded { "Expanded" } else { "Collapsed" };
                    let status = format!("{verb} {label}");
                    app.set_status(status);
                }
                NavAction::Navigate(target) => {
                    super::navigate(app, &target);
                }
            }
        }
    }
}
