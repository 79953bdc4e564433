//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::{App, FocusPanel};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        return AppMessage::ToggleSidebar;
    }
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::GoForward;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 数字键直达第 N 个顶层导航项
    if let Some(msg) = jump_to_item(key, app) {
        return msg;
    }

    // ← → 只在需要切换时产生消息
    if DefaultKeymap::FOCUS_LEFT.matches(&key) {
        return if app.focus.is_content() {
            AppMessage::ToggleFocus
        } else {
            AppMessage::Noop
        };
    }
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return if app.focus.is_sidebar() {
            AppMessage::ToggleFocus
        } else {
            AppMessage::Noop
        };
    }

    // 根据焦点位置处理按键
    match app.focus {
        FocusPanel::Sidebar => handle_sidebar_keys(key),
        FocusPanel::Content => handle_content_keys(key),
    }
}

fn jump_to_item(key: KeyEvent, app: &App) -> Option<AppMessage> {
    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    if !key.modifiers.is_empty() {
        return None;
    }
    let index = ch.to_digit(10)?.checked_sub(1)?;
    let item = app
        .navigation
        .model
        .tree()
        .items()
        .get(usize::try_from(index).ok()?)?;
    Some(AppMessage::Navigate(item.path.clone()))
}

/// 处理侧边栏的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => NavigationMessage::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => NavigationMessage::SelectLast,
        KeyCode::Enter | KeyCode::Char(' ') => NavigationMessage::Activate,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Enter => ContentMessage::Open,
        KeyCode::Backspace => return AppMessage::GoBack,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::config::AppConfig;
    use crate::model::test_support::test_app;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_global_keys() {
        let app = test_app(&AppConfig::default());
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
        assert_eq!(handle_event(press(KeyCode::Char('t')), &app), AppMessage::ToggleTheme);
        assert_eq!(handle_event(press(KeyCode::Char('b')), &app), AppMessage::ToggleSidebar);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack);
        assert_eq!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::ALT)),
                &app
            ),
            AppMessage::GoForward
        );
    }

    #[test]
    fn test_sidebar_keys() {
        let app = test_app(&AppConfig::default());
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Navigation(NavigationMessage::Activate)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        );
        assert_eq!(handle_event(press(KeyCode::Left), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::ToggleFocus);
    }

    #[test]
    fn test_content_keys() {
        let mut app = test_app(&AppConfig::default());
        app.focus = FocusPanel::Content;
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Open)
        );
        assert_eq!(handle_event(press(KeyCode::Backspace), &app), AppMessage::GoBack);
        assert_eq!(handle_event(press(KeyCode::Left), &app), AppMessage::ToggleFocus);
    }

    #[test]
    fn test_digit_jumps_to_top_level_item() {
        let app = test_app(&AppConfig::default());
        assert_eq!(
            handle_event(press(KeyCode::Char('1')), &app),
            AppMessage::Navigate("/".to_string())
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('5')), &app),
            AppMessage::Navigate("/services".to_string())
        );
        assert_eq!(handle_event(press(KeyCode::Char('0')), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Char('9')), &app), AppMessage::Noop);
    }

    #[test]
    fn test_release_events_ignored() {
        let app = test_app(&AppConfig::default());
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_event(Event::Key(release), &app), AppMessage::Noop);
    }
}
