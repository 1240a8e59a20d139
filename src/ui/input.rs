//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveSelectionLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveSelectionRight),
            KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::StartSearch),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },
        AppMode::Searching => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(&app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_keys() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(&mode, KeyCode::Char('/')), Some(Action::StartSearch));
        assert_eq!(get_action(&mode, KeyCode::Char('t')), Some(Action::ToggleTheme));
        assert_eq!(get_action(&mode, KeyCode::Left), Some(Action::MoveSelectionLeft));
        assert_eq!(get_action(&mode, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let mode = AppMode::Searching;
        // 搜索时 q 和 t 都是普通字符
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, KeyCode::Char('t')), Some(Action::Input('t')));
        assert_eq!(get_action(&mode, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&mode, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(&mode, KeyCode::Up), None);
    }
}
