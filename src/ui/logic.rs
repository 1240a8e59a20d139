//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑；读数列表只在 submit_search 中被修改

use super::actions::Action;
use super::state::{App, AppMode};
use crate::generator::mock_reading;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::MoveSelectionLeft => self.move_left(),
            Action::MoveSelectionRight => self.move_right(),

            Action::StartSearch => self.start_search(),
            Action::ToggleTheme => self.toggle_theme(),

            Action::Cancel => self.cancel(),
            Action::Submit => {
                if self.mode == AppMode::Searching {
                    self.submit_search();
                }
            }

            Action::Input(c) => {
                if self.mode == AppMode::Searching {
                    self.search_query.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Searching {
                    self.search_query.pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 上移一行卡片
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.grid_columns.max(1));
    }

    /// 下移一行卡片，最后一行不足时停在末尾
    pub fn move_down(&mut self) {
        if self.readings.is_empty() {
            return;
        }
        let last = self.readings.len() - 1;
        self.selected_index = (self.selected_index + self.grid_columns.max(1)).min(last);
    }

    pub fn move_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected_index + 1 < self.readings.len() {
            self.selected_index += 1;
        }
    }

    // ============ 搜索相关 ============

    /// 聚焦搜索框
    pub fn start_search(&mut self) {
        self.mode = AppMode::Searching;
        self.message = None;
    }

    /// 提交搜索：空白输入忽略，否则在列表头部插入一条模拟读数
    pub fn submit_search(&mut self) {
        let city = self.search_query.trim().to_string();
        if city.is_empty() {
            tracing::debug!("ignored blank search");
            return;
        }
        tracing::info!(query = %city, "searching for city");

        let reading = mock_reading(&city, &mut self.rng);
        let category = reading.category();
        tracing::info!(
            city = %reading.city,
            aqi = reading.aqi,
            category = category.class_name(),
            rank = category.rank(),
            "added mock reading"
        );

        self.message = Some(format!("Added {} (AQI {}, {})", city, reading.aqi, category.label()));
        self.readings.prepend(reading);
        self.selected_index = 0;
        self.search_query.clear();
        self.mode = AppMode::Normal;
    }

    // ============ 主题 ============

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "theme toggled");
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.search_query.clear();
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::seed_readings;
    use crate::theme::Theme;

    fn test_app() -> App {
        App::with_rng(seed_readings(), Theme::Light, StdRng::seed_from_u64(3))
    }

    fn type_query(app: &mut App, query: &str) {
        app.dispatch(Action::StartSearch);
        for c in query.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut app = test_app();
        type_query(&mut app, "   ");
        app.dispatch(Action::Submit);

        assert_eq!(app.readings.len(), 3);
        assert_eq!(app.readings.get(0).map(|r| r.city.as_str()), Some("Jakarta"));
    }

    #[test]
    fn test_search_prepends_one_reading() {
        let mut app = test_app();
        app.selected_index = 2;
        type_query(&mut app, " Lima ");
        app.dispatch(Action::Submit);

        assert_eq!(app.readings.len(), 4);
        let added = app.readings.get(0).unwrap();
        assert_eq!(added.city, "Lima");
        assert_eq!(added.country, "Demo Country");
        assert!((20..220).contains(&added.aqi));
        assert!((20..35).contains(&added.temperature));
        assert!((50..80).contains(&added.humidity));
        assert!((10..60).contains(&added.pm25));
        assert_eq!(added.history.len(), 12);

        assert_eq!(app.readings.get(1).map(|r| r.city.as_str()), Some("Jakarta"));
        assert_eq!(app.selected_index, 0);
        assert!(app.search_query.is_empty());
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.message.as_deref().unwrap().starts_with("Added Lima"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn submit_with_logs(app: &mut App, query: &str) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            type_query(app, query);
            app.dispatch(Action::Submit);
        });
        logs.contents()
    }

    #[test]
    fn test_blank_search_is_not_logged() {
        let mut app = test_app();
        let logs = submit_with_logs(&mut app, "  \t ");
        assert!(!logs.contains("searching for city"));
        assert_eq!(app.readings.len(), 3);

        let logs = submit_with_logs(&mut app, "Quito");
        assert!(logs.contains("searching for city"));
        assert!(logs.contains("Quito"));
    }

    #[test]
    fn test_submit_outside_search_mode_is_ignored() {
        let mut app = test_app();
        app.search_query = "Lima".to_string();
        app.dispatch(Action::Submit);
        assert_eq!(app.readings.len(), 3);
    }

    #[test]
    fn test_delete_char_and_cancel() {
        let mut app = test_app();
        type_query(&mut app, "Osloo");
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.search_query, "Oslo");

        app.dispatch(Action::Cancel);
        assert!(app.search_query.is_empty());
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.readings.len(), 3);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Dark);
        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut app = test_app();
        app.grid_columns = 2;

        app.dispatch(Action::MoveSelectionUp);
        assert_eq!(app.selected_index, 0);
        app.dispatch(Action::MoveSelectionDown);
        assert_eq!(app.selected_index, 2);
        app.dispatch(Action::MoveSelectionDown);
        assert_eq!(app.selected_index, 2);
        app.dispatch(Action::MoveSelectionRight);
        assert_eq!(app.selected_index, 2);
        app.dispatch(Action::MoveSelectionLeft);
        assert_eq!(app.selected_index, 1);
        app.dispatch(Action::MoveSelectionUp);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::ToggleTheme));
    }
}
