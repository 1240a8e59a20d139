//! 终端设置与恢复
//!
//! 进入 raw mode 之前先创建 [`TerminalGuard`]，任何一步失败、正常退出或 panic
//! 都会恢复终端。

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Step<'a> = Box<dyn FnOnce() -> io::Result<()> + 'a>;

/// Drop 时恢复终端
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// 进入 raw mode 与备用屏幕
pub fn init() -> io::Result<(Tui, TerminalGuard)> {
    install_panic_hook();

    let guard = TerminalGuard { _private: () };
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    Ok((terminal, guard))
}

/// 恢复终端，每一步都会执行，返回第一个错误
pub fn restore() -> io::Result<()> {
    run_all(vec![
        Box::new(disable_raw_mode) as Step,
        Box::new(|| execute!(io::stdout(), LeaveAlternateScreen, Show)),
    ])
}

/// panic 信息打印前先恢复终端，否则信息会留在备用屏幕里
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        default_hook(info);
    }));
}

fn run_all(steps: Vec<Step<'_>>) -> io::Result<()> {
    let mut first_error = None;
    for step in steps {
        if let Err(e) = step() {
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_run_all_continues_after_failure() {
        let ran = Cell::new(0);
        let result = run_all(vec![
            Box::new(|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("raw mode"))
            }) as Step,
            Box::new(|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("alternate screen"))
            }),
            Box::new(|| {
                ran.set(ran.get() + 1);
                Ok(())
            }),
        ]);

        assert_eq!(ran.get(), 3);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_run_all_ok() {
        assert!(run_all(Vec::new()).is_ok());
        assert!(run_all(vec![Box::new(|| Ok(())) as Step]).is_ok());
    }
}
