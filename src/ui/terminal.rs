//! Terminal lifecycle: raw mode, the alternate screen, and the poll/draw
//! loop that feeds key presses to [`App`].

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use super::app::App;

/// Spin up the terminal backend, enter the draw loop, and keep processing input
/// until the user quits.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    restore_on_error(
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen"),
        || {
            let _ = disable_raw_mode();
        },
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = restore_on_error(
        Terminal::new(backend).context("failed to create terminal backend"),
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;
    info!("terminal ready");

    let result = event_loop(&mut terminal, app);

    cleanup_terminal(&mut terminal)?;
    info!("terminal restored");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(Duration::from_millis(250)).context("event polling failed")? {
            continue;
        }
        let Event::Key(key_event) = event::read().context("failed to read event")? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if app.handle_key_event(key_event) {
            return Ok(());
        }
    }
}

/// Run `restore` before handing back a setup error, so a half-initialized
/// terminal does not stay in raw mode.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn restore_runs_only_on_failure() {
        let mut restored = false;
        let ok: Result<u8> = restore_on_error(Ok(1), || restored = true);
        assert_eq!(ok.unwrap(), 1);
        assert!(!restored);

        let err: Result<u8> = restore_on_error(Err(anyhow!("no tty")), || restored = true);
        assert!(err.is_err());
        assert!(restored);
    }
}
