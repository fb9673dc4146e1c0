use std::io;
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::warn;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

type Backend = CrosstermBackend<io::Stdout>;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen held for the lifetime of one game.
///
/// Dropping the session, or panicking while it is alive, puts the terminal
/// back the way the shell left it.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(install_panic_hook);
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        Terminal::new(CrosstermBackend::new(stdout))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| restore_terminal())
    }

    /// Draws one frame.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    if let Err(error) = disable_raw_mode() {
        warn!("failed to disable raw mode: {error}");
    }

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, Show, LeaveAlternateScreen) {
        warn!("failed to leave alternate screen: {error}");
    }
}
