//! Raw mode / alternate screen setup for the profile card.
//!
//! A panic on the UI thread tears the screen down before the default hook
//! prints. Fetch and avatar tasks run on runtime threads; their panics are
//! reported back to the UI as failed results, so the hook only logs them and
//! leaves the screen alone.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread::{self, ThreadId};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Who a panic belongs to, decided by the thread it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicScope {
    /// The thread drawing the card: restore the terminal, then report.
    Ui,
    /// A runtime thread running a fetch or avatar task: log only.
    Background,
}

pub fn panic_scope(ui_thread: ThreadId, current: ThreadId) -> PanicScope {
    if ui_thread == current {
        PanicScope::Ui
    } else {
        PanicScope::Background
    }
}

/// Restores the terminal when dropped or when the UI thread panics.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
    ui_thread: ThreadId,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
            ui_thread: thread::current().id(),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        *self.cleanup.lock() = Some(Box::new(cleanup));
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let ui_thread = self.ui_thread;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            match panic_scope(ui_thread, thread::current().id()) {
                PanicScope::Ui => {
                    if let Some(cleanup) = cleanup.lock().take() {
                        cleanup();
                    }
                    default_hook(info);
                }
                // stderr is the card; the failed result reaches the UI instead.
                PanicScope::Background => {
                    tracing::error!(
                        thread = thread::current().name().unwrap_or("unnamed"),
                        panic = %info,
                        "Background task panicked"
                    );
                }
            }
        }));
    }

    fn restore(&self) {
        if let Some(cleanup) = self.cleanup.lock().take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}
