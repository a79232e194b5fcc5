//! TUI event loop runner.
//!
//! The loop renders, drains finished fetches, then polls the terminal for
//! input. Fetches run as tokio tasks and report back over a channel.

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::app::{App, FetchJob, FetchOutcome};
use super::input::{handle_event, InputResult};
use super::widgets::{panel_name, render_ui};
use crate::client::RequestClient;
use crate::errors::{Result, TurlError};
use crate::signals;

const TICK_RATE: Duration = Duration::from_millis(100);

/// TUI runner that manages the terminal and event loop.
pub struct TuiRunner {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiRunner {
    /// Enable raw mode and enter the alternate screen.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("TUI initialized");

        Ok(Self { terminal })
    }

    /// Restore the terminal to normal mode.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        info!("TUI restored");
        Ok(())
    }

    /// Run until the user quits or the process is interrupted.
    pub async fn run(&mut self, app: &mut App, client: RequestClient) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let mut focus = app.focus();

        loop {
            while let Ok(outcome) = rx.try_recv() {
                app.finish_fetch(outcome);
            }

            self.terminal
                .draw(|frame| render_ui(frame, app))
                .map_err(|e| TurlError::Terminal(e.to_string()))?;

            if app.should_quit() {
                break;
            }

            if signals::was_interrupted() {
                debug!("TUI received interrupt");
                app.quit();
                break;
            }

            // Terminal reads block; keep them off the async workers
            let event = tokio::task::block_in_place(|| -> io::Result<Option<event::Event>> {
                if event::poll(TICK_RATE)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            })
            .map_err(|e| TurlError::Terminal(e.to_string()))?;

            let Some(event) = event else {
                continue;
            };
            match handle_event(app, event) {
                InputResult::Fetch(job) => spawn_fetch(&client, job, tx.clone()),
                InputResult::Quit => break,
                InputResult::Handled | InputResult::NotHandled => {}
            }

            if app.focus() != focus {
                focus = app.focus();
                debug!(panel = panel_name(focus), "Focus moved");
            }
        }

        Ok(())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Run the fetch on its own task so the loop keeps handling input.
fn spawn_fetch(client: &RequestClient, job: FetchJob, tx: mpsc::UnboundedSender<FetchOutcome>) {
    let client = client.clone();
    tokio::spawn(async move {
        let FetchJob { id, request, cancel } = job;
        let result = client.send(&request, &cancel).await;
        // The receiver is gone once the TUI has exited
        let _ = tx.send(FetchOutcome { id, request, result });
    });
}

/// Run the TUI over `app`, restoring the terminal on every exit path.
///
/// Needs the multi-threaded runtime.
pub async fn run_tui(mut app: App, client: RequestClient) -> Result<()> {
    let mut runner = TuiRunner::new().map_err(|e| TurlError::Terminal(e.to_string()))?;
    runner.run(&mut app, client).await
}
