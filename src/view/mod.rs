//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod search_input;
mod styles;
mod suggestions;

pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, PickerStyles};
pub use suggestions::{NoMatchesNotice, SuggestionList};

use crate::config::keybindings::KeyBindings;
use crate::config::DebounceDelay;
use crate::model::{AppError, Record};
use crate::state::{PickerState, SearchEngine, NO_SELECTION_LABEL};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    picker: PickerState,
    key_bindings: KeyBindings,
    styles: PickerStyles,
    /// Selection notifications forwarded by the engine listener
    notifications: Receiver<Option<Record>>,
    /// Label of the most recent notification
    last_reported: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(candidates: Vec<Record>, args: &CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let styles = PickerStyles::with_color_config(args.color);
        let mut app = Self::with_terminal(terminal, candidates, args.debounce_delay, styles);
        app.picker.focus();
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. The poll timeout tracks the pending
    /// debounce deadline, so the settled query lands without waiting for
    /// another key press.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());

            let had_event = if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        true
                    }
                    Event::Resize(..) => true,
                    _ => false,
                }
            } else {
                false
            };

            let fired = self.tick(Instant::now());

            if had_event || fired {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// The engine listener forwards every notification over a channel that
    /// the app drains after each event.
    pub fn with_terminal(
        terminal: Terminal<B>,
        candidates: Vec<Record>,
        delay: DebounceDelay,
        styles: PickerStyles,
    ) -> Self {
        let (sender, notifications) = mpsc::channel();
        let engine = SearchEngine::new(candidates, delay).with_listener(move |record| {
            // Fails only after the app has dropped its receiver
            let _ = sender.send(record.cloned());
        });

        Self {
            terminal,
            picker: PickerState::new(engine),
            key_bindings: KeyBindings::default(),
            styles,
            notifications,
            last_reported: NO_SELECTION_LABEL.to_string(),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "Unbound key");
            return false;
        };

        let quit = self.picker.apply(action, now);
        self.drain_notifications();
        quit
    }

    /// Fire the debounce timer if its deadline has passed.
    ///
    /// Returns true if the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.picker.tick(now);
        let notified = self.drain_notifications();
        fired || notified
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.picker.engine().next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::from_millis(constants::IDLE_POLL_INTERVAL_MS),
        }
    }

    /// Render a single frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let picker = &self.picker;
        let last_reported = self.last_reported.as_str();
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, picker, last_reported, styles))?;
        Ok(())
    }

    /// Current picker state.
    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Label of the most recent selection notification.
    pub fn last_reported(&self) -> &str {
        &self.last_reported
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Tear the engine down, cancelling any pending debounce.
    pub fn shutdown(self) {
        self.picker.into_engine().teardown();
    }

    fn drain_notifications(&mut self) -> bool {
        let mut received = false;
        while let Ok(record) = self.notifications.try_recv() {
            let label = match &record {
                Some(record) => record.label(),
                None => NO_SELECTION_LABEL.to_string(),
            };
            info!(selection = %label, "Selection changed");
            self.last_reported = label;
            received = true;
        }
        received
    }
}

/// CLI arguments for TUI initialization
///
/// Carries the resolved settings that shape the shell from main.rs into
/// the view layer.
#[derive(Debug, Clone, Copy)]
pub struct CliArgs {
    /// Debounce delay applied to query edits.
    pub debounce_delay: DebounceDelay,

    /// Whether styles use colors.
    pub color: ColorConfig,
}

/// Initialize and run the TUI application over the given candidates
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_candidates(candidates: Vec<Record>, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(candidates, &args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.shutdown();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
