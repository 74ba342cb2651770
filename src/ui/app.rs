//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::SPLASH_DURATION_MS;
use crate::controller::DashboardController;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval_ms: u64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval_ms: u64) -> Self {
        Self {
            with_background_color,
            poll_interval_ms,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying queue status.
    Dashboard(Box<DashboardState>),
}

/// What a key press asks the app to do.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Refresh,
    /// Upload the given file. `None` means nothing was selected.
    Submit(Option<PathBuf>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Events received before the dashboard exists.
    backlog: VecDeque<WorkerEvent>,

    /// Broadcasts shutdown signal to workers.
    shutdown_sender: broadcast::Sender<()>,

    /// Upload path and manual refreshes go through the controller.
    controller: DashboardController,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            event_receiver,
            backlog: VecDeque::new(),
            shutdown_sender,
            controller,
            ui_config,
        }
    }

    fn show_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.controller.backend_url(),
            self.start_time,
            self.ui_config.clone(),
        );
        while let Some(event) = self.backlog.pop_front() {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    fn dispatch(&self, action: KeyAction) {
        match action {
            KeyAction::Submit(path) => {
                let controller = self.controller.clone();
                tokio::spawn(async move {
                    // Failures already reached the user as a notice.
                    let _ = controller.submit_batch(path.as_deref()).await;
                });
            }
            KeyAction::Refresh => {
                let controller = self.controller.clone();
                tokio::spawn(async move { controller.refresh().await });
            }
            KeyAction::None | KeyAction::Quit => {}
        }
    }
}

/// Maps a key press on the dashboard to an action, updating input state on the way.
pub fn handle_dashboard_key(state: &mut DashboardState, key: KeyEvent) -> KeyAction {
    // A notice blocks everything else until acknowledged
    if state.current_notice().is_some() {
        state.dismiss_notice();
        return KeyAction::None;
    }

    if let Some(input) = state.upload_input_mut() {
        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                state.take_upload_input();
            }
            KeyCode::Enter => {
                let typed = state.take_upload_input().unwrap_or_default();
                let typed = typed.trim();
                let path = (!typed.is_empty()).then(|| PathBuf::from(typed));
                return KeyAction::Submit(path);
            }
            _ => {}
        }
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('u') | KeyCode::Char('U') => {
            state.open_upload_input();
            KeyAction::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            match &mut app.current_screen {
                Screen::Dashboard(state) => state.add_event(event),
                Screen::Splash => app.backlog.push_back(event),
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let action = match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            KeyAction::Quit
                        } else {
                            // Any other key skips the splash screen
                            app.show_dashboard();
                            KeyAction::None
                        }
                    }
                    Screen::Dashboard(state) => handle_dashboard_key(state, key),
                };

                if action == KeyAction::Quit {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }
                app.dispatch(action);
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
