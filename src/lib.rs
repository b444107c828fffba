//! # lerno
//!
//! A terminal learning companion: pick a course, year, subject and topic,
//! ask the AI tutor questions, and take generated multiple-choice quizzes.
//!
//! Quiz content comes from a hosted language model; the response pipeline in
//! [`ai::quiz`] repairs and validates whatever text comes back, falling back
//! to a deterministic question set so the quiz screen never sees malformed
//! data. Login is a mock OTP flow and session state persists to a small JSON
//! file, standing in for the original browser localStorage.

pub mod ai;
mod app;
pub mod auth;
pub mod data;
pub mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use ai::OpenRouterClient;
use app::{App, AppEvent, LoginPhase, Screen};
use session::SessionStore;

/// Top-level error type for running the app.
#[derive(Debug)]
pub enum AppError {
    /// Session file could not be read or written.
    Session(session::StoreError),
    /// IO error from the terminal.
    Io(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "Session storage error: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Session(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<session::StoreError> for AppError {
    fn from(err: session::StoreError) -> Self {
        AppError::Session(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Run the app with session state under `data_dir`.
///
/// Takes over the terminal and returns when the user quits.
pub async fn run(data_dir: &Path) -> Result<(), AppError> {
    let session = SessionStore::load(data_dir)?;
    let client = OpenRouterClient::from_env();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(session, client, events_tx);

    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut app, &mut events_rx).await;
    terminal::restore()?;
    result
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    events_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), AppError> {
    loop {
        // Deliver finished background work before drawing.
        while let Ok(event) = events_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so spawned tasks keep the screen fresh.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_input(app, key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    match &app.screen {
        Screen::Login { phase, .. } => handle_login_input(app, *phase, key),
        Screen::Courses { .. }
        | Screen::Years { .. }
        | Screen::Subjects { .. }
        | Screen::Topics { .. } => handle_selection_input(app, key),
        Screen::Learning { .. } => handle_learning_input(app, key),
        Screen::GeneratingQuiz => handle_generating_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Results => handle_result_input(app, key),
        Screen::Settings { .. } => handle_settings_input(app, key),
    }
}

fn handle_login_input(app: &mut App, phase: LoginPhase, key: KeyCode) {
    match (phase, key) {
        (_, KeyCode::Backspace) => app.login_pop(),
        (LoginPhase::Email, KeyCode::Enter) => app.submit_email(),
        (LoginPhase::Email, KeyCode::Esc) => app.should_quit = true,
        (LoginPhase::Email, KeyCode::Char(c)) => app.login_push(c),
        (LoginPhase::Code, KeyCode::Enter) => app.submit_code(),
        (LoginPhase::Code, KeyCode::Esc) => app.login_back_to_email(),
        (LoginPhase::Code, KeyCode::Char('r') | KeyCode::Char('R')) => app.resend_otp(),
        (LoginPhase::Code, KeyCode::Char(c)) => app.login_push(c),
        _ => {}
    }
}

fn handle_selection_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.confirm_selection(),
        KeyCode::Esc => app.go_back(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_learning_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.ask_tutor(),
        KeyCode::F(2) => app.start_quiz_generation(),
        KeyCode::Up => app.learning_scroll(-1),
        KeyCode::Down => app.learning_scroll(1),
        KeyCode::Backspace => app.learning_pop(),
        KeyCode::Esc => app.go_back(),
        KeyCode::Char(c) => app.learning_push(c),
        _ => {}
    }
}

fn handle_generating_input(app: &mut App, key: KeyCode) {
    // The late result is discarded by the state machine once we leave.
    if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.abandon_quiz();
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Esc => app.abandon_quiz(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.return_to_topics(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab => app.settings_toggle_focus(),
        KeyCode::Enter => app.save_settings(),
        KeyCode::Delete => app.logout(),
        KeyCode::Esc => app.go_back(),
        KeyCode::Backspace => app.settings_pop(),
        KeyCode::Char(c) => app.settings_push(c),
        _ => {}
    }
}
