use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc};
use tokio::sync::Mutex;

use aura_scorer::{
    scoring::ProfileAnalyzer,
    tui::{
        app::{InputMode, Screen},
        ui, App, Event as TuiEvent, EventHandler,
    },
};

pub async fn run_tui(analyzer: ProfileAnalyzer, profile: Option<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = match profile.as_deref() {
        Some(p) => App::with_profile(p),
        None => App::new(),
    };
    let app = Arc::new(Mutex::new(app));
    let events = EventHandler::new(250);
    let analyzer = Arc::new(analyzer);

    terminal.clear()?;

    if profile.is_some() {
        start_analysis(&app, &analyzer).await;
    }

    let res = run_app(&mut terminal, app, events, analyzer).await;

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn start_analysis(app: &Arc<Mutex<App>>, analyzer: &Arc<ProfileAnalyzer>) {
    let mut app_guard = app.lock().await;
    let Some(lookup) = app_guard.take_lookup() else {
        return;
    };
    app_guard.set_loading(&format!("Fetching {}...", lookup));
    drop(app_guard);

    let app = Arc::clone(app);
    let analyzer = Arc::clone(analyzer);
    tokio::spawn(async move {
        let outcome = analyzer.analyze(&lookup).await;
        let mut app = app.lock().await;
        match outcome {
            Ok(result) => app.set_result(result),
            Err(e) => app.set_error(&e.to_string()),
        }
    });
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
    events: EventHandler,
    analyzer: Arc<ProfileAnalyzer>,
) -> Result<()> {
    loop {
        {
            let app_guard = app.lock().await;
            if app_guard.should_quit {
                return Ok(());
            }
            terminal.draw(|f| ui::draw(f, &app_guard))?;
        }

        let TuiEvent::Key(key) = events.next()? else {
            continue;
        };

        let mut app_guard = app.lock().await;
        let screen = app_guard.current_screen.clone();
        let mode = app_guard.input_mode.clone();
        match screen {
            Screen::Main => match (mode, key.code) {
                (_, KeyCode::Esc) => app_guard.should_quit = true,
                (InputMode::Editing, KeyCode::Enter) => {
                    drop(app_guard);
                    start_analysis(&app, &analyzer).await;
                }
                (InputMode::Editing, KeyCode::Char(c)) => app_guard.current_input.push(c),
                (InputMode::Editing, KeyCode::Backspace) => {
                    app_guard.current_input.pop();
                }
                (InputMode::Normal, KeyCode::Char('q')) => app_guard.should_quit = true,
                (InputMode::Normal, _) => app_guard.input_mode = InputMode::Editing,
                _ => {}
            },
            Screen::Results => match key.code {
                KeyCode::Char('b') => app_guard.back_to_main(),
                KeyCode::Char('q') | KeyCode::Esc => app_guard.should_quit = true,
                _ => {}
            },
            Screen::Loading => {}
        }
    }
}
