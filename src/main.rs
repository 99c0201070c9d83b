//! vitae: A section editor for structured resumes.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use edtui::EditorEventHandler;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vitae::{app_state, config, input, ui};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(about = "Section editor for structured resumes", long_about = None)]
struct Args {
    /// JSON file holding the resume sections (a demo resume is used when omitted)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();
    init_tracing(&cfg.log_level);

    let sections = match &args.path {
        Some(path) => input::read_sections(path)?,
        None => input::demo_resume(),
    };

    let state = app_state::AppState::new(sections, &cfg);
    let sections = run_tui(state)?;

    let json = serde_json::to_string_pretty(&sections).context("serialising sections")?;
    println!("{json}");
    Ok(())
}

/// Logs go to the file named by `VITAE_LOG`; without it nothing is written, since the
/// terminal belongs to the UI.
fn init_tracing(default_level: &str) {
    let Some(path) = std::env::var_os("VITAE_LOG") else {
        return;
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %PathBuf::from(&path).display(), "Logging initialized");
        }
        Err(e) => eprintln!("Failed to open log file {}: {e}", PathBuf::from(path).display()),
    }
}

fn run_tui(mut app: app_state::AppState) -> io::Result<Vec<vitae::Section>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor_handler = EditorEventHandler::default();

    let result = run_app(&mut terminal, &mut app, &mut editor_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(app.sections)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    editor_handler: &mut EditorEventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if app.current_view != app_state::View::Edit {
            app.message = None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match app.current_view {
            app_state::View::List => match key.code {
                KeyCode::Up if ctrl => app.drag_by(-1),
                KeyCode::Down if ctrl => app.drag_by(1),
                KeyCode::Enter | KeyCode::Esc if app.editor.dragging().is_some() => {
                    app.drop_drag();
                }
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => app.toggle_current(),
                KeyCode::Tab | KeyCode::Right => {
                    if app.editor.expanded().is_some() {
                        app.enter_fields();
                    }
                }
                KeyCode::Char('d') => app.delete_current(),
                KeyCode::Char('v') => app.toggle_visibility(),
                KeyCode::Char('r') => app.start_rename(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.add_section(c as usize - '1' as usize);
                }
                _ => {}
            },
            app_state::View::Fields => match key.code {
                KeyCode::Esc | KeyCode::Left => app.exit_fields(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_control(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_control(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_control(),
                _ => {}
            },
            app_state::View::Edit => {
                let normal = app
                    .editor_state
                    .as_ref()
                    .is_some_and(|state| state.mode == edtui::EditorMode::Normal);
                if key.code == KeyCode::Esc && normal {
                    app.exit_edit();
                } else if let Some(ref mut editor_state) = app.editor_state {
                    editor_handler.on_key_event(key, editor_state);
                    app.push_edit();
                }
            }
        }
    }
}
