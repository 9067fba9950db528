//! Terminal UI for Trivia Board

mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{error, info, instrument};
use trivia_board::{BoardBuilder, TriviaSource};

use app::App;
use input::event_action;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the TUI client
pub async fn run_tui<S: TriviaSource + 'static>(builder: BoardBuilder<S>, rng: StdRng) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("trivia_board_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(crate::default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Trivia Board TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(builder, rng)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, then wait for a terminal event or the next tick.
#[instrument(skip_all)]
async fn run_app<S: TriviaSource + 'static>(terminal: &mut Term, mut app: App<S>) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(50));
    let mut area = Rect::default();

    app.start_build();

    loop {
        app.poll_builds();

        terminal.draw(|f| {
            area = f.area();
            ui::draw(
                f,
                app.session().board(),
                app.cursor(),
                app.status_message(),
            )
        })?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => {
                    let action = event_action(&event, |x, y| {
                        app.session().board().and_then(|board| ui::cell_at(area, board, x, y))
                    });
                    app.handle_action(action);
                }
                Some(Err(e)) => return Err(e.into()),
                None => {
                    info!("Terminal event stream closed");
                    return Ok(());
                }
            },
            // Picks up finished builds between key presses.
            _ = tick.tick() => {}
        }
    }
}
