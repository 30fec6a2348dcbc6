//! Terminal falling-block game (default binary).
//!
//! Reads settings from the environment, opens the best-score store, and
//! runs one frame loop: poll input until the next frame is due, advance the
//! session clock, draw, and flush the changed cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::core::GameSession;
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::store::JsonFileStore;
use tui_blockfall::term::{BoardView, FrameBuffer, ScorePanel, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;
use tui_blockfall::{logging, AppConfig};

type Session = GameSession<JsonFileStore, ScorePanel>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref(), config.log_level)?;
    log::info!(
        "starting: board {}x{}, drop interval {}ms, seed {}",
        config.board_width,
        config.board_height,
        config.drop_interval_ms,
        config.seed
    );

    let store = match JsonFileStore::open(&config.highscore_path) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("{:#}; starting with an empty best score", e);
            JsonFileStore::empty(&config.highscore_path)
        }
    };
    let mut session = GameSession::new(config.session_config(), store, ScorePanel::new());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("exiting with score {}", session.score());
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let started = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        last_frame = Instant::now();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = view.layout(viewport, session.board().width(), session.board().height());
        let now_ms = started.elapsed().as_millis() as u64;
        {
            let mut canvas = view.begin_frame(&mut fb, viewport, layout);
            session.update(now_ms, &mut canvas);
        }
        view.draw_panel(&mut fb, &layout, session.display());
        term.draw_swap(&mut fb)?;
    }
}
