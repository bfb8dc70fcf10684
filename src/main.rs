//! Terminal Fast Kitchen runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use fast_kitchen::config::AppConfig;
use fast_kitchen::core::GameSnapshot;
use fast_kitchen::engine::{BellAudio, JsonFileStore, RenderSink, Session};
use fast_kitchen::input::{handle_key_event, should_quit};
use fast_kitchen::logging;
use fast_kitchen::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fast_kitchen::types::TICK_MS;

/// Render sink that draws snapshots to the terminal.
struct TerminalSink {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalSink {
    fn new(renderer: TerminalRenderer) -> Self {
        Self {
            view: GameView::default(),
            renderer,
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(seed = config.seed, path = %config.high_score_path.display(), "starting");

    let mut term = TerminalRenderer::stdout();
    term.enter()?;

    let result = run(&config, term);
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }

    // Always try to restore terminal state.
    let _ = TerminalRenderer::stdout().exit();
    result
}

fn run(config: &AppConfig, term: TerminalRenderer) -> Result<()> {
    let mut session = Session::new(
        config.game_config(),
        config.seed,
        TerminalSink::new(term),
        BellAudio::stdout(config.muted),
        JsonFileStore::new(&config.high_score_path),
    )?;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat would double-submit steps.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
                Event::Resize(_, _) => {
                    session.renderer_mut().renderer.invalidate();
                    session.redraw();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
