//! End-to-end session tests: real file store, bell audio and the terminal
//! renderer writing into memory instead of a tty.

use std::fs;
use std::path::PathBuf;

use fast_kitchen::core::{GameConfig, GameSnapshot};
use fast_kitchen::engine::{
    bell_count, BellAudio, HighScoreStore, JsonFileStore, RenderSink, Session,
};
use fast_kitchen::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fast_kitchen::types::{ActionKind, GameAction, GamePhase, SoundCue};

struct MemoryTerminal {
    view: GameView,
    renderer: TerminalRenderer<Vec<u8>>,
    fb: FrameBuffer,
    last: GameSnapshot,
}

impl MemoryTerminal {
    fn new() -> Self {
        Self {
            view: GameView::default(),
            renderer: TerminalRenderer::new(Vec::new()),
            fb: FrameBuffer::new(0, 0),
            last: GameSnapshot::default(),
        }
    }
}

impl RenderSink for MemoryTerminal {
    fn render(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        self.last.clone_from(snapshot);
        self.view
            .render_into(snapshot, Viewport::new(80, 24), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fast-kitchen-session-{}", std::process::id()));
    let _ = fs::create_dir_all(&dir);
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

type TestSession = Session<MemoryTerminal, BellAudio<Vec<u8>>, JsonFileStore>;

fn session(path: &PathBuf, seed: u32) -> TestSession {
    Session::new(
        GameConfig::instant(),
        seed,
        MemoryTerminal::new(),
        BellAudio::new(Vec::new(), false),
        JsonFileStore::new(path),
    )
    .unwrap()
}

fn wrong_step(session: &TestSession) -> ActionKind {
    let state = session.state();
    let expected = state.order()[state.progress().len()];
    ActionKind::ALL
        .into_iter()
        .find(|&a| a != expected)
        .unwrap()
}

fn play_orders_then_lose(session: &mut TestSession, orders: usize) {
    session.apply(GameAction::Start);
    for _ in 0..orders {
        let order = session.state().order().to_vec();
        for step in order {
            session.apply(GameAction::Submit(step));
        }
    }
    while session.state().phase() == GamePhase::Playing {
        let wrong = wrong_step(session);
        session.apply(GameAction::Submit(wrong));
    }
}

#[test]
fn high_score_survives_across_sessions() {
    let path = temp_path("survives.json");

    let mut first = session(&path, 1);
    assert_eq!(first.high_score(), 0);
    play_orders_then_lose(&mut first, 3);
    assert_eq!(first.state().score(), 30);
    assert!(first.snapshot().new_high_score);

    let stored = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["high_score"], 30);

    // A lower score does not overwrite the record.
    let mut second = session(&path, 2);
    assert_eq!(second.high_score(), 30);
    assert_eq!(second.snapshot().high_score, 30);
    play_orders_then_lose(&mut second, 1);
    assert!(!second.snapshot().new_high_score);
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 30);
}

#[test]
fn corrupt_high_score_file_starts_from_zero() {
    let path = temp_path("corrupt.json");
    fs::write(&path, "not json").unwrap();

    let mut session = session(&path, 3);
    assert_eq!(session.high_score(), 0);

    play_orders_then_lose(&mut session, 1);
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 10);
}

#[test]
fn every_change_reaches_the_terminal() {
    let path = temp_path("frames.json");
    let mut session = session(&path, 4);
    assert_eq!(session.renderer().renderer.frames(), 1);

    session.apply(GameAction::Start);
    assert_eq!(session.renderer().last.phase, GamePhase::Playing);

    let frames = session.renderer().renderer.frames();
    session.tick(16);
    assert_eq!(session.renderer().renderer.frames(), frames + 1);
    assert_eq!(
        session.renderer().last.time_left_ms,
        session.state().time_limit_ms() - 16
    );
    assert!(!session.renderer().renderer.writer().is_empty());
}

#[test]
fn bells_follow_the_cues() {
    let path = temp_path("bells.json");
    let mut session = session(&path, 5);
    session.apply(GameAction::Start);

    let order = session.state().order().to_vec();
    for step in &order {
        session.apply(GameAction::Submit(*step));
    }
    let wrong = wrong_step(&session);
    session.apply(GameAction::Submit(wrong));

    let expected = bell_count(SoundCue::Complete) + bell_count(SoundCue::Error);
    let rung = session
        .audio()
        .writer()
        .iter()
        .filter(|&&b| b == 0x07)
        .count();
    assert_eq!(rung, expected);
}
