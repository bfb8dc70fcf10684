//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ActionKind, GamePhase};

/// Width of the game card in terminal columns.
pub const CARD_W: u16 = 46;
/// Height of the game card in terminal rows.
pub const CARD_H: u16 = 17;

const LABEL_W: u16 = 7;
const STEP_W: u16 = 4;

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(160, 160, 175)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const BORDER_ERROR: CellStyle = CellStyle::fg(Rgb::new(235, 70, 70)).bold();
const HEART: CellStyle = CellStyle::fg(Rgb::new(230, 60, 80));
const GOOD: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
const BAD: CellStyle = CellStyle::fg(Rgb::new(235, 70, 70)).bold();
const GOLD: CellStyle = CellStyle::fg(Rgb::new(240, 200, 60)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Glyph shown on the order ticket for an action
pub fn action_glyph(kind: ActionKind) -> char {
    match kind {
        ActionKind::Chop => '/',
        ActionKind::Fry => '@',
        ActionKind::Boil => '~',
    }
}

pub fn action_label(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Chop => "CHOP",
        ActionKind::Fry => "FRY",
        ActionKind::Boil => "BOIL",
    }
}

fn action_style(kind: ActionKind) -> CellStyle {
    let fg = match kind {
        ActionKind::Chop => Rgb::new(120, 200, 240),
        ActionKind::Fry => Rgb::new(250, 170, 60),
        ActionKind::Boil => Rgb::new(120, 220, 160),
    };
    CellStyle::fg(fg).bold()
}

/// A lightweight terminal view for the kitchen game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the card within `viewport`
    pub fn card_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(CARD_W) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CARD_H) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (x, y) = self.card_origin(viewport);
        let border = if snap.error_flash && snap.phase == GamePhase::Playing {
            BORDER_ERROR
        } else {
            BORDER
        };
        draw_card(fb, x, y, border);
        put_centered(fb, x, CARD_W, y, " FAST KITCHEN ", VALUE);

        match snap.phase {
            GamePhase::Menu => self.draw_menu(fb, snap, x, y),
            GamePhase::Playing => self.draw_playing(fb, snap, x, y),
            GamePhase::GameOver => self.draw_game_over(fb, snap, x, y),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        put_centered(fb, x, CARD_W, y + 3, "Reproduce each order", TEXT);
        put_centered(fb, x, CARD_W, y + 4, "before the timer runs out.", TEXT);
        draw_legend(fb, x, y + 7);
        put_centered(fb, x, CARD_W, y + 10, "ENTER start   Q quit", HINT);

        let text_x = x + (CARD_W - 14) / 2;
        let after = fb.put_str(text_x, y + 13, "HIGH SCORE ", LABEL);
        fb.put_u32(after, y + 13, snap.high_score, GOLD);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let left = x + 2;

        // Stats row.
        let after = fb.put_str(left, y + 2, "SCORE ", LABEL);
        fb.put_u32(after, y + 2, snap.score, VALUE);
        let after = fb.put_str(left + 15, y + 2, "LEVEL ", LABEL);
        fb.put_u32(after, y + 2, snap.level, VALUE);
        let mut hx = fb.put_str(left + 28, y + 2, "LIVES ", LABEL);
        for i in 0..snap.max_lives {
            let ch = if i < snap.lives { '♥' } else { '♡' };
            fb.put_char(hx, y + 2, ch, HEART);
            hx += 1;
        }
        let after = fb.put_str(left, y + 3, "BEST  ", LABEL);
        fb.put_u32(after, y + 3, snap.high_score, GOLD);

        // Order ticket and progress.
        fb.put_str(left, y + 5, "ORDER", LABEL);
        fb.put_str(left, y + 7, "DONE", LABEL);
        for (i, &kind) in snap.order.iter().enumerate() {
            let sx = left + LABEL_W + (i as u16) * STEP_W;
            draw_step(fb, sx, y + 5, action_glyph(kind), action_style(kind));

            match snap.progress.get(i) {
                Some(&done) => draw_step(fb, sx, y + 7, action_glyph(done), GOOD),
                None => draw_step(fb, sx, y + 7, '·', HINT),
            }
        }

        // Countdown.
        fb.put_str(left, y + 9, "TIME", LABEL);
        let bar_x = left + LABEL_W;
        let bar_w = CARD_W - 4 - LABEL_W - 6;
        let filled = timer_cells(snap, bar_w);
        let bar_style = timer_style(snap);
        for i in 0..bar_w {
            if i < filled {
                fb.put_char(bar_x + i, y + 9, '█', bar_style);
            } else {
                fb.put_char(bar_x + i, y + 9, '░', HINT);
            }
        }
        put_seconds(fb, bar_x + bar_w + 1, y + 9, snap.time_left_ms, VALUE);

        // Status line.
        if snap.intermission {
            put_centered(fb, x, CARD_W, y + 11, "ORDER UP!", GOOD);
        } else if snap.error_flash {
            put_centered(fb, x, CARD_W, y + 11, "OOPS!", BAD);
        }

        draw_legend(fb, x, y + 13);
        put_centered(fb, x, CARD_W, y + 14, "R restart   Q quit", HINT);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        put_centered(fb, x, CARD_W, y + 3, "GAME OVER", BAD);

        let text_x = x + (CARD_W - 12) / 2;
        let after = fb.put_str(text_x, y + 5, "SCORE ", LABEL);
        fb.put_u32(after, y + 5, snap.score, VALUE);
        let after = fb.put_str(text_x, y + 6, "BEST  ", LABEL);
        fb.put_u32(after, y + 6, snap.high_score, GOLD);
        let after = fb.put_str(text_x, y + 7, "ORDERS ", LABEL);
        fb.put_u32(after, y + 7, snap.orders_completed, VALUE);

        if snap.new_high_score {
            put_centered(fb, x, CARD_W, y + 9, "NEW HIGH SCORE!", GOLD);
        }

        put_centered(fb, x, CARD_W, y + 12, "ENTER or R play again", HINT);
        put_centered(fb, x, CARD_W, y + 13, "Q quit", HINT);
    }
}

/// Number of filled timer-bar cells out of `bar_w`.
///
/// Rounds up so any time left shows at least one cell.
pub fn timer_cells(snap: &GameSnapshot, bar_w: u16) -> u16 {
    if snap.time_limit_ms == 0 {
        return 0;
    }
    let left = snap.time_left_ms.min(snap.time_limit_ms) as u64;
    let limit = snap.time_limit_ms as u64;
    ((left * bar_w as u64).div_ceil(limit)) as u16
}

fn timer_style(snap: &GameSnapshot) -> CellStyle {
    let fraction = snap.timer_fraction();
    if fraction > 0.5 {
        GOOD
    } else if fraction > 0.25 {
        GOLD
    } else {
        BAD
    }
}

fn draw_card(fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
    let (w, h) = (CARD_W, CARD_H);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_step(fb: &mut FrameBuffer, x: u16, y: u16, glyph: char, style: CellStyle) {
    fb.put_char(x, y, '[', HINT);
    fb.put_char(x + 1, y, glyph, style);
    fb.put_char(x + 2, y, ']', HINT);
}

fn draw_legend(fb: &mut FrameBuffer, x: u16, y: u16) {
    // "1 / CHOP   2 @ FRY   3 ~ BOIL"
    let mut cx = x + (CARD_W - 29) / 2;
    for (i, kind) in ActionKind::ALL.into_iter().enumerate() {
        if i > 0 {
            cx += 3;
        }
        cx = fb.put_u32(cx, y, i as u32 + 1, LABEL);
        fb.put_char(cx + 1, y, action_glyph(kind), action_style(kind));
        cx = fb.put_str(cx + 3, y, action_label(kind), TEXT);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

fn put_seconds(fb: &mut FrameBuffer, x: u16, y: u16, ms: u32, style: CellStyle) {
    let cx = fb.put_u32(x, y, ms / 1000, style);
    fb.put_char(cx, y, '.', style);
    let cx = fb.put_u32(cx + 1, y, (ms % 1000) / 100, style);
    fb.put_char(cx, y, 's', style);
}
