//! GameView: maps a [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::display::format_thousands;
use crate::core::RankMarker;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen::{Screen, WalletView};
use crate::types::Severity;

const NEON_RED: Rgb = Rgb::new(255, 0, 64);
const NEON_CYAN: Rgb = Rgb::new(0, 217, 255);
const NEON_GREEN: Rgb = Rgb::new(0, 255, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(130, 130, 150);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const SILVER: Rgb = Rgb::new(192, 192, 192);
const BRONZE: Rgb = Rgb::new(205, 127, 50);
const PROMPT: Rgb = Rgb::new(255, 220, 80);

const FOOTER: &str = "Enter guess  Tab help  F2 key  F3 login  F5 restart  Esc quit";
const SIDE_PANEL_W: u16 = 38;
/// Columns reserved for the rank marker ("SILVER" plus a gap).
const MARKER_W: u16 = 7;
const NAME_W: u16 = 12;

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

/// Terminal renderer for the quiz screen.
pub struct GameView {
    /// Card width in terminal columns, border included.
    card_w: u16,
    /// Card height in terminal rows, border included.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 44,
            card_h: 9,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(4),
            card_h: card_h.max(4),
        }
    }

    pub fn card_origin(&self) -> (u16, u16) {
        (1, 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: &Screen, guess: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        self.draw_header(fb, screen, viewport);

        let (card_x, card_y) = self.card_origin();
        self.draw_card(fb, screen, card_x, card_y);

        let mut y = card_y + self.card_h + 1;
        self.draw_guess_line(fb, guess, card_x, y);
        y += 1;
        self.draw_hint(fb, screen, card_x, y);
        y += 1;
        if let Some(cost) = screen.help_prompt {
            let msg = format!("Use help for {cost}? [y/n]");
            fb.put_str(card_x, y, &msg, CellStyle::fg(PROMPT).bold());
        }

        let side_x = card_x + self.card_w + 3;
        if side_x + SIDE_PANEL_W <= viewport.width {
            let after_board = self.draw_leaderboard(fb, screen, side_x, card_y);
            let wallet_w = viewport.width - side_x - 1;
            self.draw_wallet(fb, screen.wallet, side_x, after_board + 1, wallet_w);
        }

        self.draw_toasts(fb, screen, viewport);

        if viewport.height > 0 {
            fb.put_str(1, viewport.height - 1, FOOTER, CellStyle::fg(MUTED).dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &Screen, guess: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, guess, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, screen: &Screen, viewport: Viewport) {
        fb.put_str(1, 0, "TRADER QUIZ", CellStyle::fg(NEON_RED).bold());
        let score = format!("SCORE {}", format_thousands(screen.score as u64));
        let x = viewport.width.saturating_sub(score.chars().count() as u16 + 1);
        fb.put_str(x, 0, &score, CellStyle::fg(NEON_CYAN).bold());
    }

    fn draw_card(&self, fb: &mut FrameBuffer, screen: &Screen, x: u16, y: u16) {
        let border = if screen.card_flipped() {
            CellStyle::fg(NEON_GREEN)
        } else {
            CellStyle::fg(NEON_RED)
        };
        draw_border(fb, x, y, self.card_w, self.card_h, border);

        let inner_x = x + 2;
        let inner_w = self.card_w.saturating_sub(4);
        fb.put_str_clipped(inner_x, y + 1, &screen.level_label, inner_w, CellStyle::default().bold());

        // The image reference is long; wrap it over two rows.
        let split = screen
            .image_ref
            .char_indices()
            .nth(inner_w as usize)
            .map_or(screen.image_ref.len(), |(i, _)| i);
        let (head, tail) = screen.image_ref.split_at(split);
        fb.put_str_clipped(inner_x, y + 2, head, inner_w, CellStyle::fg(MUTED).dim());
        fb.put_str_clipped(inner_x, y + 3, tail, inner_w, CellStyle::fg(MUTED).dim());
        fb.put_str_clipped(inner_x, y + 4, &screen.image_alt, inner_w, CellStyle::fg(MUTED));

        let mid_y = y + self.card_h / 2 + 1;
        if let Some(score) = screen.completed {
            self.center_text(fb, x, mid_y, "ALL LEVELS COMPLETE", CellStyle::fg(NEON_GREEN).bold());
            let line = format!("FINAL SCORE {}", format_thousands(score as u64));
            self.center_text(fb, x, mid_y + 1, &line, CellStyle::default().bold());
        } else if let Some(text) = &screen.result_text {
            self.center_text(fb, x, mid_y, text, CellStyle::fg(NEON_GREEN).bold());
        } else {
            self.center_text(fb, x, mid_y, "? WHO IS THIS TRADER ?", CellStyle::fg(NEON_CYAN));
        }
    }

    fn center_text(&self, fb: &mut FrameBuffer, card_x: u16, y: u16, text: &str, style: CellStyle) {
        let inner_w = self.card_w.saturating_sub(2);
        let text_w = (text.chars().count() as u16).min(inner_w);
        let x = card_x + 1 + (inner_w - text_w) / 2;
        fb.put_str_clipped(x, y, text, inner_w, style);
    }

    fn draw_guess_line(&self, fb: &mut FrameBuffer, guess: &str, x: u16, y: u16) {
        let used = fb.put_str(x, y, "GUESS > ", CellStyle::fg(NEON_CYAN).bold());
        let typed = fb.put_str(x + used, y, guess, CellStyle::fg(TEXT));
        fb.put_char(x + used + typed, y, '_', CellStyle::fg(NEON_CYAN));
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, screen: &Screen, x: u16, y: u16) {
        let used = fb.put_str(x, y, "HINT  > ", CellStyle::fg(PROMPT).bold());
        match &screen.hint {
            Some(hint) => fb.put_str(x + used, y, hint, CellStyle::fg(PROMPT)),
            None => fb.put_str(x + used, y, "press Tab (once per level)", CellStyle::fg(MUTED).dim()),
        };
    }

    /// Returns the first free row below the table.
    fn draw_leaderboard(&self, fb: &mut FrameBuffer, screen: &Screen, x: u16, y: u16) -> u16 {
        fb.put_str(x, y, "TOP TRADERS", CellStyle::fg(NEON_RED).bold());
        let mut row_y = y + 1;
        for row in &screen.leaderboard {
            let marker_style = match row.marker {
                RankMarker::Gold => CellStyle::fg(GOLD).bold(),
                RankMarker::Silver => CellStyle::fg(SILVER).bold(),
                RankMarker::Bronze => CellStyle::fg(BRONZE).bold(),
                RankMarker::Plain(_) => CellStyle::fg(MUTED),
            };
            fb.put_str(x, row_y, &row.marker.label(), marker_style);
            let name_style = if row.marker.is_podium() {
                CellStyle::default().bold()
            } else {
                CellStyle::default()
            };
            fb.put_str_clipped(x + MARKER_W, row_y, &row.name, NAME_W, name_style);

            let score_w = row.score_text.chars().count() as u16;
            let score_x = (x + SIDE_PANEL_W).saturating_sub(score_w);
            fb.put_str(score_x, row_y, &row.score_text, CellStyle::fg(NEON_CYAN));
            row_y += 1;
        }
        row_y
    }

    fn draw_wallet(&self, fb: &mut FrameBuffer, wallet: Option<WalletView>, x: u16, y: u16, max_w: u16) {
        fb.put_str(x, y, "WALLET", CellStyle::fg(NEON_RED).bold());
        let Some(w) = wallet else {
            fb.put_str(x, y + 1, "connecting...", CellStyle::fg(MUTED).dim());
            return;
        };

        fb.put_str_clipped(x, y + 1, w.address, max_w, CellStyle::default());
        if w.key_revealed {
            fb.put_str_clipped(x, y + 2, w.private_key, max_w, CellStyle::fg(PROMPT));
        } else {
            let masked: String = std::iter::repeat('•').take(20).collect();
            let used = fb.put_str(x, y + 2, &masked, CellStyle::fg(MUTED));
            fb.put_str(x + used + 1, y + 2, "[F2]", CellStyle::fg(MUTED).dim());
        }
    }

    fn draw_toasts(&self, fb: &mut FrameBuffer, screen: &Screen, viewport: Viewport) {
        let mut y = 1u16;
        for toast in screen.toasts.iter().rev() {
            if y + 1 >= viewport.height {
                break;
            }
            let color = match toast.severity {
                Severity::Info => NEON_CYAN,
                Severity::Success => NEON_GREEN,
                Severity::Error => NEON_RED,
            };
            let mut style = CellStyle::fg(Rgb::new(0, 0, 0)).on(color).bold();
            if toast.leaving {
                style = style.dim();
            }
            let text = format!(" {} ", toast.message);
            let w = (text.chars().count() as u16).min(viewport.width);
            let x = viewport.width.saturating_sub(w + 1);
            fb.put_str_clipped(x, y, &text, w, style);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

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
