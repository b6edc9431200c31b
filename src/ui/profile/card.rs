//! Profile card rendering: avatar over name over bio.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::github::inside_circle;
use crate::ui::layout::{card_rows, centered_columns};
use crate::ui::theme::{ACCENT, HEADER_TEXT, PLACEHOLDER, STATUS_WARN};

use super::state::{AvatarSlot, ProfileViewState};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const WARNING_ICON: &str = "⚠";
const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";

/// Draws one avatar slot into a square of `edge` columns by `edge / 2` rows.
pub struct AvatarWidget<'a> {
    slot: AvatarSlot<'a>,
    edge: u16,
}

impl<'a> AvatarWidget<'a> {
    pub fn new(slot: AvatarSlot<'a>, edge: u16) -> Self {
        Self { slot, edge }
    }

    /// Terminal rows taken by an `edge`-pixel avatar.
    pub fn rows(edge: u16) -> u16 {
        edge.div_ceil(2)
    }
}

impl Widget for AvatarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.slot {
            AvatarSlot::Placeholder => {
                let edge = u32::from(self.edge);
                paint_pixels(area, buf, edge, |x, y| {
                    inside_circle(edge, x, y).then_some(PLACEHOLDER)
                });
            }
            AvatarSlot::Image(image) => {
                paint_pixels(area, buf, image.edge(), |x, y| {
                    image.pixel(x, y).map(|(r, g, b)| Color::Rgb(r, g, b))
                });
            }
            AvatarSlot::Progress { tick } => {
                let frame = SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()];
                draw_centered(area, buf, frame, Style::default().fg(ACCENT));
            }
            AvatarSlot::Warning => {
                draw_centered(area, buf, WARNING_ICON, Style::default().fg(STATUS_WARN));
            }
        }
    }
}

/// Packs two vertical pixels per cell using half-block glyphs.
fn paint_pixels(area: Rect, buf: &mut Buffer, edge: u32, color_at: impl Fn(u32, u32) -> Option<Color>) {
    let cols = u16::try_from(edge).unwrap_or(u16::MAX).min(area.width);
    let rows = u16::try_from(edge.div_ceil(2))
        .unwrap_or(u16::MAX)
        .min(area.height);

    for row in 0..rows {
        for col in 0..cols {
            let x = u32::from(col);
            let y = u32::from(row) * 2;
            let (symbol, fg, bg) = match (color_at(x, y), color_at(x, y + 1)) {
                (Some(top), Some(bottom)) => (UPPER_HALF, top, bottom),
                (Some(top), None) => (UPPER_HALF, top, Color::Reset),
                (None, Some(bottom)) => (LOWER_HALF, bottom, Color::Reset),
                (None, None) => continue,
            };
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(symbol).set_fg(fg).set_bg(bg);
            }
        }
    }
}

fn draw_centered(area: Rect, buf: &mut Buffer, symbol: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let x = area.x + area.width / 2;
    let y = area.y + area.height / 2;
    buf.set_string(x, y, symbol, style);
}

/// Renders the whole card into `area`.
pub fn render_profile_card(frame: &mut Frame<'_>, area: Rect, state: &ProfileViewState, edge: u16) {
    let slots = state.slots();
    let avatar_rows = AvatarWidget::rows(edge);
    let (avatar_row, name_row, bio_row) = card_rows(area, avatar_rows);

    let avatar_area = centered_columns(avatar_row, edge, avatar_rows, 0);
    frame.render_widget(AvatarWidget::new(slots.avatar, edge), avatar_area);

    let name = Paragraph::new(Line::from(Span::styled(
        slots.name,
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(name, name_row);

    let bio = Paragraph::new(slots.bio)
        .style(Style::default().fg(HEADER_TEXT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(bio, bio_row);
}
