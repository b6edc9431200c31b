use crate::ui::profile::Activation;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, activation: Activation) -> Paragraph<'static> {
        let hints = " q/Esc/Ctrl+Q: Quit │ r: Redraw │ ";
        let (status, status_color) = status_text(activation);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used = hints.chars().count() + status.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

pub fn status_text(activation: Activation) -> (&'static str, Color) {
    match activation {
        Activation::Idle => ("Starting…", HEADER_TEXT),
        Activation::Fetching => ("Loading profile…", STATUS_WARN),
        Activation::Loaded => ("Profile loaded", STATUS_OK),
        Activation::Failed(_) => ("Profile unavailable", STATUS_ERROR),
    }
}
