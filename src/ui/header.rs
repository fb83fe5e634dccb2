use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, LOADING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, is_loading: bool) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled(
                "  tally",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(DIM_TEXT)),
            Span::styled("a reactive counter", Style::default().fg(DIM_TEXT)),
        ];
        if is_loading {
            spans.push(Span::styled("  │  ", Style::default().fg(DIM_TEXT)));
            spans.push(Span::styled("working", Style::default().fg(LOADING)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
