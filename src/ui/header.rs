use crate::ui::search::SearchMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POKE_YELLOW};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    /// App title with the active search mode beside it.
    pub fn widget(mode: SearchMode) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(POKE_YELLOW)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::styled("  Pokemon Search Form", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode.label(), Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
