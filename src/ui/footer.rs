use crate::ui::app::{App, Focus};
use crate::ui::search::SearchMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POKE_YELLOW};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `(key, action)` pairs for whatever currently has focus. `record_view`
/// is `Some(under_table)` while a record card fills the results area.
pub fn key_hints(
    focus: Focus,
    mode: SearchMode,
    record_view: Option<bool>,
) -> Vec<(&'static str, &'static str)> {
    let mut hints = match focus {
        Focus::Form => {
            let mut form = vec![("Enter", "Search")];
            if mode == SearchMode::Type {
                form.push(("←/→", "Type"));
            } else {
                form.push(("Ctrl+U", "Clear"));
            }
            form
        }
        Focus::Results => match record_view {
            Some(true) => vec![("↑/↓", "Scroll"), ("Bksp", "Back to list")],
            Some(false) => vec![("↑/↓", "Scroll"), ("Esc", "Form")],
            None => vec![("↑/↓", "Move"), ("Enter", "Open")],
        },
    };
    hints.push(("Ctrl+T", "Mode"));
    hints.push((
        "Tab",
        match focus {
            Focus::Form => "Results",
            Focus::Results => "Form",
        },
    ));
    hints.push(("Ctrl+Q", "Quit"));
    hints
}

pub struct Footer;

impl Footer {
    pub fn widget(area: Rect, app: &App) -> Paragraph<'static> {
        let key_style = Style::default().fg(POKE_YELLOW).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let hints = key_hints(
            app.focus(),
            app.search().mode,
            app.visible_record().map(|(_, under_table)| under_table),
        );
        let mut spans = Vec::with_capacity(hints.len() * 3 + 2);
        let mut used = 0usize;
        for (idx, (key, label)) in hints.into_iter().enumerate() {
            let lead = if idx == 0 { " " } else { "  " };
            used += lead.chars().count() + key.chars().count() + label.chars().count() + 1;
            spans.push(Span::raw(lead));
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {}", label), label_style));
        }

        // Right-align the version inside the borders; counts are in chars
        // because the hints contain arrows.
        let version = format!("v{} ", VERSION);
        let inner = area.width.saturating_sub(2) as usize;
        let padding = inner.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, Style::default().fg(MUTED_TEXT)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
