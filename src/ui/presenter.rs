//! Result views: the record card, the stat grid and the reference table.
//!
//! Line builders are pure so they can be asserted on without a terminal;
//! the `render_*` functions only place them in a frame.

use crate::api::{CategoryReference, Pokemon, StatEntry};
use crate::ui::app::{App, Focus};
use crate::ui::text::{title_case, upper_label};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, HIDDEN_BADGE, MUTED_TEXT,
    POKE_RED, POKE_YELLOW, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stat cells per grid row.
pub const STAT_COLUMNS: usize = 3;

pub const BACK_LABEL: &str = "« Back to list";

pub fn spinner(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// `"Pikachu #25"`.
pub fn record_title(pokemon: &Pokemon) -> String {
    format!("{} #{}", title_case(&pokemon.name), pokemon.id)
}

/// `"Pokemon Found: 6"`.
pub fn count_header(count: usize) -> String {
    format!("Pokemon Found: {}", count)
}

/// One `LABEL value` cell per stat, in upstream order.
pub fn stat_cells(stats: &[StatEntry]) -> Vec<String> {
    stats
        .iter()
        .map(|entry| format!("{:<15} {:>3}", upper_label(&entry.stat.name), entry.base_stat))
        .collect()
}

/// `[id, display name]` for one table row; `?` when the URL has no id.
pub fn reference_cells(reference: &CategoryReference) -> [String; 2] {
    let id = reference
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    [id, title_case(&reference.name)]
}

/// Record card, kept compact so the stat grid fits under the form on a
/// standard 80x24 terminal. Lines are clipped rather than wrapped.
pub fn record_lines(pokemon: &Pokemon) -> Vec<Line<'static>> {
    let heading = Style::default().fg(POKE_RED).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);

    let mut title = vec![Span::styled(
        record_title(pokemon),
        Style::default()
            .fg(POKE_YELLOW)
            .add_modifier(Modifier::BOLD),
    )];
    let types: Vec<String> = pokemon.type_names().into_iter().map(title_case).collect();
    if !types.is_empty() {
        title.push(Span::styled(format!("  {}", types.join(" / ")), text));
    }
    let mut lines = vec![Line::from(title)];

    let mut physique = vec![
        Span::styled("Height: ", label),
        Span::styled(format!("{:.1} m", pokemon.height as f32 / 10.0), text),
        Span::styled("   Weight: ", label),
        Span::styled(format!("{:.1} kg", pokemon.weight as f32 / 10.0), text),
    ];
    if let Some(experience) = pokemon.base_experience {
        physique.push(Span::styled("   Base XP: ", label));
        physique.push(Span::styled(experience.to_string(), text));
    }
    lines.push(Line::from(physique));

    if let Some(url) = pokemon.artwork_url() {
        lines.push(Line::from(vec![
            Span::styled("Artwork: ", label),
            Span::styled(url.to_string(), text),
        ]));
    }

    let mut abilities = vec![Span::styled("Abilities: ", label)];
    for (idx, ability) in pokemon.abilities.iter().enumerate() {
        if idx > 0 {
            abilities.push(Span::styled(", ", label));
        }
        abilities.push(Span::styled(title_case(&ability.ability.name), text));
        if ability.is_hidden {
            abilities.push(Span::raw(" "));
            abilities.push(Span::styled(
                " Hidden ",
                Style::default().fg(HEADER_TEXT).bg(HIDDEN_BADGE),
            ));
        }
    }
    lines.push(Line::from(abilities));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Stats", heading)));
    for row in stat_cells(&pokemon.stats).chunks(STAT_COLUMNS) {
        let spans: Vec<Span<'static>> = row
            .iter()
            .map(|cell| Span::styled(format!("  {}  ", cell), text))
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// The card as drawn: under a type list it starts with the back control.
pub fn record_card(pokemon: &Pokemon, with_back: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if with_back {
        lines.push(Line::from(Span::styled(
            format!("{} (Backspace)", BACK_LABEL),
            Style::default()
                .fg(FOCUS_BORDER)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }
    lines.extend(record_lines(pokemon));
    lines
}

fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(POKE_YELLOW)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

pub fn render_record(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'static>,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    let widget = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(widget, area);
}

/// Everything below the form and banner.
pub fn render_results(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let search = app.search();

    let focused = app.focus() == Focus::Results;
    let scroll = app.results().scroll;

    if let Some(record) = search.record() {
        let card = record_card(record, false);
        render_record(frame, area, panel("Details".to_string(), focused), card, scroll);
        return;
    }

    let Some(references) = search.references() else {
        let message = if search.is_loading() {
            format!("{} Searching...", spinner(app.animation_tick()))
        } else {
            String::new()
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(widget, area);
        return;
    };

    let title = count_header(references.len());
    let results = app.results();

    if let Some(record) = results.record() {
        let card = record_card(record, true);
        render_record(frame, area, panel(title, focused), card, scroll);
        return;
    }

    let status = if let Some(request) = results.in_flight() {
        Some(Line::from(Span::styled(
            format!(
                "{} Loading {}...",
                spinner(app.animation_tick()),
                title_case(&request.name)
            ),
            Style::default().fg(MUTED_TEXT),
        )))
    } else {
        results
            .error()
            .map(|message| Line::from(Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR))))
    };

    let status_height = u16::from(status.is_some());
    let table_area = Rect {
        height: area.height.saturating_sub(status_height),
        ..area
    };

    let rows: Vec<Row> = references
        .iter()
        .map(|reference| Row::new(reference_cells(reference).to_vec()))
        .collect();
    let header = Row::new(vec!["#", "Name"]).style(
        Style::default()
            .fg(MUTED_TEXT)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(rows, [Constraint::Length(7), Constraint::Min(10)])
        .header(header)
        .block(panel(title, focused))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(HEADER_TEXT))
        .highlight_symbol("▶ ");

    let selected = focused.then_some(results.cursor);
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, table_area, &mut table_state);

    if let Some(status) = status {
        let status_area = Rect {
            y: table_area.y + table_area.height,
            height: status_height,
            ..area
        };
        frame.render_widget(Paragraph::new(status), status_area);
    }
}
