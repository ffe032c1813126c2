use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::presenter::{render_results, spinner};
use crate::ui::search::{category_label, SearchMode, SearchState};
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POKE_YELLOW, STATUS_ERROR,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.search().mode), header);
    frame.render_widget(Clear, body);

    let banner_text = app.search().error();
    let (form_area, banner_area, results_area) =
        body_sections(body, u16::from(banner_text.is_some()));

    let form_block = Block::default()
        .title(Span::styled(
            app.search().mode.label(),
            Style::default().fg(POKE_YELLOW),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.focus() == Focus::Form {
            FOCUS_BORDER
        } else {
            GLOBAL_BORDER
        }));
    frame.render_widget(
        Paragraph::new(form_lines(app.search(), app.animation_tick())).block(form_block),
        form_area,
    );

    if let Some(message) = banner_text {
        let banner = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
        frame.render_widget(banner, banner_area);
    }

    render_results(frame, results_area, app);

    frame.render_widget(Footer::widget(footer, app), footer);
}

/// Mode tabs, the field, its validation line and the submit control.
pub fn form_lines(search: &SearchState, animation_tick: u8) -> Vec<Line<'static>> {
    let active = Style::default()
        .fg(POKE_YELLOW)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let inactive = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);

    let tab = |mode: SearchMode, label: &'static str| {
        Span::styled(
            format!(" {} ", label),
            if search.mode == mode { active } else { inactive },
        )
    };
    let tabs = Line::from(vec![
        tab(SearchMode::Name, "Name"),
        Span::raw(" "),
        tab(SearchMode::Type, "Type"),
        Span::styled("   (Ctrl+T to switch)", inactive),
    ]);

    let field = match search.mode {
        SearchMode::Name if search.query.is_empty() => Line::from(vec![
            Span::styled("Name: ", inactive),
            Span::styled("Enter Pokemon Name", inactive.add_modifier(Modifier::ITALIC)),
        ]),
        SearchMode::Name => Line::from(vec![
            Span::styled("Name: ", inactive),
            Span::styled(format!("{}▏", search.query), text),
        ]),
        SearchMode::Type => {
            let choice = search
                .selected_category()
                .map(category_label)
                .unwrap_or_else(|| "Select a type".to_string());
            Line::from(vec![
                Span::styled("Type: ", inactive),
                Span::styled(format!("◀ {} ▶", choice), text),
            ])
        }
    };

    let validation = Line::from(Span::styled(
        search.validation.clone().unwrap_or_default(),
        Style::default().fg(STATUS_ERROR),
    ));

    let submit = if search.is_loading() {
        Line::from(Span::styled(
            format!("[ Searching... {} ]", spinner(animation_tick)),
            inactive,
        ))
    } else {
        Line::from(Span::styled(
            "[ Submit ]",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
    };

    vec![tabs, field, validation, submit]
}
