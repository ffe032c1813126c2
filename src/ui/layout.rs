use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the form block: borders, mode tabs, field, validation
/// line and submit button.
pub const FORM_HEIGHT: u16 = 6;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into form, error banner (empty when there is no error)
/// and results.
pub fn body_sections(body: Rect, banner_lines: u16) -> (Rect, Rect, Rect) {
    let banner_height = if banner_lines == 0 { 0 } else { banner_lines + 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}
