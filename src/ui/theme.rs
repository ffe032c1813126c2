use ratatui::style::Color;

pub const POKE_RED: Color = Color::Rgb(0xe3, 0x35, 0x0d);
pub const POKE_YELLOW: Color = Color::Rgb(0xff, 0xcb, 0x05);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HIDDEN_BADGE: Color = Color::Rgb(0x9c, 0x27, 0xb0);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
