use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7c, 0xc2, 0x6a);
pub const BODY_TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
