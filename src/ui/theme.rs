use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x5e, 0x81, 0xac);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const NOTICE_SUCCESS: Color = Color::Rgb(0x3c, 0x76, 0x3d);
pub const NOTICE_ERROR: Color = Color::Rgb(0xa9, 0x44, 0x42);
pub const NOTICE_INFO: Color = Color::Rgb(0x31, 0x70, 0x8f);
