use ratatui::style::Color;

pub const CARD_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_BORDER: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const DIVIDER: Color = Color::Rgb(0xf0, 0xf1, 0xf3);
pub const CONTROL_BACKGROUND: Color = Color::Rgb(0xf0, 0xf1, 0xf3);
pub const TEXT_STRONG: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const TEXT_VALUE: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TEXT_FAINT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACCENT_ORANGE: Color = Color::Rgb(0xf5, 0x7c, 0x1f);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTION_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const ACTION_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const FOOTER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
