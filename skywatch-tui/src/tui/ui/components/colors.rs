use ratatui::style::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const TEXT: Color = Color::White;
pub const DIMMED: Color = Color::DarkGray;
pub const BORDER: Color = Color::Gray;
pub const ACCENT: Color = Color::Yellow;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
