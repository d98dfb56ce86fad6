use ratatui::{style::Style, text::Span};

use super::colors;

/// Spinner frames shown while a lookup is in flight
const FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner character for the current frame
pub fn frame(frame: usize) -> Span<'static> {
    let ch = FRAMES[frame % FRAMES.len()];
    Span::styled(ch.to_string(), Style::default().fg(colors::ACCENT))
}
