use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use skywatch_core::QueryState;

use super::app::App;

pub mod components;
mod detail;

use self::components::{colors, spinner};

/// Draw the whole screen from the app state.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search field
            Constraint::Length(1), // Notice
            Constraint::Min(10),   // Result area
        ])
        .split(area);

    render_title(f, chunks[0]);
    render_search(f, app, chunks[1]);
    render_notice(f, app, chunks[2]);
    render_result(f, app, chunks[3]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));

    let title = Paragraph::new(Span::styled(
        "skywatch",
        Style::default().fg(colors::PRIMARY).add_modifier(Modifier::BOLD),
    ))
    .block(block)
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Search for any location ",
            Style::default().fg(colors::DIMMED),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER));

    let inner = block.inner(area);
    let field = Paragraph::new(app.input.as_str()).block(block);
    f.render_widget(field, area);

    // Cursor sits after the chars left of the byte offset.
    let prefix_width = app.input[..app.input_cursor].chars().count() as u16;
    f.set_cursor_position(Position::new(inner.x + prefix_width, inner.y));
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(colors::WARNING),
        ));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    match app.query_state() {
        QueryState::Idle => {
            let hint = Paragraph::new(Span::styled(
                "Type a city and press Enter",
                Style::default().fg(colors::DIMMED),
            ))
            .alignment(Alignment::Center);
            f.render_widget(hint, area);
        }
        QueryState::Loading => {
            let line = Line::from(vec![
                spinner::frame(app.spinner_frame),
                Span::raw(" "),
                Span::styled("Fetching current conditions", Style::default().fg(colors::DIMMED)),
            ]);
            f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
        QueryState::Error(message) => {
            let text = Paragraph::new(Span::styled(message, Style::default().fg(colors::ERROR)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(text, area);
        }
        QueryState::Success(snapshot) => detail::render(f, &snapshot, area),
    }
}
