use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use skywatch_core::WeatherSnapshot;

use super::components::colors;

/// Full weather detail layout for a successful lookup.
pub fn render(f: &mut Frame, snapshot: &WeatherSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Location
            Constraint::Length(1), // Temperature
            Constraint::Length(1), // Condition
            Constraint::Length(1), // Icon reference
            Constraint::Length(1), // Spacer
            Constraint::Min(8),    // Metrics card
        ])
        .split(area);

    let location = Line::from(vec![
        Span::styled(
            snapshot.location.as_str(),
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(snapshot.country.as_str(), Style::default().fg(colors::DIMMED)),
    ]);
    f.render_widget(Paragraph::new(location).alignment(Alignment::Center), chunks[0]);

    let temperature = Span::styled(
        format!("{} °C", fmt_metric(snapshot.temp_c)),
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(temperature).alignment(Alignment::Center), chunks[1]);

    let condition =
        Span::styled(snapshot.condition.as_str(), Style::default().fg(colors::DIMMED));
    f.render_widget(Paragraph::new(condition).alignment(Alignment::Center), chunks[2]);

    let icon = Span::styled(snapshot.icon_url.as_str(), Style::default().fg(colors::DIMMED));
    f.render_widget(Paragraph::new(icon).alignment(Alignment::Center), chunks[3]);

    render_metrics(f, snapshot, chunks[5]);
}

fn render_metrics(f: &mut Frame, snapshot: &WeatherSnapshot, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = card.inner(area);
    f.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2), Constraint::Length(2)])
        .split(inner);

    let cells: [(&str, String); 6] = [
        ("Humidity", fmt_metric(snapshot.humidity)),
        ("Wind Speed", format!("{} km/h", fmt_metric(snapshot.wind_kph))),
        ("UV", fmt_metric(snapshot.uv)),
        ("Precipitation", format!("{} mm", fmt_metric(snapshot.precip_mm))),
        ("Local Time", snapshot.local_time()),
        ("Local Date", snapshot.local_date()),
    ];

    for (row, pair) in cells.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);

        for (col, (key, value)) in pair.iter().enumerate() {
            render_key_val(f, key, value, columns[col]);
        }
    }
}

/// Value over label, the value carrying the weight.
fn render_key_val(f: &mut Frame, key: &str, value: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(key.to_string(), Style::default().fg(colors::DIMMED))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Metrics print without a trailing `.0`, with one decimal otherwise.
fn fmt_metric(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.1}") }
}
