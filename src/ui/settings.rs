use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen, SettingsField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Screen::Settings {
        name_input,
        phone_input,
        focus,
        message,
    } = &app.screen
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let email = app.profile().map(|p| p.email.as_str()).unwrap_or("");
    let avatar_seed = app.profile().map(|p| p.avatar_seed.as_str()).unwrap_or("");

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SETTINGS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            email.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        field_line("Full Name", name_input, *focus == SettingsField::Name),
        Line::from(""),
        field_line("Phone", phone_input, *focus == SettingsField::Phone),
        Line::from(Span::styled(
            "10-digit mobile number",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Avatar generated from seed \"{avatar_seed}\""),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(message) = message {
        content.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(
        "tab switch field  ·  enter save  ·  del logout  ·  esc back".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { ">" } else { " " };
    Line::from(vec![
        Span::styled(format!("{marker} {label}: "), style),
        Span::styled(value, Style::default().fg(Color::White)),
        if focused {
            Span::styled("_", Style::default().fg(Color::Cyan))
        } else {
            Span::raw("")
        },
    ])
}
