use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, LoginPhase, Screen};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Screen::Login {
        phase,
        email_input,
        code_input,
        error,
        info,
    } = &app.screen
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let (prompt, value, hint) = match phase {
        LoginPhase::Email => (
            "College email",
            email_input.as_str(),
            "enter send OTP  ·  esc quit",
        ),
        LoginPhase::Code => (
            "6-digit OTP",
            code_input.as_str(),
            "enter verify  ·  r resend  ·  esc change email",
        ),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "LERNO",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Sign in with your college email".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{prompt}: "), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White).bold()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    if let Some(info) = info {
        content.push(Line::from(Span::styled(
            info.as_str(),
            Style::default().fg(Color::Green),
        )));
    } else {
        content.push(Line::from(""));
    }
    if let Some(error) = error {
        content.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }

    content.push(Line::from(""));
    content.push(Line::from(hint.fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
