//! Topic learning screen: lesson info, tutor transcript, question input.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Screen::Learning {
        input,
        transcript,
        notice,
        busy,
        scroll,
    } = &app.screen
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app, notice.as_deref());
    render_transcript(frame, chunks[1], transcript, *busy, *scroll);
    render_input(frame, chunks[2], input);

    let controls =
        Paragraph::new("enter ask tutor  ·  F2 generate quiz  ·  up/down scroll  ·  esc back")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, notice: Option<&str>) {
    let topic = app.selected_topic();
    let title = topic.map_or("Topic", |t| t.title);
    let video = topic
        .and_then(|t| t.video_url)
        .map(|url| format!("Lesson video: {url}"))
        .unwrap_or_else(|| "No lesson video for this topic".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(video, Style::default().fg(Color::DarkGray))),
    ];
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    transcript: &[crate::app::TutorExchange],
    busy: bool,
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    for exchange in transcript {
        lines.push(Line::from(vec![
            Span::styled(" you ", Style::default().fg(Color::Cyan).bold()),
            Span::styled(exchange.question.clone(), Style::default().fg(Color::White)),
        ]));
        for answer_line in exchange.answer.lines() {
            lines.push(Line::from(vec![
                Span::styled(" tutor ", Style::default().fg(Color::Green).bold()),
                Span::styled(answer_line.to_string(), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }
    if busy {
        lines.push(Line::from(Span::styled(
            " tutor is thinking...",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " Ask the tutor anything about this topic.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled("? ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
