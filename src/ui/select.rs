//! The course/year/subject/topic selection screens.
//!
//! All four are the same list widget over different slices of the catalog.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle, cursor, rows) = match &app.screen {
        Screen::Courses { cursor } => (
            "Select Course".to_string(),
            "What are you studying?".to_string(),
            *cursor,
            app.courses()
                .iter()
                .map(|c| (c.code.to_string(), c.name.to_string()))
                .collect(),
        ),
        Screen::Years { cursor } => (
            "Select Year".to_string(),
            app.selected_course()
                .map(|c| c.name.to_string())
                .unwrap_or_default(),
            *cursor,
            app.selected_course()
                .map(|c| {
                    c.years
                        .iter()
                        .map(|y| {
                            (
                                y.label.to_string(),
                                format!("{} subjects", y.subjects.len()),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default(),
        ),
        Screen::Subjects { cursor } => (
            "Select Subject".to_string(),
            app.selected_year()
                .map(|y| y.label.to_string())
                .unwrap_or_default(),
            *cursor,
            app.selected_year()
                .map(|y| {
                    y.subjects
                        .iter()
                        .map(|s| (s.code.to_string(), s.name.to_string()))
                        .collect()
                })
                .unwrap_or_default(),
        ),
        Screen::Topics { cursor } => (
            app.selected_subject()
                .map(|s| format!("{} - Select Topic", s.code))
                .unwrap_or_else(|| "Select Topic".to_string()),
            "Pick a lesson to learn or get quizzed on".to_string(),
            *cursor,
            app.selected_subject()
                .map(|s| {
                    s.topics
                        .iter()
                        .map(|t| {
                            let extra = if t.video_url.is_some() {
                                "video lesson".to_string()
                            } else {
                                String::new()
                            };
                            (t.title.to_string(), extra)
                        })
                        .collect()
                })
                .unwrap_or_default(),
        ),
        _ => return,
    };

    render_list(frame, area, app, &title, &subtitle, cursor, rows);
}

#[allow(clippy::too_many_arguments)]
fn render_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    subtitle: &str,
    cursor: usize,
    rows: Vec<(String, String)>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_user_line(frame, chunks[0], app);

    let header = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[1]);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() * 2);
    for (index, (label, detail)) in rows.iter().enumerate() {
        let is_selected = index == cursor;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(label.clone(), style),
        ];
        if !detail.is_empty() {
            spans.push(Span::styled(
                format!("  ·  {}", detail),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[2]);

    let controls = Paragraph::new("j/k navigate  ·  enter select  ·  esc back  ·  s settings  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_user_line(frame: &mut Frame, area: Rect, app: &App) {
    let who = app
        .profile()
        .map(|p| format!("{} <{}>", p.name, p.email))
        .unwrap_or_default();
    let widget = Paragraph::new(who)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
