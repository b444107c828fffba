mod learning;
mod login;
mod quiz;
mod result;
mod select;
mod settings;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Login { .. } => login::render(frame, area, app),
        Screen::Courses { .. }
        | Screen::Years { .. }
        | Screen::Subjects { .. }
        | Screen::Topics { .. } => select::render(frame, area, app),
        Screen::Learning { .. } => learning::render(frame, area, app),
        Screen::GeneratingQuiz => render_generating(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Results => result::render(frame, area, app),
        Screen::Settings { .. } => settings::render(frame, area, app),
    }
}

fn render_generating(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let topic = app.selected_topic().map_or("...", |t| t.title);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GENERATING QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("Asking the tutor model about {topic}").fg(Color::DarkGray)),
        Line::from(""),
        Line::from("this can take a few seconds".fg(Color::DarkGray)),
    ];

    let widget = ratatui::widgets::Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
