use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::{Alignment, Frame},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::client::app::App;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn lines(text: Vec<String>) -> Vec<Line<'static>> {
    text.into_iter().map(Line::from).collect()
}

pub fn render(app: &App, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
        .split(f.size());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    f.render_widget(
        Paragraph::new(app.view.title.clone())
            .block(panel("Deckbuilder Arcana"))
            .alignment(Alignment::Center),
        rows[0],
    );

    f.render_widget(
        Paragraph::new(lines(app.view.deck_lines()))
            .block(panel("Main deck"))
            .scroll((app.scroll, 0)),
        columns[0],
    );

    f.render_widget(
        Paragraph::new(lines(app.view.role_lines())).block(panel("Roles")),
        columns[1],
    );

    f.render_widget(
        Paragraph::new(vec![
            Line::from(app.view.message.clone()),
            Line::from("`j`/`k` scroll · `q` or `Esc` quits"),
        ])
        .block(panel("Summary"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true }),
        rows[2],
    );
}
