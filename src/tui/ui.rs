//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use super::app::App;
use crate::games::guessing::{GameSession, GameStatus};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Attempts / best score
            Constraint::Length(3), // Guess field
            Constraint::Length(3), // Status
            Constraint::Min(5),    // History
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Number Guessing Game")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app.session());

    let input = Paragraph::new(app.input().text())
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Your guess (1-100)").borders(Borders::ALL));
    frame.render_widget(input, chunks[2]);

    let status_color = match app.session().status() {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };
    let status = Paragraph::new(app.message())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    draw_history(frame, chunks[4], app.session());

    let help = if app.session().status().is_terminal() {
        "r: new game  q: quit"
    } else {
        "0-9: type  Up/Down: step  Enter: submit  q: quit"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
    );
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, session: &GameSession) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Attempts remaining: {}",
        session.attempts_remaining()
    ))
    .style(Style::default().fg(Color::Blue))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(remaining, cols[0]);

    // Hidden until the first win.
    if let Some(best) = session.best_score() {
        let best = Paragraph::new(format!("{best} attempts"))
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            .block(Block::default().title("Best Score").borders(Borders::ALL));
        frame.render_widget(best, cols[1]);
    }
}

fn draw_history(frame: &mut Frame, area: Rect, session: &GameSession) {
    let rows = session.history().iter().map(|record| {
        Row::new(vec![
            record.attempt_number().to_string(),
            record.guess().to_string(),
            record.timestamp().clone(),
            record.hint().to_string(),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["Attempt", "Guess", "Time", "Hint"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Game History").borders(Borders::ALL));

    frame.render_widget(table, area);
}
