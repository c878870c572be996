use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{InteractiveApp, Screen};
use super::screens::{draw_home, draw_profile, draw_settings};
use crate::formatting::theme::styles;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Screen body
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);

    match app.screen {
        Screen::Home => draw_home(frame, chunks[1]),
        Screen::Profile => draw_profile(frame, chunks[1]),
        Screen::Settings => draw_settings(frame, chunks[1]),
    }

    draw_footer(frame, chunks[2]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let title = format!(" Coach | {} ", app.screen.title());
    let header = Paragraph::new(title).style(styles::screen_title()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border()),
    );
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = "[q] Quit  [h] Home  [p] Profile  [s] Settings  [Tab] Next";
    let footer = Paragraph::new(help)
        .style(styles::footer())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border()),
        );
    frame.render_widget(footer, area);
}
