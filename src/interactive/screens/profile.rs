use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::styles;

pub const PROFILE_BODY: &str = "profile";

pub fn draw_profile(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(styles::screen_container());

    let body = Paragraph::new(PROFILE_BODY)
        .style(styles::body_text())
        .block(block);
    frame.render_widget(body, area);
}
