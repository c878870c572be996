use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::styles;

/// The home screen body. Empty until the dashboard content lands.
pub const HOME_BODY: &str = "";

pub fn draw_home(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(styles::screen_container());

    let body = Paragraph::new(HOME_BODY).style(styles::body_text()).block(block);
    frame.render_widget(body, area);
}
