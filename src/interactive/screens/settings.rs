use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::theme::styles;

pub const SETTING_WIDGET_LABEL: &str = "Setting 2";

pub fn draw_settings(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(styles::screen_container());

    let widget = Paragraph::new(SETTING_WIDGET_LABEL)
        .style(styles::widget_label())
        .block(block);
    frame.render_widget(widget, area);
}
