use crate::app::state::ImageInputState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct ImageInputModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ImageInputState<'a>,
}

impl Widget for ImageInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(50, 3, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" DOCKER IMAGE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", self.theme.highlight),
                Span::raw(": deploy "),
                Span::styled("Esc", self.theme.highlight),
                Span::raw(": cancel "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner_area.width > 0 && inner_area.height > 0 {
            Widget::render(&self.state.text_area, inner_area, buf);
        }
    }
}
