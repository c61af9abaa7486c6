use crate::app::state::PaletteState;
use crate::palette::ItemKind;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Where the palette lands on screen. Shared with the input mapper so
/// pointer clicks resolve against the same geometry the renderer used.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(50, 60, area)
}

/// The rows holding match results: the modal's interior minus the query
/// line and the separator. One match per row.
pub fn results_area(area: Rect) -> Rect {
    let modal = modal_area(area);
    let inner = Rect {
        x: modal.x.saturating_add(1),
        y: modal.y.saturating_add(1),
        width: modal.width.saturating_sub(2),
        height: modal.height.saturating_sub(2),
    };
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(2),
        width: inner.width,
        height: inner.height.saturating_sub(2),
    }
}

pub struct PaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
}

impl Widget for PaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_area(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let page = self.state.current_page();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} ", page.title.to_uppercase()), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner_area);

        // Render Query
        let query = self.state.nav.current_query();
        let query_line = if query.is_empty() {
            Line::from(vec![
                Span::styled(" > ", self.theme.input_prompt),
                Span::styled(page.input_placeholder.clone(), self.theme.placeholder),
            ])
        } else {
            Line::from(vec![
                Span::styled(" > ", self.theme.input_prompt),
                Span::styled(query, self.theme.input_text),
                Span::styled(
                    "_",
                    self.theme
                        .input_text
                        .add_modifier(ratatui::style::Modifier::SLOW_BLINK),
                ),
            ])
        };
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        // Render Separator
        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        // A dynamic page renders its fetch state in place of results.
        if self.state.loading.as_ref() == Some(&page.id) {
            let loading = Line::from(Span::styled("  Loading...", self.theme.dimmed));
            buf.set_line(layout[2].x, layout[2].y + 1, &loading, layout[2].width);
            return;
        }
        if let Some((failed_page, message)) = &self.state.load_error {
            if failed_page == &page.id {
                let error = Line::from(vec![
                    Span::styled("  ✗ ", self.theme.error_text),
                    Span::styled(message.clone(), self.theme.error_text),
                ]);
                buf.set_line(layout[2].x, layout[2].y + 1, &error, layout[2].width);
                return;
            }
        }

        // Render Results
        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .enumerate()
            .filter_map(|(i, &item_idx)| {
                let item = self.state.visible_items().get(item_idx)?;
                let style = if i == self.state.selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if i == self.state.selected { "> " } else { "  " };

                let mut spans = vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{} ", item.icon.glyph()), self.theme.list_icon),
                    Span::styled(item.title.clone(), style),
                ];
                if matches!(item.kind, ItemKind::Branch { .. }) {
                    spans.push(Span::styled(" ›", self.theme.dimmed));
                }
                if self.state.pending.contains(&self.state.key_for(item)) {
                    spans.push(Span::styled(" …", self.theme.dimmed));
                }
                Some(ListItem::new(Line::from(spans)))
            })
            .collect();

        if items.is_empty() {
            let no_results = Line::from(Span::styled("  No results.", self.theme.dimmed));
            buf.set_line(layout[2].x, layout[2].y + 1, &no_results, layout[2].width);
        } else {
            let list = List::new(items);
            list.render(layout[2], buf);
        }
    }
}
