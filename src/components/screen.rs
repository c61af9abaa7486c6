use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// The hosting dashboard screen: header with the active scope, a body that
/// reflects the last pushed route, and a status footer.
pub struct Screen<'a> {
    pub theme: &'a Theme,
    pub state: &'a AppState<'a>,
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(layout[0], buf);
        self.render_body(layout[1], buf);
        self.render_footer(layout[2], buf);
    }
}

impl Screen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let ctx = &self.state.palette.context;
        let mut spans = vec![
            Span::styled(" UNBIND ", self.theme.header_logo),
            Span::styled(format!(" {} ", ctx.team_id), self.theme.header_item),
        ];
        if let Some(project) = &ctx.project_id {
            spans.push(Span::styled(format!(" {project} "), self.theme.header_item));
        }
        if let Some(env) = &ctx.environment_id {
            spans.push(Span::styled(format!(" {env} "), self.theme.header_item));
        }
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (area.width as usize).saturating_sub(used);
        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut lines = vec![Line::from("")];
        match &self.state.last_route {
            Some(route) => {
                lines.push(Line::from(vec![
                    Span::styled("Viewing ", self.theme.list_item),
                    Span::styled(route.to_string(), self.theme.highlight),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No route selected.",
                    self.theme.dimmed,
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Ctrl+K", self.theme.highlight),
            Span::styled(" opens the command palette", self.theme.dimmed),
        ]));

        let vertical_offset = (area.height / 2).saturating_sub(lines.len() as u16 / 2);
        let centered = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: (lines.len() as u16).min(area.height),
        };
        if centered.width > 0 && centered.height > 0 {
            Paragraph::new(lines)
                .alignment(ratatui::layout::Alignment::Center)
                .render(centered, buf);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let line = if let Some(err) = &self.state.last_error {
            Line::from(vec![
                Span::styled(" ERROR ", self.theme.status_error),
                Span::styled(format!(" {} ", err.message), self.theme.error_text),
            ])
        } else if let Some(status) = &self.state.status_message {
            Line::from(vec![
                Span::styled(" INFO ", self.theme.status_info),
                Span::styled(format!(" {status} "), self.theme.footer),
            ])
        } else {
            Line::from(vec![
                Span::styled(" READY ", self.theme.status_ready),
                Span::styled(
                    " ctrl+k: palette  q: quit ",
                    self.theme.footer,
                ),
            ])
        };
        Paragraph::new(line).style(self.theme.footer).render(area, buf);
    }
}
