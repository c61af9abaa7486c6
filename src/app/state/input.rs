use crate::app::command::ItemKey;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// `TextArea` newtype adding the trait impls `AppState` needs (Clone,
/// Debug, PartialEq compare lines and cursor only).
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// State of the single-line docker-image prompt. Remembers which palette
/// item opened it so the resulting mutation is attributed to that item.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInputState<'a> {
    pub text_area: AppTextArea<'a>,
    pub item: ItemKey,
}

impl ImageInputState<'_> {
    #[must_use]
    pub fn new(item: ItemKey) -> Self {
        ImageInputState {
            text_area: AppTextArea::default(),
            item,
        }
    }

    /// The entered image reference, if it is usable.
    #[must_use]
    pub fn image_reference(&self) -> Option<String> {
        let image = self.text_area.lines().join("").trim().to_string();
        if image.is_empty() {
            None
        } else {
            Some(image)
        }
    }
}
