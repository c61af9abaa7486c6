use crate::app::{action::Action, state::AppMode, state::AppState};
use crate::components::palette_modal;
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

/// Translates terminal events into actions, honoring the palette's
/// context-sensitive rules: Left/Esc only navigate up while the search
/// buffer is empty, and Esc on the root closes instead.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match app_state.mode {
        AppMode::Palette => map_palette_event(event, app_state, terminal_size),
        AppMode::ImageInput => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::ImageInputSubmit),
                _ => Some(Action::ImageInputKey(key)),
            },
            _ => None,
        },
        AppMode::Browse => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => app_state.keymap.get_action(key),
            _ => None,
        },
    }
}

fn map_palette_event(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let query_empty = app_state.palette.nav.current_query().is_empty();
    let at_root = app_state.palette.nav.current == app_state.palette.root.id;

    match event {
        Event::Key(key) => {
            if key.code == KeyCode::Char('k') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Action::ClosePalette);
            }
            match key.code {
                KeyCode::Esc => {
                    if !query_empty {
                        Some(Action::PaletteClearQuery)
                    } else if at_root {
                        Some(Action::ClosePalette)
                    } else {
                        Some(Action::PaletteBack)
                    }
                }
                // With text in the buffer the arrow belongs to the cursor.
                KeyCode::Left => query_empty.then_some(Action::PaletteBack),
                KeyCode::Right => Some(Action::PaletteDescend),
                KeyCode::Up => Some(Action::PalettePrev),
                KeyCode::Down => Some(Action::PaletteNext),
                KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::PalettePrev)
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::PaletteNext)
                }
                KeyCode::Enter => Some(Action::PaletteSelect),
                KeyCode::Backspace => Some(Action::PaletteBackspace),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Action::PaletteInput(c))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::PalettePrev),
                MouseEventKind::ScrollDown => Some(Action::PaletteNext),
                MouseEventKind::Down(MouseButton::Left) => {
                    let modal = palette_modal::modal_area(area);
                    let results = palette_modal::results_area(area);
                    if contains(results, mouse.column, mouse.row) {
                        let idx = (mouse.row - results.y) as usize;
                        (idx < app_state.palette.matches.len())
                            .then_some(Action::PaletteSelectIndex(idx))
                    } else if contains(modal, mouse.column, mouse.row) {
                        None
                    } else {
                        // Clicking the backdrop dismisses the palette.
                        Some(Action::ClosePalette)
                    }
                }
                _ => None,
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer;
    use crate::domain::models::{ProjectId, TeamId};
    use crate::palette::{PaletteContext, QueryState};
    use crossterm::event::{KeyEvent, KeyEventKind};

    fn palette_state() -> AppState<'static> {
        let mut state = AppState::default();
        let nav_query = QueryState::default();
        state.palette = crate::app::state::PaletteState::new(
            PaletteContext::project(TeamId("t1".to_string()), ProjectId("p1".to_string()), None),
            &nav_query,
        );
        state.nav_query = nav_query;
        reducer::update(&mut state, Action::OpenPalette);
        state
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn left_arrow_is_ignored_while_typing() {
        let mut state = palette_state();
        reducer::update(&mut state, Action::PaletteInput('r'));
        let size = Size::new(80, 24);
        assert_eq!(map_event_to_action(press(KeyCode::Left), &state, size), None);
    }

    #[test]
    fn left_arrow_navigates_up_with_an_empty_query() {
        let state = palette_state();
        let size = Size::new(80, 24);
        assert_eq!(
            map_event_to_action(press(KeyCode::Left), &state, size),
            Some(Action::PaletteBack)
        );
    }

    #[test]
    fn escape_clears_the_query_before_navigating() {
        let mut state = palette_state();
        reducer::update(&mut state, Action::PaletteInput('r'));
        let size = Size::new(80, 24);
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, size),
            Some(Action::PaletteClearQuery)
        );
    }

    #[test]
    fn escape_on_the_root_closes() {
        let state = palette_state();
        let size = Size::new(80, 24);
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, size),
            Some(Action::ClosePalette)
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let state = palette_state();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        let size = Size::new(80, 24);
        assert_eq!(map_event_to_action(Event::Key(key), &state, size), None);
    }
}
