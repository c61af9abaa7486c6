use crate::app::state::{AppMode, AppState};
use crate::components::helpers::dim_area;
use crate::components::image_input::ImageInputModal;
use crate::components::palette_modal::PaletteModal;
use crate::components::screen::Screen;

use ratatui::Frame;

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();

    let screen = Screen {
        theme: &theme,
        state: app_state,
    };
    f.render_widget(screen, f.area());

    match app_state.mode {
        AppMode::Browse => {}
        AppMode::Palette => {
            let area = f.area();
            dim_area(f.buffer_mut(), area);
            let modal = PaletteModal {
                theme: &theme,
                state: &app_state.palette,
            };
            f.render_widget(modal, f.area());
        }
        AppMode::ImageInput => {
            if let Some(input) = &app_state.image_input {
                let area = f.area();
                dim_area(f.buffer_mut(), area);
                let modal = ImageInputModal {
                    theme: &theme,
                    state: input,
                };
                f.render_widget(modal, f.area());
            }
        }
    }
}
