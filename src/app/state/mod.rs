use crate::app::keymap::{KeyConfig, KeyMap};
use crate::config::Config;
use crate::domain::models::Route;
use crate::domain::models::TeamId;
use crate::palette::{PaletteContext, QueryState};
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod input;
pub mod palette;

pub use error::{ErrorSeverity, ErrorState};
pub use input::{AppTextArea, ImageInputState};
pub use palette::PaletteState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Browse,     // Host screen, palette closed
    Palette,    // Command palette open
    ImageInput, // Docker image prompt
}

#[derive(Debug, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    /// The host-owned "URL" the palette persists its open flag and page id
    /// into for the lifetime of the session.
    pub nav_query: QueryState,
    pub palette: PaletteState,
    pub image_input: Option<ImageInputState<'a>>,

    /// Last route pushed by a palette action, shown on the host screen.
    pub last_route: Option<Route>,

    pub frame_count: u64,
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, context: PaletteContext) -> Self {
        let nav_query = QueryState::default();
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keymap)),
            palette_type: config.palette,
            theme: crate::theme::Theme::from_palette_type(config.palette),
            palette: PaletteState::new(context, &nav_query),
            nav_query,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn palette_open(&self) -> bool {
        self.mode == AppMode::Palette
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let nav_query = QueryState::default();
        let context = PaletteContext::team(TeamId("team".to_string()));
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            palette: PaletteState::new(context, &nav_query),
            nav_query,
            image_input: None,
            last_route: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::Dark,
            theme: crate::theme::Theme::default(),
        }
    }
}
