use crate::app::command::ItemKey;
use crate::domain::models::Route;
use crate::palette::{Item, PageId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Palette lifecycle ---
    OpenPalette,
    ClosePalette,
    TogglePalette,

    // --- Palette navigation ---
    PaletteNext,
    PalettePrev,
    PaletteBack,               // Arrow-left / Esc with an empty query
    PaletteDescend,            // Arrow-right: branch items only
    PaletteSelect,             // Enter on the highlighted item
    PaletteSelectIndex(usize), // Pointer selection by visible row
    PaletteInput(char),
    PaletteBackspace,
    PaletteClearQuery,

    // --- Docker image prompt ---
    ImageInputKey(crossterm::event::KeyEvent),
    ImageInputSubmit,
    CancelMode,

    // --- Async results ---
    PageItemsLoaded(PageId, Result<Vec<Item>, String>),
    OperationStarted(String),
    OperationCompleted(ItemKey, Result<String, String>),
    RoutePushed(Route),
}
