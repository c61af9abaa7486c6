pub mod nav;
pub mod page;
pub mod query_string;
pub mod registry;
pub mod search;
pub mod timer;

pub use nav::{NavState, CLOSE_RESET_DELAY};
pub use page::{find_page, DynamicSource, Effect, Icon, Item, ItemKind, ItemSource, Page, PageId};
pub use query_string::QueryState;
pub use registry::{build_root, ContextKind, PaletteContext};
pub use timer::ResetTimer;
