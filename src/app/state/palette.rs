use crate::app::command::ItemKey;
use crate::palette::{
    build_root, find_page, search, Item, ItemSource, NavState, Page, PageId, PaletteContext,
    QueryState, ResetTimer,
};
use std::collections::{HashMap, HashSet};

/// Everything the palette needs while mounted. The context owns the page
/// tree; the host owns persistence (the query string on `AppState`).
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    pub context: PaletteContext,
    pub root: Page,
    pub nav: NavState,
    /// Indices into the current page's visible items, filtered and ranked.
    pub matches: Vec<usize>,
    pub selected: usize,
    /// Page whose dynamic fetch is in flight.
    pub loading: Option<PageId>,
    /// Inline fetch failure for a dynamic page.
    pub load_error: Option<(PageId, String)>,
    /// Fetched items, keyed by dynamic page id. Cleared on re-entry; every
    /// navigation into a dynamic page re-fetches.
    pub dynamic_items: HashMap<PageId, Vec<Item>>,
    /// Items with an activation in flight. Same-item re-selection is a
    /// no-op; distinct items may overlap.
    pub pending: HashSet<ItemKey>,
    pub reset: ResetTimer,
}

impl PaletteState {
    /// Mounts the palette for a context, seeding the current page from the
    /// host's query string (unknown ids fall back to the root).
    #[must_use]
    pub fn new(context: PaletteContext, query: &QueryState) -> Self {
        let root = build_root(&context);
        let current = query
            .page()
            .filter(|id| find_page(id, &root).is_some())
            .unwrap_or_else(|| root.id.clone());
        let mut nav = NavState::new(root.id.clone());
        nav.set_current(current);
        let mut state = PaletteState {
            context,
            root,
            nav,
            matches: Vec::new(),
            selected: 0,
            loading: None,
            load_error: None,
            dynamic_items: HashMap::new(),
            pending: HashSet::new(),
            reset: ResetTimer::default(),
        };
        state.recompute_matches();
        state
    }

    /// The page the palette is showing. A stale id falls back to the root.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        find_page(&self.nav.current, &self.root).unwrap_or(&self.root)
    }

    /// Items visible on the current page: fetched ones for a dynamic page,
    /// the static list otherwise.
    #[must_use]
    pub fn visible_items(&self) -> &[Item] {
        let page = self.current_page();
        match &page.items {
            ItemSource::Static(items) => items,
            ItemSource::Dynamic(_) => self
                .dynamic_items
                .get(&page.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    /// True when the current page's search buffer is narrowing the list,
    /// which blocks branch descent.
    #[must_use]
    pub fn filtering(&self) -> bool {
        !self.nav.current_query().is_empty()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        let idx = *self.matches.get(self.selected)?;
        self.visible_items().get(idx)
    }

    #[must_use]
    pub fn item_at(&self, match_idx: usize) -> Option<&Item> {
        let idx = *self.matches.get(match_idx)?;
        self.visible_items().get(idx)
    }

    #[must_use]
    pub fn key_for(&self, item: &Item) -> ItemKey {
        (self.current_page().id.clone(), item.id.clone())
    }

    pub fn recompute_matches(&mut self) {
        let query = self.nav.current_query().to_string();
        self.matches = search::rank_items(self.visible_items(), &query);
        if self.matches.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.matches.len() - 1);
        }
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected = (self.selected + 1) % self.matches.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.matches.is_empty() {
            self.selected = if self.selected == 0 {
                self.matches.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}
