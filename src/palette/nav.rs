use crate::palette::page::{find_page, Page, PageId};
use std::collections::HashMap;
use std::time::Duration;

/// How long the closed palette keeps its page before snapping back to the
/// root. Matches the dashboard's exit-animation budget.
pub const CLOSE_RESET_DELAY: Duration = Duration::from_millis(200);

/// Where the palette currently is, plus one search buffer per page so that
/// navigating away and back preserves what the user had typed at each
/// level. Stack-less: back-navigation follows parent pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub current: PageId,
    queries: HashMap<PageId, String>,
}

impl NavState {
    #[must_use]
    pub fn new(root: PageId) -> Self {
        NavState {
            current: root,
            queries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn query(&self, page: &PageId) -> &str {
        self.queries.get(page).map_or("", String::as_str)
    }

    #[must_use]
    pub fn current_query(&self) -> &str {
        self.queries.get(&self.current).map_or("", String::as_str)
    }

    pub fn push_char(&mut self, c: char) {
        self.queries.entry(self.current.clone()).or_default().push(c);
    }

    /// Removes the last typed character. Returns false when the buffer was
    /// already empty, which callers treat as a back-navigation request.
    pub fn pop_char(&mut self) -> bool {
        match self.queries.get_mut(&self.current) {
            Some(q) if !q.is_empty() => {
                q.pop();
                true
            }
            _ => false,
        }
    }

    pub fn clear_query(&mut self) {
        self.queries.remove(&self.current);
    }

    pub fn set_current(&mut self, id: PageId) {
        self.current = id;
    }

    /// No-op on the root page. A dangling parent pointer (the tree changed
    /// shape under us) falls back to the root rather than failing.
    pub fn go_to_parent(&mut self, root: &Page) {
        if self.current == root.id {
            return;
        }
        let parent = find_page(&self.current, root).and_then(|page| page.parent.clone());
        self.current = match parent {
            Some(id) if find_page(&id, root).is_some() => id,
            _ => root.id.clone(),
        };
    }

    /// Snap back to the root and forget all search buffers. Runs when the
    /// close-reset timer fires.
    pub fn reset(&mut self, root: PageId) {
        self.current = root;
        self.queries.clear();
    }
}
