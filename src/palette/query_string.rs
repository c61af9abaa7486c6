use crate::palette::page::PageId;

/// Query-string key that marks the palette as open.
pub const OPEN_KEY: &str = "cmdk";
/// Query-string key holding the current page id.
pub const PAGE_KEY: &str = "cmdk-page";

/// The host-owned query string the palette persists into, the same way the
/// dashboard keeps palette state in the URL. Order-preserving so encoding
/// is deterministic; values are slugs and ids, never free text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (part.to_string(), String::new()),
            })
            .collect();
        QueryState { pairs }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    #[must_use]
    pub fn palette_open(&self) -> bool {
        self.get(OPEN_KEY).is_some()
    }

    pub fn set_palette_open(&mut self, open: bool) {
        if open {
            self.set(OPEN_KEY, "1");
        } else {
            self.remove(OPEN_KEY);
        }
    }

    #[must_use]
    pub fn page(&self) -> Option<PageId> {
        self.get(PAGE_KEY).map(PageId::new)
    }

    pub fn set_page(&mut self, page: Option<&PageId>) {
        match page {
            Some(id) => self.set(PAGE_KEY, id.0.clone()),
            None => self.remove(PAGE_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_encode_round_trip() {
        let raw = "cmdk=1&cmdk-page=go-tos_project";
        let state = QueryState::parse(raw);
        assert!(state.palette_open());
        assert_eq!(state.page(), Some(PageId::new("go-tos_project")));
        assert_eq!(state.encode(), raw);
    }

    #[test]
    fn closing_removes_only_the_open_key() {
        let mut state = QueryState::parse("cmdk=1&cmdk-page=databases_project");
        state.set_palette_open(false);
        assert!(!state.palette_open());
        // Page id survives until the delayed reset clears it.
        assert_eq!(state.page(), Some(PageId::new("databases_project")));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut state = QueryState::default();
        state.set_page(Some(&PageId::new("a")));
        state.set_page(Some(&PageId::new("b")));
        assert_eq!(state.encode(), "cmdk-page=b");
    }

    #[test]
    fn parse_tolerates_flag_style_keys() {
        let state = QueryState::parse("cmdk");
        assert!(state.palette_open());
    }
}
