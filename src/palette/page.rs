use crate::domain::models::{Route, ServiceSource};
use crate::theme::PaletteType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(pub String);

impl PageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        PageId(id.into())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Project,
    Environment,
    Repository,
    Database,
    Template,
    Container,
    Settings,
    Theme,
    Goto,
}

impl Icon {
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Project => "◆",
            Icon::Environment => "⬡",
            Icon::Repository => "⎇",
            Icon::Database => "⛁",
            Icon::Template => "▤",
            Icon::Container => "⬢",
            Icon::Settings => "⚙",
            Icon::Theme => "◐",
            Icon::Goto => "→",
        }
    }
}

/// What selecting an item does, beyond navigating within the palette.
/// The reducer translates these into commands; the palette itself never
/// executes anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate(Route),
    CreateProject,
    CreateEnvironment,
    CreateService(ServiceSource),
    PromptDockerImage,
    SetTheme(PaletteType),
}

/// An item is either a terminal action or a branch into a subpage. A branch
/// may also carry an effect, fired on descent.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Run(Effect),
    Branch {
        page: Page,
        effect: Option<Effect>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub icon: Icon,
    pub kind: ItemKind,
}

impl Item {
    #[must_use]
    pub fn run(id: impl Into<String>, title: impl Into<String>, icon: Icon, effect: Effect) -> Self {
        Item {
            id: id.into(),
            title: title.into(),
            keywords: Vec::new(),
            icon,
            kind: ItemKind::Run(effect),
        }
    }

    #[must_use]
    pub fn branch(title: impl Into<String>, icon: Icon, page: Page) -> Self {
        Item {
            id: page.id.0.clone(),
            title: title.into(),
            keywords: Vec::new(),
            icon,
            kind: ItemKind::Branch { page, effect: None },
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn subpage(&self) -> Option<&Page> {
        match &self.kind {
            ItemKind::Branch { page, .. } => Some(page),
            ItemKind::Run(_) => None,
        }
    }
}

/// Listings the palette cannot build statically and fetches on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicSource {
    Repositories,
    Templates,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemSource {
    Static(Vec<Item>),
    Dynamic(DynamicSource),
}

impl ItemSource {
    /// Statically known items; empty for dynamic pages, whose items live in
    /// the palette state once fetched.
    #[must_use]
    pub fn static_items(&self) -> &[Item] {
        match self {
            ItemSource::Static(items) => items,
            ItemSource::Dynamic(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub parent: Option<PageId>,
    pub input_placeholder: String,
    pub items: ItemSource,
}

/// Depth-first lookup over branch subpages. Callers fall back to the root
/// page when this misses.
#[must_use]
pub fn find_page<'a>(id: &PageId, page: &'a Page) -> Option<&'a Page> {
    if page.id == *id {
        return Some(page);
    }
    for item in page.items.static_items() {
        if let ItemKind::Branch { page: sub, .. } = &item.kind {
            if let Some(found) = find_page(id, sub) {
                return Some(found);
            }
        }
    }
    None
}
