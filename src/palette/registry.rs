use crate::domain::models::{
    DatabaseKind, EnvironmentId, GitRepository, ProjectId, Route, ServiceSource, TeamId,
    TemplateSummary,
};
use crate::palette::page::{
    DynamicSource, Effect, Icon, Item, ItemKind, ItemSource, Page, PageId,
};
use crate::theme::PaletteType;

/// Which scope the palette is operating in. Determines which actions the
/// root page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Team,
    Project,
    NewProject,
    NewService,
}

impl ContextKind {
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            ContextKind::Team => "team",
            ContextKind::Project => "project",
            ContextKind::NewProject => "new-project",
            ContextKind::NewService => "new-service",
        }
    }

    fn offers_new_project(&self) -> bool {
        matches!(self, ContextKind::Team | ContextKind::NewProject)
    }

    fn offers_service_sources(&self) -> bool {
        matches!(self, ContextKind::Project | ContextKind::NewService)
    }

    fn offers_navigation(&self) -> bool {
        matches!(self, ContextKind::Team | ContextKind::Project)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteContext {
    pub kind: ContextKind,
    pub team_id: TeamId,
    pub project_id: Option<ProjectId>,
    pub environment_id: Option<EnvironmentId>,
}

impl PaletteContext {
    #[must_use]
    pub fn team(team_id: TeamId) -> Self {
        PaletteContext {
            kind: ContextKind::Team,
            team_id,
            project_id: None,
            environment_id: None,
        }
    }

    #[must_use]
    pub fn project(
        team_id: TeamId,
        project_id: ProjectId,
        environment_id: Option<EnvironmentId>,
    ) -> Self {
        PaletteContext {
            kind: ContextKind::Project,
            team_id,
            project_id: Some(project_id),
            environment_id,
        }
    }

    #[must_use]
    pub fn root_page_id(&self) -> PageId {
        PageId::new(format!("root_{}", self.kind.slug()))
    }

    fn subpage_id(&self, action: &str) -> PageId {
        PageId::new(format!("{action}_{}", self.kind.slug()))
    }
}

/// Builds the root page for a context. Repeated calls with the same context
/// produce structurally identical trees, which keeps id-based lookup stable.
#[must_use]
pub fn build_root(ctx: &PaletteContext) -> Page {
    let mut items = Vec::new();

    if ctx.kind.offers_new_project() {
        items.push(
            Item::run(
                "new-project",
                "New Project",
                Icon::Project,
                Effect::CreateProject,
            )
            .with_keywords(["create", "project"]),
        );
    }

    if ctx.kind.offers_service_sources() {
        items.push(
            Item::branch("Repo", Icon::Repository, repos_page(ctx))
                .with_keywords(["git", "github", "repository", "service"]),
        );
        items.push(
            Item::branch("Database", Icon::Database, databases_page(ctx))
                .with_keywords(["postgres", "mysql", "redis", "service"]),
        );
        items.push(
            Item::branch("Template", Icon::Template, templates_page(ctx))
                .with_keywords(["stack", "preset", "service"]),
        );
        items.push(
            Item::run(
                "docker-image",
                "Docker Image",
                Icon::Container,
                Effect::PromptDockerImage,
            )
            .with_keywords(["container", "registry", "service"]),
        );
        if ctx.kind == ContextKind::Project {
            items.push(
                Item::run(
                    "new-environment",
                    "New Environment",
                    Icon::Environment,
                    Effect::CreateEnvironment,
                )
                .with_keywords(["create", "environment"]),
            );
        }
    }

    if ctx.kind.offers_navigation() {
        items.push(Item::branch("Go to", Icon::Goto, go_tos_page(ctx)).with_keywords(["navigate"]));
        items.push(
            Item::branch("Preferences", Icon::Settings, preferences_page(ctx))
                .with_keywords(["theme", "settings"]),
        );
    }

    Page {
        id: ctx.root_page_id(),
        title: match ctx.kind {
            ContextKind::Team => "Team".to_string(),
            ContextKind::Project => "Project".to_string(),
            ContextKind::NewProject => "New Project".to_string(),
            ContextKind::NewService => "New Service".to_string(),
        },
        parent: None,
        input_placeholder: "Type a command or search...".to_string(),
        items: ItemSource::Static(items),
    }
}

fn repos_page(ctx: &PaletteContext) -> Page {
    Page {
        id: ctx.subpage_id("repos"),
        title: "Repo".to_string(),
        parent: Some(ctx.root_page_id()),
        input_placeholder: "Search repositories...".to_string(),
        items: ItemSource::Dynamic(DynamicSource::Repositories),
    }
}

fn templates_page(ctx: &PaletteContext) -> Page {
    Page {
        id: ctx.subpage_id("templates"),
        title: "Template".to_string(),
        parent: Some(ctx.root_page_id()),
        input_placeholder: "Search templates...".to_string(),
        items: ItemSource::Dynamic(DynamicSource::Templates),
    }
}

fn databases_page(ctx: &PaletteContext) -> Page {
    let items = DatabaseKind::all()
        .iter()
        .map(|kind| {
            Item::run(
                format!("database-{}", kind.slug()),
                kind.label(),
                Icon::Database,
                Effect::CreateService(ServiceSource::Database(*kind)),
            )
            .with_keywords(["database", kind.slug()])
        })
        .collect();
    Page {
        id: ctx.subpage_id("databases"),
        title: "Database".to_string(),
        parent: Some(ctx.root_page_id()),
        input_placeholder: "Search databases...".to_string(),
        items: ItemSource::Static(items),
    }
}

fn go_tos_page(ctx: &PaletteContext) -> Page {
    let mut items = Vec::new();
    match (&ctx.kind, &ctx.project_id) {
        (ContextKind::Project, Some(project)) => {
            items.push(
                Item::run(
                    "go-to-project",
                    "Project",
                    Icon::Project,
                    Effect::Navigate(Route::project(&ctx.team_id, project)),
                )
                .with_keywords(["overview", "home"]),
            );
            items.push(
                Item::run(
                    "go-to-settings",
                    "Settings",
                    Icon::Settings,
                    Effect::Navigate(Route::project_settings(
                        &ctx.team_id,
                        project,
                        ctx.environment_id.as_ref(),
                    )),
                )
                .with_keywords(["configuration"]),
            );
            items.push(
                Item::run(
                    "go-to-team",
                    "Team",
                    Icon::Goto,
                    Effect::Navigate(Route::team(&ctx.team_id)),
                )
                .with_keywords(["projects"]),
            );
        }
        _ => {
            items.push(
                Item::run(
                    "go-to-team",
                    "Team",
                    Icon::Goto,
                    Effect::Navigate(Route::team(&ctx.team_id)),
                )
                .with_keywords(["overview", "home"]),
            );
            items.push(
                Item::run(
                    "go-to-settings",
                    "Settings",
                    Icon::Settings,
                    Effect::Navigate(Route::team_settings(&ctx.team_id)),
                )
                .with_keywords(["configuration"]),
            );
        }
    }
    Page {
        id: ctx.subpage_id("go-tos"),
        title: "Go to".to_string(),
        parent: Some(ctx.root_page_id()),
        input_placeholder: "Go to...".to_string(),
        items: ItemSource::Static(items),
    }
}

fn preferences_page(ctx: &PaletteContext) -> Page {
    let items = PaletteType::all()
        .iter()
        .map(|palette| {
            Item::run(
                format!("theme-{}", palette.slug()),
                format!("Theme: {}", palette.label()),
                Icon::Theme,
                Effect::SetTheme(*palette),
            )
            .with_keywords(["theme", "appearance"])
        })
        .collect();
    Page {
        id: ctx.subpage_id("preferences"),
        title: "Preferences".to_string(),
        parent: Some(ctx.root_page_id()),
        input_placeholder: "Preferences...".to_string(),
        items: ItemSource::Static(items),
    }
}

/// Turns a fetched repository listing into palette items. Each repo is a
/// leaf that creates a service from that repository.
#[must_use]
pub fn repository_items(repos: &[GitRepository]) -> Vec<Item> {
    repos
        .iter()
        .map(|repo| {
            Item::run(
                repo.full_name.clone(),
                repo.full_name.clone(),
                Icon::Repository,
                Effect::CreateService(ServiceSource::Repository {
                    full_name: repo.full_name.clone(),
                    clone_url: repo.clone_url.clone(),
                }),
            )
        })
        .collect()
}

#[must_use]
pub fn template_items(templates: &[TemplateSummary]) -> Vec<Item> {
    templates
        .iter()
        .map(|tpl| {
            Item::run(
                tpl.id.clone(),
                tpl.name.clone(),
                Icon::Template,
                Effect::CreateService(ServiceSource::Template {
                    template_id: tpl.id.clone(),
                    name: tpl.name.clone(),
                }),
            )
            .with_keywords([tpl.description.clone()])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::page::find_page;

    fn project_ctx() -> PaletteContext {
        PaletteContext::project(
            TeamId("t1".to_string()),
            ProjectId("p1".to_string()),
            Some(EnvironmentId("e1".to_string())),
        )
    }

    fn titles(page: &Page) -> Vec<&str> {
        page.items
            .static_items()
            .iter()
            .map(|i| i.title.as_str())
            .collect()
    }

    #[test]
    fn team_context_omits_service_sources() {
        let root = build_root(&PaletteContext::team(TeamId("t1".to_string())));
        let titles = titles(&root);
        for absent in ["Repo", "Database", "Template", "Docker Image"] {
            assert!(!titles.contains(&absent), "{absent} should be absent");
        }
        assert!(titles.contains(&"New Project"));
        assert!(titles.contains(&"Go to"));
        assert!(titles.contains(&"Preferences"));
    }

    #[test]
    fn project_context_includes_service_sources() {
        let root = build_root(&project_ctx());
        let titles = titles(&root);
        for present in ["Repo", "Database", "Template", "Docker Image", "Go to"] {
            assert!(titles.contains(&present), "{present} should be present");
        }
        assert!(!titles.contains(&"New Project"));
    }

    #[test]
    fn subpage_ids_are_stable_across_rebuilds() {
        let ctx = project_ctx();
        let first = build_root(&ctx);
        let second = build_root(&ctx);
        assert_eq!(first, second);
        assert!(find_page(&PageId::new("go-tos_project"), &first).is_some());
        assert!(find_page(&PageId::new("repos_project"), &first).is_some());
    }

    #[test]
    fn go_tos_settings_targets_project_settings_route() {
        let root = build_root(&project_ctx());
        let go_tos = find_page(&PageId::new("go-tos_project"), &root).unwrap();
        let settings = go_tos
            .items
            .static_items()
            .iter()
            .find(|i| i.title == "Settings")
            .unwrap();
        match &settings.kind {
            ItemKind::Run(Effect::Navigate(route)) => {
                assert_eq!(route.as_str(), "/t1/project/p1/settings?environment=e1");
            }
            other => panic!("expected navigate effect, got {other:?}"),
        }
    }

    #[test]
    fn repository_items_map_full_names() {
        let items = repository_items(&[GitRepository {
            full_name: "org/repo".to_string(),
            clone_url: "https://github.com/org/repo.git".to_string(),
        }]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "org/repo");
        assert!(matches!(
            items[0].kind,
            ItemKind::Run(Effect::CreateService(ServiceSource::Repository { .. }))
        ));
    }
}
