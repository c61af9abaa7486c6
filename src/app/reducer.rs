use super::{
    action::Action,
    command::{Command, ItemKey},
    state::{AppMode, AppState, ErrorState, ImageInputState, PaletteState},
};
use crate::domain::models::ServiceSource;
use crate::palette::{Effect, Item, ItemKind, ItemSource, PageId, CLOSE_RESET_DELAY};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if let Some(clear_at) = state.status_clear_time {
                if Instant::now() >= clear_at {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
            // The delayed page reset after closing. Reopening cancels it.
            if state.mode != AppMode::Palette && state.palette.reset.poll(Instant::now()) {
                let root_id = state.palette.root.id.clone();
                state.palette.nav.reset(root_id);
                state.palette.dynamic_items.clear();
                state.palette.loading = None;
                state.palette.load_error = None;
                state.palette.selected = 0;
                state.palette.recompute_matches();
                state.nav_query.set_page(None);
            }
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Palette lifecycle ---
        Action::TogglePalette => {
            return if state.mode == AppMode::Palette {
                update(state, Action::ClosePalette)
            } else {
                update(state, Action::OpenPalette)
            };
        }
        Action::OpenPalette => {
            state.mode = AppMode::Palette;
            state.palette.reset.cancel();
            state.nav_query.set_palette_open(true);
            let current = state.palette.nav.current.clone();
            state.nav_query.set_page(Some(&current));
            state.palette.recompute_matches();
            // Resuming on a dynamic page re-fetches; results are never
            // reused across navigations.
            return fetch_if_dynamic(state);
        }
        Action::ClosePalette => {
            close_palette(state);
        }

        // --- Palette navigation ---
        Action::PaletteNext => state.palette.select_next(),
        Action::PalettePrev => state.palette.select_prev(),
        Action::PaletteBack => {
            return go_back(state);
        }
        Action::PaletteDescend => {
            let Some(item) = state.palette.selected_item().cloned() else {
                return None;
            };
            if matches!(item.kind, ItemKind::Branch { .. }) {
                return select_item(state, item);
            }
        }
        Action::PaletteSelect => {
            let Some(item) = state.palette.selected_item().cloned() else {
                return None;
            };
            return select_item(state, item);
        }
        Action::PaletteSelectIndex(idx) => {
            let Some(item) = state.palette.item_at(idx).cloned() else {
                return None;
            };
            state.palette.selected = idx;
            return select_item(state, item);
        }
        Action::PaletteInput(c) => {
            state.palette.nav.push_char(c);
            state.palette.selected = 0;
            state.palette.recompute_matches();
        }
        Action::PaletteBackspace => {
            if state.palette.nav.pop_char() {
                state.palette.selected = 0;
                state.palette.recompute_matches();
            } else {
                return go_back(state);
            }
        }
        Action::PaletteClearQuery => {
            state.palette.nav.clear_query();
            state.palette.recompute_matches();
        }

        // --- Docker image prompt ---
        Action::ImageInputKey(key) => {
            if let Some(input) = &mut state.image_input {
                input.text_area.input(key);
            }
        }
        Action::ImageInputSubmit => {
            let Some(input) = &state.image_input else {
                return None;
            };
            let Some(image) = input.image_reference() else {
                return None; // Keep the prompt open until something usable is typed
            };
            let item = input.item.clone();
            state.image_input = None;
            state.mode = AppMode::Browse;
            return create_service(state, item, ServiceSource::DockerImage { image });
        }
        Action::CancelMode => {
            state.last_error = None;
            state.image_input = None;
            if state.mode == AppMode::Palette {
                close_palette(state);
            } else {
                state.mode = AppMode::Browse;
            }
        }

        // --- Async results ---
        Action::PageItemsLoaded(page_id, result) => {
            if state.palette.loading.as_ref() == Some(&page_id) {
                state.palette.loading = None;
            }
            // Results for a page the user already left are dropped.
            if state.palette.current_page().id == page_id {
                match result {
                    Ok(items) => {
                        state.palette.dynamic_items.insert(page_id, items);
                        state.palette.recompute_matches();
                    }
                    Err(message) => {
                        state.palette.load_error = Some((page_id, message));
                    }
                }
            }
        }
        Action::OperationStarted(msg) => {
            state.status_message = Some(msg);
            state.status_clear_time = None;
        }
        Action::OperationCompleted(item, result) => {
            state.palette.pending.remove(&item);
            match result {
                Ok(msg) => {
                    state.status_message = Some(msg);
                    state.status_clear_time = Some(Instant::now() + STATUS_TTL);
                }
                Err(err) => state.last_error = Some(ErrorState::error(err)),
            }
        }
        Action::RoutePushed(route) => {
            state.status_message = Some(format!("Navigated to {route}"));
            state.status_clear_time = Some(Instant::now() + STATUS_TTL);
            state.last_route = Some(route);
        }
    }
    None
}

fn close_palette(state: &mut AppState) {
    state.mode = AppMode::Browse;
    // The open flag clears immediately; the page id survives until the
    // reset timer fires so reopening within the delay resumes in place.
    state.nav_query.set_palette_open(false);
    state
        .palette
        .reset
        .schedule(Instant::now(), CLOSE_RESET_DELAY);
}

fn go_back(state: &mut AppState) -> Option<Command> {
    {
        let PaletteState { nav, root, .. } = &mut state.palette;
        nav.go_to_parent(root);
    }
    let current = state.palette.nav.current.clone();
    state.nav_query.set_page(Some(&current));
    state.palette.selected = 0;
    state.palette.recompute_matches();
    fetch_if_dynamic(state)
}

/// Moves the palette onto `page_id` and kicks off its fetch when dynamic.
fn enter_page(state: &mut AppState, page_id: PageId) -> Option<Command> {
    state.palette.dynamic_items.remove(&page_id);
    if let Some((err_page, _)) = &state.palette.load_error {
        if *err_page == page_id {
            state.palette.load_error = None;
        }
    }
    state.palette.nav.set_current(page_id.clone());
    state.nav_query.set_page(Some(&page_id));
    state.palette.selected = 0;
    state.palette.recompute_matches();
    fetch_if_dynamic(state)
}

fn fetch_if_dynamic(state: &mut AppState) -> Option<Command> {
    let page = state.palette.current_page();
    let ItemSource::Dynamic(source) = &page.items else {
        return None;
    };
    let source = *source;
    let page_id = page.id.clone();
    state.palette.loading = Some(page_id.clone());
    Some(Command::FetchPageItems {
        page: page_id,
        source,
        team: state.palette.context.team_id.clone(),
    })
}

fn select_item(state: &mut AppState, item: Item) -> Option<Command> {
    match item.kind {
        ItemKind::Branch { page, effect } => {
            // Descending while a filter narrows the list would be
            // surprising; the filtered view stays put.
            if state.palette.filtering() {
                return None;
            }
            let key = (state.palette.current_page().id.clone(), item.id);
            let effect_command = effect.and_then(|e| run_effect(state, key, e));
            let fetch = enter_page(state, page.id);
            effect_command.or(fetch)
        }
        ItemKind::Run(effect) => {
            let key = (state.palette.current_page().id.clone(), item.id);
            run_effect(state, key, effect)
        }
    }
}

fn run_effect(state: &mut AppState, key: ItemKey, effect: Effect) -> Option<Command> {
    match effect {
        Effect::Navigate(route) => {
            close_palette(state);
            Some(Command::Navigate(route))
        }
        Effect::CreateProject => {
            if state.palette.pending.contains(&key) {
                return None;
            }
            state.palette.pending.insert(key.clone());
            close_palette(state);
            Some(Command::CreateProject {
                team: state.palette.context.team_id.clone(),
                item: key,
            })
        }
        Effect::CreateEnvironment => {
            let Some(project) = state.palette.context.project_id.clone() else {
                state.last_error = Some(ErrorState::error("No project selected"));
                return None;
            };
            if state.palette.pending.contains(&key) {
                return None;
            }
            state.palette.pending.insert(key.clone());
            close_palette(state);
            Some(Command::CreateEnvironment {
                team: state.palette.context.team_id.clone(),
                project,
                item: key,
            })
        }
        Effect::CreateService(source) => {
            if state.palette.pending.contains(&key) {
                return None;
            }
            close_palette(state);
            create_service(state, key, source)
        }
        Effect::PromptDockerImage => {
            close_palette(state);
            state.mode = AppMode::ImageInput;
            state.image_input = Some(ImageInputState::new(key));
            None
        }
        Effect::SetTheme(palette_type) => {
            state.palette_type = palette_type;
            state.theme = crate::theme::Theme::from_palette_type(palette_type);
            state.status_message = Some(format!("Theme: {}", palette_type.label()));
            state.status_clear_time = Some(Instant::now() + STATUS_TTL);
            None
        }
    }
}

fn create_service(state: &mut AppState, key: ItemKey, source: ServiceSource) -> Option<Command> {
    let Some(project) = state.palette.context.project_id.clone() else {
        state.last_error = Some(ErrorState::error("No project selected"));
        return None;
    };
    if state.palette.pending.contains(&key) {
        return None;
    }
    state.palette.pending.insert(key.clone());
    Some(Command::CreateService {
        team: state.palette.context.team_id.clone(),
        project,
        environment: state.palette.context.environment_id.clone(),
        source,
        item: key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppState;
    use crate::domain::models::{EnvironmentId, GitRepository, ProjectId, TeamId};
    use crate::palette::registry::repository_items;
    use crate::palette::{PaletteContext, PageId};

    fn project_state() -> AppState<'static> {
        let mut state = AppState::default();
        let nav_query = crate::palette::QueryState::default();
        state.palette = crate::app::state::PaletteState::new(
            PaletteContext::project(
                TeamId("t1".to_string()),
                ProjectId("p1".to_string()),
                Some(EnvironmentId("e1".to_string())),
            ),
            &nav_query,
        );
        state.nav_query = nav_query;
        state
    }

    fn select_titled(state: &mut AppState, title: &str) -> Option<Command> {
        let idx = state
            .palette
            .matches
            .iter()
            .position(|&i| state.palette.visible_items()[i].title == title)
            .unwrap_or_else(|| panic!("no item titled {title}"));
        state.palette.selected = idx;
        update(state, Action::PaletteSelect)
    }

    #[test]
    fn go_to_settings_navigates_and_closes() {
        let mut state = project_state();
        update(&mut state, Action::TogglePalette);
        assert_eq!(state.mode, AppMode::Palette);

        let cmd = select_titled(&mut state, "Go to");
        assert_eq!(cmd, None);
        assert_eq!(state.palette.nav.current, PageId::new("go-tos_project"));

        let cmd = select_titled(&mut state, "Settings");
        match cmd {
            Some(Command::Navigate(route)) => {
                assert_eq!(route.as_str(), "/t1/project/p1/settings?environment=e1");
            }
            other => panic!("expected navigate, got {other:?}"),
        }
        assert_eq!(state.mode, AppMode::Browse);
        assert!(!state.nav_query.palette_open());
    }

    #[test]
    fn reopen_within_delay_keeps_the_page() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Go to");
        update(&mut state, Action::ClosePalette);
        assert!(state.palette.reset.is_pending());

        update(&mut state, Action::OpenPalette);
        assert!(!state.palette.reset.is_pending());
        assert_eq!(state.palette.nav.current, PageId::new("go-tos_project"));

        // A later tick must not snap back either: the reset was cancelled.
        update(&mut state, Action::ClosePalette);
        update(&mut state, Action::OpenPalette);
        update(&mut state, Action::Tick);
        assert_eq!(state.palette.nav.current, PageId::new("go-tos_project"));
    }

    #[test]
    fn delayed_reset_returns_to_root() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Go to");
        update(&mut state, Action::ClosePalette);

        std::thread::sleep(CLOSE_RESET_DELAY + Duration::from_millis(30));
        update(&mut state, Action::Tick);
        assert_eq!(state.palette.nav.current, state.palette.root.id);
        assert_eq!(state.nav_query.page(), None);
    }

    #[test]
    fn descend_is_blocked_while_filtering() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        update(&mut state, Action::PaletteInput('g'));
        let root_id = state.palette.root.id.clone();

        let cmd = select_titled(&mut state, "Go to");
        assert_eq!(cmd, None);
        assert_eq!(state.palette.nav.current, root_id);
    }

    #[test]
    fn backspace_on_empty_query_goes_to_parent() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Go to");
        update(&mut state, Action::PaletteBackspace);
        assert_eq!(state.palette.nav.current, state.palette.root.id);
    }

    #[test]
    fn queries_survive_page_changes() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        update(&mut state, Action::PaletteInput('s'));
        update(&mut state, Action::PaletteClearQuery);
        select_titled(&mut state, "Go to");
        update(&mut state, Action::PaletteInput('s'));
        update(&mut state, Action::PaletteInput('e'));
        update(&mut state, Action::PaletteBack);
        select_titled(&mut state, "Go to");
        assert_eq!(state.palette.nav.current_query(), "se");
    }

    #[test]
    fn entering_repo_page_fetches_and_loads() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        let cmd = select_titled(&mut state, "Repo");
        let repos_page = PageId::new("repos_project");
        match cmd {
            Some(Command::FetchPageItems { page, team, .. }) => {
                assert_eq!(page, repos_page);
                assert_eq!(team, TeamId("t1".to_string()));
            }
            other => panic!("expected fetch, got {other:?}"),
        }
        assert_eq!(state.palette.loading, Some(repos_page.clone()));
        assert!(state.palette.visible_items().is_empty());

        let items = repository_items(&[GitRepository {
            full_name: "org/repo".to_string(),
            clone_url: "https://github.com/org/repo.git".to_string(),
        }]);
        update(&mut state, Action::PageItemsLoaded(repos_page, Ok(items)));
        assert_eq!(state.palette.loading, None);
        assert_eq!(state.palette.visible_items().len(), 1);
        assert_eq!(state.palette.visible_items()[0].title, "org/repo");
        assert_eq!(state.palette.matches, vec![0]);
    }

    #[test]
    fn fetch_error_renders_inline_and_keeps_navigation_alive() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Repo");
        let repos_page = PageId::new("repos_project");
        update(
            &mut state,
            Action::PageItemsLoaded(repos_page.clone(), Err("upstream 502".to_string())),
        );
        assert_eq!(
            state.palette.load_error,
            Some((repos_page, "upstream 502".to_string()))
        );
        // Back-navigation still works.
        update(&mut state, Action::PaletteBack);
        assert_eq!(state.palette.nav.current, state.palette.root.id);
    }

    #[test]
    fn late_results_for_an_abandoned_page_are_dropped() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Repo");
        update(&mut state, Action::PaletteBack);

        let repos_page = PageId::new("repos_project");
        update(
            &mut state,
            Action::PageItemsLoaded(repos_page.clone(), Ok(Vec::new())),
        );
        assert!(!state.palette.dynamic_items.contains_key(&repos_page));
        assert_eq!(state.palette.loading, None);
    }

    #[test]
    fn same_item_reactivation_is_a_no_op_until_completion() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Database");
        let first = select_titled(&mut state, "PostgreSQL");
        assert!(matches!(first, Some(Command::CreateService { .. })));

        // Palette closed on selection; reopen and try again while pending.
        update(&mut state, Action::OpenPalette);
        let second = select_titled(&mut state, "PostgreSQL");
        assert_eq!(second, None);

        // A different item is independent.
        let other = select_titled(&mut state, "Redis");
        assert!(matches!(other, Some(Command::CreateService { .. })));

        // Completion clears the pending flag.
        let key = (
            PageId::new("databases_project"),
            "database-postgres".to_string(),
        );
        update(
            &mut state,
            Action::OperationCompleted(key, Err("boom".to_string())),
        );
        assert!(state.last_error.is_some());
        update(&mut state, Action::OpenPalette);
        let third = select_titled(&mut state, "PostgreSQL");
        assert!(matches!(third, Some(Command::CreateService { .. })));
    }

    #[test]
    fn set_theme_applies_without_closing() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        select_titled(&mut state, "Preferences");
        select_titled(&mut state, "Theme: Light");
        assert_eq!(state.palette_type, crate::theme::PaletteType::Light);
        assert_eq!(state.mode, AppMode::Palette);
    }

    #[test]
    fn docker_image_prompt_round_trip() {
        let mut state = project_state();
        update(&mut state, Action::OpenPalette);
        let cmd = select_titled(&mut state, "Docker Image");
        assert_eq!(cmd, None);
        assert_eq!(state.mode, AppMode::ImageInput);

        // Submitting an empty prompt keeps it open.
        assert_eq!(update(&mut state, Action::ImageInputSubmit), None);
        assert_eq!(state.mode, AppMode::ImageInput);

        state
            .image_input
            .as_mut()
            .unwrap()
            .text_area
            .insert_str("nginx:1.27");
        let cmd = update(&mut state, Action::ImageInputSubmit);
        match cmd {
            Some(Command::CreateService {
                source: ServiceSource::DockerImage { image },
                ..
            }) => assert_eq!(image, "nginx:1.27"),
            other => panic!("expected docker service, got {other:?}"),
        }
        assert_eq!(state.mode, AppMode::Browse);
    }

    #[test]
    fn route_push_lands_on_the_host_screen() {
        let mut state = project_state();
        let route = crate::domain::models::Route::team(&TeamId("t1".to_string()));
        update(&mut state, Action::RoutePushed(route.clone()));
        assert_eq!(state.last_route, Some(route));
        assert!(state.status_message.is_some());
    }
}
