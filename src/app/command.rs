use crate::domain::models::{EnvironmentId, ProjectId, Route, ServiceSource, TeamId};
use crate::palette::{DynamicSource, PageId};

/// Identifies a palette item across the tree: the page it lives on plus
/// its item id. Used to enforce at-most-one in-flight activation per item.
pub type ItemKey = (PageId, String);

/// Side effects the reducer requests from the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchPageItems {
        page: PageId,
        source: DynamicSource,
        team: TeamId,
    },
    Navigate(Route),
    CreateProject {
        team: TeamId,
        item: ItemKey,
    },
    CreateEnvironment {
        team: TeamId,
        project: ProjectId,
        item: ItemKey,
    },
    CreateService {
        team: TeamId,
        project: ProjectId,
        environment: Option<EnvironmentId>,
        source: ServiceSource,
        item: ItemKey,
    },
}
