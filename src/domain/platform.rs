use crate::domain::models::{
    EnvironmentId, GitRepository, ProjectId, ServiceSource, TeamId, TemplateSummary,
};
use anyhow::Result;
use async_trait::async_trait;

/// Boundary to the Unbind API server. Everything the palette's items touch
/// goes through here so the UI can be driven by a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Repositories the team's git installation can see.
    async fn list_repositories(&self, team: &TeamId) -> Result<Vec<GitRepository>>;

    async fn list_templates(&self) -> Result<Vec<TemplateSummary>>;

    /// Creates a project with a server-assigned name, returning its id.
    async fn create_project(&self, team: &TeamId) -> Result<ProjectId>;

    async fn create_environment(&self, team: &TeamId, project: &ProjectId)
        -> Result<EnvironmentId>;

    /// Returns the display name of the created service.
    async fn create_service<'a>(
        &self,
        team: &TeamId,
        project: &ProjectId,
        environment: Option<&'a EnvironmentId>,
        source: &ServiceSource,
    ) -> Result<String>;
}
