use crate::app::{action::Action, command::Command};
use crate::domain::models::Route;
use crate::domain::platform::PlatformClient;
use crate::palette::registry::{repository_items, template_items};
use crate::palette::DynamicSource;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Executes a command against the platform and feeds the outcome back into
/// the action channel. Every spawn reports exactly once per item key so the
/// reducer can release its in-flight guard.
pub fn handle_command(
    command: Command,
    client: Arc<dyn PlatformClient>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::FetchPageItems { page, source, team } => {
            tokio::spawn(async move {
                let result = match source {
                    DynamicSource::Repositories => client
                        .list_repositories(&team)
                        .await
                        .map(|repos| repository_items(&repos)),
                    DynamicSource::Templates => client
                        .list_templates()
                        .await
                        .map(|templates| template_items(&templates)),
                };
                let _ = tx
                    .send(Action::PageItemsLoaded(
                        page,
                        result.map_err(|e| e.to_string()),
                    ))
                    .await;
            });
        }
        Command::Navigate(route) => {
            tokio::spawn(async move {
                let _ = tx.send(Action::RoutePushed(route)).await;
            });
        }
        Command::CreateProject { team, item } => {
            tokio::spawn(async move {
                let _ = tx
                    .send(Action::OperationStarted("Creating project...".to_string()))
                    .await;
                match client.create_project(&team).await {
                    Ok(project) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Ok("Project created".to_string()),
                            ))
                            .await;
                        let _ = tx
                            .send(Action::RoutePushed(Route::project(&team, &project)))
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Err(format!("Failed to create project: {e}")),
                            ))
                            .await;
                    }
                }
            });
        }
        Command::CreateEnvironment {
            team,
            project,
            item,
        } => {
            tokio::spawn(async move {
                let _ = tx
                    .send(Action::OperationStarted(
                        "Creating environment...".to_string(),
                    ))
                    .await;
                match client.create_environment(&team, &project).await {
                    Ok(environment) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Ok(format!("Environment {environment} created")),
                            ))
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Err(format!("Failed to create environment: {e}")),
                            ))
                            .await;
                    }
                }
            });
        }
        Command::CreateService {
            team,
            project,
            environment,
            source,
            item,
        } => {
            tokio::spawn(async move {
                let label = source.describe();
                let _ = tx
                    .send(Action::OperationStarted(format!("Deploying {label}...")))
                    .await;
                match client
                    .create_service(&team, &project, environment.as_ref(), &source)
                    .await
                {
                    Ok(name) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Ok(format!("Service {name} created")),
                            ))
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::OperationCompleted(
                                item,
                                Err(format!("Failed to deploy {label}: {e}")),
                            ))
                            .await;
                    }
                }
            });
        }
    }
    Ok(())
}
