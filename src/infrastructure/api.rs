use crate::config::Config;
use crate::domain::models::{
    EnvironmentId, GitRepository, ProjectId, ServiceSource, TeamId, TemplateSummary,
};
use crate::domain::platform::PlatformClient;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.unbind.app/v1";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const ENV_API_URL: &str = "UNBIND_API_URL";
const ENV_API_TOKEN: &str = "UNBIND_API_TOKEN";

/// HTTP client against the Unbind API server. The base URL and token come
/// from the config file, overridable via `UNBIND_API_URL` and
/// `UNBIND_API_TOKEN`.
pub struct HttpPlatformClient {
    api_url: String,
    client: Client,
}

impl HttpPlatformClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = std::env::var(ENV_API_TOKEN)
            .ok()
            .or_else(|| config.api_token.clone())
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                anyhow!("no API token configured; set {ENV_API_TOKEN} or api_token in the config")
            })?;

        let api_url = std::env::var(ENV_API_URL)
            .ok()
            .or_else(|| config.api_url.clone())
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        let mut headers = header::HeaderMap::new();
        let bearer = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .context("API token contains invalid header characters")?;
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { api_url, client })
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        format!("{base}/{suffix}")
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.context("API request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("API response read failed")?;

        if !status.is_success() {
            return Err(anyhow!("API request failed with status {status}: {body}"));
        }

        serde_json::from_str(&body).context("API response was malformed JSON")
    }
}

#[derive(Deserialize)]
struct RepositoryPayload {
    full_name: String,
    clone_url: String,
}

#[derive(Deserialize)]
struct TemplatePayload {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct CreatedPayload {
    id: String,
}

#[derive(Deserialize)]
struct ServicePayload {
    name: String,
}

fn service_body(source: &ServiceSource) -> Value {
    match source {
        ServiceSource::Repository {
            full_name,
            clone_url,
        } => json!({
            "type": "repository",
            "full_name": full_name,
            "clone_url": clone_url,
        }),
        ServiceSource::Database(kind) => json!({
            "type": "database",
            "engine": kind.slug(),
        }),
        ServiceSource::Template { template_id, .. } => json!({
            "type": "template",
            "template_id": template_id,
        }),
        ServiceSource::DockerImage { image } => json!({
            "type": "docker-image",
            "image": image,
        }),
    }
}

#[async_trait]
impl PlatformClient for HttpPlatformClient {
    async fn list_repositories(&self, team: &TeamId) -> Result<Vec<GitRepository>> {
        let url = self.endpoint(&format!("teams/{team}/repositories"));
        let payload: Vec<RepositoryPayload> = self.request_json(self.client.get(url)).await?;
        Ok(payload
            .into_iter()
            .map(|repo| GitRepository {
                full_name: repo.full_name,
                clone_url: repo.clone_url,
            })
            .collect())
    }

    async fn list_templates(&self) -> Result<Vec<TemplateSummary>> {
        let url = self.endpoint("templates");
        let payload: Vec<TemplatePayload> = self.request_json(self.client.get(url)).await?;
        Ok(payload
            .into_iter()
            .map(|tpl| TemplateSummary {
                id: tpl.id,
                name: tpl.name,
                description: tpl.description,
            })
            .collect())
    }

    async fn create_project(&self, team: &TeamId) -> Result<ProjectId> {
        let url = self.endpoint(&format!("teams/{team}/projects"));
        let payload: CreatedPayload = self
            .request_json(self.client.post(url).json(&json!({})))
            .await?;
        Ok(ProjectId(payload.id))
    }

    async fn create_environment(
        &self,
        team: &TeamId,
        project: &ProjectId,
    ) -> Result<EnvironmentId> {
        let url = self.endpoint(&format!("teams/{team}/projects/{project}/environments"));
        let payload: CreatedPayload = self
            .request_json(self.client.post(url).json(&json!({})))
            .await?;
        Ok(EnvironmentId(payload.id))
    }

    async fn create_service<'a>(
        &self,
        team: &TeamId,
        project: &ProjectId,
        environment: Option<&'a EnvironmentId>,
        source: &ServiceSource,
    ) -> Result<String> {
        let url = self.endpoint(&format!("teams/{team}/projects/{project}/services"));
        let mut body = service_body(source);
        if let (Value::Object(map), Some(env)) = (&mut body, environment) {
            map.insert("environment_id".to_owned(), json!(env.0));
        }
        let payload: ServicePayload = self
            .request_json(self.client.post(url).json(&body))
            .await?;
        Ok(payload.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DatabaseKind;

    #[test]
    fn service_body_tags_each_source() {
        let body = service_body(&ServiceSource::Database(DatabaseKind::Postgres));
        assert_eq!(body["type"], "database");
        assert_eq!(body["engine"], "postgres");

        let body = service_body(&ServiceSource::DockerImage {
            image: "nginx:latest".to_string(),
        });
        assert_eq!(body["type"], "docker-image");
        assert_eq!(body["image"], "nginx:latest");
    }
}
