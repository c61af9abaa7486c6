use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TeamId(pub String);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EnvironmentId(pub String);

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Postgres,
    Mysql,
    Redis,
    Mongodb,
    Clickhouse,
}

impl DatabaseKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseKind::Postgres => "PostgreSQL",
            DatabaseKind::Mysql => "MySQL",
            DatabaseKind::Redis => "Redis",
            DatabaseKind::Mongodb => "MongoDB",
            DatabaseKind::Clickhouse => "ClickHouse",
        }
    }

    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            DatabaseKind::Postgres => "postgres",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Redis => "redis",
            DatabaseKind::Mongodb => "mongodb",
            DatabaseKind::Clickhouse => "clickhouse",
        }
    }

    #[must_use]
    pub fn all() -> &'static [DatabaseKind] {
        &[
            DatabaseKind::Postgres,
            DatabaseKind::Mysql,
            DatabaseKind::Redis,
            DatabaseKind::Mongodb,
            DatabaseKind::Clickhouse,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GitRepository {
    pub full_name: String,
    pub clone_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// What a new service is built from. Mirrors the four creation flows the
/// dashboard offers (repo, database, template, raw image).
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceSource {
    Repository { full_name: String, clone_url: String },
    Database(DatabaseKind),
    Template { template_id: String, name: String },
    DockerImage { image: String },
}

impl ServiceSource {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            ServiceSource::Repository { full_name, .. } => full_name.clone(),
            ServiceSource::Database(kind) => kind.label().to_string(),
            ServiceSource::Template { name, .. } => name.clone(),
            ServiceSource::DockerImage { image } => image.clone(),
        }
    }
}

/// A dashboard route. Routes are only ever pushed to the hosting layer;
/// the palette never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    #[must_use]
    pub fn team(team: &TeamId) -> Self {
        Route(format!("/{team}"))
    }

    #[must_use]
    pub fn team_settings(team: &TeamId) -> Self {
        Route(format!("/{team}/settings"))
    }

    #[must_use]
    pub fn project(team: &TeamId, project: &ProjectId) -> Self {
        Route(format!("/{team}/project/{project}"))
    }

    #[must_use]
    pub fn project_settings(
        team: &TeamId,
        project: &ProjectId,
        environment: Option<&EnvironmentId>,
    ) -> Self {
        match environment {
            Some(env) => Route(format!(
                "/{team}/project/{project}/settings?environment={env}"
            )),
            None => Route(format!("/{team}/project/{project}/settings")),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
