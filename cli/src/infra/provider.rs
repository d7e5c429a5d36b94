//! HTTP client for the virtual desktop provider API.
//!
//! One typed reqwest client implements both provider-facing ports: the
//! directory/listing source and the lifecycle command sink. Connections are
//! pooled and re-established transparently, so `refresh` needs no explicit
//! reconnect step.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::ports::{LifecycleCommandSink, WorkspaceDirectorySource};
use crate::domain::{
    CommandError, DirectoryDescriptor, DirectoryError, Workspace, WorkspaceState,
};
use crate::infra::config::Config;

/// Concrete provider client speaking JSON over HTTP(S).
pub struct HttpProvider {
    client: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl HttpProvider {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base: config.provider_url.trim_end_matches('/').to_string(),
            token: config.provider_token.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(format!("{}{path}", self.base)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(format!("{}{path}", self.base)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn command(&self, operation: &str, id: &str) -> Result<usize, CommandError> {
        let response = self
            .post(&format!("/v1/workspaces/{operation}"))
            .json(&CommandRequest {
                workspace_ids: vec![id.to_string()],
            })
            .send()
            .await
            .map_err(|e| CommandError::Rejected(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CommandError::Rejected(format!(
                "provider returned {}",
                response.status()
            )));
        }
        let body: CommandResponse = response
            .json()
            .await
            .map_err(|e| CommandError::Rejected(e.to_string()))?;
        Ok(body.failed_requests.len())
    }
}

impl WorkspaceDirectorySource for HttpProvider {
    async fn fetch_directory(&self) -> Result<Option<DirectoryDescriptor>, DirectoryError> {
        let response = self
            .get("/v1/directories")
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DirectoryError::Unavailable(format!(
                "provider returned {}",
                response.status()
            )));
        }
        let body: DirectoriesResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        // The provider may list several directories; the first is the
        // session directory.
        Ok(body.directories.into_iter().next().map(|d| {
            DirectoryDescriptor {
                id: d.directory_id,
                name: d.directory_name,
            }
        }))
    }

    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, DirectoryError> {
        let response = self
            .get("/v1/workspaces")
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DirectoryError::Unavailable(format!(
                "provider returned {}",
                response.status()
            )));
        }
        let body: WorkspacesResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        Ok(body.workspaces.into_iter().map(Into::into).collect())
    }
}

impl LifecycleCommandSink for HttpProvider {
    async fn start(&self, id: &str) -> Result<usize, CommandError> {
        self.command("start", id).await
    }

    async fn stop(&self, id: &str) -> Result<usize, CommandError> {
        self.command("stop", id).await
    }

    async fn terminate(&self, id: &str) -> Result<usize, CommandError> {
        self.command("terminate", id).await
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectoriesResponse {
    #[serde(default)]
    directories: Vec<DirectoryDto>,
}

#[derive(Deserialize)]
struct DirectoryDto {
    directory_id: String,
    #[serde(default)]
    directory_name: Option<String>,
}

#[derive(Deserialize)]
struct WorkspacesResponse {
    #[serde(default)]
    workspaces: Vec<WorkspaceDto>,
}

#[derive(Deserialize)]
struct WorkspaceDto {
    workspace_id: String,
    user_name: String,
    state: String,
    running_mode: String,
    compute_type: String,
}

impl From<WorkspaceDto> for Workspace {
    fn from(dto: WorkspaceDto) -> Self {
        Self {
            id: dto.workspace_id,
            user_name: dto.user_name,
            state: WorkspaceState::parse(&dto.state),
            running_mode: dto.running_mode,
            compute_type: dto.compute_type,
        }
    }
}

#[derive(Serialize)]
struct CommandRequest {
    workspace_ids: Vec<String>,
}

#[derive(Deserialize)]
struct CommandResponse {
    #[serde(default)]
    failed_requests: Vec<FailedRequestDto>,
}

#[derive(Deserialize)]
#[allow(dead_code)] // error details logged by callers in the future; count is what matters
struct FailedRequestDto {
    workspace_id: String,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}
