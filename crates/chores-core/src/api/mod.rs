//! Remote task service client.
//!
//! Platform-agnostic HTTP client for the collection endpoint that owns
//! task persistence and id assignment. All calls are JSON over HTTP; the
//! client maps transport failures to [`Error::Http`] and non-success
//! statuses to [`Error::Api`]. No retries and no caching happen here.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::normalize_base_url;
use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskId};
use crate::util::compact_text;

/// Remote collection operations the store depends on.
///
/// The store is generic over this trait so tests can script outcomes
/// without a server.
#[allow(async_fn_in_trait)] // single-threaded callers, futures need not be Send
pub trait TaskService {
    /// Fetch every task belonging to `owner_id`, in server list order.
    async fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>>;

    /// Create a task; the server assigns and returns the id.
    async fn create_task(&self, task: &NewTask) -> Result<Task>;

    /// Update a task by id, returning the server's representation.
    async fn update_task(&self, task: &Task) -> Result<Task>;

    /// Delete a task by id.
    async fn delete_task(&self, id: TaskId) -> Result<()>;
}

/// HTTP client for the remote task collection API.
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl TaskApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}

impl TaskService for TaskApiClient {
    async fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(self.tasks_url())
            .query(&[("ownerId", owner_id)])
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<Task>>().await?)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        tracing::debug!(title = %task.title, "creating task");
        let response = self
            .client
            .post(self.tasks_url())
            .header("Accept", "application/json")
            .json(task)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Task>().await?)
    }

    async fn update_task(&self, task: &Task) -> Result<Task> {
        tracing::debug!(id = %task.id, "updating task");
        let response = self
            .client
            .patch(self.task_url(task.id))
            .header("Accept", "application/json")
            .json(task)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Task>().await?)
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        tracing::debug!(%id, "deleting task");
        let response = self.client.delete(self.task_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: parse_api_error(status, &body),
    })
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return message.trim().to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        compact_text(trimmed)
    }
}
