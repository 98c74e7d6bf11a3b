//! HTTP adapter for the TaskFlow task API
//!
//! All endpoints are JSON over HTTP. Authenticated calls attach the
//! stored session token as a bearer credential. Error responses are
//! expected as `{"error": "..."}`; anything else falls back to the
//! localized generic server error. No request timeout is configured.

use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use taskflow_core::{Language, NewTask, Task, TaskStatus, tr};

use crate::error::{CliError, Result};

#[derive(Serialize, Debug)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
}

#[derive(Serialize, Debug)]
struct StatusUpdate {
    status: TaskStatus,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: String,
}

/// Client for one TaskFlow server
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    lang: Language,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, lang: Language) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            lang,
            http: reqwest::Client::new(),
        }
    }

    /// Builder method to set the session token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when a session token is present.
    fn bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into an API error, preferring the
    /// server's own `error` message over the generic fallback.
    async fn ok_or_api_error(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| tr(self.lang, "server_error").to_string()),
            Err(_) => tr(self.lang, "server_error").to_string(),
        };

        Err(CliError::api(status.as_u16(), message))
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        self.ok_or_api_error(response).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        Ok(self.ok_or_api_error(response).await?.json().await?)
    }

    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let mut request = self.http.get(self.url("/tasks"));
        if let Some(status) = status {
            request = request.query(&[("status", status.as_wire())]);
        }
        let response = self.bearer(request).send().await?;
        Ok(self.ok_or_api_error(response).await?.json().await?)
    }

    /// Search tasks by title. An empty query is the plain list request,
    /// issued through the same path the list operation uses.
    pub async fn search_tasks(&self, query: &str) -> Result<Vec<Task>> {
        if query.trim().is_empty() {
            return self.list_tasks(None).await;
        }

        let request = self
            .http
            .get(self.url("/tasks/search"))
            .query(&[("q", query)]);
        let response = self.bearer(request).send().await?;
        Ok(self.ok_or_api_error(response).await?.json().await?)
    }

    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task> {
        let request = self.http.post(self.url("/tasks")).json(new_task);
        let response = self.bearer(request).send().await?;
        Ok(self.ok_or_api_error(response).await?.json().await?)
    }

    pub async fn update_status(&self, id: u32, status: TaskStatus) -> Result<Task> {
        let request = self
            .http
            .put(self.url(&format!("/tasks/{id}/status")))
            .json(&StatusUpdate { status });
        let response = self.bearer(request).send().await?;
        Ok(self.ok_or_api_error(response).await?.json().await?)
    }

    pub async fn delete_task(&self, id: u32) -> Result<()> {
        let request = self.http.delete(self.url(&format!("/tasks/{id}")));
        let response = self.bearer(request).send().await?;
        self.ok_or_api_error(response).await?;
        Ok(())
    }

    pub async fn health(&self) -> Result<()> {
        let response = self.http.get(self.url("/health")).send().await?;
        self.ok_or_api_error(response).await?;
        Ok(())
    }
}
