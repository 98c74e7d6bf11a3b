//! Application controller
//!
//! One `App` instance owns the session, the HTTP client, and the view
//! state for the lifetime of an invocation. Every user action runs
//! through here: validate first, then talk to the server, then persist
//! and render. Mutations never patch the rendered list in place; they
//! reload it wholesale, so what is shown always matches the last
//! successful fetch.

use chrono::Local;

use taskflow_core::{
    Language, NewTask, Section, Task, TaskStatus, Theme, ViewState, parse_due_date, tr,
};

use crate::api::ApiClient;
use crate::config::{Config, ConfigStore};
use crate::display;
use crate::error::{CliError, Result};
use crate::notify;

pub struct App {
    config: Config,
    store: ConfigStore,
    api: ApiClient,
    view: ViewState,
}

impl App {
    pub fn new(config: Config, store: ConfigStore) -> Self {
        let api = ApiClient::new(&config.server_url, config.language)
            .with_token(config.token.clone());
        let view = ViewState::initial(config.has_session());
        Self {
            config,
            store,
            api,
            view,
        }
    }

    fn lang(&self) -> Language {
        self.config.language
    }

    fn require_session(&self) -> Result<()> {
        if self.view.is_authenticated() {
            Ok(())
        } else {
            Err(CliError::Auth(tr(self.lang(), "not_logged_in").to_string()))
        }
    }

    fn render(&self, tasks: &[Task]) {
        println!(
            "{}",
            display::format_task_list(
                tasks,
                self.lang(),
                self.config.theme,
                Local::now().date_naive(),
                display::supports_color(),
            )
        );
    }

    // ── Session ────────────────────────────────────────────────

    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(CliError::validation(
                "credentials",
                tr(self.lang(), "credentials_required"),
            ));
        }

        let resp = self.api.login(username, password).await?;
        self.config.token = Some(resp.token.clone());
        self.config.user_id = Some(resp.user_id);
        self.store.save(&self.config)?;

        self.api.set_token(resp.token);
        self.view.login_succeeded();

        println!("{}", tr(self.lang(), "login_success"));
        self.print_link_hint();
        self.list(None).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(CliError::validation(
                "credentials",
                tr(self.lang(), "credentials_required"),
            ));
        }

        self.api.register(username, password).await?;
        println!("{}", tr(self.lang(), "register_success"));
        Ok(())
    }

    /// Forget the session locally. The server is not told.
    pub fn logout(&mut self) -> Result<()> {
        self.config.clear_session();
        self.store.save(&self.config)?;
        self.api.clear_token();
        self.view.logout();
        println!("{}", tr(self.lang(), "logout_success"));
        Ok(())
    }

    // ── Tasks ──────────────────────────────────────────────────

    pub async fn list(&mut self, status: Option<TaskStatus>) -> Result<()> {
        self.require_session()?;
        self.view.show(Section::Tasks);
        let tasks = self.api.list_tasks(status).await?;
        self.render(&tasks);
        Ok(())
    }

    pub async fn search(&mut self, query: &str) -> Result<()> {
        self.require_session()?;
        self.view.show(Section::Tasks);
        let tasks = self.api.search_tasks(query).await?;
        self.render(&tasks);
        Ok(())
    }

    pub async fn add(
        &mut self,
        title: &str,
        description: Option<String>,
        due: Option<String>,
    ) -> Result<()> {
        if title.trim().is_empty() {
            return Err(CliError::validation(
                "title",
                tr(self.lang(), "title_required"),
            ));
        }
        self.require_session()?;

        let due_date = match due {
            Some(ref raw) => Some(parse_due_date(raw)?),
            None => None,
        };

        let new_task = NewTask::new(title.trim())
            .with_description(description)
            .with_due_date(due_date);
        self.api.create_task(&new_task).await?;

        println!("{}", tr(self.lang(), "task_added"));
        self.list(None).await
    }

    /// Move a task one step forward. The target status comes from the
    /// freshly fetched snapshot, so only the single valid forward
    /// transition is ever issued.
    pub async fn advance(&mut self, id: u32) -> Result<()> {
        self.require_session()?;

        let tasks = self.api.list_tasks(None).await?;
        let task = tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(CliError::TaskNotFound(id))?;

        let Some(next) = task.status.next() else {
            println!("{}", tr(self.lang(), "task_already_completed"));
            return Ok(());
        };

        self.api.update_status(id, next).await?;
        println!("{}", tr(self.lang(), "task_updated"));
        self.list(None).await
    }

    /// Delete a task. Without confirmation nothing is sent at all.
    pub async fn remove(&mut self, id: u32, confirmed: bool) -> Result<()> {
        self.require_session()?;

        if !confirmed {
            println!("{}", tr(self.lang(), "cancelled"));
            return Ok(());
        }

        self.api.delete_task(id).await?;
        println!("{}", tr(self.lang(), "task_deleted"));
        self.list(None).await
    }

    pub async fn ping(&self) -> Result<()> {
        self.api.health().await?;
        println!("{}", tr(self.lang(), "server_ok"));
        Ok(())
    }

    // ── Settings ───────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.view.show(Section::Settings);
        self.config.theme = theme;
        self.store.save(&self.config)?;
        println!("{}", tr(self.lang(), "theme_set"));
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.view.show(Section::Settings);
        self.config.language = language;
        self.store.save(&self.config)?;
        println!("{}", tr(self.lang(), "language_set"));
        Ok(())
    }

    /// Toggle desktop notifications. Enabling probes the desktop first;
    /// a failed probe leaves the flag off.
    pub fn set_notifications(&mut self, enabled: bool) -> Result<()> {
        self.view.show(Section::Settings);

        if enabled {
            if let Err(err) = notify::probe(self.lang()) {
                self.config.desktop_notifications = false;
                self.store.save(&self.config)?;
                return Err(err);
            }
            self.config.desktop_notifications = true;
            self.store.save(&self.config)?;
            println!("{}", tr(self.lang(), "notifications_enabled"));
        } else {
            self.config.desktop_notifications = false;
            self.store.save(&self.config)?;
            println!("{}", tr(self.lang(), "notifications_disabled"));
        }
        Ok(())
    }

    // ── Misc ───────────────────────────────────────────────────

    pub fn link(&self) -> Result<()> {
        self.require_session()?;
        self.print_link_hint();
        Ok(())
    }

    fn print_link_hint(&self) {
        if let Some(user_id) = self.config.user_id {
            println!("{}", tr(self.lang(), "link_hint"));
            println!("  /start {user_id}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(server: &MockServer, dir: &tempfile::TempDir, token: Option<&str>) -> App {
        let config = Config {
            server_url: server.uri(),
            token: token.map(str::to_string),
            user_id: token.map(|_| 5),
            ..Config::default()
        };
        let store = ConfigStore::new(dir.path().join("taskflow.toml"));
        App::new(config, store)
    }

    async fn mount_empty_list(server: &MockServer, expected: u64) {
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(expected)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_the_network() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, None);

        let err = app.login("", "secret").await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        let err = app.login("admin", "").await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        let err = app.login("   ", "secret").await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        let err = app.login("admin", "   ").await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        let err = app.register("admin", "   ").await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_login_persists_session_and_loads_tasks_once() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"token": "jwt", "user_id": 9})),
            )
            .expect(1)
            .mount(&server)
            .await;
        mount_empty_list(&server, 1).await;

        let mut app = app_for(&server, &dir, None);
        assert!(!app.view.is_authenticated());
        app.login("admin", "admin").await.unwrap();
        assert!(app.view.is_authenticated());

        let stored = app.store.load().unwrap();
        assert_eq!(stored.token.as_deref(), Some("jwt"));
        assert_eq!(stored.user_id, Some(9));
    }

    #[tokio::test]
    async fn test_persisted_session_starts_authenticated_with_same_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let store = ConfigStore::new(dir.path().join("taskflow.toml"));
        let mut config = Config::default();
        config.server_url = server.uri();
        config.token = Some("jwt-reload".to_string());
        store.save(&config).unwrap();

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer jwt-reload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let reloaded = store.load().unwrap();
        let mut app = App::new(reloaded, ConfigStore::new(dir.path().join("taskflow.toml")));
        assert!(app.view.is_authenticated());
        app.list(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_and_in_memory_session() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, Some("jwt"));

        app.logout().unwrap();
        assert!(!app.view.is_authenticated());
        assert!(!app.config.has_session());

        let stored = app.store.load().unwrap();
        assert!(stored.token.is_none());
        assert!(stored.user_id.is_none());
    }

    #[tokio::test]
    async fn test_task_ops_require_a_session() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, None);

        assert!(matches!(
            app.list(None).await.unwrap_err(),
            CliError::Auth(_)
        ));
        assert!(matches!(
            app.remove(1, true).await.unwrap_err(),
            CliError::Auth(_)
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_issues_one_delete_and_one_reload() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("DELETE"))
            .and(path("/tasks/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
            .expect(1)
            .mount(&server)
            .await;
        mount_empty_list(&server, 1).await;

        let mut app = app_for(&server, &dir, Some("jwt"));
        app.remove(7, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_declined_delete_issues_no_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let mut app = app_for(&server, &dir, Some("jwt"));
        app.remove(7, false).await.unwrap();

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_advance_puts_the_single_forward_transition() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 4,
                "title": "t",
                "status": "Создана",
                "created_at": "2026-08-30T10:00:00"
            }])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/tasks/4/status"))
            .and(wiremock::matchers::body_json(json!({"status": "В работе"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 4,
                "title": "t",
                "status": "В работе",
                "created_at": "2026-08-30T10:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut app = app_for(&server, &dir, Some("jwt"));
        app.advance(4).await.unwrap();
    }

    #[tokio::test]
    async fn test_advance_of_completed_task_sends_no_update() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 4,
                "title": "t",
                "status": "Завершена",
                "created_at": "2026-08-30T10:00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut app = app_for(&server, &dir, Some("jwt"));
        app.advance(4).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_requires_a_title_before_any_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, Some("jwt"));

        let err = app.add("   ", None, None).await.unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_malformed_due_date_before_any_request() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, Some("jwt"));

        let err = app.add("Report", None, Some("tomorrow".to_string())).await.unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_settings_changes_persist_immediately() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&server, &dir, None);

        app.set_theme(Theme::Dark).unwrap();
        app.set_language(Language::En).unwrap();

        let stored = app.store.load().unwrap();
        assert_eq!(stored.theme, Theme::Dark);
        assert_eq!(stored.language, Language::En);
    }

}
