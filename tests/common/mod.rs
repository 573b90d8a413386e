#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use econfident_service::api;
use econfident_service::client::ApiClient;
use econfident_service::common::state::AppState;
use econfident_service::entities::reports::{CreateReportArgs, Report};
use econfident_service::entities::users::{CreateUserArgs, User, UserCredentials};
use econfident_service::repositories::{ReportsRepository, UsersRepository};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const TEST_BCRYPT_COST: u32 = 4;

/// In-process stand-in for the MySQL pool.
#[derive(Default)]
pub struct MemoryDatabase {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    reports: Vec<Report>,
    users: Vec<UserCredentials>,
    last_report_id: i64,
    last_user_id: i64,
    unavailable: bool,
}

impl MemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn guard(&self) -> sqlx::Result<MutexGuard<'_, State>> {
        let state = self.state.lock().unwrap();
        if state.unavailable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state)
    }

    /// Every following statement fails as if the database went away.
    pub fn go_offline(&self) {
        self.state.lock().unwrap().unavailable = true;
    }

    /// Inserts a row directly, bypassing password hashing.
    pub fn seed_user(&self, login: &str, pass: &str, admin: i64) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.last_user_id += 1;
        let id = state.last_user_id;
        state.users.push(UserCredentials {
            id,
            login: login.to_owned(),
            pass: pass.to_owned(),
            admin,
        });
        id
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn stored_password(&self, login: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|user| user.login == login)
            .map(|user| user.pass.clone())
    }

    pub fn report_ids(&self) -> Vec<i64> {
        let state = self.state.lock().unwrap();
        state.reports.iter().map(|report| report.id).collect()
    }
}

#[async_trait]
impl ReportsRepository for MemoryDatabase {
    async fn create_report(&self, args: CreateReportArgs) -> sqlx::Result<i64> {
        let mut state = self.guard()?;
        state.last_report_id += 1;
        let id = state.last_report_id;
        state.reports.push(Report {
            id,
            title: args.title,
            descr: args.descr,
            info: args.info,
            cats: args.cats,
            admin_response: None,
        });
        Ok(id)
    }

    async fn fetch_reports_page(&self, offset: i64, limit: i64) -> sqlx::Result<Vec<Report>> {
        let state = self.guard()?;
        let mut reports = state.reports.clone();
        reports.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(reports
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn delete_reports(&self, ids: &[i64]) -> sqlx::Result<u64> {
        let mut state = self.guard()?;
        let before = state.reports.len();
        state.reports.retain(|report| !ids.contains(&report.id));
        Ok((before - state.reports.len()) as u64)
    }

    async fn set_admin_response(&self, report_id: i64, response: &str) -> sqlx::Result<u64> {
        let mut state = self.guard()?;
        match state.reports.iter_mut().find(|report| report.id == report_id) {
            Some(report) => {
                report.admin_response = Some(response.to_owned());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl UsersRepository for MemoryDatabase {
    async fn fetch_all_users(&self) -> sqlx::Result<Vec<User>> {
        let state = self.guard()?;
        let mut users: Vec<User> = state
            .users
            .iter()
            .map(|user| User {
                id: user.id,
                login: user.login.clone(),
                admin: user.admin,
            })
            .collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn fetch_credentials_by_login(&self, login: &str) -> sqlx::Result<UserCredentials> {
        let state = self.guard()?;
        state
            .users
            .iter()
            .find(|user| user.login == login)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn user_exists(&self, login: &str) -> sqlx::Result<bool> {
        let state = self.guard()?;
        Ok(state.users.iter().any(|user| user.login == login))
    }

    async fn create_user(&self, args: CreateUserArgs) -> sqlx::Result<i64> {
        let mut state = self.guard()?;
        state.last_user_id += 1;
        let id = state.last_user_id;
        state.users.push(UserCredentials {
            id,
            login: args.login,
            pass: args.pass,
            admin: args.admin as i64,
        });
        Ok(id)
    }

    async fn delete_user(&self, user_id: i64) -> sqlx::Result<u64> {
        let mut state = self.guard()?;
        let before = state.users.len();
        state.users.retain(|user| user.id != user_id);
        Ok((before - state.users.len()) as u64)
    }
}

pub fn test_app(db: Arc<MemoryDatabase>) -> Router {
    api::app(AppState::new(db, TEST_BCRYPT_COST), &[])
}

/// Sends one request through the router and decodes the JSON reply.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Serves the app on an ephemeral local port and returns its base URL.
pub async fn spawn_server(db: Arc<MemoryDatabase>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test_app(db);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Client for a server started by `spawn_server`, bypassing any system proxy.
pub fn api_client(base_url: String) -> ApiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_client(http, base_url)
}
