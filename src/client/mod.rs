//! Typed client for the HTTP API, plus the state behind each client view.

pub mod admin;
pub mod feed;
pub mod session;

use crate::models::StatusResponse;
use crate::models::reports::{
    AdminResponseRequest, CreateReportRequest, CreateReportResponse, DeleteReportsRequest,
    DeleteReportsResponse, Report,
};
use crate::models::sessions::{LoginRequest, LoginResponse};
use crate::models::users::{CreateUserRequest, CreateUserResponse, User};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("administrator privileges are required")]
    NotAdmin,
    #[error("login and password are required")]
    MissingCredentials,
    #[error("no complaints are selected")]
    NothingSelected,
    #[error("no response editor is open")]
    NoOpenEditor,
    #[error("the response must not be blank")]
    BlankResponse,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    pub async fn submit_complaint(
        &self,
        form: &CreateReportRequest,
    ) -> ClientResult<CreateReportResponse> {
        let response = self
            .http
            .post(self.url("/api/complaints"))
            .json(form)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn fetch_complaints(&self, offset: i64, limit: i64) -> ClientResult<Vec<Report>> {
        let response = self
            .http
            .get(self.url("/api/complaints"))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;
        parse(response).await
    }

    pub async fn delete_complaints(&self, ids: &[i64]) -> ClientResult<DeleteReportsResponse> {
        let response = self
            .http
            .delete(self.url("/api/complaints"))
            .json(&DeleteReportsRequest { ids })
            .send()
            .await?;
        parse(response).await
    }

    pub async fn respond_to_complaint(
        &self,
        complaint_id: i64,
        admin_response: &str,
    ) -> ClientResult<StatusResponse> {
        let request = AdminResponseRequest {
            admin_response: Some(admin_response.to_owned()),
        };
        let response = self
            .http
            .put(self.url(&format!("/api/complaints/{complaint_id}/response")))
            .json(&request)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn login(&self, login: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            login: Some(login.to_owned()),
            password: Some(password.to_owned()),
        };
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&request)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        let response = self.http.get(self.url("/api/users")).send().await?;
        parse(response).await
    }

    pub async fn create_user(
        &self,
        login: &str,
        password: &str,
        admin: bool,
    ) -> ClientResult<CreateUserResponse> {
        let request = CreateUserRequest {
            login: Some(login.to_owned()),
            password: Some(password.to_owned()),
            admin: Some(Value::Bool(admin)),
        };
        let response = self
            .http
            .post(self.url("/api/users"))
            .json(&request)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn delete_user(&self, user_id: i64) -> ClientResult<StatusResponse> {
        let response = self
            .http
            .delete(self.url(&format!("/api/users/{user_id}")))
            .send()
            .await?;
        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body: Value = response.json().await.unwrap_or_default();
    let message = body
        .get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .or_else(|| status.canonical_reason())
        .unwrap_or_default()
        .to_owned();
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
