use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, info};

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    /// Store message of the failed insert, echoed back to the caller.
    ReportsCreateFailed(String),
    ReportsNoIds,
    ReportsInvalidId,
    ReportsResponseRequired,
    ReportsNotFound,

    UsersInvalidId,
    UsersCredentialsRequired,
    UsersPasswordTooLong,
    UsersAlreadyExists,
    UsersNotFound,

    SessionsInvalidCredentials,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::ReportsCreateFailed(_) => "reports.create_failed",
            AppError::ReportsNoIds => "reports.no_ids",
            AppError::ReportsInvalidId => "reports.invalid_id",
            AppError::ReportsResponseRequired => "reports.response_required",
            AppError::ReportsNotFound => "reports.not_found",

            AppError::UsersInvalidId => "users.invalid_id",
            AppError::UsersCredentialsRequired => "users.credentials_required",
            AppError::UsersPasswordTooLong => "users.password_too_long",
            AppError::UsersAlreadyExists => "users.already_exists",
            AppError::UsersNotFound => "users.not_found",

            AppError::SessionsInvalidCredentials => "sessions.invalid_credentials",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected | AppError::ReportsCreateFailed(_) => "Database error",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::ReportsNoIds => "No IDs provided",
            AppError::ReportsInvalidId => "Invalid complaint ID",
            AppError::ReportsResponseRequired => "Admin response is required",
            AppError::ReportsNotFound => "Complaint not found",

            AppError::UsersInvalidId => "Invalid user ID",
            AppError::UsersCredentialsRequired => "Login and password are required",
            AppError::UsersPasswordTooLong => "Password must be at most 72 bytes",
            AppError::UsersAlreadyExists => "User already exists",
            AppError::UsersNotFound => "User not found",

            AppError::SessionsInvalidCredentials => "Invalid credentials",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::ReportsNoIds
            | AppError::ReportsInvalidId
            | AppError::ReportsResponseRequired
            | AppError::UsersInvalidId
            | AppError::UsersCredentialsRequired
            | AppError::UsersPasswordTooLong => StatusCode::BAD_REQUEST,

            AppError::SessionsInvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::ReportsNotFound | AppError::UsersNotFound => StatusCode::NOT_FOUND,

            AppError::UsersAlreadyExists => StatusCode::CONFLICT,

            AppError::Unexpected | AppError::ReportsCreateFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn response_parts(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let message = self.message();
        let response = match self {
            AppError::SessionsInvalidCredentials => ErrorResponse::Failure {
                success: false,
                message,
            },
            AppError::ReportsCreateFailed(details) => ErrorResponse::Error {
                error: message,
                details: Some(details),
            },
            _ => ErrorResponse::Error {
                error: message,
                details: None,
            },
        };
        (status, Json(response))
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    Error {
        error: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Failure {
        success: bool,
        message: &'static str,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status_code();
        if status.is_client_error() {
            info!(code = self.code(), status = status.as_u16(), "Request rejected");
        }
        self.response_parts().into_response()
    }
}
