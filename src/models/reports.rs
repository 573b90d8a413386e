use crate::common::error::{AppError, ServiceResult};
use crate::common::lenient;
use crate::entities::reports;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE_OFFSET: i64 = 0;
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Report {
    pub id: i64,
    pub title: Option<String>,
    pub descr: Option<String>,
    pub info: Option<String>,
    pub cats: Option<String>,
    pub admin_response: Option<String>,
}

impl From<reports::Report> for Report {
    fn from(report: reports::Report) -> Self {
        Self {
            id: report.id,
            title: report.title,
            descr: report.descr,
            info: report.info,
            cats: report.cats,
            admin_response: report.admin_response,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateReportRequest {
    pub title: Option<String>,
    pub descr: Option<String>,
    pub info: Option<String>,
    pub cats: Option<String>,
}

impl From<CreateReportRequest> for reports::CreateReportArgs {
    fn from(request: CreateReportRequest) -> Self {
        Self {
            title: request.title,
            descr: request.descr,
            info: request.info,
            cats: request.cats,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateReportResponse {
    pub message: String,
    pub id: i64,
}

/// Raw query parameters; both are parsed leniently and fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PageArgs {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl PageArgs {
    pub fn offset(&self) -> i64 {
        match self.offset.as_deref().and_then(lenient::parse_int) {
            Some(offset) if offset > 0 => offset,
            _ => DEFAULT_PAGE_OFFSET,
        }
    }

    pub fn limit(&self) -> i64 {
        match self.limit.as_deref().and_then(lenient::parse_int) {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteReportsArgs {
    #[serde(default)]
    pub ids: Value,
}

impl DeleteReportsArgs {
    /// `ids` must be a non-empty array of integers.
    pub fn ids(&self) -> ServiceResult<Vec<i64>> {
        match &self.ids {
            Value::Array(ids) if !ids.is_empty() => ids
                .iter()
                .map(|id| id.as_i64().ok_or(AppError::ReportsNoIds))
                .collect(),
            _ => Err(AppError::ReportsNoIds),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteReportsRequest<'a> {
    pub ids: &'a [i64],
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteReportsResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AdminResponseRequest {
    pub admin_response: Option<String>,
}
