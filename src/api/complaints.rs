use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::json_body::JsonBody;
use crate::common::lenient;
use crate::models::StatusResponse;
use crate::models::reports::{
    AdminResponseRequest, CreateReportRequest, CreateReportResponse, DeleteReportsArgs,
    DeleteReportsResponse, PageArgs, Report,
};
use crate::usecases::reports;
use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use tracing::info;

pub async fn create(
    ctx: RequestContext,
    JsonBody(args): JsonBody<CreateReportRequest>,
) -> ServiceResult<(StatusCode, Json<CreateReportResponse>)> {
    info!(title = ?args.title, cats = ?args.cats, "Received complaint");
    let report_id = reports::create(&ctx, args.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse {
            message: "Complaint submitted successfully".to_owned(),
            id: report_id,
        }),
    ))
}

pub async fn fetch_page(
    ctx: RequestContext,
    Query(args): Query<PageArgs>,
) -> ServiceResponse<Vec<Report>> {
    let offset = args.offset();
    let limit = args.limit();
    info!("Fetching complaints with offset: {offset}, limit: {limit}");
    let reports = reports::fetch_page(&ctx, offset, limit).await?;
    Ok(Json(reports))
}

pub async fn delete_many(
    ctx: RequestContext,
    JsonBody(args): JsonBody<DeleteReportsArgs>,
) -> ServiceResponse<DeleteReportsResponse> {
    let ids = args.ids()?;
    info!("Deleting complaints with IDs: {ids:?}");
    let deleted_count = reports::delete_many(&ctx, &ids).await?;
    Ok(Json(DeleteReportsResponse {
        success: true,
        message: "Complaints deleted successfully".to_owned(),
        deleted_count,
    }))
}

pub async fn set_admin_response(
    ctx: RequestContext,
    Path(report_id): Path<String>,
    JsonBody(args): JsonBody<AdminResponseRequest>,
) -> ServiceResponse<StatusResponse> {
    let report_id = match lenient::parse_int(&report_id) {
        Some(report_id) if report_id != 0 => report_id,
        _ => return Err(AppError::ReportsInvalidId),
    };
    let response = args.admin_response.unwrap_or_default();
    info!(report_id, "Adding admin response to complaint");
    reports::set_admin_response(&ctx, report_id, &response).await?;
    Ok(Json(StatusResponse::ok("Admin response added successfully")))
}
