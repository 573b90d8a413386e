use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::json_body::JsonBody;
use crate::common::lenient;
use crate::models::StatusResponse;
use crate::models::users::{CreateUserRequest, CreateUserResponse, User};
use crate::usecases::users;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use tracing::info;

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<User>> {
    info!("Fetching all users");
    let users = users::fetch_all(&ctx).await?;
    Ok(Json(users))
}

pub async fn create(
    ctx: RequestContext,
    JsonBody(args): JsonBody<CreateUserRequest>,
) -> ServiceResult<(StatusCode, Json<CreateUserResponse>)> {
    let admin = args.is_admin();
    let login = args.login.unwrap_or_default();
    let password = args.password.unwrap_or_default();
    info!(login = %login, admin, "Creating user");
    let user_id = users::create(&ctx, &login, &password, admin).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            success: true,
            message: "User created successfully".to_owned(),
            id: user_id,
        }),
    ))
}

pub async fn delete(
    ctx: RequestContext,
    Path(user_id): Path<String>,
) -> ServiceResponse<StatusResponse> {
    let user_id = match lenient::parse_int(&user_id) {
        Some(user_id) if user_id != 0 => user_id,
        _ => return Err(AppError::UsersInvalidId),
    };
    info!(user_id, "Deleting user");
    users::delete(&ctx, user_id).await?;
    Ok(Json(StatusResponse::ok("User deleted successfully")))
}
