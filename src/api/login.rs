use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::json_body::JsonBody;
use crate::models::sessions::{LoginRequest, LoginResponse};
use crate::usecases::sessions;
use axum::Json;
use tracing::info;

pub async fn login(
    ctx: RequestContext,
    JsonBody(args): JsonBody<LoginRequest>,
) -> ServiceResponse<LoginResponse> {
    let login = args.login.unwrap_or_default();
    let password = args.password.unwrap_or_default();
    info!(login = %login, "Login attempt");
    let is_admin = sessions::authenticate(&ctx, &login, &password).await?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_owned(),
        is_admin,
    }))
}
