use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::usecases::passwords;

/// Checks a login/password pair and reports whether the account is an
/// administrator. Nothing is persisted; there is no session token.
pub async fn authenticate<C: Context>(
    ctx: &C,
    login: &str,
    password: &str,
) -> ServiceResult<bool> {
    if login.is_empty() || password.is_empty() {
        return Err(AppError::SessionsInvalidCredentials);
    }

    let user = match ctx.db().fetch_credentials_by_login(login).await {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::SessionsInvalidCredentials),
        Err(e) => return unexpected(e),
    };

    if !passwords::verify(password, &user.pass)? {
        return Err(AppError::SessionsInvalidCredentials);
    }
    Ok(user.admin != 0)
}
