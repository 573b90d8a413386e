use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::users::CreateUserArgs;
use crate::models::users::User;
use crate::usecases::passwords;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    match ctx.db().fetch_all_users().await {
        Ok(users) => Ok(users.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// The existence check and the insert are separate statements, so two
/// concurrent requests for the same login can both succeed unless the
/// `login` column carries a unique index.
pub async fn create<C: Context>(
    ctx: &C,
    login: &str,
    password: &str,
    admin: bool,
) -> ServiceResult<i64> {
    if login.is_empty() || password.is_empty() {
        return Err(AppError::UsersCredentialsRequired);
    }

    match ctx.db().user_exists(login).await {
        Ok(true) => return Err(AppError::UsersAlreadyExists),
        Ok(false) => {}
        Err(e) => return unexpected(e),
    }

    let args = CreateUserArgs {
        login: login.to_owned(),
        pass: passwords::hash(password, ctx.bcrypt_cost())?,
        admin,
    };
    match ctx.db().create_user(args).await {
        Ok(user_id) => Ok(user_id),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::UsersAlreadyExists)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn delete<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<()> {
    match ctx.db().delete_user(user_id).await {
        Ok(0) => Err(AppError::UsersNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}
