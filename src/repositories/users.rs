use crate::entities::users::{CreateUserArgs, User, UserCredentials};
use async_trait::async_trait;
use sqlx::{MySql, Pool};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, login, COALESCE(admin, 0) AS admin";

#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Ascending by id.
    async fn fetch_all_users(&self) -> sqlx::Result<Vec<User>>;

    /// `RowNotFound` when no user has this login.
    async fn fetch_credentials_by_login(&self, login: &str) -> sqlx::Result<UserCredentials>;

    async fn user_exists(&self, login: &str) -> sqlx::Result<bool>;

    /// Returns the id assigned by the store.
    async fn create_user(&self, args: CreateUserArgs) -> sqlx::Result<i64>;

    /// Returns the number of rows removed.
    async fn delete_user(&self, user_id: i64) -> sqlx::Result<u64>;
}

#[async_trait]
impl UsersRepository for Pool<MySql> {
    async fn fetch_all_users(&self) -> sqlx::Result<Vec<User>> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            " FROM ",
            TABLE_NAME,
            " ORDER BY id ASC"
        );
        sqlx::query_as(QUERY).fetch_all(self).await
    }

    async fn fetch_credentials_by_login(&self, login: &str) -> sqlx::Result<UserCredentials> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            ", pass FROM ",
            TABLE_NAME,
            " WHERE login = ? ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as(QUERY).bind(login).fetch_one(self).await
    }

    async fn user_exists(&self, login: &str) -> sqlx::Result<bool> {
        const QUERY: &str = const_str::concat!("SELECT id FROM ", TABLE_NAME, " WHERE login = ?");
        let row: Option<(i64,)> = sqlx::query_as(QUERY)
            .bind(login)
            .fetch_optional(self)
            .await?;
        Ok(row.is_some())
    }

    async fn create_user(&self, args: CreateUserArgs) -> sqlx::Result<i64> {
        const QUERY: &str = const_str::concat!(
            "INSERT INTO ",
            TABLE_NAME,
            " (login, pass, admin) VALUES (?, ?, ?)"
        );
        let res = sqlx::query(QUERY)
            .bind(args.login)
            .bind(args.pass)
            .bind(args.admin)
            .execute(self)
            .await?;
        Ok(res.last_insert_id() as _)
    }

    async fn delete_user(&self, user_id: i64) -> sqlx::Result<u64> {
        const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
        let res = sqlx::query(QUERY).bind(user_id).execute(self).await?;
        Ok(res.rows_affected())
    }
}
