use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub login: String,
    /// Stored as 0/1; anything non-zero is an administrator.
    pub admin: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub login: String,
    pub pass: String,
    pub admin: i64,
}

pub struct CreateUserArgs {
    pub login: String,
    pub pass: String,
    pub admin: bool,
}
