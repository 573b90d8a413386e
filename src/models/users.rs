use crate::common::lenient;
use crate::entities::users;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub admin: bool,
}

impl From<users::User> for User {
    fn from(user: users::User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            admin: user.admin != 0,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub login: Option<String>,
    pub password: Option<String>,
    pub admin: Option<Value>,
}

impl CreateUserRequest {
    pub fn is_admin(&self) -> bool {
        self.admin.as_ref().is_some_and(lenient::is_truthy)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn admin_flag_is_normalised() {
        let row = |admin| users::User {
            id: 1,
            login: "jan".into(),
            admin,
        };
        assert!(!User::from(row(0)).admin);
        assert!(User::from(row(1)).admin);
    }

    #[test]
    fn admin_defaults_to_false() {
        let request: CreateUserRequest =
            serde_json::from_value(json!({ "login": "jan", "password": "x" })).unwrap();
        assert!(!request.is_admin());

        let request: CreateUserRequest =
            serde_json::from_value(json!({ "login": "jan", "password": "x", "admin": 1 }))
                .unwrap();
        assert!(request.is_admin());
    }
}
