use crate::client::{ApiClient, ClientResult};

/// Who is using the client. Lives only in memory; the server issues no token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    is_admin: bool,
}

impl Session {
    pub async fn login(client: &ApiClient, login: &str, password: &str) -> ClientResult<Self> {
        let response = client.login(login, password).await?;
        Ok(Self {
            logged_in: response.success,
            is_admin: response.success && response.is_admin,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }
}
