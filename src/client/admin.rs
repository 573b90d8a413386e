use crate::client::session::Session;
use crate::client::{ApiClient, ClientError, ClientResult};
use crate::models::reports::Report;
use crate::models::users::User;
use std::collections::BTreeSet;

/// The console lists at most this many complaints at once.
pub const ADMIN_COMPLAINT_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Complaints,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEditor {
    pub complaint_id: i64,
    pub text: String,
}

/// Moderation state: complaint selection, the single open response editor
/// and the user list.
#[derive(Debug, Default)]
pub struct AdminConsole {
    tab: AdminTab,
    complaints: Vec<Report>,
    users: Vec<User>,
    selected: BTreeSet<i64>,
    editor: Option<ResponseEditor>,
}

impl AdminConsole {
    pub fn new(session: &Session) -> ClientResult<Self> {
        if !session.is_admin() {
            return Err(ClientError::NotAdmin);
        }
        Ok(Self::default())
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn complaints(&self) -> &[Report] {
        &self.complaints
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    pub fn editor(&self) -> Option<&ResponseEditor> {
        self.editor.as_ref()
    }

    /// Switches tab and reloads the list shown on it.
    pub async fn open_tab(&mut self, client: &ApiClient, tab: AdminTab) -> ClientResult<()> {
        self.tab = tab;
        match tab {
            AdminTab::Complaints => self.refresh_complaints(client).await,
            AdminTab::Users => self.refresh_users(client).await,
        }
    }

    pub async fn refresh_complaints(&mut self, client: &ApiClient) -> ClientResult<()> {
        self.complaints = client.fetch_complaints(0, ADMIN_COMPLAINT_LIMIT).await?;
        Ok(())
    }

    pub async fn refresh_users(&mut self, client: &ApiClient) -> ClientResult<()> {
        self.users = client.fetch_users().await?;
        Ok(())
    }

    pub fn toggle_selected(&mut self, complaint_id: i64) {
        if !self.selected.remove(&complaint_id) {
            self.selected.insert(complaint_id);
        }
    }

    /// Selects every listed complaint, or clears the selection if all of
    /// them are already selected.
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.complaints.len() {
            self.selected.clear();
        } else {
            self.selected = self.complaints.iter().map(|c| c.id).collect();
        }
    }

    /// Returns the number of complaints the server actually removed.
    pub async fn delete_selected(&mut self, client: &ApiClient) -> ClientResult<u64> {
        if self.selected.is_empty() {
            return Err(ClientError::NothingSelected);
        }
        let ids: Vec<i64> = self.selected.iter().copied().collect();
        let response = client.delete_complaints(&ids).await?;
        self.selected.clear();
        self.refresh_complaints(client).await?;
        Ok(response.deleted_count)
    }

    /// Opening an editor closes whichever one was open before.
    pub fn open_editor(&mut self, complaint_id: i64) {
        self.editor = Some(ResponseEditor {
            complaint_id,
            text: String::new(),
        });
    }

    pub fn set_response_text(&mut self, text: impl Into<String>) -> ClientResult<()> {
        let editor = self.editor.as_mut().ok_or(ClientError::NoOpenEditor)?;
        editor.text = text.into();
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub async fn submit_response(&mut self, client: &ApiClient) -> ClientResult<()> {
        let editor = self.editor.as_ref().ok_or(ClientError::NoOpenEditor)?;
        if editor.text.trim().is_empty() {
            return Err(ClientError::BlankResponse);
        }
        client
            .respond_to_complaint(editor.complaint_id, &editor.text)
            .await?;
        self.editor = None;
        self.refresh_complaints(client).await
    }

    pub async fn add_user(
        &mut self,
        client: &ApiClient,
        login: &str,
        password: &str,
        admin: bool,
    ) -> ClientResult<i64> {
        if login.is_empty() || password.is_empty() {
            return Err(ClientError::MissingCredentials);
        }
        let response = client.create_user(login, password, admin).await?;
        self.refresh_users(client).await?;
        Ok(response.id)
    }

    pub async fn delete_user(&mut self, client: &ApiClient, user_id: i64) -> ClientResult<()> {
        client.delete_user(user_id).await?;
        self.refresh_users(client).await
    }
}
