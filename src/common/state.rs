use crate::repositories::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db: Arc<dyn Database>, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}
