use crate::repositories::Database;

pub trait Context: Sync + Send {
    fn db(&self) -> &dyn Database;
    fn bcrypt_cost(&self) -> u32;
}
