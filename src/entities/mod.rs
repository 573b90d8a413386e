pub mod reports;
pub mod users;
