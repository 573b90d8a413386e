pub mod passwords;
pub mod reports;
pub mod sessions;
pub mod users;
