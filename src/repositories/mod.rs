pub mod reports;
pub mod users;

pub use reports::ReportsRepository;
pub use users::UsersRepository;

/// Everything the request handlers need from the store.
pub trait Database: ReportsRepository + UsersRepository {}

impl<T: ReportsRepository + UsersRepository> Database for T {}
