pub mod context;
pub mod env;
pub mod error;
pub mod init;
pub mod json_body;
pub mod lenient;
pub mod state;
