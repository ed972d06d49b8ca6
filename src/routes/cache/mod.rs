mod handler;

pub use handler::{append_user, list_users};
