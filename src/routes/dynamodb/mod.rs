mod handler;
mod model;

pub use handler::{put_user, scan_users};
