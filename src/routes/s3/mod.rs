mod handler;
mod model;

pub use handler::{list_objects, upload_object};
