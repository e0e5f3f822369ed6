mod error;
mod get;

pub use error::LocationError;
pub use get::{get_all, get_one};
