mod health_check;
pub mod locations;
pub mod verifications;

pub use health_check::health_check;
