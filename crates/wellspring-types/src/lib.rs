pub mod model;
pub mod message;
pub mod snapshot;
pub mod identity;
pub mod config;
pub mod event;
pub mod error;
pub mod demo;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
