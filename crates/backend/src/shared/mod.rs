pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod session;
pub mod store;
