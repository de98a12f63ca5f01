// Library exports for binaries and tests
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod schema;
pub mod server;
pub mod text;
