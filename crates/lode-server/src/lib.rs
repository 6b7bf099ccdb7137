//! LodeKV Server
//!
//! Translates raw API requests into storage operations. Handlers are
//! stateless: every read runs against a fresh snapshot, every expected
//! failure becomes a response field.

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::Server;
