//! HTTP API for alias issuance

pub mod handlers;
pub mod server;

pub use server::ApiServer;
