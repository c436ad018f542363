//! alias-rs: email alias issuance service
//!
//! A small HTTP service that issues randomized email aliases and
//! registers each one with a Stalwart mail server so that a configured
//! mailbox receives mail sent to the alias.
//!
//! # Features
//!
//! - Bearer-token authenticated alias creation API
//! - Addy.io-compatible and SimpleLogin-compatible response shapes
//! - Best-effort registration against Stalwart's management API
//!   (`PATCH /principal` or `POST /aliases`, selected by configuration)
//! - Non-guessable UUID-derived local parts
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:3000"
//!
//! [api]
//! token = "change-me"
//!
//! [alias]
//! default_domain = "example.com"
//! forward_to = "inbox@example.com"
//!
//! [stalwart]
//! base_url = "https://mail.example.com:8080"
//! username = "admin"
//! password = "secret"
//! flavor = "principal"
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod registrar;

pub use api::ApiServer;
pub use config::AliasConfig;
pub use error::{AliasError, Result};
pub use generator::{generate_alias, Alias};
pub use registrar::{ApiFlavor, Registrar};
