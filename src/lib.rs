//! Client SDK for the Delinea (Thycotic) Secret Server REST API.
//!
//! The entry point is [`SecretServer`]: retrieve a secret by numeric ID or
//! by folder path, with file-backed field values fetched and substituted
//! transparently, and create, update, or delete secrets. Transport goes
//! through the [`ResourceAccessor`] trait; [`RestAccessor`] is the bundled
//! implementation (tenant URL derivation plus OAuth2 password grant).
//!
//! Diagnostics are emitted as `tracing` events; the crate installs no
//! subscriber of its own.
//!
//! ```no_run
//! # async fn demo() -> Result<(), tss_sdk::Error> {
//! use tss_sdk::{Configuration, SecretServer, UserCredential};
//!
//! let server = SecretServer::new(&Configuration {
//!     credentials: UserCredential {
//!         username: "app".into(),
//!         password: "p@ss".into(),
//!     },
//!     tenant: "example".into(),
//!     ..Default::default()
//! })?;
//!
//! let secret = server.secret(1).await?;
//! if let Some(password) = secret.field("password") {
//!     println!("{password}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod accessor;
pub mod client;
pub mod config;
pub mod error;
pub mod identifier;
pub mod secret;

pub use accessor::{Method, ResourceAccessor, RestAccessor};
pub use client::SecretServer;
pub use config::{Configuration, UserCredential};
pub use error::Error;
pub use identifier::SecretRef;
pub use secret::{Secret, SecretField, SshKeyArgs};
