//! Connection configuration, credential resolution and the authenticated
//! ledger client.
//!
//! The pipeline is two-stage and explicit: [`ConnectionConfig::validate`]
//! turns the raw configuration into a [`ValidatedConnection`] whose
//! [`AuthMode`] holds exactly one authentication mode by construction, then
//! [`resolve`] turns that into an immutable [`Credential`] (bearer token plus
//! typed claims). The credential is threaded explicitly to every consumer;
//! nothing is written back onto the configuration.

pub mod client;
pub mod config;
pub mod redacted;
pub mod resolve;

pub use crate::client::{AuthInterceptor, Error, LedgerClient, LedgerServices};
pub use crate::config::{
    AuthMode, ConnectionConfig, InvalidConfig, ValidatedConnection, Violation,
};
pub use crate::redacted::Redacted;
pub use crate::resolve::{Credential, ResolveError, resolve, resolve_with_ledger_id};
