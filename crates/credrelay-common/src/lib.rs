//! # credrelay-common
//!
//! Shared types for the credrelay authorization adapter.
//!
//! This crate provides the data vocabulary the adapter and its collaborators
//! exchange:
//! - Authorization schemes and credential records (Basic, NTLM)
//! - Mutable request / read-only response descriptors
//! - Outbound notification events and the subscriber callback type
//! - Raw header-block parsing and URL canonicalization utilities
//!
//! ## Example
//!
//! ```
//! use credrelay_common::{AuthScheme, BasicCredentials, CredentialRecord, canonical_url};
//!
//! // A Basic record precomputes the header hash on construction.
//! let creds = BasicCredentials::new("test", "test");
//! assert_eq!(creds.hash, "dGVzdDp0ZXN0");
//! assert_eq!(creds.header_value(), "Basic dGVzdDp0ZXN0");
//!
//! let record = CredentialRecord::from(creds);
//! assert_eq!(record.scheme(), AuthScheme::Basic);
//!
//! // Cache and storage keys drop query strings and fragments.
//! assert_eq!(canonical_url("http://h/p/?a=b#c"), "http://h/p/");
//!
//! // Challenge values classify to the scheme whose dialog should open.
//! assert_eq!(
//!     AuthScheme::from_challenge("Basic realm=\"api\""),
//!     Some(AuthScheme::Basic)
//! );
//! ```

/// Authorization schemes, credential records, and the NTLM directive.
pub mod auth;
/// Outbound notification events and the subscriber callback type.
pub mod events;
/// Raw header-block parsing and upsert utilities.
pub mod headers;
/// Request and response descriptors.
pub mod request;
/// Canonical URL derivation.
pub mod urls;

pub use auth::{AuthDirective, AuthScheme, BasicCredentials, CredentialRecord, NtlmCredentials};
pub use events::{AuthEvent, EventCallback};
pub use request::{RequestDescriptor, ResponseDescriptor};
pub use urls::canonical_url;
