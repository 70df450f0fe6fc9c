//! # credrelay
//!
//! Authorization adapter for API-client applications.
//!
//! The adapter sits between a request editor and the HTTP transport. It
//! silently attaches cached Basic/NTLM credentials to outgoing requests,
//! detects `401` challenges on responses, and drives the credential-dialog
//! lifecycle as pure observable state: the rendering layer watches
//! [`AuthInterceptor::dialog`] and reports the user's decision back through
//! [`AuthInterceptor::dialog_closed`]. Persistence is a seam — implement
//! [`CredentialStore`] to restore and save records, or attach nothing and
//! let every store interaction degrade to a logged diagnostic.
//!
//! ## Example
//!
//! ```
//! use credrelay::{AuthInterceptor, DialogOutcome};
//! use credrelay_common::{BasicCredentials, RequestDescriptor, ResponseDescriptor};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut interceptor = AuthInterceptor::default();
//!
//! // A 401 challenge opens the scheme-appropriate dialog one tick later.
//! let request = RequestDescriptor::builder()
//!     .url("http://api.example.com/data?page=2")
//!     .build();
//! let response = ResponseDescriptor::builder()
//!     .status(401)
//!     .headers("WWW-Authenticate: Basic realm=\"api\"")
//!     .build();
//! interceptor.process_response(&request, &response, "req-1").await;
//! assert!(interceptor.dialog().is_some());
//!
//! // The rendering layer reports the user's input.
//! let submitted = DialogOutcome::Submitted(BasicCredentials::new("test", "test").into());
//! interceptor.dialog_closed(submitted).await;
//!
//! // The retry gets its header silently.
//! let mut retry = RequestDescriptor::builder()
//!     .url("http://api.example.com/data?page=2")
//!     .build();
//! interceptor.process_request(&mut retry);
//! assert_eq!(
//!     retry.headers.as_deref(),
//!     Some("authorization: Basic dGVzdDp0ZXN0")
//! );
//! # }
//! ```

/// Session-scoped credential cache.
pub mod cache;
/// Dialog lifecycle state the rendering layer observes.
pub mod dialog;
/// Store error type.
pub mod error;
/// The adapter's entry points.
pub mod interceptor;
/// Persistence seam for credential records.
pub mod store;

pub use cache::CredentialCache;
pub use dialog::{DialogOutcome, DialogPhase, PendingDialog};
pub use error::StoreError;
pub use interceptor::{AuthInterceptor, challenge_scheme};
pub use store::{CredentialStore, NoopCredentialStore};
