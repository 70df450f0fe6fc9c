//! Persistence seam for credential records.
//!
//! The adapter never talks to a database itself: it asks an injected
//! [`CredentialStore`] to restore previously saved credentials when a dialog
//! opens and to persist freshly submitted ones after it closes. Both
//! operations are optional — the default method bodies report
//! [`StoreError::NotHandled`], which the adapter downgrades to a warning, so
//! the component stays fully usable with no persistence collaborator
//! attached.

use async_trait::async_trait;

use credrelay_common::{AuthScheme, CredentialRecord};

use crate::error::StoreError;

/// External storage for credential records, keyed by canonical URL and
/// scheme.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetches previously persisted credentials for a `(url, scheme)` pair.
    ///
    /// `Ok(None)` means the store looked and found nothing; the dialog opens
    /// with empty fields either way.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotHandled`] when the store does not implement restore;
    /// [`StoreError::Backend`] for storage failures. Neither aborts the
    /// dialog flow.
    async fn query(
        &self,
        url: &str,
        scheme: AuthScheme,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let _ = (url, scheme);
        Err(StoreError::NotHandled)
    }

    /// Saves a submitted credential record for a `(url, scheme)` pair.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotHandled`] when the store does not implement
    /// persistence; [`StoreError::Backend`] for storage failures. Neither is
    /// surfaced past a diagnostic.
    async fn persist(
        &self,
        url: &str,
        scheme: AuthScheme,
        record: &CredentialRecord,
    ) -> Result<(), StoreError> {
        let _ = (url, scheme, record);
        Err(StoreError::NotHandled)
    }
}

/// The default collaborator: handles nothing, so every store interaction
/// takes the logged-diagnostic path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCredentialStore;

#[async_trait]
impl CredentialStore for NoopCredentialStore {}
