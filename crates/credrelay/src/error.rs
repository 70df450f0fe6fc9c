use thiserror::Error;

/// Failures reported by a [`crate::CredentialStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No collaborator handles this operation; the adapter degrades to a
    /// logged diagnostic.
    #[error("credential store did not handle the request")]
    NotHandled,

    #[error("credential store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
