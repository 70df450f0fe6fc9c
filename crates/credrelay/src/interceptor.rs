//! The authorization adapter's entry points.
//!
//! [`AuthInterceptor`] is glue between three collaborators it never owns: the
//! request editor (which calls [`AuthInterceptor::process_request`] before
//! every send and [`AuthInterceptor::process_response`] after every receive),
//! the dialog rendering layer (which observes [`AuthInterceptor::dialog`] and
//! reports back through [`AuthInterceptor::dialog_closed`]), and the
//! persistence store behind the [`CredentialStore`] seam.
//!
//! No entry point returns an error. Malformed input — a request without a
//! URL, a response without headers, an unsupported challenge scheme — makes
//! the affected step a no-op, and store failures degrade to `warn!`
//! diagnostics.

use log::{debug, warn};
use tokio::task::yield_now;

use credrelay_common::events::{AuthEvent, EventCallback};
use credrelay_common::{
    AuthScheme, CredentialRecord, RequestDescriptor, ResponseDescriptor, canonical_url, headers,
};

use crate::cache::CredentialCache;
use crate::dialog::{DialogOutcome, PendingDialog};
use crate::error::StoreError;
use crate::store::{CredentialStore, NoopCredentialStore};

/// Determines whether a response is an authorization challenge the adapter
/// can answer, and for which scheme.
///
/// Anything other than a 401 with a recognizable `WWW-Authenticate` header
/// yields `None`: unsupported schemes are silently ignored, not errors.
#[must_use]
pub fn challenge_scheme(response: &ResponseDescriptor) -> Option<AuthScheme> {
    if response.status != 401 {
        return None;
    }
    let block = response.headers.as_deref()?;
    let challenge = headers::find_header(block, "www-authenticate")?;
    AuthScheme::from_challenge(&challenge)
}

/// Attaches cached credentials to outgoing requests and turns 401 challenges
/// into credential-dialog state.
pub struct AuthInterceptor<S: CredentialStore = NoopCredentialStore> {
    store: S,
    cache: CredentialCache,
    events: Option<EventCallback>,
    dialog: Option<PendingDialog>,
}

impl Default for AuthInterceptor<NoopCredentialStore> {
    fn default() -> Self {
        Self::new(NoopCredentialStore)
    }
}

impl<S: CredentialStore> AuthInterceptor<S> {
    /// Creates an adapter around a persistence collaborator.
    ///
    /// Use [`AuthInterceptor::default`] when there is none; every store
    /// interaction then degrades to a logged diagnostic.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: CredentialCache::new(),
            events: None,
            dialog: None,
        }
    }

    /// Subscribes a callback to outbound [`AuthEvent`] notifications.
    #[must_use]
    pub fn with_event_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.events = Some(Box::new(callback));
        self
    }

    /// The session credential cache.
    #[must_use]
    pub const fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    /// The persistence collaborator.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The pending dialog state, when a challenge is being answered.
    #[must_use]
    pub const fn dialog(&self) -> Option<&PendingDialog> {
        self.dialog.as_ref()
    }

    /// Pre-send hook: injects cached credentials into the request.
    ///
    /// Synchronous by contract — the caller must run it to completion before
    /// handing the request to the transport. In order: a request that already
    /// carries an `Authorization` header (any case) or has no URL is left
    /// alone; otherwise the canonical URL is looked up for Basic credentials
    /// first, then NTLM. A Basic hit rewrites the header block (and emits
    /// [`AuthEvent::RequestHeadersChanged`] when the block actually changed);
    /// an NTLM hit sets the connection-level `auth` directive with no header
    /// notification.
    pub fn process_request(&self, request: &mut RequestDescriptor) {
        let block = request.header_block().to_string();
        if headers::has_authorization(&block) {
            return;
        }
        let Some(raw_url) = request.url.as_deref() else {
            return;
        };
        let url = canonical_url(raw_url);

        if let Some(creds) = self.cache.find_basic(&url) {
            let value = creds.header_value();
            let new_block = headers::replace_header_value(&block, "authorization", &value);
            if new_block != block {
                debug!("applying cached basic credentials for {url}");
                self.emit(&AuthEvent::RequestHeadersChanged {
                    value: new_block.clone(),
                });
                request.headers = Some(new_block);
            }
            return;
        }

        if let Some(creds) = self.cache.find_ntlm(&url) {
            debug!("applying cached ntlm credentials for {url}");
            request.auth = Some(creds.directive());
        }
    }

    /// Post-receive hook: detects a challenge and opens the matching dialog.
    ///
    /// When the response is a 401 with a supported `WWW-Authenticate` scheme
    /// and the originating request has a URL, the dialog trigger is deferred
    /// one scheduling turn so the caller can finish rendering the response,
    /// then the dialog state is created, the restore query runs, and the
    /// dialog becomes visible. Everything else is a no-op.
    pub async fn process_response(
        &mut self,
        request: &RequestDescriptor,
        response: &ResponseDescriptor,
        request_id: impl Into<String>,
    ) {
        let Some(scheme) = challenge_scheme(response) else {
            return;
        };
        let Some(raw_url) = request.url.as_deref() else {
            return;
        };
        let url = canonical_url(raw_url);

        // The response should reach the screen before the modal state does.
        yield_now().await;

        self.open_dialog(scheme, url, request_id.into()).await;
    }

    /// Reports the user's decision on the pending dialog.
    ///
    /// Cancellation clears the pending state and nothing else. A submission
    /// caches the record under the dialog's canonical URL, notifies the
    /// request editor (header upsert for Basic, connection directive for
    /// NTLM), asks for the challenged request to be re-issued, and — one
    /// scheduling turn later — offers the record to the store.
    pub async fn dialog_closed(&mut self, outcome: DialogOutcome) {
        let Some(dialog) = self.dialog.take() else {
            debug!("dialog result arrived with no dialog pending; ignoring");
            return;
        };

        let record = match outcome {
            DialogOutcome::Cancelled => {
                debug!("credential dialog for {} cancelled", dialog.url);
                return;
            }
            DialogOutcome::Submitted(record) => record,
        };

        let url = canonical_url(&dialog.url);
        match &record {
            CredentialRecord::Basic(creds) => {
                self.cache.store_basic(url.clone(), creds.clone());
                self.emit(&AuthEvent::RequestHeaderChanged {
                    name: "authorization".to_string(),
                    value: creds.header_value(),
                });
            }
            CredentialRecord::Ntlm(creds) => {
                self.cache.store_ntlm(url.clone(), creds.clone());
                self.emit(&AuthEvent::NtlmDataChanged {
                    value: creds.directive(),
                    id: dialog.request_id.clone(),
                });
            }
        }
        self.emit(&AuthEvent::ResendAuthRequest {
            id: dialog.request_id.clone(),
        });

        // Persistence waits a turn so the resend is observed first.
        yield_now().await;

        match self.store.persist(&url, record.scheme(), &record).await {
            Ok(()) => debug!("credentials for {url} persisted"),
            Err(StoreError::NotHandled) => {
                warn!("credential persist for {url} not handled; record kept in session only");
            }
            Err(err) => warn!("credential persist for {url} failed: {err}"),
        }
    }

    async fn open_dialog(&mut self, scheme: AuthScheme, url: String, request_id: String) {
        if self.dialog.is_some() {
            debug!("new {scheme} challenge replaces the pending credential dialog");
        }
        self.dialog = Some(PendingDialog::new(scheme, url.clone(), request_id));

        let restored = match self.store.query(&url, scheme).await {
            Ok(found) => found,
            Err(StoreError::NotHandled) => {
                warn!("credential query for {url} not handled; dialog opens empty");
                None
            }
            Err(err) => {
                warn!("credential restore for {url} failed: {err}");
                None
            }
        };

        if let Some(dialog) = self.dialog.as_mut() {
            if let Some(record) = restored
                && !dialog.set_prefill(record)
            {
                warn!("restored credentials for {url} do not match the {scheme} dialog; discarded");
            }
            dialog.open();
        }
    }

    fn emit(&self, event: &AuthEvent) {
        if let Some(callback) = &self.events {
            callback(event);
        }
    }
}
