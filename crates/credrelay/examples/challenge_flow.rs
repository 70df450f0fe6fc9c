//! Full challenge → prompt → resend → persist flow against an in-memory
//! store.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example challenge_flow
//! ```

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use credrelay::{AuthInterceptor, CredentialStore, DialogOutcome, StoreError};
use credrelay_common::{
    AuthScheme, BasicCredentials, CredentialRecord, RequestDescriptor, ResponseDescriptor,
};

/// Keeps records in a map, the way a real store would keep them in a
/// database.
#[derive(Default)]
struct MemoryStore {
    records: DashMap<(String, AuthScheme), CredentialRecord>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn query(
        &self,
        url: &str,
        scheme: AuthScheme,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        Ok(self
            .records
            .get(&(url.to_string(), scheme))
            .map(|entry| entry.clone()))
    }

    async fn persist(
        &self,
        url: &str,
        scheme: AuthScheme,
        record: &CredentialRecord,
    ) -> Result<(), StoreError> {
        self.records.insert((url.to_string(), scheme), record.clone());
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut interceptor = AuthInterceptor::new(MemoryStore::default())
        .with_event_callback(|event| println!("  event: {event:?}"));

    let request_id = Uuid::new_v4().to_string();
    let url = "http://api.example.com/reports?year=2026";

    // First send: nothing cached yet, the request goes out bare.
    let mut request = RequestDescriptor::builder()
        .url(url)
        .headers("Accept: application/json")
        .build();
    interceptor.process_request(&mut request);
    println!("first send headers:\n  {}", request.header_block());

    // The server challenges with Basic.
    let response = ResponseDescriptor::builder()
        .status(401)
        .headers("WWW-Authenticate: Basic realm=\"reports\"")
        .build();
    println!("server replied 401, processing challenge:");
    interceptor
        .process_response(&request, &response, request_id.as_str())
        .await;

    if let Some(dialog) = interceptor.dialog() {
        println!(
            "  dialog open for {} ({} scheme), prefill: {:?}",
            dialog.url, dialog.scheme, dialog.prefill
        );
    }

    // The user fills the dialog and submits.
    println!("user submits credentials:");
    let submitted = DialogOutcome::Submitted(BasicCredentials::new("test", "test").into());
    interceptor.dialog_closed(submitted).await;

    // The resend picks the credentials up from the cache silently.
    let mut retry = RequestDescriptor::builder()
        .url(url)
        .headers("Accept: application/json")
        .build();
    interceptor.process_request(&mut retry);
    println!("retry headers:\n  {}", retry.header_block().replace('\n', "\n  "));

    // A later challenge for the same endpoint pre-fills from the store.
    let mut interceptor = AuthInterceptor::new(MemoryStore {
        records: interceptor.store().records.clone(),
    });
    interceptor
        .process_response(&request, &response, request_id.as_str())
        .await;
    if let Some(dialog) = interceptor.dialog() {
        println!(
            "next session's dialog pre-fills from the store: {:?}",
            dialog.prefill
        );
    }
}
