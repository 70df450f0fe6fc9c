//! Outbound notification events.
//!
//! Events are **observability**, not control flow: the adapter fires them to
//! tell the request editor what changed (a header block, a single header, the
//! NTLM directive) or what it should do next (re-issue a request), and never
//! waits for or reacts to the subscriber. A missing subscriber is valid; the
//! adapter stays usable with nothing attached.

use serde::{Deserialize, Serialize};

use crate::auth::AuthDirective;

/// Notifications emitted toward the request editor.
///
/// Serialized variant names match the wire names the editor already consumes
/// (`request-headers-changed`, `resend-auth-request`, ...). `id` fields carry
/// the opaque correlation id of the request that triggered the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum AuthEvent {
    /// The full header block of the pending request was replaced.
    RequestHeadersChanged {
        /// The new header block.
        value: String,
    },

    /// A single header of the pending request was upserted.
    RequestHeaderChanged {
        /// Header name, lowercase.
        name: String,
        /// New header value.
        value: String,
    },

    /// Connection-level NTLM data for the next send.
    NtlmDataChanged {
        /// The directive the transport should attach.
        value: AuthDirective,
        /// Correlation id of the request awaiting retry.
        id: String,
    },

    /// The caller should re-issue the identified request; credentials are now
    /// available for it.
    ResendAuthRequest {
        /// Correlation id of the request to re-issue.
        id: String,
    },
}

/// Callback for receiving [`AuthEvent`] notifications.
///
/// Synchronous and infallible: subscribers observe, they do not steer.
pub type EventCallback = Box<dyn Fn(&AuthEvent) + Send + Sync>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::auth::NtlmCredentials;

    #[test]
    fn test_event_wire_names() {
        let event = AuthEvent::ResendAuthRequest {
            id: "req-7".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("resend-auth-request").is_some());

        let event = AuthEvent::RequestHeaderChanged {
            name: "authorization".to_string(),
            value: "Basic dGVzdDp0ZXN0".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["request-header-changed"]["name"], "authorization");
    }

    #[test]
    fn test_ntlm_event_round_trip() {
        let event = AuthEvent::NtlmDataChanged {
            value: NtlmCredentials::new("user", "pass", "CORP").directive(),
            id: "req-9".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let restored: AuthEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
