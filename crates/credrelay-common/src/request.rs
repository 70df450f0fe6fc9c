//! Request and response descriptors.
//!
//! These are the adapter's views of the traffic passing through the request
//! editor: a mutable pre-send descriptor it may write credentials into, and a
//! read-only response descriptor it inspects for challenges. Headers travel
//! as a raw newline-separated block (see [`crate::headers`]), which is how
//! the editor holds them.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::auth::AuthDirective;

/// Mutable view of an outgoing request, handed to the adapter before send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct RequestDescriptor {
    /// Target URL; a request without one is left untouched.
    #[builder(default, setter(strip_option, into))]
    pub url: Option<String>,

    /// Raw header block.
    #[builder(default, setter(strip_option, into))]
    pub headers: Option<String>,

    /// Connection-level auth directive, set on an NTLM cache hit.
    #[builder(default)]
    pub auth: Option<AuthDirective>,
}

impl RequestDescriptor {
    /// The header block, empty when none was set.
    #[must_use]
    pub fn header_block(&self) -> &str {
        self.headers.as_deref().unwrap_or("")
    }
}

/// Read-only view of an inbound response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct ResponseDescriptor {
    /// HTTP status code.
    pub status: u16,

    /// Raw header block as received.
    #[builder(default, setter(strip_option, into))]
    pub headers: Option<String>,
}
