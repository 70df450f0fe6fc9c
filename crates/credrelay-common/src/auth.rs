//! Authorization schemes, credential records, and the NTLM auth directive.
//!
//! Credential records are immutable value objects: once cached or persisted
//! they are only ever replaced wholesale, never mutated field by field. The
//! Basic record carries its precomputed `base64(username:password)` hash so
//! that header application never re-derives it; the NTLM record converts into
//! an [`AuthDirective`] because NTLM is a connection-level handshake rather
//! than a static header.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Authorization mechanism understood by the adapter.
///
/// The set is closed: these are the two schemes the credential dialogs can
/// collect and the cache can key on. Unrecognized challenge schemes are
/// ignored upstream rather than represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Basic authorization (RFC 7617), applied as a static header.
    Basic,
    /// NTLM authorization, applied as a connection-level directive.
    Ntlm,
}

impl AuthScheme {
    /// Classifies a `WWW-Authenticate` challenge value.
    ///
    /// NTLM is checked first: a server advertising several mechanisms in one
    /// challenge (`Negotiate NTLM`) should get the NTLM dialog, not the Basic
    /// one. Returns `None` for schemes the adapter does not support.
    #[must_use]
    pub fn from_challenge(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        if value.contains("ntlm") {
            Some(Self::Ntlm)
        } else if value.contains("basic") {
            Some(Self::Basic)
        } else {
            None
        }
    }

    /// The lowercase wire name of the scheme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Ntlm => "ntlm",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "ntlm" => Ok(Self::Ntlm),
            _ => anyhow::bail!("Unknown authorization scheme: {s}"),
        }
    }
}

/// Credentials for Basic authorization.
///
/// `hash` is the precomputed `base64(username:password)` value that goes into
/// the `Authorization` header. [`BasicCredentials::new`] derives it;
/// [`BasicCredentials::with_hash`] accepts a value computed elsewhere (the
/// credential dialog ships one with its submission) verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCredentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Precomputed `base64(username:password)`.
    pub hash: String,
}

impl BasicCredentials {
    /// Creates a record and computes its hash.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        let password = password.into();
        let hash = BASE64.encode(format!("{username}:{password}"));
        Self {
            username,
            password,
            hash,
        }
    }

    /// Replaces the computed hash with a precomputed one.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// The full `Authorization` header value for this record.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.hash)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("hash", &"***")
            .finish()
    }
}

/// Credentials for NTLM authorization.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtlmCredentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// NT domain the account belongs to.
    pub domain: String,
}

impl NtlmCredentials {
    /// Creates a record.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            domain: domain.into(),
        }
    }

    /// The connection-level directive the transport attaches to the next send.
    #[must_use]
    pub fn directive(&self) -> AuthDirective {
        AuthDirective {
            username: self.username.clone(),
            password: self.password.clone(),
            domain: self.domain.clone(),
            method: AuthScheme::Ntlm,
        }
    }
}

impl fmt::Debug for NtlmCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NtlmCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("domain", &self.domain)
            .finish()
    }
}

/// A scheme-specific credential record as stored in the cache and exchanged
/// with the persistence collaborator.
///
/// Serialization is untagged: the persisted payload is the bare field map of
/// the inner record, with the `hash` and `domain` fields distinguishing the
/// two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CredentialRecord {
    /// A Basic record.
    Basic(BasicCredentials),
    /// An NTLM record.
    Ntlm(NtlmCredentials),
}

impl CredentialRecord {
    /// The scheme this record belongs to.
    #[must_use]
    pub const fn scheme(&self) -> AuthScheme {
        match self {
            Self::Basic(_) => AuthScheme::Basic,
            Self::Ntlm(_) => AuthScheme::Ntlm,
        }
    }

    /// The Basic record, if this is one.
    #[must_use]
    pub const fn as_basic(&self) -> Option<&BasicCredentials> {
        match self {
            Self::Basic(creds) => Some(creds),
            Self::Ntlm(_) => None,
        }
    }

    /// The NTLM record, if this is one.
    #[must_use]
    pub const fn as_ntlm(&self) -> Option<&NtlmCredentials> {
        match self {
            Self::Ntlm(creds) => Some(creds),
            Self::Basic(_) => None,
        }
    }
}

impl From<BasicCredentials> for CredentialRecord {
    fn from(creds: BasicCredentials) -> Self {
        Self::Basic(creds)
    }
}

impl From<NtlmCredentials> for CredentialRecord {
    fn from(creds: NtlmCredentials) -> Self {
        Self::Ntlm(creds)
    }
}

/// Connection-level authorization directive attached to a request.
///
/// NTLM negotiates on the socket, so applying its credentials is not a header
/// edit: the transport reads this structure off the request descriptor when
/// it opens the connection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthDirective {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// NT domain the account belongs to.
    pub domain: String,
    /// The mechanism the transport should run; serializes as `"ntlm"`.
    pub method: AuthScheme,
}

impl fmt::Debug for AuthDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthDirective")
            .field("username", &self.username)
            .field("password", &"***")
            .field("domain", &self.domain)
            .field("method", &self.method)
            .finish()
    }
}

impl From<&NtlmCredentials> for AuthDirective {
    fn from(creds: &NtlmCredentials) -> Self {
        creds.directive()
    }
}
