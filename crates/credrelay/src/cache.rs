//! Session-scoped credential cache.
//!
//! Two-level mapping from scheme to canonical URL to credential record. An
//! entry appears only when the user submits a dialog (or the embedding
//! application warms the cache explicitly) — never speculatively. There is no
//! eviction: sessions are short-lived and the entry count is bounded by the
//! distinct endpoints visited.

use dashmap::DashMap;

use credrelay_common::{AuthScheme, BasicCredentials, CredentialRecord, NtlmCredentials};

/// In-memory credential cache, keyed by canonical URL within each scheme.
#[derive(Debug, Default)]
pub struct CredentialCache {
    basic: DashMap<String, BasicCredentials>,
    ntlm: DashMap<String, NtlmCredentials>,
}

impl CredentialCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a record up for a `(scheme, canonical URL)` pair.
    ///
    /// Pure lookup, no side effects.
    #[must_use]
    pub fn find(&self, scheme: AuthScheme, url: &str) -> Option<CredentialRecord> {
        match scheme {
            AuthScheme::Basic => self.find_basic(url).map(CredentialRecord::Basic),
            AuthScheme::Ntlm => self.find_ntlm(url).map(CredentialRecord::Ntlm),
        }
    }

    /// Looks up Basic credentials for a canonical URL.
    #[must_use]
    pub fn find_basic(&self, url: &str) -> Option<BasicCredentials> {
        self.basic.get(url).map(|entry| entry.clone())
    }

    /// Looks up NTLM credentials for a canonical URL.
    #[must_use]
    pub fn find_ntlm(&self, url: &str) -> Option<NtlmCredentials> {
        self.ntlm.get(url).map(|entry| entry.clone())
    }

    /// Upserts a record under its own scheme for a canonical URL.
    ///
    /// The record's variant decides the scheme slot; an existing entry is
    /// replaced wholesale.
    pub fn store(&self, url: impl Into<String>, record: CredentialRecord) {
        match record {
            CredentialRecord::Basic(creds) => self.store_basic(url, creds),
            CredentialRecord::Ntlm(creds) => self.store_ntlm(url, creds),
        }
    }

    /// Upserts Basic credentials for a canonical URL.
    pub fn store_basic(&self, url: impl Into<String>, creds: BasicCredentials) {
        self.basic.insert(url.into(), creds);
    }

    /// Upserts NTLM credentials for a canonical URL.
    pub fn store_ntlm(&self, url: impl Into<String>, creds: NtlmCredentials) {
        self.ntlm.insert(url.into(), creds);
    }

    /// Total number of cached records across both schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.basic.len() + self.ntlm.len()
    }

    /// Whether the cache holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basic.is_empty() && self.ntlm.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_store_and_find() {
        let cache = CredentialCache::new();
        cache.store_basic("http://domain.com/", BasicCredentials::new("test", "test"));

        let found = cache.find_basic("http://domain.com/").unwrap();
        assert_eq!(found.username, "test");
        assert_eq!(found.hash, "dGVzdDp0ZXN0");

        let record = cache.find(AuthScheme::Basic, "http://domain.com/").unwrap();
        assert_eq!(record.scheme(), AuthScheme::Basic);
    }

    #[test]
    fn test_lookup_miss() {
        let cache = CredentialCache::new();
        assert!(cache.find_basic("http://unknown.com/").is_none());
        assert!(cache.find(AuthScheme::Ntlm, "http://unknown.com/").is_none());
    }

    #[test]
    fn test_schemes_are_separate_namespaces() {
        let cache = CredentialCache::new();
        cache.store_basic("http://domain.com/", BasicCredentials::new("u", "p"));

        assert!(cache.find_ntlm("http://domain.com/").is_none());
        assert!(cache.find(AuthScheme::Ntlm, "http://domain.com/").is_none());

        cache.store_ntlm(
            "http://domain.com/",
            NtlmCredentials::new("u", "p", "CORP"),
        );
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_store_replaces_wholesale() {
        let cache = CredentialCache::new();
        cache.store(
            "http://domain.com/",
            CredentialRecord::from(BasicCredentials::new("old", "old")),
        );
        cache.store(
            "http://domain.com/",
            CredentialRecord::from(BasicCredentials::new("new", "new")),
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.find_basic("http://domain.com/").unwrap().username,
            "new"
        );
    }

    #[test]
    fn test_empty_cache() {
        let cache = CredentialCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }
}
