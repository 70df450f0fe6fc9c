//! Canonical URL derivation.
//!
//! Cache and storage keys drop the query string and fragment so that
//! parameterized requests against one endpoint share a single credential
//! entry.

use url::Url;

/// Strips the query string and fragment from a URL.
///
/// A string that does not parse as a URL is returned unchanged; callers treat
/// canonicalization as infallible. The operation is idempotent.
#[must_use]
pub fn canonical_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(canonical_url("http://h/p/?a=b#c"), "http://h/p/");
        assert_eq!(
            canonical_url("https://api.example.com/v1/items?page=2&sort=asc"),
            "https://api.example.com/v1/items"
        );
    }

    #[test]
    fn plain_urls_pass_through() {
        assert_eq!(canonical_url("http://domain.com/"), "http://domain.com/");
    }

    #[test]
    fn invalid_urls_are_returned_unchanged() {
        assert_eq!(canonical_url("not a url"), "not a url");
        assert_eq!(canonical_url(""), "");
    }

    proptest! {
        #[test]
        fn canonicalization_is_idempotent(raw in ".*") {
            let once = canonical_url(&raw);
            prop_assert_eq!(canonical_url(&once), once);
        }

        #[test]
        fn canonical_urls_have_no_query_or_fragment(raw in "[a-z]+://[a-z.]+/[a-z/]*\\??[a-z=&]*#?[a-z]*") {
            let canon = canonical_url(&raw);
            if let Ok(url) = Url::parse(&canon) {
                prop_assert!(url.query().is_none());
                prop_assert!(url.fragment().is_none());
            }
        }
    }
}
