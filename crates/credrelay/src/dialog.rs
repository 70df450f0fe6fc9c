//! Dialog lifecycle state.
//!
//! The credential dialog is pure observable state here — no widget, no
//! rendering. The adapter owns at most one [`PendingDialog`] at a time and
//! moves it through `Opening` (target set, restore query in flight) to
//! `Open` (visible, user interacting). The rendering layer watches
//! [`crate::AuthInterceptor::dialog`] and reports the user's decision back
//! through [`crate::AuthInterceptor::dialog_closed`] as a [`DialogOutcome`].

use serde::{Deserialize, Serialize};

use credrelay_common::{AuthScheme, CredentialRecord};

/// Lifecycle phase of the pending dialog. Absence of a [`PendingDialog`] is
/// the closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogPhase {
    /// Target URL and scheme are set; the restore query has been fired.
    Opening,
    /// The dialog is visible and waiting on the user.
    Open,
}

/// The observable state of the one dialog the adapter may have pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDialog {
    /// Scheme the dialog collects credentials for.
    pub scheme: AuthScheme,
    /// Canonical target URL the challenge came from.
    pub url: String,
    /// Correlation id of the request that was challenged.
    pub request_id: String,
    /// Previously persisted credentials to show in the fields, when the
    /// store had any.
    pub prefill: Option<CredentialRecord>,
    /// Current lifecycle phase.
    pub phase: DialogPhase,
}

impl PendingDialog {
    /// Creates dialog state in the `Opening` phase with empty fields.
    pub fn new(
        scheme: AuthScheme,
        url: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            url: url.into(),
            request_id: request_id.into(),
            prefill: None,
            phase: DialogPhase::Opening,
        }
    }

    /// Marks the dialog visible.
    pub const fn open(&mut self) {
        self.phase = DialogPhase::Open;
    }

    /// Whether the dialog has reached the visible phase.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, DialogPhase::Open)
    }

    /// Pre-fills the dialog fields from a restored record.
    ///
    /// Returns `false` and leaves the fields untouched when the record's
    /// scheme does not match the dialog's.
    pub fn set_prefill(&mut self, record: CredentialRecord) -> bool {
        if record.scheme() == self.scheme {
            self.prefill = Some(record);
            true
        } else {
            false
        }
    }
}

/// What the user did with the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOutcome {
    /// The user dismissed the dialog; nothing is cached, emitted, or
    /// persisted.
    Cancelled,
    /// The user submitted credentials; the record's variant carries the
    /// scheme.
    Submitted(CredentialRecord),
}

#[cfg(test)]
mod tests {
    use super::*;
    use credrelay_common::{BasicCredentials, NtlmCredentials};

    #[test]
    fn new_dialog_starts_opening_and_empty() {
        let dialog = PendingDialog::new(AuthScheme::Basic, "http://domain.com/", "req-1");
        assert_eq!(dialog.phase, DialogPhase::Opening);
        assert!(!dialog.is_open());
        assert!(dialog.prefill.is_none());
    }

    #[test]
    fn open_transitions_phase() {
        let mut dialog = PendingDialog::new(AuthScheme::Ntlm, "http://domain.com/", "req-1");
        dialog.open();
        assert!(dialog.is_open());
    }

    #[test]
    fn prefill_accepts_matching_scheme() {
        let mut dialog = PendingDialog::new(AuthScheme::Basic, "http://domain.com/", "req-1");
        let record = CredentialRecord::from(BasicCredentials::new("test", "test"));
        assert!(dialog.set_prefill(record.clone()));
        assert_eq!(dialog.prefill, Some(record));
    }

    #[test]
    fn prefill_rejects_mismatched_scheme() {
        let mut dialog = PendingDialog::new(AuthScheme::Basic, "http://domain.com/", "req-1");
        let record = CredentialRecord::from(NtlmCredentials::new("u", "p", "CORP"));
        assert!(!dialog.set_prefill(record));
        assert!(dialog.prefill.is_none());
    }
}
