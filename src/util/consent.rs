//! Analytics consent flag parsing and gate decisions.
//!
//! DESIGN
//! ======
//! The stored value is a plain string so other surfaces (a cookie banner
//! rewrite, support tooling) can read it without this crate. Parsing is
//! permissive: anything unrecognized counts as no decision yet.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

/// Stored value written when the viewer accepts analytics.
pub const CONSENT_GRANTED: &str = "granted";

/// Stored value written when the viewer declines analytics.
pub const CONSENT_DENIED: &str = "denied";

/// Viewer's analytics consent decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsentFlag {
    /// Viewer accepted; analytics may load.
    Granted,
    /// Viewer declined; analytics must never load.
    Denied,
    /// No decision recorded yet.
    #[default]
    Unset,
}

/// Parse a stored consent value. Absent or unrecognized values are `Unset`.
pub fn parse_consent(stored: Option<&str>) -> ConsentFlag {
    match stored {
        Some(CONSENT_GRANTED) => ConsentFlag::Granted,
        Some(CONSENT_DENIED) => ConsentFlag::Denied,
        _ => ConsentFlag::Unset,
    }
}

/// Whether the analytics script should be injected now.
pub fn should_inject(flag: ConsentFlag) -> bool {
    flag == ConsentFlag::Granted
}

/// Whether the consent poll should keep running. A recorded decision in
/// either direction stops it; only an undecided viewer is re-checked.
pub fn should_keep_polling(flag: ConsentFlag) -> bool {
    flag == ConsentFlag::Unset
}
