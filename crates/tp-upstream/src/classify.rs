//! Heuristic translation of upstream failure text into failure kinds.
//!
//! The upstream service reports most failures as free-form message strings,
//! so every call site funnels its error text through [`classify_failure`]
//! rather than pattern matching locally. Anything the tables do not
//! recognize is connectivity, which callers surface as "unavailable"
//! instead of guessing at a more specific cause.

/// What an upstream failure message tells us about the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The credential itself was rejected.
    Auth,
    /// The credential is fine but its quota is exhausted.
    UsageLimit,
    /// The service could not be reached or did not answer usefully.
    Connectivity,
}

const AUTH_MARKERS: &[&str] = &[
    "authentication failed",
    "invalid token",
    "invalid access token",
    "unauthorized",
    "401",
];

const USAGE_MARKERS: &[&str] = &[
    "usage limit",
    "rate limit",
    "quota exceeded",
    "too many requests",
    "429",
];

const CONNECTIVITY_MARKERS: &[&str] = &[
    "connection error",
    "connection refused",
    "timeout",
    "timed out",
    "network is unreachable",
    "dns lookup failed",
    "service unavailable",
    "503",
];

/// Classifies an upstream failure message.
///
/// Matching is case-insensitive and substring based. Auth markers win over
/// usage markers, usage markers over connectivity, and unrecognized text
/// falls through to [`FailureKind::Connectivity`].
pub fn classify_failure(message: &str) -> FailureKind {
    let lowered = message.to_lowercase();

    if AUTH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return FailureKind::Auth;
    }

    if USAGE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return FailureKind::UsageLimit;
    }

    if CONNECTIVITY_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return FailureKind::Connectivity;
    }

    FailureKind::Connectivity
}
