//! Local fallback dataset and syntax checks.
//!
//! A small known-domains list used for instant feedback while the remote
//! API call is in flight (or unreachable) and for the report form's
//! duplicate pre-check. The authoritative list lives behind the API.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Well-known disposable providers bundled with the site.
pub const KNOWN_DISPOSABLE_DOMAINS: [&str; 20] = [
    "tempmail.com",
    "throwaway.email",
    "guerrillamail.com",
    "mailinator.com",
    "10minutemail.com",
    "temp-mail.org",
    "fakeinbox.com",
    "trashmail.com",
    "yopmail.com",
    "sharklasers.com",
    "getairmail.com",
    "guerrillamail.info",
    "spam4.me",
    "grr.la",
    "discard.email",
    "emailondeck.com",
    "tempail.com",
    "tempmailaddress.com",
    "burnermail.io",
    "maildrop.cc",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Verdict from the bundled list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalCheck {
    pub domain: String,
    pub is_disposable: bool,
}

/// Syntax-only validation; reachability is the API's job.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lowercased domain part of an address, if present.
pub fn email_domain(email: &str) -> Option<String> {
    email.split('@').nth(1).map(str::to_lowercase)
}

pub fn is_known_disposable(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    KNOWN_DISPOSABLE_DOMAINS.contains(&domain.as_str())
}

/// Check an address against the bundled list only.
pub fn check_offline(email: &str) -> LocalCheck {
    let domain = email_domain(email).unwrap_or_default();
    let is_disposable = is_known_disposable(&domain);
    LocalCheck {
        domain,
        is_disposable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_syntax() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_email_domain_lowercases() {
        assert_eq!(email_domain("User@TempMail.COM").as_deref(), Some("tempmail.com"));
        assert_eq!(email_domain("no-at-sign"), None);
    }

    #[test]
    fn test_known_disposable_lookup() {
        assert!(is_known_disposable("mailinator.com"));
        assert!(is_known_disposable("MAILINATOR.com"));
        assert!(!is_known_disposable("gmail.com"));
    }

    #[test]
    fn test_check_offline() {
        let hit = check_offline("someone@yopmail.com");
        assert!(hit.is_disposable);
        assert_eq!(hit.domain, "yopmail.com");

        let miss = check_offline("someone@example.org");
        assert!(!miss.is_disposable);
    }
}
