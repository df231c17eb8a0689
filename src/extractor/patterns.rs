// file: src/extractor/patterns.rs
// description: compiled regex patterns for IOC extraction
// reference: https://docs.rs/regex

use crate::models::IocType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Network indicators. No 0-255 range check at match time; the IP
    // validator re-checks shape and segment length but stays loose on range.
    pub static ref IP_ADDRESS: Regex = Regex::new(
        r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b"
    ).expect("IP_ADDRESS regex is valid");

    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).expect("EMAIL regex is valid");

    // hxxp:// is the defanged scheme used in threat reports; the match is
    // kept literal, never normalized back to http.
    pub static ref URL: Regex = Regex::new(
        r"\b(?:https?|hxxp)://\S+"
    ).expect("URL regex is valid");

    // One pattern covers MD5/SHA1/SHA256; the hash validator drops lengths
    // outside {32, 40, 64}.
    pub static ref HASH: Regex = Regex::new(
        r"\b[a-fA-F0-9]{32,64}\b"
    ).expect("HASH regex is valid");

    // Candidate domains. The alphabetic TLD keeps IPv4 strings out at match
    // time; email-position candidates are rejected in the pattern pass
    // because the regex crate has no lookaround (see `in_email_position`).
    pub static ref DOMAIN: Regex = Regex::new(
        r"\b[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}\b"
    ).expect("DOMAIN regex is valid");

    pub static ref IPV4_SHAPE: Regex = Regex::new(
        r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$"
    ).expect("IPV4_SHAPE regex is valid");
}

/// The five fixed patterns, applied independently of each other.
pub fn pattern_table() -> [(IocType, &'static Regex); 5] {
    [
        (IocType::Ip, &IP_ADDRESS),
        (IocType::Email, &EMAIL),
        (IocType::Url, &URL),
        (IocType::Hash, &HASH),
        (IocType::Domain, &DOMAIN),
    ]
}

/// True when a domain candidate sits in the domain position of an email
/// address, i.e. the byte just before the match is `@`. Stands in for the
/// negative lookaround the original pattern used.
pub fn in_email_position(text: &str, match_start: usize) -> bool {
    match_start > 0 && text.as_bytes()[match_start - 1] == b'@'
}

pub fn looks_like_ipv4(value: &str) -> bool {
    IPV4_SHAPE.is_match(value)
}
