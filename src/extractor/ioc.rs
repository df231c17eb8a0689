// file: src/extractor/ioc.rs
// description: two-source IOC extraction with per-label dedup and validation
// reference: threat intelligence ioc standards

use crate::classifier::EntityClassifier;
use crate::extractor::patterns::{in_email_position, looks_like_ipv4, pattern_table};
use crate::models::{IocMap, IocType};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Merges detections from the trained recognizer and the fixed pattern
/// table into one mapping, then strips, deduplicates, and validates each
/// label's values. Values failing a validator are dropped silently; a label
/// that had detections keeps its key even when validation empties the list.
pub struct IocExtractor {
    classifier: Box<dyn EntityClassifier>,
}

impl IocExtractor {
    pub fn new(classifier: Box<dyn EntityClassifier>) -> Self {
        Self { classifier }
    }

    /// Never fails: empty text, garbled text, or text with no indicators
    /// all degrade to an empty or partial mapping.
    pub fn extract(&self, text: &str) -> IocMap {
        let mut raw: BTreeMap<String, Vec<String>> = BTreeMap::new();

        // Model pass. Detections accumulate; the pattern pass below never
        // replaces them.
        for detection in self.classifier.classify(text) {
            raw.entry(detection.label).or_default().push(detection.value);
        }

        // Pattern pass.
        for (ioc_type, pattern) in pattern_table() {
            for capture in pattern.find_iter(text) {
                if ioc_type == IocType::Domain && in_email_position(text, capture.start()) {
                    continue;
                }
                raw.entry(ioc_type.as_str().to_string())
                    .or_default()
                    .push(capture.as_str().to_string());
            }
        }

        // The domain validator needs the email values before dedup.
        let raw_emails: Vec<String> = raw
            .get(IocType::Email.as_str())
            .map(|values| values.iter().map(|v| v.trim().to_string()).collect())
            .unwrap_or_default();

        let mut cleaned = IocMap::new();
        for (label, values) in raw {
            let unique: BTreeSet<String> =
                values.iter().map(|v| v.trim().to_string()).collect();

            let before = unique.len();
            let kept: Vec<String> = unique
                .into_iter()
                .filter(|value| passes_validation(&label, value, &raw_emails))
                .collect();

            if kept.len() < before {
                debug!(
                    "Dropped {} invalid {} value(s) during cleanup",
                    before - kept.len(),
                    label
                );
            }

            cleaned.insert(label, kept);
        }

        cleaned
    }
}

fn passes_validation(label: &str, value: &str, raw_emails: &[String]) -> bool {
    match IocType::from_label(label) {
        Some(IocType::Ip) => is_valid_ip(value),
        Some(IocType::Domain) => is_valid_domain(value, raw_emails),
        Some(IocType::Hash) => is_valid_hash(value),
        // URL, EMAIL, and any model-specific label: dedup only.
        _ => true,
    }
}

/// Shape check only. Segments above three characters are rejected, but the
/// 0-255 range is intentionally not enforced.
fn is_valid_ip(value: &str) -> bool {
    looks_like_ipv4(value) && value.split('.').all(|segment| segment.len() <= 3)
}

fn is_valid_domain(value: &str, raw_emails: &[String]) -> bool {
    if raw_emails.iter().any(|email| email.contains(value)) {
        return false;
    }
    !looks_like_ipv4(value) && !value.starts_with("http")
}

/// MD5, SHA1, or SHA256 lengths; the pattern also matched anything from 32
/// to 64 hex characters.
fn is_valid_hash(value: &str) -> bool {
    matches!(value.len(), 32 | 40 | 64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Detection;
    use pretty_assertions::assert_eq;

    /// Stub recognizer returning a fixed detection list, so the cleanup
    /// logic is exercised without a model file.
    struct StubClassifier {
        detections: Vec<Detection>,
    }

    impl StubClassifier {
        fn empty() -> Self {
            Self { detections: vec![] }
        }

        fn with(detections: Vec<Detection>) -> Self {
            Self { detections }
        }
    }

    impl EntityClassifier for StubClassifier {
        fn classify(&self, _text: &str) -> Vec<Detection> {
            self.detections.clone()
        }
    }

    fn extractor() -> IocExtractor {
        IocExtractor::new(Box::new(StubClassifier::empty()))
    }

    fn values<'a>(map: &'a IocMap, label: &str) -> &'a [String] {
        map.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    #[test]
    fn test_end_to_end_sentence() {
        let map = extractor().extract(
            "Suspicious IP 192.168.1.100 contacted evil.com and downloaded \
             hash e99a18c428cb38d5f260853678922e03",
        );

        assert_eq!(values(&map, "IP"), ["192.168.1.100"]);
        assert_eq!(
            values(&map, "HASH"),
            ["e99a18c428cb38d5f260853678922e03"]
        );
        assert!(values(&map, "DOMAIN").contains(&"evil.com".to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_no_indicators() {
        assert!(extractor().extract("nothing suspicious here at all").is_empty());
    }

    #[test]
    fn test_idempotence() {
        let text = "beacon 10.1.2.3 via hxxp://bad.site/x from admin@evil.com";
        let first = extractor().extract(text);
        let second = extractor().extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dedup_exact_string() {
        let map = extractor().extract("8.8.4.4 seen, then 8.8.4.4 again, then 8.8.4.4");
        assert_eq!(values(&map, "IP"), ["8.8.4.4"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let hash_lower = "e99a18c428cb38d5f260853678922e03";
        let hash_upper = hash_lower.to_uppercase();
        let map = extractor().extract(&format!("{} and {}", hash_lower, hash_upper));

        assert_eq!(values(&map, "HASH").len(), 2);
    }

    #[test]
    fn test_whitespace_stripped_before_dedup() {
        let classifier = StubClassifier::with(vec![
            Detection::new("IP", " 9.9.9.9"),
            Detection::new("IP", "9.9.9.9 "),
        ]);
        let map = IocExtractor::new(Box::new(classifier)).extract("");

        assert_eq!(values(&map, "IP"), ["9.9.9.9"]);
    }

    #[test]
    fn test_ip_validator_segment_length() {
        // The pattern never matches this, so it arrives via the model.
        let classifier = StubClassifier::with(vec![Detection::new("IP", "1234.2.3.4")]);
        let map = IocExtractor::new(Box::new(classifier)).extract("");

        assert_eq!(values(&map, "IP"), Vec::<String>::new());
        // The key survives: it held a detection before validation.
        assert!(map.contains_key("IP"));
    }

    #[test]
    fn test_ip_validator_range_stays_loose() {
        let map = extractor().extract("seen at 999.1.1.1");
        assert_eq!(values(&map, "IP"), ["999.1.1.1"]);
    }

    #[test]
    fn test_hash_validator_lengths() {
        let thirty_six = "a".repeat(36);
        let thirty_two = "b".repeat(32);
        let map = extractor().extract(&format!("{} {}", thirty_six, thirty_two));

        assert_eq!(values(&map, "HASH"), [thirty_two]);
    }

    #[test]
    fn test_sha1_and_sha256_lengths_kept() {
        let sha1 = "c".repeat(40);
        let sha256 = "d".repeat(64);
        let map = extractor().extract(&format!("{} {}", sha1, sha256));

        assert_eq!(values(&map, "HASH").len(), 2);
    }

    #[test]
    fn test_domain_email_disjointness() {
        let map = extractor().extract("contact admin@evil.com now");

        assert_eq!(values(&map, "EMAIL"), ["admin@evil.com"]);
        assert!(!values(&map, "DOMAIN").contains(&"evil.com".to_string()));
    }

    #[test]
    fn test_domain_dropped_when_model_repeats_email_domain() {
        let classifier = StubClassifier::with(vec![Detection::new("DOMAIN", "evil.com")]);
        let map = IocExtractor::new(Box::new(classifier)).extract("mail admin@evil.com");

        assert_eq!(values(&map, "DOMAIN"), Vec::<String>::new());
    }

    #[test]
    fn test_domain_validator_rejects_http_prefix() {
        let classifier =
            StubClassifier::with(vec![Detection::new("DOMAIN", "http://evil.com")]);
        let map = IocExtractor::new(Box::new(classifier)).extract("");

        assert_eq!(values(&map, "DOMAIN"), Vec::<String>::new());
    }

    #[test]
    fn test_domain_validator_rejects_ipv4_shape() {
        let classifier = StubClassifier::with(vec![Detection::new("DOMAIN", "10.0.0.1")]);
        let map = IocExtractor::new(Box::new(classifier)).extract("");

        assert_eq!(values(&map, "DOMAIN"), Vec::<String>::new());
    }

    #[test]
    fn test_url_defanged_kept_literal() {
        let map = extractor().extract("payload at hxxp://bad.site/x today");
        assert_eq!(values(&map, "URL"), ["hxxp://bad.site/x"]);
    }

    #[test]
    fn test_url_embedded_domain_also_captured() {
        // Overlaps across patterns are not reconciled: the URL host shows
        // up as a DOMAIN value too.
        let map = extractor().extract("payload at hxxp://bad.site/x today");
        assert!(values(&map, "DOMAIN").contains(&"bad.site".to_string()));
    }

    #[test]
    fn test_model_and_pattern_detections_merge() {
        let classifier = StubClassifier::with(vec![
            Detection::new("IP", "203.0.113.9"),
            Detection::new("MALWARE_FAMILY", "Emotet"),
        ]);
        let map = IocExtractor::new(Box::new(classifier)).extract("also 198.51.100.7 here");

        let mut ips = values(&map, "IP").to_vec();
        ips.sort();
        assert_eq!(ips, ["198.51.100.7", "203.0.113.9"]);
        assert_eq!(values(&map, "MALWARE_FAMILY"), ["Emotet"]);
    }

    #[test]
    fn test_model_only_label_skips_shape_validation() {
        let classifier = StubClassifier::with(vec![
            Detection::new("MALWARE_FAMILY", "Emotet"),
            Detection::new("MALWARE_FAMILY", "Emotet"),
        ]);
        let map = IocExtractor::new(Box::new(classifier)).extract("");

        assert_eq!(values(&map, "MALWARE_FAMILY"), ["Emotet"]);
    }

    #[test]
    fn test_absent_labels_have_no_key() {
        let map = extractor().extract("only an address: 172.16.0.5");
        assert!(map.contains_key("IP"));
        assert!(!map.contains_key("HASH"));
        assert!(!map.contains_key("URL"));
    }
}
