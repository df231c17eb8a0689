// file: src/models/ioc.rs
// description: indicator of compromise label taxonomy
// reference: threat intelligence ioc standards

use serde::{Deserialize, Serialize};

/// The five labels the pattern table and validators know about. The
/// classifier may emit labels outside this set; those pass through the
/// cleanup phase with dedup only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IocType {
    Ip,
    Domain,
    Url,
    Hash,
    Email,
}

impl IocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IocType::Ip => "IP",
            IocType::Domain => "DOMAIN",
            IocType::Url => "URL",
            IocType::Hash => "HASH",
            IocType::Email => "EMAIL",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "IP" => Some(IocType::Ip),
            "DOMAIN" => Some(IocType::Domain),
            "URL" => Some(IocType::Url),
            "HASH" => Some(IocType::Hash),
            "EMAIL" => Some(IocType::Email),
            _ => None,
        }
    }

    pub fn all() -> [IocType; 5] {
        [
            IocType::Ip,
            IocType::Domain,
            IocType::Url,
            IocType::Hash,
            IocType::Email,
        ]
    }
}
