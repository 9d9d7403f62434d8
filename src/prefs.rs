//! Preference value types shared by the bridge, the host, and the settings UI.

use serde::{Deserialize, Serialize};

/// How browser activity is recorded: bare domain or full URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DomainPreference {
    #[default]
    Domain,
    Url,
}

impl DomainPreference {
    /// Stable wire name used on the IPC channel and in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainPreference::Domain => "domain",
            DomainPreference::Url => "url",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "domain" => Some(DomainPreference::Domain),
            "url" => Some(DomainPreference::Url),
            _ => None,
        }
    }
}

/// Whether site visibility in reports is governed by a denylist or an allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Denylist,
    Allowlist,
}

impl FilterType {
    /// Stable wire name used on the IPC channel and in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Denylist => "denylist",
            FilterType::Allowlist => "allowlist",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "denylist" => Some(FilterType::Denylist),
            "allowlist" => Some(FilterType::Allowlist),
            _ => None,
        }
    }
}
