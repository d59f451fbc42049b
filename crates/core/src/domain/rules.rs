use serde::{Deserialize, Serialize};

use crate::domain::normalize;

/// Per-site procurement rules: the budget ceiling below which orders
/// auto-confirm, and the vendors that must never be used for the site.
///
/// One entry per site name (unique key). Stored wholesale; immutable
/// once read within a single pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRules {
    pub approval_limit: u64,
    pub vendor_blacklist: Vec<String>,
}

impl SiteRules {
    /// Blacklist entries are trimmed on construction; comparison is
    /// case-insensitive at the filtering stage.
    pub fn new(approval_limit: u64, vendor_blacklist: impl IntoIterator<Item = String>) -> Self {
        Self {
            approval_limit,
            vendor_blacklist: vendor_blacklist
                .into_iter()
                .map(|name| name.trim().to_string())
                .collect(),
        }
    }

    pub fn is_blacklisted(&self, vendor_name: &str) -> bool {
        let wanted = normalize(vendor_name);
        self.vendor_blacklist.iter().any(|entry| normalize(entry) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::SiteRules;

    #[test]
    fn blacklist_entries_are_trimmed_on_construction() {
        let rules = SiteRules::new(38_000, vec!["  BadRock Cements  ".to_string()]);
        assert_eq!(rules.vendor_blacklist, vec!["BadRock Cements".to_string()]);
    }

    #[test]
    fn blacklist_match_is_case_insensitive() {
        let rules = SiteRules::new(38_000, vec!["BadRock Cements".to_string()]);
        assert!(rules.is_blacklisted("badrock cements"));
        assert!(rules.is_blacklisted(" BADROCK CEMENTS "));
        assert!(!rules.is_blacklisted("GoodRock Cements"));
    }
}
