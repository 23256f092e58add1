//! Sigiriya sub-location allow-list.
//!
//! Every chat request is gated here before any model call is made.

/// Locations the guide will talk about. Matching is exact and case-sensitive.
pub const SIGIRIYA_SITES: [&str; 7] = [
    "Sinha Padaya",
    "Rajamaligawa",
    "Sinhasanaya",
    "Mirror Wall",
    "Water Gardens",
    "Cobra Hood Cave",
    "Sigiriya",
];

/// Immutable, ordered set of permitted locations.
#[derive(Debug, Clone)]
pub struct LocationAllowList {
    sites: Vec<String>,
}

impl Default for LocationAllowList {
    fn default() -> Self {
        Self::new(SIGIRIYA_SITES)
    }
}

impl LocationAllowList {
    pub fn new<I, S>(sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sites: sites.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `location` is exactly one of the permitted sites.
    pub fn is_allowed(&self, location: &str) -> bool {
        self.sites.iter().any(|site| site == location)
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }
}

/// Response text for a location outside the allow-list.
pub fn rejection_message(location: &str) -> String {
    format!(
        "Sorry, I can only provide information for Sigiriya locations. Information for {} is not available.",
        location
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_is_allowed() {
        let allow_list = LocationAllowList::default();
        for site in SIGIRIYA_SITES {
            assert!(allow_list.is_allowed(site), "{} should be allowed", site);
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        let allow_list = LocationAllowList::default();
        assert!(!allow_list.is_allowed("sigiriya"));
        assert!(!allow_list.is_allowed("MIRROR WALL"));
        assert!(!allow_list.is_allowed(" Sigiriya"));
        assert!(!allow_list.is_allowed(""));
    }

    #[test]
    fn unrelated_sites_are_rejected() {
        let allow_list = LocationAllowList::default();
        assert!(!allow_list.is_allowed("Dalada Maligawa"));
        assert!(!allow_list.is_allowed("Water Garden"));
    }

    #[test]
    fn rejection_message_embeds_location_verbatim() {
        assert_eq!(
            rejection_message("Dalada Maligawa"),
            "Sorry, I can only provide information for Sigiriya locations. Information for Dalada Maligawa is not available."
        );
        assert_eq!(
            rejection_message("sigiriya"),
            "Sorry, I can only provide information for Sigiriya locations. Information for sigiriya is not available."
        );
    }

    #[test]
    fn preserves_order() {
        let allow_list = LocationAllowList::default();
        assert_eq!(allow_list.sites().first().map(String::as_str), Some("Sinha Padaya"));
        assert_eq!(allow_list.sites().last().map(String::as_str), Some("Sigiriya"));
    }
}
