use serde::{Deserialize, Serialize};

/// Social profile links supplied at intake. Empty/absent entries are
/// legitimate: each platform is scored independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

/// Intake data for one practice. Immutable for the duration of an audit;
/// re-running an audit always starts from a fresh copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalInfo {
    pub name: String,
    pub website: String,
    pub contact_mobile: Option<String>,
    pub contact_email: Option<String>,
    pub social: SocialLinks,
    pub gmb_link: Option<String>,
}

impl HospitalInfo {
    pub fn new(name: &str, website: &str) -> Self {
        Self {
            name: name.to_string(),
            website: website.to_string(),
            contact_mobile: None,
            contact_email: None,
            social: SocialLinks::default(),
            gmb_link: None,
        }
    }
}
