//! Remote catalog location and the display-string defaults shared across
//! extraction, filtering, and the CLI surface.

/// OSCAL JSON rendition of NIST SP 800-53 rev5, published by NIST on GitHub.
pub const CATALOG_URL: &str = "https://raw.githubusercontent.com/usnistgov/oscal-content/refs/heads/main/nist.gov/SP800-53/rev5/json/NIST_SP-800-53_rev5_catalog.json";

/// Category selector sentinel meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "📋 All Categories";

// Placeholders substituted for absent optional fields. The OSCAL schema
// treats most per-control fields as optional, so these are defaults, not
// errors.
pub const UNKNOWN_ID: &str = "Unknown";
pub const UNKNOWN_FAMILY: &str = "Unknown";
pub const UNKNOWN_HREF: &str = "Unknown";
pub const NO_TITLE: &str = "No Title Available";
pub const NO_DESCRIPTION: &str = "No Description Available";
pub const NO_GUIDANCE: &str = "No Guidance Available";
pub const NO_PARAMETERS: &str = "No Parameters Available";
pub const NO_PARAMETER_LABEL: &str = "No Parameter Label";
