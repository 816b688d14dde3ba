//! ID prefix constants.
//!
//! Every stored row gets an ID of the form `{prefix}-{8 hex chars}`,
//! generated by `VettedDb::generate_id`.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_PROJECT_SUBMISSION: &str = "psb";
pub const PREFIX_LINK_SUBMISSION: &str = "lsb";
pub const PREFIX_REPRESENTATION_SUBMISSION: &str = "rsb";
pub const PREFIX_REPORT: &str = "rpt";
pub const PREFIX_AUDIT: &str = "aud";

/// Every prefix in use, for exhaustive ID-format tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_PROJECT,
    PREFIX_PROJECT_SUBMISSION,
    PREFIX_LINK_SUBMISSION,
    PREFIX_REPRESENTATION_SUBMISSION,
    PREFIX_REPORT,
    PREFIX_AUDIT,
];

/// Maximum length of the short text columns (name, homepage, tags, url, representation tag).
pub const MAX_SHORT_TEXT_LEN: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique_and_three_chars() {
        let unique: HashSet<_> = ALL_PREFIXES.iter().collect();
        assert_eq!(unique.len(), ALL_PREFIXES.len());
        assert!(ALL_PREFIXES.iter().all(|p| p.len() == 3));
    }
}
