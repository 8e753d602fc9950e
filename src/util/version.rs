use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Freight Quote Engine";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

pub fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

/// Version of the running build; a release tag wins over the manifest version.
pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        if let Ok(version) = parse_version_str(tag) {
            return Ok(version);
        }
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// Persisted data is readable across minor and patch releases of the crate.
pub fn is_compatible(stored: &str) -> bool {
    match (parse_version_str(stored), parse_version_str(APP_VERSION)) {
        (Ok(stored), Ok(current)) => stored.major == current.major,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tag_with_prefix() {
        let version = parse_version_str("v1.4.2").unwrap();
        assert_eq!(version, Version::new(1, 4, 2));
        assert!(parse_version_str("not-a-version").is_err());
    }

    #[test]
    fn same_major_is_compatible() {
        let current = parse_version_str(APP_VERSION).unwrap();
        assert!(is_compatible(&format!("{}.99.0", current.major)));
        assert!(!is_compatible(&format!("{}.0.0", current.major + 1)));
        assert!(!is_compatible("garbage"));
    }
}
