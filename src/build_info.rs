//! Build information module
//!
//! Compile-time constants for build number, timestamp and package metadata,
//! and the startup banner the server prints before taking over stdio.

use crate::conversion::Category;

/// Build number, incremented by build.rs on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("UNITCONV_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("UNITCONV_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parse a decimal build number at compile time. Empty or non-digit input is rejected.
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build metadata for the running binary
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    /// Get the current build info
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// Startup banner lines: identity, build, and the categories on offer
    pub fn banner(&self) -> Vec<String> {
        let rule = "=".repeat(47);
        let mut lines = vec![
            rule.clone(),
            format!("  {} ({})", self.description, self.name),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
        ];
        for category in Category::ALL {
            lines.push(format!(
                "  {}: {}",
                category,
                category.unit_codes().join(", ")
            ));
        }
        lines.push(rule);
        lines
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner() {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("42"), Some(42));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("4x"), None);
    }

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "unitconv");
        assert_eq!(info.version, VERSION);
    }

    #[test]
    fn test_banner_lists_categories() {
        let banner = BuildInfo::current().banner();
        assert!(banner[1].ends_with("(unitconv)"));
        assert!(banner.iter().any(|l| l == "  length: m, cm, mm, km, in, ft, yd"));
        assert!(banner.iter().any(|l| l == "  temperature: c, f, k"));
        assert_eq!(banner.first(), banner.last());
    }
}
