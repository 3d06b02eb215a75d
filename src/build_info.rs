//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string printed by `--version`.
pub fn version_line() -> String {
    format!(
        "skyward {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash, or "unknown" outside a git checkout
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_package() {
        let line = version_line();
        assert!(line.starts_with("skyward "));
        assert!(line.contains(BUILD_DATE));
    }
}
