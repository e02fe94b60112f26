//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("FLAPPY_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("FLAPPY_BUILD_DATE");

/// One-line version banner for `--version`.
pub fn version_line() -> String {
    format!(
        "flappy {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
