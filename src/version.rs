// Version information for the Guardrail API service

/// Full version string with feature description
pub const VERSION: &str = "v1.2.0-batch-check-2025-08-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.2.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "input-check",
    "guarded-chat",
    "batch-check",
    "masked-output",
    "fail-open-toggle",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Guardrail API {} ({})", VERSION_NUMBER, BUILD_DATE)
}
