//! Validator port for untyped protocol documents.

use crate::conformance::domain::ValidationReport;
use serde_json::Value;

/// Port for document validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Run every applicable check and collect all findings (not fail-fast)
/// - Stop early only where no shape is known to check against
/// - Be stateless and thread-safe
pub trait DocumentValidator: Send + Sync {
    /// Validates a decoded document, returning every finding in check order.
    fn validate(&self, document: &Value) -> ValidationReport;
}

/// Configuration for validation rules.
///
/// The default configuration reports every finding.
///
/// # Examples
///
/// ```
/// use a2a_conformance::conformance::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.report_warnings);
///
/// let quiet = ValidationConfig::errors_only();
/// assert!(!quiet.report_warnings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Whether warning findings are recorded.
    pub report_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            report_warnings: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that drops warnings and keeps only errors.
    #[must_use]
    pub const fn errors_only() -> Self {
        Self {
            report_warnings: false,
        }
    }
}
