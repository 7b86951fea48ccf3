//! Engine log codes and their classification metadata
//!
//! Every event the engine emits carries one of these codes so that consumers can
//! filter dispatch, classification and configuration events without matching on
//! message text. Gateway response codes live in [`crate::response::codes`].

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Event severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High = 0,
    Medium = 1,
    Low = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata attached to a log code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Dispatch codes
pub mod dispatch {
    use super::Code;

    pub const UNKNOWN_RESOURCE_KIND: Code = Code::new("D010");
    pub const DEPTH_LIMIT_EXCEEDED: Code = Code::new("D011");
    pub const PASS_THROUGH: Code = Code::new("D012");
    pub const MISSING_BUILDER: Code = Code::new("D013");
}

/// Error classification codes
pub mod classification {
    use super::Code;

    pub const UNKNOWN_RESPONSE_CODE: Code = Code::new("K020");
    pub const MALFORMED_ERROR_BODY: Code = Code::new("K021");
    pub const RECONSTRUCTION_FAILED: Code = Code::new("K022");
}

/// Configuration codes
pub mod configuration {
    use super::Code;

    pub const CONFIG_INVALID: Code = Code::new("G030");
    pub const CONFIG_PARSE_ERROR: Code = Code::new("G031");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const DISPATCH_COMPLETED: Code = Code::new("I010");
    pub const ERROR_CLASSIFIED: Code = Code::new("I020");
    pub const CONFIG_LOADED: Code = Code::new("I030");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        [
            CodeMetadata::new(
                "D010",
                "Dispatch",
                Severity::Low,
                "Resource kind is not recognized; result dropped",
            ),
            CodeMetadata::new(
                "D011",
                "Dispatch",
                Severity::High,
                "Nested resource depth exceeded the configured limit",
            ),
            CodeMetadata::new(
                "D012",
                "Dispatch",
                Severity::Low,
                "Raw value is not a non-empty object; returned unchanged",
            ),
            CodeMetadata::new(
                "D013",
                "Dispatch",
                Severity::High,
                "No builder registered for resource kind",
            ),
            CodeMetadata::new(
                "K020",
                "Classification",
                Severity::Low,
                "Gateway response code missing from code table",
            ),
            CodeMetadata::new(
                "K021",
                "Classification",
                Severity::Low,
                "Error body did not match any message extraction strategy",
            ),
            CodeMetadata::new(
                "K022",
                "Classification",
                Severity::Medium,
                "Best-effort reconstruction of error payload failed",
            ),
            CodeMetadata::new(
                "G030",
                "Configuration",
                Severity::High,
                "Engine configuration failed validation",
            ),
            CodeMetadata::new(
                "G031",
                "Configuration",
                Severity::High,
                "Engine configuration could not be parsed",
            ),
            CodeMetadata::new(
                "I001",
                "System",
                Severity::Low,
                "Logging system initialized",
            ),
            CodeMetadata::new(
                "I010",
                "Dispatch",
                Severity::Low,
                "Resource dispatched to typed object",
            ),
            CodeMetadata::new(
                "I020",
                "Classification",
                Severity::Low,
                "Failed response classified",
            ),
            CodeMetadata::new(
                "I030",
                "Configuration",
                Severity::Low,
                "Engine configuration loaded",
            ),
        ]
        .into_iter()
        .map(|metadata| (metadata.code, metadata))
        .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown code")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
