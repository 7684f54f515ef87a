pub mod config;
pub mod error;
mod metrics;

use crate::document_rule::metrics::RuleMetrics;
use crate::document_validation::{validate_incremental, DocumentType, Validator};
use crate::validation_result::ValidationResult;

/// A [DocumentType] validator compiled from a [config::DocumentRuleConfig],
/// reporting every outcome to the configured metrics.
pub struct DocumentRule {
    document_type: DocumentType,
    trim_whitespace: bool,
    metrics: RuleMetrics,
}

impl DocumentRule {
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// `None` while the input is an incomplete run of digits. Pending inputs are
    /// not counted in the metrics.
    pub fn validate_incremental(&self, code: &str) -> Option<ValidationResult> {
        let code = self.prepare(code);
        let result =
            validate_incremental(&self.document_type, self.document_type.expected_length(), code)?;
        self.metrics.record(&result);
        Some(result)
    }

    fn prepare<'a>(&self, code: &'a str) -> &'a str {
        if self.trim_whitespace {
            code.trim()
        } else {
            code
        }
    }
}

impl Validator for DocumentRule {
    fn validate(&self, code: &str) -> ValidationResult {
        let result = self.document_type.validate(self.prepare(code));
        self.metrics.record(&result);
        result
    }
}
