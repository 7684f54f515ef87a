// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod document_rule;
mod document_validation;
mod identifier_code;
mod observability;
mod validation_result;

#[cfg(any(test, feature = "testing", feature = "bench"))]
mod sample_codes;

// This is the public API of the library
pub use document_rule::config::DocumentRuleConfig;
pub use document_rule::error::{CreateRuleError, LabelValidationError};
pub use document_rule::DocumentRule;
pub use document_validation::{DocumentType, EcuadorCedulaChecksum, EcuadorRucChecksum, Validator};
pub use identifier_code::{IdentifierCode, CEDULA_LENGTH};
pub use observability::labels::Labels;
pub use validation_result::{InvalidReason, ValidationResult};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::sample_codes::{
    cedula_samples, ruc_samples, INVALID_CEDULAS, INVALID_RUCS, VALID_CEDULAS, VALID_RUCS,
};

/// Validates an Ecuadorian cédula: exactly ten ASCII digits, a province code
/// between 01 and 24, a third digit between 0 and 5 and a matching check digit.
///
/// Checks run in that order and only the first failure is reported.
pub fn validate(code: &str) -> ValidationResult {
    EcuadorCedulaChecksum.validate(code)
}

/// Same as [validate], but returns `None` while `code` is fewer than ten digits
/// and nothing else, so a form can stay quiet until the number is complete.
pub fn validate_incremental(code: &str) -> Option<ValidationResult> {
    document_validation::validate_incremental(&EcuadorCedulaChecksum, CEDULA_LENGTH, code)
}
