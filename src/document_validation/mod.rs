mod ecuador_cedula_checksum;
mod ecuador_ruc_checksum;

pub use crate::document_validation::ecuador_cedula_checksum::EcuadorCedulaChecksum;
pub use crate::document_validation::ecuador_ruc_checksum::EcuadorRucChecksum;

use crate::validation_result::ValidationResult;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

pub trait Validator: Send + Sync {
    fn validate(&self, code: &str) -> ValidationResult;

    fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_valid()
    }
}

/// Lowest and highest province codes that can start a document number.
const MIN_REGION_CODE: u32 = 1;
const MAX_REGION_CODE: u32 = 24;

/// Third digits at or below this are natural person registrations.
const MAX_NATURAL_PERSON_THIRD_DIGIT: u32 = 5;

#[inline]
fn is_valid_region_code(region_code: u32) -> bool {
    (MIN_REGION_CODE..=MAX_REGION_CODE).contains(&region_code)
}

/// Modulus 10 check digit where every weighted product above 9 is folded back
/// into a single digit (which, for products up to 18, is the same as subtracting 9).
fn mod10_weighted_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let total: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| {
            let product = digit * weight;
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();
    match total % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, EnumIter,
)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentType {
    Cedula,
    Ruc,
}

impl DocumentType {
    /// Number of digits of a complete document of this type.
    pub fn expected_length(&self) -> usize {
        match self {
            DocumentType::Cedula => ecuador_cedula_checksum::CEDULA_LENGTH,
            DocumentType::Ruc => ecuador_ruc_checksum::RUC_LENGTH,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Validator for DocumentType {
    fn validate(&self, code: &str) -> ValidationResult {
        match self {
            DocumentType::Cedula => EcuadorCedulaChecksum.validate(code),
            DocumentType::Ruc => EcuadorRucChecksum.validate(code),
        }
    }
}

/// Validation as the user types: `None` while `code` is still an incomplete run
/// of digits, so no error is shown before the last digit is entered.
pub fn validate_incremental(
    validator: &impl Validator,
    expected_length: usize,
    code: &str,
) -> Option<ValidationResult> {
    if code.len() < expected_length && code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(validator.validate(code))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validation_result::InvalidReason;
    use strum::IntoEnumIterator;

    #[test]
    fn weighted_check_digit() {
        // 2 + 2 + 2 + 2 = 8
        assert_eq!(
            mod10_weighted_check_digit(&[1, 0, 1, 0, 1, 0, 1, 0, 0], &[2, 1, 2, 1, 2, 1, 2, 1, 2]),
            2
        );
        assert_eq!(
            // 2 + (16 - 9) = 9
            mod10_weighted_check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 8], &[2, 1, 2, 1, 2, 1, 2, 1, 2]),
            1
        );
        // remainder 0
        assert_eq!(
            mod10_weighted_check_digit(&[0, 5, 0, 5, 0, 0, 0, 0, 0], &[2, 1, 2, 1, 2, 1, 2, 1, 2]),
            0
        );
    }

    #[test]
    fn region_code_bounds() {
        assert!(!is_valid_region_code(0));
        assert!(is_valid_region_code(1));
        assert!(is_valid_region_code(24));
        assert!(!is_valid_region_code(25));
        assert!(!is_valid_region_code(99));
    }

    #[test]
    fn document_type_dispatches_to_its_validator() {
        assert_eq!(DocumentType::Cedula.validate("1710034065"), ValidationResult::Valid);
        assert_eq!(
            DocumentType::Ruc.validate("1710034065001"),
            ValidationResult::Valid
        );
        assert_eq!(
            DocumentType::Cedula.validate("1710034065001"),
            ValidationResult::Invalid(InvalidReason::BadLength)
        );
        assert_eq!(
            DocumentType::Ruc.validate("1710034065"),
            ValidationResult::Invalid(InvalidReason::BadLength)
        );
    }

    #[test]
    fn document_type_serde() {
        let document_type: DocumentType = serde_json::from_str(r#"{"type": "ruc"}"#).unwrap();
        assert_eq!(document_type, DocumentType::Ruc);
        assert_eq!(document_type.name(), "ruc");
        assert_eq!(document_type.expected_length(), 13);
    }

    #[test]
    fn document_type_serializes_with_its_metric_name() {
        for document_type in DocumentType::iter() {
            let json = serde_json::to_string(&document_type).unwrap();
            assert_eq!(json, format!(r#"{{"type":"{}"}}"#, document_type.name()));
            let parsed: DocumentType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, document_type);
        }
        assert_eq!(
            serde_json::to_string(&DocumentType::Cedula).unwrap(),
            r#"{"type":"cedula"}"#
        );
    }

    #[test]
    fn incremental_validation_waits_for_full_length() {
        let cedula = DocumentType::Cedula;
        assert_eq!(validate_incremental(&cedula, 10, ""), None);
        assert_eq!(validate_incremental(&cedula, 10, "171003406"), None);
        assert_eq!(
            validate_incremental(&cedula, 10, "1710034065"),
            Some(ValidationResult::Valid)
        );
        assert_eq!(
            validate_incremental(&cedula, 10, "17a"),
            Some(ValidationResult::Invalid(InvalidReason::BadLength))
        );
        assert_eq!(
            validate_incremental(&cedula, 10, "17100340650"),
            Some(ValidationResult::Invalid(InvalidReason::BadLength))
        );
    }
}
