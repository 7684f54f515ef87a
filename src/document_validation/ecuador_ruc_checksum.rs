use crate::document_validation::{
    is_valid_region_code, EcuadorCedulaChecksum, Validator, MAX_NATURAL_PERSON_THIRD_DIGIT,
};
use crate::identifier_code::{parse_ascii_digits, CEDULA_LENGTH};
use crate::validation_result::{InvalidReason, ValidationResult};

pub(crate) const RUC_LENGTH: usize = 13;

/// Establishment number that closes the RUC of a natural person.
const NATURAL_PERSON_SUFFIX: &[u32; 3] = &[0, 0, 1];

/// Ecuadorian taxpayer number (RUC).
///
/// For natural persons this is the holder's cédula followed by `001`, and the
/// cédula part goes through the full cédula validation. Company registrations
/// (third digit 6 and above) only get the structural and region checks.
pub struct EcuadorRucChecksum;

impl Validator for EcuadorRucChecksum {
    fn validate(&self, code: &str) -> ValidationResult {
        let digits: [u32; RUC_LENGTH] = match parse_ascii_digits(code) {
            Ok(digits) => digits,
            Err(reason) => return ValidationResult::Invalid(reason),
        };

        if !is_valid_region_code(digits[0] * 10 + digits[1]) {
            return ValidationResult::Invalid(InvalidReason::BadRegionCode);
        }

        if digits[2] > MAX_NATURAL_PERSON_THIRD_DIGIT {
            // TODO: public sector (6) and private company (9) RUCs have their own mod 11 check
            // digit. 7 and 8 are not assigned, and are accepted here too.
            return ValidationResult::Valid;
        }

        if digits[CEDULA_LENGTH..] != *NATURAL_PERSON_SUFFIX {
            return ValidationResult::Invalid(InvalidReason::BadEstablishmentSuffix);
        }

        // Ascii digits, so the first 10 bytes are the first 10 characters
        EcuadorCedulaChecksum.validate(&code[..CEDULA_LENGTH])
    }
}

#[cfg(test)]
mod test {
    use crate::document_validation::*;
    use crate::validation_result::{InvalidReason, ValidationResult};

    #[test]
    fn test_valid_ruc() {
        let valid_ids = vec![
            // natural persons
            "1710034065001",
            "0926687856001",
            // companies
            "1790016919001",
            "0960000000001",
            "1768152560001",
            // unassigned classes go through the same branch
            "1770000000001",
            "1780000000009",
        ];
        for id in valid_ids {
            assert_eq!(
                EcuadorRucChecksum.validate(id),
                ValidationResult::Valid,
                "input: {id}"
            );
        }
    }

    #[test]
    fn test_invalid_ruc() {
        let invalid_ids = vec![
            ("1710034065", InvalidReason::BadLength),
            ("17100340650011", InvalidReason::BadLength),
            ("1710034065 001", InvalidReason::BadLength),
            ("1710034065-001", InvalidReason::BadLength),
            ("2510034065001", InvalidReason::BadRegionCode),
            ("0090016919001", InvalidReason::BadRegionCode),
            ("1710034065002", InvalidReason::BadEstablishmentSuffix),
            ("1710034065000", InvalidReason::BadEstablishmentSuffix),
            ("1710034066001", InvalidReason::BadCheckDigit),
        ];
        for (id, reason) in invalid_ids {
            assert_eq!(
                EcuadorRucChecksum.validate(id),
                ValidationResult::Invalid(reason),
                "input: {id}"
            );
        }
    }
}
