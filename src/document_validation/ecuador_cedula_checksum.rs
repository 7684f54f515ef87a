use crate::document_validation::{
    is_valid_region_code, mod10_weighted_check_digit, Validator, MAX_NATURAL_PERSON_THIRD_DIGIT,
};
pub(crate) use crate::identifier_code::CEDULA_LENGTH;
use crate::identifier_code::IdentifierCode;
use crate::validation_result::{InvalidReason, ValidationResult};

pub struct EcuadorCedulaChecksum;

const WEIGHTS: &[u32; CEDULA_LENGTH - 1] = &[2, 1, 2, 1, 2, 1, 2, 1, 2];

impl EcuadorCedulaChecksum {
    /// Runs the region, third digit and check digit rules on an already parsed code.
    pub fn check(code: &IdentifierCode) -> Result<(), InvalidReason> {
        if !is_valid_region_code(code.region_code()) {
            return Err(InvalidReason::BadRegionCode);
        }
        if code.third_digit() > MAX_NATURAL_PERSON_THIRD_DIGIT {
            return Err(InvalidReason::BadThirdDigit);
        }
        let digits = code.digits();
        if mod10_weighted_check_digit(&digits[..CEDULA_LENGTH - 1], WEIGHTS) != code.check_digit()
        {
            return Err(InvalidReason::BadCheckDigit);
        }
        Ok(())
    }
}

impl Validator for EcuadorCedulaChecksum {
    fn validate(&self, code: &str) -> ValidationResult {
        IdentifierCode::parse(code)
            .and_then(|code| EcuadorCedulaChecksum::check(&code))
            .into()
    }
}
