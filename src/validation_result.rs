use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why an identifier was rejected. Only the first failed check is ever reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("The document number must be made of exactly the expected count of digits")]
    BadLength,

    #[error("The first two digits must be a province code between 01 and 24")]
    BadRegionCode,

    #[error("The third digit must be between 0 and 5")]
    BadThirdDigit,

    #[error("The check digit does not match the rest of the document number")]
    BadCheckDigit,

    #[error("A natural person RUC must end with 001")]
    BadEstablishmentSuffix,
}

impl InvalidReason {
    /// Stable name, also used as the `reason` metric label.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }

    /// Converts into a `Result`, so callers can use `?` to bail out on the reason.
    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), InvalidReason>> for ValidationResult {
    fn from(value: Result<(), InvalidReason>) -> Self {
        match value {
            Ok(()) => ValidationResult::Valid,
            Err(reason) => ValidationResult::Invalid(reason),
        }
    }
}
