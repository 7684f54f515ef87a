use std::convert::From;
use thiserror::Error;

impl From<CreateRuleError> for i64 {
    fn from(value: CreateRuleError) -> i64 {
        match value {
            CreateRuleError::InvalidLabel(_) => -2,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateRuleError {
    /// A metric label can't be attached to the rule (empty key, etc.)
    #[error("Invalid metric label: {0}")]
    InvalidLabel(LabelValidationError),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum LabelValidationError {
    #[error("label keys can't be empty")]
    EmptyKey,
}

impl From<LabelValidationError> for CreateRuleError {
    fn from(err: LabelValidationError) -> Self {
        CreateRuleError::InvalidLabel(err)
    }
}
