//! Known document numbers with their expected outcome, shared by the unit tests,
//! the benches and the fuzz harness.

use crate::validation_result::{InvalidReason, ValidationResult};

pub const VALID_CEDULAS: &[&str] = &[
    "1710034065",
    "0926687856",
    "0100000009",
    "2400000002",
    // remainder 0
    "0102030400",
];

pub const INVALID_CEDULAS: &[(&str, InvalidReason)] = &[
    ("0", InvalidReason::BadLength),
    ("99123456 7", InvalidReason::BadLength),
    ("2512345675", InvalidReason::BadRegionCode),
    ("0090000000", InvalidReason::BadRegionCode),
    ("1792345678", InvalidReason::BadThirdDigit),
    ("1712345678", InvalidReason::BadCheckDigit),
];

pub const VALID_RUCS: &[&str] = &["1710034065001", "0926687856001", "1790016919001"];

pub const INVALID_RUCS: &[(&str, InvalidReason)] = &[
    ("1710034065", InvalidReason::BadLength),
    ("2510034065001", InvalidReason::BadRegionCode),
    ("1710034065002", InvalidReason::BadEstablishmentSuffix),
    ("1710034066001", InvalidReason::BadCheckDigit),
];

/// Every cédula sample paired with the result it must produce.
pub fn cedula_samples() -> impl Iterator<Item = (&'static str, ValidationResult)> {
    samples(VALID_CEDULAS, INVALID_CEDULAS)
}

pub fn ruc_samples() -> impl Iterator<Item = (&'static str, ValidationResult)> {
    samples(VALID_RUCS, INVALID_RUCS)
}

fn samples(
    valid: &'static [&'static str],
    invalid: &'static [(&'static str, InvalidReason)],
) -> impl Iterator<Item = (&'static str, ValidationResult)> {
    valid
        .iter()
        .map(|code| (*code, ValidationResult::Valid))
        .chain(
            invalid
                .iter()
                .map(|(code, reason)| (*code, ValidationResult::Invalid(*reason))),
        )
}
