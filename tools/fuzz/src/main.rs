use afl::fuzz;
use ec_document_check::{
    DocumentType, EcuadorCedulaChecksum, EcuadorRucChecksum, IdentifierCode, InvalidReason,
    ValidationResult, Validator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    check_samples();

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

/// Known inputs must keep their outcome and pass the same invariants as fuzzed ones.
#[cfg(feature = "manual_test")]
fn check_samples() {
    use ec_document_check::{cedula_samples, ruc_samples};

    for (code, expected) in cedula_samples() {
        assert_eq!(EcuadorCedulaChecksum.validate(code), expected);
        run_fuzz(code);
    }
    for (code, expected) in ruc_samples() {
        assert_eq!(EcuadorRucChecksum.validate(code), expected);
        run_fuzz(code);
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let result = EcuadorCedulaChecksum.validate(input);

    // pure function
    assert_eq!(result, EcuadorCedulaChecksum.validate(input));
    assert_eq!(result, DocumentType::Cedula.validate(input));

    // only a well-formed code can get past the length check
    let parsed = IdentifierCode::parse(input);
    assert_eq!(
        result == ValidationResult::Invalid(InvalidReason::BadLength),
        parsed.is_err()
    );
    if let Ok(code) = parsed {
        assert_eq!(ValidationResult::from(EcuadorCedulaChecksum::check(&code)), result);
    }

    // a natural person RUC is exactly a cédula plus 001
    if result.is_valid() {
        assert!(EcuadorRucChecksum.is_valid(&format!("{input}001")));
    }

    let ruc_result = EcuadorRucChecksum.validate(input);
    assert_eq!(ruc_result, EcuadorRucChecksum.validate(input));
}
