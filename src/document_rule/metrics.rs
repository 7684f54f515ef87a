use crate::document_validation::DocumentType;
use crate::observability::labels::Labels;
use crate::validation_result::{InvalidReason, ValidationResult};
use ahash::AHashMap;
use metrics::{counter, Counter};
use strum::IntoEnumIterator;

pub struct RuleMetrics {
    pub valid: Counter,
    pub invalid: AHashMap<InvalidReason, Counter>,
}

const DOCUMENT_TYPE: &str = "document_type";
const REASON: &str = "reason";

impl RuleMetrics {
    pub fn new(labels: &Labels, document_type: DocumentType) -> Self {
        let labels = labels.clone_with_labels(&[(DOCUMENT_TYPE, document_type.name())]);
        RuleMetrics {
            valid: counter!("document_validation.valid", labels.clone()),
            invalid: InvalidReason::iter()
                .map(|reason| {
                    let counter = counter!(
                        "document_validation.invalid",
                        labels.clone_with_labels(&[(REASON, reason.name())])
                    );
                    (reason, counter)
                })
                .collect(),
        }
    }

    pub fn record(&self, result: &ValidationResult) {
        match result {
            ValidationResult::Valid => self.valid.increment(1),
            ValidationResult::Invalid(reason) => {
                if let Some(counter) = self.invalid.get(reason) {
                    counter.increment(1);
                }
            }
        }
    }
}
