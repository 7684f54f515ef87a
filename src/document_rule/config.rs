use crate::document_rule::error::{CreateRuleError, LabelValidationError};
use crate::document_rule::metrics::RuleMetrics;
use crate::document_rule::DocumentRule;
use crate::document_validation::DocumentType;
use crate::observability::labels::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentRuleConfig {
    pub document_type: DocumentType,

    /// Strip surrounding whitespace before validating, as the patient API does
    /// with submitted document numbers.
    #[serde(default)]
    pub trim_whitespace: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl DocumentRuleConfig {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            trim_whitespace: false,
            labels: Labels::empty(),
        }
    }

    pub fn document_type(&self, document_type: DocumentType) -> Self {
        self.mutate_clone(|x| x.document_type = document_type)
    }

    pub fn trim_whitespace(&self, trim_whitespace: bool) -> Self {
        self.mutate_clone(|x| x.trim_whitespace = trim_whitespace)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<DocumentRule, CreateRuleError> {
        if self.labels.iter().any(|label| label.key().is_empty()) {
            return Err(LabelValidationError::EmptyKey.into());
        }
        Ok(DocumentRule {
            document_type: self.document_type,
            trim_whitespace: self.trim_whitespace,
            metrics: RuleMetrics::new(&self.labels, self.document_type),
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
