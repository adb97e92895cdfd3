//! Boolean validator.

use serde_json::Value;

use crate::error::ValidationError;
use crate::rule::Check;
use crate::validator::{common_builders, RuleChain, Shape, Validator};

/// Accepts exactly `true` or `false`; `0`, `1` and strings are rejected.
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    chain: RuleChain,
}

impl BooleanValidator {
    pub fn new() -> Self {
        Self {
            chain: RuleChain::typed(Check::IsBoolean, "Value must be a boolean"),
        }
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.chain.evaluate(value).map(|_| ())
    }
}

impl Default for BooleanValidator {
    fn default() -> Self {
        Self::new()
    }
}

common_builders!(BooleanValidator);

impl From<BooleanValidator> for Validator {
    fn from(validator: BooleanValidator) -> Self {
        Validator::from_parts(validator.chain, Shape::Boolean)
    }
}
