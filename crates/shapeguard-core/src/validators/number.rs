//! Number validator.
//!
//! Integers and floats both pass the type rule. Booleans never do: they are a
//! separate variant of the value model, so `true` is not `1` here.
//!
//! Bounds accept any primitive integer or float. Integer bounds and integer
//! values compare exactly, even past 2^53; only float-to-float comparisons go
//! through `f64`. Messages render the bound as given, so `min_value(10)` and
//! `min_value(10.0)` both report "Number must be at least 10".

use serde_json::Value;

use crate::error::ValidationError;
use crate::rule::{Bound, Check};
use crate::validator::{common_builders, RuleChain, Shape, Validator};

#[derive(Debug, Clone)]
pub struct NumberValidator {
    chain: RuleChain,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self {
            chain: RuleChain::typed(Check::IsNumber, "Value must be a number"),
        }
    }

    /// Inclusive lower bound.
    pub fn min_value(mut self, minimum: impl Into<Bound>) -> Self {
        let bound = minimum.into();
        self.chain.push(
            Check::Min {
                bound,
                exclusive: false,
            },
            format!("Number must be at least {}", bound),
        );
        self
    }

    /// Exclusive lower bound.
    pub fn greater_than(mut self, minimum: impl Into<Bound>) -> Self {
        let bound = minimum.into();
        self.chain.push(
            Check::Min {
                bound,
                exclusive: true,
            },
            format!("Number must be greater than {}", bound),
        );
        self
    }

    /// Inclusive upper bound.
    pub fn max_value(mut self, maximum: impl Into<Bound>) -> Self {
        let bound = maximum.into();
        self.chain.push(
            Check::Max {
                bound,
                exclusive: false,
            },
            format!("Number must be at most {}", bound),
        );
        self
    }

    /// Exclusive upper bound.
    pub fn less_than(mut self, maximum: impl Into<Bound>) -> Self {
        let bound = maximum.into();
        self.chain.push(
            Check::Max {
                bound,
                exclusive: true,
            },
            format!("Number must be less than {}", bound),
        );
        self
    }

    /// Strictly greater than zero.
    pub fn positive(self) -> Self {
        self.greater_than(0).with_message("Number must be positive")
    }

    /// Zero or greater.
    pub fn non_negative(self) -> Self {
        self.min_value(0).with_message("Number must be non-negative")
    }

    /// No fractional part (`3` and `3.0` pass, `3.5` does not).
    pub fn integer(mut self) -> Self {
        self.chain.push(Check::Integer, "Number must be an integer");
        self
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.chain.evaluate(value).map(|_| ())
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

common_builders!(NumberValidator);

impl From<NumberValidator> for Validator {
    fn from(validator: NumberValidator) -> Self {
        Validator::from_parts(validator.chain, Shape::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(validator: &NumberValidator, value: Value) -> String {
        validator.validate(&value).unwrap_err().message
    }

    #[test]
    fn test_valid_number() {
        let validator = NumberValidator::new();
        for value in [json!(123), json!(123.45), json!(0), json!(-5), json!(u64::MAX)] {
            assert!(validator.validate(&value).is_ok());
        }
    }

    #[test]
    fn test_invalid_number() {
        let validator = NumberValidator::new();
        for value in [json!("not a number"), json!(true), json!(false), Value::Null] {
            assert_eq!(message(&validator, value), "Value must be a number");
        }
    }

    #[test]
    fn test_min_value() {
        let validator = NumberValidator::new().min_value(10);
        assert!(validator.validate(&json!(10)).is_ok());
        assert!(validator.validate(&json!(15)).is_ok());
        assert_eq!(message(&validator, json!(5)), "Number must be at least 10");
    }

    #[test]
    fn test_max_value() {
        let validator = NumberValidator::new().max_value(100);
        assert!(validator.validate(&json!(100)).is_ok());
        assert_eq!(message(&validator, json!(150)), "Number must be at most 100");
    }

    #[test]
    fn test_exclusive_bounds() {
        let validator = NumberValidator::new().greater_than(10);
        assert!(validator.validate(&json!(11)).is_ok());
        assert_eq!(message(&validator, json!(10)), "Number must be greater than 10");

        let validator = NumberValidator::new().less_than(100);
        assert!(validator.validate(&json!(99)).is_ok());
        assert_eq!(message(&validator, json!(100)), "Number must be less than 100");
    }

    #[test]
    fn test_fractional_bound_in_message() {
        let validator = NumberValidator::new().max_value(4.5);
        assert_eq!(message(&validator, json!(5)), "Number must be at most 4.5");
    }

    #[test]
    fn test_positive() {
        let validator = NumberValidator::new().positive();
        assert!(validator.validate(&json!(1)).is_ok());
        assert!(validator.validate(&json!(0.1)).is_ok());
        assert_eq!(message(&validator, json!(0)), "Number must be positive");
        assert_eq!(message(&validator, json!(-1)), "Number must be positive");
    }

    #[test]
    fn test_non_negative() {
        let validator = NumberValidator::new().non_negative();
        assert!(validator.validate(&json!(0)).is_ok());
        assert!(validator.validate(&json!(1)).is_ok());
        assert_eq!(message(&validator, json!(-1)), "Number must be non-negative");
    }

    #[test]
    fn test_positive_appends_exactly_one_rule() {
        let validator = NumberValidator::new().min_value(0).max_value(100).positive();
        assert_eq!(validator.rules().len(), 4);
        assert_eq!(validator.rules()[1].message(), "Number must be at least 0");
        assert_eq!(validator.rules()[2].message(), "Number must be at most 100");

        assert!(validator.validate(&json!(50)).is_ok());
        assert_eq!(message(&validator, json!(0)), "Number must be positive");
    }

    #[test]
    fn test_integer() {
        let validator = NumberValidator::new().integer();
        assert!(validator.validate(&json!(3)).is_ok());
        assert!(validator.validate(&json!(3.0)).is_ok());
        assert_eq!(message(&validator, json!(3.5)), "Number must be an integer");
    }

    #[test]
    fn test_optional_number() {
        let validator = NumberValidator::new().optional();
        assert!(validator.validate(&Value::Null).is_ok());
        assert!(validator.validate(&json!(123)).is_ok());
    }

    #[test]
    fn test_custom_type_message() {
        let validator = NumberValidator::new().with_message("Not a valid number");
        assert_eq!(message(&validator, json!("invalid")), "Not a valid number");
    }

    #[test]
    fn test_bounds_compare_exactly_past_2_pow_53() {
        // 2^53 + 1 rounds down to 2^53 as an f64.
        let value = json!(9_007_199_254_740_993u64);

        let at_most = NumberValidator::new().max_value(9_007_199_254_740_992.0);
        assert_eq!(message(&at_most, value.clone()), "Number must be at most 9007199254740992");

        let above = NumberValidator::new().greater_than(9_007_199_254_740_992.0);
        assert!(above.validate(&value).is_ok());

        let below = NumberValidator::new().less_than(9_007_199_254_740_993u64);
        assert_eq!(message(&below, value), "Number must be less than 9007199254740993");
    }

    #[test]
    fn test_wide_integer_bounds() {
        let validator = NumberValidator::new().max_value(u64::MAX);
        assert!(validator.validate(&json!(u64::MAX)).is_ok());
        assert!(validator.validate(&json!(i64::MIN)).is_ok());

        let validator = NumberValidator::new().min_value(i64::MIN).less_than(usize::MAX);
        assert!(validator.validate(&json!(i64::MIN)).is_ok());
        assert_eq!(
            message(&validator, json!(usize::MAX)),
            format!("Number must be less than {}", usize::MAX)
        );

        let validator = NumberValidator::new().greater_than(u64::MAX - 1);
        assert!(validator.validate(&json!(u64::MAX)).is_ok());
        assert_eq!(
            message(&validator, json!(u64::MAX - 1)),
            "Number must be greater than 18446744073709551614"
        );
    }

    #[test]
    fn test_float_value_against_integer_bound() {
        let validator = NumberValidator::new().min_value(3_u8).max_value(4_i32);
        assert!(validator.validate(&json!(3.0)).is_ok());
        assert!(validator.validate(&json!(3.5)).is_ok());
        assert_eq!(message(&validator, json!(2.999)), "Number must be at least 3");
        assert_eq!(message(&validator, json!(4.000001)), "Number must be at most 4");
    }

    #[test]
    fn test_float_bound_renders_like_integer() {
        let validator = NumberValidator::new().min_value(10.0);
        assert_eq!(message(&validator, json!(9)), "Number must be at least 10");
    }
}
