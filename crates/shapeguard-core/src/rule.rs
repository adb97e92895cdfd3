//! Rules: a single predicate paired with the message reported when it fails.
//!
//! The set of built-in predicates is closed ([`Check`]); callers that need
//! something else attach a [`Check::Custom`] closure through `refine`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::{Number, Value};

/// Caller-supplied predicate used by [`Check::Custom`].
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A numeric limit for `Min`/`Max` checks.
///
/// Integer bounds stay exact, so limits and values beyond 2^53 compare
/// correctly against integer inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i128),
    Float(f64),
}

macro_rules! int_bound {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Bound {
                fn from(bound: $int) -> Self {
                    Bound::Int(bound as i128)
                }
            }
        )*
    };
}

int_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Bound {
    fn from(bound: f32) -> Self {
        Bound::Float(f64::from(bound))
    }
}

impl From<f64> for Bound {
    fn from(bound: f64) -> Self {
        Bound::Float(bound)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(n) => write!(f, "{}", n),
            Bound::Float(x) => write!(f, "{}", x),
        }
    }
}

/// 2^127, the first float past `i128::MAX`.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Compare an integer with a float without rounding the integer.
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_LIMIT {
        return Some(Ordering::Less);
    }
    if float < -I128_LIMIT {
        return Some(Ordering::Greater);
    }

    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

/// Order a JSON number against a bound, exactly when either side is an integer.
fn cmp_number(number: &Number, bound: Bound) -> Option<Ordering> {
    let exact = number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from));

    match (exact, bound) {
        (Some(int), Bound::Int(limit)) => Some(int.cmp(&limit)),
        (Some(int), Bound::Float(limit)) => cmp_int_float(int, limit),
        (None, Bound::Int(limit)) => cmp_int_float(limit, number.as_f64()?).map(Ordering::reverse),
        (None, Bound::Float(limit)) => number.as_f64()?.partial_cmp(&limit),
    }
}

/// The predicate half of a [`Rule`].
///
/// Constraint checks (`MinLength`, `Min`, ...) report "not satisfied" for
/// values of the wrong type. The type rule that heads every validator fails
/// first, so in practice they only ever see values of their own type.
#[derive(Clone)]
pub enum Check {
    IsString,
    IsNumber,
    IsBoolean,
    IsArray,
    IsObject,
    /// Character count is at least the bound
    MinLength(usize),
    /// Character count is at most the bound
    MaxLength(usize),
    /// Regex matches starting at offset 0
    Pattern(Regex),
    Min { bound: Bound, exclusive: bool },
    Max { bound: Bound, exclusive: bool },
    /// Number has no fractional part
    Integer,
    MinItems(usize),
    MaxItems(usize),
    Custom(Predicate),
}

impl Check {
    /// Evaluate the predicate against a value.
    pub fn holds(&self, value: &Value) -> bool {
        match self {
            Check::IsString => value.is_string(),
            // Bool is its own variant in the value model, never a Number.
            Check::IsNumber => value.is_number(),
            Check::IsBoolean => value.is_boolean(),
            Check::IsArray => value.is_array(),
            Check::IsObject => value.is_object(),
            Check::MinLength(min) => value
                .as_str()
                .is_some_and(|s| s.chars().count() >= *min),
            Check::MaxLength(max) => value
                .as_str()
                .is_some_and(|s| s.chars().count() <= *max),
            Check::Pattern(regex) => value
                .as_str()
                .and_then(|s| regex.find(s))
                .is_some_and(|m| m.start() == 0),
            Check::Min { bound, exclusive } => match value {
                Value::Number(n) => match cmp_number(n, *bound) {
                    Some(Ordering::Greater) => true,
                    Some(Ordering::Equal) => !*exclusive,
                    _ => false,
                },
                _ => false,
            },
            Check::Max { bound, exclusive } => match value {
                Value::Number(n) => match cmp_number(n, *bound) {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => !*exclusive,
                    _ => false,
                },
                _ => false,
            },
            Check::Integer => match value {
                Value::Number(n) => {
                    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
                }
                _ => false,
            },
            Check::MinItems(min) => value.as_array().is_some_and(|a| a.len() >= *min),
            Check::MaxItems(max) => value.as_array().is_some_and(|a| a.len() <= *max),
            Check::Custom(predicate) => predicate(value),
        }
    }

    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Check::IsString => "is_string",
            Check::IsNumber => "is_number",
            Check::IsBoolean => "is_boolean",
            Check::IsArray => "is_array",
            Check::IsObject => "is_object",
            Check::MinLength(_) => "min_length",
            Check::MaxLength(_) => "max_length",
            Check::Pattern(_) => "pattern",
            Check::Min { .. } => "min",
            Check::Max { .. } => "max",
            Check::Integer => "integer",
            Check::MinItems(_) => "min_items",
            Check::MaxItems(_) => "max_items",
            Check::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::MinLength(n) => write!(f, "MinLength({})", n),
            Check::MaxLength(n) => write!(f, "MaxLength({})", n),
            Check::Pattern(regex) => write!(f, "Pattern({:?})", regex.as_str()),
            Check::Min { bound, exclusive } => {
                write!(f, "Min {{ bound: {}, exclusive: {} }}", bound, exclusive)
            }
            Check::Max { bound, exclusive } => {
                write!(f, "Max {{ bound: {}, exclusive: {} }}", bound, exclusive)
            }
            Check::MinItems(n) => write!(f, "MinItems({})", n),
            Check::MaxItems(n) => write!(f, "MaxItems({})", n),
            Check::Custom(_) => f.write_str("Custom(..)"),
            Check::IsString => f.write_str("IsString"),
            Check::IsNumber => f.write_str("IsNumber"),
            Check::IsBoolean => f.write_str("IsBoolean"),
            Check::IsArray => f.write_str("IsArray"),
            Check::IsObject => f.write_str("IsObject"),
            Check::Integer => f.write_str("Integer"),
        }
    }
}

/// A single validation check and its failure message.
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn holds(&self, value: &Value) -> bool {
        self.check.holds(value)
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_checks() {
        assert!(Check::IsString.holds(&json!("")));
        assert!(Check::IsNumber.holds(&json!(1.5)));
        assert!(Check::IsNumber.holds(&json!(-3)));
        assert!(!Check::IsNumber.holds(&json!(true)));
        assert!(Check::IsBoolean.holds(&json!(false)));
        assert!(!Check::IsBoolean.holds(&json!(0)));
        assert!(Check::IsArray.holds(&json!([])));
        assert!(Check::IsObject.holds(&json!({})));
        assert!(!Check::IsObject.holds(&Value::Null));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Four characters, six bytes.
        let value = json!("žluť");
        assert!(Check::MaxLength(4).holds(&value));
        assert!(Check::MinLength(4).holds(&value));
        assert!(!Check::MinLength(5).holds(&value));
    }

    #[test]
    fn test_pattern_is_anchored_at_start_only() {
        let check = Check::Pattern(Regex::new(r"\d{3}").unwrap());
        assert!(check.holds(&json!("123")));
        assert!(check.holds(&json!("1234abc")));
        assert!(!check.holds(&json!("abc123")));
    }

    #[test]
    fn test_exclusive_bounds() {
        let min = Check::Min {
            bound: Bound::Float(0.0),
            exclusive: true,
        };
        assert!(!min.holds(&json!(0)));
        assert!(min.holds(&json!(0.001)));

        let max = Check::Max {
            bound: Bound::Int(10),
            exclusive: false,
        };
        assert!(max.holds(&json!(10)));
        assert!(!max.holds(&json!(10.5)));
    }

    #[test]
    fn test_integer_check() {
        assert!(Check::Integer.holds(&json!(3)));
        assert!(Check::Integer.holds(&json!(3.0)));
        assert!(!Check::Integer.holds(&json!(3.5)));
        assert!(!Check::Integer.holds(&json!("3")));
    }

    #[test]
    fn test_constraints_reject_wrong_type() {
        assert!(!Check::MinLength(0).holds(&json!(5)));
        assert!(!Check::Min {
            bound: Bound::Int(0),
            exclusive: false
        }
        .holds(&json!("5")));
        assert!(!Check::MinItems(0).holds(&json!({})));
    }

    #[test]
    fn test_custom_predicate() {
        let check = Check::Custom(Arc::new(|v: &Value| v.as_str() == Some("ok")));
        assert!(check.holds(&json!("ok")));
        assert!(!check.holds(&json!("nope")));
        assert_eq!(format!("{:?}", check), "Custom(..)");
    }

    #[test]
    fn test_bound_display() {
        assert_eq!(Bound::from(10).to_string(), "10");
        assert_eq!(Bound::from(10.0).to_string(), "10");
        assert_eq!(Bound::from(4.5).to_string(), "4.5");
        assert_eq!(Bound::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_int_float_comparison_is_exact() {
        let big = 9_007_199_254_740_993_i128; // 2^53 + 1, not representable as f64
        assert_eq!(cmp_int_float(big, 9_007_199_254_740_992.0), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(3, 3.0), Some(Ordering::Equal));
        assert_eq!(cmp_int_float(3, 3.5), Some(Ordering::Less));
        assert_eq!(cmp_int_float(4, 3.5), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(-4, -3.5), Some(Ordering::Less));
        assert_eq!(cmp_int_float(i128::MAX, 1e39), Some(Ordering::Less));
        assert_eq!(cmp_int_float(i128::MIN, -1e39), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(0, f64::NAN), None);
    }

    #[test]
    fn test_float_value_against_large_int_bound() {
        let max = Check::Max {
            bound: Bound::Int(9_007_199_254_740_993),
            exclusive: true,
        };
        // 2^53 as a float is below the integer bound 2^53 + 1.
        assert!(max.holds(&json!(9_007_199_254_740_992.0)));
        assert!(!max.holds(&json!(9_007_199_254_740_993u64)));
    }
}
