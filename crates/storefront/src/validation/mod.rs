//! # Form Validation
//!
//! A schema is an ordered list of fields, each with an ordered list of [`Rule`]s.
//! Checking is a pure function over the raw text the user typed: values are trimmed,
//! fields are visited in schema order and the first broken rule is reported. The form
//! shows that single message as its alert.
//!
//! ```rust
//! use std::collections::HashMap;
//! use storefront::validation::{FieldSchema, Rule, Schema};
//!
//! let schema = Schema::new(vec![
//!     FieldSchema::new("price", "Price", vec![Rule::Required, Rule::Numeric, Rule::Min(1.0)]),
//! ]);
//!
//! let values = HashMap::from([("price", "0".to_string())]);
//! let violation = schema.check(&values).unwrap_err();
//! assert_eq!(violation.reason, "Price must be at least 1");
//! ```

pub mod product;

pub use product::*;

use std::collections::HashMap;
use thiserror::Error;

/// A single constraint on a field's text.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The trimmed value is not empty.
    Required,
    /// At most this many characters.
    MaxLength(usize),
    /// Parses as a finite number. A value that does not is reported as missing.
    Numeric,
    /// Numeric and at least this value.
    Min(f64),
    /// Numeric and at most this value.
    Max(f64),
    /// One of the listed values, reported as missing otherwise.
    OneOf(Vec<String>),
}

impl Rule {
    /// Checks an already trimmed value. `label` is the field name shown to the user.
    pub fn check(&self, label: &str, value: &str) -> Result<(), String> {
        let required = || format!("{label} is required");
        match self {
            Rule::Required if value.is_empty() => Err(required()),
            Rule::MaxLength(max) if value.chars().count() > *max => {
                Err(format!("{label} must be at most {max} characters"))
            }
            Rule::Numeric => parse_number(value).map(|_| ()).ok_or_else(required),
            Rule::Min(min) => match parse_number(value) {
                None => Err(required()),
                Some(n) if n < *min => Err(format!("{label} must be at least {min}")),
                Some(_) => Ok(()),
            },
            Rule::Max(max) => match parse_number(value) {
                None => Err(required()),
                Some(n) if n > *max => Err(format!("{label} must be at most {max}")),
                Some(_) => Ok(()),
            },
            Rule::OneOf(options) if !options.iter().any(|o| o == value) => Err(required()),
            _ => Ok(()),
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// The rules for one named field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(field: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            field,
            label,
            rules,
        }
    }

    /// Trims `raw` and applies the rules in order.
    pub fn check(&self, raw: &str) -> Result<(), Violation> {
        let value = raw.trim();
        for rule in &self.rules {
            rule.check(self.label, value).map_err(|reason| Violation {
                field: self.field,
                reason,
            })?;
        }
        Ok(())
    }
}

/// An ordered set of field schemas.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// Returns the first violation, visiting fields in schema order.
    ///
    /// A field missing from `values` is checked as empty text.
    pub fn check(&self, values: &HashMap<&str, String>) -> Result<(), Violation> {
        for field in &self.fields {
            let raw = values.get(field.field).map_or("", String::as_str);
            field.check(raw)?;
        }
        Ok(())
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }
}

/// The first rule a form broke.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason}")]
pub struct Violation {
    pub field: &'static str,
    pub reason: String,
}

/// Outcome of validating a form into a typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid { field: &'static str, reason: String },
}

impl<T> Validation<T> {
    pub fn into_result(self) -> Result<T, Violation> {
        match self {
            Validation::Valid(payload) => Ok(payload),
            Validation::Invalid { field, reason } => Err(Violation { field, reason }),
        }
    }
}

impl<T> From<Violation> for Validation<T> {
    fn from(violation: Violation) -> Self {
        Validation::Invalid {
            field: violation.field,
            reason: violation.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_report_in_order() {
        let field = FieldSchema::new(
            "price",
            "Price",
            vec![Rule::Required, Rule::Numeric, Rule::Min(1.0), Rule::Max(1000.0)],
        );
        assert_eq!(field.check("").unwrap_err().reason, "Price is required");
        assert_eq!(field.check("abc").unwrap_err().reason, "Price is required");
        assert_eq!(field.check("0").unwrap_err().reason, "Price must be at least 1");
        assert_eq!(field.check("1001").unwrap_err().reason, "Price must be at most 1000");
        assert!(field.check(" 1000 ").is_ok());
    }

    #[test]
    fn test_max_length_counts_characters() {
        let rule = Rule::MaxLength(3);
        assert!(rule.check("Name", "ñññ").is_ok());
        assert!(rule.check("Name", "ññññ").is_err());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        assert!(Rule::Numeric.check("Price", "NaN").is_err());
        assert!(Rule::Numeric.check("Price", "inf").is_err());
    }

    #[test]
    fn test_schema_reports_first_field() {
        let schema = Schema::new(vec![
            FieldSchema::new("a", "A", vec![Rule::Required]),
            FieldSchema::new("b", "B", vec![Rule::Required]),
        ]);
        let violation = schema.check(&HashMap::new()).unwrap_err();
        assert_eq!(violation.field, "a");

        let values = HashMap::from([("a", "x".to_string())]);
        assert_eq!(schema.check(&values).unwrap_err().field, "b");
    }
}
