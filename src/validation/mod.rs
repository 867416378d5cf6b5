//! Declarative request body validation
//!
//! A [`RequestSchema`] is an ordered table of [`FieldConstraint`]s. Checking a
//! JSON body against it never stops at the first problem: every violation is
//! collected, in schema order, into a [`ValidationFailure`].

pub mod schemas;

use serde_json::{Map, Value};

use crate::utils::{current_year, is_valid_email, is_valid_uri, utf16_length};

pub use schemas::{ValidationSchemas, login_schema, signup_schema};

/// Reported when the body is valid JSON but not an object
pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

/// JSON type a field must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// JSON number, or a string that parses as one
    Number,
    Any,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Any => "a value",
        }
    }
}

/// Numeric bound, possibly relative to the calendar year at check time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Fixed(i64),
    CurrentYearPlus(i64),
}

impl Limit {
    pub fn resolve(self, current_year: i64) -> i64 {
        match self {
            Self::Fixed(value) => value,
            Self::CurrentYearPlus(offset) => current_year + offset,
        }
    }
}

/// A single constraint on a present, correctly typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Minimum length in UTF-16 code units
    MinLength(u64),
    Integer,
    Min(Limit),
    Max(Limit),
    Email,
    Uri,
    /// Value must equal another field of the same body exactly
    EqualsField(&'static str),
}

#[derive(Debug, Clone)]
struct Rule {
    check: Check,
    message: &'static str,
}

/// Declarative rule set for one body field
#[derive(Debug, Clone)]
pub struct FieldConstraint {
    name: &'static str,
    kind: FieldKind,
    required: Option<&'static str>,
    type_message: Option<&'static str>,
    rules: Vec<Rule>,
}

impl FieldConstraint {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: None,
            type_message: None,
            rules: Vec::new(),
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn any(name: &'static str) -> Self {
        Self::new(name, FieldKind::Any)
    }

    /// Mark the field required; `message` is reported when it is missing or an empty string
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn type_message(mut self, message: &'static str) -> Self {
        self.type_message = Some(message);
        self
    }

    pub fn min_length(self, min: u64, message: &'static str) -> Self {
        self.rule(Check::MinLength(min), message)
    }

    pub fn integer(self, message: &'static str) -> Self {
        self.rule(Check::Integer, message)
    }

    pub fn min(self, limit: Limit, message: &'static str) -> Self {
        self.rule(Check::Min(limit), message)
    }

    pub fn max(self, limit: Limit, message: &'static str) -> Self {
        self.rule(Check::Max(limit), message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.rule(Check::Email, message)
    }

    pub fn uri(self, message: &'static str) -> Self {
        self.rule(Check::Uri, message)
    }

    pub fn equals_field(self, other: &'static str, message: &'static str) -> Self {
        self.rule(Check::EqualsField(other), message)
    }

    fn rule(mut self, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule { check, message });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    fn type_error(&self) -> String {
        match self.type_message {
            Some(message) => message.to_string(),
            None => format!("\"{}\" must be {}", self.name, self.kind.describe()),
        }
    }

    fn evaluate(&self, body: &Map<String, Value>, current_year: i64, out: &mut Vec<String>) {
        let Some(value) = body.get(self.name) else {
            if let Some(message) = self.required {
                out.push(message.to_string());
            }
            return;
        };

        let number = match self.kind {
            FieldKind::String => match value {
                Value::String(s) if s.is_empty() => {
                    out.push(match self.required {
                        Some(message) => message.to_string(),
                        None => format!("\"{}\" is not allowed to be empty", self.name),
                    });
                    return;
                }
                Value::String(_) => None,
                _ => {
                    out.push(self.type_error());
                    return;
                }
            },
            FieldKind::Number => match as_number(value) {
                Some(n) => Some(n),
                None => {
                    out.push(self.type_error());
                    return;
                }
            },
            FieldKind::Any => None,
        };

        for rule in &self.rules {
            let passed = match &rule.check {
                Check::MinLength(min) => value.as_str().is_some_and(|s| utf16_length(s) >= *min),
                Check::Integer => number.is_some_and(|n| n.fract() == 0.0),
                Check::Min(limit) => number.is_some_and(|n| n >= limit.resolve(current_year) as f64),
                Check::Max(limit) => number.is_some_and(|n| n <= limit.resolve(current_year) as f64),
                Check::Email => value.as_str().is_some_and(is_valid_email),
                Check::Uri => value.as_str().is_some_and(is_valid_uri),
                Check::EqualsField(other) => body.get(*other) == Some(value),
            };
            if !passed {
                out.push(rule.message.to_string());
            }
        }
    }
}

/// Numeric view of a value; numeric strings are converted
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Ordered, immutable table of field constraints for one request shape
#[derive(Debug, Clone)]
pub struct RequestSchema {
    name: &'static str,
    fields: Vec<FieldConstraint>,
    allow_unknown: bool,
}

impl RequestSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            allow_unknown: false,
        }
    }

    pub fn field(mut self, field: FieldConstraint) -> Self {
        self.fields.push(field);
        self
    }

    /// Accept keys the schema does not name (rejected by default)
    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldConstraint] {
        &self.fields
    }

    /// Validate a body against the schema as of the current UTC year
    pub fn check(&self, body: &Value) -> Result<(), ValidationFailure> {
        self.check_for_year(body, current_year())
    }

    /// Validate a body, resolving year-relative limits against `current_year`
    pub fn check_for_year(&self, body: &Value, current_year: i64) -> Result<(), ValidationFailure> {
        let Some(object) = body.as_object() else {
            return Err(ValidationFailure::new(vec![NOT_AN_OBJECT_MESSAGE.to_string()]));
        };

        let mut details = Vec::new();
        for field in &self.fields {
            field.evaluate(object, current_year, &mut details);
        }

        if !self.allow_unknown {
            details.extend(
                object
                    .keys()
                    .filter(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
                    .map(|key| format!("\"{}\" is not allowed", key)),
            );
        }

        if details.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(details))
        }
    }
}

/// Every violation found in one body, in the order they were detected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} validation violation(s): {}", .details.len(), .details.join("; "))]
pub struct ValidationFailure {
    details: Vec<String>,
}

impl ValidationFailure {
    pub fn new(details: Vec<String>) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn into_details(self) -> Vec<String> {
        self.details
    }
}
