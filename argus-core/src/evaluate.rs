// Fixed-order rule evaluator

use crate::error::ensure;
use crate::{RuleDescriptor, ValidationFailure};
use serde_json::Value;

/// Render a value the way failure checks see it.
///
/// Absent values render as `"null"`, strings render unquoted, everything
/// else renders as its JSON text.
pub fn string_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn length_of(value: &Value) -> usize {
    string_of(value).chars().count()
}

/// Run every check the descriptor enables, in fixed order, returning the
/// first failure.
///
/// Order: required, not-null, max length, min length, regex. Both length
/// bounds are exclusive, so a value whose length equals the bound is
/// rejected. A `None` bound skips its check entirely.
///
/// # Examples
///
/// ```
/// use argus_core::{evaluate, RuleDescriptor};
/// use serde_json::json;
///
/// let rule = RuleDescriptor::new("name");
/// assert!(evaluate(&rule, &json!("alice")).is_ok());
///
/// let failure = evaluate(&rule, &json!("")).unwrap_err();
/// assert_eq!(failure.message, "[name] must not be empty");
/// ```
pub fn evaluate(rule: &RuleDescriptor, value: &Value) -> Result<(), ValidationFailure> {
    let name = &rule.name;

    if rule.required {
        ensure(
            !value.is_null(),
            format!("[{}] is a required parameter", name),
        )?;
    }

    if rule.not_null {
        let empty = value.is_null() || matches!(value, Value::String(text) if text.is_empty());
        ensure(!empty, format!("[{}] must not be empty", name))?;
    }

    if let Some(max_length) = rule.max_length {
        ensure(
            max_length > length_of(value),
            format!(
                "[{}] length is out of range, maximum length is [{}]",
                name, max_length
            ),
        )?;
    }

    if let Some(min_length) = rule.min_length {
        ensure(
            min_length < length_of(value),
            format!(
                "[{}] length is out of range, minimum length is [{}]",
                name, min_length
            ),
        )?;
    }

    if let Some(regex) = rule.regex.regex() {
        ensure(
            regex.is_match(&string_of(value)),
            format!("parameter [{}] does not satisfy the required format", name),
        )?;
    }

    Ok(())
}
