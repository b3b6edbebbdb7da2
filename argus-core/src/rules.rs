// Declarative per-field validation rules

use crate::RegexChoice;

/// The validation rules attached to one field or parameter declaration.
///
/// Built once at declaration time and immutable afterwards. Length bounds
/// default to `None`, meaning the corresponding check is skipped entirely.
///
/// # Examples
///
/// ```
/// use argus_core::{RegexChoice, RuleDescriptor};
///
/// let rule = RuleDescriptor::new("email")
///     .max_length(64)
///     .regex(RegexChoice::Email);
///
/// assert!(rule.required);
/// assert!(rule.not_null);
/// assert_eq!(rule.min_length, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Field name used in failure messages and for map-key matching
    pub name: String,

    /// Fail when the value is absent
    pub required: bool,

    /// Fail when the value is absent or renders as the empty string
    pub not_null: bool,

    /// Exclusive upper length bound; `None` skips the check
    pub max_length: Option<usize>,

    /// Exclusive lower length bound; `None` skips the check
    pub min_length: Option<usize>,

    /// Catalog pattern the value must fully match
    pub regex: RegexChoice,
}

impl RuleDescriptor {
    /// Rules for a named field, with everything but the presence checks off
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            not_null: true,
            max_length: None,
            min_length: None,
            regex: RegexChoice::None,
        }
    }

    /// Toggle the absent-value check
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Toggle the empty-value check
    pub fn not_null(mut self, not_null: bool) -> Self {
        self.not_null = not_null;
        self
    }

    /// Set the exclusive maximum length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the exclusive minimum length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Set the catalog pattern to match
    pub fn regex(mut self, regex: RegexChoice) -> Self {
        self.regex = regex;
        self
    }
}
