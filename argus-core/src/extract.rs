// Argument extraction: turning one marked parameter into evaluated fields

use crate::{describe, evaluate, Error, RuleDescriptor};
use serde_json::Value;

/// How one call parameter participates in validation.
///
/// A parameter carries zero or more markers; each is processed
/// independently, in declaration order.
#[derive(Debug, Clone)]
pub enum Marker {
    /// The parameter itself carries the rules
    Field(RuleDescriptor),

    /// The parameter is a composite object whose fields are described by a
    /// registered type descriptor
    Entity { descriptor: String },

    /// The parameter is an ordered string-keyed map; keys are matched
    /// against the fields of the listed type descriptors
    RequestMap { descriptors: Vec<String> },
}

/// Validate one parameter value against all of its markers.
///
/// Each extracted field is evaluated as soon as it is produced, so the
/// first failure aborts extraction of everything after it.
pub fn verify_parameter(markers: &[Marker], value: &Value) -> Result<(), Error> {
    for marker in markers {
        apply(marker, value)?;
    }
    Ok(())
}

fn apply(marker: &Marker, value: &Value) -> Result<(), Error> {
    match marker {
        Marker::Field(rule) => Ok(evaluate(rule, value)?),
        Marker::Entity { descriptor } => verify_entity(descriptor, value),
        Marker::RequestMap { descriptors } => verify_map(descriptors, value),
    }
}

/// Walk the descriptor's fields in declaration order, reading each
/// same-named member out of the value. A missing member reads as null.
fn verify_entity(descriptor: &str, value: &Value) -> Result<(), Error> {
    let ty = describe::lookup(descriptor)?;
    for rule in ty.fields() {
        match value.get(rule.name.as_str()) {
            Some(member) => evaluate(rule, member)?,
            None => evaluate(rule, &Value::Null)?,
        }
    }
    Ok(())
}

/// Match map keys against the fields of every listed descriptor. Keys with
/// no matching field are ignored; the same field name listed by two
/// descriptors is matched independently by each.
fn verify_map(descriptors: &[String], value: &Value) -> Result<(), Error> {
    // Only map-shaped values are inspected; anything else is skipped
    let Some(map) = value.as_object() else {
        return Ok(());
    };
    for name in descriptors {
        let ty = describe::lookup(name)?;
        for rule in ty.fields() {
            if let Some(entry) = map.get(&rule.name) {
                evaluate(rule, entry)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{describe, RegexChoice, TypeDescriptor};
    use serde_json::json;

    #[test]
    fn test_field_marker_validates_raw_value() {
        let marker = Marker::Field(RuleDescriptor::new("id").min_length(2));
        assert!(verify_parameter(&[marker.clone()], &json!("abc")).is_ok());
        assert!(verify_parameter(&[marker], &json!("ab")).is_err());
    }

    #[test]
    fn test_entity_marker_walks_registered_fields() {
        describe::register(
            TypeDescriptor::new("tests.extract.User")
                .field(RuleDescriptor::new("name"))
                .field(RuleDescriptor::new("email").regex(RegexChoice::Email)),
        );
        let marker = Marker::Entity {
            descriptor: "tests.extract.User".to_string(),
        };

        let ok = json!({"name": "alice", "email": "a@b.com"});
        assert!(verify_parameter(std::slice::from_ref(&marker), &ok).is_ok());

        let bad = json!({"name": "alice", "email": "nope"});
        let err = verify_parameter(std::slice::from_ref(&marker), &bad).unwrap_err();
        assert_eq!(
            err.as_failure().unwrap().message,
            "parameter [email] does not satisfy the required format"
        );
    }

    #[test]
    fn test_entity_marker_missing_member_reads_as_null() {
        describe::register(
            TypeDescriptor::new("tests.extract.Strict").field(RuleDescriptor::new("token")),
        );
        let marker = Marker::Entity {
            descriptor: "tests.extract.Strict".to_string(),
        };
        let err = verify_parameter(&[marker], &json!({})).unwrap_err();
        assert_eq!(
            err.as_failure().unwrap().message,
            "[token] is a required parameter"
        );
    }

    #[test]
    fn test_entity_marker_unknown_descriptor_is_fatal() {
        let marker = Marker::Entity {
            descriptor: "tests.extract.Unknown".to_string(),
        };
        let err = verify_parameter(&[marker], &json!({})).unwrap_err();
        assert!(matches!(err, Error::DescriptorNotFound(_)));
    }

    #[test]
    fn test_map_marker_matches_keys_against_descriptors() {
        describe::register(
            TypeDescriptor::new("tests.extract.AgeForm")
                .field(RuleDescriptor::new("age").max_length(1)),
        );
        let marker = Marker::RequestMap {
            descriptors: vec!["tests.extract.AgeForm".to_string()],
        };

        // "10" has length 2, the exclusive bound 1 rejects it
        assert!(verify_parameter(std::slice::from_ref(&marker), &json!({"age": "10"})).is_err());
        // length 1 equals the bound and the exclusive comparison rejects it too
        assert!(verify_parameter(std::slice::from_ref(&marker), &json!({"age": "5"})).is_err());

        describe::register(
            TypeDescriptor::new("tests.extract.WideAgeForm")
                .field(RuleDescriptor::new("age").max_length(2)),
        );
        let wide = Marker::RequestMap {
            descriptors: vec!["tests.extract.WideAgeForm".to_string()],
        };
        assert!(verify_parameter(&[wide], &json!({"age": "5"})).is_ok());
    }

    #[test]
    fn test_map_marker_ignores_unmatched_keys() {
        describe::register(
            TypeDescriptor::new("tests.extract.NameForm").field(RuleDescriptor::new("name")),
        );
        let marker = Marker::RequestMap {
            descriptors: vec!["tests.extract.NameForm".to_string()],
        };
        // "extra" has no matching field, so its empty value is not checked
        let map = json!({"name": "bob", "extra": ""});
        assert!(verify_parameter(&[marker], &map).is_ok());
    }

    #[test]
    fn test_map_marker_skips_non_map_values() {
        let marker = Marker::RequestMap {
            descriptors: vec!["tests.extract.NeverResolved".to_string()],
        };
        assert!(verify_parameter(&[marker], &json!("not a map")).is_ok());
    }

    #[test]
    fn test_map_marker_duplicate_field_names_match_independently() {
        describe::register(
            TypeDescriptor::new("tests.extract.Loose")
                .field(RuleDescriptor::new("code").max_length(10)),
        );
        describe::register(
            TypeDescriptor::new("tests.extract.Tight")
                .field(RuleDescriptor::new("code").max_length(3)),
        );
        let marker = Marker::RequestMap {
            descriptors: vec![
                "tests.extract.Loose".to_string(),
                "tests.extract.Tight".to_string(),
            ],
        };
        // Passes the loose rule, then fails the tight one for the same key
        let err = verify_parameter(&[marker], &json!({"code": "abcd"})).unwrap_err();
        assert!(err.as_failure().unwrap().message.contains("maximum length is [3]"));
    }

    #[test]
    fn test_markers_processed_in_declaration_order() {
        let first = Marker::Field(RuleDescriptor::new("first").min_length(10));
        let second = Marker::Field(RuleDescriptor::new("second").min_length(10));
        let err = verify_parameter(&[first, second], &json!("short")).unwrap_err();
        assert!(err.as_failure().unwrap().message.starts_with("[first]"));
    }

    #[test]
    fn test_unmarked_parameter_is_never_inspected() {
        assert!(verify_parameter(&[], &Value::Null).is_ok());
    }
}
