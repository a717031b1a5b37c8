//! Generic structural deep merge over JSON values.
//!
//! Used wherever two partial keyed structures (package manifests, template
//! module fragments) must be combined non-destructively:
//!
//! - arrays merge as an order-preserving union: target items keep their
//!   original order, then source items not already present are appended;
//! - objects recurse, with a missing or non-object target side treated as
//!   empty;
//! - everything else (scalars, null) is overwritten by the source.
//!
//! Merging the same source twice is a no-op after the first application.
//! Merging two different sources in sequence equals a single combined pass
//! in that order; scalar conflicts are won by the later source.

use serde_json::Value;

/// Merge `source` into `target`, mutating `target` in place.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(source_map) = source else {
        *target = source.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    let target_map = target.as_object_mut().expect("target coerced to object");

    for (key, value) in source_map {
        match value {
            Value::Array(items) => {
                let combined = match target_map.get(key) {
                    Some(Value::Array(existing)) => {
                        let mut combined = existing.clone();
                        for item in items {
                            if !combined.contains(item) {
                                combined.push(item.clone());
                            }
                        }
                        combined
                    }
                    _ => items.clone(),
                };
                target_map.insert(key.clone(), Value::Array(combined));
            }
            Value::Object(_) => {
                let entry = target_map
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
                deep_merge(entry, value);
            }
            other => {
                target_map.insert(key.clone(), other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_source_overwrites() {
        let mut target = json!({"version": "1.0.0", "private": false});
        deep_merge(&mut target, &json!({"version": "2.0.0"}));
        assert_eq!(target, json!({"version": "2.0.0", "private": false}));
    }

    #[test]
    fn arrays_union_preserving_target_order() {
        let mut target = json!({"keywords": ["cli", "tool"]});
        deep_merge(&mut target, &json!({"keywords": ["tool", "generator"]}));
        assert_eq!(target["keywords"], json!(["cli", "tool", "generator"]));
    }

    #[test]
    fn array_replaces_non_array_target() {
        let mut target = json!({"files": "dist"});
        deep_merge(&mut target, &json!({"files": ["dist", "README.md"]}));
        assert_eq!(target["files"], json!(["dist", "README.md"]));
    }

    #[test]
    fn nested_objects_recurse() {
        let mut target = json!({"scripts": {"build": "tsc", "test": "jest"}});
        deep_merge(
            &mut target,
            &json!({"scripts": {"test": "vitest", "lint": "eslint ."}}),
        );
        assert_eq!(
            target["scripts"],
            json!({"build": "tsc", "test": "vitest", "lint": "eslint ."})
        );
    }

    #[test]
    fn non_object_target_side_treated_as_empty() {
        let mut target = json!({"exports": "./index.js"});
        deep_merge(&mut target, &json!({"exports": {".": "./dist/index.js"}}));
        assert_eq!(target["exports"], json!({".": "./dist/index.js"}));
    }

    #[test]
    fn merge_is_idempotent() {
        let source = json!({
            "scripts": {"build": "tsc"},
            "keywords": ["a", "b"],
            "version": "1.2.3"
        });
        let mut once = json!({"keywords": ["b", "c"], "name": "pkg"});
        deep_merge(&mut once, &source);
        let mut twice = once.clone();
        deep_merge(&mut twice, &source);
        assert_eq!(once, twice);
    }

    #[test]
    fn sequencing_equals_combined_pass_in_order() {
        let first = json!({"scripts": {"a": "1"}, "version": "1.0.0"});
        let second = json!({"scripts": {"b": "2"}, "version": "2.0.0"});

        let mut sequential = json!({});
        deep_merge(&mut sequential, &first);
        deep_merge(&mut sequential, &second);

        let mut combined = first.clone();
        deep_merge(&mut combined, &second);
        let mut target = json!({});
        deep_merge(&mut target, &combined);

        assert_eq!(sequential, target);
        // Later source wins conflicting scalars.
        assert_eq!(sequential["version"], "2.0.0");
    }
}
