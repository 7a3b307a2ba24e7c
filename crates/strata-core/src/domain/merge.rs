//! Conservative document patching.
//!
//! [`merge`] folds a patch document into an existing one:
//!
//! - a key missing from the target is inserted;
//! - a scalar in the patch overwrites the target value;
//! - two lists are combined by identity: a patch element is appended only
//!   when no target element carries the same `name`;
//! - two maps are merged recursively.
//!
//! Anything else (a patch container meeting a target value of a different
//! shape) leaves the target untouched. Nothing present in the target is ever
//! removed.
//!
//! Every list reachable from the patch root through map keys must hold maps
//! with a non-empty string `name`. This is checked for the whole patch before
//! the target is touched, so a rejected patch never yields a half-merged
//! document.

use indexmap::map::Entry;
use thiserror::Error;

use crate::domain::{
    DomainError, RelativePath,
    document::{Document, DocumentMap},
};

/// Field that identifies an element of a merged list.
pub const IDENTITY_KEY: &str = "name";

/// Why a patch could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("element {index} of list '{key}' has no non-empty 'name' field")]
    MissingIdentity { key: String, index: usize },

    #[error("cannot merge into a {found}, expected an object")]
    RootNotMap { found: &'static str },
}

impl MergeError {
    /// Attach the file the patch was aimed at.
    pub fn at(self, path: &RelativePath) -> DomainError {
        let path = path.to_string();
        match self {
            Self::MissingIdentity { key, index } => {
                DomainError::MissingIdentity { path, key, index }
            }
            Self::RootNotMap { found } => DomainError::MergeRootNotMap { path, found },
        }
    }
}

/// Merge `source` into `target` and return the new target.
///
/// Both roots must be maps.
pub fn merge(target: Document, source: Document) -> Result<Document, MergeError> {
    let (mut target, source) = match (target, source) {
        (Document::Map(target), Document::Map(source)) => (target, source),
        (Document::Map(_), other) | (other, _) => {
            return Err(MergeError::RootNotMap {
                found: other.kind(),
            });
        }
    };

    check_identities(&source, "")?;
    merge_maps(&mut target, source);
    Ok(Document::Map(target))
}

/// The identity of a list element, if it has a usable one.
pub fn identity_of(element: &Document) -> Option<&str> {
    element
        .get(IDENTITY_KEY)
        .and_then(Document::as_str)
        .filter(|name| !name.is_empty())
}

fn check_identities(map: &DocumentMap, prefix: &str) -> Result<(), MergeError> {
    for (key, value) in map {
        let key_path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Document::List(items) => {
                if let Some(index) = items.iter().position(|e| identity_of(e).is_none()) {
                    return Err(MergeError::MissingIdentity {
                        key: key_path,
                        index,
                    });
                }
            }
            Document::Map(inner) => check_identities(inner, &key_path)?,
            Document::Scalar(_) => {}
        }
    }
    Ok(())
}

fn merge_maps(target: &mut DocumentMap, source: DocumentMap) {
    for (key, incoming) in source {
        match target.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                (existing, incoming @ Document::Scalar(_)) => *existing = incoming,
                (Document::List(items), Document::List(additions)) => {
                    append_missing(items, additions)
                }
                (Document::Map(inner), Document::Map(additions)) => merge_maps(inner, additions),
                // shape mismatch: the user's value stays
                _ => {}
            },
        }
    }
}

fn append_missing(items: &mut Vec<Document>, additions: Vec<Document>) {
    for addition in additions {
        let present = identity_of(&addition)
            .is_some_and(|name| items.iter().any(|e| identity_of(e) == Some(name)));
        if !present {
            items.push(addition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn run(target: Value, source: Value) -> Result<Value, MergeError> {
        merge(Document::from(target), Document::from(source)).map(Value::from)
    }

    #[test]
    fn existing_identity_wins_and_is_not_duplicated() {
        let merged = run(
            json!({"items": [{"name": "A", "x": 2}, {"name": "B"}]}),
            json!({"items": [{"name": "A", "x": 1}]}),
        )
        .unwrap();
        assert_eq!(merged, json!({"items": [{"name": "A", "x": 2}, {"name": "B"}]}));
    }

    #[test]
    fn new_identity_is_appended() {
        let merged = run(
            json!({"items": [{"name": "A"}]}),
            json!({"items": [{"name": "C"}]}),
        )
        .unwrap();
        assert_eq!(merged, json!({"items": [{"name": "A"}, {"name": "C"}]}));
    }

    #[test]
    fn extra_target_keys_survive() {
        let merged = run(
            json!({"version": "1.2.3", "scripts": {"test": "jest"}}),
            json!({"scripts": {"build": "tsc"}}),
        )
        .unwrap();
        assert_eq!(merged["version"], "1.2.3");
        assert_eq!(merged["scripts"]["test"], "jest");
        assert_eq!(merged["scripts"]["build"], "tsc");
    }

    #[test]
    fn scalars_overwrite() {
        let merged = run(
            json!({"scripts": {"build": "old"}}),
            json!({"scripts": {"build": "new"}}),
        )
        .unwrap();
        assert_eq!(merged["scripts"]["build"], "new");
    }

    #[test]
    fn missing_keys_are_inserted_whole() {
        let merged = run(
            json!({}),
            json!({"devDependencies": {"nodemon": "^2.0.20"}}),
        )
        .unwrap();
        assert_eq!(merged, json!({"devDependencies": {"nodemon": "^2.0.20"}}));
    }

    #[test]
    fn list_elements_are_not_deep_merged() {
        let merged = run(
            json!({"configurations": [{"name": "Sim", "args": ["old"]}]}),
            json!({"configurations": [{"name": "Sim", "args": ["new"], "stopAll": true}]}),
        )
        .unwrap();
        assert_eq!(
            merged,
            json!({"configurations": [{"name": "Sim", "args": ["old"]}]})
        );
    }

    #[test]
    fn repeated_identity_in_patch_is_added_once() {
        let merged = run(
            json!({"items": []}),
            json!({"items": [{"name": "A", "v": 1}, {"name": "A", "v": 2}]}),
        )
        .unwrap();
        assert_eq!(merged, json!({"items": [{"name": "A", "v": 1}]}));
    }

    #[test]
    fn missing_name_is_rejected_with_key_path() {
        let err = run(
            json!({"a": {"items": [{"name": "A"}]}}),
            json!({"a": {"items": [{"name": "B"}, {"label": "no name"}]}}),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MergeError::MissingIdentity {
                key: "a.items".into(),
                index: 1
            }
        );
    }

    #[test]
    fn empty_or_non_string_name_is_rejected() {
        assert!(run(json!({}), json!({"l": [{"name": ""}]})).is_err());
        assert!(run(json!({}), json!({"l": [{"name": 7}]})).is_err());
        assert!(run(json!({}), json!({"l": ["bare"]})).is_err());
    }

    #[test]
    fn identity_is_checked_even_when_target_lacks_the_key() {
        let err = run(json!({}), json!({"compounds": [{"stopAll": true}]})).unwrap_err();
        assert!(matches!(err, MergeError::MissingIdentity { index: 0, .. }));
    }

    #[test]
    fn lists_inside_list_elements_are_not_checked() {
        let merged = run(
            json!({}),
            json!({"configurations": [{"name": "Sim", "runtimeArgs": ["-r", "ts-node/register"]}]}),
        )
        .unwrap();
        assert_eq!(merged["configurations"][0]["runtimeArgs"][1], "ts-node/register");
    }

    #[test]
    fn shape_mismatch_keeps_target() {
        let merged = run(
            json!({"env": "production", "files": {"a": 1}}),
            json!({"env": {"NODE_ENV": "dev"}, "files": [{"name": "x"}]}),
        )
        .unwrap();
        assert_eq!(merged, json!({"env": "production", "files": {"a": 1}}));
    }

    #[test]
    fn existing_keys_keep_their_position() {
        let merged = merge(
            Document::parse(r#"{"b": 1, "a": {"y": 1}}"#).unwrap(),
            Document::parse(r#"{"c": 3, "a": {"z": 2}, "b": 2}"#).unwrap(),
        )
        .unwrap();
        assert_eq!(merged.to_string(), r#"{"b":2,"a":{"y":1,"z":2},"c":3}"#);
    }

    #[test]
    fn non_map_roots_are_rejected() {
        assert_eq!(
            run(json!([1, 2]), json!({"a": 1})).unwrap_err(),
            MergeError::RootNotMap { found: "list" }
        );
        assert_eq!(
            run(json!({}), json!("text")).unwrap_err(),
            MergeError::RootNotMap { found: "string" }
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let source = json!({
            "configurations": [{"name": "Sim", "type": "node"}],
            "scripts": {"watch": "yarn watch:sim"}
        });
        let once = run(json!({"version": "0.2.0"}), source.clone()).unwrap();
        let twice = run(once.clone(), source).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn error_lifts_to_domain_error_with_file() {
        let err = MergeError::MissingIdentity {
            key: "configurations".into(),
            index: 0,
        }
        .at(&RelativePath::new(".vscode/launch.json"));
        assert_eq!(
            err.to_string(),
            ".vscode/launch.json: element 0 of list 'configurations' has no non-empty 'name' field"
        );
    }
}
