//! # Strong Parameters
//!
//! Mass-assignment protection for request bodies. A handler first [`require`]s the resource
//! key, then [`permit`]s the fields its action may assign:
//!
//! ```rust
//! use cat_service::params::{permit, require, RawParams};
//! use serde_json::json;
//!
//! let raw: RawParams = json!({ "cat": { "name": "Tom", "color": "gray", "admin": true } })
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let mut permitted = permit(require(&raw, "cat").unwrap(), &["color"]);
//! assert_eq!(permitted.take("color").as_deref(), Some("gray"));
//! assert_eq!(permitted.take("name"), None);
//! ```
//!
//! Unlisted keys are **dropped, never rejected**: the request goes ahead with whatever was
//! permitted, and the dropped key names are logged at `debug`.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Request parameters as submitted, before any whitelisting.
pub type RawParams = Map<String, Value>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamsError {
    /// The required key is absent, not an object, or an empty object.
    #[error("param is missing or the value is empty: {0}")]
    Missing(String),

    /// The body could not be decoded at all.
    #[error("malformed request body: {0}")]
    Malformed(String),
}

/// Returns the nested object under `key`.
pub fn require<'a>(raw: &'a RawParams, key: &str) -> Result<&'a RawParams, ParamsError> {
    match raw.get(key) {
        Some(Value::Object(scope)) if !scope.is_empty() => Ok(scope),
        _ => Err(ParamsError::Missing(key.to_string())),
    }
}

/// Scalar values that survived [`permit`], keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Permitted {
    values: BTreeMap<String, String>,
}

impl Permitted {
    /// Removes and returns a permitted field.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Keeps only the `allowed` keys of `scope` that hold scalars.
///
/// Strings pass through; numbers and booleans are stringified. Nulls, arrays and nested objects
/// are dropped even for allowed keys, as are all keys outside `allowed`.
pub fn permit(scope: &RawParams, allowed: &[&str]) -> Permitted {
    let mut values = BTreeMap::new();
    let mut dropped = Vec::new();

    for (key, value) in scope {
        let scalar = match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        };
        match scalar {
            Some(v) if allowed.contains(&key.as_str()) => {
                values.insert(key.clone(), v);
            }
            _ => dropped.push(key.as_str()),
        }
    }

    if !dropped.is_empty() {
        debug!(?dropped, "Unpermitted parameters");
    }
    Permitted { values }
}

/// Deepest bracket nesting accepted in a form key (`a[b][c]` is depth 3).
pub const MAX_PARAM_DEPTH: usize = 32;

/// Folds urlencoded pairs with bracket keys into nested params.
///
/// `cat[name]=Tom&cat[color]=gray` becomes `{"cat": {"name": "Tom", "color": "gray"}}`. Keys
/// without brackets stay top-level. A later pair wins over an earlier one for the same key.
/// A key nested deeper than [`MAX_PARAM_DEPTH`] fails the whole body as
/// [`ParamsError::Malformed`].
pub fn from_form_pairs<I>(pairs: I) -> Result<RawParams, ParamsError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut root = RawParams::new();
    for (key, value) in pairs {
        let path = split_key(&key)?;
        insert_path(&mut root, &path, value);
    }
    Ok(root)
}

/// `a[b][c]` -> `["a", "b", "c"]`. Keys with unbalanced brackets are kept whole.
fn split_key(key: &str) -> Result<Vec<&str>, ParamsError> {
    let Some(open) = key.find('[') else {
        return Ok(vec![key]);
    };

    let mut segments = vec![&key[..open]];
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            return Ok(vec![key]);
        };
        if segments.len() == MAX_PARAM_DEPTH {
            return Err(ParamsError::Malformed(format!(
                "form key nested deeper than {MAX_PARAM_DEPTH} levels"
            )));
        }
        segments.push(&inner[..close]);
        rest = &inner[close + 1..];
    }

    if rest.is_empty() && !segments[0].is_empty() {
        Ok(segments)
    } else {
        Ok(vec![key])
    }
}

fn insert_path(map: &mut RawParams, path: &[&str], value: String) {
    match path {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), Value::String(value));
        }
        [head, tail @ ..] => {
            let slot = map
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(RawParams::new()));
            if !slot.is_object() {
                *slot = Value::Object(RawParams::new());
            }
            if let Value::Object(child) = slot {
                insert_path(child, tail, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawParams {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_require_returns_nested_scope() {
        let params = raw(json!({ "cat": { "name": "Tom" } }));
        let scope = require(&params, "cat").unwrap();
        assert_eq!(scope.get("name"), Some(&json!("Tom")));
    }

    #[test]
    fn test_require_rejects_missing_scalar_or_empty_scope() {
        for body in [
            json!({}),
            json!({ "dog": { "name": "Rex" } }),
            json!({ "cat": "Tom" }),
            json!({ "cat": {} }),
        ] {
            assert_eq!(
                require(&raw(body), "cat"),
                Err(ParamsError::Missing("cat".into()))
            );
        }
    }

    #[test]
    fn test_permit_drops_unlisted_keys() {
        let scope = raw(json!({ "name": "Tom", "color": "gray", "id": 99, "owner": "mallory" }));
        let permitted = permit(&scope, &["name", "color"]);

        assert_eq!(permitted.get("name"), Some("Tom"));
        assert_eq!(permitted.get("color"), Some("gray"));
        assert_eq!(permitted.get("id"), None);
        assert_eq!(permitted.get("owner"), None);
    }

    #[test]
    fn test_permit_update_whitelist_excludes_name() {
        let scope = raw(json!({ "name": "Garfield", "color": "black" }));
        let mut permitted = permit(&scope, &["color"]);

        assert_eq!(permitted.take("name"), None);
        assert_eq!(permitted.take("color").as_deref(), Some("black"));
        assert!(permitted.is_empty());
    }

    #[test]
    fn test_permit_only_keeps_scalars() {
        let scope = raw(json!({
            "name": ["Tom", "Jerry"],
            "color": { "primary": "gray" },
            "age": 3,
            "indoor": true,
            "nickname": null,
        }));
        let permitted = permit(&scope, &["name", "color", "age", "indoor", "nickname"]);

        assert_eq!(permitted.get("name"), None);
        assert_eq!(permitted.get("color"), None);
        assert_eq!(permitted.get("nickname"), None);
        assert_eq!(permitted.get("age"), Some("3"));
        assert_eq!(permitted.get("indoor"), Some("true"));
    }

    #[test]
    fn test_from_form_pairs_nests_bracket_keys() {
        let params = from_form_pairs(vec![
            ("cat[name]".to_string(), "Tom".to_string()),
            ("cat[color]".to_string(), "gray".to_string()),
            ("_method".to_string(), "patch".to_string()),
        ])
        .unwrap();

        assert_eq!(
            Value::Object(params),
            json!({ "cat": { "name": "Tom", "color": "gray" }, "_method": "patch" })
        );
    }

    #[test]
    fn test_from_form_pairs_handles_deep_and_malformed_keys() {
        let params = from_form_pairs(vec![
            ("cat[owner][name]".to_string(), "Jon".to_string()),
            ("cat[color".to_string(), "gray".to_string()),
            ("[name]".to_string(), "x".to_string()),
            ("cat[name]tail".to_string(), "y".to_string()),
        ])
        .unwrap();

        assert_eq!(
            Value::Object(params),
            json!({
                "cat": { "owner": { "name": "Jon" } },
                "cat[color": "gray",
                "[name]": "x",
                "cat[name]tail": "y",
            })
        );
    }

    #[test]
    fn test_from_form_pairs_nested_key_replaces_scalar() {
        let params = from_form_pairs(vec![
            ("cat".to_string(), "Tom".to_string()),
            ("cat[name]".to_string(), "Tom".to_string()),
        ])
        .unwrap();
        assert_eq!(Value::Object(params), json!({ "cat": { "name": "Tom" } }));
    }

    #[test]
    fn test_from_form_pairs_depth_limit() {
        let at_limit = format!("cat{}", "[x]".repeat(MAX_PARAM_DEPTH - 1));
        assert!(from_form_pairs(vec![(at_limit, "1".to_string())]).is_ok());

        let too_deep = format!("cat{}", "[x]".repeat(MAX_PARAM_DEPTH));
        assert!(matches!(
            from_form_pairs(vec![(too_deep, "1".to_string())]),
            Err(ParamsError::Malformed(_))
        ));

        let hostile = format!("cat{}", "[x]".repeat(100_000));
        assert!(matches!(
            from_form_pairs(vec![
                ("cat[name]".to_string(), "Tom".to_string()),
                (hostile, "1".to_string()),
            ]),
            Err(ParamsError::Malformed(_))
        ));
    }
}
