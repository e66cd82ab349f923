//! Structural comparison of scene records.
//!
//! Two records are equivalent when every field that is set on either side
//! agrees, after dropping the fields an [`ExclusionPolicy`] names. A field
//! that is `null` counts as unset, so `{"title": null}` and `{}` are equal
//! while `{"title": "A"}` and `{}` are not.
//!
//! Sub-records (such as `movie`) are taken out of the root comparison and
//! compared on their own, with the same null handling one level down. A
//! sub-record that is set on one side only is a single difference at the
//! sub-record's path.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use sr_core::{Error, Result, SceneData};

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which fields to leave out of a comparison.
///
/// Ignored fields are dotted paths (`"movie.synopsis"`). Sub-records are
/// root-level keys whose object values are compared field by field instead
/// of as a whole.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    ignored: BTreeSet<String>,
    records: BTreeSet<String>,
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy for [`SceneData`]: file paths depend on where the library is
    /// mounted and movie synopses are free text.
    pub fn scene_data() -> Self {
        Self::new()
            .ignore("original_filenames")
            .ignore("movie.synopsis")
            .record("movie")
    }

    pub fn ignore(mut self, path: impl Into<String>) -> Self {
        self.ignored.insert(path.into());
        self
    }

    pub fn record(mut self, key: impl Into<String>) -> Self {
        self.records.insert(key.into());
        self
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored.contains(path)
    }

    /// Compare two root maps under this policy.
    pub fn diff(&self, expected: &Map<String, Value>, actual: &Map<String, Value>) -> SceneComparison {
        let mut differences = Vec::new();

        compare_fields(
            "",
            self.filtered(expected, ""),
            self.filtered(actual, ""),
            &mut differences,
        );

        for key in &self.records {
            let e = expected.get(key).filter(|v| !v.is_null());
            let a = actual.get(key).filter(|v| !v.is_null());
            match (e, a) {
                (None, None) => {}
                (Some(Value::Object(e)), Some(Value::Object(a))) => compare_fields(
                    key,
                    self.filtered(e, key),
                    self.filtered(a, key),
                    &mut differences,
                ),
                (e, a) => {
                    if e != a {
                        differences.push(Difference::new(key.clone(), e.cloned(), a.cloned()));
                    }
                }
            }
        }

        SceneComparison { differences }
    }

    /// Drop ignored paths, null values, and (at the root) sub-records.
    fn filtered<'a>(&self, map: &'a Map<String, Value>, prefix: &str) -> BTreeMap<&'a str, &'a Value> {
        map.iter()
            .filter(|(key, value)| {
                !value.is_null()
                    && !self.is_ignored(&join(prefix, key))
                    && !(prefix.is_empty() && self.records.contains(key.as_str()))
            })
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

fn compare_fields(
    prefix: &str,
    expected: BTreeMap<&str, &Value>,
    actual: BTreeMap<&str, &Value>,
    out: &mut Vec<Difference>,
) {
    let keys: BTreeSet<&str> = expected.keys().chain(actual.keys()).copied().collect();
    for key in keys {
        let e = expected.get(key).copied();
        let a = actual.get(key).copied();
        if e != a {
            out.push(Difference::new(join(prefix, key), e.cloned(), a.cloned()));
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// One field that differs. `None` means the field was unset on that side.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub path: String,
    pub expected: Option<Value>,
    pub actual: Option<Value>,
}

impl Difference {
    fn new(path: String, expected: Option<Value>, actual: Option<Value>) -> Self {
        Self {
            path,
            expected,
            actual,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(value: &Option<Value>) -> String {
            value
                .as_ref()
                .map_or_else(|| "<unset>".to_owned(), Value::to_string)
        }
        write!(
            f,
            "{}: expected {}, got {}",
            self.path,
            side(&self.expected),
            side(&self.actual)
        )
    }
}

/// Outcome of comparing two records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneComparison {
    differences: Vec<Difference>,
}

impl SceneComparison {
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Paths of the differing fields, in report order.
    pub fn paths(&self) -> Vec<&str> {
        self.differences.iter().map(|d| d.path.as_str()).collect()
    }
}

impl fmt::Display for SceneComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "scene records match");
        }
        write!(
            f,
            "scene records differ in {} field(s):",
            self.differences.len()
        )?;
        for difference in &self.differences {
            write!(f, "\n  {difference}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compare two scene records under [`ExclusionPolicy::scene_data`].
pub fn compare_scene_data(expected: &SceneData, actual: &SceneData) -> SceneComparison {
    ExclusionPolicy::scene_data().diff(&scene_map(expected), &scene_map(actual))
}

/// Compare two JSON values that must each be a valid [`SceneData`].
///
/// Fails with [`Error::InvalidArgument`] naming the first offending
/// parameter before any field is compared. The comparison itself runs on
/// the values as given, so a `null` field and a missing field are
/// indistinguishable.
pub fn compare_scene_json(expected: &Value, actual: &Value) -> Result<SceneComparison> {
    let expected = scene_guard("expected", expected)?;
    let actual = scene_guard("actual", actual)?;
    Ok(ExclusionPolicy::scene_data().diff(expected, actual))
}

/// Panic with a field-level report unless the records are equivalent.
#[track_caller]
pub fn assert_scene_data_eq(expected: &SceneData, actual: &SceneData) {
    let comparison = compare_scene_data(expected, actual);
    if !comparison.is_match() {
        panic!("{comparison}");
    }
}

/// JSON form of [`assert_scene_data_eq`]. Also panics on invalid arguments.
#[track_caller]
pub fn assert_scene_json_eq(expected: &Value, actual: &Value) {
    match compare_scene_json(expected, actual) {
        Ok(comparison) if comparison.is_match() => {}
        Ok(comparison) => panic!("{comparison}"),
        Err(e) => panic!("{e}"),
    }
}

fn scene_map(scene: &SceneData) -> Map<String, Value> {
    match serde_json::to_value(scene) {
        Ok(Value::Object(map)) => map,
        _ => unreachable!("SceneData serializes to a JSON object"),
    }
}

fn scene_guard<'a>(parameter: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    let Value::Object(map) = value else {
        return Err(Error::invalid_argument(
            parameter,
            json_type(value),
            "not a JSON object",
        ));
    };
    SceneData::deserialize(value)
        .map_err(|e| Error::invalid_argument(parameter, json_type(value), e))?;
    Ok(map)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
