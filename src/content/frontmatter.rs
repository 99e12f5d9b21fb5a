//! Front-matter extraction and field lookup

use indexmap::IndexMap;
use serde_yaml::Value;
use std::path::Path;

use super::markdown::Document;
use crate::error::{PostError, Result};

/// Front-matter fields in source order, each holding one or more string values
pub type Metadata = IndexMap<String, FieldValues>;

/// Values of a single front-matter field
///
/// A scalar becomes a one-element list, a sequence keeps every scalar element
/// in order and `null` is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(pub Vec<String>);

impl FieldValues {
    /// Convert a YAML value, `None` for mappings and tagged values
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Sequence(items) => Some(Self(
                items.into_iter().filter_map(scalar_to_string).collect(),
            )),
            Value::Null => Some(Self::default()),
            other => scalar_to_string(other).map(|s| Self(vec![s])),
        }
    }

    /// First value, the only one consulted for scalar fields
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Text of a YAML scalar
///
/// Numbers go through `serde_yaml::Number` so `1.0` keeps its decimal point.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract the front-matter mapping of a parsed document
///
/// A document without a metadata block, or with an empty one, yields an empty
/// mapping. Fields holding nested mappings are skipped. YAML errors are
/// reported against `path`.
pub fn extract_metadata(document: &Document, path: &Path) -> Result<Metadata> {
    let Some(yaml) = document.front_matter() else {
        return Ok(Metadata::new());
    };

    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let raw = serde_yaml::from_str::<IndexMap<String, Value>>(&yaml).map_err(|source| {
        PostError::FrontMatter {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut metadata = Metadata::with_capacity(raw.len());
    for (field, value) in raw {
        match FieldValues::from_value(value) {
            Some(values) => {
                metadata.insert(field, values);
            }
            None => tracing::debug!("Skipping non-scalar front-matter field '{}'", field),
        }
    }
    Ok(metadata)
}

/// First value of `field`, or `default` when the field is absent or empty
pub fn get_or_default(metadata: &Metadata, field: &str, default: &str) -> String {
    metadata
        .get(field)
        .and_then(FieldValues::first)
        .unwrap_or(default)
        .to_string()
}

/// All values of `field`, or `default` unmodified when the field is absent
pub fn get_list_or_default(metadata: &Metadata, field: &str, default: &[String]) -> Vec<String> {
    metadata
        .get(field)
        .map(|values| values.as_slice().to_vec())
        .unwrap_or_else(|| default.to_vec())
}
