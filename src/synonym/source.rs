//! Raw synonym sources and JSON loading.
//!
//! Two logical shapes are accepted and normalize to the same dictionary:
//!
//! ```json
//! [
//!   ["phone", "telephone", "мобильный"],
//!   ["air pods", "airpods", "earbuds"]
//! ]
//! ```
//!
//! ```json
//! {
//!   "phone": ["telephone", "мобильный"],
//!   "air pods": ["airpods", "earbuds"]
//! }
//! ```
//!
//! In the map shape the key is the canonical term and is implicitly the first
//! member of its group. Key order in the document is preserved.
//! Terms containing a double quote are rejected.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SynonymError};

/// Synonym data as supplied by configuration, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSynonyms {
    /// A list of groups; no member is privileged.
    Groups(Vec<Vec<String>>),
    /// Canonical term to its alternate forms, in document order.
    Canonical(Vec<(String, Vec<String>)>),
}

impl RawSynonyms {
    /// Parse a JSON document in either accepted shape.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| SynonymError::load(format!("Failed to parse synonym JSON: {e}")))?;
        Self::from_json_value(value)
    }

    /// Parse JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| SynonymError::load(format!("Failed to parse synonym JSON: {e}")))?;
        Self::from_json_value(value)
    }

    /// Read and parse a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynonymError::load(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content).map_err(|e| match e {
            SynonymError::Load(msg) => SynonymError::load(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Convert an already parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(groups) => groups
                .into_iter()
                .enumerate()
                .map(|(index, group)| match group {
                    Value::Array(terms) => string_list(terms, &format!("group {index}")),
                    other => Err(SynonymError::load(format!(
                        "group {index} must be an array of strings, found {}",
                        kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(RawSynonyms::Groups),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(canonical, alternates)| {
                    if canonical.contains('"') {
                        return Err(SynonymError::load(format!(
                            "entry {canonical:?} must not contain a double quote"
                        )));
                    }
                    match alternates {
                        Value::Array(terms) => {
                            let terms = string_list(terms, &format!("entry '{canonical}'"))?;
                            Ok((canonical, terms))
                        }
                        Value::Null => Ok((canonical, Vec::new())),
                        other => Err(SynonymError::load(format!(
                            "entry '{canonical}' must be an array of strings, found {}",
                            kind(&other)
                        ))),
                    }
                })
                .collect::<Result<Vec<_>>>()
                .map(RawSynonyms::Canonical),
            other => Err(SynonymError::load(format!(
                "synonym source must be an array of groups or an object of canonical terms, found {}",
                kind(&other)
            ))),
        }
    }

    /// Flatten either shape into ordered groups.
    ///
    /// For the canonical shape the key becomes the first member.
    pub fn into_groups(self) -> Vec<Vec<String>> {
        match self {
            RawSynonyms::Groups(groups) => groups,
            RawSynonyms::Canonical(entries) => entries
                .into_iter()
                .map(|(canonical, alternates)| {
                    let mut group = Vec::with_capacity(alternates.len() + 1);
                    group.push(canonical);
                    group.extend(alternates);
                    group
                })
                .collect(),
        }
    }

    /// Number of raw groups or entries.
    pub fn len(&self) -> usize {
        match self {
            RawSynonyms::Groups(groups) => groups.len(),
            RawSynonyms::Canonical(entries) => entries.len(),
        }
    }

    /// Check if the source declares no groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn string_list(values: Vec<Value>, context: &str) -> Result<Vec<String>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::String(term) if term.contains('"') => Err(SynonymError::load(format!(
                "{context}: member {index} {term:?} must not contain a double quote"
            ))),
            Value::String(term) => Ok(term),
            other => Err(SynonymError::load(format!(
                "{context}: member {index} must be a string, found {}",
                kind(&other)
            ))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
