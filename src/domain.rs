use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// One data row exactly as parsed from the input file: field name mapped
/// to the raw string value. Keys are the header's column names; a row
/// shorter than the header simply lacks the trailing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Build a record from (column, value) pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// An individual annotator judgment that passed the confidence check,
/// with its score parsed into a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcceptedAnnotation {
    pub text: String,
    pub annotator_id: Option<String>,
    pub label: String,
    pub confidence_score: f64,
}

/// A text sample whose high-confidence annotations all carry one label.
/// Serialized as one compact JSON object per line of the clean dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgreedSample {
    pub text: String,
    pub label: String,
}

/// A text sample whose high-confidence annotations conflict. The label
/// set is kept in a `BTreeSet` so serialization order is deterministic
/// and lexicographically sorted. Always holds at least two labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub text: String,
    pub labels: BTreeSet<String>,
}
