// SPDX-License-Identifier: MIT

//! Evaluation context: the merged drivers, answers and metrics

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat mapping from variable name to value, built per evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    fields: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty Context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge two mappings into a new Context; `overlay` wins on key collision
    pub fn merged(base: &Context, overlay: &Context) -> Self {
        let mut ctx = base.clone();
        ctx.extend(overlay);
        ctx
    }

    /// Insert or overwrite a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Copy every field of `other` into self, overwriting existing keys
    pub fn extend(&mut self, other: &Context) {
        for (k, v) in &other.fields {
            self.fields.insert(k.clone(), v.clone());
        }
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field as a number; booleans and strings are not numbers
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    /// Get a field as a number, falling back to `default` when absent
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.number(key).unwrap_or(default)
    }

    /// Get a field as a string slice
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Replace numeric-looking strings (`"50"`, `"-3.5"`) with numbers
    pub fn normalized(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => numeric_string(s).unwrap_or_else(|| v.clone()),
                    other => other.clone(),
                };
                (k.clone(), value)
            })
            .collect();
        Self { fields }
    }

    /// Convert context to JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn numeric_string(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    let digits_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
    if trimmed.is_empty() || !digits_only || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let n = trimmed.parse::<f64>().ok()?;
    serde_json::Number::from_f64(n).map(Value::Number)
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
