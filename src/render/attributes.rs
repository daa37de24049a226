use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// SVG attribute dictionary.
///
/// `IndexMap` is used to preserve insertion order so rendered markup is stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    entries: IndexMap<String, String>,
}

impl AttributeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn stroke(self, value: impl Into<String>) -> Self {
        self.with("stroke", value)
    }

    #[must_use]
    pub fn stroke_width(self, value: impl Into<String>) -> Self {
        self.with("stroke-width", value)
    }

    #[must_use]
    pub fn fill(self, value: impl Into<String>) -> Self {
        self.with("fill", value)
    }

    #[must_use]
    pub fn class_name(self, value: impl Into<String>) -> Self {
        self.with("class", value)
    }

    #[must_use]
    pub fn style(self, value: impl Into<String>) -> Self {
        self.with("style", value)
    }

    #[must_use]
    pub fn text_anchor(self, value: impl Into<String>) -> Self {
        self.with("text-anchor", value)
    }

    #[must_use]
    pub fn transform(self, value: impl Into<String>) -> Self {
        self.with("transform", value)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Layers this set over `defaults`: default keys keep their position,
    /// caller-supplied values win.
    #[must_use]
    pub fn merged_over(&self, defaults: &AttributeSet) -> AttributeSet {
        let mut merged = defaults.clone();
        for (key, value) in &self.entries {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Renders `key="value"` pairs joined by single spaces.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
