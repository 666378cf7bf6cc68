//! Parsed configuration model: sections of key/value fields.
//!
//! Lookups are total. A missing section resolves to an empty [`Section`] and a
//! missing key resolves to an empty [`Field`], so callers can chain
//! `config.section("db").field("port").as_i64()` without checking each step.

use std::collections::BTreeMap;
use std::fmt;

static EMPTY_SECTION: Section = Section {
    name: String::new(),
    fields: BTreeMap::new(),
};

static EMPTY_FIELD: Field = Field {
    key: String::new(),
    value: String::new(),
};

/// All sections read from one INI source, keyed by section name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    sections: BTreeMap<String, Section>,
}

impl Configuration {
    pub(crate) fn from_sections(sections: BTreeMap<String, Section>) -> Self {
        Self { sections }
    }

    /// Look up a section. Returns an empty section when `name` is absent.
    pub fn section(&self, name: &str) -> &Section {
        self.sections.get(name).unwrap_or(&EMPTY_SECTION)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in sorted order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A named group of fields delimited by a `[name]` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    name: String,
    fields: BTreeMap<String, Field>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Insert a field, returning the one it replaced if the key was already set.
    pub(crate) fn insert(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.key.clone(), field)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field. Returns an empty field when `key` is absent.
    pub fn field(&self, key: &str) -> &Field {
        self.fields.get(key).unwrap_or(&EMPTY_FIELD)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One `key=value` pair. Values are stored raw and converted on access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    pub(crate) fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_string(&self) -> String {
        self.value.clone()
    }

    /// Base-10 integer value, or 0 if the value does not parse.
    pub fn as_i64(&self) -> i64 {
        self.value.parse().unwrap_or(0)
    }

    /// Floating point value, or 0.0 if the value does not parse.
    pub fn as_f64(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }

    /// Boolean value: `true`, `yes`, `on` and `1` (any case) are true,
    /// everything else is false.
    pub fn as_bool(&self) -> bool {
        parse_bool(&self.value).unwrap_or(false)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
