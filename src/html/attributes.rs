//! Ordered HTML attribute sets
//!
//! `class` and `style` are merged token-wise rather than overwritten, so a
//! caller's row options and the tree markers can coexist on one element.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::value_objects::key_text;

/// Attributes rendered first, in this order; the rest keep insertion order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "srcset", "form", "action", "method",
    "selected", "checked", "readonly", "disabled", "multiple", "size", "maxlength", "width",
    "height", "rows", "cols", "alt", "title", "rel", "media",
];

/// Insertion-ordered set of HTML attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing any previous value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// CSS classes currently set, in order
    pub fn classes(&self) -> Vec<&str> {
        self.get("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// Append one or more whitespace-separated classes, skipping duplicates
    pub fn add_class(&mut self, class: &str) {
        let mut classes: Vec<String> = self.classes().into_iter().map(String::from).collect();
        for token in class.split_whitespace() {
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
        if !classes.is_empty() {
            self.set("class", classes.join(" "));
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        let remaining: Vec<&str> = self
            .classes()
            .into_iter()
            .filter(|c| *c != class)
            .collect();
        if remaining.is_empty() {
            self.remove("class");
        } else {
            let joined = remaining.join(" ");
            self.set("class", joined);
        }
    }

    /// Style declarations currently set, in order
    pub fn styles(&self) -> Vec<(String, String)> {
        self.get("style").map(parse_style).unwrap_or_default()
    }

    /// Set one style property, keeping the other declarations
    pub fn add_style(&mut self, property: &str, value: &str) {
        let mut styles = self.styles();
        let property = property.trim().to_string();
        let value = value.trim().to_string();
        match styles.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => styles.push((property, value)),
        }
        self.set("style", render_style(&styles));
    }

    /// Merge a `prop: value; ...` declaration string
    pub fn add_style_str(&mut self, css: &str) {
        for (property, value) in parse_style(css) {
            self.add_style(&property, &value);
        }
    }

    /// Merge another set on top of this one
    ///
    /// Classes and styles accumulate; every other attribute is overwritten.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            match name {
                "class" => self.add_class(value),
                "style" => self.add_style_str(value),
                _ => self.set(name, value),
            }
        }
    }

    /// Render as ` name="value"` pairs with escaped values
    pub fn render(&self) -> String {
        let mut ordered: Vec<&(String, String)> = Vec::with_capacity(self.entries.len());
        for name in ATTRIBUTE_ORDER {
            if let Some(entry) = self.entries.iter().find(|(n, _)| n == name) {
                ordered.push(entry);
            }
        }
        for entry in &self.entries {
            if !ATTRIBUTE_ORDER.contains(&entry.0.as_str()) {
                ordered.push(entry);
            }
        }

        let mut out = String::new();
        for (name, value) in ordered {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&super::encode(value));
            out.push('"');
        }
        out
    }
}

fn parse_style(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some((property.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn render_style(styles: &[(String, String)]) -> String {
    styles
        .iter()
        .map(|(p, v)| format!("{}: {};", p, v))
        .collect::<Vec<_>>()
        .join(" ")
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a table of HTML attributes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
        let mut attrs = Attributes::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            attrs.set(name, key_text(&value));
        }
        Ok(attrs)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}
