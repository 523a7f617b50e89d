//! Per-row extension points
//!
//! `RowHook` produces extra markup around a row; `RowOptions` supplies the
//! caller's own attributes for the row element itself.

use std::fmt;

use serde_json::Value;

use crate::domain::entities::Record;
use crate::html::Attributes;

/// Markup emitted before or after a data row
///
/// Called with the record, its data-source key and its position in the
/// linearized sequence. `None` or an empty string emits nothing.
pub trait RowHook: Send + Sync {
    fn render(&self, record: &Record, key: &Value, index: usize) -> Option<String>;
}

impl<F> RowHook for F
where
    F: Fn(&Record, &Value, usize) -> Option<String> + Send + Sync,
{
    fn render(&self, record: &Record, key: &Value, index: usize) -> Option<String> {
        self(record, key, index)
    }
}

type RowOptionsFn = dyn Fn(&Record, &Value, usize) -> Attributes + Send + Sync;

/// Caller-supplied attributes for each `<tr>`
#[derive(Default)]
pub enum RowOptions {
    #[default]
    None,
    /// Same attributes on every row
    Static(Attributes),
    /// Attributes computed per row
    Dynamic(Box<RowOptionsFn>),
}

impl RowOptions {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Record, &Value, usize) -> Attributes + Send + Sync + 'static,
    {
        RowOptions::Dynamic(Box::new(f))
    }

    pub fn resolve(&self, record: &Record, key: &Value, index: usize) -> Attributes {
        match self {
            RowOptions::None => Attributes::new(),
            RowOptions::Static(attrs) => attrs.clone(),
            RowOptions::Dynamic(f) => f(record, key, index),
        }
    }
}

impl fmt::Debug for RowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOptions::None => f.write_str("RowOptions::None"),
            RowOptions::Static(attrs) => f.debug_tuple("RowOptions::Static").field(attrs).finish(),
            RowOptions::Dynamic(_) => f.write_str("RowOptions::Dynamic(..)"),
        }
    }
}

impl From<Attributes> for RowOptions {
    fn from(attrs: Attributes) -> Self {
        RowOptions::Static(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn closures_are_row_hooks() {
        let hook = |_: &Record, key: &Value, index: usize| Some(format!("<!-- {key} at {index} -->"));
        let record = Record::new();
        assert_eq!(
            RowHook::render(&hook, &record, &json!(4), 2),
            Some("<!-- 4 at 2 -->".to_string())
        );
    }

    #[test]
    fn row_hook_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn RowHook) {}
    }

    #[test]
    fn static_options_are_cloned_per_row() {
        let options = RowOptions::from(Attributes::new().with("class", "row"));
        let record = Record::new();
        assert_eq!(
            options.resolve(&record, &json!(1), 0).get("class"),
            Some("row")
        );
    }

    #[test]
    fn dynamic_options_see_the_row() {
        let options = RowOptions::dynamic(|record, _, index| {
            let mut attrs = Attributes::new().with("data-index", index.to_string());
            if record.field("warn").is_some() {
                attrs.add_class("warning");
            }
            attrs
        });
        let record = Record::new().with("warn", true);
        let attrs = options.resolve(&record, &json!(1), 5);
        assert_eq!(attrs.get("data-index"), Some("5"));
        assert!(attrs.has_class("warning"));
    }
}
