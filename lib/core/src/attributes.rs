// Defensive normalization of the listing attribute bag
use serde_json::{Map, Value};

/// Flat typed view over a listing's attributes.
///
/// The raw `attributes` field is never trusted: it may be absent, a
/// JSON-encoded string, or an object, and may nest the real spec bag
/// under a `specs` key. [`AttributeView::resolve`] flattens all of that
/// into one key space and never fails - malformed input yields the
/// empty view.
#[derive(Debug, Clone, Default)]
pub struct AttributeView {
    fields: Map<String, Value>,
}

impl AttributeView {
    /// Empty view - what every malformed input resolves to
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a raw attribute payload into a flat view.
    ///
    /// Strings are JSON-parsed (parse failure gives the empty view),
    /// objects are taken as-is, anything else is treated as absent.
    /// A nested `specs` object is flattened into the top level; on key
    /// collision the `specs` value wins. The input is never mutated.
    #[must_use]
    pub fn resolve(raw: Option<&Value>) -> Self {
        let parsed_owned;
        let value = match raw {
            None => return Self::empty(),
            Some(Value::String(s)) => {
                match serde_json::from_str::<Value>(s) {
                    Ok(v) => {
                        parsed_owned = v;
                        &parsed_owned
                    }
                    Err(_) => return Self::empty(),
                }
            }
            Some(v) => v,
        };

        let obj = match value.as_object() {
            Some(o) => o,
            None => return Self::empty(),
        };

        let mut fields = Map::new();
        for (key, val) in obj {
            if key != "specs" {
                fields.insert(key.clone(), val.clone());
            }
        }
        if let Some(specs) = obj.get("specs").and_then(|v| v.as_object()) {
            for (key, val) in specs {
                fields.insert(key.clone(), val.clone());
            }
        }

        Self { fields }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of a key, if present and a string
    #[inline]
    pub fn str_of(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    /// Numeric value of a key. Lenient: numeric strings like `"3"` or
    /// `"3.5"` parse as numbers, since scraped payloads mix both.
    pub fn f64_of(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Integer value of a key, truncating a fractional part
    #[inline]
    pub fn i64_of(&self, key: &str) -> Option<i64> {
        self.f64_of(key).map(|f| f as i64)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all flattened key/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}
