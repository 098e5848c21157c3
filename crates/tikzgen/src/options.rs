//! Open-ended style-option bags forwarded verbatim to the TikZ serializer.
//!
//! TikZ accepts an essentially unbounded set of `key=value` options on nodes
//! and paths (`fill`, `line width`, `rounded corners`, custom library keys,
//! …). This module makes no attempt to enumerate them: an [`Options`] bag is
//! an insertion-ordered map from option name to a small [`Value`] variant,
//! serialized in insertion order so output stays deterministic. Whether a
//! given name/value is legal TikZ is the compiler's concern, not ours.
//!
//! Option names use `_` in Rust-facing code and are rendered with spaces
//! (`line_width` becomes `line width={…}`), matching TikZ's multi-word keys.
//!
//! # Example
//!
//! ```
//! use tikzgen::options::Options;
//!
//! let mut opts = Options::new();
//! opts.set("fill", "blue!20");
//! opts.set("line_width", 1.5);
//! assert_eq!(opts.to_tikz(), "fill={blue!20}, line width={1.5}");
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// A single option value: string, number, or boolean.
///
/// Values are carried verbatim into the generated markup. Numbers use their
/// shortest decimal form (`3.0` renders as `3`), which matches how TikZ
/// coordinates and dimensions are normally written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag, rendered as `true`/`false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Free-form string, e.g. a color expression like `blue!20`.
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

/// An insertion-ordered bag of TikZ style options.
///
/// Nothing is validated here: names and values pass through to the markup
/// untouched apart from the `_` → space rewrite on names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: IndexMap<String, Value>,
}

impl Options {
    /// Creates an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value under the same name.
    ///
    /// A replaced option keeps its original position in the serialization
    /// order ([`IndexMap`] semantics).
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Returns the value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns `true` if the bag holds no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the bag as a comma-joined TikZ option list (without the
    /// surrounding brackets).
    ///
    /// Each entry becomes `name={value}`, with underscores in the name
    /// rendered as spaces. Values are brace-wrapped so embedded commas
    /// survive the option-list syntax.
    pub fn to_tikz(&self) -> String {
        let fragments: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}={{{}}}", name.replace('_', " "), value))
            .collect();
        fragments.join(", ")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Options::new();
        for (name, value) in iter {
            options.set(name, value);
        }
        options
    }
}

/// Builds an [`Options`] bag from `name => value` pairs.
///
/// ```
/// use tikzgen::options;
///
/// let opts = options! {
///     "fill" => "red",
///     "line_width" => 2,
/// };
/// assert_eq!(opts.to_tikz(), "fill={red}, line width={2}");
/// ```
#[macro_export]
macro_rules! options {
    () => { $crate::options::Options::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut options = $crate::options::Options::new();
        $(options.set($name, $value);)+
        options
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bag_renders_empty() {
        let opts = Options::new();
        assert!(opts.is_empty());
        assert_eq!(opts.to_tikz(), "");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut opts = Options::new();
        opts.set("zeta", 1);
        opts.set("alpha", 2);
        opts.set("mid", 3);
        assert_eq!(opts.to_tikz(), "zeta={1}, alpha={2}, mid={3}");
    }

    #[test]
    fn test_underscores_become_spaces() {
        let mut opts = Options::new();
        opts.set("line_width", 3);
        opts.set("rounded_corners", "2pt");
        assert_eq!(opts.to_tikz(), "line width={3}, rounded corners={2pt}");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut opts = Options::new();
        opts.set("fill", "red");
        opts.set("draw", "black");
        opts.set("fill", "blue");
        assert_eq!(opts.to_tikz(), "fill={blue}, draw={black}");
    }

    #[test]
    fn test_float_values_render_shortest() {
        let mut opts = Options::new();
        opts.set("scale", 3.0);
        opts.set("opacity", 0.5);
        assert_eq!(opts.to_tikz(), "scale={3}, opacity={0.5}");
    }

    #[test]
    fn test_options_macro() {
        let opts = options! {
            "shape" => "circle",
            "minimum_size" => "1cm",
        };
        assert_eq!(opts.to_tikz(), "shape={circle}, minimum size={1cm}");
    }

    #[test]
    fn test_deserialize_from_toml_table() {
        #[derive(Deserialize)]
        struct Holder {
            options: Options,
        }

        let holder: Holder = toml::from_str(
            r#"
            [options]
            fill = "red"
            line_width = 2
            dashed = true
            "#,
        )
        .expect("valid options table");

        assert_eq!(holder.options.get("fill"), Some(&Value::Str("red".into())));
        assert_eq!(holder.options.get("line_width"), Some(&Value::Int(2)));
        assert_eq!(holder.options.get("dashed"), Some(&Value::Bool(true)));
        assert_eq!(holder.options.len(), 3);
    }
}
