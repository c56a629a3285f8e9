//! Line-oriented YAML writer for the compiled configuration.
//!
//! Output is written by hand rather than through a serializer so the exact
//! shape is fixed: strings are always double-quoted, prompt text uses
//! literal block scalars, short numeric lists are inline, and keys with no
//! value are left out.
//!
//! Every key is written at a nesting `level`; its column is `2 * level`.
//! [`YamlWriter::begin_item`] turns the next key into the first key of a
//! sequence item, written two columns to the left behind a `- ` marker.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{Display, Write};
use std::sync::LazyLock;

static PLAIN_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid key regex"));

#[derive(Debug, Default)]
pub(crate) struct YamlWriter {
    out: String,
    item_pending: bool,
}

impl YamlWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Make the next key the first key of a new sequence item.
    pub(crate) fn begin_item(&mut self) {
        self.item_pending = true;
    }

    fn key(&mut self, level: usize, key: &str) {
        if self.item_pending {
            self.item_pending = false;
            indent(&mut self.out, level.saturating_sub(1));
            self.out.push_str("- ");
        } else {
            indent(&mut self.out, level);
        }
        self.out.push_str(&key_text(key));
        self.out.push(':');
    }

    /// `key:` opening a nested mapping or sequence.
    pub(crate) fn section(&mut self, level: usize, key: &str) {
        self.key(level, key);
        self.out.push('\n');
    }

    /// `key: "value"`
    pub(crate) fn str_field(&mut self, level: usize, key: &str, value: &str) {
        self.key(level, key);
        self.out.push(' ');
        self.out.push_str(&quote(value));
        self.out.push('\n');
    }

    /// `key: value` with the value written bare (numbers, booleans).
    pub(crate) fn raw_field(&mut self, level: usize, key: &str, value: impl Display) {
        self.key(level, key);
        let _ = writeln!(self.out, " {}", value);
    }

    /// `key: [a, b, c]`
    pub(crate) fn inline_list<T: Display>(&mut self, level: usize, key: &str, items: &[T]) {
        let joined = items
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.raw_field(level, key, format_args!("[{}]", joined));
    }

    /// Free text as a literal block scalar.
    ///
    /// Chomping is chosen so the parsed value equals `text` exactly. Text a
    /// block scalar cannot carry (empty, only newlines, carriage returns or
    /// other control characters) falls back to a double-quoted string.
    pub(crate) fn text_field(&mut self, level: usize, key: &str, text: &str) {
        let body = text.trim_end_matches('\n');
        if body.is_empty() || !block_safe(text) {
            self.str_field(level, key, text);
            return;
        }

        let trailing = text.len() - body.len();
        let chomp = match trailing {
            0 => "-",
            1 => "",
            _ => "+",
        };
        let indicator = match body.split('\n').find(|l| !l.is_empty()) {
            Some(first) if first.starts_with(' ') => "2",
            _ => "",
        };

        self.key(level, key);
        let _ = writeln!(self.out, " |{}{}", indicator, chomp);

        for line in body.split('\n') {
            if !line.is_empty() {
                indent(&mut self.out, level + 1);
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
        for _ in 1..trailing {
            self.out.push('\n');
        }
    }

    /// A JSON-like value. `null` suppresses the key entirely.
    pub(crate) fn value_field(&mut self, level: usize, key: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) => self.raw_field(level, key, value),
            Value::String(s) if s.contains('\n') => self.text_field(level, key, s),
            Value::String(s) => self.str_field(level, key, s),
            Value::Array(items) if items.iter().all(is_inline_scalar) => {
                let rendered: Vec<String> = items.iter().map(inline_scalar).collect();
                self.inline_list(level, key, &rendered);
            }
            Value::Array(items) => {
                self.section(level, key);
                for item in items {
                    self.sequence_value(level + 1, item);
                }
            }
            Value::Object(map) if map.values().all(Value::is_null) => {
                self.raw_field(level, key, "{}");
            }
            Value::Object(map) => {
                self.section(level, key);
                for (k, v) in map {
                    self.value_field(level + 1, k, v);
                }
            }
        }
    }

    fn sequence_value(&mut self, level: usize, value: &Value) {
        match value {
            Value::Object(map) if !map.values().all(Value::is_null) => {
                self.begin_item();
                for (k, v) in map {
                    self.value_field(level + 1, k, v);
                }
            }
            Value::Array(_) | Value::Object(_) => {
                // JSON flow syntax is valid YAML.
                indent(&mut self.out, level);
                let _ = writeln!(self.out, "- {}", value);
            }
            _ => {
                indent(&mut self.out, level);
                let _ = writeln!(self.out, "- {}", inline_scalar(value));
            }
        }
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

/// A mapping key as written: identifiers stay bare, anything else is quoted.
fn key_text(key: &str) -> Cow<'_, str> {
    let reserved = matches!(
        key.to_ascii_lowercase().as_str(),
        "null" | "true" | "false"
    );
    if PLAIN_KEY_RE.is_match(key) && !reserved {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(quote(key))
    }
}

fn is_inline_scalar(value: &Value) -> bool {
    match value {
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => !s.contains('\n'),
        _ => false,
    }
}

fn inline_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn block_safe(text: &str) -> bool {
    !text
        .chars()
        .any(|c| (c.is_control() && c != '\n' && c != '\t') || needs_escape(c))
}

/// Characters some YAML readers treat as line breaks or byte-order marks.
fn needs_escape(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}')
}

/// Double-quote a string, escaping what YAML requires.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || needs_escape(c) => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
