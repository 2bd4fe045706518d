//! Literal expressions for attribute values.
//!
//! Output is compact JSON, which is also a valid JavaScript expression, with
//! two extra escapes so a program can be inlined in an HTML `<script>`
//! block: `</` is written `<\/` and U+2028/U+2029 are written as `\u` escapes.
//! Any JSON parser still reads the literal back as the original value.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};

/// Serialize a JSON-compatible value as a literal, keeping mapping order.
pub fn to_literal(value: &Value) -> String {
    write_script_safe(value)
}

/// Serialize a mapping as an object literal, keeping its order.
pub fn map_literal(map: &Map<String, Value>) -> String {
    write_script_safe(map)
}

/// Quote and escape a string.
pub fn quote(s: &str) -> String {
    write_script_safe(s)
}

/// Object-literal key: bare when it is a plain identifier, quoted otherwise.
pub fn property_key(key: &str) -> String {
    if konvac_ir::validate::is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn write_script_safe<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, ScriptSafeFormatter);
    // Values with string keys always serialize.
    if value.serialize(&mut ser).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Compact JSON formatter that also escapes `</` and the two line
/// separators JavaScript treats as line terminators.
struct ScriptSafeFormatter;

impl Formatter for ScriptSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // serde_json only splits fragments around characters it escapes, so
        // a `<` followed by `/` always lands in the same fragment.
        let mut start = 0;
        let mut prev = '\0';
        for (i, c) in fragment.char_indices() {
            let escape = match c {
                '/' if prev == '<' => Some("\\/"),
                '\u{2028}' => Some("\\u2028"),
                '\u{2029}' => Some("\\u2029"),
                _ => None,
            };
            if let Some(escape) = escape {
                writer.write_all(fragment[start..i].as_bytes())?;
                writer.write_all(escape.as_bytes())?;
                start = i + c.len_utf8();
            }
            prev = c;
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(to_literal(&json!(null)), "null");
        assert_eq!(to_literal(&json!(true)), "true");
        assert_eq!(to_literal(&json!(10)), "10");
        assert_eq!(to_literal(&json!(-2.5)), "-2.5");
        assert_eq!(to_literal(&json!("red")), r#""red""#);
    }

    #[test]
    fn test_compact_mapping() {
        assert_eq!(to_literal(&json!({"width": 10})), r#"{"width":10}"#);
        assert_eq!(
            to_literal(&json!({"points": [0, 0, 10, 20], "dash": []})),
            r#"{"points":[0,0,10,20],"dash":[]}"#
        );
    }

    #[test]
    fn test_empty_map_literal() {
        assert_eq!(map_literal(&Map::new()), "{}");
    }

    #[test]
    fn test_mapping_order_preserved() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": {"y": 0, "b": 1}}"#).unwrap();
        assert_eq!(to_literal(&value), r#"{"z":1,"a":2,"m":{"y":0,"b":1}}"#);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
        assert_eq!(quote("a\\b\tc"), r#""a\\b\tc""#);
        assert_eq!(quote("\u{1}"), r#""\u0001""#);
    }

    #[test]
    fn test_script_safe_escapes() {
        assert_eq!(quote("</script>"), r#""<\/script>""#);
        assert_eq!(quote("a/b"), r#""a/b""#);
        assert_eq!(quote("x\u{2028}y"), r#""x\u2028y""#);
        assert_eq!(quote("x\u{2029}y"), r#""x\u2029y""#);
        assert_eq!(quote("a</b</c"), r#""a<\/b<\/c""#);
        assert_eq!(quote("\n</x"), r#""\n<\/x""#);
    }

    #[test]
    fn test_nested_strings_are_script_safe() {
        let literal = to_literal(&json!({"</k": ["</script>"]}));
        assert_eq!(literal, r#"{"<\/k":["<\/script>"]}"#);
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(property_key("duration"), "duration");
        assert_eq!(property_key("stroke-width"), r#""stroke-width""#);
        assert_eq!(property_key("2x"), r#""2x""#);
    }

    #[test]
    fn test_literal_decodes_back() {
        let original = json!({
            "text": "line1\nline2 </b> \u{2029}",
            "n": 3.25,
            "flags": [true, false, null],
            "nested": {"deep": {"k": "\"q\""}}
        });
        let back: Value = serde_json::from_str(&to_literal(&original)).unwrap();
        assert_eq!(back, original);
    }
}
