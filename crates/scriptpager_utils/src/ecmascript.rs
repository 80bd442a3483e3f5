/// Quotes `value` as a double-quoted JavaScript string literal.
///
/// Backslashes are doubled, double quotes and control characters are escaped. The output of
/// `serde_json` is valid JavaScript except for raw U+2028 and U+2029, which engines before
/// ES2019 reject inside string literals, so those are escaped as well.
pub fn to_js_string_literal(value: &str) -> String {
  let quoted =
    serde_json::to_string(value).unwrap_or_else(|_| unreachable!("serializing a str never fails"));
  if quoted.contains(['\u{2028}', '\u{2029}']) {
    quoted.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029")
  } else {
    quoted
  }
}

#[test]
fn test_to_js_string_literal() {
  assert_eq!(to_js_string_literal("./utils"), r#""./utils""#);
  assert_eq!(to_js_string_literal(r#"a"b"#), r#""a\"b""#);
  assert_eq!(to_js_string_literal(r"a\b"), r#""a\\b""#);
  assert_eq!(to_js_string_literal("a\nb"), r#""a\nb""#);
}

#[test]
fn test_line_and_paragraph_separators_are_escaped() {
  assert_eq!(to_js_string_literal("a\u{2028}b\u{2029}c"), r#""a\u2028b\u2029c""#);
}
