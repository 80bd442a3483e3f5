use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

// Inside a `<script>` element the HTML tokenizer reacts to two sequences, compared ASCII
// case-insensitively: `</script` ends the element, and `<!--` opens the escaped state in which
// a following `<script` makes the real closing tag only leave that nested state.
//
// The rewrite inserts a backslash after `<`. That is a no-op inside string, template and
// regular expression literals only. Inside `String.raw` templates the backslash is kept, and
// outside any literal (e.g. `x </script>/.test(y)`) the result no longer parses.
static SCRIPT_BREAKOUT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<(/script|!--)").expect("valid regex"));

/// Neutralises every `</script` and `<!--` so the surrounding `<script>` element ends exactly
/// at its own closing tag.
///
/// `</script` becomes `<\/script` and `<!--` becomes `<\!--`.
pub fn escape_inline_script(code: &str) -> Cow<'_, str> {
  SCRIPT_BREAKOUT_RE.replace_all(code, r"<\$1")
}

pub fn contains_script_breakout(code: &str) -> bool {
  SCRIPT_BREAKOUT_RE.is_match(code)
}

#[test]
fn test_escape_inline_script() {
  assert_eq!(escape_inline_script("var a = 1;"), "var a = 1;");
  assert!(matches!(escape_inline_script("var a = 1;"), Cow::Borrowed(_)));
  assert_eq!(escape_inline_script(r#"s = "</script>";"#), r#"s = "<\/script>";"#);
  assert_eq!(escape_inline_script("'</SCRIPT >' + '</Script'"), r"'<\/SCRIPT >' + '<\/Script'");
  assert!(!contains_script_breakout(&escape_inline_script("</script></script>")));
  // Opening tags are harmless on their own.
  assert_eq!(escape_inline_script("<script></style>"), "<script></style>");
}

#[test]
fn test_escape_comment_open() {
  assert_eq!(
    escape_inline_script(r#"document.write("<!--<script>");"#),
    r#"document.write("<\!--<script>");"#
  );
  assert_eq!(escape_inline_script("`<!--`"), r"`<\!--`");
  assert!(!contains_script_breakout(&escape_inline_script("<!--<script></script>-->")));
  // `<!` without the dashes does not change the tokenizer state.
  assert_eq!(escape_inline_script("a <! b"), "a <! b");
}
