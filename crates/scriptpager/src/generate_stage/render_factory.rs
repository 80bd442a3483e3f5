use scriptpager_common::NormalModule;
use scriptpager_ecmascript::EcmaCompiler;
use scriptpager_utils::{
  concat_string,
  ecmascript::to_js_string_literal,
  html::escape_inline_script,
};

const INDENT: &str = "    ";

/// Quoted id, safe to embed in code and inside a `<script>` element.
pub fn render_module_id(id: &str) -> String {
  escape_inline_script(&to_js_string_literal(id)).into_owned()
}

// Line terminators would end the `//` marker comment early.
fn render_marker_name(id: &str) -> String {
  let single_line: String = id
    .chars()
    .map(|c| if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') { ' ' } else { c })
    .collect();
  escape_inline_script(&single_line).into_owned()
}

/// Renders the self-registering factory of one unit:
///
/// ```js
/// require.files["./a"] = function (exports) {
///   var returned = (function () {
/// // BEGIN FILE: ./a
///     <code>
/// // END FILE: ./a
///   }).call(exports);
///   return returned === undefined ? exports : returned;
/// };
/// ```
///
/// The unit exports by mutating `exports` (also bound to `this`), by assigning `exports`, or by
/// returning a value at top level.
pub fn render_factory(module: &NormalModule) -> String {
  let marker = render_marker_name(&module.id);
  let code = EcmaCompiler::reindent(&module.code, INDENT);
  let code = escape_inline_script(&code);
  let line_break = if code.is_empty() || code.ends_with('\n') { "" } else { "\n" };

  concat_string!(
    "require.files[",
    render_module_id(&module.id),
    "] = function (exports) {\n",
    "  var returned = (function () {\n",
    "// BEGIN FILE: ",
    marker,
    "\n",
    code,
    line_break,
    "// END FILE: ",
    marker,
    "\n",
    "  }).call(exports);\n",
    "  return returned === undefined ? exports : returned;\n",
    "};"
  )
}
