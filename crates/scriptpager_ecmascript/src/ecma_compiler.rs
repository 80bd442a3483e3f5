use std::borrow::Cow;

use itertools::Itertools;
use oxc::{
  allocator::Allocator,
  ast_visit::Visit,
  parser::{ParseOptions, Parser, ParserReturn},
  span::SourceType,
};

use crate::multiline_literals::MultilineLiterals;

pub struct EcmaCompiler;

impl EcmaCompiler {
  // Units are classic scripts evaluated inside a function body, so a top-level `return` is legal.
  fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> ParserReturn<'a> {
    Parser::new(allocator, source, SourceType::cjs())
      .with_options(ParseOptions { allow_return_outside_function: true, ..ParseOptions::default() })
      .parse()
  }

  /// Returns the parser diagnostics, one per line, if `source` is not a valid script.
  pub fn check_syntax(source: &str) -> Result<(), String> {
    let allocator = Allocator::default();
    let ret = Self::parse(&allocator, source);
    if ret.errors.is_empty() && !ret.panicked {
      Ok(())
    } else if ret.errors.is_empty() {
      Err("Unexpected end of input".to_string())
    } else {
      Err(ret.errors.iter().map(ToString::to_string).join("\n"))
    }
  }

  /// Prefixes every line of `source` with `indent`.
  ///
  /// Empty lines are left empty, and lines that begin inside a multi-line string or template
  /// literal are left alone since their leading whitespace belongs to the value. Source that does
  /// not parse is returned unchanged.
  pub fn reindent<'s>(source: &'s str, indent: &str) -> Cow<'s, str> {
    if source.is_empty() || indent.is_empty() {
      return Cow::Borrowed(source);
    }

    let allocator = Allocator::default();
    let ret = Self::parse(&allocator, source);
    if !ret.errors.is_empty() || ret.panicked {
      return Cow::Borrowed(source);
    }
    let mut literals = MultilineLiterals::new(source);
    literals.visit_program(&ret.program);

    let mut output = String::with_capacity(source.len() + indent.len() * (source.len() / 32 + 1));
    let mut line_start = 0;
    for line in source.split_inclusive('\n') {
      let is_blank = line == "\n" || line == "\r\n";
      if !is_blank && !literals.covers(line_start) {
        output.push_str(indent);
      }
      output.push_str(line);
      line_start += line.len();
    }
    Cow::Owned(output)
  }
}

#[cfg(test)]
mod tests {
  use super::EcmaCompiler;

  #[test]
  fn check_syntax_accepts_scripts() {
    assert!(EcmaCompiler::check_syntax("exports.a = 1;").is_ok());
    assert!(EcmaCompiler::check_syntax("return { a: 1 };").is_ok());
    assert!(EcmaCompiler::check_syntax("with (Math) { exports.pi = PI; }").is_ok());
  }

  #[test]
  fn check_syntax_reports_errors() {
    let err = EcmaCompiler::check_syntax("var = ;").unwrap_err();
    assert!(!err.is_empty());
  }

  #[test]
  fn reindent_prefixes_code_lines() {
    let code = "var a = 1;\n\nif (a) {\n  a++;\n}\n";
    assert_eq!(EcmaCompiler::reindent(code, "    "), "    var a = 1;\n\n    if (a) {\n      a++;\n    }\n");
  }

  #[test]
  fn reindent_keeps_multiline_literals() {
    let code = "var t = `line one\nline two`;\nvar s = 'a\\\nb';\nvar u = 1;";
    assert_eq!(
      EcmaCompiler::reindent(code, "  "),
      "  var t = `line one\nline two`;\n  var s = 'a\\\nb';\n  var u = 1;"
    );
  }

  #[test]
  fn reindent_treats_template_expressions_as_part_of_the_literal() {
    let code = "var t = `${\n1}`;\nvar x;";
    assert_eq!(EcmaCompiler::reindent(code, "  "), "  var t = `${\n1}`;\n  var x;");
  }

  #[test]
  fn reindent_leaves_unparsable_source_alone() {
    let code = "var = ;\nfoo(";
    assert_eq!(EcmaCompiler::reindent(code, "    "), code);
  }
}
