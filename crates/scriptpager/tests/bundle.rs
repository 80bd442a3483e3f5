use std::{cell::Cell, path::Path, rc::Rc};

use scriptpager::{BuildDiagnostic, BuildError, BundleOutput, Bundler, BundlerOptions, InputItem};
use scriptpager_ecmascript::EcmaCompiler;
use scriptpager_fs::MemoryFileSystem;

fn project() -> MemoryFileSystem {
  MemoryFileSystem::new([
    ("/project/app/main.js", "var util = require(\"./lib/util\");\nexports.run = util.run;\n".to_string()),
    ("/project/app/lib/util.js", "exports.run = function () { return 1; };\n".to_string()),
    ("/project/shared/x.js", "exports.x = true;\n".to_string()),
    ("/project/app/square.coffee", "square = (x) -> x * x\n".to_string()),
    ("/project/app/page.js", "var html = \"<p class=\\\"x\\\">a\\\\b</p></script>\";\nexports.html = html;\n".to_string()),
    ("/project/app/broken.js", "var = ;\n".to_string()),
    ("/opt/scriptpager/jquery-1.5.0.js", "return { fn: {} };\n".to_string()),
    ("/project/app/layout.html", "<html><body><!--scriptpager--></body></html>".to_string()),
  ])
  .unwrap()
}

fn fake_coffee(source: &str, _path: &Path) -> anyhow::Result<String> {
  Ok(format!("(function () {{\n  // compiled\n  var src = {source:?};\n}}).call(this);\n"))
}

fn options(input: &[&str]) -> BundlerOptions {
  BundlerOptions {
    input: Some(input.iter().copied().map(InputItem::from).collect()),
    cwd: Some("/project/app".into()),
    stdlib_dir: Some("/opt/scriptpager".into()),
    ..Default::default()
  }
}

fn build(options: BundlerOptions) -> Result<BundleOutput, BuildError> {
  Bundler::new(options).with_fs(project()).with_compiler(fake_coffee).build()
}

fn script_of(document: &str) -> &str {
  let start = document.find("<script>").expect("script element") + "<script>".len();
  let end = document.rfind("</script>").expect("closing tag");
  &document[start..end]
}

fn position(document: &str, needle: &str) -> usize {
  document.find(needle).unwrap_or_else(|| panic!("`{needle}` not found in\n{document}"))
}

fn last_position(document: &str, needle: &str) -> usize {
  document.rfind(needle).unwrap_or_else(|| panic!("`{needle}` not found in\n{document}"))
}

#[test]
fn factories_and_activations_follow_input_order() {
  let output = build(options(&["main.js", "lib/util.js", "../shared/x.js"])).unwrap();
  let document = &output.document;

  let ids: Vec<&str> = output.modules.iter().map(|id| &**id).collect();
  assert_eq!(ids, ["./main", "./lib/util", "../shared/x"]);

  let runtime = position(document, "var require = function (id) {");
  let main = position(document, r#"require.files["./main"] = function (exports) {"#);
  let util = position(document, r#"require.files["./lib/util"] = function (exports) {"#);
  let shared = position(document, r#"require.files["../shared/x"] = function (exports) {"#);
  // `./main` itself requires `./lib/util`, so search from the end.
  let activate_main = last_position(document, "require(\"./main\");\n");
  let activate_util = last_position(document, "require(\"./lib/util\");\n");
  let activate_shared = last_position(document, "require(\"../shared/x\");\n");

  assert!(runtime < main && main < util && util < shared);
  assert!(shared < activate_main && activate_main < activate_util && activate_util < activate_shared);
  assert!(document.ends_with("require(\"../shared/x\");\n</script>"));
}

#[test]
fn document_embeds_a_parsable_script() {
  let output = build(options(&["main.js", "lib/util.js", "square.coffee", "page.js", "--jq"])).unwrap();
  assert!(output.document.starts_with("<!doctype html><head><meta charset=\"utf-8\"><title>Script</title>"));
  EcmaCompiler::check_syntax(script_of(&output.document)).unwrap();
}

#[test]
fn compiled_units_embed_compiler_output() {
  let output = build(options(&["square.coffee"])).unwrap();
  assert!(output.document.contains("// BEGIN FILE: ./square\n    (function () {\n      // compiled\n"));
  assert!(output.document.contains(r#"var src = "square = (x) -> x * x\n";"#));
}

#[test]
fn reserved_alias_registers_under_its_symbolic_name() {
  let output = build(options(&["--jq", "main.js", "lib/util.js"])).unwrap();
  assert_eq!(&*output.modules[0], "jQuery");
  assert!(output.document.contains(r#"require.files["jQuery"] = function (exports) {"#));
  assert!(output.document.contains("// BEGIN FILE: jQuery\n    return { fn: {} };\n// END FILE: jQuery\n"));
}

#[test]
fn closing_tags_quotes_and_backslashes_survive_embedding() {
  let original = "var html = \"<p class=\\\"x\\\">a\\\\b</p></script>\";\nexports.html = html;\n";
  let output = build(options(&["page.js"])).unwrap();
  let document = &output.document;

  // Only the element's own closing tag remains.
  assert_eq!(document.to_ascii_lowercase().matches("</script").count(), 1);
  assert!(document.ends_with("</script>"));
  EcmaCompiler::check_syntax(script_of(document)).unwrap();

  let begin = position(document, "// BEGIN FILE: ./page\n") + "// BEGIN FILE: ./page\n".len();
  let end = position(document, "// END FILE: ./page\n");
  let embedded: String = document[begin..end]
    .split_inclusive('\n')
    .map(|line| line.strip_prefix("    ").unwrap_or(line))
    .collect();
  assert_eq!(embedded.replace("<\\/script", "</script"), original);
}

#[test]
fn comment_open_cannot_hold_the_script_element_open() {
  let fs = project();
  fs.add_file(Path::new("/project/app/legacy.js"), "document.write(\"<!--<script>\");\n").unwrap();
  let output = Bundler::new(options(&["legacy.js"])).with_fs(fs).build().unwrap();
  let script = script_of(&output.document);

  assert!(!script.contains("<!--"));
  assert!(script.contains(r#"document.write("<\!--<script>");"#));
  EcmaCompiler::check_syntax(script).unwrap();
}

#[test]
fn unknown_extension_aborts_the_build() {
  let err = build(options(&["main.js", "notes.txt"])).unwrap_err();
  match err.first() {
    Some(BuildDiagnostic::UnknownExtension { reference, extension }) => {
      assert_eq!(reference.as_str(), "notes.txt");
      assert_eq!(extension.as_str(), "txt");
    }
    other => panic!("unexpected {other:?}"),
  }
}

#[test]
fn duplicate_identifier_aborts_before_compiling() {
  let compiled = Rc::new(Cell::new(0));
  let counter = Rc::clone(&compiled);
  let err = Bundler::new(options(&["square.js", "square.coffee"]))
    .with_fs(
      MemoryFileSystem::new([
        ("/project/app/square.js", String::new()),
        ("/project/app/square.coffee", String::new()),
      ])
      .unwrap(),
    )
    .with_compiler(move |source: &str, _: &Path| -> anyhow::Result<String> {
      counter.set(counter.get() + 1);
      Ok(source.to_string())
    })
    .build()
    .unwrap_err();

  assert_eq!(compiled.get(), 0);
  match err.first() {
    Some(BuildDiagnostic::DuplicateIdentifier { id, first, second }) => {
      assert_eq!(id.as_str(), "./square");
      assert_eq!(first.as_str(), "square.js");
      assert_eq!(second.as_str(), "square.coffee");
    }
    other => panic!("unexpected {other:?}"),
  }
}

#[test]
fn compilation_failure_aborts_the_build() {
  let err = Bundler::new(options(&["main.js", "square.coffee"]))
    .with_fs(project())
    .with_compiler(|_: &str, _: &Path| -> anyhow::Result<String> {
      anyhow::bail!("unexpected ->")
    })
    .build()
    .unwrap_err();
  assert_eq!(err.first().map(BuildDiagnostic::kind), Some("COMPILATION_FAILURE"));
  assert!(err.to_string().contains("./square"));
}

#[test]
fn syntax_check_is_opt_in() {
  assert!(build(options(&["broken.js"])).is_ok());

  let err = build(BundlerOptions { check_syntax: Some(true), ..options(&["broken.js"]) }).unwrap_err();
  assert_eq!(err.first().map(BuildDiagnostic::kind), Some("SYNTAX_ERROR"));
}

#[test]
fn custom_template_receives_the_bundle() {
  let output =
    build(BundlerOptions { template: Some("/project/app/layout.html".into()), ..options(&["main.js", "lib/util.js"]) })
      .unwrap();
  assert!(output.document.starts_with("<html><body><script>\nvar require = function (id) {"));
  assert!(output.document.ends_with("</script></body></html>"));
}

#[test]
fn template_without_marker_is_rejected() {
  let err = build(BundlerOptions { template: Some("/project/app/main.js".into()), ..options(&["main.js"]) })
    .unwrap_err();
  assert_eq!(err.first().map(BuildDiagnostic::kind), Some("INVALID_TEMPLATE"));
}

#[test]
fn missing_file_is_reported() {
  let err = build(options(&["absent.js"])).unwrap_err();
  assert_eq!(err.first().map(BuildDiagnostic::kind), Some("IO"));
}

#[test]
fn empty_input_is_rejected() {
  let err = build(options(&[])).unwrap_err();
  assert!(matches!(err.first(), Some(BuildDiagnostic::NoInput)));
}
