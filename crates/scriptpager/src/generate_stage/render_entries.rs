use scriptpager_common::ModuleId;
use scriptpager_utils::concat_string;

use super::render_factory::render_module_id;

/// One activation call per entry, in input order.
pub fn render_entries(entries: &[ModuleId]) -> Vec<String> {
  entries.iter().map(|id| concat_string!("require(", render_module_id(id), ");")).collect()
}

#[test]
fn test_render_entries_keeps_order() {
  let entries = [ModuleId::new("./c"), ModuleId::new("jQuery"), ModuleId::new("../a")];
  assert_eq!(
    render_entries(&entries),
    [r#"require("./c");"#, r#"require("jQuery");"#, r#"require("../a");"#]
  );
}
