mod document;
mod render_entries;
mod render_factory;

use scriptpager_common::{NormalizedBundlerOptions, SourceJoiner};
use scriptpager_error::BuildResult;
use scriptpager_fs::FileSystem;

use crate::{runtime::RUNTIME_CODE, scan_stage::ScanStageOutput};

pub use self::{
  document::{BUNDLE_MARKER, DEFAULT_TEMPLATE, DocumentTemplate},
  render_entries::render_entries,
  render_factory::{render_factory, render_module_id},
};

pub struct GenerateStage<'a> {
  options: &'a NormalizedBundlerOptions,
  fs: &'a dyn FileSystem,
}

impl<'a> GenerateStage<'a> {
  pub fn new(options: &'a NormalizedBundlerOptions, fs: &'a dyn FileSystem) -> Self {
    Self { options, fs }
  }

  /// Assembles the bundle and splices it into the document template.
  pub fn generate(&self, scan_stage_output: &ScanStageOutput) -> BuildResult<String> {
    // Load the template first so a bad template fails before any rendering work.
    let template = DocumentTemplate::load(self.options.template.as_deref(), self.fs)?;
    let bundle = render_bundle(scan_stage_output);
    Ok(template.splice(&bundle))
  }
}

/// `<script>`, require runtime, factories, activation calls, `</script>`.
pub fn render_bundle(scan_stage_output: &ScanStageOutput) -> String {
  let ScanStageOutput { module_table, entries } = scan_stage_output;

  let mut source_joiner = SourceJoiner::default();
  source_joiner.append_source("<script>");
  source_joiner.append_source(RUNTIME_CODE.trim_end());
  for module in module_table.iter() {
    source_joiner.append_source(render_factory(module));
  }
  for activation in render_entries(entries) {
    source_joiner.append_source(activation);
  }
  source_joiner.append_source("</script>");

  let bundle = source_joiner.join();
  tracing::debug!(
    "rendered {} factories into {} lines of script",
    entries.len(),
    source_joiner.lines_count() + 1
  );
  bundle
}
