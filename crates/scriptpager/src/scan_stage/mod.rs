mod transform;

use scriptpager_common::{InputItem, ModuleId, ModuleTable, NormalModule, NormalizedBundlerOptions};
use scriptpager_ecmascript::EcmaCompiler;
use scriptpager_error::{BuildDiagnostic, BuildResult};
use scriptpager_fs::FileSystem;
use scriptpager_resolver::Resolver;

use crate::compiler::Compiler;

pub use self::transform::{TransformOutput, transform_source};

#[derive(Debug, Default)]
pub struct ScanStageOutput {
  pub module_table: ModuleTable,
  /// Module ids in input order, one per file reference.
  pub entries: Vec<ModuleId>,
}

pub struct ScanStage<'a> {
  options: &'a NormalizedBundlerOptions,
  fs: &'a dyn FileSystem,
  resolver: &'a Resolver,
  compiler: &'a dyn Compiler,
}

impl<'a> ScanStage<'a> {
  pub fn new(
    options: &'a NormalizedBundlerOptions,
    fs: &'a dyn FileSystem,
    resolver: &'a Resolver,
    compiler: &'a dyn Compiler,
  ) -> Self {
    Self { options, fs, resolver, compiler }
  }

  /// Resolves, reads and transforms every input strictly in order. The first failure aborts.
  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    if self.options.input.is_empty() {
      Err(BuildDiagnostic::NoInput)?;
    }

    let mut output = ScanStageOutput::default();
    for item in &self.options.input {
      let module = self.scan_input(item, &output.module_table)?;
      tracing::debug!("scanned {} as `{}`", module.reference, module.id);
      output.entries.push(module.id.clone());
      let inserted = output.module_table.try_insert(module).is_ok();
      debug_assert!(inserted, "ids are checked for duplicates before transforming");
    }

    Ok(output)
  }

  fn scan_input(&self, item: &InputItem, module_table: &ModuleTable) -> BuildResult<NormalModule> {
    let resolved = self.resolver.resolve(&item.import);

    if let Some(existing) = module_table.get(&resolved.id) {
      Err(BuildDiagnostic::DuplicateIdentifier {
        id: resolved.id.as_arcstr().clone(),
        first: existing.reference.clone(),
        second: resolved.reference.clone(),
      })?;
    }

    let TransformOutput { source, code } = transform_source(&resolved, self.fs, self.compiler)?;

    if self.options.check_syntax {
      EcmaCompiler::check_syntax(&code).map_err(|message| BuildDiagnostic::SyntaxError {
        id: resolved.id.as_arcstr().clone(),
        message,
      })?;
    }

    Ok(NormalModule {
      id: resolved.id,
      reference: resolved.reference,
      path: resolved.path,
      module_type: resolved.module_type,
      source,
      code,
    })
  }
}
