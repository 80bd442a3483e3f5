use std::time::Instant;

use scriptpager_common::{BundlerOptions, NormalizedBundlerOptions};
use scriptpager_error::BuildResult;
use scriptpager_fs::{FileSystem, OsFileSystem};
use scriptpager_resolver::Resolver;

use crate::{
  compiler::{CommandCompiler, Compiler},
  generate_stage::GenerateStage,
  scan_stage::ScanStage,
  types::bundle_output::BundleOutput,
  utils::normalize_options::normalize_options,
};

pub struct Bundler {
  pub(crate) fs: Box<dyn FileSystem>,
  pub(crate) options: NormalizedBundlerOptions,
  pub(crate) resolver: Resolver,
  pub(crate) compiler: Box<dyn Compiler>,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> Self {
    let options = normalize_options(options);
    let resolver = Resolver::new(options.cwd.clone(), options.stdlib_dir.clone());
    let compiler = CommandCompiler::coffee(options.coffee.clone());

    Bundler { fs: Box::new(OsFileSystem), options, resolver, compiler: Box::new(compiler) }
  }

  #[must_use]
  pub fn with_fs(mut self, fs: impl FileSystem + 'static) -> Self {
    self.fs = Box::new(fs);
    self
  }

  #[must_use]
  pub fn with_compiler(mut self, compiler: impl Compiler + 'static) -> Self {
    self.compiler = Box::new(compiler);
    self
  }

  /// Bundles every input into one document. Nothing is produced unless every unit succeeds.
  pub fn build(&self) -> BuildResult<BundleOutput> {
    let start = Instant::now();
    tracing::info!("bundling {} file reference(s)", self.options.input.len());

    let scan_stage_output =
      ScanStage::new(&self.options, &*self.fs, &self.resolver, &*self.compiler).scan()?;
    let document = GenerateStage::new(&self.options, &*self.fs).generate(&scan_stage_output)?;

    tracing::info!(
      "bundled {} module(s) in {:.2} ms",
      scan_stage_output.entries.len(),
      start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(BundleOutput { document, modules: scan_stage_output.entries })
  }
}
