use scriptpager_common::ModuleId;

#[derive(Debug, Default)]
pub struct BundleOutput {
  /// The complete document, bundle included.
  pub document: String,
  /// Identifiers of the bundled units, in activation order.
  pub modules: Vec<ModuleId>,
}
