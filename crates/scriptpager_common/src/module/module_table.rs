use scriptpager_utils::indexmap::FxIndexMap;

use crate::{ModuleId, NormalModule};

/// Build-time table of units, keyed by identifier, in input order.
#[derive(Debug, Default)]
pub struct ModuleTable {
  modules: FxIndexMap<ModuleId, NormalModule>,
}

impl ModuleTable {
  pub fn get(&self, id: &str) -> Option<&NormalModule> {
    self.modules.get(id)
  }

  /// Inserts `module` unless its id is taken, in which case the module holding the id is
  /// returned and the table is left untouched.
  pub fn try_insert(&mut self, module: NormalModule) -> Result<(), &NormalModule> {
    match self.modules.entry(module.id.clone()) {
      indexmap::map::Entry::Occupied(entry) => Err(entry.into_mut()),
      indexmap::map::Entry::Vacant(entry) => {
        entry.insert(module);
        Ok(())
      }
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &NormalModule> {
    self.modules.values()
  }
}
