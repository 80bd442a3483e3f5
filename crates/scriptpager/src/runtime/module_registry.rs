use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use scriptpager_common::ModuleId;

/// In-process model of the registry the require runtime keeps inside a bundle.
///
/// It follows the same rules as `require()` in the generated script, which makes the
/// evaluation order of a set of units observable without a JavaScript engine.
pub struct ModuleRegistry<V> {
  factories: FxHashMap<ModuleId, Factory<V>>,
  loaded: FxHashMap<ModuleId, V>,
  evaluating: FxHashSet<ModuleId>,
}

/// A factory receives the registry (to look up other units) and a fresh exports object, and
/// returns the unit's exports.
pub type Factory<V> = Rc<dyn Fn(&mut ModuleRegistry<V>, V) -> Result<V, LookupError>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
  #[error("Required file was not compiled: {0}")]
  MissingModule(ModuleId),
  #[error("Circular dependency while requiring: {0}")]
  CircularDependency(ModuleId),
  #[error("Evaluating {id} failed: {message}")]
  Evaluation { id: ModuleId, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
  Unregistered,
  Registered,
  Evaluating,
  Cached,
}

impl<V> Default for ModuleRegistry<V> {
  fn default() -> Self {
    Self {
      factories: FxHashMap::default(),
      loaded: FxHashMap::default(),
      evaluating: FxHashSet::default(),
    }
  }
}

impl<V: Clone + Default> ModuleRegistry<V> {
  /// Registers the factory of `id`. A later registration under the same id replaces the
  /// earlier one, like an assignment to `require.files[id]` would.
  pub fn register<F>(&mut self, id: impl Into<ModuleId>, factory: F)
  where
    F: Fn(&mut ModuleRegistry<V>, V) -> Result<V, LookupError> + 'static,
  {
    self.factories.insert(id.into(), Rc::new(factory));
  }

  pub fn state(&self, id: &str) -> ModuleState {
    if self.loaded.contains_key(id) {
      ModuleState::Cached
    } else if self.evaluating.contains(id) {
      ModuleState::Evaluating
    } else if self.factories.contains_key(id) {
      ModuleState::Registered
    } else {
      ModuleState::Unregistered
    }
  }

  pub fn is_loaded(&self, id: &str) -> bool {
    self.loaded.contains_key(id)
  }

  /// Returns the exports of `id`, evaluating its factory on first use.
  ///
  /// A factory that fails leaves the unit registered but not cached.
  pub fn lookup(&mut self, id: &str) -> Result<V, LookupError> {
    if let Some(exports) = self.loaded.get(id) {
      return Ok(exports.clone());
    }

    let Some(factory) = self.factories.get(id).map(Rc::clone) else {
      return Err(LookupError::MissingModule(id.into()));
    };
    let id = ModuleId::from(id);
    if !self.evaluating.insert(id.clone()) {
      return Err(LookupError::CircularDependency(id));
    }

    let result = factory(self, V::default());
    self.evaluating.remove(&id);

    let exports = result?;
    self.loaded.insert(id, exports.clone());
    Ok(exports)
  }

  /// Looks up every id in order, like the activation calls at the end of a bundle.
  pub fn activate<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Result<(), LookupError> {
    for id in ids {
      self.lookup(id)?;
    }
    Ok(())
  }
}
