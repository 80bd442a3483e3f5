mod module_registry;

pub use module_registry::{LookupError, ModuleRegistry, ModuleState};

/// Require runtime prepended to every bundle. Defines `require(id)` together with the
/// `require.files` factory table and the `require.loaded` export cache.
pub static RUNTIME_CODE: &str = include_str!("../../runtime/require.js");
