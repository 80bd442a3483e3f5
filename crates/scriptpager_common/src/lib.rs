mod bundler_options;
mod module;
mod types;

pub use bundler_options::{
  BundlerOptions, input_item::InputItem, module_type::ModuleType,
  normalized_bundler_options::NormalizedBundlerOptions,
  std_alias::{STD_ALIASES, StdAlias},
};

pub use crate::{
  module::{NormalModule, module_table::ModuleTable},
  types::{
    module_id::ModuleId,
    resolved_input::ResolvedInput,
    source::{Source, lines_count},
    source_joiner::SourceJoiner,
  },
};
