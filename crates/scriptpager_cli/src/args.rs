use std::path::PathBuf;

use clap::{ArgMatches, Args};
use scriptpager::STD_ALIASES;

#[derive(Args)]
pub struct InputArgs {
  /// Directory file references are relative to
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Directory holding the bundled jQuery and CoffeeScript files
  #[clap(long)]
  pub stdlib_dir: Option<PathBuf>,

  /// Bundle jQuery as `jQuery`, at this position in the file list
  #[clap(long)]
  pub jq: bool,

  /// Bundle the CoffeeScript compiler as `CoffeeScript`, at this position in the file list
  #[clap(long)]
  pub cs: bool,
}

#[derive(Args)]
pub struct TransformArgs {
  /// Program used to compile `.coffee` files
  #[clap(long)]
  pub coffee: Option<String>,

  /// Parse every unit and fail on syntax errors
  #[clap(long)]
  pub check: bool,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Document template containing a `<!--scriptpager-->` marker
  #[clap(long, short = 't')]
  pub template: Option<PathBuf>,

  /// Write the document to this file instead of stdout
  #[clap(long, short = 'o')]
  pub out_file: Option<PathBuf>,
}

/// File references and reserved alias tokens, in the order they appeared on the command line.
pub fn ordered_references(matches: &ArgMatches) -> Vec<String> {
  let mut references: Vec<(usize, String)> = Vec::new();

  if let (Some(values), Some(indices)) =
    (matches.get_many::<String>("files"), matches.indices_of("files"))
  {
    references.extend(indices.zip(values.cloned()));
  }

  for alias in STD_ALIASES {
    let id = alias.token.trim_start_matches('-');
    if matches.get_flag(id) {
      if let Some(index) = matches.index_of(id) {
        references.push((index, alias.token.to_string()));
      }
    }
  }

  references.sort_by_key(|(index, _)| *index);
  references.into_iter().map(|(_, reference)| reference).collect()
}
