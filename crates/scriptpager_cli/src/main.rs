mod args;

use std::{
  io::{self, Write},
  path::Path,
  process::ExitCode,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, OutputArgs, TransformArgs};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use scriptpager::{Bundler, BundlerOptions};

/// Bundle JavaScript and CoffeeScript files into one HTML page. Files reach each other's
/// exports through `require()` and run in the order listed unless required earlier.
#[derive(Parser)]
#[command(name = "scriptpager", version, about, long_about = None)]
struct Commands {
  /// Files to bundle, in activation order
  #[arg(value_name = "FILE")]
  files: Vec<String>,

  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  transform: TransformArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn usage() -> String {
  match std::env::args_os().next() {
    Some(program) => format!("Usage: {} filenames...", program.to_string_lossy()),
    None => "Usage: filenames...".to_string(),
  }
}

fn write_document(document: &str, out_file: Option<&Path>) -> anyhow::Result<()> {
  match out_file {
    Some(path) => std::fs::write(path, document)
      .with_context(|| format!("Failed to write `{}`", path.display())),
    None => {
      let mut stdout = io::stdout().lock();
      writeln!(stdout, "{document}")?;
      stdout.flush()?;
      Ok(())
    }
  }
}

fn main() -> ExitCode {
  // Logs go to stderr, stdout carries the document. Set RUST_LOG=debug for per-file details.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let matches = Commands::command().get_matches();
  let args = match Commands::from_arg_matches(&matches) {
    Ok(args) => args,
    Err(err) => err.exit(),
  };

  let references = args::ordered_references(&matches);
  if references.is_empty() {
    return match writeln!(io::stdout(), "{}", usage()) {
      Ok(()) => ExitCode::SUCCESS,
      Err(_) => ExitCode::FAILURE,
    };
  }
  tracing::debug!("file references: {references:?}");

  let bundler = Bundler::new(BundlerOptions {
    input: Some(references.into_iter().map(Into::into).collect()),
    cwd: args.input.cwd,
    stdlib_dir: args.input.stdlib_dir,
    coffee: args.transform.coffee,
    check_syntax: Some(args.transform.check),
    template: args.output.template,
  });

  match bundler.build() {
    Ok(output) => match write_document(&output.document, args.output.out_file.as_deref()) {
      Ok(()) => ExitCode::SUCCESS,
      Err(err) => {
        eprintln!("{} {err:#}", Colour::Red.paint("Error:"));
        ExitCode::FAILURE
      }
    },
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
