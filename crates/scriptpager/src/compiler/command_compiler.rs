use std::{
  io::{self, Write},
  path::Path,
  process::{Command, Stdio},
};

use anyhow::Context;

use super::Compiler;

/// Runs an external program that reads source on stdin and prints JavaScript on stdout.
///
/// The default is `coffee --compile --print --stdio`.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
  program: String,
  args: Vec<String>,
}

impl CommandCompiler {
  pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
  }

  pub fn coffee(program: impl Into<String>) -> Self {
    Self::new(program, ["--compile", "--print", "--stdio"])
  }
}

impl Compiler for CommandCompiler {
  fn compile(&self, source: &str, path: &Path) -> anyhow::Result<String> {
    tracing::debug!("compiling {} with `{}`", path.display(), self.program);

    let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .with_context(|| format!("Failed to run `{}`", self.program))?;
    let mut stdin = child.stdin.take().context("Compiler stdin is not piped")?;

    // Feed stdin from another thread so a chatty compiler can't fill its stdout pipe and stall.
    let (written, output) = std::thread::scope(|scope| {
      let writer = scope.spawn(move || stdin.write_all(source.as_bytes()));
      let output = child.wait_with_output();
      (writer.join(), output)
    });
    let output = output.with_context(|| format!("Failed to wait for `{}`", self.program))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      anyhow::bail!("`{}` exited with {}: {}", self.program, output.status, stderr.trim());
    }
    match written {
      Ok(Ok(())) => {}
      // The compiler may legitimately stop reading early. Its exit status is what counts.
      Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
      Ok(Err(err)) => return Err(err).context("Failed to write to the compiler"),
      Err(_) => anyhow::bail!("Writing to the compiler panicked"),
    }

    String::from_utf8(output.stdout).context("Compiler output is not valid UTF-8")
  }
}
