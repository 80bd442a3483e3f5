use std::{io, path::Path};

/// Read-only view of the storage the bundler pulls sources and templates from.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    (**self).read_to_string(path)
  }
}
