use std::{
  io::{self, Write},
  path::{Component, Path},
};

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// In-memory file system, mostly useful for tests. Paths are interpreted from the root of the
/// memory tree, so `/project/a.js` and `project/a.js` name the same file.
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: VfsPath::new(MemoryFS::new()) }
  }
}

impl MemoryFileSystem {
  pub fn new<P: AsRef<Path>>(files: impl IntoIterator<Item = (P, String)>) -> io::Result<Self> {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(path.as_ref(), &content)?;
    }
    Ok(fs)
  }

  pub fn add_file(&self, path: &Path, content: &str) -> io::Result<()> {
    let file = self.vfs_path(path)?;
    file.parent().create_dir_all().map_err(to_io_error)?;
    let mut writer = file.create_file().map_err(to_io_error)?;
    writer.write_all(content.as_bytes())
  }

  fn vfs_path(&self, path: &Path) -> io::Result<VfsPath> {
    let mut segments = Vec::new();
    for component in path.components() {
      match component {
        Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
        Component::ParentDir => {
          segments.pop();
        }
        Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
      }
    }
    if segments.is_empty() {
      return Ok(self.root.clone());
    }
    self.root.join(segments.join("/")).map_err(to_io_error)
  }
}

fn to_io_error(err: vfs::VfsError) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, err.to_string())
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.vfs_path(path)?.read_to_string().map_err(to_io_error)
  }
}

#[test]
fn test_memory_file_system() {
  let fs = MemoryFileSystem::new([("/project/src/a.js", "exports.a = 1;".to_string())]).unwrap();
  assert_eq!(fs.read_to_string(Path::new("/project/src/a.js")).unwrap(), "exports.a = 1;");
  assert_eq!(fs.read_to_string(Path::new("/project/lib/../src/a.js")).unwrap(), "exports.a = 1;");
  assert!(fs.read_to_string(Path::new("/project/missing.js")).is_err());
}
