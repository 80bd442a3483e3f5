use std::path::Path;

use arcstr::ArcStr;
use scriptpager_error::{BuildDiagnostic, BuildResult};
use scriptpager_fs::FileSystem;

pub fn load_source(fs: &dyn FileSystem, path: &Path) -> BuildResult<ArcStr> {
  fs.read_to_string(path).map(ArcStr::from).map_err(|err| BuildDiagnostic::io(path, err).into())
}
