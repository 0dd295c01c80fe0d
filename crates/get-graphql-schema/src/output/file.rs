//! Writing the rendered schema to the `--output` path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::errors::CliError;

/// The file system operations needed to save a schema.
pub trait Filesystem {
    fn current_dir(&self) -> io::Result<PathBuf>;
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Writes `schema` to `path`, resolved against the current directory, and returns the absolute path.
///
/// Missing parent directories are created. An existing file is overwritten.
pub fn print_to_file(fs: &impl Filesystem, path: &Path, schema: &str) -> Result<PathBuf, CliError> {
    let error = |source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let path = fs.current_dir().map_err(error)?.join(path);

    if let Some(parent) = path.parent().filter(|parent| !fs.exists(parent)) {
        tracing::debug!(directory = %parent.display(), "creating the output directory");
        fs.create_dir_all(parent).map_err(error)?;
    }

    fs.write(&path, schema).map_err(error)?;
    tracing::debug!(path = %path.display(), bytes = schema.len(), "schema written");

    Ok(path)
}
