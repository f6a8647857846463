//! Zip archives of release directories.

use std::env;
use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ReleaseError, Result};

/// Writes every file under `folder_path` into a deflated zip at `output_filename`.
///
/// Entries are named `{folder_name}/{relative path}` where `folder_name` is the
/// last component of `folder_path`. Directories get no entries of their own and
/// nothing is filtered out. An existing output file is replaced.
pub fn zip_folder(folder_path: impl AsRef<Path>, output_filename: impl AsRef<Path>) -> Result<()> {
    let root = absolute_root(folder_path.as_ref())?;
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("'{}' is not a directory", folder_path.as_ref().display()),
        )
        .into());
    }
    let folder_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = File::create(output_filename.as_ref())?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry?;
        if !is_archived_file(&entry) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(&root)
            .map_err(|e| ReleaseError::Io(io::Error::new(io::ErrorKind::Other, e)))?;

        zip.start_file(entry_name(&folder_name, relative), options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

/// Absolute, lexically normalized form of `path`. Symlinks are not resolved.
fn absolute_root(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut root = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                root.pop();
            }
            other => root.push(other.as_os_str()),
        }
    }
    Ok(root)
}

/// Everything except directories and links to directories.
///
/// Dangling links are kept so that opening them reports the error.
fn is_archived_file(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    !(entry.path_is_symlink() && entry.path().is_dir())
}

/// Archive entry name with `/` separators on every platform.
fn entry_name(folder_name: &str, relative: &Path) -> String {
    let mut name = folder_name.to_string();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !name.is_empty() {
                name.push('/');
            }
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}
