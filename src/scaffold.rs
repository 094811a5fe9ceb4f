use crate::{
    errors::IoError,
    tree::{Subtree, Tree},
};
use miette::Diagnostic;
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(ossature::scaffold::io))]
    Io(#[from] IoError),
}

const COMMENT_MARKER: &str = "//";

/// The full content of a placeholder file.
pub fn placeholder(file_name: &str) -> String {
    format!("{} {}", COMMENT_MARKER, file_name)
}

/// Materializes `tree` under `base_path`.
///
/// Each top-level folder is created along with its subfolders and placeholder files, then a
/// confirmation line naming the folder is printed. Existing folders are kept and existing
/// files are overwritten.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first directory or file that cannot be created or
/// written. Entries created before the failure are left on disk.
pub fn create_structure(base_path: &Path, tree: &Tree) -> Result<(), ScaffoldError> {
    for (folder, subtree) in tree.folders() {
        let folder_path = base_path.join(folder);

        create_directory(&folder_path)?;

        create_subtree(&folder_path, subtree)?;

        println!("✅ Dossier {} créé avec ses sous-dossiers et fichiers.", folder);
    }

    Ok(())
}

fn create_subtree(folder_path: &Path, subtree: &Subtree) -> Result<(), ScaffoldError> {
    for (subfolder, files) in subtree.entries() {
        // joining "" leaves the path as is
        let subfolder_path = folder_path.join(subfolder);

        create_directory(&subfolder_path)?;

        for file_name in files {
            write_placeholder(&subfolder_path.join(file_name), file_name)?;
        }
    }

    Ok(())
}

/// Creates `path` and any missing parents. An existing directory is not an error.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|error| IoError::mkdir(path, error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}

/// Creates or truncates `path` and stamps it with the placeholder comment.
fn write_placeholder(path: &Path, file_name: &str) -> Result<(), ScaffoldError> {
    let mut file = File::create(path).map_err(|error| IoError::write(path, error))?;

    file.write_all(placeholder(file_name).as_bytes())
        .map_err(|error| IoError::write(path, error))?;

    log::debug!("write {}", path.display());

    Ok(())
}
