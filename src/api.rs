use crate::{
    preview::preview_as_tree,
    scaffold::{create_structure, ScaffoldError},
    tree::{Tree, TreeError},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum OssatureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] ScaffoldError),
}

/// What to scaffold and where.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the top-level folders are created in.
    pub base: PathBuf,
    /// Blueprint to read instead of the built-in backend tree.
    pub blueprint: Option<PathBuf>,
    /// Print the preview and leave the filesystem alone.
    pub dry_run: bool,
}
impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            blueprint: None,
            dry_run: false,
        }
    }
}

/// Resolves the tree described by `options` and materializes it, or only previews it on a
/// dry run.
///
/// # Errors
///
/// Returns an [`OssatureError`] if:
///
/// - The blueprint cannot be read or parsed.
/// - A directory or file cannot be created or written to.
pub fn scaffold(options: &ScaffoldOptions) -> Result<(), OssatureError> {
    let tree = match &options.blueprint {
        Some(path) => Tree::from_file(path)?,
        None => Tree::backend(),
    };

    log::debug!(
        "scaffolding {} folder(s) under {}",
        tree.len(),
        options.base.display()
    );

    if options.dry_run {
        preview_as_tree(&tree, &options.base);
    } else {
        create_structure(&options.base, &tree)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScaffoldOptions {
            base: dir.path().to_path_buf(),
            dry_run: true,
            ..Default::default()
        };

        scaffold(&options).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn blueprint_replaces_builtin_tree() {
        let dir = tempfile::tempdir().unwrap();
        let blueprint = dir.path().join("blueprint.toml");
        fs::write(&blueprint, "[worker]\njobs = [\"mail.js\"]\n").unwrap();
        let base = dir.path().join("out");

        scaffold(&ScaffoldOptions {
            base: base.clone(),
            blueprint: Some(blueprint),
            dry_run: false,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(base.join("worker/jobs/mail.js")).unwrap(),
            "// mail.js"
        );
        assert!(!base.join("backend").exists());
    }

    #[test]
    fn bad_blueprint_surfaces_tree_error() {
        let dir = tempfile::tempdir().unwrap();
        let blueprint = dir.path().join("blueprint.toml");
        fs::write(&blueprint, "backend = 3\n").unwrap();

        let result = scaffold(&ScaffoldOptions {
            base: dir.path().join("out"),
            blueprint: Some(blueprint),
            dry_run: false,
        });

        assert!(matches!(result, Err(OssatureError::Tree(_))));
        assert!(!dir.path().join("out").exists());
    }
}
