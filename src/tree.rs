use crate::errors::IoError;
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TreeError {
    #[error("I/O error within tree domain")]
    #[diagnostic(code(ossature::tree::io))]
    Io(#[from] IoError),

    #[error("Unable to parse blueprint at '{}': {source}", .path.display())]
    #[diagnostic(
        code(ossature::tree::parse_toml),
        help("Top-level tables are folders, keys are subfolders (\"\" for the folder itself) and values are arrays of file names")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Subfolder name -> file names. The empty key stands for the top-level folder itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Subtree(pub IndexMap<String, Vec<String>>);
impl Subtree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `files` to `subfolder`, keeping the position of the first insertion.
    pub fn files<I, S>(mut self, subfolder: &str, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(subfolder.to_string())
            .or_default()
            .extend(files.into_iter().map(Into::into));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    pub fn file_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Top-level folder name -> [`Subtree`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tree(pub IndexMap<String, Subtree>);
impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(mut self, name: &str, subtree: Subtree) -> Self {
        self.0.insert(name.to_string(), subtree);
        self
    }

    /// The skeleton of an Express style backend.
    pub fn backend() -> Self {
        Tree::new().folder(
            "backend",
            Subtree::new()
                .files("controllers", ["authController.js", "productController.js"])
                .files("models", ["User.js", "Product.js"])
                .files("middlewares", ["authMiddleware.js", "ownerMiddleware.js"])
                .files("routes", ["authRoutes.js", "productRoutes.js"])
                .files("config", ["db.js"])
                .files("", ["server.js", ".env"]),
        )
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|error| IoError::read(path, error))?;

        log::debug!("parsing blueprint: {}", path.display());

        toml::from_str(&content).map_err(|source| TreeError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn folders(&self) -> impl Iterator<Item = (&str, &Subtree)> {
        self.0.iter().map(|(name, subtree)| (name.as_str(), subtree))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.0.values().map(Subtree::file_count).sum()
    }
}
