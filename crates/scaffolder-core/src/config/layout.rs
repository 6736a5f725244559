//! Directory layout for generated files

use crate::scaffold::ModuleName;
use std::path::{Path, PathBuf};

/// Directory holding one sub-directory of view components per module
pub const COMPONENTS_ROOT: &str = "src/components";

/// Directory holding the state slices
pub const REDUX_ROOT: &str = "src/redux";

/// Extension of generated view components
pub const VIEW_EXTENSION: &str = "tsx";

/// Extension of generated state slices
pub const SLICE_EXTENSION: &str = "ts";

/// Where each generated file is placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    /// Project directory every other path is joined onto
    pub root: PathBuf,

    /// Components root, relative to `root`
    pub components_root: PathBuf,

    /// Redux root, relative to `root`
    pub redux_root: PathBuf,

    /// Extension for view component files (without the dot)
    pub view_extension: String,

    /// Extension for slice files (without the dot)
    pub slice_extension: String,
}

impl Default for ScaffoldLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            components_root: PathBuf::from(COMPONENTS_ROOT),
            redux_root: PathBuf::from(REDUX_ROOT),
            view_extension: VIEW_EXTENSION.to_string(),
            slice_extension: SLICE_EXTENSION.to_string(),
        }
    }
}

impl ScaffoldLayout {
    /// Use a different project directory, keeping the relative roots
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// `<root>/<components_root>/<Name>`
    pub fn component_dir(&self, name: &ModuleName) -> PathBuf {
        self.root.join(&self.components_root).join(name.as_str())
    }

    /// `<root>/<components_root>/<Name>/<Name><suffix>.<view_extension>`
    pub fn component_path(&self, name: &ModuleName, suffix: &str) -> PathBuf {
        self.component_dir(name).join(format!(
            "{}{}.{}",
            name.as_str(),
            suffix,
            self.view_extension
        ))
    }

    /// `<root>/<redux_root>/<name>Slice.<slice_extension>`
    pub fn slice_path(&self, name: &ModuleName) -> PathBuf {
        self.root.join(&self.redux_root).join(format!(
            "{}Slice.{}",
            name.lowercase(),
            self.slice_extension
        ))
    }

    /// Strip the project root for display, falling back to the full path
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
