//! Operator-supplied module names

use crate::error::ScaffoldError;
use std::fmt;

/// A module name as typed by the operator
///
/// Used verbatim for component identifiers and the component directory, and
/// lowercased for the slice. No trimming or character-set normalisation is
/// applied; only empty names, names containing a path separator, and `.`/`..`
/// are refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn parse(input: impl Into<String>) -> Result<Self, ScaffoldError> {
        let name = input.into();
        if name.is_empty() {
            return Err(ScaffoldError::EmptyModuleName);
        }
        if let Some(separator) = name.chars().find(|c| matches!(c, '/' | '\\')) {
            return Err(ScaffoldError::PathSeparator { name, separator });
        }
        if name == "." || name == ".." {
            return Err(ScaffoldError::ReservedPathComponent { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier used for the slice and its file name
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
