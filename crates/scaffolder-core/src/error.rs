//! Error types for module name validation

use thiserror::Error;

/// Reasons a module name is rejected before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaffoldError {
    /// The operator submitted an empty name
    #[error("Module name cannot be empty")]
    EmptyModuleName,

    /// The name would escape the components directory
    #[error("Module name '{name}' must not contain a path separator ('{separator}')")]
    PathSeparator { name: String, separator: char },

    /// `.` or `..`, which resolve outside the module's own directory
    #[error("Module name '{name}' is a reserved path component")]
    ReservedPathComponent { name: String },
}
