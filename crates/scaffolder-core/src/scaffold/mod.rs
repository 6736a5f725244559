//! Module scaffolding: names, file plans, and writing
//!
//! This module provides:
//! - `ModuleName`: the validated operator input
//! - `plan_module`: the five `FileSpec`s for a name, in write order
//! - `create_module`: sequential writing with per-file notices

pub mod name;
pub mod plan;
pub mod writer;

pub use name::ModuleName;
pub use plan::{plan_module, FileSpec};
pub use writer::{create_module, CreatedFile};
