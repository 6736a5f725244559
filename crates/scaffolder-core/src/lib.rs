//! Scaffolder Core - Shared library for CRUD module scaffolding CLIs
//!
//! This library renders and writes the boilerplate for one CRUD feature module:
//! four React view components (list, form, details, edit) and one Redux Toolkit
//! state slice.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure template rendering and file planning
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, `ScaffoldLayout`, and the sequential writer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompt (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{create_module, ModuleName, ScaffoldLayout};
//!
//! let name = ModuleName::parse("Users")?;
//! let created = create_module(&ScaffoldLayout::default(), &name, |file| {
//!     println!("{}", file.path.display());
//!     Ok(())
//! })
//! .await?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldLayout;
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use scaffold::{create_module, plan_module, CreatedFile, FileSpec, ModuleName};
pub use templates::{render, TemplateKind};

#[cfg(feature = "tui")]
pub use tui::run;
